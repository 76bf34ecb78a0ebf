use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::ids::{QuestionId, TopicId};

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Difficulty tier partitioning the questions within a topic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// All tiers in ascending order.
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Basic,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    /// Canonical label, also the persisted serde name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Basic => "Basic",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error type for parsing a `Difficulty` from a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDifficultyError {
    raw: String,
}

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown difficulty tier: {}", self.raw)
    }
}

impl std::error::Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Basic" => Ok(Difficulty::Basic),
            "Intermediate" => Ok(Difficulty::Intermediate),
            "Advanced" => Ok(Difficulty::Advanced),
            other => Err(ParseDifficultyError {
                raw: other.to_string(),
            }),
        }
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Optional runnable snippet attached to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSnippet {
    pub code: String,
    pub language: String,
}

/// An immutable interview question record.
///
/// Built at process start from the built-in bank; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub topic_id: TopicId,
    pub difficulty: Difficulty,
    pub prompt: String,
    pub answer: String,
    pub snippet: Option<CodeSnippet>,
}

impl Question {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        topic_id: impl Into<String>,
        difficulty: Difficulty,
        prompt: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: QuestionId::new(id),
            topic_id: TopicId::new(topic_id),
            difficulty,
            prompt: prompt.into(),
            answer: answer.into(),
            snippet: None,
        }
    }

    #[must_use]
    pub fn with_snippet(mut self, code: impl Into<String>, language: impl Into<String>) -> Self {
        self.snippet = Some(CodeSnippet {
            code: code.into(),
            language: language.into(),
        });
        self
    }

    /// Case-insensitive containment over prompt and answer text.
    ///
    /// `needle` must already be lowercased by the caller.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        self.prompt.to_lowercase().contains(needle) || self.answer.to_lowercase().contains(needle)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_label_roundtrip() {
        for tier in Difficulty::ALL {
            let parsed: Difficulty = tier.label().parse().unwrap();
            assert_eq!(parsed, tier);
        }
    }

    #[test]
    fn difficulty_rejects_unknown_tier() {
        assert!("expert".parse::<Difficulty>().is_err());
        assert!("basic".parse::<Difficulty>().is_err());
    }

    #[test]
    fn question_matches_is_case_insensitive() {
        let q = Question::new(
            "l-b-1",
            "linux",
            Difficulty::Basic,
            "What is the \"root\" user?",
            "The superuser account with full access to all commands and files.",
        );
        assert!(q.matches("root"));
        assert!(q.matches("superuser"));
        assert!(!q.matches("kubernetes"));
    }

    #[test]
    fn question_snippet_builder_attaches_language() {
        let q = Question::new("l-b-2", "linux", Difficulty::Basic, "Hidden files?", "ls -a")
            .with_snippet("ls -a", "bash");
        let snippet = q.snippet.unwrap();
        assert_eq!(snippet.code, "ls -a");
        assert_eq!(snippet.language, "bash");
    }
}
