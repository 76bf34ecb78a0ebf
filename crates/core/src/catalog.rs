use std::collections::BTreeSet;
use thiserror::Error;

use crate::bank;
use crate::model::{Difficulty, Question, QuestionId, Topic, TopicId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("duplicate topic id: {0}")]
    DuplicateTopic(TopicId),

    #[error("duplicate question id: {0}")]
    DuplicateQuestion(QuestionId),

    #[error("question {question} references unknown topic {topic}")]
    UnknownTopic {
        question: QuestionId,
        topic: TopicId,
    },
}

//
// ─── SEARCH ────────────────────────────────────────────────────────────────────
//

/// One hit from a free-text search over the bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub question: Question,
    pub topic_name: String,
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Immutable, validated index over the topic set and question bank.
///
/// Constructed once at process start and shared read-only for the process
/// lifetime; every id is unique and every question references a known topic.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    topics: Vec<Topic>,
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Validates and indexes the given topics and questions.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on duplicate topic/question ids or a question
    /// referencing a topic that is not in the set.
    pub fn new(topics: Vec<Topic>, questions: Vec<Question>) -> Result<Self, CatalogError> {
        let mut topic_ids = BTreeSet::new();
        for topic in &topics {
            if !topic_ids.insert(topic.id.clone()) {
                return Err(CatalogError::DuplicateTopic(topic.id.clone()));
            }
        }

        let mut question_ids = BTreeSet::new();
        for question in &questions {
            if !question_ids.insert(question.id.clone()) {
                return Err(CatalogError::DuplicateQuestion(question.id.clone()));
            }
            if !topic_ids.contains(&question.topic_id) {
                return Err(CatalogError::UnknownTopic {
                    question: question.id.clone(),
                    topic: question.topic_id.clone(),
                });
            }
        }

        Ok(Self { topics, questions })
    }

    /// The built-in bank: the fixed topic set plus its curated questions.
    ///
    /// # Panics
    ///
    /// Panics if the built-in data fails validation, which would be a defect
    /// in the bank itself.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(bank::topics(), bank::questions()).expect("built-in bank should validate")
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn topic(&self, topic_id: &TopicId) -> Option<&Topic> {
        self.topics.iter().find(|t| &t.id == topic_id)
    }

    /// Topic display name, or "General" for an id outside the fixed set.
    #[must_use]
    pub fn topic_name(&self, topic_id: &TopicId) -> &str {
        self.topic(topic_id).map_or("General", |t| t.name.as_str())
    }

    /// Questions for one (topic, level) pair, in bank order.
    #[must_use]
    pub fn questions_for(&self, topic_id: &TopicId, level: Difficulty) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| &q.topic_id == topic_id && q.difficulty == level)
            .collect()
    }

    #[must_use]
    pub fn level_count(&self, topic_id: &TopicId, level: Difficulty) -> usize {
        self.questions
            .iter()
            .filter(|q| &q.topic_id == topic_id && q.difficulty == level)
            .count()
    }

    #[must_use]
    pub fn topic_count(&self, topic_id: &TopicId) -> usize {
        self.questions
            .iter()
            .filter(|q| &q.topic_id == topic_id)
            .count()
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.questions.len()
    }

    /// Whether the bank holds this exact (topic, level, question) triple.
    ///
    /// The progress layer uses this to reject ids that would silently inflate
    /// completion percentages.
    #[must_use]
    pub fn contains(
        &self,
        topic_id: &TopicId,
        level: Difficulty,
        question_id: &QuestionId,
    ) -> bool {
        self.questions
            .iter()
            .any(|q| &q.id == question_id && &q.topic_id == topic_id && q.difficulty == level)
    }

    /// Case-insensitive substring search over prompt and answer text.
    ///
    /// A blank query yields no results.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.questions
            .iter()
            .filter(|q| q.matches(&needle))
            .map(|q| SearchResult {
                question: q.clone(),
                topic_name: self.topic_name(&q.topic_id).to_string(),
            })
            .collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
