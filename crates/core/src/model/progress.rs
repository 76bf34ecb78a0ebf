use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::ids::{QuestionId, TopicId};
use crate::model::question::Difficulty;

//
// ─── PROGRESS DATA ─────────────────────────────────────────────────────────────
//

/// Completion state for one (topic, difficulty) pair.
///
/// Semantically a set: ids are unique. Insertion order is preserved but
/// carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressData {
    pub completed_question_ids: Vec<QuestionId>,
}

impl ProgressData {
    #[must_use]
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.completed_question_ids.contains(id)
    }

    /// Returns `true` if the id was newly inserted.
    pub fn insert(&mut self, id: QuestionId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.completed_question_ids.push(id);
        true
    }

    pub fn clear(&mut self) {
        self.completed_question_ids.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.completed_question_ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completed_question_ids.is_empty()
    }
}

//
// ─── TOPIC PROGRESS ────────────────────────────────────────────────────────────
//

/// Per-tier completion for one topic.
///
/// All three tiers are present as soon as the topic entry exists, so call
/// sites never branch on a missing tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicProgress {
    pub basic: ProgressData,
    pub intermediate: ProgressData,
    pub advanced: ProgressData,
}

impl TopicProgress {
    #[must_use]
    pub fn level(&self, level: Difficulty) -> &ProgressData {
        match level {
            Difficulty::Basic => &self.basic,
            Difficulty::Intermediate => &self.intermediate,
            Difficulty::Advanced => &self.advanced,
        }
    }

    pub fn level_mut(&mut self, level: Difficulty) -> &mut ProgressData {
        match level {
            Difficulty::Basic => &mut self.basic,
            Difficulty::Intermediate => &mut self.intermediate,
            Difficulty::Advanced => &mut self.advanced,
        }
    }

    /// Completed ids summed across all three tiers.
    #[must_use]
    pub fn completed_total(&self) -> usize {
        Difficulty::ALL
            .into_iter()
            .map(|level| self.level(level).len())
            .sum()
    }
}

//
// ─── USER PROGRESS ─────────────────────────────────────────────────────────────
//

/// Result of a per-level progress query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelProgress {
    pub completed: usize,
    pub percentage: u8,
}

/// The full mapping from topic to per-tier completion state.
///
/// Persisted as a whole under a single storage key. Topic entries are created
/// lazily on first mutation; readers treat a missing entry as zero
/// completions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProgress {
    topics: BTreeMap<TopicId, TopicProgress>,
}

impl UserProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn topic(&self, topic_id: &TopicId) -> Option<&TopicProgress> {
        self.topics.get(topic_id)
    }

    /// Get-or-default accessor: creates the topic entry on first use.
    pub fn topic_mut(&mut self, topic_id: &TopicId) -> &mut TopicProgress {
        self.topics.entry(topic_id.clone()).or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TopicId, &TopicProgress)> {
        self.topics.iter()
    }

    /// Marks a question complete. Idempotent: returns `true` only when the
    /// id was newly inserted.
    pub fn mark_completed(
        &mut self,
        topic_id: &TopicId,
        level: Difficulty,
        question_id: QuestionId,
    ) -> bool {
        self.topic_mut(topic_id).level_mut(level).insert(question_id)
    }

    /// Clears the completed-id set for one (topic, level) pair.
    ///
    /// Returns `true` when anything was removed; a topic with no entry is a
    /// no-op and does not create one.
    pub fn reset_level(&mut self, topic_id: &TopicId, level: Difficulty) -> bool {
        let Some(topic) = self.topics.get_mut(topic_id) else {
            return false;
        };
        let data = topic.level_mut(level);
        if data.is_empty() {
            return false;
        }
        data.clear();
        true
    }

    /// Replaces the entire mapping with an empty one.
    pub fn reset_all(&mut self) {
        self.topics.clear();
    }

    #[must_use]
    pub fn is_completed(
        &self,
        topic_id: &TopicId,
        level: Difficulty,
        question_id: &QuestionId,
    ) -> bool {
        self.topic(topic_id)
            .is_some_and(|t| t.level(level).contains(question_id))
    }

    #[must_use]
    pub fn completed_in_level(&self, topic_id: &TopicId, level: Difficulty) -> usize {
        self.topic(topic_id).map_or(0, |t| t.level(level).len())
    }

    #[must_use]
    pub fn completed_in_topic(&self, topic_id: &TopicId) -> usize {
        self.topic(topic_id).map_or(0, TopicProgress::completed_total)
    }

    /// Completed ids summed across every topic and tier.
    #[must_use]
    pub fn completed_total(&self) -> usize {
        self.topics.values().map(TopicProgress::completed_total).sum()
    }

    /// Rounded integer percentage of `total_count` completed over the whole
    /// mapping.
    #[must_use]
    pub fn overall_percentage(&self, total_count: usize) -> u8 {
        percentage(self.completed_total(), total_count)
    }

    /// Rounded integer percentage of `total_count` completed for the topic.
    ///
    /// Total function: a missing topic entry counts as zero and a zero
    /// `total_count` yields 0 rather than dividing.
    #[must_use]
    pub fn topic_percentage(&self, topic_id: &TopicId, total_count: usize) -> u8 {
        percentage(self.completed_in_topic(topic_id), total_count)
    }

    /// Completed count and rounded percentage for one (topic, level) pair.
    #[must_use]
    pub fn level_progress(
        &self,
        topic_id: &TopicId,
        level: Difficulty,
        total_count: usize,
    ) -> LevelProgress {
        let completed = self.completed_in_level(topic_id, level);
        LevelProgress {
            completed,
            percentage: percentage(completed, total_count),
        }
    }
}

/// Round-half-up integer percentage; 0 when `total` is 0.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn linux() -> TopicId {
        TopicId::new("linux")
    }

    fn qid(raw: &str) -> QuestionId {
        QuestionId::new(raw)
    }

    #[test]
    fn mark_completed_is_idempotent() {
        let mut progress = UserProgress::new();
        assert!(progress.mark_completed(&linux(), Difficulty::Basic, qid("l-b-1")));
        assert!(!progress.mark_completed(&linux(), Difficulty::Basic, qid("l-b-1")));
        assert_eq!(progress.completed_in_level(&linux(), Difficulty::Basic), 1);
    }

    #[test]
    fn topic_entry_is_created_lazily() {
        let mut progress = UserProgress::new();
        assert!(progress.topic(&linux()).is_none());
        progress.mark_completed(&linux(), Difficulty::Advanced, qid("l-a-1"));
        let topic = progress.topic(&linux()).unwrap();
        assert_eq!(topic.advanced.len(), 1);
        assert!(topic.basic.is_empty());
        assert!(topic.intermediate.is_empty());
    }

    #[test]
    fn reset_level_clears_only_that_tier() {
        let mut progress = UserProgress::new();
        progress.mark_completed(&linux(), Difficulty::Basic, qid("l-b-1"));
        progress.mark_completed(&linux(), Difficulty::Intermediate, qid("l-i-1"));

        assert!(progress.reset_level(&linux(), Difficulty::Basic));
        assert_eq!(
            progress.level_progress(&linux(), Difficulty::Basic, 10),
            LevelProgress {
                completed: 0,
                percentage: 0
            }
        );
        assert_eq!(
            progress.completed_in_level(&linux(), Difficulty::Intermediate),
            1
        );
    }

    #[test]
    fn reset_level_without_entry_is_noop() {
        let mut progress = UserProgress::new();
        assert!(!progress.reset_level(&linux(), Difficulty::Basic));
        assert!(progress.topic(&linux()).is_none());
    }

    #[test]
    fn reset_all_empties_the_mapping() {
        let mut progress = UserProgress::new();
        progress.mark_completed(&linux(), Difficulty::Basic, qid("l-b-1"));
        progress.mark_completed(&TopicId::new("docker"), Difficulty::Advanced, qid("dk-a-1"));
        progress.reset_all();
        assert!(progress.is_empty());
        assert_eq!(progress.topic_percentage(&linux(), 10), 0);
    }

    #[test]
    fn level_progress_three_of_ten_is_thirty_percent() {
        let mut progress = UserProgress::new();
        for raw in ["l-b-1", "l-b-2", "l-b-3"] {
            progress.mark_completed(&linux(), Difficulty::Basic, qid(raw));
        }
        let level = progress.level_progress(&linux(), Difficulty::Basic, 10);
        assert_eq!(level.completed, 3);
        assert_eq!(level.percentage, 30);
    }

    #[test]
    fn topic_percentage_sums_across_tiers() {
        let mut progress = UserProgress::new();
        progress.mark_completed(&linux(), Difficulty::Basic, qid("l-b-1"));
        progress.mark_completed(&linux(), Difficulty::Basic, qid("l-b-2"));
        progress.mark_completed(&linux(), Difficulty::Intermediate, qid("l-i-1"));
        // round(3/15*100) = 20
        assert_eq!(progress.topic_percentage(&linux(), 15), 20);
    }

    #[test]
    fn percentage_rounds_half_up() {
        let mut progress = UserProgress::new();
        progress.mark_completed(&linux(), Difficulty::Basic, qid("l-b-1"));
        // 1/8 = 12.5% -> 13
        assert_eq!(progress.topic_percentage(&linux(), 8), 13);
    }

    #[test]
    fn zero_total_yields_zero_percentage() {
        let mut progress = UserProgress::new();
        progress.mark_completed(&linux(), Difficulty::Basic, qid("l-b-1"));
        let level = progress.level_progress(&linux(), Difficulty::Basic, 0);
        assert_eq!(level.completed, 1);
        assert_eq!(level.percentage, 0);
        assert_eq!(progress.topic_percentage(&linux(), 0), 0);
    }

    #[test]
    fn serde_roundtrip_preserves_the_mapping() {
        let mut progress = UserProgress::new();
        progress.mark_completed(&linux(), Difficulty::Basic, qid("l-b-1"));
        progress.mark_completed(&linux(), Difficulty::Advanced, qid("l-a-2"));
        progress.mark_completed(&TopicId::new("sre"), Difficulty::Intermediate, qid("sr-i-4"));

        let json = serde_json::to_string(&progress).unwrap();
        let restored: UserProgress = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, progress);
    }
}
