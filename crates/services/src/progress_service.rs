use std::sync::{Arc, Mutex, PoisonError};

use prep_core::QuestionCatalog;
use prep_core::model::{Difficulty, LevelProgress, QuestionId, TopicId, UserProgress};
use storage::repository::ProgressSnapshotRepository;

use crate::error::ProgressError;

/// Single source of truth for completion state.
///
/// Owns the `UserProgress` mapping; the view layer only reads snapshots and
/// calls the mutation operations here. Every mutation persists the whole
/// mapping before returning, so a restart observes at least the state of the
/// last completed call.
pub struct ProgressService {
    catalog: Arc<QuestionCatalog>,
    repository: Arc<dyn ProgressSnapshotRepository>,
    progress: Mutex<UserProgress>,
}

impl ProgressService {
    /// Build the service from whatever the repository currently holds.
    ///
    /// Fails open: a missing snapshot starts empty, and an unavailable or
    /// corrupt snapshot is logged and replaced by an empty mapping. Losing
    /// progress is preferable to refusing to start.
    pub async fn load(
        catalog: Arc<QuestionCatalog>,
        repository: Arc<dyn ProgressSnapshotRepository>,
    ) -> Self {
        let progress = match repository.load().await {
            Ok(Some(progress)) => progress,
            Ok(None) => UserProgress::new(),
            Err(err) => {
                tracing::warn!(error = %err, "progress snapshot unreadable, starting fresh");
                UserProgress::new()
            }
        };

        Self {
            catalog,
            repository,
            progress: Mutex::new(progress),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Mark a question complete for its (topic, level) pair.
    ///
    /// Idempotent: returns `Ok(false)` without persisting when the id is
    /// already present. The id must belong to the stated pair; a foreign id
    /// would silently inflate percentage math, so it is rejected instead.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::UnknownQuestion` when the bank has no such
    /// question under that topic and level.
    pub async fn mark_completed(
        &self,
        topic_id: &TopicId,
        level: Difficulty,
        question_id: QuestionId,
    ) -> Result<bool, ProgressError> {
        if !self.catalog.contains(topic_id, level, &question_id) {
            return Err(ProgressError::UnknownQuestion {
                question: question_id,
                topic: topic_id.clone(),
                level,
            });
        }

        let Some(snapshot) = ({
            let mut guard = self.lock();
            guard
                .mark_completed(topic_id, level, question_id)
                .then(|| guard.clone())
        }) else {
            return Ok(false);
        };

        self.persist(&snapshot).await;
        Ok(true)
    }

    /// Clear the completed set for one (topic, level) pair.
    ///
    /// A topic with no entry is a no-op and nothing is persisted. Returns
    /// whether anything changed.
    pub async fn reset_level(&self, topic_id: &TopicId, level: Difficulty) -> bool {
        let Some(snapshot) = ({
            let mut guard = self.lock();
            guard.reset_level(topic_id, level).then(|| guard.clone())
        }) else {
            return false;
        };

        self.persist(&snapshot).await;
        true
    }

    /// Replace the entire mapping with an empty one. Irreversible.
    pub async fn reset_all(&self) {
        let snapshot = {
            let mut guard = self.lock();
            guard.reset_all();
            guard.clone()
        };
        self.persist(&snapshot).await;
    }

    /// A point-in-time copy of the full mapping.
    #[must_use]
    pub fn snapshot(&self) -> UserProgress {
        self.lock().clone()
    }

    /// Rounded completion percentage for a topic, against the bank's count.
    #[must_use]
    pub fn topic_percentage(&self, topic_id: &TopicId) -> u8 {
        let total = self.catalog.topic_count(topic_id);
        self.lock().topic_percentage(topic_id, total)
    }

    /// Completed count and percentage for one (topic, level) pair.
    #[must_use]
    pub fn level_progress(&self, topic_id: &TopicId, level: Difficulty) -> LevelProgress {
        let total = self.catalog.level_count(topic_id, level);
        self.lock().level_progress(topic_id, level, total)
    }

    /// Completed ids summed across every topic and tier.
    #[must_use]
    pub fn completed_total(&self) -> usize {
        self.lock().completed_total()
    }

    /// Rounded completion percentage across the whole bank.
    #[must_use]
    pub fn overall_percentage(&self) -> u8 {
        let total = self.catalog.total_count();
        self.lock().overall_percentage(total)
    }

    /// Whether one question is already marked complete.
    #[must_use]
    pub fn is_completed(
        &self,
        topic_id: &TopicId,
        level: Difficulty,
        question_id: &QuestionId,
    ) -> bool {
        self.lock().is_completed(topic_id, level, question_id)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, UserProgress> {
        // A panic while holding the lock leaves valid (if possibly stale)
        // state; recover rather than poisoning every later read.
        self.progress.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn persist(&self, snapshot: &UserProgress) {
        // Durability loss is non-fatal: the in-memory mapping stays
        // authoritative for the rest of the session.
        if let Err(err) = self.repository.save(snapshot).await {
            tracing::warn!(error = %err, "failed to persist progress snapshot");
        }
    }
}
