use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use prep_core::model::UserProgress;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for the persisted progress snapshot.
///
/// The durable collaborator is a key-value store holding the whole
/// `UserProgress` mapping as one serialized value under a single fixed key;
/// adapters own the (de)serialization so the domain type never leaks a wire
/// format. Writes are whole-snapshot and atomic at that granularity.
#[async_trait]
pub trait ProgressSnapshotRepository: Send + Sync {
    /// Fetch the persisted mapping, or `None` when nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` when the stored value does not
    /// parse, or `StorageError::Connection` for adapter failures. Callers are
    /// expected to fail open to an empty mapping on either.
    async fn load(&self) -> Result<Option<UserProgress>, StorageError>;

    /// Persist the full mapping, replacing any previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the snapshot cannot be stored.
    async fn save(&self, progress: &UserProgress) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
///
/// Stores the raw serialized string, same as the durable adapters, so tests
/// can seed corrupt values and exercise the fail-open path.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    snapshot: Arc<Mutex<Option<String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the stored value directly, bypassing serialization.
    pub fn seed_raw(&self, raw: impl Into<String>) {
        if let Ok(mut guard) = self.snapshot.lock() {
            *guard = Some(raw.into());
        }
    }

    /// The raw stored value, if any.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.snapshot.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl ProgressSnapshotRepository for InMemoryRepository {
    async fn load(&self) -> Result<Option<UserProgress>, StorageError> {
        let guard = self
            .snapshot
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let Some(raw) = guard.as_ref() else {
            return Ok(None);
        };
        let progress = serde_json::from_str(raw)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        Ok(Some(progress))
    }

    async fn save(&self, progress: &UserProgress) -> Result<(), StorageError> {
        let raw = serde_json::to_string(progress)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        let mut guard = self
            .snapshot
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(raw);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressSnapshotRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let progress: Arc<dyn ProgressSnapshotRepository> = Arc::new(repo);
        Self { progress }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::model::{Difficulty, QuestionId, TopicId};

    #[tokio::test]
    async fn empty_repository_loads_none() {
        let repo = InMemoryRepository::new();
        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn round_trips_the_full_mapping() {
        let repo = InMemoryRepository::new();
        let mut progress = UserProgress::new();
        progress.mark_completed(
            &TopicId::new("linux"),
            Difficulty::Basic,
            QuestionId::new("l-b-1"),
        );
        repo.save(&progress).await.unwrap();

        let loaded = repo.load().await.unwrap().unwrap();
        assert_eq!(loaded, progress);
    }

    #[tokio::test]
    async fn corrupt_snapshot_surfaces_serialization_error() {
        let repo = InMemoryRepository::new();
        repo.seed_raw("not json {{{");
        let err = repo.load().await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }
}
