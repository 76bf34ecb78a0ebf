use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use crate::repository::{ProgressSnapshotRepository, StorageError};
use prep_core::model::UserProgress;

use super::SqliteRepository;

/// The single fixed storage key for the whole progress mapping.
const SNAPSHOT_KEY: &str = "devops_prep_progress";

#[async_trait]
impl ProgressSnapshotRepository for SqliteRepository {
    async fn load(&self) -> Result<Option<UserProgress>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT value
            FROM progress_snapshots
            WHERE key = ?1
            ",
        )
        .bind(SNAPSHOT_KEY)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let raw: String = row
            .try_get("value")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let progress = serde_json::from_str(&raw)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        Ok(Some(progress))
    }

    async fn save(&self, progress: &UserProgress) -> Result<(), StorageError> {
        let raw = serde_json::to_string(progress)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        sqlx::query(
            r"
            INSERT INTO progress_snapshots (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
        )
        .bind(SNAPSHOT_KEY)
        .bind(raw)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
