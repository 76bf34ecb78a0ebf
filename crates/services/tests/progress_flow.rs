use std::sync::Arc;

use prep_core::QuestionCatalog;
use prep_core::model::{Difficulty, QuestionId, TopicId, UserProgress};
use services::{ProgressError, ProgressService};
use storage::repository::{InMemoryRepository, ProgressSnapshotRepository, StorageError};

fn linux() -> TopicId {
    TopicId::new("linux")
}

async fn service_over(repo: &InMemoryRepository) -> ProgressService {
    let catalog = Arc::new(QuestionCatalog::builtin());
    ProgressService::load(catalog, Arc::new(repo.clone())).await
}

#[tokio::test]
async fn marking_three_of_ten_basic_questions_yields_thirty_percent() {
    let repo = InMemoryRepository::new();
    let service = service_over(&repo).await;

    for raw in ["l-b-1", "l-b-2", "l-b-3"] {
        let changed = service
            .mark_completed(&linux(), Difficulty::Basic, QuestionId::new(raw))
            .await
            .unwrap();
        assert!(changed);
    }

    let level = service.level_progress(&linux(), Difficulty::Basic);
    assert_eq!(level.completed, 3);
    assert_eq!(level.percentage, 30);
}

#[tokio::test]
async fn repeated_marks_change_nothing_after_the_first() {
    let repo = InMemoryRepository::new();
    let service = service_over(&repo).await;
    let id = QuestionId::new("l-b-1");

    assert!(
        service
            .mark_completed(&linux(), Difficulty::Basic, id.clone())
            .await
            .unwrap()
    );
    assert!(
        !service
            .mark_completed(&linux(), Difficulty::Basic, id)
            .await
            .unwrap()
    );
    assert_eq!(service.level_progress(&linux(), Difficulty::Basic).completed, 1);
}

#[tokio::test]
async fn foreign_question_ids_are_rejected() {
    let repo = InMemoryRepository::new();
    let service = service_over(&repo).await;

    // Right id, wrong tier.
    let err = service
        .mark_completed(&linux(), Difficulty::Advanced, QuestionId::new("l-b-1"))
        .await
        .unwrap_err();
    assert!(matches!(err, ProgressError::UnknownQuestion { .. }));

    // Unknown id outright.
    let err = service
        .mark_completed(&linux(), Difficulty::Basic, QuestionId::new("nope"))
        .await
        .unwrap_err();
    assert!(matches!(err, ProgressError::UnknownQuestion { .. }));

    assert_eq!(service.completed_total(), 0);
}

#[tokio::test]
async fn topic_percentage_spans_all_tiers() {
    let repo = InMemoryRepository::new();
    let service = service_over(&repo).await;

    // 2 basic + 1 intermediate out of the 20 linux questions = 15%.
    for (level, raw) in [
        (Difficulty::Basic, "l-b-1"),
        (Difficulty::Basic, "l-b-2"),
        (Difficulty::Intermediate, "l-i-1"),
    ] {
        service
            .mark_completed(&linux(), level, QuestionId::new(raw))
            .await
            .unwrap();
    }

    assert_eq!(service.topic_percentage(&linux()), 15);
}

#[tokio::test]
async fn progress_survives_a_restart() {
    let repo = InMemoryRepository::new();

    {
        let service = service_over(&repo).await;
        service
            .mark_completed(&linux(), Difficulty::Basic, QuestionId::new("l-b-1"))
            .await
            .unwrap();
    }

    // A fresh service over the same repository observes the last mutation.
    let reborn = service_over(&repo).await;
    assert_eq!(reborn.level_progress(&linux(), Difficulty::Basic).completed, 1);
}

#[tokio::test]
async fn reset_level_clears_and_persists() {
    let repo = InMemoryRepository::new();
    let service = service_over(&repo).await;

    service
        .mark_completed(&linux(), Difficulty::Basic, QuestionId::new("l-b-1"))
        .await
        .unwrap();
    assert!(service.reset_level(&linux(), Difficulty::Basic).await);

    let level = service.level_progress(&linux(), Difficulty::Basic);
    assert_eq!(level.completed, 0);
    assert_eq!(level.percentage, 0);

    let reborn = service_over(&repo).await;
    assert_eq!(reborn.level_progress(&linux(), Difficulty::Basic).completed, 0);
}

#[tokio::test]
async fn reset_level_without_an_entry_is_a_noop() {
    let repo = InMemoryRepository::new();
    let service = service_over(&repo).await;

    assert!(!service.reset_level(&linux(), Difficulty::Basic).await);
    // Nothing was persisted for the no-op.
    assert!(repo.raw().is_none());
}

#[tokio::test]
async fn reset_all_empties_every_topic() {
    let repo = InMemoryRepository::new();
    let service = service_over(&repo).await;

    service
        .mark_completed(&linux(), Difficulty::Basic, QuestionId::new("l-b-1"))
        .await
        .unwrap();
    service
        .mark_completed(
            &TopicId::new("docker"),
            Difficulty::Advanced,
            QuestionId::new("dk-a-1"),
        )
        .await
        .unwrap();

    service.reset_all().await;
    assert_eq!(service.completed_total(), 0);
    assert_eq!(service.topic_percentage(&linux()), 0);

    let reborn = service_over(&repo).await;
    assert_eq!(reborn.completed_total(), 0);
}

#[tokio::test]
async fn corrupt_snapshot_fails_open_to_empty() {
    let repo = InMemoryRepository::new();
    repo.seed_raw("{\"linux\": 42} garbage");

    let service = service_over(&repo).await;
    assert_eq!(service.completed_total(), 0);

    // The store stays usable after the recovery.
    service
        .mark_completed(&linux(), Difficulty::Basic, QuestionId::new("l-b-1"))
        .await
        .unwrap();
    assert_eq!(service.level_progress(&linux(), Difficulty::Basic).completed, 1);
}

struct FailingRepo;

#[async_trait::async_trait]
impl ProgressSnapshotRepository for FailingRepo {
    async fn load(&self) -> Result<Option<UserProgress>, StorageError> {
        Err(StorageError::Connection("down".into()))
    }

    async fn save(&self, _progress: &UserProgress) -> Result<(), StorageError> {
        Err(StorageError::Connection("down".into()))
    }
}

#[tokio::test]
async fn unavailable_storage_never_fails_a_mutation() {
    let catalog = Arc::new(QuestionCatalog::builtin());
    let service = ProgressService::load(catalog, Arc::new(FailingRepo)).await;

    // Load failed open; mutations still succeed against in-memory state.
    let changed = service
        .mark_completed(&linux(), Difficulty::Basic, QuestionId::new("l-b-1"))
        .await
        .unwrap();
    assert!(changed);
    assert_eq!(service.level_progress(&linux(), Difficulty::Basic).completed, 1);

    service.reset_all().await;
    assert_eq!(service.completed_total(), 0);
}
