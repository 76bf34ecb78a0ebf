//! Shared error types for the services crate.

use thiserror::Error;

use prep_core::model::{Difficulty, QuestionId, TopicId};
use storage::sqlite::SqliteInitError;

/// Errors emitted by `ExplanationService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExplanationError {
    #[error("explanations are not configured")]
    Disabled,
    #[error("explanation service returned an empty response")]
    EmptyResponse,
    #[error("explanation request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("question {question} does not belong to topic {topic} at {level}")]
    UnknownQuestion {
        question: QuestionId,
        topic: TopicId,
        level: Difficulty,
    },
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
