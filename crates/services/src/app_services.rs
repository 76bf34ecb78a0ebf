use std::sync::Arc;

use prep_core::QuestionCatalog;
use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::explanation_service::ExplanationService;
use crate::progress_service::ProgressService;

/// Assembles the app-facing services around one storage backend.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<QuestionCatalog>,
    progress: Arc<ProgressService>,
    explanations: Arc<ExplanationService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(storage).await)
    }

    /// Build services over an already-constructed storage backend.
    pub async fn from_storage(storage: Storage) -> Self {
        let catalog = Arc::new(QuestionCatalog::builtin());
        let progress = Arc::new(
            ProgressService::load(Arc::clone(&catalog), Arc::clone(&storage.progress)).await,
        );
        let explanations = Arc::new(ExplanationService::from_env());

        Self {
            catalog,
            progress,
            explanations,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<QuestionCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn explanations(&self) -> Arc<ExplanationService> {
        Arc::clone(&self.explanations)
    }
}
