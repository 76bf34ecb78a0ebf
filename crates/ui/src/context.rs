use std::sync::Arc;

use prep_core::QuestionCatalog;
use services::{ExplanationService, ProgressService};

/// What the composition root must provide to the views.
pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<QuestionCatalog>;
    fn progress(&self) -> Arc<ProgressService>;
    fn explanations(&self) -> Arc<ExplanationService>;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<QuestionCatalog>,
    progress: Arc<ProgressService>,
    explanations: Arc<ExplanationService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            progress: app.progress(),
            explanations: app.explanations(),
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

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
