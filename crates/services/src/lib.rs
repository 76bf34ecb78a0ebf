#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod explanation_service;
pub mod progress_service;

pub use app_services::AppServices;
pub use error::{AppServicesError, ExplanationError, ProgressError};
pub use explanation_service::{EXPLANATION_FALLBACK, ExplanationConfig, ExplanationService};
pub use progress_service::ProgressService;
