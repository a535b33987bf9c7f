//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A template file the operation cannot do without is missing.
    #[error("Template not found: {path}")]
    TemplateMissing { path: String },

    /// Reading from the template store failed.
    #[error("Template store error at {path}: {reason}")]
    TemplateStoreError { path: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A template directory was configured but does not exist.
    #[error("Template directory not found: {}", path.display())]
    TemplateDirNotFound { path: PathBuf },

    /// Store access failed (lock poisoned, etc.).
    #[error("Template store lock poisoned")]
    StoreLockError,

    /// The interactive prompt could not be shown or read.
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// A prompt was needed but the build or terminal cannot show one.
    #[error("Interactive prompt unavailable: {reason}")]
    PromptUnavailable { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateMissing { path } => vec![
                format!("The packaged template '{path}' is missing"),
                "Reinstall uibin or point --templates at a complete template tree".into(),
            ],
            Self::TemplateStoreError { path, .. } => vec![
                format!("Failed to read template: {path}"),
                "Check that the template directory is readable".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
                "Files written before the failure were left in place; re-running is safe".into(),
            ],
            Self::TemplateDirNotFound { path } => vec![
                format!("Check that '{}' exists", path.display()),
                "Fix --templates, templates.local_path or UIBIN_TEMPLATES_DIR".into(),
                "Omit them to use the built-in templates".into(),
            ],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Run in an interactive terminal".into(),
                "Or pass --yes and name the components explicitly".into(),
            ],
            Self::PromptUnavailable { .. } => vec![
                "Pass --yes to skip confirmation".into(),
                "Name components explicitly, e.g. uibin add Button".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateMissing { .. } => ErrorCategory::NotFound,
            Self::TemplateStoreError { .. }
            | Self::FilesystemError { .. }
            | Self::StoreLockError
            | Self::PromptFailed { .. } => ErrorCategory::Internal,
            Self::PromptUnavailable { .. } | Self::TemplateDirNotFound { .. } => {
                ErrorCategory::Configuration
            }
        }
    }
}
