// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so reports can keep a copy)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Component '{name}' not found. Available components: {}", available.join(", "))]
    UnknownComponent {
        name: String,
        available: Vec<&'static str>,
    },

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("Absolute paths not allowed in templates: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("No auxiliary bundle registered for '{0}'")]
    UnknownBundle(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownComponent { name, available } => {
                let mut suggestions = vec![
                    format!("'{name}' is not a uibin component (names are case-sensitive)"),
                    "Available components:".into(),
                ];
                for component in available {
                    suggestions.push(format!("  • {component}"));
                }
                suggestions.push("Use 'all' to add every component: uibin add all".into());
                suggestions
            }
            Self::InvalidLayout(msg) => vec![
                "Check the [layout] section of your uibin.toml".into(),
                format!("Details: {msg}"),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("Template entry '{path}' escapes the template root"),
                "Template trees may only contain relative paths".into(),
            ],
            Self::UnknownBundle(_) => vec!["Run 'uibin list' to see the bundle table".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownComponent { .. }
            | Self::InvalidLayout(_)
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Validation,
            Self::UnknownBundle(_) => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
