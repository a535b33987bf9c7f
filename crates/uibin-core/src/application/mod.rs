//! Application layer for uibin.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (InstallService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. Dependency tables, layout rules and import
//! rewriting live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main service and its outcomes
pub use services::{
    CatalogEntry, InitOutcome, InitReport, InstallOutcome, InstallReport, InstallService,
    InstalledBundle, InstalledComponent, SkippedBundle, SkippedComponent, StorybookOutcome,
    StylesheetOutcome,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ProgressReporter, Prompt, TemplateFile, TemplateStore};

pub use error::ApplicationError;
