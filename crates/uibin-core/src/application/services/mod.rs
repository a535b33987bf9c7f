//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "add these components" or "prepare a project".

pub mod install_service;
pub mod report;

pub use install_service::InstallService;
pub use report::{
    CatalogEntry, InitOutcome, InitReport, InstallOutcome, InstallReport, InstalledBundle,
    InstalledComponent, SkippedBundle, SkippedComponent, StorybookOutcome, StylesheetOutcome,
};
