//! Outcomes returned by the install service.
//!
//! These are plain data for the CLI to render; nothing here performs I/O.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{AuxiliaryBundle, Component};

/// Result of `uibin add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Files were copied (possibly with warnings).
    Completed(InstallReport),
    /// The picker was cancelled or nothing was chosen.
    NothingSelected,
    /// The user answered "no" at the confirmation prompt.
    Declined,
}

/// Per-component and per-bundle account of one install run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub components_dir: PathBuf,
    pub installed: Vec<InstalledComponent>,
    pub skipped: Vec<SkippedComponent>,
    pub bundles: Vec<InstalledBundle>,
    pub skipped_bundles: Vec<SkippedBundle>,
    pub stylesheet: Option<StylesheetOutcome>,
}

impl InstallReport {
    /// Components whose files were copied, in processing order.
    pub fn installed_components(&self) -> Vec<Component> {
        self.installed.iter().map(|c| c.component).collect()
    }

    /// Total number of files written, stylesheet included.
    pub fn files_written(&self) -> usize {
        let components: usize = self.installed.iter().map(|c| c.files.len()).sum();
        let bundles: usize = self.bundles.iter().map(|b| b.files.len()).sum();
        let stylesheet = usize::from(matches!(
            self.stylesheet,
            Some(StylesheetOutcome::Created { .. })
        ));
        components + bundles + stylesheet
    }

    pub fn has_warnings(&self) -> bool {
        !self.skipped.is_empty()
            || !self.skipped_bundles.is_empty()
            || matches!(self.stylesheet, Some(StylesheetOutcome::LeftAlone { .. }))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledComponent {
    pub component: Component,
    pub files: Vec<PathBuf>,
    /// Story files left out because `--storybook` was not given.
    pub auxiliary_skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedComponent {
    pub component: Component,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledBundle {
    pub bundle: AuxiliaryBundle,
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedBundle {
    pub bundle: AuxiliaryBundle,
    pub reason: String,
}

/// What happened to the app stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StylesheetOutcome {
    /// No stylesheet existed; the reference one was copied.
    Created { path: PathBuf },
    /// A stylesheet already existed and was not modified.
    LeftAlone {
        path: PathBuf,
        /// Where the packaged reference stylesheet can be found.
        reference: String,
        /// The reference stylesheet itself, for stores whose location is
        /// not a file the user can open.
        reference_css: Option<String>,
    },
}

/// Result of `uibin init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Completed(InitReport),
    Declined,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub components_dir: PathBuf,
    pub stylesheet: PathBuf,
    pub storybook: Option<StorybookOutcome>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorybookOutcome {
    Seeded { dir: PathBuf, files: Vec<PathBuf> },
    /// Storybook seeding is best-effort; the rest of init still succeeded.
    Failed { reason: String },
}

/// One row of `uibin list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub component: Component,
    pub description: &'static str,
    pub bundles: Vec<AuxiliaryBundle>,
    pub provides_stylesheet: bool,
    /// Whether the active template store has this component's tree.
    pub available: bool,
}
