//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `uibin-adapters` crate provides the filesystem and template stores;
//! the CLI provides the prompt and progress implementations.

use std::path::Path;

use crate::domain::Component;
use crate::error::UibinResult;

/// One file of a template bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Path relative to the bundle root, always `/`-separated.
    pub relative: String,
    /// Raw bytes, copied verbatim unless rewritten.
    pub contents: Vec<u8>,
}

impl TemplateFile {
    pub fn new(relative: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            relative: relative.into(),
            contents: contents.into(),
        }
    }
}

/// Port for filesystem operations on the target project.
///
/// Implemented by:
/// - `uibin_adapters::filesystem::LocalFilesystem` (production)
/// - `uibin_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> UibinResult<()>;

    /// Create or overwrite a file.
    fn write_file(&self, path: &Path, contents: &[u8]) -> UibinResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the packaged, read-only template trees.
///
/// Paths are `/`-separated and relative to the template root, e.g.
/// `components/Button` or `app/styles.css`.
///
/// Implemented by:
/// - `uibin_adapters::template_store::InMemoryStore` (built-in assets)
/// - `uibin_adapters::template_store::DirectoryTemplateStore` (on disk)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Every file under `root`, recursively, hidden files included, sorted by
    /// relative path. `None` when `root` does not exist.
    fn files(&self, root: &str) -> UibinResult<Option<Vec<TemplateFile>>>;

    /// A single file, `None` when it does not exist.
    fn read(&self, path: &str) -> UibinResult<Option<Vec<u8>>>;

    /// Human-readable location of `path`, for guidance messages.
    fn locate(&self, path: &str) -> String;
}

/// Port for interactive questions.
#[cfg_attr(test, mockall::automock)]
pub trait Prompt {
    /// Ask a yes/no question.
    fn confirm(&self, message: &str, default: bool) -> UibinResult<bool>;

    /// Let the user pick components. An empty vec means nothing was chosen
    /// or the picker was cancelled.
    fn select_components(&self, available: &[Component]) -> UibinResult<Vec<Component>>;
}

/// Port for progress display while files are copied.
#[cfg_attr(test, mockall::automock)]
pub trait ProgressReporter {
    fn start(&self, message: &str);

    /// A non-fatal problem; the operation continues.
    fn warn(&self, message: &str);

    fn finish(&self, message: &str);

    /// The operation aborted; clear any spinner.
    fn fail(&self, message: &str);
}
