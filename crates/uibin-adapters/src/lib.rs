//! Infrastructure adapters for uibin.
//!
//! This crate implements the ports defined in `uibin-core::application::ports`
//! that touch the disk: the target project's filesystem and the template
//! stores. Prompts and progress live in the CLI.

pub mod builtin_templates;
pub mod filesystem;
pub mod template_source;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_source::{TemplateOrigin, TemplateSource, discover};
pub use template_store::{DirectoryTemplateStore, InMemoryStore};
