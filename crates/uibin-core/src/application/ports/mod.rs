//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: target project file operations
//!   - `TemplateStore`: packaged template trees
//!   - `Prompt`: confirmation and component picker
//!   - `ProgressReporter`: spinner / status lines
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, ProgressReporter, Prompt, TemplateFile, TemplateStore};

#[cfg(test)]
pub use output::{MockFilesystem, MockProgressReporter, MockPrompt, MockTemplateStore};
