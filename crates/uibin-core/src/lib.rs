//! uibin Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the uibin
//! component installer, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            uibin-cli (CLI)              │
//! │  (clap commands, prompts, spinners)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (InstallService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateStore, Prompt, …)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     uibin-adapters (Infrastructure)     │
//! │ (LocalFilesystem, DirectoryTemplateStore)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (Component, catalog, TargetLayout,      │
//! │  ImportRewriter)                        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use uibin_core::prelude::*;
//!
//! // 1. Validate the request before any I/O
//! let request = InstallRequest::from_names(&["ThemeProvider", "Button"])?
//!     .skip_confirmation(true);
//!
//! // 2. Describe the target project
//! let layout = TargetLayout::with_defaults("./my-app");
//!
//! // 3. Run the service with injected adapters
//! let service = InstallService::new(store, filesystem, prompt, progress);
//! let outcome = service.install(request, &layout)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        InitOutcome, InstallOutcome, InstallService,
        ports::{Filesystem, ProgressReporter, Prompt, TemplateFile, TemplateStore},
    };
    pub use crate::domain::{
        AuxiliaryBundle, Component, ComponentSelection, ImportRewriter, InitRequest,
        InstallRequest, LayoutConfig, TargetLayout,
    };
    pub use crate::error::{UibinError, UibinResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
