//! Command handlers.
//!
//! Each handler translates parsed arguments into core requests, calls the
//! install service, and renders the outcome. No business logic lives here.

use std::path::Path;

use tracing::debug;

use uibin_adapters::{LocalFilesystem, TemplateOrigin, discover};
use uibin_core::{
    application::{InstallService, ports::ProgressReporter},
    domain::TargetLayout,
};

use crate::{
    cli::TemplateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    progress::{SilentProgress, SpinnerProgress},
    prompt::TerminalPrompt,
};

pub mod add;
pub mod completions;
pub mod config;
pub mod init;
pub mod list;

/// Everything a command needs to talk to the install service.
pub(crate) struct Session {
    pub service: InstallService,
    pub layout: TargetLayout,
    pub origin: TemplateOrigin,
}

impl Session {
    /// Wire the real adapters for the project at `root`.
    ///
    /// `--templates` (or `UIBIN_TEMPLATES_DIR`) wins over
    /// `templates.local_path` from config.
    pub fn open(
        root: &Path,
        source: &TemplateArgs,
        config: &AppConfig,
        output: &OutputManager,
    ) -> CliResult<Self> {
        if !root.is_dir() {
            return Err(CliError::InvalidInput {
                message: format!("project directory does not exist: {}", root.display()),
                source: None,
            });
        }

        let layout =
            TargetLayout::new(root, config.layout.clone()).map_err(|e| CliError::ConfigError {
                message: e.to_string(),
                source: Some(Box::new(e)),
            })?;

        let explicit = source
            .templates
            .clone()
            .or_else(|| config.templates_dir(root));
        let templates = discover(explicit.as_deref())?;
        debug!(origin = %templates.origin, "templates resolved");

        let progress: Box<dyn ProgressReporter> = if output.is_json() {
            Box::new(SilentProgress)
        } else {
            Box::new(SpinnerProgress::new(output.clone()))
        };

        let service = InstallService::new(
            templates.store,
            Box::new(LocalFilesystem::new()),
            Box::new(TerminalPrompt::new()),
            progress,
        );

        Ok(Self {
            service,
            layout,
            origin: templates.origin,
        })
    }
}

/// `path` relative to the project root, for display.
pub(crate) fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
