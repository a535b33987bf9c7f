//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`LayoutConfig`] it
//! carries.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `UIBIN__LAYOUT__NAMESPACE=ui`,
//!    `UIBIN__TEMPLATES__LOCAL_PATH=./templates`, ...
//! 3. Config file: `--config FILE`, otherwise `uibin.toml` in the project
//!    root layered over the global file
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use uibin_core::domain::LayoutConfig;

use crate::error::{CliError, CliResult};

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "uibin.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where files land in the target project.
    pub layout: LayoutConfig,
    /// Template settings.
    pub templates: TemplateConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Template directory to use instead of the built-in set.
    pub local_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration for the project at `project_root`.
    ///
    /// `config_file` is the path the user passed via `--config`; when given it
    /// must exist and replaces the project and global files.
    pub fn load(config_file: Option<&Path>, project_root: &Path) -> CliResult<Self> {
        let defaults = Config::try_from(&Self::default()).map_err(config_error)?;
        let mut builder = Config::builder().add_source(defaults);

        for (path, required) in Self::file_sources(config_file, project_root) {
            debug!(path = %path.display(), required, "config file source");
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            );
        }

        let config: Self = builder
            .add_source(
                Environment::with_prefix("UIBIN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error)?;

        config
            .layout
            .validate()
            .map_err(|e| CliError::ConfigError {
                message: e.to_string(),
                source: Some(Box::new(e)),
            })?;

        Ok(config)
    }

    /// Config files to layer, lowest priority first.
    fn file_sources(config_file: Option<&Path>, project_root: &Path) -> Vec<(PathBuf, bool)> {
        match config_file {
            Some(path) => vec![(path.to_path_buf(), true)],
            None => {
                let mut sources = Vec::with_capacity(2);
                if let Some(global) = Self::global_config_path() {
                    sources.push((global, false));
                }
                sources.push((project_root.join(PROJECT_CONFIG_FILE), false));
                sources
            }
        }
    }

    /// The file `config path` reports: the explicit one, else the project
    /// file if present, else the global location.
    pub fn active_path(config_file: Option<&Path>, project_root: &Path) -> PathBuf {
        if let Some(path) = config_file {
            return path.to_path_buf();
        }
        let project = project_root.join(PROJECT_CONFIG_FILE);
        if project.exists() {
            return project;
        }
        Self::global_config_path().unwrap_or(project)
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness.
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "uibin", "uibin")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Template directory from config, resolved against the project root.
    pub fn templates_dir(&self, project_root: &Path) -> Option<PathBuf> {
        self.templates
            .local_path
            .as_ref()
            .map(|p| project_root.join(p))
    }
}

fn config_error(e: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: e.to_string(),
        source: Some(Box::new(e)),
    }
}
