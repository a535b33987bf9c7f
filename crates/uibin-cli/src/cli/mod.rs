//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "uibin",
    bin_name = "uibin",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Add uibin Svelte components to your project",
    long_about = "uibin copies ready-made Svelte component templates into your \
                  SvelteKit project and rewrites their imports so they work \
                  where they land. You own the copied code.",
    after_help = "EXAMPLES:\n\
        \x20 uibin init\n\
        \x20 uibin add Button Card\n\
        \x20 uibin add ThemeProvider --yes --storybook\n\
        \x20 uibin add all -y\n\
        \x20 uibin completions bash > /usr/share/bash-completion/completions/uibin",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add components to the project.
    #[command(
        visible_alias = "a",
        about = "Add components to your project",
        after_help = "EXAMPLES:\n\
            \x20 uibin add                  # pick from a list\n\
            \x20 uibin add Button Card\n\
            \x20 uibin add ThemeProvider --storybook\n\
            \x20 uibin add all --yes"
    )]
    Add(AddArgs),

    /// Prepare the project for uibin components.
    #[command(
        about = "Set up uibin in your project",
        after_help = "EXAMPLES:\n\
            \x20 uibin init\n\
            \x20 uibin init --yes --storybook"
    )]
    Init(InitArgs),

    /// List the available components.
    #[command(
        visible_alias = "ls",
        about = "List available components",
        after_help = "EXAMPLES:\n\
            \x20 uibin list\n\
            \x20 uibin list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 uibin completions bash > ~/.local/share/bash-completion/completions/uibin\n\
            \x20 uibin completions zsh  > ~/.zfunc/_uibin\n\
            \x20 uibin completions fish > ~/.config/fish/completions/uibin.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the uibin configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 uibin config get layout.namespace\n\
            \x20 uibin config list\n\
            \x20 uibin config path"
    )]
    Config(ConfigCommands),
}

// ── shared ────────────────────────────────────────────────────────────────────

/// Where template files are read from.
#[derive(Debug, Clone, Args)]
pub struct TemplateArgs {
    /// Read templates from a directory instead of the built-in set.
    #[arg(
        long = "templates",
        value_name = "DIR",
        env = "UIBIN_TEMPLATES_DIR",
        help = "Template directory to copy from"
    )]
    pub templates: Option<PathBuf>,
}

// ── add ───────────────────────────────────────────────────────────────────────

/// Arguments for `uibin add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Component names, or `all`. Opens a picker when omitted.
    #[arg(value_name = "COMPONENT", help = "Components to add, or 'all'")]
    pub components: Vec<String>,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation")]
    pub yes: bool,

    /// Also copy Storybook stories.
    #[arg(short = 's', long = "storybook", help = "Include Storybook stories")]
    pub storybook: bool,

    #[command(flatten)]
    pub source: TemplateArgs,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `uibin init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation")]
    pub yes: bool,

    /// Seed a `.storybook/` configuration.
    #[arg(
        short = 's',
        long = "storybook",
        help = "Set up Storybook configuration"
    )]
    pub storybook: bool,

    #[command(flatten)]
    pub source: TemplateArgs,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `uibin list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,

    #[command(flatten)]
    pub source: TemplateArgs,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `uibin completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `uibin config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `layout.namespace`.
        key: String,
    },
    /// Print the effective configuration.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
