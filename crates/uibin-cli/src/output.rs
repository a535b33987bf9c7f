//! Terminal output for command results.
//!
//! Every human-facing line goes through [`OutputManager`] so that `--quiet`,
//! `--no-color` and `--output-format` are honoured in one place. Machine
//! output (`--output-format json`, `list --format json`) uses
//! [`OutputManager::json`], which ignores `--quiet`.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliResult, IntoCli};

/// Kind of status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Success,
    Warning,
    Info,
    Error,
}

impl Status {
    const fn symbol(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}", // ✓
            Self::Warning => "\u{26a0}", // ⚠
            Self::Info => "\u{2139}",    // ℹ
            Self::Error => "\u{2717}",   // ✗
        }
    }
}

/// Writes command output to stdout.
#[derive(Debug, Clone)]
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// `Auto` resolves to `Human` on a TTY and `Plain` otherwise; colour is
    /// only used for `Human`.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let resolved_format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            color: resolved_format == OutputFormat::Human
                && !(args.no_color || config.output.no_color),
            term: Term::stdout(),
        }
    }

    fn render(&self, status: Status, msg: &str) -> String {
        if !self.color {
            return format!("{} {msg}", status.symbol());
        }
        let symbol = status.symbol();
        match status {
            Status::Success => format!("{} {}", symbol.green().bold(), msg.green()),
            Status::Warning => format!("{} {}", symbol.yellow().bold(), msg.yellow()),
            Status::Info => format!("{} {}", symbol.blue().bold(), msg.blue()),
            Status::Error => format!("{} {}", symbol.red().bold(), msg.red()),
        }
    }

    fn status(&self, status: Status, msg: &str) -> io::Result<()> {
        if self.quiet && status != Status::Error {
            return Ok(());
        }
        self.term.write_line(&self.render(status, msg))
    }

    // ── Human output ──────────────────────────────────────────────────────

    /// Unadorned line; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn blank(&self) -> io::Result<()> {
        self.print("")
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Success, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Info, msg)
    }

    /// Not suppressed in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Error, msg)
    }

    /// Bold cyan section header.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if !self.color {
            return self.print(text);
        }
        self.print(&text.cyan().bold().to_string())
    }

    /// Code the user is meant to paste, indented two spaces per line.
    pub fn code(&self, code: &str) -> io::Result<()> {
        for line in code.lines() {
            let line = if line.is_empty() {
                String::new()
            } else if self.color {
                format!("  {}", line.bold())
            } else {
                format!("  {line}")
            };
            self.print(&line)?;
        }
        Ok(())
    }

    // ── Machine output ────────────────────────────────────────────────────

    /// Pretty JSON on stdout, regardless of `--quiet`.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> CliResult<()> {
        let json = serde_json::to_string_pretty(value)
            .with_cli_context(|| "Failed to serialise output")?;
        self.term
            .write_line(&json)
            .with_cli_context(|| "Failed to write output")
    }

    /// Raw line on stdout, regardless of `--quiet`.
    pub fn raw(&self, line: &str) -> CliResult<()> {
        self.term
            .write_line(line)
            .with_cli_context(|| "Failed to write output")
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// `true` when results should be emitted as JSON.
    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
