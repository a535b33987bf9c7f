//! Spinner-backed progress reporting.
//!
//! The spinner draws on stderr and hides itself when stderr is not a
//! terminal. Status lines go through [`OutputManager`] so `--quiet` and
//! `--no-color` apply to them.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use uibin_core::application::ports::ProgressReporter;

use crate::output::OutputManager;

/// Progress reporter for interactive runs.
pub struct SpinnerProgress {
    bar: ProgressBar,
    output: OutputManager,
}

impl SpinnerProgress {
    pub fn new(output: OutputManager) -> Self {
        let bar = if output.is_quiet() {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
                bar.set_style(style);
            }
            bar
        };
        Self { bar, output }
    }
}

impl ProgressReporter for SpinnerProgress {
    fn start(&self, message: &str) {
        self.bar.set_message(message.to_owned());
        self.bar.enable_steady_tick(Duration::from_millis(100));
    }

    fn warn(&self, message: &str) {
        self.bar.suspend(|| {
            let _ = self.output.warning(message);
        });
    }

    fn finish(&self, message: &str) {
        self.bar.finish_and_clear();
        let _ = self.output.success(message);
    }

    fn fail(&self, message: &str) {
        self.bar.finish_and_clear();
        let _ = self.output.error(message);
    }
}

/// Progress reporter that prints nothing; used for machine-readable output.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn start(&self, _message: &str) {}

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn finish(&self, _message: &str) {}

    fn fail(&self, _message: &str) {}
}
