//! Terminal prompts for confirmation and component selection.
//!
//! Backed by `dialoguer` when the `interactive` feature is enabled. Without
//! it, or when stdin is not a terminal, every prompt fails with
//! `PromptUnavailable`.

/// Prompt implementation for the real terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "interactive")]
mod interactive {
    use std::io::IsTerminal;

    use console::Term;
    use dialoguer::{Confirm, MultiSelect, theme::ColorfulTheme};

    use uibin_core::{
        application::{ApplicationError, ports::Prompt},
        domain::{Component, catalog},
        error::UibinResult,
    };

    use super::TerminalPrompt;

    fn ensure_terminal() -> UibinResult<()> {
        if std::io::stdin().is_terminal() && std::io::stderr().is_terminal() {
            Ok(())
        } else {
            Err(ApplicationError::PromptUnavailable {
                reason: "not running in a terminal".into(),
            }
            .into())
        }
    }

    fn prompt_failed(e: dialoguer::Error) -> ApplicationError {
        ApplicationError::PromptFailed {
            reason: e.to_string(),
        }
    }

    impl Prompt for TerminalPrompt {
        fn confirm(&self, message: &str, default: bool) -> UibinResult<bool> {
            ensure_terminal()?;
            let answer = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(message)
                .default(default)
                .interact_on_opt(&Term::stderr())
                .map_err(prompt_failed)?;
            // Esc counts as "no".
            Ok(answer.unwrap_or(false))
        }

        fn select_components(&self, available: &[Component]) -> UibinResult<Vec<Component>> {
            ensure_terminal()?;
            let items: Vec<String> = available
                .iter()
                .map(|c| match catalog::find_component(*c) {
                    Some(def) => format!("{c} - {}", def.description),
                    None => c.to_string(),
                })
                .collect();

            let selection = MultiSelect::with_theme(&ColorfulTheme::default())
                .with_prompt(
                    "Select components to add\n↑↓ to move, SPACE to select, ENTER to confirm, ESC to cancel",
                )
                .items(&items)
                .interact_on_opt(&Term::stderr())
                .map_err(prompt_failed)?;

            Ok(selection
                .unwrap_or_default()
                .into_iter()
                .filter_map(|idx| available.get(idx).copied())
                .collect())
        }
    }
}

#[cfg(not(feature = "interactive"))]
mod fallback {
    use uibin_core::{
        application::{ApplicationError, ports::Prompt},
        domain::Component,
        error::{UibinError, UibinResult},
    };

    use super::TerminalPrompt;

    fn unavailable() -> UibinError {
        ApplicationError::PromptUnavailable {
            reason: "uibin was built without the 'interactive' feature".into(),
        }
        .into()
    }

    impl Prompt for TerminalPrompt {
        fn confirm(&self, _message: &str, _default: bool) -> UibinResult<bool> {
            Err(unavailable())
        }

        fn select_components(&self, _available: &[Component]) -> UibinResult<Vec<Component>> {
            Err(unavailable())
        }
    }
}
