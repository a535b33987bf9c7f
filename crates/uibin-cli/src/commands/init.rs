//! `uibin init`: prepare a project for uibin components.

use tracing::{info, instrument};

use uibin_core::{
    application::{InitOutcome, StorybookOutcome},
    domain::InitRequest,
};

use super::{Session, display_path};
use crate::{
    cli::{InitArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Create the components directory and write the theme stylesheet.
#[instrument(skip_all, fields(storybook = args.storybook))]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = global
        .project_root()
        .with_cli_context(|| "Failed to resolve the project directory")?;
    let session = Session::open(&root, &args.source, &config, &output)?;
    info!(origin = %session.origin, "initialising project");

    let request = InitRequest {
        skip_confirmation: args.yes,
        with_storybook: args.storybook,
    };
    let outcome = session.service.init(request, &session.layout)?;

    let report = match outcome {
        InitOutcome::Declined => {
            if output.is_json() {
                output.json(&serde_json::json!({ "status": "declined" }))?;
            } else {
                output.warning("Initialization cancelled.")?;
            }
            return Ok(());
        }
        InitOutcome::Completed(report) => report,
    };

    if output.is_json() {
        let storybook = match &report.storybook {
            Some(StorybookOutcome::Seeded { dir, files }) => {
                serde_json::json!({ "status": "seeded", "dir": dir, "files": files })
            }
            Some(StorybookOutcome::Failed { reason }) => {
                serde_json::json!({ "status": "failed", "reason": reason })
            }
            None => serde_json::Value::Null,
        };
        return output.json(&serde_json::json!({
            "status": "completed",
            "components_dir": report.components_dir,
            "stylesheet": report.stylesheet,
            "storybook": storybook,
        }));
    }

    output.success(&format!(
        "Created {}",
        display_path(&root, &report.components_dir)
    ))?;
    output.success(&format!(
        "Wrote theme configuration to {}",
        display_path(&root, &report.stylesheet)
    ))?;

    match &report.storybook {
        Some(StorybookOutcome::Seeded { dir, files }) => {
            output.success(&format!(
                "Storybook configuration added to {} ({} file(s))",
                display_path(&root, dir),
                files.len()
            ))?;
        }
        Some(StorybookOutcome::Failed { reason }) => {
            output.warning(&format!("Storybook was not set up: {reason}"))?;
        }
        None => {}
    }

    output.blank()?;
    output.header("Next steps:")?;
    output.print("  1. Add components:")?;
    output.print("     $ uibin add all            # Add all components")?;
    output.print("     $ uibin add                # Select components interactively")?;
    output.print("     $ uibin add ThemeProvider  # Add a specific component")?;
    output.print("  2. Add the ThemeProvider to your root layout.")?;

    Ok(())
}
