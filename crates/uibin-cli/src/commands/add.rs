//! Implementation of the `uibin add` command.
//!
//! Responsibility: turn the positional names into an `InstallRequest`, run
//! the install service against the project root, and display the report.

use std::path::Path;

use tracing::{info, instrument};

use uibin_core::{
    application::{InstallOutcome, InstallReport, StylesheetOutcome},
    domain::{Component, InstallRequest, TargetLayout},
};

use super::{Session, display_path};
use crate::{
    cli::{AddArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `uibin add` command.
///
/// Names are validated before any adapter is wired, so an unknown component
/// fails without touching the filesystem.
#[instrument(skip_all, fields(components = ?args.components))]
pub fn execute(
    args: AddArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let request = InstallRequest::from_names(&args.components)
        .map_err(|e| CliError::Core(e.into()))?
        .skip_confirmation(args.yes)
        .include_auxiliary(args.storybook);

    let root = global
        .project_root()
        .with_cli_context(|| "Failed to resolve the project directory")?;
    let session = Session::open(&root, &args.source, &config, &output)?;
    info!(origin = %session.origin, "installing components");

    let outcome = session.service.install(request, &session.layout)?;

    if output.is_json() {
        return output.json(&outcome_json(&outcome, &session.layout));
    }

    match outcome {
        InstallOutcome::NothingSelected => {
            output.warning("No components selected, exiting...")?;
        }
        InstallOutcome::Declined => {
            output.warning("Installation cancelled.")?;
        }
        InstallOutcome::Completed(report) => {
            render_report(&report, &session.layout, &output)?;
        }
    }

    Ok(())
}

fn render_report(
    report: &InstallReport,
    layout: &TargetLayout,
    output: &OutputManager,
) -> CliResult<()> {
    let root = layout.root();

    for installed in &report.installed {
        output.success(&format!(
            "Added {} to {}",
            installed.component,
            display_path(root, &layout.component_dir(installed.component)),
        ))?;
        if installed.auxiliary_skipped > 0 {
            output.info(&format!(
                "  {} story file(s) skipped (use --storybook to include them)",
                installed.auxiliary_skipped
            ))?;
        }
    }

    for bundle in &report.bundles {
        output.success(&format!(
            "Added shared files: {} ({} file(s))",
            bundle.bundle,
            bundle.files.len()
        ))?;
    }

    // Skips were already announced as warnings while the spinner ran; repeat
    // them here so they survive in logs and piped output.
    for skipped in &report.skipped {
        output.warning(&format!("Skipped {}: {}", skipped.component, skipped.reason))?;
    }
    for skipped in &report.skipped_bundles {
        output.warning(&format!(
            "Skipped shared files {}: {}",
            skipped.bundle, skipped.reason
        ))?;
    }

    match &report.stylesheet {
        Some(StylesheetOutcome::Created { path }) => {
            output.success(&format!(
                "Created {} with theme configuration.",
                display_path(root, path)
            ))?;
        }
        Some(StylesheetOutcome::LeftAlone {
            path,
            reference,
            reference_css,
        }) => {
            output.warning(&format!(
                "Found existing {}. Please ensure it includes the uibin theme configuration.",
                display_path(root, path)
            ))?;
            match reference_css {
                // Built-in templates have no file on disk to point at.
                Some(css) if !Path::new(reference).is_file() => {
                    output.info("Merge this theme configuration into it:")?;
                    output.code(css)?;
                }
                _ => output.info(&format!(
                    "You can copy the theme configuration from: {reference}"
                ))?,
            }
        }
        None => {}
    }

    let installed = report.installed_components();
    if installed.is_empty() {
        return Ok(());
    }

    output.blank()?;
    output.header("You can now import them in your project:")?;
    for component in &installed {
        output.code(&format!(
            "import {{ {component} }} from '{}';",
            layout.import_path(*component)
        ))?;
    }

    if installed.contains(&Component::ThemeProvider) {
        output.blank()?;
        output.header("Add the ThemeProvider to your root layout (src/routes/+layout.svelte):")?;
        output.code(&layout_snippet(layout))?;
    }

    Ok(())
}

/// Root-layout snippet wrapping the app in `ThemeProvider`.
fn layout_snippet(layout: &TargetLayout) -> String {
    [
        "<script>".to_owned(),
        "  import '../app.css';".to_owned(),
        format!(
            "  import {{ ThemeProvider }} from '{}';",
            layout.import_path(Component::ThemeProvider)
        ),
        "</script>".to_owned(),
        String::new(),
        "<ThemeProvider>".to_owned(),
        "  <slot />".to_owned(),
        "</ThemeProvider>".to_owned(),
    ]
    .join("\n")
}

fn outcome_json(outcome: &InstallOutcome, layout: &TargetLayout) -> serde_json::Value {
    match outcome {
        InstallOutcome::NothingSelected => serde_json::json!({ "status": "nothing-selected" }),
        InstallOutcome::Declined => serde_json::json!({ "status": "declined" }),
        InstallOutcome::Completed(report) => {
            let stylesheet = match &report.stylesheet {
                Some(StylesheetOutcome::Created { path }) => {
                    serde_json::json!({ "status": "created", "path": path })
                }
                Some(StylesheetOutcome::LeftAlone {
                    path,
                    reference,
                    reference_css,
                }) => serde_json::json!({
                    "status": "left-alone",
                    "path": path,
                    "reference": reference,
                    "reference_css": reference_css,
                }),
                None => serde_json::Value::Null,
            };
            serde_json::json!({
                "status": "completed",
                "components_dir": report.components_dir,
                "installed": report.installed.iter().map(|c| serde_json::json!({
                    "component": c.component,
                    "import": layout.import_path(c.component),
                    "files": c.files,
                })).collect::<Vec<_>>(),
                "skipped": report.skipped.iter().map(|s| serde_json::json!({
                    "component": s.component,
                    "reason": s.reason,
                })).collect::<Vec<_>>(),
                "bundles": report.bundles.iter().map(|b| serde_json::json!({
                    "bundle": b.bundle,
                    "files": b.files,
                })).collect::<Vec<_>>(),
                "skipped_bundles": report.skipped_bundles.iter().map(|s| serde_json::json!({
                    "bundle": s.bundle,
                    "reason": s.reason,
                })).collect::<Vec<_>>(),
                "stylesheet": stylesheet,
                "files_written": report.files_written(),
            })
        }
    }
}
