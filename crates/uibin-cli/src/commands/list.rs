//! Implementation of the `uibin list` command.

use uibin_core::application::CatalogEntry;

use super::Session;
use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = global
        .project_root()
        .with_cli_context(|| "Failed to resolve the project directory")?;
    let session = Session::open(&root, &args.source, &config, &output)?;
    let entries = session.service.catalog()?;

    match args.format {
        ListFormat::Table => {
            output.header(&format!("Available Components ({}):", session.origin))?;
            for entry in &entries {
                output.print(&table_row(entry))?;
            }
        }

        // Written straight to stdout so the output stays parseable even
        // under --quiet.
        ListFormat::Json => {
            output.json(&entries)?;
        }

        ListFormat::List => {
            for entry in &entries {
                output.raw(entry.component.as_str())?;
            }
        }

        ListFormat::Csv => {
            output.raw("name,description,bundles,stylesheet,available")?;
            for entry in &entries {
                output.raw(&csv_row(entry))?;
            }
        }
    }

    Ok(())
}

fn bundle_names(entry: &CatalogEntry) -> Vec<String> {
    entry.bundles.iter().map(ToString::to_string).collect()
}

fn table_row(entry: &CatalogEntry) -> String {
    let mut row = format!("  {:<14} {}", entry.component.to_string(), entry.description);
    let bundles = bundle_names(entry);
    if !bundles.is_empty() {
        row.push_str(&format!(" [{}]", bundles.join(", ")));
    }
    if !entry.available {
        row.push_str(" (missing from templates)");
    }
    row
}

fn csv_row(entry: &CatalogEntry) -> String {
    format!(
        "{},\"{}\",{},{},{}",
        entry.component,
        entry.description.replace('"', "\"\""),
        bundle_names(entry).join(";"),
        entry.provides_stylesheet,
        entry.available
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use uibin_core::domain::{AuxiliaryBundle, Component};

    fn theme_provider() -> CatalogEntry {
        CatalogEntry {
            component: Component::ThemeProvider,
            description: "Root theme context",
            bundles: vec![AuxiliaryBundle::Theme, AuxiliaryBundle::ThemeTypes],
            provides_stylesheet: true,
            available: true,
        }
    }

    #[test]
    fn table_row_shows_bundles() {
        let row = table_row(&theme_provider());
        assert!(row.contains("ThemeProvider"));
        assert!(row.ends_with("[theme, theme-types]"));
    }

    #[test]
    fn table_row_flags_missing_templates() {
        let entry = CatalogEntry {
            available: false,
            ..theme_provider()
        };
        assert!(table_row(&entry).ends_with("(missing from templates)"));
    }

    #[test]
    fn csv_row_quotes_description() {
        assert_eq!(
            csv_row(&theme_provider()),
            "ThemeProvider,\"Root theme context\",theme;theme-types,true,true"
        );
    }
}
