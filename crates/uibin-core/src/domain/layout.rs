//! Target project layout.
//!
//! A [`TargetLayout`] is computed once from an explicit project root and a
//! [`LayoutConfig`]. Nothing in the core reads the process working directory;
//! the CLI decides the root and passes it in.

use std::path::{Component as PathComponent, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{
    catalog,
    error::DomainError,
    value_objects::{AuxiliaryBundle, Component},
};

/// Directory conventions of the consuming project, relative to its root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Library root, e.g. `src/lib`.
    pub lib_dir: PathBuf,
    /// Sub-directory of `<lib>/components` that receives the components.
    pub namespace: String,
    /// Global stylesheet, e.g. `src/app.css`.
    pub stylesheet: PathBuf,
    /// Storybook configuration directory seeded by `init --storybook`.
    pub storybook_dir: PathBuf,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            lib_dir: PathBuf::from("src/lib"),
            namespace: "uibin".into(),
            stylesheet: PathBuf::from("src/app.css"),
            storybook_dir: PathBuf::from(".storybook"),
        }
    }
}

impl LayoutConfig {
    /// Reject configurations that would write outside the project root.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (field, path) in [
            ("lib_dir", self.lib_dir.as_path()),
            ("stylesheet", self.stylesheet.as_path()),
            ("storybook_dir", self.storybook_dir.as_path()),
        ] {
            if !is_contained(path) {
                return Err(DomainError::InvalidLayout(format!(
                    "{field} must be a relative path inside the project, got '{}'",
                    path.display()
                )));
            }
        }
        if self.namespace.is_empty() || !is_contained(Path::new(&self.namespace)) {
            return Err(DomainError::InvalidLayout(format!(
                "namespace must be a relative directory path under the components directory, got '{}'",
                self.namespace
            )));
        }
        Ok(())
    }
}

/// Absolute destinations inside one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLayout {
    root: PathBuf,
    config: LayoutConfig,
}

impl TargetLayout {
    /// Build a layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>, config: LayoutConfig) -> Result<Self, DomainError> {
        config.validate()?;
        Ok(Self {
            root: root.into(),
            config,
        })
    }

    /// Layout with the default SvelteKit conventions.
    pub fn with_defaults(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config: LayoutConfig::default(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// `<root>/src/lib`
    pub fn lib_dir(&self) -> PathBuf {
        self.root.join(&self.config.lib_dir)
    }

    /// `<root>/src/lib/components/<namespace>`
    pub fn components_dir(&self) -> PathBuf {
        self.lib_dir().join("components").join(&self.config.namespace)
    }

    pub fn component_dir(&self, component: Component) -> PathBuf {
        self.components_dir().join(component.as_str())
    }

    /// Destination directory of a shared bundle.
    pub fn bundle_dir(&self, bundle: AuxiliaryBundle) -> Result<PathBuf, DomainError> {
        let def = catalog::find_bundle(bundle)
            .ok_or_else(|| DomainError::UnknownBundle(bundle.to_string()))?;
        Ok(self.lib_dir().join(def.destination))
    }

    pub fn stylesheet(&self) -> PathBuf {
        self.root.join(&self.config.stylesheet)
    }

    pub fn storybook_dir(&self) -> PathBuf {
        self.root.join(&self.config.storybook_dir)
    }

    /// Import path consumers use for a component, e.g.
    /// `$lib/components/uibin/Button`.
    pub fn import_path(&self, component: Component) -> String {
        format!(
            "$lib/components/{}/{}",
            self.config.namespace,
            component.as_str()
        )
    }
}

/// Relative and free of `..`/root components.
fn is_contained(path: &Path) -> bool {
    !path.as_os_str().is_empty()
        && path
            .components()
            .all(|c| matches!(c, PathComponent::Normal(_) | PathComponent::CurDir))
}
