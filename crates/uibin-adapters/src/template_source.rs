//! Template source discovery.
//!
//! [`discover`] picks the template tree an invocation reads from.
//!
//! # Resolution order
//!
//! 1. **Explicit directory**: `--templates`, `templates.local_path` in the
//!    config file, or `$UIBIN_TEMPLATES_DIR`. The CLI folds these into one
//!    value before calling in. A missing explicit directory is an error,
//!    never a silent fallback.
//! 2. **`<executable-dir>/templates`**: sibling to the `uibin` binary, for
//!    installs that ship an editable template tree next to it.
//! 3. **Built-in assets** compiled into the binary.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use uibin_core::{application::ports::TemplateStore, error::UibinResult};

use crate::template_store::{DirectoryTemplateStore, InMemoryStore};

/// Where the active templates came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOrigin {
    Explicit(PathBuf),
    ExecutableSibling(PathBuf),
    Builtin,
}

impl fmt::Display for TemplateOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(p) | Self::ExecutableSibling(p) => write!(f, "{}", p.display()),
            Self::Builtin => f.write_str("built-in"),
        }
    }
}

/// A resolved template store plus its origin, for logs and `config list`.
pub struct TemplateSource {
    pub store: Box<dyn TemplateStore>,
    pub origin: TemplateOrigin,
}

impl fmt::Debug for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateSource")
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

/// Resolve the template store using the order in the module docs.
#[instrument(skip_all, fields(explicit = ?explicit))]
pub fn discover(explicit: Option<&Path>) -> UibinResult<TemplateSource> {
    if let Some(dir) = explicit {
        let store = DirectoryTemplateStore::new(dir)?;
        info!(path = %dir.display(), "using explicit templates directory");
        return Ok(TemplateSource {
            store: Box::new(store),
            origin: TemplateOrigin::Explicit(dir.to_path_buf()),
        });
    }

    if let Some(dir) = exe_sibling_templates().filter(|d| d.is_dir()) {
        let store = DirectoryTemplateStore::new(&dir)?;
        info!(path = %dir.display(), "using templates next to the executable");
        return Ok(TemplateSource {
            store: Box::new(store),
            origin: TemplateOrigin::ExecutableSibling(dir),
        });
    }

    debug!("using built-in templates");
    Ok(TemplateSource {
        store: Box::new(InMemoryStore::with_builtin()?),
        origin: TemplateOrigin::Builtin,
    })
}

/// Return `<directory of current executable>/templates`, or `None` if the
/// executable path cannot be determined (some platforms / test runners).
fn exe_sibling_templates() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("templates")))
}
