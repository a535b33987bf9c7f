//! Template store backed by a directory on disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use uibin_core::{
    application::{
        ApplicationError,
        ports::{TemplateFile, TemplateStore},
    },
    error::{Context, UibinResult},
};

/// Reads template trees from a directory laid out like the built-in assets.
#[derive(Debug, Clone)]
pub struct DirectoryTemplateStore {
    root: PathBuf,
}

impl DirectoryTemplateStore {
    /// Create a store rooted at `root`. The directory must exist.
    pub fn new(root: impl Into<PathBuf>) -> UibinResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(ApplicationError::TemplateDirNotFound { path: root }.into());
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        path.split('/')
            .filter(|p| !p.is_empty())
            .fold(self.root.clone(), |acc, part| acc.join(part))
    }
}

impl TemplateStore for DirectoryTemplateStore {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn files(&self, root: &str) -> UibinResult<Option<Vec<TemplateFile>>> {
        let dir = self.resolve(root);
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "template tree not found");
            return Ok(None);
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::TemplateStoreError {
                path: root.to_owned(),
                reason: format!("directory walk error: {e}"),
            })?;

            // Skip directories, symlinks and other special types.
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&dir)
                .context("relativising template path")?;
            let relative = normalize_path(&relative.to_string_lossy());

            let contents = fs::read(entry.path()).map_err(|e| {
                ApplicationError::TemplateStoreError {
                    path: format!("{root}/{relative}"),
                    reason: e.to_string(),
                }
            })?;
            files.push(TemplateFile::new(relative, contents));
        }

        files.sort_by(|a, b| a.relative.cmp(&b.relative));
        debug!(count = files.len(), "loaded template tree");
        Ok(Some(files))
    }

    fn read(&self, path: &str) -> UibinResult<Option<Vec<u8>>> {
        let file = self.resolve(path);
        if !file.is_file() {
            return Ok(None);
        }
        fs::read(&file).map(Some).map_err(|e| {
            ApplicationError::TemplateStoreError {
                path: path.to_owned(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn locate(&self, path: &str) -> String {
        self.resolve(path).display().to_string()
    }
}

/// Normalise a filesystem path to forward slashes so Windows and Unix paths
/// compare identically.
fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
