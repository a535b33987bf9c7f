//! In-memory template store with built-in templates.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use uibin_core::{
    application::{
        ApplicationError,
        ports::{TemplateFile, TemplateStore},
    },
    error::UibinResult,
};

use super::dir_prefix;
use crate::builtin_templates;

/// Thread-safe in-memory template store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with the built-in templates loaded.
    pub fn with_builtin() -> UibinResult<Self> {
        let store = Self::new();
        store.load_builtin()?;
        Ok(store)
    }

    /// Load the built-in templates.
    pub fn load_builtin(&self) -> UibinResult<()> {
        for (path, contents) in builtin_templates::ASSETS {
            self.insert(path, contents.as_bytes())?;
        }
        Ok(())
    }

    /// Add or replace one file.
    pub fn insert(&self, path: &str, contents: impl Into<Vec<u8>>) -> UibinResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(path.trim_matches('/').to_owned(), contents.into());
        Ok(())
    }

    /// Drop every file under `root` (testing helper for missing templates).
    pub fn remove_tree(&self, root: &str) -> UibinResult<()> {
        let prefix = dir_prefix(root);
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.retain(|path, _| !(path.starts_with(&prefix) || path == root));
        Ok(())
    }

    /// Get the number of files.
    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateStore for InMemoryStore {
    fn files(&self, root: &str) -> UibinResult<Option<Vec<TemplateFile>>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let prefix = dir_prefix(root);
        let files: Vec<_> = inner
            .range(prefix.clone()..)
            .take_while(|(path, _)| path.starts_with(&prefix))
            .map(|(path, contents)| TemplateFile::new(&path[prefix.len()..], contents.clone()))
            .collect();

        Ok((!files.is_empty()).then_some(files))
    }

    fn read(&self, path: &str) -> UibinResult<Option<Vec<u8>>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.get(path.trim_matches('/')).cloned())
    }

    fn locate(&self, path: &str) -> String {
        format!("builtin:{}", path.trim_matches('/'))
    }
}
