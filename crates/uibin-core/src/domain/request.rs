//! Per-invocation requests.
//!
//! Built from user input, consumed once by the install service, then dropped.

use crate::domain::{
    error::DomainError,
    value_objects::{Component, ComponentSelection},
};

/// Path fragment that marks documentation/example files (Storybook stories).
pub const AUXILIARY_MARKER: &str = ".stories.";

/// Whether a template-relative path is an auxiliary (story) file.
pub fn is_auxiliary(relative: &str) -> bool {
    relative.contains(AUXILIARY_MARKER)
}

/// A request to add components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    selection: ComponentSelection,
    skip_confirmation: bool,
    include_auxiliary: bool,
}

impl InstallRequest {
    /// Validate raw component names into a request.
    ///
    /// Unknown names are rejected here, before any I/O.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, DomainError> {
        Ok(Self::new(ComponentSelection::parse(names)?))
    }

    pub fn new(selection: ComponentSelection) -> Self {
        Self {
            selection,
            skip_confirmation: false,
            include_auxiliary: false,
        }
    }

    /// Shorthand for a request naming a single component.
    pub fn single(component: Component) -> Self {
        Self::new(ComponentSelection::Named(vec![component]))
    }

    #[must_use]
    pub fn skip_confirmation(mut self, yes: bool) -> Self {
        self.skip_confirmation = yes;
        self
    }

    #[must_use]
    pub fn include_auxiliary(mut self, include: bool) -> Self {
        self.include_auxiliary = include;
        self
    }

    pub fn selection(&self) -> &ComponentSelection {
        &self.selection
    }

    pub fn skips_confirmation(&self) -> bool {
        self.skip_confirmation
    }

    pub fn includes_auxiliary(&self) -> bool {
        self.include_auxiliary
    }

    /// Whether a template file is copied under this request.
    pub fn wants(&self, relative: &str) -> bool {
        self.include_auxiliary || !is_auxiliary(relative)
    }
}

/// A request to prepare a project for uibin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitRequest {
    pub skip_confirmation: bool,
    pub with_storybook: bool,
}
