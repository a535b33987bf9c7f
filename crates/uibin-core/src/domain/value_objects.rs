//! Domain value objects: Component, ComponentSelection, AuxiliaryBundle.
//!
//! # Design
//!
//! These are pure value types: `Copy` where possible, equality-by-value, no
//! identity. They hold NO dependency logic. Which component pulls in which
//! bundle lives in `catalog.rs`. This file's only job is to define the types,
//! their string representations, and their parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm, the `FromStr` arm and extend `ALL`
//! 3. Add a `ComponentDef` entry in `catalog.rs`
//! 4. Ship the template tree under `components/<Name>/`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Keyword selecting every known component.
pub const ALL_KEYWORD: &str = "all";

// ── Component ────────────────────────────────────────────────────────────────

/// A component template bundle shipped with uibin.
///
/// Names are the exact directory names under `components/` in the template
/// tree, so they are PascalCase and matched case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Component {
    ThemeProvider,
    ThemeToggle,
    Button,
    Card,
    Box,
    Container,
}

impl Component {
    /// Every component, in the fixed enumeration order used by `all`.
    pub const ALL: [Self; 6] = [
        Self::ThemeProvider,
        Self::ThemeToggle,
        Self::Button,
        Self::Card,
        Self::Box,
        Self::Container,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ThemeProvider => "ThemeProvider",
            Self::ThemeToggle => "ThemeToggle",
            Self::Button => "Button",
            Self::Card => "Card",
            Self::Box => "Box",
            Self::Container => "Container",
        }
    }

    /// Template-store root of this component's file tree.
    pub fn template_root(self) -> String {
        format!("components/{}", self.as_str())
    }

    /// Names of every component, for error messages and pickers.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::as_str).collect()
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Component {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::UnknownComponent {
                name: s.to_owned(),
                available: Self::names(),
            })
    }
}

// ── ComponentSelection ───────────────────────────────────────────────────────

/// What the user asked for on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentSelection {
    /// The `all` keyword.
    All,
    /// Explicit names, validated, in the order given.
    Named(Vec<Component>),
    /// No names given; ask through the interactive picker.
    Interactive,
}

impl ComponentSelection {
    /// Parse raw names.
    ///
    /// Fails on the first unknown name, before anything touches the disk.
    /// `all` anywhere in the list wins over explicit names.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self, DomainError> {
        if names.is_empty() {
            return Ok(Self::Interactive);
        }
        if names.iter().any(|n| n.as_ref() == ALL_KEYWORD) {
            return Ok(Self::All);
        }

        let mut components = Vec::with_capacity(names.len());
        for name in names {
            let component: Component = name.as_ref().parse()?;
            if !components.contains(&component) {
                components.push(component);
            }
        }
        Ok(Self::Named(components))
    }

    /// Concrete components, or `None` when the picker still has to run.
    pub fn resolve(&self) -> Option<Vec<Component>> {
        match self {
            Self::All => Some(Component::ALL.to_vec()),
            Self::Named(components) => Some(components.clone()),
            Self::Interactive => None,
        }
    }
}

// ── AuxiliaryBundle ──────────────────────────────────────────────────────────

/// Shared infrastructure files that some components depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuxiliaryBundle {
    /// Colour palettes and theme tokens (`theme/**`).
    Theme,
    /// Theme type declarations (`types/theme.ts`).
    ThemeTypes,
    /// Deep-merge helper used to combine theme overrides.
    MergeUtil,
    /// `useTheme` hook.
    ThemeHook,
}

impl AuxiliaryBundle {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::ThemeTypes => "theme-types",
            Self::MergeUtil => "merge-util",
            Self::ThemeHook => "theme-hook",
        }
    }
}

impl fmt::Display for AuxiliaryBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
