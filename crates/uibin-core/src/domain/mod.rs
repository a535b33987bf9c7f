//! Core domain layer for uibin.
//!
//! This module contains pure logic: which components exist, what each one
//! depends on, where files land in a target project, and how import
//! specifiers are rewritten. All I/O is handled via ports (traits) defined in
//! the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, terminal or environment access
//! - **Immutable values**: All domain objects are Clone + PartialEq
//! - **Declarative dependencies**: component → bundle edges live in one table
//!
// Public API - what the world sees
pub mod catalog;
pub mod error;
pub mod layout;
pub mod request;
pub mod rewrite;
pub mod value_objects;

// Re-exports for convenience
pub use catalog::{
    BUNDLE_REGISTRY, BundleDef, COMPONENT_REGISTRY, ComponentDef, STORYBOOK_TEMPLATE_ROOT,
    STYLESHEET_TEMPLATE,
};
pub use error::{DomainError, ErrorCategory};
pub use layout::{LayoutConfig, TargetLayout};
pub use request::{AUXILIARY_MARKER, InitRequest, InstallRequest, is_auxiliary};
pub use rewrite::ImportRewriter;
pub use value_objects::{ALL_KEYWORD, AuxiliaryBundle, Component, ComponentSelection};

#[cfg(test)]
mod tests {
    use super::*;

    // The registry, the enum and the layout have to agree with each other;
    // these tests cut across the submodules.

    #[test]
    fn every_bundle_destination_is_inside_lib() {
        let layout = TargetLayout::with_defaults("/proj");
        for def in BUNDLE_REGISTRY {
            let dir = layout.bundle_dir(def.bundle).unwrap();
            assert!(dir.starts_with(layout.lib_dir()), "{} escapes lib", def.bundle);
        }
    }

    #[test]
    fn component_dirs_are_distinct() {
        let layout = TargetLayout::with_defaults("/proj");
        let mut dirs: Vec<_> = Component::ALL
            .iter()
            .map(|c| layout.component_dir(*c))
            .collect();
        dirs.sort();
        dirs.dedup();
        assert_eq!(dirs.len(), Component::ALL.len());
    }

    #[test]
    fn all_keyword_is_not_a_component_name() {
        assert!(ALL_KEYWORD.parse::<Component>().is_err());
    }
}
