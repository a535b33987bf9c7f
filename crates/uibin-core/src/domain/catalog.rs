//! Component dependency registry.
//!
//! Each component is described exactly once by its [`ComponentDef`], and each
//! shared bundle by its [`BundleDef`]. The installer never branches on a
//! component's identity; it asks this module what a component pulls in.
//!
//! # Adding a New Component
//!
//! 1. Add a variant to `Component` in `value_objects.rs`
//! 2. Add one [`ComponentDef`] entry to [`COMPONENT_REGISTRY`]
//! 3. Ship its template tree

use crate::domain::value_objects::{AuxiliaryBundle, Component};

/// Reference stylesheet in the template store.
pub const STYLESHEET_TEMPLATE: &str = "app/styles.css";

/// Storybook configuration tree seeded by `init --storybook`.
pub const STORYBOOK_TEMPLATE_ROOT: &str = "storybook";

// ── Bundle definitions ───────────────────────────────────────────────────────

/// Where a shared bundle comes from and where it lands.
#[derive(Debug, Clone, Copy)]
pub struct BundleDef {
    /// The bundle this definition describes.
    pub bundle: AuxiliaryBundle,

    /// Directory in the template store holding the bundle.
    pub template_root: &'static str,

    /// Directory under the target library root that receives the files.
    pub destination: &'static str,

    /// Relative paths to copy from `template_root`. Empty means the whole tree.
    pub include: &'static [&'static str],
}

impl BundleDef {
    /// Whether `relative` (a path under `template_root`) belongs to this bundle.
    pub fn includes(&self, relative: &str) -> bool {
        self.include.is_empty() || self.include.iter().any(|p| *p == relative)
    }
}

/// Single source of truth for shared bundles.
pub static BUNDLE_REGISTRY: &[BundleDef] = &[
    BundleDef {
        bundle: AuxiliaryBundle::Theme,
        template_root: "theme",
        destination: "theme",
        include: &[],
    },
    BundleDef {
        bundle: AuxiliaryBundle::ThemeTypes,
        template_root: "types",
        destination: "types",
        include: &["theme.ts"],
    },
    BundleDef {
        bundle: AuxiliaryBundle::MergeUtil,
        template_root: "utils",
        destination: "utils",
        include: &["deepMerge.ts"],
    },
    BundleDef {
        bundle: AuxiliaryBundle::ThemeHook,
        template_root: "hooks",
        destination: "hooks",
        include: &["useTheme.ts"],
    },
];

// ── Component definitions ────────────────────────────────────────────────────

/// Everything the installer needs to know about one component.
#[derive(Debug, Clone, Copy)]
pub struct ComponentDef {
    /// The component this entry describes.
    pub component: Component,

    /// One-line description shown by `uibin list`.
    pub description: &'static str,

    /// Shared bundles copied alongside the component.
    pub bundles: &'static [AuxiliaryBundle],

    /// Whether installing this component also ensures the app stylesheet.
    pub provides_stylesheet: bool,
}

/// Single source of truth for component dependencies.
pub static COMPONENT_REGISTRY: &[ComponentDef] = &[
    ComponentDef {
        component: Component::ThemeProvider,
        description: "Applies theme CSS variables and exposes the theme context",
        bundles: &[
            AuxiliaryBundle::Theme,
            AuxiliaryBundle::ThemeTypes,
            AuxiliaryBundle::MergeUtil,
            AuxiliaryBundle::ThemeHook,
        ],
        provides_stylesheet: true,
    },
    ComponentDef {
        component: Component::ThemeToggle,
        description: "Switches between light and dark mode",
        bundles: &[AuxiliaryBundle::ThemeHook],
        provides_stylesheet: false,
    },
    ComponentDef {
        component: Component::Button,
        description: "Button with variants, sizes and a disabled state",
        bundles: &[],
        provides_stylesheet: false,
    },
    ComponentDef {
        component: Component::Card,
        description: "Surface container with optional header and footer",
        bundles: &[],
        provides_stylesheet: false,
    },
    ComponentDef {
        component: Component::Box,
        description: "Polymorphic layout primitive with spacing props",
        bundles: &[],
        provides_stylesheet: false,
    },
    ComponentDef {
        component: Component::Container,
        description: "Centred, max-width page container",
        bundles: &[],
        provides_stylesheet: false,
    },
];

// ── Lookups ──────────────────────────────────────────────────────────────────

/// Look up the definition of a component.
///
/// Every `Component` variant has an entry; a missing one is a registry bug
/// caught by `registry_covers_every_component`.
pub fn find_component(component: Component) -> Option<&'static ComponentDef> {
    COMPONENT_REGISTRY.iter().find(|d| d.component == component)
}

/// Look up the definition of a bundle.
pub fn find_bundle(bundle: AuxiliaryBundle) -> Option<&'static BundleDef> {
    BUNDLE_REGISTRY.iter().find(|d| d.bundle == bundle)
}

/// Bundles a single component depends on.
pub fn bundles_of(component: Component) -> &'static [AuxiliaryBundle] {
    find_component(component)
        .map(|d| d.bundles)
        .unwrap_or_default()
}

/// De-duplicated union of the bundles needed by `components`, in the order
/// they are first required.
pub fn bundles_for(components: &[Component]) -> Vec<AuxiliaryBundle> {
    let mut out = Vec::new();
    for bundle in components.iter().flat_map(|c| bundles_of(*c)) {
        if !out.contains(bundle) {
            out.push(*bundle);
        }
    }
    out
}

/// Whether any of `components` requires the app stylesheet.
pub fn needs_stylesheet(components: &[Component]) -> bool {
    components
        .iter()
        .filter_map(|c| find_component(*c))
        .any(|d| d.provides_stylesheet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_every_component() {
        for component in Component::ALL {
            assert!(
                find_component(component).is_some(),
                "no ComponentDef for {component}"
            );
        }
    }

    #[test]
    fn registry_covers_every_referenced_bundle() {
        for def in COMPONENT_REGISTRY {
            for bundle in def.bundles {
                assert!(find_bundle(*bundle).is_some(), "no BundleDef for {bundle}");
            }
        }
    }

    #[test]
    fn theme_provider_pulls_all_shared_infrastructure() {
        assert_eq!(
            bundles_of(Component::ThemeProvider),
            &[
                AuxiliaryBundle::Theme,
                AuxiliaryBundle::ThemeTypes,
                AuxiliaryBundle::MergeUtil,
                AuxiliaryBundle::ThemeHook,
            ]
        );
    }

    #[test]
    fn theme_toggle_only_needs_the_hook() {
        assert_eq!(bundles_of(Component::ThemeToggle), &[AuxiliaryBundle::ThemeHook]);
    }

    #[test]
    fn shared_hook_is_listed_once() {
        let bundles = bundles_for(&[Component::ThemeToggle, Component::ThemeProvider]);
        assert_eq!(
            bundles
                .iter()
                .filter(|b| **b == AuxiliaryBundle::ThemeHook)
                .count(),
            1
        );
        assert_eq!(bundles[0], AuxiliaryBundle::ThemeHook);
    }

    #[test]
    fn plain_components_need_nothing() {
        assert!(bundles_for(&[Component::Button, Component::Box]).is_empty());
        assert!(!needs_stylesheet(&[Component::Button, Component::ThemeToggle]));
    }

    #[test]
    fn only_the_root_component_provides_the_stylesheet() {
        assert!(needs_stylesheet(&[Component::Card, Component::ThemeProvider]));
        let providers: Vec<_> = COMPONENT_REGISTRY
            .iter()
            .filter(|d| d.provides_stylesheet)
            .map(|d| d.component)
            .collect();
        assert_eq!(providers, vec![Component::ThemeProvider]);
    }

    #[test]
    fn include_filter_limits_single_file_bundles() {
        let types = find_bundle(AuxiliaryBundle::ThemeTypes).unwrap();
        assert!(types.includes("theme.ts"));
        assert!(!types.includes("other.ts"));

        let theme = find_bundle(AuxiliaryBundle::Theme).unwrap();
        assert!(theme.includes("nested/anything.ts"));
    }
}
