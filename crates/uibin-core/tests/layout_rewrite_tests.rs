//! Integration tests for uibin-core: layout, catalog and rewriter together.

use std::path::Path;

use uibin_core::domain::{
    AuxiliaryBundle, BUNDLE_REGISTRY, COMPONENT_REGISTRY, Component, ComponentSelection,
    ImportRewriter, InstallRequest, LayoutConfig, TargetLayout, catalog,
};

#[test]
fn test_component_files_resolve_lib_alias_from_their_own_directory() {
    let layout = TargetLayout::with_defaults("/app");
    let rewriter = ImportRewriter::new(layout.lib_dir());
    let dest = layout.component_dir(Component::ThemeProvider).join("ThemeProvider.svelte");

    let source = "<script lang=\"ts\">\n  import { mergeTheme } from '$lib/utils/deepMerge';\n  import type { Theme } from '$lib/types/theme';\n</script>\n";
    let out = rewriter.rewrite(source, &dest);

    assert!(out.contains("from '../../../utils/deepMerge'"));
    assert!(out.contains("from '../../../types/theme'"));
}

#[test]
fn test_bundle_files_resolve_lib_alias_from_bundle_directory() {
    let layout = TargetLayout::with_defaults("/app");
    let rewriter = ImportRewriter::new(layout.lib_dir());
    let dest = layout.bundle_dir(AuxiliaryBundle::ThemeHook).unwrap().join("useTheme.ts");

    let out = rewriter.rewrite("import type { Theme } from '$lib/types/theme';", &dest);
    assert_eq!(out, "import type { Theme } from '../types/theme';");
}

#[test]
fn test_custom_layout_changes_depth() {
    let config = LayoutConfig {
        lib_dir: "src/lib".into(),
        namespace: "vendor/uibin".into(),
        ..LayoutConfig::default()
    };
    let layout = TargetLayout::new("/app", config).unwrap();
    let rewriter = ImportRewriter::new(layout.lib_dir());
    let dest = layout.component_dir(Component::Button).join("Button.svelte");

    let out = rewriter.rewrite("import x from '$lib/utils/deepMerge';", &dest);
    assert_eq!(out, "import x from '../../../../utils/deepMerge';");
}

#[test]
fn test_all_selection_pulls_every_bundle_once() {
    let selected = ComponentSelection::parse(&["all"]).unwrap().resolve().unwrap();
    let bundles = catalog::bundles_for(&selected);

    assert_eq!(bundles.len(), BUNDLE_REGISTRY.len());
    assert!(catalog::needs_stylesheet(&selected));
}

#[test]
fn test_registry_covers_every_component() {
    for component in Component::ALL {
        assert!(
            COMPONENT_REGISTRY.iter().any(|d| d.component == component),
            "{component} missing from registry"
        );
    }
}

#[test]
fn test_unknown_component_rejected_before_anything_else() {
    let err = InstallRequest::from_names(&["Button", "Modal"]).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Component 'Modal' not found"));
    assert!(message.contains("ThemeProvider"));
}

#[test]
fn test_story_files_are_filtered_unless_requested() {
    let request = InstallRequest::single(Component::Button);
    assert!(request.wants("Button.svelte"));
    assert!(!request.wants("stories/Button.stories.ts"));

    let request = request.include_auxiliary(true);
    assert!(request.wants("stories/Button.stories.ts"));
    assert!(ImportRewriter::applies_to(Path::new("Button.stories.ts")));
}
