//! Built-in template assets.
//!
//! The tree under `crates/uibin-adapters/templates/` is compiled into the
//! binary so `uibin` works without any files next to it. Each entry is a
//! `/`-separated path relative to that directory plus the file's contents.
//!
//! A directory with the same layout can replace these at runtime; see
//! [`crate::template_source`].

macro_rules! asset {
    ($path:literal) => {
        ($path, include_str!(concat!("../templates/", $path)))
    };
}

// ── Assets ────────────────────────────────────────────────────────────────────

/// Every packaged template file, sorted by path.
pub static ASSETS: &[(&str, &str)] = &[
    asset!("app/styles.css"),
    asset!("components/Box/Box.svelte"),
    asset!("components/Box/index.ts"),
    asset!("components/Box/types.ts"),
    asset!("components/Button/Button.svelte"),
    asset!("components/Button/index.ts"),
    asset!("components/Button/stories/Button.stories.ts"),
    asset!("components/Button/types.ts"),
    asset!("components/Card/Card.svelte"),
    asset!("components/Card/index.ts"),
    asset!("components/Card/stories/Card.stories.ts"),
    asset!("components/Card/types.ts"),
    asset!("components/Container/Container.svelte"),
    asset!("components/Container/index.ts"),
    asset!("components/Container/stories/Container.stories.ts"),
    asset!("components/Container/types.ts"),
    asset!("components/ThemeProvider/ThemeProvider.svelte"),
    asset!("components/ThemeProvider/index.ts"),
    asset!("components/ThemeProvider/stories/ThemeProvider.stories.ts"),
    asset!("components/ThemeProvider/types.ts"),
    asset!("components/ThemeToggle/ThemeToggle.svelte"),
    asset!("components/ThemeToggle/index.ts"),
    asset!("components/ThemeToggle/stories/ThemeToggle.stories.ts"),
    asset!("components/ThemeToggle/types.ts"),
    asset!("hooks/useTheme.ts"),
    asset!("storybook/main.ts"),
    asset!("storybook/preview.ts"),
    asset!("theme/colors.ts"),
    asset!("theme/index.ts"),
    asset!("theme/radius.ts"),
    asset!("types/theme.ts"),
    asset!("utils/deepMerge.ts"),
];
