//! Template store adapters.
//!
//! Both stores expose the same `/`-separated view of a template tree:
//! `components/<Name>/...`, `theme/...`, `types/...`, `utils/...`,
//! `hooks/...`, `app/styles.css` and `storybook/...`.

mod directory;
mod memory;

pub use directory::DirectoryTemplateStore;
pub use memory::InMemoryStore;

/// `root` plus a trailing slash, for prefix matching without catching
/// siblings such as `components/Button` vs `components/ButtonGroup`.
fn dir_prefix(root: &str) -> String {
    let root = root.trim_matches('/');
    if root.is_empty() {
        String::new()
    } else {
        format!("{root}/")
    }
}
