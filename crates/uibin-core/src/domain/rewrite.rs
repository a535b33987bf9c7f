//! Import specifier rewriting for copied template files.
//!
//! Templates are authored inside the uibin library, where `$lib/...` and
//! `.js`-suffixed relative imports resolve. Once copied into a consumer
//! project they must point at the consumer's own layout.
//!
//! The rewrite is a single pass over module specifiers. Only specifiers in
//! statement position are considered: the `from '...'` clause of an
//! `import`/`export` statement that starts a line (or follows a `<script>`
//! tag), a side-effect `import '...'` at the start of a line, and dynamic
//! `import('...')`. Markup text, comments and string literals that merely
//! contain `from '...'` are left alone. Each specifier is transformed at most
//! once, by these rules, in order:
//!
//! 1. `$lib` / `$lib/<rest>` becomes a relative path from the destination
//!    file's directory to the target library root, at any nesting depth.
//! 2. A relative specifier (including the result of rule 1) ending in `.js`
//!    ends in `.ts` instead.
//!
//! Bare package specifiers are never touched. Nothing the rules produce can
//! match a rule again, so rewriting already-rewritten text is a no-op.

use std::borrow::Cow;
use std::path::{Component as PathComponent, Path, PathBuf};
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Extensions of files whose import specifiers are rewritten.
pub const REWRITTEN_EXTENSIONS: &[&str] = &["ts", "js", "svelte"];

const LIB_ALIAS: &str = "$lib";

static SPECIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?m)(?P<lead>(?:^[ \t]*|<script\b[^>]*>\s*)(?:(?:import|export)\b[^;'"=<(]*?\bfrom\s*|import\s*)|\bimport\s*\(\s*)(?:'(?P<single>[^'\n]*)'|"(?P<double>[^"\n]*)")"#,
    )
    .expect("specifier pattern is valid")
});

/// Rewrites module specifiers relative to one target library root.
#[derive(Debug, Clone)]
pub struct ImportRewriter {
    lib_dir: PathBuf,
}

impl ImportRewriter {
    pub fn new(lib_dir: impl Into<PathBuf>) -> Self {
        Self {
            lib_dir: lib_dir.into(),
        }
    }

    /// Whether a destination path is a source file subject to rewriting.
    pub fn applies_to(path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| REWRITTEN_EXTENSIONS.iter().any(|e| *e == ext))
    }

    /// Rewrite every specifier in `source`, a file that will live at
    /// `destination`.
    pub fn rewrite<'a>(&self, source: &'a str, destination: &Path) -> Cow<'a, str> {
        let from_dir = destination.parent().unwrap_or_else(|| Path::new(""));

        SPECIFIER.replace_all(source, |caps: &Captures<'_>| {
            let (quote, spec) = match (caps.name("single"), caps.name("double")) {
                (Some(m), _) => ('\'', m.as_str()),
                (None, Some(m)) => ('"', m.as_str()),
                (None, None) => return caps[0].to_owned(),
            };
            let spec = self
                .rewrite_specifier(spec, from_dir)
                .unwrap_or_else(|| spec.to_owned());
            format!("{}{quote}{spec}{quote}", &caps["lead"])
        })
    }

    /// Transform one specifier, or `None` when it is left alone.
    pub fn rewrite_specifier(&self, spec: &str, from_dir: &Path) -> Option<String> {
        let resolved = resolve_alias(spec, from_dir, &self.lib_dir);
        let candidate = resolved.as_deref().unwrap_or(spec);

        let retargeted = if is_relative(candidate) {
            candidate
                .strip_suffix(".js")
                .map(|stem| format!("{stem}.ts"))
        } else {
            None
        };

        retargeted.or(resolved)
    }
}

/// Expand `$lib[/rest]` into a relative path from `from_dir`.
fn resolve_alias(spec: &str, from_dir: &Path, lib_dir: &Path) -> Option<String> {
    let rest = spec.strip_prefix(LIB_ALIAS)?;
    if !(rest.is_empty() || rest.starts_with('/')) {
        // `$library/...` and friends are not the alias.
        return None;
    }
    let rest = rest.trim_start_matches('/');

    let base = relative_dir(from_dir, lib_dir);
    let joined = match (base.is_empty(), rest.is_empty()) {
        (true, true) => ".".to_owned(),
        (true, false) => format!("./{rest}"),
        (false, true) => base,
        (false, false) => format!("{base}/{rest}"),
    };
    Some(joined)
}

fn is_relative(spec: &str) -> bool {
    spec == "." || spec == ".." || spec.starts_with("./") || spec.starts_with("../")
}

/// Relative path from directory `from` to directory `to`, `/`-separated,
/// empty when they are the same directory.
fn relative_dir(from: &Path, to: &Path) -> String {
    let from: Vec<_> = normal_components(from);
    let to: Vec<_> = normal_components(to);

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let ups = std::iter::repeat_n("..".to_owned(), from.len() - common);
    let downs = to[common..].iter().cloned();
    ups.chain(downs).collect::<Vec<_>>().join("/")
}

fn normal_components(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|c| match c {
            PathComponent::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}
