//! End-to-end install tests: real template assets, in-memory target project.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use uibin_adapters::{InMemoryStore, LocalFilesystem, MemoryFilesystem};
use uibin_core::{
    application::{
        InitOutcome, InstallOutcome, InstallReport, InstallService, StorybookOutcome,
        StylesheetOutcome,
        ports::{Filesystem, ProgressReporter, Prompt, TemplateStore},
    },
    domain::{
        AuxiliaryBundle, Component, ComponentSelection, ImportRewriter, InitRequest,
        InstallRequest, TargetLayout, is_auxiliary,
    },
    error::{UibinError, UibinResult},
};

// ── Test doubles ──────────────────────────────────────────────────────────────

/// Answers prompts from a script and records the questions asked.
#[derive(Clone, Default)]
struct ScriptedPrompt {
    confirm: Option<bool>,
    pick: Vec<Component>,
    asked: Rc<RefCell<Vec<String>>>,
}

impl ScriptedPrompt {
    fn answering(confirm: bool) -> Self {
        Self {
            confirm: Some(confirm),
            ..Self::default()
        }
    }

    fn picking(pick: Vec<Component>) -> Self {
        Self {
            confirm: Some(true),
            pick,
            ..Self::default()
        }
    }

    fn questions(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&self, message: &str, _default: bool) -> UibinResult<bool> {
        self.asked.borrow_mut().push(message.to_owned());
        Ok(self.confirm.expect("unexpected confirmation prompt"))
    }

    fn select_components(&self, _available: &[Component]) -> UibinResult<Vec<Component>> {
        self.asked.borrow_mut().push("select".into());
        Ok(self.pick.clone())
    }
}

/// Collects warnings instead of drawing a spinner.
#[derive(Clone, Default)]
struct RecordingProgress {
    warnings: Rc<RefCell<Vec<String>>>,
}

impl ProgressReporter for RecordingProgress {
    fn start(&self, _message: &str) {}

    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_owned());
    }

    fn finish(&self, _message: &str) {}

    fn fail(&self, _message: &str) {}
}

const ROOT: &str = "/proj";

struct Harness {
    fs: MemoryFilesystem,
    store: InMemoryStore,
    prompt: ScriptedPrompt,
    progress: RecordingProgress,
    layout: TargetLayout,
}

impl Harness {
    fn new() -> Self {
        Self {
            fs: MemoryFilesystem::new(),
            store: InMemoryStore::with_builtin().unwrap(),
            prompt: ScriptedPrompt::answering(true),
            progress: RecordingProgress::default(),
            layout: TargetLayout::with_defaults(ROOT),
        }
    }

    fn service(&self) -> InstallService {
        InstallService::new(
            Box::new(self.store.clone()),
            Box::new(self.fs.clone()),
            Box::new(self.prompt.clone()),
            Box::new(self.progress.clone()),
        )
    }

    fn add<S: AsRef<str>>(&self, names: &[S]) -> UibinResult<InstallOutcome> {
        let request = InstallRequest::from_names(names)?.skip_confirmation(true);
        self.service().install(request, &self.layout)
    }

    fn text(&self, relative: &str) -> String {
        self.fs
            .read_to_string(Path::new(ROOT).join(relative))
            .unwrap_or_else(|| panic!("{relative} was not written"))
    }

    fn has(&self, relative: &str) -> bool {
        self.fs.read(Path::new(ROOT).join(relative)).is_some()
    }

    fn files(&self) -> Vec<PathBuf> {
        self.fs.list_files()
    }

    fn store_text(&self, path: &str) -> String {
        String::from_utf8(self.store.read(path).unwrap().unwrap()).unwrap()
    }
}

fn completed(outcome: InstallOutcome) -> InstallReport {
    match outcome {
        InstallOutcome::Completed(report) => report,
        other => panic!("expected a completed install, got {other:?}"),
    }
}

// ── add ───────────────────────────────────────────────────────────────────────

#[test]
fn single_component_without_dependencies() {
    let h = Harness::new();
    let report = completed(h.add(&["Button"]).unwrap());

    assert_eq!(report.installed_components(), vec![Component::Button]);
    assert!(report.bundles.is_empty());
    assert!(report.stylesheet.is_none());
    assert_eq!(report.installed[0].auxiliary_skipped, 1);

    assert!(h.has("src/lib/components/uibin/Button/Button.svelte"));
    assert!(h.has("src/lib/components/uibin/Button/types.ts"));
    assert!(!h.has("src/lib/components/uibin/Button/stories/Button.stories.ts"));
    assert!(!h.has("src/app.css"));
    assert!(h
        .files()
        .iter()
        .all(|p| p.starts_with("/proj/src/lib/components/uibin/Button")));
}

#[test]
fn relative_js_suffix_becomes_ts() {
    let h = Harness::new();
    h.add(&["Card"]).unwrap();

    let index = h.text("src/lib/components/uibin/Card/index.ts");
    assert!(index.contains("from './types.ts'"));
    assert!(index.contains("from './Card.svelte'"));
}

#[test]
fn theme_provider_pulls_every_bundle_and_stylesheet() {
    let h = Harness::new();
    let report = completed(h.add(&["ThemeProvider"]).unwrap());

    let bundles: Vec<_> = report.bundles.iter().map(|b| b.bundle).collect();
    assert_eq!(
        bundles,
        [
            AuxiliaryBundle::Theme,
            AuxiliaryBundle::ThemeTypes,
            AuxiliaryBundle::MergeUtil,
            AuxiliaryBundle::ThemeHook,
        ]
    );
    assert!(matches!(report.stylesheet, Some(StylesheetOutcome::Created { .. })));

    assert!(h.has("src/lib/theme/index.ts"));
    assert!(h.has("src/lib/theme/colors.ts"));
    assert!(h.has("src/lib/types/theme.ts"));
    assert!(h.has("src/lib/utils/deepMerge.ts"));
    assert!(h.has("src/lib/hooks/useTheme.ts"));
    assert!(h.has("src/app.css"));

    let provider = h.text("src/lib/components/uibin/ThemeProvider/ThemeProvider.svelte");
    assert!(provider.contains("from '../../../theme'"));
    assert!(provider.contains("from '../../../hooks/useTheme'"));
    assert!(provider.contains("from '../../../types/theme'"));
    assert!(!provider.contains("$lib"));

    let theme = h.text("src/lib/theme/index.ts");
    assert!(theme.contains("from '../types/theme'"));
    assert!(theme.contains("from '../utils/deepMerge'"));

    let stylesheet = h.text("src/app.css");
    let packaged = h.store_text("app/styles.css");
    assert_eq!(stylesheet, packaged);
}

#[test]
fn single_file_bundles_leave_their_siblings_behind() {
    let h = Harness::new();
    h.store.insert("types/palette.ts", "export type Palette = string[];").unwrap();
    h.store.insert("utils/cn.ts", "export const cn = () => '';").unwrap();

    completed(h.add(&["ThemeProvider"]).unwrap());

    assert!(h.has("src/lib/types/theme.ts"));
    assert!(h.has("src/lib/utils/deepMerge.ts"));
    assert!(!h.has("src/lib/types/palette.ts"));
    assert!(!h.has("src/lib/utils/cn.ts"));
}

#[test]
fn theme_toggle_only_brings_the_hook() {
    let h = Harness::new();
    let report = completed(h.add(&["ThemeToggle"]).unwrap());

    assert_eq!(report.bundles.len(), 1);
    assert_eq!(report.bundles[0].bundle, AuxiliaryBundle::ThemeHook);
    assert!(report.stylesheet.is_none());
    assert!(h.has("src/lib/hooks/useTheme.ts"));
    assert!(!h.has("src/lib/theme/index.ts"));

    let toggle = h.text("src/lib/components/uibin/ThemeToggle/ThemeToggle.svelte");
    assert!(toggle.contains("from '../../../hooks/useTheme'"));
}

#[test]
fn all_installs_each_component_once_and_shares_bundles() {
    let h = Harness::new();
    let report = completed(h.add(&["all", "Button"]).unwrap());

    assert_eq!(report.installed_components(), Component::ALL.to_vec());
    // ThemeProvider and ThemeToggle both want the hook; copied once.
    let hook_copies = report
        .bundles
        .iter()
        .filter(|b| b.bundle == AuxiliaryBundle::ThemeHook)
        .count();
    assert_eq!(hook_copies, 1);
    assert!(h.has("src/app.css"));
}

#[test]
fn every_component_lands_as_its_rewritten_template() {
    for component in Component::ALL {
        let h = Harness::new();
        let report = completed(h.add(&[component.to_string()]).unwrap());
        assert_eq!(report.installed_components(), vec![component]);

        let rewriter = ImportRewriter::new(h.layout.lib_dir());
        let target_dir = h.layout.component_dir(component);
        let templates = h.store.files(&component.template_root()).unwrap().unwrap();
        let copied: Vec<_> = templates
            .iter()
            .filter(|f| !is_auxiliary(&f.relative))
            .collect();

        // Nothing else lands in the components directory.
        let components_dir = h.layout.components_dir();
        let landed: BTreeSet<_> = h
            .files()
            .into_iter()
            .filter(|p| p.starts_with(&components_dir))
            .collect();
        let expected: BTreeSet<_> = copied.iter().map(|f| target_dir.join(&f.relative)).collect();
        assert_eq!(landed, expected, "{component}");

        for file in copied {
            let dest = target_dir.join(&file.relative);
            let source = std::str::from_utf8(&file.contents).unwrap();
            let expected = if ImportRewriter::applies_to(&dest) {
                rewriter.rewrite(source, &dest).into_owned()
            } else {
                source.to_owned()
            };
            let written = h
                .fs
                .read_to_string(&dest)
                .unwrap_or_else(|| panic!("{} was not written", dest.display()));
            assert_eq!(written, expected, "{}", dest.display());
            assert!(!written.contains("$lib/"), "{} kept a $lib import", dest.display());
        }
    }
}

#[test]
fn all_writes_the_union_of_single_installs() {
    let mut union = BTreeSet::new();
    for component in Component::ALL {
        let h = Harness::new();
        h.add(&[component.to_string()]).unwrap();
        union.extend(h.files());
    }

    let h = Harness::new();
    h.add(&["all"]).unwrap();
    let all: BTreeSet<_> = h.files().into_iter().collect();
    assert_eq!(all, union);
}

#[test]
fn duplicate_names_are_installed_once() {
    let h = Harness::new();
    let report = completed(h.add(&["Card", "Box", "Card"]).unwrap());
    assert_eq!(
        report.installed_components(),
        vec![Component::Card, Component::Box]
    );
}

#[test]
fn stories_are_copied_when_requested() {
    let h = Harness::new();
    let request = InstallRequest::single(Component::Container)
        .skip_confirmation(true)
        .include_auxiliary(true);
    let report = completed(h.service().install(request, &h.layout).unwrap());

    assert_eq!(report.installed[0].auxiliary_skipped, 0);
    let story = h.text("src/lib/components/uibin/Container/stories/Container.stories.ts");
    assert!(story.contains("from '../Container.svelte'"));
}

#[test]
fn unknown_component_fails_before_any_write() {
    let h = Harness::new();
    let err = h.add(&["Button", "Modal"]).unwrap_err();

    assert!(matches!(err, UibinError::Domain(_)));
    assert!(err.to_string().contains("Component 'Modal' not found"));
    assert!(h.files().is_empty());
}

#[test]
fn declined_confirmation_writes_nothing() {
    let mut h = Harness::new();
    h.prompt = ScriptedPrompt::answering(false);

    let request = InstallRequest::single(Component::ThemeProvider);
    let outcome = h.service().install(request, &h.layout).unwrap();

    assert_eq!(outcome, InstallOutcome::Declined);
    assert!(h.files().is_empty());
    assert_eq!(
        h.prompt.questions(),
        ["Add ThemeProvider to /proj/src/lib/components/uibin?"]
    );
}

#[test]
fn picker_selection_is_confirmed_then_installed() {
    let mut h = Harness::new();
    h.prompt = ScriptedPrompt::picking(vec![Component::Box]);

    let request = InstallRequest::new(ComponentSelection::Interactive);
    let report = completed(h.service().install(request, &h.layout).unwrap());

    assert_eq!(report.installed_components(), vec![Component::Box]);
    assert_eq!(h.prompt.questions().len(), 2);
}

#[test]
fn empty_picker_selection_writes_nothing() {
    let mut h = Harness::new();
    h.prompt = ScriptedPrompt::picking(Vec::new());

    let request = InstallRequest::new(ComponentSelection::Interactive);
    let outcome = h.service().install(request, &h.layout).unwrap();

    assert_eq!(outcome, InstallOutcome::NothingSelected);
    assert!(h.files().is_empty());
}

#[test]
fn existing_stylesheet_is_left_untouched() {
    let mut h = Harness::new();
    h.fs = MemoryFilesystem::new().with_file("/proj/src/app.css", "body { color: red; }");

    let report = completed(h.add(&["ThemeProvider"]).unwrap());

    assert_eq!(h.text("src/app.css"), "body { color: red; }");
    match &report.stylesheet {
        Some(StylesheetOutcome::LeftAlone {
            reference,
            reference_css,
            ..
        }) => {
            assert_eq!(reference, "builtin:app/styles.css");
            let css = reference_css.as_deref().expect("reference css");
            assert_eq!(css, h.store_text("app/styles.css"));
        }
        other => panic!("unexpected stylesheet outcome: {other:?}"),
    }
    assert!(report.has_warnings());
}

#[test]
fn rerun_produces_identical_files() {
    let h = Harness::new();
    h.add(&["ThemeProvider", "Card"]).unwrap();
    let first: Vec<_> = h
        .files()
        .into_iter()
        .map(|p| (p.clone(), h.fs.read(&p).unwrap()))
        .collect();

    h.add(&["ThemeProvider", "Card"]).unwrap();
    let second: Vec<_> = h
        .files()
        .into_iter()
        .map(|p| (p.clone(), h.fs.read(&p).unwrap()))
        .collect();

    assert_eq!(first, second);
}

#[test]
fn missing_component_template_is_skipped_with_warning() {
    let h = Harness::new();
    h.store.remove_tree("components/Card").unwrap();

    let report = completed(h.add(&["Card", "Button"]).unwrap());

    assert_eq!(report.installed_components(), vec![Component::Button]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].component, Component::Card);
    assert!(report.skipped[0].reason.contains("builtin:components/Card"));
    assert!(!h.has("src/lib/components/uibin/Card/Card.svelte"));
    assert_eq!(
        h.progress.warnings.borrow().as_slice(),
        ["Component template not found: Card"]
    );
}

#[test]
fn missing_bundle_is_recorded_not_fatal() {
    let h = Harness::new();
    h.store.remove_tree("hooks").unwrap();

    let report = completed(h.add(&["ThemeToggle"]).unwrap());

    assert_eq!(report.installed_components(), vec![Component::ThemeToggle]);
    assert_eq!(report.skipped_bundles.len(), 1);
    assert_eq!(report.skipped_bundles[0].bundle, AuxiliaryBundle::ThemeHook);
    assert!(!h.has("src/lib/hooks/useTheme.ts"));
}

#[test]
fn write_failure_aborts_with_filesystem_error() {
    let h = Harness::new();
    h.fs.deny_writes_under("/proj/src/lib/hooks");

    let err = h.add(&["Button", "ThemeToggle", "Card"]).unwrap_err();

    assert!(err.to_string().contains("/proj/src/lib/hooks"));
    // Button went in before the failure; Card never started.
    assert!(h.has("src/lib/components/uibin/Button/Button.svelte"));
    assert!(!h.has("src/lib/components/uibin/Card/Card.svelte"));
}

#[test]
fn writes_real_files_through_local_filesystem() {
    let temp = tempfile::TempDir::new().unwrap();
    let layout = TargetLayout::with_defaults(temp.path());
    let service = InstallService::new(
        Box::new(InMemoryStore::with_builtin().unwrap()),
        Box::new(LocalFilesystem::new()),
        Box::new(ScriptedPrompt::default()),
        Box::new(RecordingProgress::default()),
    );

    let request = InstallRequest::single(Component::ThemeToggle).skip_confirmation(true);
    completed(service.install(request, &layout).unwrap());

    let hook = temp.path().join("src/lib/hooks/useTheme.ts");
    let contents = std::fs::read_to_string(hook).unwrap();
    assert!(contents.contains("export function useTheme"));

    let toggle = temp
        .path()
        .join("src/lib/components/uibin/ThemeToggle/ThemeToggle.svelte");
    let contents = std::fs::read_to_string(toggle).unwrap();
    assert!(contents.contains("from '../../../hooks/useTheme'"));
}

// ── init ──────────────────────────────────────────────────────────────────────

#[test]
fn init_creates_directory_and_overwrites_stylesheet() {
    let mut h = Harness::new();
    h.fs = MemoryFilesystem::new().with_file("/proj/src/app.css", "old");

    let request = InitRequest {
        skip_confirmation: true,
        with_storybook: false,
    };
    let outcome = h.service().init(request, &h.layout).unwrap();

    let InitOutcome::Completed(report) = outcome else {
        panic!("expected completed init");
    };
    assert!(report.storybook.is_none());
    assert!(h.fs.exists(Path::new("/proj/src/lib/components/uibin")));
    assert_eq!(h.text("src/app.css"), h.store_text("app/styles.css"));
}

#[test]
fn init_seeds_storybook_with_rewritten_imports() {
    let h = Harness::new();
    let request = InitRequest {
        skip_confirmation: true,
        with_storybook: true,
    };
    let InitOutcome::Completed(report) = h.service().init(request, &h.layout).unwrap() else {
        panic!("expected completed init");
    };

    assert!(matches!(report.storybook, Some(StorybookOutcome::Seeded { ref files, .. }) if files.len() == 2));
    assert!(h.has(".storybook/main.ts"));
    let preview = h.text(".storybook/preview.ts");
    assert!(preview.contains("from '../src/lib/theme/colors'"));
    assert!(preview.contains("import '../src/app.css'"));
}

#[test]
fn init_storybook_failure_is_a_warning() {
    let h = Harness::new();
    h.store.remove_tree("storybook").unwrap();

    let request = InitRequest {
        skip_confirmation: true,
        with_storybook: true,
    };
    let InitOutcome::Completed(report) = h.service().init(request, &h.layout).unwrap() else {
        panic!("expected completed init");
    };

    assert!(matches!(report.storybook, Some(StorybookOutcome::Failed { .. })));
    assert!(h.has("src/app.css"));
    assert_eq!(h.progress.warnings.borrow().len(), 1);
}

#[test]
fn init_declined_writes_nothing() {
    let mut h = Harness::new();
    h.prompt = ScriptedPrompt::answering(false);

    let outcome = h.service().init(InitRequest::default(), &h.layout).unwrap();

    assert_eq!(outcome, InitOutcome::Declined);
    assert!(h.files().is_empty());
}

// ── catalog ───────────────────────────────────────────────────────────────────

#[test]
fn catalog_reports_availability() {
    let h = Harness::new();
    h.store.remove_tree("components/Box").unwrap();

    let entries = h.service().catalog().unwrap();

    assert_eq!(entries.len(), Component::ALL.len());
    let boxed = entries.iter().find(|e| e.component == Component::Box).unwrap();
    assert!(!boxed.available);
    let provider = entries
        .iter()
        .find(|e| e.component == Component::ThemeProvider)
        .unwrap();
    assert!(provider.available);
    assert!(provider.provides_stylesheet);
    assert_eq!(provider.bundles.len(), 4);
}
