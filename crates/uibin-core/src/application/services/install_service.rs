//! Install Service - main application orchestrator.
//!
//! This service coordinates the component install workflow:
//! 1. Resolve the selection (picker when no names were given)
//! 2. Confirm once, before any write
//! 3. Copy each component tree, then the shared bundles it pulls in
//! 4. Ensure the app stylesheet when the root component was selected
//!
//! Components are processed one after another. A missing template skips that
//! component with a warning; an I/O failure aborts the run. Writes are not
//! transactional, so an aborted run leaves the files copied so far in place.

use std::borrow::Cow;
use std::path::{Component as PathComponent, Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ProgressReporter, Prompt, TemplateFile, TemplateStore},
        services::report::{
            CatalogEntry, InitOutcome, InitReport, InstallOutcome, InstallReport,
            InstalledBundle, InstalledComponent, SkippedBundle, SkippedComponent,
            StorybookOutcome, StylesheetOutcome,
        },
    },
    domain::{
        AuxiliaryBundle, COMPONENT_REGISTRY, Component, ComponentSelection, DomainError,
        ImportRewriter, InitRequest, InstallRequest, STORYBOOK_TEMPLATE_ROOT,
        STYLESHEET_TEMPLATE, TargetLayout, catalog,
    },
    error::UibinResult,
};

/// Main install service.
///
/// Owns the adapters for one invocation.
pub struct InstallService {
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
    prompt: Box<dyn Prompt>,
    progress: Box<dyn ProgressReporter>,
}

impl InstallService {
    /// Create a new install service with the given adapters.
    pub fn new(
        store: Box<dyn TemplateStore>,
        filesystem: Box<dyn Filesystem>,
        prompt: Box<dyn Prompt>,
        progress: Box<dyn ProgressReporter>,
    ) -> Self {
        Self {
            store,
            filesystem,
            prompt,
            progress,
        }
    }

    /// Add components to the project described by `layout`.
    #[instrument(skip_all, fields(root = %layout.root().display()))]
    pub fn install(
        &self,
        request: InstallRequest,
        layout: &TargetLayout,
    ) -> UibinResult<InstallOutcome> {
        // 1. Resolve selection
        let components = match request.selection() {
            ComponentSelection::Interactive => {
                self.prompt.select_components(&Component::ALL)?
            }
            selection => selection.resolve().unwrap_or_default(),
        };

        if components.is_empty() {
            info!("Nothing selected");
            return Ok(InstallOutcome::NothingSelected);
        }

        let components_dir = layout.components_dir();

        // 2. Confirm before touching the disk
        if !request.skips_confirmation() {
            let names: Vec<_> = components.iter().map(Component::as_str).collect();
            let question = format!(
                "Add {} to {}?",
                names.join(", "),
                components_dir.display()
            );
            if !self.prompt.confirm(&question, true)? {
                info!("Installation declined");
                return Ok(InstallOutcome::Declined);
            }
        }

        // 3. + 4. Copy
        self.progress.start("Adding components...");
        match self.copy_components(&request, &components, layout) {
            Ok(report) => {
                self.progress
                    .finish(&format!("Components added to {}", components_dir.display()));
                info!(
                    installed = report.installed.len(),
                    skipped = report.skipped.len(),
                    files = report.files_written(),
                    "Install completed"
                );
                Ok(InstallOutcome::Completed(report))
            }
            Err(e) => {
                warn!(error = %e, "Install aborted");
                self.progress.fail("Failed to add components");
                Err(e)
            }
        }
    }

    /// Prepare a project: component directory, stylesheet, optional Storybook.
    #[instrument(skip_all, fields(root = %layout.root().display()))]
    pub fn init(&self, request: InitRequest, layout: &TargetLayout) -> UibinResult<InitOutcome> {
        if !request.skip_confirmation
            && !self
                .prompt
                .confirm("This will set up uibin in your project. Continue?", true)?
        {
            info!("Initialisation declined");
            return Ok(InitOutcome::Declined);
        }

        self.progress.start("Setting up uibin in your project...");
        match self.prepare_project(request, layout) {
            Ok(report) => {
                match &report.storybook {
                    Some(StorybookOutcome::Failed { .. }) => self
                        .progress
                        .finish("uibin initialised (Storybook configuration skipped)"),
                    Some(StorybookOutcome::Seeded { .. }) => self
                        .progress
                        .finish("uibin initialised with Storybook configuration"),
                    None => self.progress.finish("uibin initialised"),
                }
                Ok(InitOutcome::Completed(report))
            }
            Err(e) => {
                warn!(error = %e, "Initialisation aborted");
                self.progress.fail("Failed to initialise uibin");
                Err(e)
            }
        }
    }

    /// Every known component with its dependencies and template availability.
    pub fn catalog(&self) -> UibinResult<Vec<CatalogEntry>> {
        COMPONENT_REGISTRY
            .iter()
            .map(|def| {
                Ok(CatalogEntry {
                    component: def.component,
                    description: def.description,
                    bundles: def.bundles.to_vec(),
                    provides_stylesheet: def.provides_stylesheet,
                    available: self
                        .store
                        .files(&def.component.template_root())?
                        .is_some(),
                })
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn copy_components(
        &self,
        request: &InstallRequest,
        components: &[Component],
        layout: &TargetLayout,
    ) -> UibinResult<InstallReport> {
        let rewriter = ImportRewriter::new(layout.lib_dir());
        let mut report = InstallReport {
            components_dir: layout.components_dir(),
            ..InstallReport::default()
        };

        self.filesystem.create_dir_all(&report.components_dir)?;

        for &component in components {
            let root = component.template_root();
            let Some(files) = self.store.files(&root)? else {
                let reason = format!("template not found: {}", self.store.locate(&root));
                warn!(%component, %reason, "Skipping component");
                self.progress
                    .warn(&format!("Component template not found: {component}"));
                report.skipped.push(SkippedComponent { component, reason });
                continue;
            };

            let target_dir = layout.component_dir(component);
            self.filesystem.create_dir_all(&target_dir)?;

            let mut written = Vec::with_capacity(files.len());
            let mut auxiliary_skipped = 0;
            for file in &files {
                if !request.wants(&file.relative) {
                    debug!(file = %file.relative, "Skipping auxiliary file");
                    auxiliary_skipped += 1;
                    continue;
                }
                written.push(self.copy_file(file, &target_dir, &rewriter)?);
            }
            debug!(%component, files = written.len(), "Component copied");
            report.installed.push(InstalledComponent {
                component,
                files: written,
                auxiliary_skipped,
            });
        }

        // Each bundle once per run, however many installed components share it.
        for bundle in catalog::bundles_for(&report.installed_components()) {
            match self.copy_bundle(bundle, layout, &rewriter)? {
                Ok(installed) => report.bundles.push(installed),
                Err(skipped) => {
                    self.progress
                        .warn(&format!("Shared files not found: {}", skipped.bundle));
                    report.skipped_bundles.push(skipped);
                }
            }
        }

        if catalog::needs_stylesheet(components) {
            report.stylesheet = Some(self.ensure_stylesheet(layout)?);
        }

        Ok(report)
    }

    /// Copy one shared bundle. The inner `Err` is a skip, not a failure.
    fn copy_bundle(
        &self,
        bundle: AuxiliaryBundle,
        layout: &TargetLayout,
        rewriter: &ImportRewriter,
    ) -> UibinResult<Result<InstalledBundle, SkippedBundle>> {
        let def = catalog::find_bundle(bundle)
            .ok_or_else(|| DomainError::UnknownBundle(bundle.to_string()))?;

        let files: Vec<TemplateFile> = self
            .store
            .files(def.template_root)?
            .unwrap_or_default()
            .into_iter()
            .filter(|f| def.includes(&f.relative))
            .collect();

        if files.is_empty() {
            let reason = format!(
                "template not found: {}",
                self.store.locate(def.template_root)
            );
            warn!(%bundle, %reason, "Skipping bundle");
            return Ok(Err(SkippedBundle { bundle, reason }));
        }

        let target_dir = layout.bundle_dir(bundle)?;
        let mut written = Vec::with_capacity(files.len());
        for file in &files {
            written.push(self.copy_file(file, &target_dir, rewriter)?);
        }
        debug!(%bundle, files = written.len(), "Bundle copied");
        Ok(Ok(InstalledBundle {
            bundle,
            files: written,
        }))
    }

    /// Copy the reference stylesheet unless the project already has one.
    fn ensure_stylesheet(&self, layout: &TargetLayout) -> UibinResult<StylesheetOutcome> {
        let path = layout.stylesheet();
        if self.filesystem.exists(&path) {
            let reference = self.store.locate(STYLESHEET_TEMPLATE);
            let reference_css = self
                .store
                .read(STYLESHEET_TEMPLATE)?
                .and_then(|bytes| String::from_utf8(bytes).ok());
            info!(path = %path.display(), "Stylesheet exists, leaving it alone");
            return Ok(StylesheetOutcome::LeftAlone {
                path,
                reference,
                reference_css,
            });
        }

        self.write_stylesheet(&path)?;
        Ok(StylesheetOutcome::Created { path })
    }

    fn write_stylesheet(&self, path: &Path) -> UibinResult<()> {
        let contents =
            self.store
                .read(STYLESHEET_TEMPLATE)?
                .ok_or_else(|| ApplicationError::TemplateMissing {
                    path: self.store.locate(STYLESHEET_TEMPLATE),
                })?;
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, &contents)?;
        debug!(path = %path.display(), "Stylesheet written");
        Ok(())
    }

    fn prepare_project(
        &self,
        request: InitRequest,
        layout: &TargetLayout,
    ) -> UibinResult<InitReport> {
        let components_dir = layout.components_dir();
        self.filesystem.create_dir_all(&components_dir)?;

        let stylesheet = layout.stylesheet();
        self.write_stylesheet(&stylesheet)?;

        let storybook = request.with_storybook.then(|| {
            match self.seed_storybook(layout) {
                Ok(files) => StorybookOutcome::Seeded {
                    dir: layout.storybook_dir(),
                    files,
                },
                Err(e) => {
                    warn!(error = %e, "Storybook seeding failed");
                    self.progress
                        .warn("Failed to set up Storybook configuration");
                    StorybookOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            }
        });

        Ok(InitReport {
            components_dir,
            stylesheet,
            storybook,
        })
    }

    fn seed_storybook(&self, layout: &TargetLayout) -> UibinResult<Vec<PathBuf>> {
        let files = self.store.files(STORYBOOK_TEMPLATE_ROOT)?.ok_or_else(|| {
            ApplicationError::TemplateMissing {
                path: self.store.locate(STORYBOOK_TEMPLATE_ROOT),
            }
        })?;

        let rewriter = ImportRewriter::new(layout.lib_dir());
        let target_dir = layout.storybook_dir();
        files
            .iter()
            .map(|file| self.copy_file(file, &target_dir, &rewriter))
            .collect()
    }

    /// Copy one template file under `target_dir`, rewriting imports in
    /// source files. Returns the destination path.
    fn copy_file(
        &self,
        file: &TemplateFile,
        target_dir: &Path,
        rewriter: &ImportRewriter,
    ) -> UibinResult<PathBuf> {
        let dest = join_relative(target_dir, &file.relative)?;
        if let Some(parent) = dest.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        let contents = rewrite_contents(&file.contents, &dest, rewriter);
        self.filesystem.write_file(&dest, &contents)?;
        debug!(dest = %dest.display(), "File copied");
        Ok(dest)
    }
}

/// Apply the import rewriter when `dest` is a UTF-8 source file.
fn rewrite_contents<'a>(contents: &'a [u8], dest: &Path, rewriter: &ImportRewriter) -> Cow<'a, [u8]> {
    if !ImportRewriter::applies_to(dest) {
        return Cow::Borrowed(contents);
    }
    match std::str::from_utf8(contents) {
        Ok(text) => match rewriter.rewrite(text, dest) {
            Cow::Borrowed(_) => Cow::Borrowed(contents),
            Cow::Owned(rewritten) => Cow::Owned(rewritten.into_bytes()),
        },
        Err(_) => {
            debug!(dest = %dest.display(), "Not UTF-8, copying verbatim");
            Cow::Borrowed(contents)
        }
    }
}

/// Join a `/`-separated template path onto `dir`, refusing anything that
/// would land outside it.
fn join_relative(dir: &Path, relative: &str) -> Result<PathBuf, DomainError> {
    let mut out = dir.to_path_buf();
    for part in relative.split('/').filter(|p| !p.is_empty()) {
        let mut components = Path::new(part).components();
        match (components.next(), components.next()) {
            (Some(PathComponent::Normal(name)), None) => out.push(name),
            (Some(PathComponent::CurDir), None) => {}
            _ => {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: relative.to_owned(),
                });
            }
        }
    }
    if out == dir {
        return Err(DomainError::AbsolutePathNotAllowed {
            path: relative.to_owned(),
        });
    }
    Ok(out)
}
