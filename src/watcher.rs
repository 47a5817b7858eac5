//! Lifecycle hooks and header commands.
//!
//! [`FileHeaderWatcher`] ties the pieces together for one host. It answers the
//! two editor events ("document about to be saved" and "active document
//! changed") and exposes the two user commands, `insertFileHeader` and
//! `insertChangeLog`.
//!
//! Every operation loads the settings layers afresh, resolves the template for
//! the document, computes its edits from one snapshot of the lines and applies
//! them in a single batch. The watcher holds no per-document state.
//!
//! # Failure Handling
//!
//! - a command without a document notifies the user and returns
//!   [`FileHeaderError::NoActiveDocument`] before touching anything
//! - a failed author lookup renders an empty author
//! - a header without an end marker gets no change log
//! - an ignored file is skipped

use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, trace};

use crate::config::{EffectiveSettings, SettingsSource, VariableEntry};
use crate::core::FileHeaderError;
use crate::document::TextDocument;
use crate::header::{
    IgnoreMatcher, change_log_edit, change_log_source, insert_header_edit, locate_change_log,
    needs_header, update_header_edits,
};
use crate::host::{AuthorLookup, FileStat, Notifier, creation_time, is_new_file, resolve_author};
use crate::language::{ResolvedTemplate, resolve};
use crate::templating::{
    DocumentPaths, HeaderRenderer, RenderFacts, VariableEnvironment, build_environment,
    format_datetime, header_source,
};

/// Error notification for commands run without a document.
pub const NO_ACTIVE_DOCUMENT_MESSAGE: &str = "fileheader requires an active document.";

/// Info notification after a header was inserted.
pub const HEADER_INSERTED_MESSAGE: &str = "fileheader inserted a file header.";

/// What a header for one document would be rendered from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    /// Language id of the document
    pub language_id: String,
    /// Whether the document needs a header
    pub needs_header: bool,
    /// Full variable environment, in precedence order
    pub variables: Vec<VariableEntry>,
    /// Resolved template
    pub template: ResolvedTemplate,
}

/// Settings and template in effect for one operation on one document.
struct Prepared {
    settings: EffectiveSettings,
    template: ResolvedTemplate,
    ignore: IgnoreMatcher,
}

/// Dispatches editor events and commands to the header operations.
pub struct FileHeaderWatcher<S, A, N, F> {
    settings: S,
    author: A,
    notifier: N,
    stat: F,
    workspace_root: Option<PathBuf>,
    disposed: AtomicBool,
}

impl<S, A, N, F> FileHeaderWatcher<S, A, N, F>
where
    S: SettingsSource,
    A: AuthorLookup,
    N: Notifier,
    F: FileStat,
{
    /// Create a watcher from its collaborators.
    pub fn new(settings: S, author: A, notifier: N, stat: F) -> Self {
        Self {
            settings,
            author,
            notifier,
            stat,
            workspace_root: None,
            disposed: AtomicBool::new(false),
        }
    }

    /// Set the workspace root used for ignore matching and path variables.
    #[must_use]
    pub fn with_workspace_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.workspace_root = Some(root.into());
        self
    }

    /// The notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Stop reacting to events. Commands keep working.
    pub fn dispose(&self) {
        if !self.disposed.swap(true, Ordering::SeqCst) {
            debug!("File header watcher disposed");
        }
    }

    /// Whether [`Self::dispose`] has been called.
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    async fn prepare(&self, document: &TextDocument) -> Result<Prepared> {
        let settings = self.settings.load_layers(document.path()).await?.effective();
        let template = resolve(&settings.templates, document.language_id(), Some(document.path()));
        let ignore = IgnoreMatcher::new(settings.config.ignore_patterns())?;

        trace!("Template for {}: {template:?}", document.path().display());
        Ok(Prepared {
            settings,
            template,
            ignore,
        })
    }

    fn require<'d>(&self, document: Option<&'d mut TextDocument>) -> Result<&'d mut TextDocument> {
        match document {
            Some(document) => Ok(document),
            None => {
                self.notifier.error(NO_ACTIVE_DOCUMENT_MESSAGE);
                Err(FileHeaderError::NoActiveDocument.into())
            }
        }
    }

    fn needs(&self, document: &TextDocument, prepared: &Prepared) -> bool {
        needs_header(document, &prepared.template, &prepared.ignore, self.workspace_root.as_deref())
    }

    /// Whether `document` needs a header under its current settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be loaded or an ignore pattern
    /// is invalid.
    pub async fn needs_header(&self, document: &TextDocument) -> Result<bool> {
        let prepared = self.prepare(document).await?;
        Ok(self.needs(document, &prepared))
    }

    /// Resolve the template and variables for `document` without editing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be loaded or an ignore pattern
    /// is invalid.
    pub async fn inspect(&self, document: &TextDocument) -> Result<Inspection> {
        let prepared = self.prepare(document).await?;
        let needs_header = self.needs(document, &prepared);
        let variables = self.environment(document, &prepared).await;

        Ok(Inspection {
            language_id: document.language_id().to_string(),
            needs_header,
            variables: variables.entries().to_vec(),
            template: prepared.template,
        })
    }

    /// The `insertFileHeader` command.
    ///
    /// Inserts a rendered header at the top of the document unless it already
    /// has one or is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`FileHeaderError::NoActiveDocument`] without a document, or
    /// an error from loading settings or rendering.
    pub async fn insert_file_header(&self, document: Option<&mut TextDocument>) -> Result<()> {
        let document = self.require(document)?;
        let prepared = self.prepare(document).await?;

        if !self.needs(document, &prepared) {
            debug!("{} needs no header", document.path().display());
            return Ok(());
        }
        self.insert_header(document, &prepared).await
    }

    /// Rewrite the `last-modified:` and `modified by:` fields of an existing
    /// header. Documents without a header are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`FileHeaderError::NoActiveDocument`] without a document, or
    /// an error from loading settings.
    pub async fn update_file_header(&self, document: Option<&mut TextDocument>) -> Result<()> {
        let document = self.require(document)?;
        let prepared = self.prepare(document).await?;

        if self.needs(document, &prepared) {
            debug!("{} has no header to update", document.path().display());
            return Ok(());
        }
        self.update_header(document, &prepared).await
    }

    /// The `insertChangeLog` command.
    ///
    /// Inserts a header first when the document needs one, then appends a
    /// change-log entry above the header's end marker, adding the caption and
    /// column headings the first time.
    ///
    /// # Errors
    ///
    /// Returns [`FileHeaderError::NoActiveDocument`] without a document, or
    /// an error from loading settings or rendering.
    pub async fn insert_change_log(&self, document: Option<&mut TextDocument>) -> Result<()> {
        let document = self.require(document)?;
        let prepared = self.prepare(document).await?;

        if self.needs(document, &prepared) {
            self.insert_header(document, &prepared).await?;
        }

        let snapshot = document.snapshot();
        let Some(target) = locate_change_log(&snapshot, &prepared.template) else {
            return Ok(());
        };

        let source = change_log_source(target.has_caption);
        let rendered = self.render(&source, document, &prepared).await?;
        document.apply_edits(vec![change_log_edit(&snapshot, target, &rendered)]);

        info!("Added change log entry to {}", document.path().display());
        Ok(())
    }

    /// Hook for "document about to be saved".
    ///
    /// Clean documents are skipped. A document without a header gets one when
    /// `autoHeader` is on and is left alone otherwise; then the modification
    /// fields are rewritten.
    ///
    /// # Errors
    ///
    /// Returns an error from loading settings or rendering.
    pub async fn on_will_save(&self, document: &mut TextDocument) -> Result<()> {
        if self.is_disposed() {
            trace!("Ignoring save of {} after dispose", document.path().display());
            return Ok(());
        }
        if !document.is_dirty() {
            return Ok(());
        }

        let prepared = self.prepare(document).await?;
        if self.needs(document, &prepared) {
            if !prepared.settings.config.auto_header() {
                debug!("autoHeader is off; saving {} without a header", document.path().display());
                return Ok(());
            }
            self.insert_header(document, &prepared).await?;
        }

        self.update_header(document, &prepared).await
    }

    /// Hook for "active document changed".
    ///
    /// A freshly created file that needs a header gets one when `autoHeader`
    /// is on, and is saved right away.
    ///
    /// # Errors
    ///
    /// Returns an error from loading settings, rendering or saving.
    pub async fn on_did_change_active(&self, document: Option<&mut TextDocument>) -> Result<()> {
        if self.is_disposed() {
            return Ok(());
        }
        let Some(document) = document else {
            return Ok(());
        };

        if !is_new_file(&self.stat, document.path(), Local::now()) {
            trace!("{} is not a new file", document.path().display());
            return Ok(());
        }

        let prepared = self.prepare(document).await?;
        if !self.needs(document, &prepared) || !prepared.settings.config.auto_header() {
            return Ok(());
        }

        self.insert_header(document, &prepared).await?;
        self.save(document).await
    }

    /// Save `document` the way the host does: run [`Self::on_will_save`],
    /// then write the file.
    ///
    /// # Errors
    ///
    /// Returns an error from the save hook or from writing the file.
    pub async fn save(&self, document: &mut TextDocument) -> Result<()> {
        self.on_will_save(document).await?;
        document.save()
    }

    async fn render_facts(&self, document: &TextDocument, prepared: &Prepared) -> RenderFacts {
        let author = resolve_author(&prepared.settings.config, &self.author).await;
        let now = Local::now();
        let created = creation_time(&self.stat, document.path()).unwrap_or(now);

        RenderFacts {
            author,
            created,
            now,
        }
    }

    async fn environment(&self, document: &TextDocument, prepared: &Prepared) -> VariableEnvironment {
        let facts = self.render_facts(document, prepared).await;
        let paths = DocumentPaths::discover(document.path(), self.workspace_root.as_deref());
        build_environment(&prepared.template, &prepared.settings, &facts, &paths)
    }

    async fn render(
        &self,
        source: &str,
        document: &TextDocument,
        prepared: &Prepared,
    ) -> Result<String> {
        let variables = self.environment(document, prepared).await;
        HeaderRenderer::new(prepared.settings.config.dateformat()).render(source, &variables)
    }

    async fn insert_header(&self, document: &mut TextDocument, prepared: &Prepared) -> Result<()> {
        let rendered = self.render(&header_source(&prepared.template), document, prepared).await?;
        document.apply_edits(vec![insert_header_edit(&rendered)]);

        info!("Inserted header into {}", document.path().display());
        self.notifier.info(HEADER_INSERTED_MESSAGE);
        Ok(())
    }

    async fn update_header(&self, document: &mut TextDocument, prepared: &Prepared) -> Result<()> {
        let author = resolve_author(&prepared.settings.config, &self.author).await.unwrap_or_default();
        let timestamp = format_datetime(&Local::now(), prepared.settings.config.dateformat());

        let snapshot = document.snapshot();
        let edits = update_header_edits(&snapshot, &prepared.template, &timestamp, &author);
        if edits.is_empty() {
            debug!("No modification fields in {}", document.path().display());
            return Ok(());
        }

        document.apply_edits(edits);
        Ok(())
    }
}
