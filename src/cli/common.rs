//! Common utilities for CLI commands

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::CliConfig;
use crate::config::FileSettings;
use crate::document::TextDocument;
use crate::host::{ConsoleNotifier, SystemAuthor, SystemFileStat};
use crate::language::language_id_for_path;
use crate::utils::platform::{absolutize, resolve_path};
use crate::watcher::FileHeaderWatcher;

/// The watcher as wired up for the command line.
pub type CliWatcher = FileHeaderWatcher<FileSettings, SystemAuthor, ConsoleNotifier, SystemFileStat>;

/// Arguments shared by every single-file command.
#[derive(Args, Debug, Clone)]
pub struct FileArgs {
    /// The file to operate on.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Language id, instead of deriving it from the file extension.
    #[arg(short, long, value_name = "ID")]
    pub language: Option<String>,
}

/// Everything a command needs to operate on one file.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Absolute path of the file
    pub file: PathBuf,
    /// Language id of the document
    pub language_id: String,
    /// Workspace root
    pub workspace_root: PathBuf,
    /// Global settings file, if any
    pub global_settings: Option<PathBuf>,
    /// Suppress info notifications
    pub quiet: bool,
}

impl CommandContext {
    /// Build the context for `file`.
    ///
    /// # Errors
    ///
    /// Returns an error if a path cannot be expanded or made absolute.
    pub fn for_file(file: &Path, language: Option<&str>, config: &CliConfig) -> Result<Self> {
        let file = resolve_path(&file.to_string_lossy())?;

        let workspace_root = match &config.workspace {
            Some(dir) => resolve_path(&dir.to_string_lossy())?,
            None => discover_workspace_root(&file)?,
        };

        let global_settings = match &config.config_path {
            Some(path) => Some(resolve_path(path)?),
            None => FileSettings::default_global_path().ok(),
        };

        let language_id = language.map_or_else(|| language_id_for_path(&file), str::to_string);

        debug!(
            "{} as {language_id} in workspace {}",
            file.display(),
            workspace_root.display()
        );

        Ok(Self {
            file,
            language_id,
            workspace_root,
            global_settings,
            quiet: config.quiet,
        })
    }

    /// Build the context from [`FileArgs`].
    ///
    /// # Errors
    ///
    /// See [`Self::for_file`].
    pub fn from_args(args: &FileArgs, config: &CliConfig) -> Result<Self> {
        Self::for_file(&args.file, args.language.as_deref(), config)
    }

    /// A watcher over the file system, the system author and the console.
    #[must_use]
    pub fn watcher(&self) -> CliWatcher {
        let settings =
            FileSettings::new(self.global_settings.clone(), Some(self.workspace_root.clone()));

        FileHeaderWatcher::new(
            settings,
            SystemAuthor,
            ConsoleNotifier::new(self.quiet),
            SystemFileStat,
        )
        .with_workspace_root(&self.workspace_root)
    }

    /// Open the file as a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub async fn open_document(&self) -> Result<TextDocument> {
        TextDocument::open(&self.file, &self.language_id).await
    }

    /// Write `document` back when it has unsaved changes.
    ///
    /// Returns whether the file was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_back(&self, document: &mut TextDocument) -> Result<bool> {
        if !document.is_dirty() {
            debug!("{} unchanged", self.file.display());
            return Ok(false);
        }

        document.save()?;
        debug!("Wrote {}", self.file.display());
        Ok(true)
    }
}

/// Workspace root for a file when none is given.
///
/// The nearest ancestor holding `.git`; otherwise the current directory when
/// it contains the file; otherwise the file's directory.
///
/// # Errors
///
/// Returns an error if the current directory cannot be read.
pub fn discover_workspace_root(file: &Path) -> Result<PathBuf> {
    let directory = file.parent().map(Path::to_path_buf).unwrap_or_default();

    if let Some(repository) = directory.ancestors().find(|dir| dir.join(".git").exists()) {
        return Ok(repository.to_path_buf());
    }

    let cwd = absolutize(Path::new(".")).context("Failed to determine workspace root")?;
    if file.starts_with(&cwd) {
        return Ok(cwd);
    }

    Ok(directory)
}
