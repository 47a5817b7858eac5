//! Test utilities for fileheader
//!
//! Fakes for the host collaborators plus a temporary workspace fixture, so
//! header operations can be driven end to end without touching the real
//! home directory, git configuration or file timestamps.
//!
//! # Example
//!
//! ```rust,no_run
//! use fileheader_cli::test_utils::{FixedAuthor, RecordingNotifier, TestWorkspace};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let workspace = TestWorkspace::new()?;
//! workspace.write_settings("[config]\nauthor = \"Jane\"\n")?;
//! let file = workspace.write_file("src/main.rs", "fn main() {}\n")?;
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once};
use std::time::SystemTime;
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::FileSettings;
use crate::constants::SETTINGS_FILE_NAME;
use crate::host::{AuthorLookup, FileStat, Notifier};

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` when given, otherwise
/// `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=fileheader_cli=trace cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// Kind of a recorded notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// [`Notifier::info`]
    Info,
    /// [`Notifier::error`]
    Error,
}

/// Notifier that keeps every message for later assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(NotificationKind, String)>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<(NotificationKind, String)> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }

    /// Messages of one kind.
    #[must_use]
    pub fn of_kind(&self, kind: NotificationKind) -> Vec<String> {
        self.messages().into_iter().filter(|(k, _)| *k == kind).map(|(_, m)| m).collect()
    }

    fn record(&self, kind: NotificationKind, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push((kind, message.to_string()));
        }
    }
}

impl Notifier for RecordingNotifier {
    fn info(&self, message: &str) {
        self.record(NotificationKind::Info, message);
    }

    fn error(&self, message: &str) {
        self.record(NotificationKind::Error, message);
    }
}

/// Author lookup with a fixed answer.
#[derive(Debug, Clone, Default)]
pub struct FixedAuthor(pub Option<String>);

impl FixedAuthor {
    /// A lookup that finds `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self(Some(name.into()))
    }

    /// A lookup that finds nothing.
    #[must_use]
    pub const fn unknown() -> Self {
        Self(None)
    }
}

impl AuthorLookup for FixedAuthor {
    async fn full_name(&self) -> Option<String> {
        self.0.clone()
    }
}

/// File timestamps chosen by the test.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeFileStat {
    /// Birth time reported for every path
    pub birth: Option<SystemTime>,
    /// Change time reported for every path
    pub change: Option<SystemTime>,
}

impl FakeFileStat {
    /// Every file was born at `time`.
    #[must_use]
    pub const fn born_at(time: SystemTime) -> Self {
        Self {
            birth: Some(time),
            change: Some(time),
        }
    }

    /// Every file was born just now.
    #[must_use]
    pub fn fresh() -> Self {
        Self::born_at(SystemTime::now())
    }
}

impl FileStat for FakeFileStat {
    fn birth_time(&self, _path: &Path) -> Option<SystemTime> {
        self.birth
    }

    fn change_time(&self, _path: &Path) -> Option<SystemTime> {
        self.change
    }
}

/// A temporary workspace directory, removed on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    /// Create an empty workspace.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new().context("Failed to create temp workspace")?;
        Ok(Self {
            temp_dir,
        })
    }

    /// Workspace root.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the workspace.
    #[must_use]
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write a file, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_file(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Read a file back.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn read_file(&self, relative: &str) -> Result<String> {
        let path = self.path(relative);
        std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }

    /// Write the workspace settings layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_settings(&self, toml: &str) -> Result<PathBuf> {
        self.write_file(SETTINGS_FILE_NAME, toml)
    }

    /// A settings source over this workspace, with no global layer.
    #[must_use]
    pub fn settings(&self) -> FileSettings {
        FileSettings::new(None, Some(self.root().to_path_buf()))
    }
}
