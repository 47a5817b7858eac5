//! Command-line interface for fileheader.
//!
//! The binary stands in for an editor host: every subcommand opens one file as
//! a document, runs a header operation or lifecycle hook on it, and writes the
//! file back atomically when the operation changed it.
//!
//! # Commands
//!
//! - `insert` - insert a header when the file needs one (`insertFileHeader`)
//! - `changelog` - append a change-log entry (`insertChangeLog`)
//! - `save` - run the pre-save hook as if the file had unsaved changes
//! - `open` - run the "active document changed" hook
//! - `check` - fail when any file still needs a header
//! - `resolve` - print the template and variables a header would use
//!
//! # Global Options
//!
//! - `--verbose` / `--quiet` - log level and notification output
//! - `--config PATH` - global settings file (also `FILEHEADER_CONFIG_PATH`)
//! - `--workspace DIR` - workspace root for settings, ignore patterns and paths
//!
//! # Examples
//!
//! ```bash
//! fileheader insert src/main.rs
//! fileheader --workspace . changelog src/lib.rs
//! fileheader check src/*.rs
//! fileheader resolve --format json scripts/build.py
//! ```

mod changelog;
mod check;
pub mod common;
mod insert;
mod open;
mod resolve;
mod save;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::constants::CONFIG_PATH_ENV;

/// Runtime configuration for CLI execution.
///
/// Built from the global flags by [`Cli::build_config`], or constructed
/// directly by tests and embedding programs.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter directive; `None` leaves logging off.
    pub log_level: Option<String>,

    /// Suppress info notifications.
    pub quiet: bool,

    /// Global settings file; `None` uses the default location.
    pub config_path: Option<String>,

    /// Workspace root; `None` discovers it from the file's location.
    pub workspace: Option<PathBuf>,
}

impl CliConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber.
    ///
    /// `RUST_LOG` takes precedence over the configured level. Log lines go to
    /// stderr so they never mix with command output. Calling this twice is
    /// harmless; the second subscriber is not installed.
    pub fn init_logging(&self) {
        let Some(level) = &self.log_level else {
            return;
        };

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Insert and maintain file headers from the command line.
#[derive(Parser)]
#[command(name = "fileheader", version, about, long_about = None)]
pub struct Cli {
    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,

    /// Show debug logs.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the global settings file.
    ///
    /// Defaults to `~/.fileheader/config.toml`. A path that does not exist
    /// disables the global layer.
    #[arg(short, long, global = true, env = CONFIG_PATH_ENV)]
    config: Option<String>,

    /// Workspace root directory.
    ///
    /// Holds the workspace `.fileheader.toml` and anchors ignore patterns and
    /// path variables. Defaults to the nearest ancestor containing `.git`,
    /// then the current directory when it contains the file, then the file's
    /// own directory.
    #[arg(short, long, global = true)]
    workspace: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Insert a file header if the file needs one.
    Insert(insert::InsertCommand),

    /// Append a change-log entry to the file header.
    Changelog(changelog::ChangelogCommand),

    /// Run the pre-save hook on a file and write it back.
    Save(save::SaveCommand),

    /// Run the open hook: headers are added to files created moments ago.
    Open(open::OpenCommand),

    /// Exit with an error when any file needs a header.
    Check(check::CheckCommand),

    /// Print the resolved template and variables for a file.
    Resolve(resolve::ResolveCommand),
}

impl Cli {
    /// Execute the CLI with a configuration built from its flags.
    ///
    /// # Errors
    ///
    /// Returns the error of the executed command.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(config).await
    }

    /// Translate the global flags into a [`CliConfig`].
    ///
    /// `--verbose` selects `debug`, `--quiet` turns logging off, and the
    /// default is `warn`.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some("warn".to_string())
        };

        CliConfig {
            log_level,
            quiet: self.quiet,
            config_path: self.config.clone(),
            workspace: self.workspace.clone(),
        }
    }

    /// Execute the CLI with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns the error of the executed command.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        match self.command {
            Commands::Insert(cmd) => cmd.execute(&config).await,
            Commands::Changelog(cmd) => cmd.execute(&config).await,
            Commands::Save(cmd) => cmd.execute(&config).await,
            Commands::Open(cmd) => cmd.execute(&config).await,
            Commands::Check(cmd) => cmd.execute(&config).await,
            Commands::Resolve(cmd) => cmd.execute(&config).await,
        }
    }
}
