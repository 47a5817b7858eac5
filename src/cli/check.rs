//! Report files that still need a header.

use anyhow::{Result, anyhow};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::CliConfig;
use super::common::CommandContext;

/// Command to check files for headers.
///
/// Prints one line per file and fails when any file needs a header. Ignored
/// files pass.
///
/// # Examples
///
/// ```bash
/// fileheader check src/main.rs src/lib.rs
/// fileheader --quiet check $(git ls-files '*.rs')
/// ```
#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Files to check.
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Language id for every file, instead of deriving it per extension.
    #[arg(short, long, value_name = "ID")]
    language: Option<String>,
}

impl CheckCommand {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error naming the number of files without a header, or when
    /// a file cannot be read or its settings are invalid.
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let mut missing = 0usize;

        for file in &self.files {
            let context = CommandContext::for_file(file, self.language.as_deref(), config)?;
            let document = context.open_document().await?;
            let needs = context.watcher().needs_header(&document).await?;

            if needs {
                missing += 1;
                println!("{} {} needs a header", "✗".red(), file.display());
            } else if !config.quiet {
                println!("{} {}", "✓".green(), file.display());
            }
        }

        if missing > 0 {
            return Err(anyhow!("{missing} of {} file(s) need a header", self.files.len()));
        }
        Ok(())
    }
}
