//! Insert a file header.

use anyhow::Result;
use clap::Args;

use super::CliConfig;
use super::common::{CommandContext, FileArgs};

/// Command to insert a header into a file that needs one.
///
/// Files that already carry a header, or match an `ignore` pattern, are left
/// untouched.
///
/// # Examples
///
/// ```bash
/// fileheader insert src/main.rs
/// fileheader insert --language c include/util.h
/// ```
#[derive(Args, Debug)]
pub struct InsertCommand {
    #[command(flatten)]
    file: FileArgs,
}

impl InsertCommand {
    /// Execute the insert command.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written, the settings
    /// are invalid, or the template fails to render.
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let context = CommandContext::from_args(&self.file, config)?;
        let watcher = context.watcher();
        let mut document = context.open_document().await?;

        watcher.insert_file_header(Some(&mut document)).await?;
        context.write_back(&mut document)?;
        Ok(())
    }
}
