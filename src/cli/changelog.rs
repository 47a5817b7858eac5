//! Append a change-log entry.

use anyhow::Result;
use clap::Args;

use super::CliConfig;
use super::common::{CommandContext, FileArgs};

/// Command to append a change-log entry to a file header.
///
/// A file without a header gets one first. The first entry also writes the
/// `HISTORY:` caption and its column headings.
#[derive(Args, Debug)]
pub struct ChangelogCommand {
    #[command(flatten)]
    file: FileArgs,
}

impl ChangelogCommand {
    /// Execute the changelog command.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written, the settings
    /// are invalid, or the template fails to render.
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let context = CommandContext::from_args(&self.file, config)?;
        let watcher = context.watcher();
        let mut document = context.open_document().await?;

        watcher.insert_change_log(Some(&mut document)).await?;
        context.write_back(&mut document)?;
        Ok(())
    }
}
