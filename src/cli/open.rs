//! Run the open hook.

use anyhow::Result;
use clap::Args;

use super::CliConfig;
use super::common::{CommandContext, FileArgs};

/// Command to activate a file the way an editor would.
///
/// A file created within the last few seconds that needs a header gets one
/// and is saved, when `autoHeader` is on. Other files are left alone.
#[derive(Args, Debug)]
pub struct OpenCommand {
    #[command(flatten)]
    file: FileArgs,
}

impl OpenCommand {
    /// Execute the open command.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written, the settings
    /// are invalid, or the template fails to render.
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let context = CommandContext::from_args(&self.file, config)?;
        let watcher = context.watcher();
        let mut document = context.open_document().await?;

        watcher.on_did_change_active(Some(&mut document)).await
    }
}
