//! Run the pre-save hook.

use anyhow::Result;
use clap::Args;

use super::CliConfig;
use super::common::{CommandContext, FileArgs};

/// Command to save a file the way an editor would.
///
/// The file is treated as having unsaved changes: it gets a header when it
/// needs one and `autoHeader` is on, and its `last-modified:` and
/// `modified by:` fields are refreshed.
#[derive(Args, Debug)]
pub struct SaveCommand {
    #[command(flatten)]
    file: FileArgs,
}

impl SaveCommand {
    /// Execute the save command.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written, the settings
    /// are invalid, or the template fails to render.
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let context = CommandContext::from_args(&self.file, config)?;
        let watcher = context.watcher();
        let mut document = context.open_document().await?;

        document.mark_dirty();
        let before = document.to_text();
        watcher.on_will_save(&mut document).await?;

        if document.to_text() == before {
            document.mark_saved();
        }
        context.write_back(&mut document)?;
        Ok(())
    }
}
