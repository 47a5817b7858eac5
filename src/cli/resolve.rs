//! Show what a header would be rendered from.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use super::CliConfig;
use super::common::{CommandContext, FileArgs};

/// Output format for [`ResolveCommand`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// TOML, in the same shape as the settings files
    #[default]
    Toml,
    /// JSON, for scripts
    Json,
}

/// Command to print the resolved template and variables for a file.
///
/// Nothing is written. Useful for debugging layered settings and `mapTo`
/// aliases.
#[derive(Args, Debug)]
pub struct ResolveCommand {
    #[command(flatten)]
    file: FileArgs,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Toml)]
    format: OutputFormat,
}

impl ResolveCommand {
    /// Execute the resolve command.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the settings are invalid,
    /// or serialization fails.
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let context = CommandContext::from_args(&self.file, config)?;
        let document = context.open_document().await?;
        let inspection = context.watcher().inspect(&document).await?;

        let output = match self.format {
            OutputFormat::Toml => {
                toml::to_string_pretty(&inspection).context("Failed to serialize as TOML")?
            }
            OutputFormat::Json => {
                serde_json::to_string_pretty(&inspection).context("Failed to serialize as JSON")?
            }
        };

        println!("{}", output.trim_end());
        Ok(())
    }
}
