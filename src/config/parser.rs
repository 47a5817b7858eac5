//! TOML parsing of settings files.
//!
//! Read failures keep their [`std::io::Error`] cause; syntax and schema errors
//! become [`FileHeaderError::ConfigParse`] naming the offending file.
//!
//! Example error output:
//! ```text
//! Invalid settings file /path/to/.fileheader.toml: invalid type: string "yes", expected a boolean
//! ```

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::debug;

use super::SettingsLayer;
use crate::core::FileHeaderError;

/// Parse settings file content.
///
/// `origin` names the source in error messages.
///
/// # Errors
///
/// Returns [`FileHeaderError::ConfigParse`] if the content is not valid TOML or
/// does not match the settings schema.
pub fn parse_settings(content: &str, origin: &Path) -> Result<SettingsLayer> {
    toml::from_str(content).map_err(|e| {
        FileHeaderError::ConfigParse {
            file: origin.display().to_string(),
            reason: e.message().to_string(),
        }
        .into()
    })
}

/// Read and parse one settings file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails to parse.
pub async fn load_settings_file(path: &Path) -> Result<SettingsLayer> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

    debug!("Loaded settings layer from {}", path.display());
    parse_settings(&content, path)
}

/// Read a settings file if it exists, otherwise return an empty layer.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub async fn load_optional_settings(path: &Path) -> Result<SettingsLayer> {
    if fs::try_exists(path).await.unwrap_or(false) {
        load_settings_file(path).await
    } else {
        debug!("No settings file at {}", path.display());
        Ok(SettingsLayer::default())
    }
}
