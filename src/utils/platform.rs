//! Platform helpers: home directory lookup and user path expansion.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::fs::normalize_path;

/// Get the user's home directory.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn get_home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Unable to determine home directory")
}

/// Expand `~` and environment variables in a user-supplied path.
///
/// `~/...` and `$VAR`/`${VAR}` references are expanded with `shellexpand`;
/// the result is made absolute against the current directory and normalized.
///
/// # Examples
///
/// ```rust,no_run
/// use fileheader_cli::utils::platform::resolve_path;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = resolve_path("~/.fileheader/config.toml")?;
/// let workspace = resolve_path("$HOME/projects/demo")?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if a referenced variable is undefined or the current
/// directory cannot be read.
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(path)
        .with_context(|| format!("Failed to expand path: {path}"))?;

    absolutize(Path::new(expanded.as_ref()))
}

/// Make a path absolute against the current directory and normalize it.
///
/// # Errors
///
/// Returns an error if the current directory cannot be read.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().context("Failed to read current directory")?.join(path)
    };

    Ok(normalize_path(&absolute))
}
