//! Matching of documents against the `ignore` patterns.
//!
//! A pattern is turned into an unanchored regular expression: `*` matches any
//! run of characters and every other character matches itself. The expression is tested
//! against the file name and against the path relative to the workspace root,
//! so `"*.min.js"` matches `app.min.js` anywhere and `"vendor/*"` matches
//! everything below a `vendor` directory.

use anyhow::Result;
use regex::Regex;
use std::path::Path;
use tracing::debug;

use crate::core::FileHeaderError;

/// Compiled ignore patterns.
#[derive(Debug, Clone, Default)]
pub struct IgnoreMatcher {
    patterns: Vec<(String, Regex)>,
}

fn pattern_to_regex(pattern: &str) -> String {
    pattern.split('*').map(regex::escape).collect::<Vec<_>>().join(".*")
}

impl IgnoreMatcher {
    /// Compile `patterns`.
    ///
    /// # Errors
    ///
    /// Returns [`FileHeaderError::InvalidIgnorePattern`] when a pattern does
    /// not compile.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Regex::new(&pattern_to_regex(pattern))
                    .map(|regex| (pattern.to_string(), regex))
                    .map_err(|e| FileHeaderError::InvalidIgnorePattern {
                        pattern: pattern.to_string(),
                        reason: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            patterns,
        })
    }

    /// Whether no patterns are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether `path` matches any pattern.
    ///
    /// Without a workspace root (or for a path outside it) the full path
    /// stands in for the relative one.
    #[must_use]
    pub fn is_ignored(&self, path: &Path, workspace_root: Option<&Path>) -> bool {
        let file_name = path.file_name().map(|name| name.to_string_lossy()).unwrap_or_default();
        let relative = workspace_root
            .and_then(|root| path.strip_prefix(root).ok())
            .unwrap_or(path)
            .to_string_lossy();

        for (pattern, regex) in &self.patterns {
            if regex.is_match(&file_name) || regex.is_match(&relative) {
                debug!("{} matches ignore pattern '{pattern}'", path.display());
                return true;
            }
        }

        false
    }
}
