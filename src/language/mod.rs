//! Per-language template records and their resolution.
//!
//! A [`LanguageTemplateRecord`] describes the comment delimiters and body
//! lines of the header for one language identifier, file extension (with its
//! leading dot, e.g. `".py"`) or the wildcard `"*"`. Records arrive from the
//! settings layers as a merged list; [`resolve`] turns that list into a fully
//! populated [`ResolvedTemplate`] for one document.
//!
//! # Settings Format
//!
//! ```toml
//! [[templates]]
//! language = "rust"
//! headerBegin = "/*"
//! headerPrefix = " * "
//! headerEnd = " */"
//! template = ["@file: {{relativeFile}}", "@author: {{author}}"]
//!
//! # `.h` files reuse the C++ record
//! [[templates]]
//! language = ".h"
//! mapTo = "cpp"
//! ```

mod comment_styles;
mod ids;
mod resolver;

pub use comment_styles::{CommentStyle, DEFAULT_COMMENT_STYLE, comment_style_for};
pub use ids::language_id_for_path;
pub use resolver::{ResolvedTemplate, resolve};

use serde::{Deserialize, Serialize};

/// Template configuration for one language, extension or the wildcard.
///
/// Every field but `language` is optional; the resolver fills gaps from the
/// wildcard record and the built-in comment-style table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageTemplateRecord {
    /// Language id, extension (`".py"`) or `"*"`. Unique within a merged list.
    pub language: String,

    /// Redirects resolution to the record with this `language` key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_to: Option<String>,

    /// Line that opens the header region, matched exactly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_begin: Option<String>,

    /// Text written before every body line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_prefix: Option<String>,

    /// Line that closes the header region, matched exactly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_end: Option<String>,

    /// Header body line patterns, rendered with the variable environment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<Vec<String>>,

    /// File body line patterns for a freshly created file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Vec<String>>,
}

impl LanguageTemplateRecord {
    /// Create a record that only carries its key.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Self::default()
        }
    }
}
