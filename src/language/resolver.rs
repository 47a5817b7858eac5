//! Resolution of a merged template list into one complete template.
//!
//! Lookup order:
//!
//! 1. a record keyed by the file extension (`".py"`, case-insensitive)
//! 2. a record keyed by the language id (case-insensitive)
//! 3. one `mapTo` hop from whichever record matched
//! 4. the wildcard `"*"` record
//!
//! The template body falls back to the wildcard record's template and then to
//! [`DEFAULT_TEMPLATE`]; delimiters fall back to the built-in comment style of
//! the language id.
//!
//! `mapTo` is followed exactly once. A target that itself carries `mapTo` is
//! used as-is, and a target that does not exist falls through to the
//! wildcard, so alias chains and cycles cannot loop.

use serde::Serialize;
use std::path::Path;
use tracing::{debug, warn};

use super::{LanguageTemplateRecord, comment_style_for};
use crate::constants::{DEFAULT_LANGUAGE, DEFAULT_TEMPLATE};

/// A template record with every field the renderer needs populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTemplate {
    /// Key of the record that matched first, before any `mapTo` hop.
    pub language: String,
    /// Line opening the header region
    pub header_begin: String,
    /// Prefix of every body line
    pub header_prefix: String,
    /// Line closing the header region
    pub header_end: String,
    /// Header body line patterns
    pub template: Vec<String>,
    /// File body line patterns, when configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Vec<String>>,
}

fn find_record<'a>(
    templates: &'a [LanguageTemplateRecord],
    key: &str,
) -> Option<&'a LanguageTemplateRecord> {
    let key = key.to_lowercase();
    templates.iter().find(|record| record.language.to_lowercase() == key)
}

fn find_wildcard(templates: &[LanguageTemplateRecord]) -> Option<&LanguageTemplateRecord> {
    templates.iter().find(|record| record.language == DEFAULT_LANGUAGE)
}

fn file_extension(filename: Option<&Path>) -> Option<String> {
    filename
        .and_then(Path::extension)
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{ext}"))
}

/// Find the record for a document, following at most one `mapTo` hop.
///
/// The returned record keeps the `language` key of the record that matched
/// before redirection.
fn find_mappable_record(
    templates: &[LanguageTemplateRecord],
    language_id: &str,
    filename: Option<&Path>,
) -> Option<LanguageTemplateRecord> {
    let direct = file_extension(filename)
        .and_then(|ext| find_record(templates, &ext))
        .or_else(|| find_record(templates, language_id));

    let record = match direct {
        Some(record) => match &record.map_to {
            Some(target) => match find_record(templates, target) {
                Some(mapped) => {
                    if mapped.map_to.is_some() {
                        debug!(
                            "Template '{}' maps to '{}', which maps again; using it without a second hop",
                            record.language, mapped.language
                        );
                    }
                    Some(LanguageTemplateRecord {
                        language: record.language.clone(),
                        ..mapped.clone()
                    })
                }
                None => {
                    warn!(
                        "Template '{}' maps to unknown language '{}', falling back to wildcard",
                        record.language, target
                    );
                    None
                }
            },
            None => Some(record.clone()),
        },
        None => None,
    };

    record.or_else(|| find_wildcard(templates).cloned())
}

/// Resolve the template for a document.
///
/// # Arguments
///
/// * `templates` - merged template records (see [`crate::config::merge_layers`])
/// * `language_id` - the document's language id
/// * `filename` - the document path, used for extension lookup
///
/// # Returns
///
/// A [`ResolvedTemplate`] whose delimiters and template are always populated.
///
/// # Examples
///
/// ```rust
/// use fileheader_cli::language::{LanguageTemplateRecord, resolve};
/// use std::path::Path;
///
/// let resolved = resolve(&[], "python", Some(Path::new("tool.py")));
/// assert_eq!(resolved.header_begin, "'''");
/// assert!(!resolved.template.is_empty());
/// ```
#[must_use]
pub fn resolve(
    templates: &[LanguageTemplateRecord],
    language_id: &str,
    filename: Option<&Path>,
) -> ResolvedTemplate {
    let style = comment_style_for(language_id);
    let record = find_mappable_record(templates, language_id, filename);

    let template = record
        .as_ref()
        .and_then(|r| r.template.clone())
        .or_else(|| {
            debug!("No template for '{language_id}', trying the wildcard record");
            find_wildcard(templates).and_then(|r| r.template.clone())
        })
        .unwrap_or_else(|| {
            debug!("No wildcard template configured, using the built-in default");
            DEFAULT_TEMPLATE.iter().map(|line| (*line).to_string()).collect()
        });

    let record = record.unwrap_or_else(|| LanguageTemplateRecord::new(DEFAULT_LANGUAGE));

    ResolvedTemplate {
        language: record.language,
        header_begin: record.header_begin.unwrap_or_else(|| style.begin.to_string()),
        header_prefix: record.header_prefix.unwrap_or_else(|| style.prefix.to_string()),
        header_end: record.header_end.unwrap_or_else(|| style.end.to_string()),
        template,
        body: record.body,
    }
}
