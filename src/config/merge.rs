//! Ordered-list merge of configuration layers.

use crate::config::VariableEntry;
use crate::language::LanguageTemplateRecord;

/// An entry that is identified by a key within a merged list.
pub trait MergeKey {
    /// The key compared during merging (case-sensitive).
    fn merge_key(&self) -> &str;
}

impl MergeKey for VariableEntry {
    fn merge_key(&self) -> &str {
        self.name()
    }
}

impl MergeKey for LanguageTemplateRecord {
    fn merge_key(&self) -> &str {
        &self.language
    }
}

/// Merge layers ordered from widest to narrowest scope.
///
/// An entry whose key is already present replaces the existing entry at its
/// original position; otherwise it is appended. The result has unique keys
/// and the narrowest value for each of them.
///
/// # Examples
///
/// ```rust
/// use fileheader_cli::config::{VariableEntry, merge_layers};
///
/// let global = vec![VariableEntry::new("a", "1")];
/// let workspace = vec![VariableEntry::new("a", "2"), VariableEntry::new("b", "1")];
///
/// let merged = merge_layers(&[global.as_slice(), workspace.as_slice()]);
/// assert_eq!(merged, vec![VariableEntry::new("a", "2"), VariableEntry::new("b", "1")]);
/// ```
#[must_use]
pub fn merge_layers<T>(layers: &[&[T]]) -> Vec<T>
where
    T: MergeKey + Clone,
{
    let mut merged: Vec<T> = Vec::new();

    for layer in layers {
        for entry in *layer {
            match merged.iter().position(|existing| existing.merge_key() == entry.merge_key()) {
                Some(index) => merged[index] = entry.clone(),
                None => merged.push(entry.clone()),
            }
        }
    }

    merged
}
