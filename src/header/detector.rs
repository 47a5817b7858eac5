//! Decides whether a document still needs a header.
//!
//! Detection is a substring heuristic: a region delimited by the template's
//! markers counts as a managed header as soon as one of its lines mentions
//! any of [`HEADER_SENTINELS`]. An unrelated comment that happens to sit
//! between identical markers and mention "author" therefore suppresses
//! insertion; this is accepted in exchange for tolerating custom templates.

use std::path::Path;
use tracing::debug;

use super::{IgnoreMatcher, scan};
use crate::constants::HEADER_SENTINELS;
use crate::document::TextDocument;
use crate::language::ResolvedTemplate;

/// Whether `document` needs a header.
///
/// Rules, in order:
/// 1. ignored documents never need one
/// 2. documents with at most one line always need one
/// 3. otherwise a header is needed unless the marker-delimited region
///    contains a sentinel
#[must_use]
pub fn needs_header(
    document: &TextDocument,
    template: &ResolvedTemplate,
    ignore: &IgnoreMatcher,
    workspace_root: Option<&Path>,
) -> bool {
    if ignore.is_ignored(document.path(), workspace_root) {
        return false;
    }

    if document.line_count() <= 1 {
        return true;
    }

    let result =
        scan(document.lines(), &template.header_begin, &template.header_end, HEADER_SENTINELS);
    let needed = !result.any_hit();

    debug!(
        "{} {} a header (region {:?}..{:?})",
        document.path().display(),
        if needed { "needs" } else { "has" },
        result.begin_line,
        result.end_line
    );

    needed
}
