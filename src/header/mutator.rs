//! Edits for the three header operations.
//!
//! Each function takes an immutable snapshot of the document lines and
//! returns the edits to apply; none of them touch the document itself.

use tracing::{debug, trace};

use super::scan;
use crate::constants::{
    CHANGE_LOG_CAPTION, CHANGE_LOG_TEMPLATE, FIELD_PATCH_END_COLUMN, LAST_MODIFIED_MARKER,
    MODIFIED_BY_MARKER,
};
use crate::document::{Position, Range, TextEdit};
use crate::language::ResolvedTemplate;

/// Insert a rendered header, plus one line break, at the top of the document.
#[must_use]
pub fn insert_header_edit(rendered_header: &str) -> TextEdit {
    TextEdit::insert(Position::new(0, 0), format!("{rendered_header}\n"))
}

/// Lines holding the fields rewritten on save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldLines {
    /// First line containing `last-modified:`
    pub last_modified: Option<usize>,
    /// First line containing `modified by:`
    pub modified_by: Option<usize>,
}

/// Find the modification fields inside the header region.
#[must_use]
pub fn locate_fields(lines: &[String], template: &ResolvedTemplate) -> FieldLines {
    let result = scan(
        lines,
        &template.header_begin,
        &template.header_end,
        &[LAST_MODIFIED_MARKER, MODIFIED_BY_MARKER],
    );

    FieldLines {
        last_modified: result.hit(0),
        modified_by: result.hit(1),
    }
}

/// Replace everything after the first `:` on `line`, up to the patch column,
/// with a space and `value`.
///
/// A colon at or past the patch column leaves the line alone.
#[must_use]
pub fn field_patch(lines: &[String], line: usize, value: &str) -> Option<TextEdit> {
    let text = lines.get(line)?;
    let colon = text.chars().position(|c| c == ':')?;
    if colon + 1 > FIELD_PATCH_END_COLUMN {
        debug!("Field separator on line {line} is past column {FIELD_PATCH_END_COLUMN}; not patching");
        return None;
    }

    Some(TextEdit::replace(
        Range::new(Position::new(line, colon + 1), Position::new(line, FIELD_PATCH_END_COLUMN)),
        format!(" {value}"),
    ))
}

/// Edits rewriting the `last-modified:` and `modified by:` fields in place.
///
/// Fields that are not present are left alone; nothing else in the header is
/// touched.
#[must_use]
pub fn update_header_edits(
    lines: &[String],
    template: &ResolvedTemplate,
    timestamp: &str,
    author: &str,
) -> Vec<TextEdit> {
    let fields = locate_fields(lines, template);
    debug!("Header fields: {fields:?}");

    let mut edits = Vec::new();
    if let Some(edit) = fields.last_modified.and_then(|line| field_patch(lines, line, timestamp)) {
        edits.push(edit);
    }
    if let Some(edit) = fields.modified_by.and_then(|line| field_patch(lines, line, author)) {
        edits.push(edit);
    }
    edits
}

/// Where a change-log entry goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeLogTarget {
    /// Line of the header's end marker
    pub end_line: usize,
    /// Whether the caption block already exists
    pub has_caption: bool,
}

/// Locate the header's end marker and change-log caption.
///
/// Returns `None` when there is no end marker, or when it sits on the first
/// line, in which case no change log can be inserted.
#[must_use]
pub fn locate_change_log(lines: &[String], template: &ResolvedTemplate) -> Option<ChangeLogTarget> {
    let result = scan(lines, &template.header_begin, &template.header_end, &[CHANGE_LOG_CAPTION]);

    match result.end_line {
        Some(end_line) if end_line > 0 => Some(ChangeLogTarget {
            end_line,
            has_caption: result.hit(0).is_some(),
        }),
        _ => {
            debug!("No header end marker found; skipping change log");
            None
        }
    }
}

/// Template source of a change-log block.
///
/// The caption and column headings are included only when the header does
/// not have them yet; the entry line is always present.
#[must_use]
pub fn change_log_source(has_caption: bool) -> String {
    let mut lines = Vec::with_capacity(CHANGE_LOG_TEMPLATE.len() + 2);
    if !has_caption {
        lines.push(format!("{{{{headerPrefix}}}} {CHANGE_LOG_CAPTION}"));
        for heading in CHANGE_LOG_TEMPLATE {
            lines.push(format!("{{{{headerPrefix}}}} {heading}"));
        }
    }
    lines.push("{{headerPrefix}} {{lastModifiedDate}}  {{author}}    ".to_string());
    lines.join("\n")
}

/// Insert a rendered change-log block at the end of the line before the
/// header's end marker.
#[must_use]
pub fn change_log_edit(lines: &[String], target: ChangeLogTarget, rendered: &str) -> TextEdit {
    let row = target.end_line - 1;
    let column = lines.get(row).map_or(0, |line| line.chars().count());
    trace!("Change log goes after line {row}, column {column}");

    TextEdit::insert(Position::new(row, column), format!("\n{rendered}"))
}
