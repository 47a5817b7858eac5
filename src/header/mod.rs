//! Header detection and the text edits that maintain a header.
//!
//! - [`scan`] walks a line snapshot through `SeekingBegin -> InHeader -> Done`
//! - [`needs_header`] decides whether a document lacks a managed header
//! - [`IgnoreMatcher`] skips documents matching the `ignore` patterns
//! - the [`mutator`] functions compute the insert, update and change-log edits

mod detector;
mod ignore;
pub mod mutator;
mod scanner;

pub use detector::needs_header;
pub use ignore::IgnoreMatcher;
pub use mutator::{
    ChangeLogTarget, FieldLines, change_log_edit, change_log_source, insert_header_edit,
    locate_change_log, update_header_edits,
};
pub use scanner::{HeaderScan, ScanState, scan};
