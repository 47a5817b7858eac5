//! Global constants used throughout the fileheader codebase.
//!
//! Built-in template text, sentinel strings recognised inside a header, and the
//! numeric limits shared by the scanner, the mutator and the lifecycle hooks.

use std::time::Duration;

/// Language key of the wildcard template record.
pub const DEFAULT_LANGUAGE: &str = "*";

/// Date format applied when the settings do not name one (moment-style tokens).
pub const DEFAULT_DATEFORMAT: &str = "YYYY-MM-DD HH:mm:ss";

/// Company name rendered when no `company` is configured.
pub const DEFAULT_COMPANY: &str = "Your Company";

/// Description rendered when no `description` variable is configured.
pub const DEFAULT_DESCRIPTION: &str = "??";

/// Header body used when neither the resolved record nor the wildcard record
/// carries a template.
pub const DEFAULT_TEMPLATE: &[&str] = &[
    "@file: {{relativeFile}}",
    "@author: {{author}}",
    "@created: {{createdDate}}",
    "@description: {{description}}",
    "-----",
    "@last-modified: {{lastModifiedDate}}",
    "@modified: by {{author}}",
    "-----",
    "@Copyright (c) {{year}} {{company}}",
    "-----",
];

/// Caption line that opens the change-log block inside a header.
pub const CHANGE_LOG_CAPTION: &str = "HISTORY:";

/// Column header lines written beneath the change-log caption.
pub const CHANGE_LOG_TEMPLATE: &[&str] = &[
    "Date                 By           Comments",
    "----------           ---          ----------",
];

/// Substrings that mark a header region as already managed.
pub const HEADER_SENTINELS: &[&str] =
    &["file", "author", "created", "last-modified", "Copyright", CHANGE_LOG_CAPTION];

/// Field marker rewritten with the current timestamp on save.
pub const LAST_MODIFIED_MARKER: &str = "last-modified:";

/// Field marker rewritten with the current author on save.
pub const MODIFIED_BY_MARKER: &str = "modified by:";

/// Column up to which an in-place field patch replaces text.
pub const FIELD_PATCH_END_COLUMN: usize = 100;

/// A file created within this window is treated as new when activated.
pub const NEW_FILE_WINDOW: Duration = Duration::from_secs(3);

/// Name of the per-workspace and per-folder settings file.
pub const SETTINGS_FILE_NAME: &str = ".fileheader.toml";

/// Environment variable overriding the global settings file location.
pub const CONFIG_PATH_ENV: &str = "FILEHEADER_CONFIG_PATH";

/// Files whose presence marks a directory as a project root for the
/// `workspaceFolder` and `relativeFile` variables.
pub const PROJECT_ROOT_MARKERS: &[&str] = &["Cargo.toml", "package.json", ".git", SETTINGS_FILE_NAME];
