//! fileheader - templated comment headers for source files
//!
//! Inserts a comment header at the top of a source file, keeps its
//! `last-modified:` and `modified by:` fields current on every save, and
//! appends change-log entries inside it. Comment delimiters and header lines
//! are configured per language through layered TOML settings.
//!
//! # Architecture Overview
//!
//! The crate is written for an editor host but carries no editor dependency.
//! The host supplies documents ([`document::TextDocument`]) and three
//! collaborators ([`host`]); [`watcher::FileHeaderWatcher`] runs the header
//! operations on lifecycle events and commands. The `fileheader` binary is
//! one such host.
//!
//! # Core Modules
//!
//! - [`config`] - settings layers, their files, and the ordered-list merge
//! - [`language`] - template records, comment styles and template resolution
//! - [`header`] - header detection, ignore patterns and the edit builders
//! - [`templating`] - variable environment and Tera-based rendering
//! - [`document`] - line-indexed documents and text edits
//! - [`watcher`] - event hooks and commands
//!
//! ## Supporting Modules
//!
//! - [`cli`] - command-line interface
//! - [`core`] - error types and user-facing error reports
//! - [`host`] - notifier, author lookup and file timestamps
//! - [`constants`] - built-in templates, sentinels and limits
//! - [`utils`] - atomic writes and path helpers
//!
//! # Settings Format
//!
//! ```toml
//! variables = [["license", "MIT"]]
//!
//! [config]
//! author = "Jane"
//! company = "Acme"
//! dateformat = "YYYY-MM-DD HH:mm"
//! ignore = ["*.min.js", "vendor/*"]
//!
//! [[templates]]
//! language = "python"
//! template = ["@file: {{fileBasename}}", "@author: {{author}}", "@license: {{license}}"]
//! ```
//!
//! Layers are read from the built-in defaults, `~/.fileheader/config.toml`,
//! `<workspace>/.fileheader.toml` and the nearest `.fileheader.toml` inside
//! the workspace, each overriding the one before.

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod document;
pub mod header;
pub mod host;
pub mod language;
pub mod templating;
pub mod utils;
pub mod watcher;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
