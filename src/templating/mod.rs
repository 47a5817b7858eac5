//! Header templating.
//!
//! Header text is produced in two steps. [`header_source`] lays the resolved
//! template out as Tera source (begin marker, prefixed lines, end marker), and
//! [`HeaderRenderer`] renders that source against the
//! [`VariableEnvironment`] built by [`build_environment`].
//!
//! # Template Syntax
//!
//! Placeholders are Tera expressions:
//!
//! ```text
//! @file: {{relativeFile}}
//! @author: {{ author | upper }}
//! @created: {{ createdDate | dateformat(format="YYYY") }}
//! @module: {{ fileBasenameNoExtension | replace(from="_", to="-") }}
//! ```
//!
//! Unknown variables render as empty text. Dates use moment-style formats,
//! see [`to_chrono_format`].

mod dateformat;
pub mod filters;
mod renderer;
mod variables;

pub use dateformat::{format_datetime, parse_datetime, to_chrono_format};
pub use renderer::{HeaderRenderer, format_tera_error, header_source};
pub use variables::{DocumentPaths, RenderFacts, VariableEnvironment, build_environment};
