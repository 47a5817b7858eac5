//! Configuration management for fileheader
//!
//! Settings come from four layers, widest to narrowest scope:
//!
//! 1. **Default** - built into the binary (`autoHeader = true`, default date format)
//! 2. **Global** (`~/.fileheader/config.toml`) - user-wide settings
//! 3. **Workspace** (`<root>/.fileheader.toml`) - project settings
//! 4. **Workspace folder** - the nearest `.fileheader.toml` below the root
//!
//! Every layer shares one schema:
//!
//! ```toml
//! variables = [["license", "MIT"]]
//!
//! [config]
//! autoHeader = true
//! author = "Jane"
//! authorEmail = "jane@example.com"
//! company = "Acme"
//! dateformat = "YYYY-MM-DD HH:mm:ss"
//! ignore = ["*.min.js"]
//!
//! [[templates]]
//! language = "rust"
//! template = ["@file: {{relativeFile}}", "@author: {{author}}"]
//! ```
//!
//! # Merge Rules
//!
//! - `variables` and `templates` merge with [`merge_layers`]: a key already
//!   present is replaced in place, a new key is appended
//! - `config` merges field by field; `ignore` is replaced as a whole list
//!
//! Layers are loaded fresh for every operation; see [`SettingsSource`].
//!
//! # Modules
//!
//! - `merge` - ordered-list merge
//! - `parser` - TOML parsing with file context in errors
//! - `settings` - the layer schema and the effective settings
//! - `store` - where layers come from

mod merge;
mod parser;
mod settings;
mod store;

pub use merge::{MergeKey, merge_layers};
pub use parser::{load_optional_settings, load_settings_file, parse_settings};
pub use settings::{EffectiveSettings, HeaderConfig, SettingsLayer, SettingsLayers, VariableEntry};
pub use store::{FileSettings, SettingsSource, StaticSettings};
