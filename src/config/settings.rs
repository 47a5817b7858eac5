//! Settings schema shared by every configuration layer.
//!
//! Each layer file holds the same three keys: a `config` table with the
//! header options, a `variables` list of `[name, value]` pairs and a
//! `templates` array of [`LanguageTemplateRecord`]s. [`SettingsLayers`] holds
//! all four layers and folds them into [`EffectiveSettings`].

use serde::{Deserialize, Serialize};

use super::merge_layers;
use crate::constants::DEFAULT_DATEFORMAT;
use crate::language::LanguageTemplateRecord;

/// Header options from the `config` table.
///
/// Every field is optional so a narrower layer can override a single option
/// without restating the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderConfig {
    /// Insert headers automatically on save and on new files. Defaults to `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_header: Option<bool>,

    /// Author name; when absent the system lookup is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Author e-mail, exposed as the `authorEmail` variable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,

    /// Moment-style date format for rendered dates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dateformat: Option<String>,

    /// Company name for the copyright line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Patterns of files that never receive a header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore: Option<Vec<String>>,
}

impl HeaderConfig {
    /// Apply a narrower layer on top of this one, field by field.
    ///
    /// `ignore` is replaced as a whole list.
    pub fn overlay(&mut self, narrower: &Self) {
        if narrower.auto_header.is_some() {
            self.auto_header = narrower.auto_header;
        }
        if narrower.author.is_some() {
            self.author.clone_from(&narrower.author);
        }
        if narrower.author_email.is_some() {
            self.author_email.clone_from(&narrower.author_email);
        }
        if narrower.dateformat.is_some() {
            self.dateformat.clone_from(&narrower.dateformat);
        }
        if narrower.company.is_some() {
            self.company.clone_from(&narrower.company);
        }
        if narrower.ignore.is_some() {
            self.ignore.clone_from(&narrower.ignore);
        }
    }

    /// Whether headers are inserted automatically.
    #[must_use]
    pub fn auto_header(&self) -> bool {
        self.auto_header.unwrap_or(true)
    }

    /// The configured date format, or the built-in default.
    #[must_use]
    pub fn dateformat(&self) -> &str {
        self.dateformat.as_deref().unwrap_or(DEFAULT_DATEFORMAT)
    }

    /// Configured ignore patterns (empty when unset).
    #[must_use]
    pub fn ignore_patterns(&self) -> &[String] {
        self.ignore.as_deref().unwrap_or_default()
    }
}

/// A user variable: `(name, value)`.
///
/// Serialized as a two-element array, `["license", "MIT"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableEntry(pub String, pub String);

impl VariableEntry {
    /// Create a variable entry.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self(name.into(), value.into())
    }

    /// Variable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Variable value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.1
    }
}

/// Contents of one settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsLayer {
    /// Header options
    pub config: HeaderConfig,
    /// User variables
    pub variables: Vec<VariableEntry>,
    /// Language template records
    pub templates: Vec<LanguageTemplateRecord>,
}

impl SettingsLayer {
    /// The built-in default layer.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            config: HeaderConfig {
                auto_header: Some(true),
                dateformat: Some(DEFAULT_DATEFORMAT.to_string()),
                ..HeaderConfig::default()
            },
            ..Self::default()
        }
    }
}

/// The four configuration layers, widest to narrowest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsLayers {
    /// Built-in defaults
    pub default: SettingsLayer,
    /// User-wide settings file
    pub global: SettingsLayer,
    /// `.fileheader.toml` at the workspace root
    pub workspace: SettingsLayer,
    /// Nearest `.fileheader.toml` below the workspace root
    pub workspace_folder: SettingsLayer,
}

impl Default for SettingsLayers {
    fn default() -> Self {
        Self {
            default: SettingsLayer::builtin(),
            global: SettingsLayer::default(),
            workspace: SettingsLayer::default(),
            workspace_folder: SettingsLayer::default(),
        }
    }
}

impl SettingsLayers {
    fn ordered(&self) -> [&SettingsLayer; 4] {
        [&self.default, &self.global, &self.workspace, &self.workspace_folder]
    }

    /// Fold the layers into the settings one operation works with.
    #[must_use]
    pub fn effective(&self) -> EffectiveSettings {
        let layers = self.ordered();

        let mut config = HeaderConfig::default();
        for layer in layers {
            config.overlay(&layer.config);
        }

        let variables: Vec<&[VariableEntry]> =
            layers.iter().map(|layer| layer.variables.as_slice()).collect();
        let templates: Vec<&[LanguageTemplateRecord]> =
            layers.iter().map(|layer| layer.templates.as_slice()).collect();

        EffectiveSettings {
            config,
            variables: merge_layers(&variables),
            templates: merge_layers(&templates),
        }
    }
}

/// Merged settings for one operation. Rebuilt on every call, never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EffectiveSettings {
    /// Header options after field-wise overlay
    pub config: HeaderConfig,
    /// Merged user variables
    pub variables: Vec<VariableEntry>,
    /// Merged template records
    pub templates: Vec<LanguageTemplateRecord>,
}
