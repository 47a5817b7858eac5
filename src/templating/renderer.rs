//! Header rendering on top of Tera.
//!
//! A fresh [`Tera`] instance is created for every render, with the header
//! filters registered on it. Placeholders naming variables that are not in the
//! environment render as empty text instead of failing the render; each one
//! is logged with the closest known name as a hint.

use anyhow::Result;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;
use strsim::levenshtein;
use tera::Tera;
use tracing::{debug, warn};

use super::VariableEnvironment;
use super::filters::register_filters;
use crate::core::FileHeaderError;
use crate::language::ResolvedTemplate;

/// Suggestions further than this many edits away are not shown.
const SUGGESTION_MAX_DISTANCE: usize = 3;

fn placeholder_regex() -> Option<&'static Regex> {
    static PLACEHOLDER: OnceLock<Option<Regex>> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\{\{-?\s*([A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*)").ok()).as_ref()
}

/// Template source of a full header.
///
/// The begin marker, every template line behind `{{headerPrefix}} ` and the
/// end marker, one per line. A template with no lines yields a single bare
/// prefix line.
#[must_use]
pub fn header_source(template: &ResolvedTemplate) -> String {
    let mut lines = Vec::with_capacity(template.template.len() + 2);
    lines.push("{{headerBegin}}".to_string());
    if template.template.is_empty() {
        lines.push("{{headerPrefix}}".to_string());
    } else {
        for line in &template.template {
            lines.push(format!("{{{{headerPrefix}}}} {line}"));
        }
    }
    lines.push("{{headerEnd}}".to_string());
    lines.join("\n")
}

/// Renders header sources against a [`VariableEnvironment`].
#[derive(Debug, Clone)]
pub struct HeaderRenderer {
    dateformat: String,
}

impl HeaderRenderer {
    /// Create a renderer; `dateformat` is the source format the
    /// `dateformat` filter parses dates with.
    pub fn new(dateformat: impl Into<String>) -> Self {
        Self {
            dateformat: dateformat.into(),
        }
    }

    /// Render `source`.
    ///
    /// Rendering has no side effects.
    ///
    /// # Errors
    ///
    /// Returns [`FileHeaderError::TemplateRender`] on template syntax errors
    /// or failing filters.
    pub fn render(&self, source: &str, variables: &VariableEnvironment) -> Result<String> {
        let mut context = variables.to_context();

        let mut missing = Map::new();
        for path in Self::unresolved_placeholders(source, variables) {
            warn!("{}", Self::describe_unresolved(&path, variables));
            bind_empty(&mut missing, &path);
        }
        for (root, value) in &missing {
            context.insert(root.as_str(), value);
        }

        let mut tera = Tera::default();
        register_filters(&mut tera, &self.dateformat);

        let rendered = tera.render_str(source, &context).map_err(|e| {
            FileHeaderError::TemplateRender {
                message: format_tera_error(&e),
            }
        })?;

        debug!("Rendered {} template line(s)", rendered.lines().count());
        Ok(rendered)
    }

    fn unresolved_placeholders(source: &str, variables: &VariableEnvironment) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        let Some(regex) = placeholder_regex() else {
            return names;
        };
        for captures in regex.captures_iter(source) {
            let path = &captures[1];
            let root = path.split('.').next().unwrap_or(path);
            if !variables.contains(root) && !names.iter().any(|n| n == path) {
                names.push(path.to_string());
            }
        }
        names
    }

    fn describe_unresolved(path: &str, variables: &VariableEnvironment) -> String {
        let name = path.split('.').next().unwrap_or(path);
        let closest = variables
            .names()
            .map(|known| (known, levenshtein(name, known)))
            .filter(|(_, distance)| *distance <= SUGGESTION_MAX_DISTANCE)
            .min_by_key(|(_, distance)| *distance);

        match closest {
            Some((known, _)) => {
                format!("Unknown template variable '{path}' renders empty (did you mean '{known}'?)")
            }
            None => format!("Unknown template variable '{path}' renders empty"),
        }
    }
}

/// Bind a dotted placeholder path to an empty string, creating objects for
/// every member on the way. A path that is already an object is kept.
fn bind_empty(scope: &mut Map<String, Value>, path: &str) {
    let (head, rest) = match path.split_once('.') {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    };

    match rest {
        None => {
            scope.entry(head).or_insert_with(|| Value::String(String::new()));
        }
        Some(rest) => {
            let entry = scope.entry(head).or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(inner) = entry {
                bind_empty(inner, rest);
            }
        }
    }
}

/// Format a Tera error, dropping the internal one-off template name.
///
/// Walks the whole error chain so the root cause (an unknown filter, a
/// parse error with its location) is included.
#[must_use]
pub fn format_tera_error(error: &tera::Error) -> String {
    use std::error::Error;

    let mut all_messages = vec![error.to_string()];
    let mut current: Option<&dyn Error> = error.source();
    while let Some(err) = current {
        all_messages.push(err.to_string());
        current = err.source();
    }

    let messages: Vec<String> = all_messages
        .into_iter()
        .map(|msg| {
            msg.replace("while rendering '__tera_one_off'", "")
                .replace("Failed to render '__tera_one_off'", "Template rendering failed")
                .replace("Failed to parse '__tera_one_off'", "Template syntax error")
                .replace("'__tera_one_off'", "template")
                .trim()
                .to_string()
        })
        .filter(|msg| {
            !msg.is_empty() && msg != "Template rendering failed" && msg != "Template syntax error"
        })
        .collect();

    if messages.is_empty() {
        "Template syntax error".to_string()
    } else {
        messages.join("\n  -> ")
    }
}
