//! Text filters available inside header templates.
//!
//! | filter | example |
//! |---|---|
//! | `upper` | `{{ author \| upper }}` |
//! | `lower` | `{{ fileBasename \| lower }}` |
//! | `replace` | `{{ fileBasenameNoExtension \| replace(from="_", to="-") }}` |
//! | `dateformat` | `{{ createdDate \| dateformat(format="YYYY") }}` |
//!
//! `replace` is literal and replaces every occurrence; `to` defaults to the
//! empty string.

use std::collections::HashMap;
use tera::{Tera, Value};
use tracing::warn;

use super::dateformat::{format_datetime, parse_datetime};

fn value_as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn string_arg(args: &HashMap<String, Value>, name: &str) -> Option<String> {
    args.get(name).map(value_as_text)
}

/// `upper` filter.
///
/// # Errors
///
/// Never fails; non-string values are converted to text first.
pub fn upper(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(value_as_text(value).to_uppercase()))
}

/// `lower` filter.
///
/// # Errors
///
/// Never fails; non-string values are converted to text first.
pub fn lower(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(value_as_text(value).to_lowercase()))
}

/// `replace(from, to)` filter: literal, all occurrences.
///
/// # Errors
///
/// Returns an error if `from` is missing.
pub fn replace(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let from = string_arg(args, "from")
        .ok_or_else(|| tera::Error::msg("replace filter requires a `from` argument"))?;
    let to = string_arg(args, "to").unwrap_or_default();

    let text = value_as_text(value);
    if from.is_empty() {
        return Ok(Value::String(text));
    }
    Ok(Value::String(text.replace(&from, &to)))
}

/// Create the `dateformat(format)` filter.
///
/// Input dates are parsed with `source_format` (the configured date format)
/// or a common layout. Unparseable input is returned unchanged.
pub fn create_dateformat_filter(source_format: String) -> impl tera::Filter + 'static {
    move |value: &Value, args: &HashMap<String, Value>| -> tera::Result<Value> {
        let format = string_arg(args, "format")
            .ok_or_else(|| tera::Error::msg("dateformat filter requires a `format` argument"))?;
        let text = value_as_text(value);

        match parse_datetime(&text, &source_format) {
            Some(parsed) => Ok(Value::String(format_datetime(&parsed.and_utc(), &format))),
            None => {
                warn!("dateformat: cannot parse '{text}' as a date");
                Ok(Value::String(text))
            }
        }
    }
}

/// Register every header filter on `tera`.
pub fn register_filters(tera: &mut Tera, dateformat: &str) {
    tera.register_filter("upper", upper);
    tera.register_filter("lower", lower);
    tera.register_filter("replace", replace);
    tera.register_filter("dateformat", create_dateformat_filter(dateformat.to_string()));
}
