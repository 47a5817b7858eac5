//! Moment-style date format strings.
//!
//! Settings use the token syntax common in editor extensions
//! (`YYYY-MM-DD HH:mm:ss`); [`to_chrono_format`] translates it to a `chrono`
//! format string. Text inside `[...]` is copied literally.
//!
//! | token | meaning | token | meaning |
//! |---|---|---|---|
//! | `YYYY` / `YY` | year | `HH` / `H` | hour 00-23 / 0-23 |
//! | `MMMM` / `MMM` | month name / short | `hh` / `h` | hour 01-12 / 1-12 |
//! | `MM` / `M` | month 01-12 / 1-12 | `mm` / `m` | minute |
//! | `DD` / `D` | day of month | `ss` / `s` | second |
//! | `dddd` / `ddd` | weekday name / short | `SSS` | milliseconds |
//! | `A` / `a` | AM/PM, am/pm | `Z` / `ZZ` | offset `+01:00` / `+0100` |

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

const TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MMMM", "%B"),
    ("MMM", "%b"),
    ("MM", "%m"),
    ("M", "%-m"),
    ("DD", "%d"),
    ("D", "%-d"),
    ("dddd", "%A"),
    ("ddd", "%a"),
    ("HH", "%H"),
    ("H", "%-H"),
    ("hh", "%I"),
    ("h", "%-I"),
    ("mm", "%M"),
    ("m", "%-M"),
    ("ss", "%S"),
    ("s", "%-S"),
    ("SSS", "%3f"),
    ("A", "%p"),
    ("a", "%P"),
    ("ZZ", "%z"),
    ("Z", "%:z"),
];

/// Translate a moment-style format into a `chrono` format string.
///
/// # Examples
///
/// ```rust
/// use fileheader_cli::templating::to_chrono_format;
///
/// assert_eq!(to_chrono_format("YYYY-MM-DD HH:mm:ss"), "%Y-%m-%d %H:%M:%S");
/// assert_eq!(to_chrono_format("[Week] D"), "Week %-d");
/// ```
#[must_use]
pub fn to_chrono_format(format: &str) -> String {
    let mut out = String::with_capacity(format.len() * 2);
    let mut rest = format;

    'outer: while let Some(c) = rest.chars().next() {
        if c == '[' {
            if let Some(close) = rest.find(']') {
                out.push_str(&rest[1..close].replace('%', "%%"));
                rest = &rest[close + 1..];
                continue;
            }
        }

        for (token, spec) in TOKENS {
            if let Some(stripped) = rest.strip_prefix(token) {
                out.push_str(spec);
                rest = stripped;
                continue 'outer;
            }
        }

        if c == '%' {
            out.push_str("%%");
        } else {
            out.push(c);
        }
        rest = &rest[c.len_utf8()..];
    }

    out
}

/// Format a timestamp with a moment-style format.
#[must_use]
pub fn format_datetime<Tz>(datetime: &DateTime<Tz>, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    datetime.format(&to_chrono_format(format)).to_string()
}

/// Parse a date string, trying `format` first and then common layouts.
#[must_use]
pub fn parse_datetime(value: &str, format: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_local());
    }

    let custom = to_chrono_format(format);
    let layouts = [custom.as_str(), "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
    for layout in layouts {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, layout) {
            return Some(parsed);
        }
    }

    [custom.as_str(), "%Y-%m-%d", "%Y/%m/%d"]
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(value, layout).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
