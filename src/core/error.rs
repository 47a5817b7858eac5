//! Error handling for fileheader
//!
//! The error system is built around two types:
//! - [`FileHeaderError`] - enumerated failure cases of header operations
//! - [`ErrorContext`] - wrapper that adds user-friendly details and suggestions
//!
//! # Error Taxonomy
//!
//! Header operations fail in a small number of well-defined ways:
//! - **No active document**: surfaced to the user, the operation aborts before
//!   any mutation ([`FileHeaderError::NoActiveDocument`])
//! - **Template problems**: the header template could not be rendered
//!   ([`FileHeaderError::TemplateRender`])
//! - **Configuration problems**: a settings layer could not be read or parsed
//!   ([`FileHeaderError::ConfigParse`], [`FileHeaderError::InvalidIgnorePattern`])
//!
//! Author lookup failures, missing end markers and ignore-pattern matches are
//! not errors at all; they degrade silently inside the operation.
//!
//! Use [`user_friendly_error`] to convert any [`anyhow::Error`] into an
//! [`ErrorContext`] for terminal display.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fileheader_cli::core::{FileHeaderError, ErrorContext, user_friendly_error};
//!
//! let ctx = user_friendly_error(anyhow::Error::from(FileHeaderError::NoActiveDocument));
//! ctx.display(); // colored output on stderr
//!
//! let manual = ErrorContext::new(FileHeaderError::Other { message: "boom".into() })
//!     .with_suggestion("Run with --verbose for more information");
//! println!("{manual}");
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for fileheader operations.
///
/// # Error Categories
///
/// ## Document
/// - [`NoActiveDocument`] - an operation was invoked without a document
///
/// ## Templates
/// - [`TemplateRender`] - the template engine rejected a header template
///
/// ## Configuration
/// - [`ConfigParse`] - a settings file contains invalid TOML or schema
/// - [`InvalidIgnorePattern`] - an `ignore` entry cannot be compiled
/// - [`TomlError`] - raw TOML parse failure from [`toml::de::Error`]
///
/// ## System
/// - [`IoError`] - standard I/O errors from [`std::io::Error`]
/// - [`Other`] - anything else, carrying a message
///
/// [`NoActiveDocument`]: FileHeaderError::NoActiveDocument
/// [`TemplateRender`]: FileHeaderError::TemplateRender
/// [`ConfigParse`]: FileHeaderError::ConfigParse
/// [`InvalidIgnorePattern`]: FileHeaderError::InvalidIgnorePattern
/// [`TomlError`]: FileHeaderError::TomlError
/// [`IoError`]: FileHeaderError::IoError
/// [`Other`]: FileHeaderError::Other
#[derive(Error, Debug)]
pub enum FileHeaderError {
    /// A header command ran while no document was open in the host.
    #[error("fileheader requires an active document")]
    NoActiveDocument,

    /// The header template could not be rendered.
    #[error("Failed to render header template: {message}")]
    TemplateRender {
        /// Cleaned-up message from the template engine
        message: String,
    },

    /// A settings layer could not be parsed.
    #[error("Invalid settings file {file}: {reason}")]
    ConfigParse {
        /// Path of the offending settings file
        file: String,
        /// Parser message
        reason: String,
    },

    /// An `ignore` pattern could not be compiled into a matcher.
    #[error("Invalid ignore pattern '{pattern}': {reason}")]
    InvalidIgnorePattern {
        /// Pattern as written in the settings
        pattern: String,
        /// Why compilation failed
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Generic error with a message
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

impl Clone for FileHeaderError {
    fn clone(&self) -> Self {
        match self {
            Self::NoActiveDocument => Self::NoActiveDocument,
            Self::TemplateRender {
                message,
            } => Self::TemplateRender {
                message: message.clone(),
            },
            Self::ConfigParse {
                file,
                reason,
            } => Self::ConfigParse {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::InvalidIgnorePattern {
                pattern,
                reason,
            } => Self::InvalidIgnorePattern {
                pattern: pattern.clone(),
                reason: reason.clone(),
            },
            // io::Error is not Clone; keep kind and message
            Self::IoError(e) => Self::IoError(std::io::Error::new(e.kind(), e.to_string())),
            Self::TomlError(e) => Self::Other {
                message: format!("TOML parsing error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error context wrapper that adds user-friendly details and suggestions.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: FileHeaderError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: FileHeaderError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    ///
    /// Suggestions are actionable steps, displayed in green.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error, displayed in yellow.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context on stderr with terminal colors.
    ///
    /// - Error message: red and bold
    /// - Details: yellow
    /// - Suggestion: green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with suggestions.
///
/// Recognises [`FileHeaderError`] variants, [`std::io::Error`] kinds and
/// [`toml::de::Error`]; everything else is reported with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(header_error) = error.downcast_ref::<FileHeaderError>() {
        return create_error_context(header_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(FileHeaderError::Other {
                    message: format!("Permission denied: {error}"),
                })
                .with_suggestion("Check the file's ownership and permissions")
                .with_details("fileheader rewrites files in place and needs write access");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(FileHeaderError::Other {
                    message: format!("File not found: {error}"),
                })
                .with_suggestion("Check that the file path is correct");
            }
            std::io::ErrorKind::InvalidData => {
                return ErrorContext::new(FileHeaderError::Other {
                    message: format!("Invalid file content: {error}"),
                })
                .with_details("Only UTF-8 text files can carry a header");
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(FileHeaderError::ConfigParse {
            file: "settings".to_string(),
            reason: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax of your .fileheader.toml and global config files");
    }

    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(FileHeaderError::Other {
        message,
    })
}

fn create_error_context(error: FileHeaderError) -> ErrorContext {
    match &error {
        FileHeaderError::NoActiveDocument => ErrorContext::new(error)
            .with_suggestion("Open a file (or pass a file path) before running a header command"),

        FileHeaderError::TemplateRender { .. } => ErrorContext::new(error)
            .with_suggestion(
                "Check the template lines in your settings: placeholders use {{ name }}, \
                 filters use {{ name | upper }}",
            )
            .with_details("Unknown placeholders render as empty text; only syntax errors fail"),

        FileHeaderError::ConfigParse { file, .. } => {
            let suggestion = format!(
                "Check the TOML syntax in {file}. `variables` is a list of [name, value] pairs \
                 and each [[templates]] entry needs a `language` key"
            );
            ErrorContext::new(error).with_suggestion(suggestion)
        }

        FileHeaderError::InvalidIgnorePattern { .. } => ErrorContext::new(error)
            .with_suggestion("Ignore patterns support `*` wildcards, e.g. \"*.min.js\""),

        _ => ErrorContext::new(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_active_document_message() {
        let ctx = user_friendly_error(anyhow::Error::from(FileHeaderError::NoActiveDocument));
        assert_eq!(ctx.error.to_string(), "fileheader requires an active document");
        assert!(ctx.suggestion.is_some());
    }

    #[test]
    fn test_generic_error_includes_chain() {
        let error = anyhow::anyhow!("root cause").context("outer failure");
        let ctx = user_friendly_error(error);
        let text = ctx.to_string();
        assert!(text.contains("outer failure"));
        assert!(text.contains("Caused by:"));
        assert!(text.contains("root cause"));
    }

    #[test]
    fn test_io_error_clone_keeps_kind() {
        let err = FileHeaderError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        match err.clone() {
            FileHeaderError::IoError(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("unexpected clone: {other:?}"),
        }
    }

    #[test]
    fn test_config_parse_suggestion_mentions_file() {
        let ctx = user_friendly_error(anyhow::Error::from(FileHeaderError::ConfigParse {
            file: "/tmp/.fileheader.toml".to_string(),
            reason: "expected `=`".to_string(),
        }));
        assert!(ctx.suggestion.unwrap().contains("/tmp/.fileheader.toml"));
    }
}
