//! Core types shared across fileheader.
//!
//! Currently this is the error taxonomy and its user-facing presentation; see
//! [`error`] for details.

pub mod error;

pub use error::{ErrorContext, FileHeaderError, user_friendly_error};
