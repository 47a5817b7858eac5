//! Cross-platform utilities and helpers
//!
//! # Modules
//!
//! - [`fs`] - atomic writes and path normalization
//! - [`platform`] - home directory lookup and `~`/`$VAR` path expansion

pub mod fs;
pub mod platform;

pub use fs::{atomic_write, normalize_path};
pub use platform::{absolutize, get_home_dir, resolve_path};
