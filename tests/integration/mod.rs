//! Integration test suite for fileheader
//!
//! End-to-end tests that drive the `fileheader` binary inside temporary
//! workspaces.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **insert**: header insertion, delimiters, ignore patterns, line endings
//! - **changelog**: change-log blocks and repeated entries
//! - **save**: the pre-save hook and in-place field updates
//! - **open**: the new-file hook
//! - **check**: header detection across files
//! - **settings**: layered settings, templates, variables and filters
//! - **resolve**: resolved template output

#[path = "../common/mod.rs"]
mod common;

mod changelog;
mod check;
mod insert;
mod open;
mod resolve;
mod save;
mod settings;
