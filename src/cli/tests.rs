//! Argument parsing and configuration building.

use crate::cli::Cli;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_cli_parsing() {
    assert!(Cli::try_parse_from(["fileheader", "--help"]).is_err());
    assert!(Cli::try_parse_from(["fileheader", "insert", "main.rs"]).is_ok());
    assert!(Cli::try_parse_from(["fileheader", "insert"]).is_err());
    assert!(Cli::try_parse_from(["fileheader", "check"]).is_err());
    assert!(Cli::try_parse_from(["fileheader", "check", "a.rs", "b.rs"]).is_ok());
    assert!(Cli::try_parse_from(["fileheader", "resolve", "--format", "json", "a.py"]).is_ok());
    assert!(Cli::try_parse_from(["fileheader", "resolve", "--format", "yaml", "a.py"]).is_err());
}

#[test]
fn test_verbose_and_quiet_conflict() {
    assert!(Cli::try_parse_from(["fileheader", "-v", "-q", "insert", "a.rs"]).is_err());
}

#[test]
fn test_build_config_log_levels() {
    let cli = Cli::try_parse_from(["fileheader", "--verbose", "insert", "a.rs"]).unwrap();
    assert_eq!(cli.build_config().log_level.as_deref(), Some("debug"));

    let cli = Cli::try_parse_from(["fileheader", "--quiet", "insert", "a.rs"]).unwrap();
    let config = cli.build_config();
    assert_eq!(config.log_level, None);
    assert!(config.quiet);

    let cli = Cli::try_parse_from(["fileheader", "insert", "a.rs"]).unwrap();
    assert_eq!(cli.build_config().log_level.as_deref(), Some("warn"));
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "fileheader",
        "save",
        "a.rs",
        "--workspace",
        "/work",
        "--config",
        "/etc/fileheader.toml",
        "--language",
        "c",
    ])
    .unwrap();

    let config = cli.build_config();
    assert_eq!(config.workspace, Some(PathBuf::from("/work")));
    assert_eq!(config.config_path.as_deref(), Some("/etc/fileheader.toml"));
}
