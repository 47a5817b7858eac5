//! Common test utilities for fileheader integration tests
//!
//! [`TestProject`] owns a temporary workspace and runs the `fileheader`
//! binary against it. Every run pins the workspace root, points the global
//! settings layer at a file that does not exist, and fixes the system author,
//! so results never depend on the machine running the tests.

// Not every helper is used by every test module
#![allow(dead_code)]

use anyhow::{Context, Result};
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Author reported by the system lookup in tests.
pub const SYSTEM_AUTHOR: &str = "Test Author";

/// Captured result of one binary run.
#[derive(Debug)]
pub struct CommandOutput {
    /// Whether the process exited with status 0
    pub success: bool,
    /// Captured stdout
    pub stdout: String,
    /// Captured stderr
    pub stderr: String,
}

/// A temporary workspace for driving the binary.
pub struct TestProject {
    workspace: TempDir,
    outside: TempDir,
}

impl TestProject {
    /// Create an empty workspace.
    pub fn new() -> Result<Self> {
        Ok(Self {
            workspace: TempDir::new().context("Failed to create workspace")?,
            outside: TempDir::new().context("Failed to create scratch directory")?,
        })
    }

    /// Workspace root.
    pub fn root(&self) -> &Path {
        self.workspace.path()
    }

    /// Absolute path of `relative` inside the workspace.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// A path outside the workspace, for global settings files.
    pub fn outside_path(&self, name: &str) -> PathBuf {
        self.outside.path().join(name)
    }

    /// Write a workspace file, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Read a workspace file.
    pub fn read(&self, relative: &str) -> Result<String> {
        let path = self.path(relative);
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }

    /// Write the workspace `.fileheader.toml`.
    pub fn write_settings(&self, toml: &str) -> Result<PathBuf> {
        self.write(".fileheader.toml", toml)
    }

    fn command(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("fileheader").context("Binary not built")?;
        cmd.current_dir(self.root())
            .env_remove("FILEHEADER_CONFIG_PATH")
            .env_remove("AUTHOR_NAME")
            .env_remove("RUST_LOG")
            .env("GIT_AUTHOR_NAME", SYSTEM_AUTHOR)
            .env("NO_COLOR", "1");
        Ok(cmd)
    }

    /// Run the binary with no global settings layer.
    pub fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        let missing = self.outside_path("missing-global.toml");
        self.run_with_global(&missing, args)
    }

    /// Run the binary with `global` as the global settings file.
    pub fn run_with_global(&self, global: &Path, args: &[&str]) -> Result<CommandOutput> {
        let mut cmd = self.command()?;
        cmd.arg("--workspace").arg(self.root()).arg("--config").arg(global).args(args);
        Self::capture(cmd)
    }

    /// Run the binary with raw arguments only; the caller picks every flag.
    pub fn run_raw(&self, args: &[&str], envs: &[(&str, &Path)]) -> Result<CommandOutput> {
        let mut cmd = self.command()?;
        for (key, value) in envs {
            cmd.env(key, value);
        }
        cmd.args(args);
        Self::capture(cmd)
    }

    fn capture(mut cmd: Command) -> Result<CommandOutput> {
        let output = cmd.output().context("Failed to run fileheader")?;
        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// `relative` with the platform's separator, as `relativeFile` renders it.
pub fn native(relative: &str) -> String {
    relative.split('/').collect::<PathBuf>().display().to_string()
}
