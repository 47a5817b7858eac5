//! Author name lookup.

use std::future::Future;
use tokio::process::Command;
use tracing::debug;

use crate::config::HeaderConfig;

/// Asynchronous lookup of the current user's display name.
pub trait AuthorLookup: Send + Sync {
    /// The display name, or `None` when it cannot be determined.
    fn full_name(&self) -> impl Future<Output = Option<String>> + Send;
}

/// Looks the author up from the environment, git and the OS account.
///
/// Sources, in order:
/// 1. `GIT_AUTHOR_NAME`, then `AUTHOR_NAME`
/// 2. `git config --global user.name`
/// 3. the account's full name (`getent passwd` GECOS field, `id -F` on macOS)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAuthor;

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

async fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().await.ok()?;
    if !output.status.success() {
        debug!("{program} {args:?} exited with {}", output.status);
        return None;
    }
    non_empty(&String::from_utf8_lossy(&output.stdout))
}

/// Full name from a `passwd` line: the first comma-separated part of GECOS.
fn gecos_name(passwd_line: &str) -> Option<String> {
    let gecos = passwd_line.trim().split(':').nth(4)?;
    non_empty(gecos.split(',').next().unwrap_or_default())
}

impl SystemAuthor {
    fn from_env() -> Option<String> {
        ["GIT_AUTHOR_NAME", "AUTHOR_NAME"]
            .iter()
            .find_map(|name| std::env::var(name).ok().as_deref().and_then(non_empty))
    }

    async fn from_git() -> Option<String> {
        command_output("git", &["config", "--global", "user.name"]).await
    }

    async fn from_account() -> Option<String> {
        if cfg!(target_os = "macos") {
            return command_output("id", &["-F"]).await;
        }
        if cfg!(windows) {
            return None;
        }

        let user = match std::env::var("USER").ok().as_deref().and_then(non_empty) {
            Some(user) => user,
            None => command_output("id", &["-un"]).await?,
        };
        let line = command_output("getent", &["passwd", &user]).await?;
        gecos_name(&line)
    }
}

impl AuthorLookup for SystemAuthor {
    async fn full_name(&self) -> Option<String> {
        if let Some(name) = Self::from_env() {
            return Some(name);
        }
        if let Some(name) = Self::from_git().await {
            return Some(name);
        }
        let name = Self::from_account().await;
        if name.is_none() {
            debug!("Author lookup found no name");
        }
        name
    }
}

/// The author for an operation: the configured `author` when set (even if
/// empty), otherwise whatever `lookup` finds.
pub async fn resolve_author<A>(config: &HeaderConfig, lookup: &A) -> Option<String>
where
    A: AuthorLookup + ?Sized,
{
    match &config.author {
        Some(author) => Some(author.clone()),
        None => lookup.full_name().await,
    }
}
