//! Collaborators supplied by the host environment.
//!
//! Header operations need three things from whoever embeds them: a way to
//! show notifications ([`Notifier`]), the author's display name
//! ([`AuthorLookup`]) and file timestamps ([`FileStat`]). The system
//! implementations here back the command-line binary; tests and editor
//! integrations substitute their own.

mod author;
mod fs_stat;

pub use author::{AuthorLookup, SystemAuthor, resolve_author};
pub use fs_stat::{FileStat, SystemFileStat, creation_time, is_new_file};

use colored::Colorize;

/// User-visible notifications.
pub trait Notifier: Send + Sync {
    /// Report a completed action.
    fn info(&self, message: &str);

    /// Report a failure.
    fn error(&self, message: &str);
}

/// Prints notifications to the terminal: info on stdout, errors on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier {
    quiet: bool,
}

impl ConsoleNotifier {
    /// Create a notifier; `quiet` suppresses info messages.
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self {
            quiet,
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message.green());
        }
    }

    fn error(&self, message: &str) {
        eprintln!("{}: {}", "error".red().bold(), message);
    }
}
