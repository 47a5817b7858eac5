//! File timestamps.

use chrono::{DateTime, Datelike, Local};
use std::path::Path;
use std::time::SystemTime;

use crate::constants::NEW_FILE_WINDOW;

/// Read-only access to file timestamps.
pub trait FileStat: Send + Sync {
    /// Birth time, when the platform and file system record one.
    fn birth_time(&self, path: &Path) -> Option<SystemTime>;

    /// Inode change time (`ctime`); modification time where unavailable.
    fn change_time(&self, path: &Path) -> Option<SystemTime>;
}

/// Timestamps from the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFileStat;

impl FileStat for SystemFileStat {
    fn birth_time(&self, path: &Path) -> Option<SystemTime> {
        std::fs::metadata(path).ok()?.created().ok()
    }

    #[cfg(unix)]
    fn change_time(&self, path: &Path) -> Option<SystemTime> {
        use std::os::unix::fs::MetadataExt;
        use std::time::{Duration, UNIX_EPOCH};

        let metadata = std::fs::metadata(path).ok()?;
        let seconds = u64::try_from(metadata.ctime()).ok()?;
        let nanos = u32::try_from(metadata.ctime_nsec()).unwrap_or(0);
        Some(UNIX_EPOCH + Duration::new(seconds, nanos))
    }

    #[cfg(not(unix))]
    fn change_time(&self, path: &Path) -> Option<SystemTime> {
        std::fs::metadata(path).ok()?.modified().ok()
    }
}

fn is_epoch_placeholder(time: &DateTime<Local>) -> bool {
    time.year() == 1970
}

/// When the file was created.
///
/// Uses the birth time, falling back to the change time when the birth time
/// is missing or lies in 1970. `None` when the file does not exist.
pub fn creation_time<F>(stat: &F, path: &Path) -> Option<DateTime<Local>>
where
    F: FileStat + ?Sized,
{
    stat.birth_time(path)
        .map(DateTime::<Local>::from)
        .filter(|time| !is_epoch_placeholder(time))
        .or_else(|| stat.change_time(path).map(DateTime::<Local>::from))
}

/// Whether the file was born within the new-file window before `now`.
///
/// Only the birth time counts; change times move on every write.
pub fn is_new_file<F>(stat: &F, path: &Path, now: DateTime<Local>) -> bool
where
    F: FileStat + ?Sized,
{
    let Some(born) = stat.birth_time(path).map(DateTime::<Local>::from) else {
        return false;
    };
    if is_epoch_placeholder(&born) {
        return false;
    }

    let window = chrono::Duration::from_std(NEW_FILE_WINDOW).unwrap_or(chrono::Duration::seconds(3));
    born >= now - window
}
