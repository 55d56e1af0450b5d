//! Console and log-file output
//!
//! The log file rotates weekly (weeks start on Monday) and one rotated file
//! is kept. Rotation happens at start-up, which is when a scheduled batch
//! job crosses a week boundary.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveTime, TimeZone};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{AppError, Result};

/// Rotated log files kept next to the live one
pub const BACKUP_COUNT: usize = 1;

/// Initialize logging to stderr and, when given, to `logfile`
pub fn init_logging(debug: bool, logfile: Option<&Path>) -> Result<()> {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let file_layer = match logfile {
        Some(path) => {
            if let Some(rotated) = rotate_weekly(path, Local::now())? {
                eprintln!("Rotated log file to {}", rotated.display());
            }
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .with(fmt::layer().with_writer(io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::Config(format!("Failed to initialize logging: {}", e)))
}

/// Monday 00:00 of the week containing `now`
fn week_start<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let days_back = i64::from(now.weekday().num_days_from_monday());
    let monday = now.date_naive() - Duration::days(days_back);
    now.timezone()
        .from_local_datetime(&monday.and_time(NaiveTime::default()))
        .earliest()
        .unwrap_or_else(|| now.clone())
}

/// Move `path` aside when it was last written before the current week.
///
/// The rotated file is named `<file>.<YYYY-MM-DD>` after its last write;
/// older rotated files beyond [`BACKUP_COUNT`] are removed.
pub fn rotate_weekly(path: &Path, now: DateTime<Local>) -> io::Result<Option<PathBuf>> {
    let modified = match fs::metadata(path) {
        Ok(meta) => DateTime::<Local>::from(meta.modified()?),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };

    if modified >= week_start(&now) {
        return Ok(None);
    }

    let mut rotated = path.as_os_str().to_owned();
    rotated.push(format!(".{}", modified.format("%Y-%m-%d")));
    let rotated = PathBuf::from(rotated);
    fs::rename(path, &rotated)?;

    prune_rotated(path)?;
    Ok(Some(rotated))
}

fn prune_rotated(path: &Path) -> io::Result<()> {
    let (Some(dir), Some(name)) = (path.parent(), path.file_name()) else {
        return Ok(());
    };
    let dir = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };
    let prefix = format!("{}.", name.to_string_lossy());

    let mut rotated: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| {
            p.file_name()
                .map(|n| is_rotated_name(&n.to_string_lossy(), &prefix))
                .unwrap_or(false)
        })
        .collect();

    // Date suffixes sort chronologically; newest first
    rotated.sort();
    rotated.reverse();
    for old in rotated.into_iter().skip(BACKUP_COUNT) {
        tracing::debug!("Removing old log file {}", old.display());
        fs::remove_file(old)?;
    }
    Ok(())
}

/// `<prefix><YYYY-MM-DD>` and nothing else
fn is_rotated_name(name: &str, prefix: &str) -> bool {
    name.strip_prefix(prefix)
        .filter(|suffix| suffix.len() == 10)
        .map(|suffix| NaiveDate::parse_from_str(suffix, "%Y-%m-%d").is_ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::time::SystemTime;
    use tempfile::TempDir;

    fn touch(path: &Path, when: DateTime<Local>) {
        fs::write(path, "log line\n").unwrap();
        File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(SystemTime::from(when))
            .unwrap();
    }

    fn wednesday_noon() -> DateTime<Local> {
        // 2026-10-14 is a Wednesday
        Local.with_ymd_and_hms(2026, 10, 14, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_week_start_is_monday_midnight() {
        let start = week_start(&wednesday_noon());
        assert_eq!(start, Local.with_ymd_and_hms(2026, 10, 12, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_current_week_file_is_kept() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("backup.log");
        touch(&path, wednesday_noon() - Duration::days(1));

        assert_eq!(rotate_weekly(&path, wednesday_noon()).unwrap(), None);
        assert!(path.exists());
    }

    #[test]
    fn test_missing_file_is_not_rotated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("backup.log");
        assert_eq!(rotate_weekly(&path, wednesday_noon()).unwrap(), None);
    }

    #[test]
    fn test_last_week_file_is_rotated_and_old_backups_pruned() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("backup.log");
        let older = dir.path().join("backup.log.2026-09-28");
        fs::write(&older, "ancient\n").unwrap();
        touch(&path, wednesday_noon() - Duration::days(7));

        let rotated = rotate_weekly(&path, wednesday_noon()).unwrap().unwrap();

        assert_eq!(rotated, dir.path().join("backup.log.2026-10-07"));
        assert!(rotated.exists());
        assert!(!path.exists());
        assert!(!older.exists());
    }

    #[test]
    fn test_prune_keeps_unrelated_siblings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("backup.log");
        let manual = dir.path().join("backup.log.bak");
        let almost = dir.path().join("backup.log.2026-09-28.gz");
        fs::write(&manual, "keep me\n").unwrap();
        fs::write(&almost, "keep me too\n").unwrap();
        fs::write(dir.path().join("backup.log.2026-09-28"), "old\n").unwrap();
        touch(&path, wednesday_noon() - Duration::days(7));

        rotate_weekly(&path, wednesday_noon()).unwrap();

        assert!(manual.exists());
        assert!(almost.exists());
        assert!(dir.path().join("backup.log.2026-10-07").exists());
        assert!(!dir.path().join("backup.log.2026-09-28").exists());
    }

    #[test]
    fn test_rotated_name_matching() {
        assert!(is_rotated_name("backup.log.2026-10-07", "backup.log."));
        assert!(!is_rotated_name("backup.log.bak", "backup.log."));
        assert!(!is_rotated_name("backup.log.2026-13-01", "backup.log."));
        assert!(!is_rotated_name("other.log.2026-10-07", "backup.log."));
    }
}
