//! Per-run log session
//!
//! Each run writes one log file to `<home>/.skillget/logs`. Starting a
//! session deletes every other log file, so only the latest run is retained.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `skillget=trace`)
pub const LOG_ENV: &str = "SKILLGET_LOG";

const LOG_PREFIX: &str = "skillget-";
const LOG_EXTENSION: &str = "log";

/// The current run's log file
#[derive(Debug)]
pub struct LogSession {
    path: PathBuf,
}

impl LogSession {
    /// Create a fresh log file, purging older ones, and install the global
    /// subscriber writing to it.
    pub fn start(log_dir: &Path) -> io::Result<Self> {
        let (session, file) = Self::create(log_dir)?;

        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init()
            .map_err(|e| io::Error::other(e.to_string()))?;

        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            log = %session.path.display(),
            "session started"
        );
        Ok(session)
    }

    /// Create the log file without touching the global subscriber
    pub fn create(log_dir: &Path) -> io::Result<(Self, File)> {
        fs::create_dir_all(log_dir)?;
        let path = log_dir.join(session_file_name());
        purge_logs(log_dir, Some(&path))?;
        let file = File::create(&path)?;
        Ok((Self { path }, file))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn session_file_name() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    format!("{LOG_PREFIX}{secs}-{}.{LOG_EXTENSION}", std::process::id())
}

fn is_log_file(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == LOG_EXTENSION)
}

/// Log files in `log_dir`, sorted. A missing directory has none.
pub fn list_logs(log_dir: &Path) -> io::Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(log_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };
    let mut logs = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if is_log_file(&path) {
            logs.push(path);
        }
    }
    logs.sort();
    Ok(logs)
}

/// Delete every log file except `keep`; returns how many were deleted
pub fn purge_logs(log_dir: &Path, keep: Option<&Path>) -> io::Result<usize> {
    let mut removed = 0;
    for path in list_logs(log_dir)? {
        if keep == Some(path.as_path()) {
            continue;
        }
        fs::remove_file(&path)?;
        removed += 1;
    }
    Ok(removed)
}
