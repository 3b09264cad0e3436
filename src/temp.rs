//! Scratch directories for fetched repositories.
//!
//! Scratch space is always created under an absolute system temp location, so
//! a relative `TMPDIR` (e.g. `TMPDIR=tmp`) never puts a checkout under the
//! current working directory.

use std::env;
use std::path::PathBuf;

use tempfile::TempDir;

/// Prefix of every scratch directory, so leftovers are recognizable
const SCRATCH_PREFIX: &str = "skillget-";

/// Absolute base directory for temporary directories
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        return t;
    }
    #[cfg(windows)]
    {
        env::var("TEMP")
            .or_else(|_| env::var("TMP"))
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
    }
    #[cfg(not(windows))]
    {
        PathBuf::from("/tmp")
    }
}

/// Create a fresh scratch directory, removed recursively when dropped
pub fn scratch_dir() -> std::io::Result<TempDir> {
    tempfile::Builder::new()
        .prefix(SCRATCH_PREFIX)
        .tempdir_in(temp_dir_base())
}
