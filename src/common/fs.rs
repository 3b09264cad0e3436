//! Common file system operations with unified error handling

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

#[derive(Default, Clone)]
pub struct CopyOptions {
    pub exclude: Vec<String>,
}

impl CopyOptions {
    pub fn exclude_git() -> Self {
        Self {
            exclude: vec![".git".to_string()],
        }
    }

    fn is_excluded(&self, name: &std::ffi::OsStr) -> bool {
        self.exclude
            .iter()
            .any(|excluded| name.to_str() == Some(excluded.as_str()))
    }
}

/// Copy a directory recursively with options.
///
/// Links inside `src` are never followed or read through: they are left out
/// of the copy and returned, relative to `src`. Other special files are
/// ignored.
pub fn copy_dir_recursive<P1, P2>(
    src: P1,
    dst: P2,
    options: &CopyOptions,
) -> io::Result<Vec<PathBuf>>
where
    P1: AsRef<Path>,
    P2: AsRef<Path>,
{
    let src_ref = src.as_ref();
    let dst_ref = dst.as_ref();
    let mut skipped_links = Vec::new();

    fs::create_dir_all(dst_ref)?;

    let walker = WalkDir::new(src_ref)
        .follow_links(false)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| !options.is_excluded(e.file_name()));

    for entry in walker {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(src_ref)
            .map_err(io::Error::other)?;
        let dst_path = dst_ref.join(rel);
        let file_type = entry.file_type();

        if file_type.is_symlink() {
            skipped_links.push(rel.to_path_buf());
        } else if file_type.is_dir() {
            fs::create_dir_all(&dst_path)?;
        } else if file_type.is_file() {
            fs::copy(entry.path(), &dst_path)?;
        }
    }

    Ok(skipped_links)
}

/// Whether a file name is hidden (dot-prefixed, e.g. `.DS_Store`)
pub fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// A directory counts as empty when it holds only hidden entries
pub fn is_effectively_empty(dir: &Path) -> io::Result<bool> {
    for entry in fs::read_dir(dir)? {
        if !is_hidden(&entry?.file_name()) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Whether `path` itself is a symlink or junction (not following it)
pub fn is_link(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink())
}

/// Absolute, canonical target of a link, if `path` is a link that resolves
pub fn resolve_link(path: &Path) -> Option<PathBuf> {
    let target = fs::read_link(path).ok()?;
    let absolute = if target.is_absolute() {
        target
    } else {
        path.parent()?.join(target)
    };
    dunce::canonicalize(absolute).ok()
}

/// Remove whatever is at `path`: a link (never its target), a directory
/// tree or a file. A missing path is not an error.
pub fn remove_path(path: &Path) -> io::Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    if is_link(path) {
        // Directory symlinks and junctions on Windows are removed as directories
        return fs::remove_file(path).or_else(|_| fs::remove_dir(path));
    }
    if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// Create a directory link at `link` pointing to `original`
pub fn create_dir_link(original: &Path, link: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(original, link)
    }

    #[cfg(windows)]
    {
        std::os::windows::fs::symlink_dir(original, link)
    }
}
