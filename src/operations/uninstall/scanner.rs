//! Discovery of installed skills
//!
//! Every tool directory and the shared store are scanned one level deep.
//! Several tool directories usually link to the same store, so candidates are
//! merged by canonical path and labelled with every tool exposing them.

use std::fs;
use std::path::{Path, PathBuf};

use crate::common::fs::{is_effectively_empty, is_hidden};
use crate::config::RunContext;
use crate::platform::InstallTarget;

/// Label of the shared store in candidate listings
pub const SHARED_LABEL: &str = "shared";

/// One installed skill that can be removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UninstallCandidate {
    /// Tools (and `shared`) exposing this skill, in scan order
    pub tools: Vec<String>,
    pub name: String,
    /// Every path the skill was found under
    pub paths: Vec<PathBuf>,
    /// Where the content physically lives
    pub canonical: PathBuf,
    /// `canonical` lies inside a scanned root. Content reached through a
    /// link to anywhere else belongs to the user and is never deleted.
    pub contained: bool,
}

impl UninstallCandidate {
    pub fn label(&self) -> String {
        format!("{} [{}] ({})", self.name, self.tools.join(", "), self.canonical.display())
    }
}

/// Directories to scan, labelled
fn scan_roots(ctx: &RunContext) -> Vec<(String, PathBuf)> {
    let mut roots: Vec<(String, PathBuf)> = InstallTarget::ALL
        .iter()
        .map(|t| (t.id().to_string(), ctx.paths.target_dir(*t)))
        .collect();
    roots.push((SHARED_LABEL.to_string(), ctx.paths.shared_store.clone()));
    roots
}

/// Canonical form of every existing scan root
fn canonical_roots(roots: &[(String, PathBuf)]) -> Vec<PathBuf> {
    roots
        .iter()
        .filter_map(|(_, root)| dunce::canonicalize(root).ok())
        .collect()
}

/// Non-empty, non-hidden skill directories under every scan root
pub fn scan(ctx: &RunContext) -> Vec<UninstallCandidate> {
    let roots = scan_roots(ctx);
    let owned_roots = canonical_roots(&roots);
    let mut candidates: Vec<UninstallCandidate> = Vec::new();

    for (label, root) in roots {
        if !root.is_dir() {
            continue;
        }
        for (name, path) in skill_dirs(&root) {
            let canonical = dunce::canonicalize(&path).unwrap_or_else(|_| path.clone());
            match candidates.iter_mut().find(|c| c.canonical == canonical) {
                Some(existing) => {
                    if !existing.tools.contains(&label) {
                        existing.tools.push(label.clone());
                    }
                    existing.paths.push(path);
                }
                None => {
                    let contained = owned_roots.iter().any(|r| canonical.starts_with(r));
                    candidates.push(UninstallCandidate {
                        tools: vec![label.clone()],
                        name,
                        paths: vec![path],
                        canonical,
                        contained,
                    });
                }
            }
        }
    }

    tracing::info!(count = candidates.len(), "scanned installed skills");
    candidates
}

fn skill_dirs(root: &Path) -> Vec<(String, PathBuf)> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(path = %root.display(), error = %e, "cannot read skills directory");
            return Vec::new();
        }
    };

    let mut found: Vec<(String, PathBuf)> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| !is_hidden(&entry.file_name()))
        .map(|entry| (entry.file_name().to_string_lossy().into_owned(), entry.path()))
        .filter(|(_, path)| path.is_dir())
        .filter(|(_, path)| match is_effectively_empty(path) {
            Ok(empty) => !empty,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot inspect directory");
                false
            }
        })
        .collect();
    found.sort();
    found
}
