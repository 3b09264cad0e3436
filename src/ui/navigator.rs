//! Interactive tree navigation
//!
//! Starting at the fetched base path, the operator walks subdirectories until
//! a directory is selected as the skill root. Navigation never leaves the
//! tree rooted at the starting directory.

use std::fs;
use std::path::{Path, PathBuf};

use super::Prompter;
use crate::error::{Result, SkillError, fs::read_failed};

/// Directory names never offered for navigation
const SKIPPED_DIRS: &[&str] = &[".git"];

/// The directory chosen as skill root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillSelection {
    pub path: PathBuf,
    /// Base name of `path`, used as the installed directory name
    pub skill_name: String,
}

impl SkillSelection {
    pub fn new(path: PathBuf) -> Self {
        let skill_name = path
            .file_name()
            .map_or_else(|| "skill".to_string(), |n| n.to_string_lossy().into_owned());
        Self { path, skill_name }
    }
}

/// One parsed operator command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavInput {
    Select,
    Up,
    SingleChild,
    Quit,
    Descend(usize),
    Invalid,
}

impl NavInput {
    fn parse(raw: &str, count: usize) -> Self {
        match raw.trim() {
            "" | "." => NavInput::Select,
            ".." => NavInput::Up,
            "s" | "S" => NavInput::SingleChild,
            "q" | "Q" => NavInput::Quit,
            other => match other.parse::<usize>() {
                Ok(n) if (1..=count).contains(&n) => NavInput::Descend(n - 1),
                _ => NavInput::Invalid,
            },
        }
    }
}

/// Sorted names of the direct subdirectories of `dir`.
///
/// Links are not listed, even when they point at a directory, so navigation
/// stays inside the fetched tree.
pub fn list_subdirectories(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|e| read_failed(dir, e))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| read_failed(dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if SKIPPED_DIRS.contains(&name.as_str()) {
            continue;
        }
        let file_type = entry.file_type().map_err(|e| read_failed(dir, e))?;
        if file_type.is_dir() {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

pub struct TreeNavigator<'a> {
    root: PathBuf,
    prompter: &'a mut dyn Prompter,
}

impl<'a> TreeNavigator<'a> {
    pub fn new(root: impl Into<PathBuf>, prompter: &'a mut dyn Prompter) -> Self {
        Self {
            root: root.into(),
            prompter,
        }
    }

    /// Run until the operator selects a directory or reaches a leaf.
    ///
    /// `q` returns [`SkillError::Cancelled`].
    pub fn navigate(self) -> Result<SkillSelection> {
        let TreeNavigator { root, prompter } = self;
        let mut current = root.clone();

        loop {
            if !current.is_dir() {
                return Err(SkillError::NotADirectory {
                    path: current.display().to_string(),
                });
            }

            let subdirs = list_subdirectories(&current)?;
            if subdirs.is_empty() {
                tracing::info!(path = %current.display(), "reached leaf directory");
                return Ok(SkillSelection::new(current));
            }

            prompter.say("");
            prompter.say(&format!("📁 {}", display_path(&root, &current)));
            for (idx, name) in subdirs.iter().enumerate() {
                prompter.say(&format!("  {:>2}) {name}", idx + 1));
            }

            let answer = prompter.input(&format!(
                "Choose 1-{}, '.' or Enter to select this directory, '..' up, 's' single child, 'q' quit:",
                subdirs.len()
            ))?;

            match NavInput::parse(&answer, subdirs.len()) {
                NavInput::Select => {
                    tracing::info!(path = %current.display(), "selected directory");
                    return Ok(SkillSelection::new(current));
                }
                NavInput::Up => {
                    if current == root {
                        tracing::warn!("cannot go above the fetched tree");
                        prompter.warn("Already at the top of the fetched tree");
                    } else if let Some(parent) = current.parent() {
                        current = parent.to_path_buf();
                    }
                }
                NavInput::SingleChild => {
                    if let [only] = subdirs.as_slice() {
                        current = current.join(only);
                    } else {
                        tracing::warn!(count = subdirs.len(), "single-child shortcut unavailable");
                        prompter.warn(&format!(
                            "'s' only works with exactly one subdirectory (found {})",
                            subdirs.len()
                        ));
                    }
                }
                NavInput::Quit => {
                    tracing::info!("navigation aborted by operator");
                    return Err(SkillError::cancelled("navigation aborted"));
                }
                NavInput::Descend(idx) => current = current.join(&subdirs[idx]),
                NavInput::Invalid => {
                    tracing::warn!(input = answer.trim(), "invalid navigation choice");
                    prompter.warn(&format!("Invalid choice: '{}'", answer.trim()));
                }
            }
        }
    }
}

fn display_path(root: &Path, current: &Path) -> String {
    let root_name = root
        .file_name()
        .map_or_else(String::new, |n| n.to_string_lossy().into_owned());
    match current.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => format!("{root_name}/"),
        Ok(rel) => format!("{root_name}/{}", rel.to_string_lossy().replace('\\', "/")),
        Err(_) => current.display().to_string(),
    }
}
