//! Destination conflict resolution
//!
//! Before a skill is copied, an occupied destination is either overwritten
//! or the copy is renamed. The loop repeats until the chosen destination is
//! free, so a rename that collides again is asked about again.

use std::path::{Path, PathBuf};

use super::Prompter;
use crate::common::fs::{is_link, remove_path};
use crate::config::RunContext;
use crate::error::{Result, SkillError, fs::write_failed};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConflictChoice {
    Overwrite,
    Rename,
    Invalid,
}

impl ConflictChoice {
    fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "o" | "overwrite" => ConflictChoice::Overwrite,
            "" | "r" | "rename" => ConflictChoice::Rename,
            _ => ConflictChoice::Invalid,
        }
    }
}

/// Whether `name` can be used as a single directory name
fn valid_dir_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
}

/// Return a destination that does not exist yet.
///
/// Overwriting removes the occupant, unless this is a dry run, in which case
/// the removal is only reported and `dest` is returned as-is. An empty
/// rename answer is fatal.
pub fn resolve_destination(
    dest: &Path,
    ctx: &RunContext,
    prompter: &mut dyn Prompter,
) -> Result<PathBuf> {
    let mut dest = dest.to_path_buf();

    while dest.exists() || is_link(&dest) {
        prompter.warn(&format!("Destination already exists: {}", dest.display()));
        let answer = prompter.input("[o]verwrite or [r]ename? (default: rename)")?;

        match ConflictChoice::parse(&answer) {
            ConflictChoice::Overwrite => {
                prompter.say(&ctx.announce(&format!("remove existing {}", dest.display())));
                if ctx.dry_run {
                    return Ok(dest);
                }
                remove_path(&dest).map_err(|e| write_failed(&dest, e))?;
            }
            ConflictChoice::Rename => {
                let name = prompter.input("New directory name:")?;
                let name = name.trim();
                if name.is_empty() {
                    return Err(SkillError::EmptyRenameTarget);
                }
                if !valid_dir_name(name) {
                    tracing::warn!(name, "rejected rename target");
                    prompter.warn(&format!("'{name}' is not a valid directory name"));
                    continue;
                }
                tracing::info!(from = %dest.display(), to = name, "renaming destination");
                dest.set_file_name(name);
            }
            ConflictChoice::Invalid => {
                tracing::warn!(input = answer.trim(), "invalid conflict choice");
                prompter.warn(&format!("Invalid choice: '{}'", answer.trim()));
            }
        }
    }

    Ok(dest)
}
