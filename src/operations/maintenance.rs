//! Maintenance commands: removing retained logs and empty skill directories

use std::fs;
use std::path::PathBuf;

use crate::common::fs::{is_effectively_empty, is_link, remove_path};
use crate::config::RunContext;
use crate::error::{Result, fs::write_failed};
use crate::installer::LinkState;
use crate::logging;
use crate::platform::InstallTarget;
use crate::ui::Prompter;

/// Delete every retained log file. Returns the number of files removed
/// (or that would be removed in a dry run).
pub fn clean_logs(ctx: &RunContext, prompter: &mut dyn Prompter) -> Result<usize> {
    let log_dir = &ctx.paths.log_dir;
    let logs = logging::list_logs(log_dir).map_err(|e| write_failed(log_dir, e))?;
    if logs.is_empty() {
        prompter.say("No log files found.");
        return Ok(0);
    }

    for path in &logs {
        prompter.say(&ctx.announce(&format!("remove {}", path.display())));
        if !ctx.dry_run {
            fs::remove_file(path).map_err(|e| write_failed(path, e))?;
        }
    }
    Ok(logs.len())
}

/// Tool directories, then the shared store unless a tool still links to it
fn skill_roots(ctx: &RunContext) -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = InstallTarget::ALL
        .iter()
        .map(|t| ctx.paths.target_dir(*t))
        .collect();
    let store_in_use = roots
        .iter()
        .any(|dir| LinkState::classify(dir, &ctx.paths.shared_store) == LinkState::Mapped);
    if !store_in_use {
        roots.push(ctx.paths.shared_store.clone());
    }
    roots
}

/// Remove skills directories that are real and effectively empty.
///
/// Links are never removed, even when their target is empty, and the shared
/// store is kept while any tool directory links to it. Failures are
/// reported per directory. Returns the directories removed (or that would
/// be removed).
pub fn clean_skills(ctx: &RunContext, prompter: &mut dyn Prompter) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();

    for dir in skill_roots(ctx) {
        if is_link(&dir) || !dir.is_dir() {
            continue;
        }
        match is_effectively_empty(&dir) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => {
                tracing::warn!(path = %dir.display(), error = %e, "cannot inspect directory");
                continue;
            }
        }

        prompter.say(&ctx.announce(&format!("remove empty directory {}", dir.display())));
        if !ctx.dry_run {
            if let Err(e) = remove_path(&dir) {
                tracing::error!(path = %dir.display(), error = %e, "failed to remove directory");
                prompter.warn(&format!("Failed to remove {}: {e}", dir.display()));
                continue;
            }
        }
        removed.push(dir);
    }

    if removed.is_empty() {
        prompter.say("No empty skills directories found.");
    }
    Ok(removed)
}
