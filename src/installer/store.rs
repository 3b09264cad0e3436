//! Physical skill copies
//!
//! The unified install copies the skill once into the shared store. Legacy
//! mode copies it into every selected tool directory instead.

use std::fs;
use std::path::{Path, PathBuf};

use super::mapper::LinkState;
use crate::common::fs::{CopyOptions, copy_dir_recursive};
use crate::config::RunContext;
use crate::error::{Result, SkillError, fs::write_failed};
use crate::platform::InstallTarget;
use crate::ui::{Prompter, SkillSelection, resolve_destination};

/// Copy the selected skill into `dest_root/<skill name>`.
///
/// An occupied destination goes through conflict resolution first. Returns
/// the directory the skill was (or in a dry run, would be) copied to.
pub fn copy_skill(
    selection: &SkillSelection,
    dest_root: &Path,
    ctx: &RunContext,
    prompter: &mut dyn Prompter,
) -> Result<PathBuf> {
    let dest = resolve_destination(&dest_root.join(&selection.skill_name), ctx, prompter)?;
    prompter.say(&ctx.announce(&format!(
        "copy {} to {}",
        selection.skill_name,
        dest.display()
    )));
    if ctx.dry_run {
        return Ok(dest);
    }

    fs::create_dir_all(dest_root).map_err(|e| write_failed(dest_root, e))?;
    let skipped = copy_dir_recursive(&selection.path, &dest, &CopyOptions::exclude_git())
        .map_err(|e| write_failed(&dest, e))?;
    for link in &skipped {
        tracing::warn!(link = %link.display(), "symbolic link in skill not copied");
        prompter.warn(&format!("Skipped symbolic link {}", link.display()));
    }
    tracing::info!(dest = %dest.display(), "skill copied");
    Ok(dest)
}

/// Copy into the shared store
pub fn copy_to_store(
    selection: &SkillSelection,
    ctx: &RunContext,
    prompter: &mut dyn Prompter,
) -> Result<PathBuf> {
    copy_skill(selection, &ctx.paths.shared_store, ctx, prompter)
}

/// Copy into each target directory, one physical copy per tool.
///
/// A target whose directory links into the shared store is refused, since
/// copying there would write into the store. Failures are isolated per target.
pub fn copy_legacy(
    selection: &SkillSelection,
    targets: &[InstallTarget],
    ctx: &RunContext,
    prompter: &mut dyn Prompter,
) -> Result<Vec<(InstallTarget, Option<PathBuf>)>> {
    let mut copied = Vec::with_capacity(targets.len());
    for &target in targets {
        let target_dir = ctx.paths.target_dir(target);
        if LinkState::classify(&target_dir, &ctx.paths.shared_store) == LinkState::Mapped {
            tracing::warn!(target = target.id(), "target links to shared store, legacy copy refused");
            prompter.warn(&format!(
                "{} links to the shared store; skipping legacy copy for {}",
                target_dir.display(),
                target.display_name()
            ));
            copied.push((target, None));
            continue;
        }

        match copy_skill(selection, &target_dir, ctx, prompter) {
            Ok(dest) => copied.push((target, Some(dest))),
            Err(err @ (SkillError::Cancelled { .. } | SkillError::EmptyRenameTarget)) => {
                return Err(err);
            }
            Err(err) => {
                tracing::error!(target = target.id(), error = %err, "legacy copy failed");
                prompter.warn(&format!("Failed to copy for {}: {err}", target.display_name()));
                copied.push((target, None));
            }
        }
    }
    Ok(copied)
}
