//! Target mapping
//!
//! Each tool's skills directory is exposed as a directory link to the shared
//! store. A target is classified by [`LinkState`] and only `Unmapped` targets
//! are linked without asking; replacing anything else needs confirmation.

use std::fs;
use std::path::Path;

use crate::common::fs::{create_dir_link, is_link, remove_path, resolve_link};
use crate::config::RunContext;
use crate::error::{
    Result, SkillError,
    fs::{link_failed, write_failed},
};
use crate::platform::{InstallTarget, Platform};
use crate::ui::Prompter;

/// How a target directory relates to the shared store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    /// Nothing exists at the target path
    Unmapped,
    /// A link resolving to the shared store
    Mapped,
    /// A real directory or file, or a link to somewhere else
    Conflicting,
}

impl LinkState {
    pub fn classify(target_dir: &Path, store: &Path) -> Self {
        if fs::symlink_metadata(target_dir).is_err() {
            return LinkState::Unmapped;
        }
        if is_link(target_dir) && links_to(target_dir, store) {
            LinkState::Mapped
        } else {
            LinkState::Conflicting
        }
    }
}

/// Whether the link at `link` points at `store`.
///
/// Both sides are canonicalized when they exist; a dangling link is compared
/// lexically so a link created before the store is still recognized.
fn links_to(link: &Path, store: &Path) -> bool {
    if let (Some(resolved), Ok(store)) = (resolve_link(link), dunce::canonicalize(store)) {
        return resolved == store;
    }
    let Ok(raw) = fs::read_link(link) else {
        return false;
    };
    let absolute = match link.parent() {
        Some(parent) if raw.is_relative() => parent.join(raw),
        _ => raw,
    };
    absolute == store
}

/// What happened to one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapOutcome {
    AlreadyMapped,
    Linked,
    /// Replacement declined by the operator
    Skipped,
    Failed(String),
}

/// Result of the capability check preceding link creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkCapability {
    /// Links can be created by this process
    Ready,
    /// An elevated copy of this program ran instead, with this exit code
    Relaunched(i32),
}

/// Targets that still need a link (anything not `Mapped`)
pub fn pending_targets(targets: &[InstallTarget], ctx: &RunContext) -> Vec<InstallTarget> {
    targets
        .iter()
        .copied()
        .filter(|t| {
            LinkState::classify(&ctx.paths.target_dir(*t), &ctx.paths.shared_store)
                != LinkState::Mapped
        })
        .collect()
}

/// Make sure links can be created before any of them is attempted.
///
/// Skipped entirely for dry runs and when every target is already mapped.
/// An unprivileged process relaunches itself elevated; an elevated one that
/// still cannot link fails with guidance.
pub fn ensure_link_capability(
    platform: &dyn Platform,
    targets: &[InstallTarget],
    ctx: &RunContext,
    scratch: &Path,
) -> Result<LinkCapability> {
    if ctx.dry_run || pending_targets(targets, ctx).is_empty() {
        return Ok(LinkCapability::Ready);
    }

    if platform.can_create_symlink(scratch)? {
        tracing::debug!("symlink capability probe succeeded");
        return Ok(LinkCapability::Ready);
    }

    if ctx.elevated {
        tracing::error!("symlink creation denied in elevated process");
        return Err(SkillError::SymlinkPrivilegeRequired);
    }

    tracing::info!(args = ?ctx.args, "requesting elevated relaunch");
    let code = platform.request_elevated_relaunch(&ctx.args)?;
    tracing::info!(code, "elevated process finished");
    Ok(LinkCapability::Relaunched(code))
}

/// Links tool directories to the shared store
pub struct TargetMapper<'a> {
    ctx: &'a RunContext,
    prompter: &'a mut dyn Prompter,
}

impl<'a> TargetMapper<'a> {
    pub fn new(ctx: &'a RunContext, prompter: &'a mut dyn Prompter) -> Self {
        Self { ctx, prompter }
    }

    fn store(&self) -> &Path {
        &self.ctx.paths.shared_store
    }

    /// Map one target. Mapping an already mapped target touches nothing.
    pub fn map_target(&mut self, target: InstallTarget) -> Result<MapOutcome> {
        let target_dir = self.ctx.paths.target_dir(target);
        let state = LinkState::classify(&target_dir, self.store());
        tracing::debug!(target = target.id(), state = ?state, path = %target_dir.display(), "classified target");

        match state {
            LinkState::Mapped => {
                self.prompter.say(&format!(
                    "{} already links to {}",
                    target_dir.display(),
                    self.store().display()
                ));
                Ok(MapOutcome::AlreadyMapped)
            }
            LinkState::Conflicting => {
                let replace = self.prompter.confirm(
                    &format!(
                        "{} exists and is not a link to the shared store. Replace it with a link?",
                        target_dir.display()
                    ),
                    false,
                )?;
                if !replace {
                    tracing::warn!(target = target.id(), "replacement declined, skipping target");
                    self.prompter
                        .warn(&format!("Skipping {} ({})", target.display_name(), target_dir.display()));
                    return Ok(MapOutcome::Skipped);
                }
                self.prompter
                    .say(&self.ctx.announce(&format!("remove {}", target_dir.display())));
                if !self.ctx.dry_run {
                    remove_path(&target_dir).map_err(|e| write_failed(&target_dir, e))?;
                }
                self.link(&target_dir)
            }
            LinkState::Unmapped => self.link(&target_dir),
        }
    }

    fn link(&mut self, target_dir: &Path) -> Result<MapOutcome> {
        let store = self.store().to_path_buf();
        self.prompter.say(&self.ctx.announce(&format!(
            "link {} -> {}",
            target_dir.display(),
            store.display()
        )));
        if self.ctx.dry_run {
            return Ok(MapOutcome::Linked);
        }

        if let Some(parent) = target_dir.parent() {
            fs::create_dir_all(parent).map_err(|e| write_failed(parent, e))?;
        }
        fs::create_dir_all(&store).map_err(|e| write_failed(&store, e))?;
        create_dir_link(&store, target_dir).map_err(|e| link_failed(target_dir, e))?;
        Ok(MapOutcome::Linked)
    }

    /// Map every target; a failing target is reported and the rest continue.
    ///
    /// Only cancellation stops the loop.
    pub fn map_all(&mut self, targets: &[InstallTarget]) -> Result<Vec<(InstallTarget, MapOutcome)>> {
        let mut outcomes = Vec::with_capacity(targets.len());
        for &target in targets {
            let outcome = match self.map_target(target) {
                Ok(outcome) => outcome,
                Err(err @ SkillError::Cancelled { .. }) => return Err(err),
                Err(err) => {
                    tracing::error!(target = target.id(), error = %err, "mapping failed");
                    self.prompter
                        .warn(&format!("Failed to map {}: {err}", target.display_name()));
                    MapOutcome::Failed(err.to_string())
                }
            };
            outcomes.push((target, outcome));
        }
        Ok(outcomes)
    }
}
