//! Uninstall operation
//!
//! Scans for installed skills, lets the operator pick any number of them,
//! asks once for confirmation and removes each pick independently.

pub mod scanner;

use crate::common::fs::{is_link, remove_path};
use crate::config::RunContext;
use crate::error::{Result, SkillError, fs::write_failed};
use crate::ui::Prompter;

pub use scanner::{UninstallCandidate, scan};

/// Counts reported after an uninstall run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UninstallSummary {
    pub removed: usize,
    pub failed: usize,
}

/// High-level uninstall operation
pub struct UninstallOperation<'a> {
    ctx: &'a RunContext,
    prompter: &'a mut dyn Prompter,
}

impl<'a> UninstallOperation<'a> {
    pub fn new(ctx: &'a RunContext, prompter: &'a mut dyn Prompter) -> Self {
        Self { ctx, prompter }
    }

    pub fn execute(&mut self) -> Result<UninstallSummary> {
        let candidates = scan(self.ctx);
        if candidates.is_empty() {
            self.prompter.say("No installed skills found.");
            return Ok(UninstallSummary::default());
        }

        let labels: Vec<String> = candidates.iter().map(UninstallCandidate::label).collect();
        let picked = self
            .prompter
            .multi_select("Select skills to uninstall", &labels, &[])?;
        if picked.is_empty() {
            self.prompter.say("Nothing selected. No changes were made.");
            return Ok(UninstallSummary::default());
        }

        let selected: Vec<&UninstallCandidate> =
            picked.iter().filter_map(|i| candidates.get(*i)).collect();

        self.prompter.say("\nThe following skill(s) will be removed:");
        for candidate in &selected {
            self.prompter.say(&format!("  - {}", candidate.label()));
        }
        if !self.prompter.confirm("Proceed with uninstall?", false)? {
            return Err(SkillError::cancelled("uninstall declined"));
        }

        let mut summary = UninstallSummary::default();
        for candidate in selected {
            match self.remove(candidate) {
                Ok(()) => summary.removed += 1,
                Err(err) => {
                    tracing::error!(skill = %candidate.name, error = %err, "uninstall failed");
                    self.prompter
                        .warn(&format!("Failed to remove {}: {err}", candidate.name));
                    summary.failed += 1;
                }
            }
        }

        tracing::info!(removed = summary.removed, failed = summary.failed, "uninstall finished");
        Ok(summary)
    }

    /// Remove per-tool links to the skill, then its content.
    ///
    /// Content outside every scanned root is only unlinked, never deleted.
    fn remove(&mut self, candidate: &UninstallCandidate) -> Result<()> {
        for path in candidate.paths.iter().filter(|p| is_link(p)) {
            self.prompter
                .say(&self.ctx.announce(&format!("remove link {}", path.display())));
            if !self.ctx.dry_run {
                remove_path(path).map_err(|e| write_failed(path, e))?;
            }
        }

        let target = &candidate.canonical;
        if !candidate.contained {
            tracing::info!(path = %target.display(), "link target outside skills directories kept");
            self.prompter
                .say(&format!("Keeping {} (outside skills directories)", target.display()));
            return Ok(());
        }
        self.prompter
            .say(&self.ctx.announce(&format!("remove {}", target.display())));
        if !self.ctx.dry_run {
            remove_path(target).map_err(|e| write_failed(target, e))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::InstallTarget;
    use crate::test_fixtures::{ScriptedPrompter, create_temp_dir, test_context, write_skill};
    use std::fs;

    #[test]
    fn test_no_candidates_is_clean_exit() {
        let temp = create_temp_dir();
        let ctx = test_context(temp.path());
        let mut prompter = ScriptedPrompter::new();
        let summary = UninstallOperation::new(&ctx, &mut prompter).execute().unwrap();
        assert_eq!(summary, UninstallSummary::default());
        assert_eq!(prompter.output(), ["No installed skills found."]);
    }

    #[test]
    fn test_empty_selection_changes_nothing() {
        let temp = create_temp_dir();
        let ctx = test_context(temp.path());
        let skill = ctx.paths.target_dir(InstallTarget::Claude).join("pdf");
        write_skill(&skill, "pdf");

        let mut prompter = ScriptedPrompter::new().selects(&[]);
        let summary = UninstallOperation::new(&ctx, &mut prompter).execute().unwrap();
        assert_eq!(summary.removed, 0);
        assert!(skill.is_dir());
    }

    #[test]
    fn test_decline_aborts_without_mutation() {
        let temp = create_temp_dir();
        let ctx = test_context(temp.path());
        let skill = ctx.paths.target_dir(InstallTarget::Claude).join("pdf");
        write_skill(&skill, "pdf");

        let mut prompter = ScriptedPrompter::new().selects(&[0]).confirms(false);
        let err = UninstallOperation::new(&ctx, &mut prompter)
            .execute()
            .unwrap_err();
        assert!(matches!(err, SkillError::Cancelled { .. }));
        assert!(skill.is_dir());
    }

    #[test]
    fn test_removes_selected_only() {
        let temp = create_temp_dir();
        let ctx = test_context(temp.path());
        let claude = ctx.paths.target_dir(InstallTarget::Claude);
        write_skill(&claude.join("docx"), "docx");
        write_skill(&claude.join("pdf"), "pdf");

        let mut prompter = ScriptedPrompter::new().selects(&[1]).confirms(true);
        let summary = UninstallOperation::new(&ctx, &mut prompter).execute().unwrap();
        assert_eq!(summary, UninstallSummary { removed: 1, failed: 0 });
        assert!(claude.join("docx").is_dir());
        assert!(!claude.join("pdf").exists());
    }

    #[test]
    fn test_dry_run_removes_nothing() {
        let temp = create_temp_dir();
        let ctx = test_context(temp.path()).with_dry_run(true);
        let skill = ctx.paths.shared_store.join("pdf");
        write_skill(&skill, "pdf");

        let mut prompter = ScriptedPrompter::new().selects(&[0]).confirms(true);
        let summary = UninstallOperation::new(&ctx, &mut prompter).execute().unwrap();
        assert_eq!(summary.removed, 1);
        assert!(skill.join("SKILL.md").is_file());
        assert!(
            prompter
                .output()
                .iter()
                .any(|l| l.starts_with("[DRY RUN] Would remove"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_per_skill_links_removed_with_content() {
        let temp = create_temp_dir();
        let ctx = test_context(temp.path());
        let stored = ctx.paths.shared_store.join("pdf");
        write_skill(&stored, "pdf");
        let cursor = ctx.paths.target_dir(InstallTarget::Cursor);
        fs::create_dir_all(&cursor).unwrap();
        crate::common::fs::create_dir_link(&stored, &cursor.join("pdf")).unwrap();

        let mut prompter = ScriptedPrompter::new().selects(&[0]).confirms(true);
        let summary = UninstallOperation::new(&ctx, &mut prompter).execute().unwrap();
        assert_eq!(summary.removed, 1);
        assert!(!stored.exists());
        assert!(fs::symlink_metadata(cursor.join("pdf")).is_err());
        assert!(cursor.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_link_to_outside_project_only_unlinked() {
        let temp = create_temp_dir();
        let ctx = test_context(&temp.path().join("home"));
        let project = temp.path().join("projects/my-skill");
        write_skill(&project, "my-skill");
        let claude = ctx.paths.target_dir(InstallTarget::Claude);
        fs::create_dir_all(&claude).unwrap();
        let link = claude.join("my-skill");
        crate::common::fs::create_dir_link(&project, &link).unwrap();

        let mut prompter = ScriptedPrompter::new().selects(&[0]).confirms(true);
        let summary = UninstallOperation::new(&ctx, &mut prompter).execute().unwrap();

        assert_eq!(summary, UninstallSummary { removed: 1, failed: 0 });
        assert!(fs::symlink_metadata(&link).is_err());
        assert!(project.join("SKILL.md").is_file());
        assert!(prompter.output().iter().any(|l| l.starts_with("Keeping")));
    }
}
