//! Install operation
//!
//! Sequences one install run:
//! parse location → check git → resolve ref → fetch → navigate → preview →
//! select targets → confirm → copy → link.
//!
//! The scratch checkout is owned by the [`FetchResult`] held in
//! [`InstallOperation::execute`], so it is removed on every exit path.

pub mod targets;

use std::path::PathBuf;

use crate::config::RunContext;
use crate::error::{Result, SkillError};
use crate::git::{GitRunner, version};
use crate::installer::{
    LinkCapability, MapOutcome, TargetMapper, copy_legacy, copy_to_store, ensure_link_capability,
};
use crate::platform::{InstallTarget, Platform};
use crate::source::{FetchResult, GithubLocation, ParsedLocation, RepositoryFetcher};
use crate::ui::{Prompter, SkillPreview, Spinner, TreeNavigator};

pub use targets::select_targets;

/// What to install and how
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    pub location: String,
    /// Targets from the command line; empty means ask
    pub targets: Vec<InstallTarget>,
    /// Copy into every tool directory instead of linking to the shared store
    pub legacy: bool,
    /// Skip the final confirmation
    pub yes: bool,
    /// Show a spinner while git runs
    pub show_progress: bool,
}

/// How an install run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed {
        skill_name: String,
        /// Every place the skill is now reachable from
        locations: Vec<PathBuf>,
    },
    /// An elevated copy of this program performed the install
    Relaunched(i32),
}

/// High-level install operation
pub struct InstallOperation<'a> {
    ctx: &'a RunContext,
    git: &'a dyn GitRunner,
    platform: &'a dyn Platform,
    prompter: &'a mut dyn Prompter,
}

impl<'a> InstallOperation<'a> {
    pub fn new(
        ctx: &'a RunContext,
        git: &'a dyn GitRunner,
        platform: &'a dyn Platform,
        prompter: &'a mut dyn Prompter,
    ) -> Self {
        Self {
            ctx,
            git,
            platform,
            prompter,
        }
    }

    pub fn execute(&mut self, options: &InstallOptions) -> Result<InstallOutcome> {
        let parsed = ParsedLocation::parse(&options.location)?;

        // Fails with GitNotFound before any network or filesystem work
        let git_version = version::detect(self.git)?;

        let location = parsed.resolve(self.git);
        tracing::info!(location = %location, "installing");
        self.prompter.say(&format!("Fetching {location}"));

        let fetched = {
            let spinner = Spinner::start(
                &format!("Fetching {}/{}", location.owner, location.repo),
                options.show_progress,
            );
            let result = RepositoryFetcher::new(self.git, git_version).fetch(&location);
            spinner.finish();
            result?
        };

        let outcome = self.install_from(&fetched, &location, options);

        if let Err(e) = fetched.cleanup() {
            tracing::warn!(error = %e, "failed to remove scratch directory");
        }
        outcome
    }

    fn install_from(
        &mut self,
        fetched: &FetchResult,
        location: &GithubLocation,
        options: &InstallOptions,
    ) -> Result<InstallOutcome> {
        let selection = TreeNavigator::new(fetched.base_path(), &mut *self.prompter).navigate()?;
        tracing::info!(skill = %selection.skill_name, path = %selection.path.display(), "skill selected");

        SkillPreview::collect(&selection, location).render(&mut *self.prompter);
        if !options.legacy {
            self.prompter.say(&format!(
                "  destination {}",
                self.ctx.paths.shared_store.join(&selection.skill_name).display()
            ));
        }

        let targets = select_targets(&options.targets, self.ctx, &mut *self.prompter)?;
        if targets.is_empty() {
            if options.legacy {
                return Err(SkillError::cancelled("no targets selected"));
            }
            self.prompter
                .say("No tools selected; the skill will only be placed in the shared store.");
        }

        if !options.yes {
            let question = format!("Install {}?", selection.skill_name);
            if !self.prompter.confirm(&question, true)? {
                return Err(SkillError::cancelled("install declined"));
            }
        }

        if options.legacy {
            let copied = copy_legacy(&selection, &targets, self.ctx, &mut *self.prompter)?;
            return Ok(InstallOutcome::Installed {
                skill_name: selection.skill_name,
                locations: copied.into_iter().filter_map(|(_, dest)| dest).collect(),
            });
        }

        match ensure_link_capability(self.platform, &targets, self.ctx, fetched.tmp_root())? {
            LinkCapability::Ready => {}
            LinkCapability::Relaunched(code) => return Ok(InstallOutcome::Relaunched(code)),
        }

        let stored = copy_to_store(&selection, self.ctx, &mut *self.prompter)?;
        let installed_name = stored
            .file_name()
            .map_or_else(|| selection.skill_name.clone(), |n| n.to_string_lossy().into_owned());

        let outcomes = TargetMapper::new(self.ctx, &mut *self.prompter).map_all(&targets)?;
        let mut locations = vec![stored];
        locations.extend(
            outcomes
                .into_iter()
                .filter(|(_, outcome)| matches!(outcome, MapOutcome::Linked | MapOutcome::AlreadyMapped))
                .map(|(target, _)| self.ctx.paths.target_dir(target).join(&installed_name)),
        );

        Ok(InstallOutcome::Installed {
            skill_name: installed_name,
            locations,
        })
    }
}
