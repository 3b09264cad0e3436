//! Run configuration
//!
//! This module contains:
//! - `Paths` - per-user filesystem layout (home, shared store, logs)
//! - `Settings` - optional `~/.skillget/config.yaml`
//! - `RunContext` - everything a run needs, passed explicitly to components

pub mod paths;
pub mod settings;

pub use paths::Paths;
pub use settings::Settings;

use crate::error::Result;
use crate::platform::InstallTarget;

/// Per-invocation configuration shared by every component
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Report mutations instead of performing them
    pub dry_run: bool,
    /// This process was relaunched with elevated privileges
    pub elevated: bool,
    pub paths: Paths,
    /// Targets preselected when prompting
    pub default_targets: Vec<InstallTarget>,
    /// Original command-line arguments (without the program name)
    pub args: Vec<String>,
}

impl RunContext {
    /// Build from environment and settings file
    pub fn load(dry_run: bool, elevated: bool, args: Vec<String>) -> Result<Self> {
        let paths = Paths::from_env()?;
        let settings = Settings::load(&paths.config_file)?;
        let default_targets = settings.targets()?;
        let paths = paths.with_shared_store(settings.shared_store.as_deref());
        Ok(Self {
            dry_run,
            elevated,
            paths,
            default_targets,
            args,
        })
    }

    pub fn new(paths: Paths) -> Self {
        Self {
            dry_run: false,
            elevated: false,
            paths,
            default_targets: Vec::new(),
            args: Vec::new(),
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Log a planned mutation and return the console line for it.
    ///
    /// Dry runs and real runs emit the same log record; only the console
    /// wording and the `dry_run` field differ.
    pub fn announce(&self, action: &str) -> String {
        tracing::info!(dry_run = self.dry_run, "{action}");
        if self.dry_run {
            format!("[DRY RUN] Would {action}")
        } else {
            capitalize(action)
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
