//! Per-user filesystem layout
//!
//! Every location derives from one home directory, which defaults to the OS
//! home and can be overridden with the `SKILLGET_HOME` environment variable.

use std::path::{Path, PathBuf};

use crate::error::{Result, SkillError};
use crate::platform::InstallTarget;

/// Environment variable overriding the home directory
pub const HOME_ENV: &str = "SKILLGET_HOME";

/// Application directory under home
const APP_DIR: &str = ".skillget";

/// Log subdirectory of the application directory
const LOG_DIR: &str = "logs";

/// Settings file inside the application directory
const CONFIG_FILE: &str = "config.yaml";

/// Default shared skill store, relative to home
pub const DEFAULT_SHARED_STORE: &str = ".agents/skills";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub home: PathBuf,
    /// Canonical shared skills root; tool directories link here
    pub shared_store: PathBuf,
    pub log_dir: PathBuf,
    pub config_file: PathBuf,
}

impl Paths {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        let app_dir = home.join(APP_DIR);
        Self {
            shared_store: home.join(DEFAULT_SHARED_STORE),
            log_dir: app_dir.join(LOG_DIR),
            config_file: app_dir.join(CONFIG_FILE),
            home,
        }
    }

    /// Resolve home from `SKILLGET_HOME` or the OS
    pub fn from_env() -> Result<Self> {
        if let Ok(home) = std::env::var(HOME_ENV) {
            if !home.is_empty() {
                return Ok(Self::new(home));
            }
        }
        let home = dirs::home_dir().ok_or(SkillError::HomeDirNotFound)?;
        Ok(Self::new(home))
    }

    /// Replace the shared store; relative paths are taken from home
    pub fn with_shared_store(mut self, store: Option<&Path>) -> Self {
        if let Some(store) = store {
            self.shared_store = if store.is_absolute() {
                store.to_path_buf()
            } else {
                self.home.join(store)
            };
        }
        self
    }

    pub fn target_dir(&self, target: InstallTarget) -> PathBuf {
        target.skills_dir(&self.home)
    }
}
