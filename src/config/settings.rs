//! Optional user settings (`~/.skillget/config.yaml`)
//!
//! ```yaml
//! shared_store: .agents/skills
//! default_targets: [claude, codex]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkillError, fs::read_failed};
use crate::platform::InstallTarget;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Shared store location, relative to home or absolute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_store: Option<PathBuf>,

    /// Targets preselected in the target prompt
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub default_targets: Vec<String>,
}

impl Settings {
    /// Load settings, returning defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| read_failed(path, e))?;
        Self::from_yaml(&content).map_err(|e| match e {
            SkillError::ConfigParseFailed { reason, .. } => SkillError::ConfigParseFailed {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    /// Parse settings from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| SkillError::ConfigParseFailed {
            path: "config.yaml".to_string(),
            reason: e.to_string(),
        })
    }

    /// Validated default targets
    pub fn targets(&self) -> Result<Vec<InstallTarget>> {
        let mut targets = Vec::new();
        for id in &self.default_targets {
            let target = InstallTarget::from_id(id).map_err(|_| SkillError::ConfigInvalid {
                message: format!("unknown target '{id}' in default_targets"),
            })?;
            if !targets.contains(&target) {
                targets.push(target);
            }
        }
        Ok(targets)
    }
}
