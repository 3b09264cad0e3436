//! Supported tool integrations
//!
//! Each [`InstallTarget`] maps to a fixed skills directory under the user's
//! home directory. Detection is directory-only: a target counts as present
//! when its tool root (e.g. `~/.claude`) exists.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Result, SkillError};

/// A supported AI coding tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, clap::ValueEnum)]
pub enum InstallTarget {
    #[value(alias = "claude-code")]
    Claude,
    Codex,
    #[value(alias = "gemini-cli")]
    Gemini,
    #[value(alias = "github-copilot")]
    Copilot,
    Cursor,
    #[value(name = "opencode")]
    OpenCode,
}

impl InstallTarget {
    /// Every target, in display order
    pub const ALL: [InstallTarget; 6] = [
        InstallTarget::Claude,
        InstallTarget::Codex,
        InstallTarget::Gemini,
        InstallTarget::Copilot,
        InstallTarget::Cursor,
        InstallTarget::OpenCode,
    ];

    /// Identifier used on the command line and in config.yaml
    pub fn id(self) -> &'static str {
        match self {
            InstallTarget::Claude => "claude",
            InstallTarget::Codex => "codex",
            InstallTarget::Gemini => "gemini",
            InstallTarget::Copilot => "copilot",
            InstallTarget::Cursor => "cursor",
            InstallTarget::OpenCode => "opencode",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            InstallTarget::Claude => "Claude Code",
            InstallTarget::Codex => "OpenAI Codex",
            InstallTarget::Gemini => "Gemini CLI",
            InstallTarget::Copilot => "GitHub Copilot",
            InstallTarget::Cursor => "Cursor",
            InstallTarget::OpenCode => "OpenCode",
        }
    }

    /// Skills directory relative to home
    fn skills_dir_components(self) -> &'static [&'static str] {
        match self {
            InstallTarget::Claude => &[".claude", "skills"],
            InstallTarget::Codex => &[".codex", "skills"],
            InstallTarget::Gemini => &[".gemini", "skills"],
            InstallTarget::Copilot => &[".copilot", "skills"],
            InstallTarget::Cursor => &[".cursor", "skills"],
            InstallTarget::OpenCode => &[".config", "opencode", "skills"],
        }
    }

    /// Absolute skills directory for this target
    pub fn skills_dir(self, home: &Path) -> PathBuf {
        self.skills_dir_components()
            .iter()
            .fold(home.to_path_buf(), |acc, c| acc.join(c))
    }

    /// Tool configuration root, the parent of the skills directory
    pub fn tool_root(self, home: &Path) -> PathBuf {
        let dir = self.skills_dir(home);
        dir.parent().map_or_else(|| home.to_path_buf(), Path::to_path_buf)
    }

    /// Whether the tool appears to be installed for this user
    pub fn is_detected(self, home: &Path) -> bool {
        self.tool_root(home).is_dir()
    }

    /// Look up a target by id, accepting a few common aliases
    pub fn from_id(id: &str) -> Result<Self> {
        let normalized = id.trim().to_ascii_lowercase();
        let canonical = match normalized.as_str() {
            "claude-code" => "claude",
            "github-copilot" => "copilot",
            "gemini-cli" => "gemini",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|t| t.id() == canonical)
            .ok_or_else(|| SkillError::UnknownTarget { id: id.to_string() })
    }
}

impl fmt::Display for InstallTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Targets whose tool root exists under `home`
pub fn detect_all(home: &Path) -> Vec<InstallTarget> {
    InstallTarget::ALL
        .into_iter()
        .filter(|t| t.is_detected(home))
        .collect()
}
