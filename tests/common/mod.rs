//! Common test utilities for skillget integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// An isolated home directory for one test run of the real binary
pub struct TestHome {
    pub temp: TempDir,
}

#[allow(dead_code)]
impl TestHome {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn join(&self, rel: &str) -> PathBuf {
        self.temp.path().join(rel)
    }

    /// The skillget binary with `SKILLGET_HOME` pointing here
    pub fn cmd(&self) -> Command {
        let mut cmd = skillget_cmd();
        cmd.env("SKILLGET_HOME", self.path())
            .env_remove("SKILLGET_GIT")
            .env_remove("SKILLGET_LOG");
        cmd
    }

    /// Write a file, creating parent directories
    pub fn write_file(&self, rel: &str, content: &str) {
        let path = self.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    pub fn mkdir(&self, rel: &str) {
        std::fs::create_dir_all(self.join(rel)).expect("Failed to create directory");
    }

    /// A skill directory with a SKILL.md
    pub fn write_skill(&self, rel: &str) {
        let name = rel.rsplit('/').next().unwrap_or(rel);
        self.write_file(
            &format!("{rel}/SKILL.md"),
            &format!("---\nname: {name}\ndescription: test\n---\n"),
        );
    }

    /// Log files currently retained
    pub fn log_files(&self) -> Vec<PathBuf> {
        let dir = self.join(".skillget/logs");
        let Ok(entries) = std::fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut logs: Vec<PathBuf> = entries
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "log"))
            .collect();
        logs.sort();
        logs
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn skillget_cmd() -> Command {
    Command::cargo_bin("skillget").expect("skillget binary should be built")
}
