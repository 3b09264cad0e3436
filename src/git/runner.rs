//! Process-level access to the git executable
//!
//! Every git invocation goes through [`GitRunner`] so fetch strategies can be
//! exercised against a recording fake in tests.

use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

use crate::error::{Result, SkillError, git::command_failed};

/// Default executable name, overridable with `SKILLGET_GIT`
const DEFAULT_PROGRAM: &str = "git";

/// Captured result of one git invocation
#[derive(Debug, Clone, Default)]
pub struct GitOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    /// Turn an unsuccessful invocation into an error carrying stderr
    pub fn into_checked(self, args: &[&str]) -> Result<String> {
        if self.success {
            Ok(self.stdout)
        } else {
            Err(command_failed(args, self.stderr.trim()))
        }
    }
}

/// Runs git subcommands, blocking until the process exits
pub trait GitRunner {
    /// Run `git <args>` in `cwd` (or the current directory).
    ///
    /// Returns `Err` only when the process could not be spawned; a non-zero
    /// exit is reported through [`GitOutput::success`].
    fn run(&self, args: &[&str], cwd: Option<&Path>) -> Result<GitOutput>;

    /// Run and fail on non-zero exit
    fn run_checked(&self, args: &[&str], cwd: Option<&Path>) -> Result<String> {
        self.run(args, cwd)?.into_checked(args)
    }
}

/// The system git executable
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: String,
}

impl SystemGit {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Uses `SKILLGET_GIT` when set, `git` from PATH otherwise
    pub fn from_env() -> Self {
        Self::new(std::env::var("SKILLGET_GIT").unwrap_or_else(|_| DEFAULT_PROGRAM.to_string()))
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl GitRunner for SystemGit {
    fn run(&self, args: &[&str], cwd: Option<&Path>) -> Result<GitOutput> {
        let mut command = Command::new(&self.program);
        command.args(args).env("GIT_TERMINAL_PROMPT", "0");
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        tracing::debug!(program = %self.program, args = %args.join(" "), "running git");

        let output = command.output().map_err(|e| match e.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => SkillError::GitNotFound {
                program: self.program.clone(),
                reason: e.to_string(),
            },
            _ => command_failed(args, e.to_string()),
        })?;

        Ok(GitOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_git_not_found() {
        let git = SystemGit::new("skillget-definitely-not-a-real-git-binary");
        let err = git.run(&["--version"], None).unwrap_err();
        assert!(matches!(err, SkillError::GitNotFound { .. }));
    }

    #[test]
    fn test_into_checked_reports_stderr() {
        let output = GitOutput {
            success: false,
            stdout: String::new(),
            stderr: "fatal: repository not found\n".to_string(),
        };
        let err = output.into_checked(&["clone", "x"]).unwrap_err();
        assert!(err.to_string().contains("fatal: repository not found"));
        assert!(err.to_string().contains("git clone x"));
    }

    #[test]
    fn test_into_checked_returns_stdout() {
        let output = GitOutput {
            success: true,
            stdout: "ok".to_string(),
            stderr: String::new(),
        };
        assert_eq!(output.into_checked(&["status"]).unwrap(), "ok");
    }
}
