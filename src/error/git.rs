//! Git operation errors

use super::SkillError;

pub fn command_failed(args: &[&str], reason: impl Into<String>) -> SkillError {
    SkillError::GitCommandFailed {
        command: args.join(" "),
        reason: reason.into(),
    }
}

pub fn fetch_failed(url: impl Into<String>, reason: impl Into<String>) -> SkillError {
    SkillError::FetchFailed {
        url: url.into(),
        reason: reason.into(),
    }
}
