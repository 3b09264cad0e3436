//! File system errors

use std::path::Path;

use super::SkillError;

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> SkillError {
    SkillError::IoError {
        message: message.into(),
    }
}

pub fn read_failed(path: &Path, err: impl std::fmt::Display) -> SkillError {
    SkillError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

pub fn write_failed(path: &Path, err: impl std::fmt::Display) -> SkillError {
    SkillError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

pub fn link_failed(path: &Path, err: impl std::fmt::Display) -> SkillError {
    SkillError::LinkFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
