//! Location parsing errors

use super::SkillError;

pub fn invalid_location(input: &str, reason: impl Into<String>) -> SkillError {
    SkillError::InvalidLocation {
        input: input.to_string(),
        reason: reason.into(),
    }
}
