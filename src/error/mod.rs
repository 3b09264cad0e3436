//! Error types and handling for skillget
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`source`]: Location string errors
//! - [`git`]: Git tooling and fetch errors
//! - [`fs`]: File system and link errors

pub mod fs;
pub mod git;
pub mod source;


use miette::Diagnostic;
use thiserror::Error;

/// Exit code for malformed or missing user input
pub const EXIT_INPUT: i32 = 2;

/// Exit code for operator cancellation (quit, declined confirmation)
pub const EXIT_CANCELLED: i32 = 130;

/// Exit code for every other fatal condition
pub const EXIT_FAILURE: i32 = 1;

/// Main error type for skillget operations
#[derive(Error, Diagnostic, Debug)]
pub enum SkillError {
    // Input errors
    #[error("Invalid location '{input}': {reason}")]
    #[diagnostic(
        code(skillget::source::invalid_location),
        help(
            "Valid formats: owner/repo, owner/repo/path/to/skill, https://github.com/owner/repo/tree/<ref>/<path>"
        )
    )]
    InvalidLocation { input: String, reason: String },

    #[error("Unsupported host '{host}'")]
    #[diagnostic(
        code(skillget::source::unsupported_host),
        help("Only github.com repositories are supported")
    )]
    UnsupportedHost { host: String },

    #[error("Missing required argument: LOCATION")]
    #[diagnostic(
        code(skillget::cli::missing_location),
        help("Pass a GitHub location, e.g. 'skillget owner/repo/tree/main/skills/foo'")
    )]
    MissingLocation,

    #[error("Rename target must not be empty")]
    #[diagnostic(code(skillget::conflict::empty_name))]
    EmptyRenameTarget,

    #[error("Unknown install target: {id}")]
    #[diagnostic(
        code(skillget::target::unknown),
        help("Supported targets: claude, codex, gemini, copilot, cursor, opencode")
    )]
    UnknownTarget { id: String },

    // Git errors
    #[error("Git executable '{program}' is not available: {reason}")]
    #[diagnostic(
        code(skillget::git::not_found),
        help("Install git and make sure it is on PATH, or set SKILLGET_GIT")
    )]
    GitNotFound { program: String, reason: String },

    #[error("Git command failed: git {command}: {reason}")]
    #[diagnostic(code(skillget::git::command_failed))]
    GitCommandFailed { command: String, reason: String },

    #[error("Failed to fetch repository: {url}: {reason}")]
    #[diagnostic(
        code(skillget::git::fetch_failed),
        help("Check that the repository and ref exist and that you have access to them")
    )]
    FetchFailed { url: String, reason: String },

    // File system errors
    #[error("Not a directory: {path}")]
    #[diagnostic(code(skillget::fs::not_a_directory))]
    NotADirectory { path: String },

    #[error("Failed to read: {path}: {reason}")]
    #[diagnostic(code(skillget::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write: {path}: {reason}")]
    #[diagnostic(code(skillget::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(skillget::fs::io_error))]
    IoError { message: String },

    #[error("Could not determine the home directory")]
    #[diagnostic(
        code(skillget::fs::no_home),
        help("Set SKILLGET_HOME to the directory that should hold tool configuration")
    )]
    HomeDirNotFound,

    // Link errors
    #[error("Failed to link {path}: {reason}")]
    #[diagnostic(code(skillget::link::failed))]
    LinkFailed { path: String, reason: String },

    #[error("Symbolic links cannot be created even with elevated privileges")]
    #[diagnostic(
        code(skillget::link::privilege_required),
        help(
            "Enable Developer Mode (Settings > For developers) or run skillget from an administrator terminal"
        )
    )]
    SymlinkPrivilegeRequired,

    #[error("Failed to relaunch with elevated privileges: {reason}")]
    #[diagnostic(code(skillget::link::elevation_failed))]
    ElevationFailed { reason: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(skillget::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(skillget::config::invalid))]
    ConfigInvalid { message: String },

    // Interaction
    #[error("Prompt failed: {message}")]
    #[diagnostic(code(skillget::prompt::failed))]
    PromptFailed { message: String },

    #[error("Cancelled: {reason}")]
    #[diagnostic(code(skillget::cancelled))]
    Cancelled { reason: String },
}

impl SkillError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SkillError::InvalidLocation { .. }
            | SkillError::UnsupportedHost { .. }
            | SkillError::MissingLocation
            | SkillError::EmptyRenameTarget
            | SkillError::UnknownTarget { .. } => EXIT_INPUT,
            SkillError::Cancelled { .. } => EXIT_CANCELLED,
            _ => EXIT_FAILURE,
        }
    }

    /// Shorthand for a cancellation with the given reason
    pub fn cancelled(reason: impl Into<String>) -> Self {
        SkillError::Cancelled {
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for SkillError {
    fn from(err: std::io::Error) -> Self {
        SkillError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for SkillError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => {
                SkillError::cancelled("prompt closed by user")
            }
            other => SkillError::PromptFailed {
                message: other.to_string(),
            },
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SkillError>;
