//! Git operations for fetching skills
//!
//! This module handles:
//! - Running the native `git` executable (the only supported backend, since
//!   cone-mode sparse checkout and blob-filtered clones are CLI features)
//! - Probing the installed git version for sparse-checkout support
//! - Resolving a remote's default branch via `git ls-remote --symref`
//!
//! Authentication is delegated entirely to git's native system:
//! - SSH keys from ~/.ssh/
//! - Git credential helpers
//! - Environment variables (GIT_SSH_COMMAND, etc.)

pub mod refs;
pub mod runner;
pub mod version;

pub use refs::default_branch;
pub use runner::{GitOutput, GitRunner, SystemGit};
pub use version::GitVersion;
