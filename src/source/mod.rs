//! Skill source handling
//!
//! This module turns a user-supplied GitHub location into fetch coordinates
//! and materializes the needed part of the repository:
//! - Shorthand: `owner/repo`, `owner/repo/path/to/skill`
//! - GitHub web UI URLs: `https://github.com/owner/repo/tree/<ref>/<path>`
//! - Clone URLs: `https://github.com/owner/repo.git`, `git@github.com:owner/repo.git`
//!
//! ## Module Organization
//!
//! - `location.rs`: `GithubLocation` parsing and default-branch resolution
//! - `fetch.rs`: sparse/full fetch strategies into a scratch directory

pub mod fetch;
pub mod location;

pub use fetch::{FetchResult, FetchStrategy, RepositoryFetcher};
pub use location::{GithubLocation, ParsedLocation};
