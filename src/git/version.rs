//! Git version detection
//!
//! Cone-mode sparse checkout is only used when the installed git reports at
//! least 2.25.

use super::GitRunner;
use crate::error::Result;

/// Oldest git release with `sparse-checkout init --cone`
const SPARSE_CHECKOUT_MIN: (u32, u32) = (2, 25);

/// Major and minor version of the installed git
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GitVersion {
    pub major: u32,
    pub minor: u32,
}

impl GitVersion {
    /// Parse `git --version` output, e.g. `git version 2.39.2 (Apple Git-143)`
    /// or `git version 2.45.1.windows.1`.
    pub fn parse(output: &str) -> Option<Self> {
        let version = output
            .split_whitespace()
            .find(|word| word.chars().next().is_some_and(|c| c.is_ascii_digit()))?;
        let mut parts = version.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts
            .next()
            .map(|m| {
                m.chars()
                    .take_while(char::is_ascii_digit)
                    .collect::<String>()
            })
            .and_then(|m| m.parse().ok())
            .unwrap_or(0);
        Some(Self { major, minor })
    }

    pub fn supports_sparse_checkout(&self) -> bool {
        (self.major, self.minor) >= SPARSE_CHECKOUT_MIN
    }
}

impl std::fmt::Display for GitVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Check that git is runnable and report its version.
///
/// A missing executable is fatal. Output that cannot be parsed yields
/// `Ok(None)`, which only disables the sparse strategy.
pub fn detect(git: &dyn GitRunner) -> Result<Option<GitVersion>> {
    let output = git.run(&["--version"], None)?;
    let version = GitVersion::parse(&output.stdout);
    match version {
        Some(v) => tracing::info!(version = %v, "detected git"),
        None => tracing::warn!(output = %output.stdout.trim(), "could not parse git version"),
    }
    Ok(version)
}
