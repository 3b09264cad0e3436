//! GitHub location parsing
//!
//! A location is parsed in two steps: [`ParsedLocation::parse`] is pure and
//! may leave the ref unresolved, [`ParsedLocation::resolve`] fills it in from
//! the remote's default branch.

use std::fmt;

use crate::error::{Result, SkillError, source::invalid_location};
use crate::git::{GitRunner, default_branch};

/// The only host skills can be fetched from
const GITHUB_HOST: &str = "github.com";

/// Marker segment in GitHub web UI URLs preceding the ref
const TREE_MARKER: &str = "tree";

/// A location string split into its components, ref possibly unresolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLocation {
    pub owner: String,
    pub repo: String,
    pub git_ref: Option<String>,
    pub subpath: String,
}

/// Fully resolved fetch coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubLocation {
    pub owner: String,
    pub repo: String,
    pub git_ref: String,
    /// Path inside the repository, empty for the repository root
    pub subpath: String,
}

impl ParsedLocation {
    /// Parse a raw location string without touching the network.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let rest = strip_host(trimmed)?;

        // Drop query strings and fragments copied along with browser URLs
        let rest = rest.split(['?', '#']).next().unwrap_or_default();
        let rest = rest.trim_end_matches('/');
        let rest = rest.strip_suffix(".git").unwrap_or(rest);

        let segments: Vec<&str> = rest
            .split('/')
            .filter(|s| !s.is_empty() && *s != ".")
            .collect();

        let owner = segments
            .first()
            .ok_or_else(|| invalid_location(input, "missing repository owner"))?;
        let repo = segments
            .get(1)
            .map(|r| r.strip_suffix(".git").unwrap_or(*r))
            .filter(|r| !r.is_empty())
            .ok_or_else(|| invalid_location(input, "missing repository name"))?;

        let remaining = &segments[2..];
        if remaining.contains(&"..") {
            return Err(invalid_location(input, "path must not contain '..'"));
        }

        let (git_ref, subpath) = match remaining.iter().position(|s| *s == TREE_MARKER) {
            Some(idx) => {
                let git_ref = remaining
                    .get(idx + 1)
                    .ok_or_else(|| invalid_location(input, "missing ref after 'tree'"))?;
                (Some((*git_ref).to_string()), remaining[idx + 2..].join("/"))
            }
            None => (None, remaining.join("/")),
        };

        Ok(Self {
            owner: (*owner).to_string(),
            repo: repo.to_string(),
            git_ref,
            subpath,
        })
    }

    /// Fill in a missing ref with the remote's default branch (blocking).
    pub fn resolve(self, git: &dyn GitRunner) -> GithubLocation {
        let git_ref = match self.git_ref {
            Some(r) => r,
            None => default_branch(git, &clone_url(&self.owner, &self.repo)),
        };
        GithubLocation {
            owner: self.owner,
            repo: self.repo,
            git_ref,
            subpath: self.subpath,
        }
    }
}

impl GithubLocation {
    /// Parse and resolve in one step
    pub fn from_input(input: &str, git: &dyn GitRunner) -> Result<Self> {
        let location = ParsedLocation::parse(input)?.resolve(git);
        tracing::info!(
            owner = %location.owner,
            repo = %location.repo,
            git_ref = %location.git_ref,
            subpath = %location.subpath,
            "resolved location"
        );
        Ok(location)
    }

    pub fn clone_url(&self) -> String {
        clone_url(&self.owner, &self.repo)
    }

    pub fn has_subpath(&self) -> bool {
        !self.subpath.is_empty()
    }
}

/// Normalized form, which parses back to the same coordinates
impl fmt::Display for GithubLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/tree/{}", self.owner, self.repo, self.git_ref)?;
        if self.has_subpath() {
            write!(f, "/{}", self.subpath)?;
        }
        Ok(())
    }
}

fn clone_url(owner: &str, repo: &str) -> String {
    format!("https://{GITHUB_HOST}/{owner}/{repo}.git")
}

/// Strip scheme and host, rejecting hosts other than GitHub
fn strip_host(input: &str) -> Result<&str> {
    if let Some(rest) = input.strip_prefix("git@") {
        let (host, path) = rest
            .split_once(':')
            .ok_or_else(|| invalid_location(input, "malformed SSH location"))?;
        return check_host(host).map(|()| path);
    }

    if let Some(rest) = input.strip_prefix("github:") {
        return Ok(rest);
    }

    if let Some((_, after_scheme)) = input.split_once("://") {
        let (authority, path) = after_scheme.split_once('/').unwrap_or((after_scheme, ""));
        let host = authority.rsplit('@').next().unwrap_or(authority);
        return check_host(host).map(|()| path);
    }

    for prefix in ["github.com/", "www.github.com/"] {
        if let Some(rest) = input.strip_prefix(prefix) {
            return Ok(rest);
        }
    }

    Ok(input)
}

fn check_host(host: &str) -> Result<()> {
    let host = host.to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    if host == GITHUB_HOST {
        Ok(())
    } else {
        Err(SkillError::UnsupportedHost {
            host: host.to_string(),
        })
    }
}
