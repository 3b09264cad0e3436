//! Repository fetching
//!
//! Two strategies materialize a repository into a scratch directory:
//! - [`FetchStrategy::Sparse`]: empty repo + cone-mode sparse checkout of the
//!   subpath + depth-1 pull. Only attempted for a non-empty subpath on git >= 2.25.
//! - [`FetchStrategy::Full`]: depth-1, blob-filtered, single-branch clone.
//!
//! A failed sparse attempt is wiped and followed by exactly one full clone.
//! A failed full clone is fatal.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{Result, fs::io_error, git::fetch_failed};
use crate::git::{GitRunner, GitVersion};
use crate::source::GithubLocation;
use crate::temp;

/// How the repository was materialized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStrategy {
    Sparse,
    Full,
}

/// A fetched repository inside a scratch directory.
///
/// The scratch directory is owned by this value and removed recursively when
/// it is dropped, on every exit path.
#[derive(Debug)]
pub struct FetchResult {
    scratch: TempDir,
    checkout: PathBuf,
    base_path: PathBuf,
    strategy: FetchStrategy,
}

impl FetchResult {
    /// Scratch directory holding the checkout
    pub fn tmp_root(&self) -> &Path {
        self.scratch.path()
    }

    /// Working tree of the fetched repository
    pub fn checkout(&self) -> &Path {
        &self.checkout
    }

    /// Checkout joined with the location's subpath; navigation starts here
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn strategy(&self) -> FetchStrategy {
        self.strategy
    }

    /// Remove the scratch directory now, reporting failures
    pub fn cleanup(self) -> Result<()> {
        let path = self.scratch.path().to_path_buf();
        self.scratch
            .close()
            .map_err(|e| io_error(format!("failed to remove {}: {e}", path.display())))
    }
}

/// Fetches repositories with the sparse-then-full policy
pub struct RepositoryFetcher<'a> {
    git: &'a dyn GitRunner,
    version: Option<GitVersion>,
}

impl<'a> RepositoryFetcher<'a> {
    pub fn new(git: &'a dyn GitRunner, version: Option<GitVersion>) -> Self {
        Self { git, version }
    }

    /// Fetch `location` into a new scratch directory
    pub fn fetch(&self, location: &GithubLocation) -> Result<FetchResult> {
        let scratch = temp::scratch_dir()
            .map_err(|e| io_error(format!("failed to create scratch directory: {e}")))?;
        self.fetch_into(location, scratch)
    }

    /// Fetch into an existing scratch directory, taking ownership of it
    pub fn fetch_into(&self, location: &GithubLocation, scratch: TempDir) -> Result<FetchResult> {
        let checkout = scratch.path().join(&location.repo);
        let strategy = if self.use_sparse(location) {
            match self.sparse_checkout(location, &checkout) {
                Ok(()) => FetchStrategy::Sparse,
                Err(e) => {
                    tracing::warn!(error = %e, "sparse checkout failed, falling back to full clone");
                    remove_partial_checkout(&checkout);
                    self.full_clone(location, scratch.path(), &checkout)?;
                    FetchStrategy::Full
                }
            }
        } else {
            self.full_clone(location, scratch.path(), &checkout)?;
            FetchStrategy::Full
        };

        let base_path = if location.has_subpath() {
            checkout.join(&location.subpath)
        } else {
            checkout.clone()
        };

        tracing::info!(
            strategy = ?strategy,
            base_path = %base_path.display(),
            "fetched repository"
        );

        Ok(FetchResult {
            scratch,
            checkout,
            base_path,
            strategy,
        })
    }

    fn use_sparse(&self, location: &GithubLocation) -> bool {
        location.has_subpath()
            && self
                .version
                .is_some_and(|v| v.supports_sparse_checkout())
    }

    fn sparse_checkout(&self, location: &GithubLocation, checkout: &Path) -> Result<()> {
        fs::create_dir_all(checkout).map_err(|e| {
            io_error(format!("failed to create {}: {e}", checkout.display()))
        })?;

        let url = location.clone_url();
        let steps: [&[&str]; 5] = [
            &["init"],
            &["remote", "add", "origin", url.as_str()],
            &["sparse-checkout", "init", "--cone"],
            &["sparse-checkout", "set", location.subpath.as_str()],
            &["pull", "--depth", "1", "origin", location.git_ref.as_str()],
        ];

        for args in steps {
            self.git.run_checked(args, Some(checkout))?;
        }
        Ok(())
    }

    fn full_clone(&self, location: &GithubLocation, scratch: &Path, checkout: &Path) -> Result<()> {
        let url = location.clone_url();
        let target = checkout.to_string_lossy();
        let args = [
            "clone",
            "--depth",
            "1",
            "--filter=blob:none",
            "--single-branch",
            "--branch",
            location.git_ref.as_str(),
            url.as_str(),
            target.as_ref(),
        ];
        self.git
            .run_checked(&args, Some(scratch))
            .map(|_| ())
            .map_err(|e| {
                tracing::error!(url = %url, error = %e, "full clone failed");
                fetch_failed(&url, e.to_string())
            })
    }
}

fn remove_partial_checkout(checkout: &Path) {
    match fs::remove_dir_all(checkout) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(
            path = %checkout.display(),
            error = %e,
            "failed to remove partial checkout"
        ),
    }
}
