//! Git reference resolution
//!
//! This module handles:
//! - Resolving a remote's default branch with `git ls-remote --symref`
//!   without cloning

use super::GitRunner;

/// Branch used when the remote's HEAD cannot be queried
pub const FALLBACK_BRANCH: &str = "main";

/// Extract the branch name from `ls-remote --symref <url> HEAD` output.
///
/// The relevant line looks like `ref: refs/heads/main\tHEAD`.
pub fn parse_symref_head(stdout: &str) -> Option<String> {
    stdout.lines().find_map(|line| {
        let target = line.strip_prefix("ref:")?.split_whitespace().next()?;
        let branch = target.strip_prefix("refs/heads/")?;
        (!branch.is_empty()).then(|| branch.to_string())
    })
}

/// Query the remote's default branch, falling back to [`FALLBACK_BRANCH`]
/// on any failure (spawn error, non-zero exit, unexpected output).
pub fn default_branch(git: &dyn GitRunner, url: &str) -> String {
    let args = ["ls-remote", "--symref", url, "HEAD"];
    let branch = match git.run(&args, None) {
        Ok(output) if output.success => parse_symref_head(&output.stdout),
        Ok(output) => {
            tracing::warn!(url, stderr = %output.stderr.trim(), "ls-remote failed");
            None
        }
        Err(e) => {
            tracing::warn!(url, error = %e, "ls-remote could not run");
            None
        }
    };

    branch.unwrap_or_else(|| {
        tracing::info!(url, fallback = FALLBACK_BRANCH, "using fallback default branch");
        FALLBACK_BRANCH.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::FakeGit;

    #[test]
    fn test_parse_symref_head() {
        let out = "ref: refs/heads/develop\tHEAD\n3f786850e387550fdab836ed7e6dc881de23001b\tHEAD\n";
        assert_eq!(parse_symref_head(out), Some("develop".to_string()));
    }

    #[test]
    fn test_parse_symref_head_with_slash_in_branch() {
        let out = "ref: refs/heads/release/2.x\tHEAD\n";
        assert_eq!(parse_symref_head(out), Some("release/2.x".to_string()));
    }

    #[test]
    fn test_parse_symref_head_malformed() {
        assert_eq!(parse_symref_head(""), None);
        assert_eq!(parse_symref_head("3f78\tHEAD\n"), None);
        assert_eq!(parse_symref_head("ref: refs/tags/v1\tHEAD\n"), None);
    }

    #[test]
    fn test_default_branch_from_remote() {
        let git = FakeGit::new().with_head_branch("trunk");
        assert_eq!(default_branch(&git, "https://github.com/o/r.git"), "trunk");
        assert_eq!(
            git.calls(),
            vec!["ls-remote --symref https://github.com/o/r.git HEAD"]
        );
    }

    #[test]
    fn test_default_branch_falls_back_to_main() {
        let git = FakeGit::new().failing("ls-remote");
        assert_eq!(default_branch(&git, "https://github.com/o/r.git"), "main");
    }

    #[test]
    fn test_default_branch_falls_back_on_garbage_output() {
        let git = FakeGit::new().with_ls_remote_output("garbage");
        assert_eq!(default_branch(&git, "https://github.com/o/r.git"), "main");
    }
}
