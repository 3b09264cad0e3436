//! Symlink capability and privilege escalation
//!
//! Windows only allows unprivileged symlink creation with Developer Mode
//! enabled. [`Platform`] hides that behind a capability probe plus a
//! restart-with-flag relaunch, so link mapping stays platform-agnostic.

use std::path::Path;

use crate::error::Result;

/// Command-line flag marking an already elevated process
pub const ELEVATED_FLAG: &str = "--elevated";

/// OS capability needed by the link mapper
pub trait Platform {
    /// Probe whether this process may create directory symlinks.
    ///
    /// Returns `Ok(false)` for permission-class failures only; any other
    /// failure of the probe is an error.
    fn can_create_symlink(&self, scratch: &Path) -> Result<bool>;

    /// Re-run this program elevated with `args` plus [`ELEVATED_FLAG`],
    /// wait for it and return its exit code.
    fn request_elevated_relaunch(&self, args: &[String]) -> Result<i32>;
}

/// Arguments for the elevated child: the original ones plus the marker flag
pub fn relaunch_args(args: &[String]) -> Vec<String> {
    let mut out: Vec<String> = args.to_vec();
    if !out.iter().any(|a| a == ELEVATED_FLAG) {
        out.push(ELEVATED_FLAG.to_string());
    }
    out
}

/// The platform this binary was built for
pub fn native() -> &'static dyn Platform {
    #[cfg(windows)]
    {
        &windows::WindowsPlatform
    }
    #[cfg(not(windows))]
    {
        &UnrestrictedPlatform
    }
}

/// Platforms where any user may create symlinks
#[derive(Debug, Default, Clone, Copy)]
pub struct UnrestrictedPlatform;

impl Platform for UnrestrictedPlatform {
    fn can_create_symlink(&self, _scratch: &Path) -> Result<bool> {
        Ok(true)
    }

    fn request_elevated_relaunch(&self, _args: &[String]) -> Result<i32> {
        Err(crate::error::SkillError::ElevationFailed {
            reason: "elevation is not required on this platform".to_string(),
        })
    }
}

#[cfg(windows)]
mod windows {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::Path;
    use std::process::Command;

    use super::{Platform, relaunch_args};
    use crate::error::{Result, SkillError, fs::link_failed};

    /// ERROR_PRIVILEGE_NOT_HELD
    const PRIVILEGE_NOT_HELD: i32 = 1314;

    pub struct WindowsPlatform;

    impl Platform for WindowsPlatform {
        fn can_create_symlink(&self, scratch: &Path) -> Result<bool> {
            let target = scratch.join("link-probe-target");
            let link = scratch.join("link-probe");
            fs::create_dir_all(&target)?;

            let probe = std::os::windows::fs::symlink_dir(&target, &link);
            let _ = fs::remove_dir(&link);
            let _ = fs::remove_dir(&target);

            match probe {
                Ok(()) => Ok(true),
                Err(e)
                    if e.kind() == ErrorKind::PermissionDenied
                        || e.raw_os_error() == Some(PRIVILEGE_NOT_HELD) =>
                {
                    tracing::warn!(error = %e, "symlink probe denied");
                    Ok(false)
                }
                Err(e) => Err(link_failed(&link, e)),
            }
        }

        fn request_elevated_relaunch(&self, args: &[String]) -> Result<i32> {
            let exe = std::env::current_exe().map_err(|e| SkillError::ElevationFailed {
                reason: format!("cannot locate current executable: {e}"),
            })?;
            let arg_list = relaunch_args(args)
                .iter()
                .map(|a| format!("'{}'", quote_powershell(&quote_argument(a))))
                .collect::<Vec<_>>()
                .join(",");

            let mut script = format!(
                "$p = Start-Process -FilePath '{}' -Verb RunAs -Wait -PassThru",
                quote_powershell(&exe.to_string_lossy())
            );
            if !arg_list.is_empty() {
                script.push_str(&format!(" -ArgumentList @({arg_list})"));
            }
            script.push_str("; exit $p.ExitCode");

            tracing::info!(exe = %exe.display(), "requesting elevated relaunch");
            let status = Command::new("powershell")
                .args(["-NoProfile", "-NonInteractive", "-Command", &script])
                .status()
                .map_err(|e| SkillError::ElevationFailed {
                    reason: e.to_string(),
                })?;
            Ok(status.code().unwrap_or(1))
        }
    }

    /// Escape for a single-quoted PowerShell string
    fn quote_powershell(s: &str) -> String {
        s.replace('\'', "''")
    }

    /// Wrap arguments containing whitespace for the child's command line
    fn quote_argument(s: &str) -> String {
        if s.is_empty() || s.contains(char::is_whitespace) {
            format!("\"{}\"", s.replace('"', "\\\""))
        } else {
            s.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relaunch_args_appends_flag_once() {
        let args = vec!["owner/repo".to_string(), "--dry-run".to_string()];
        let out = relaunch_args(&args);
        assert_eq!(out, vec!["owner/repo", "--dry-run", "--elevated"]);
        assert_eq!(relaunch_args(&out), out);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_unrestricted_platform_never_elevates() {
        let platform = native();
        let scratch = crate::test_fixtures::create_temp_dir();
        assert!(platform.can_create_symlink(scratch.path()).unwrap());
        assert!(platform.request_elevated_relaunch(&[]).is_err());
    }
}
