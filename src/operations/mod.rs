//! Operations coordinating the installer, the scanners and the UI
//!
//! - InstallOperation: fetch, select and install one skill
//! - UninstallOperation: scan and remove installed skills
//! - maintenance: log and empty-directory cleanup
//!
//! Operations receive every collaborator (git, platform, prompter) from the
//! caller, so each flow runs against fakes in tests.

pub mod install;
pub mod maintenance;
pub mod uninstall;

pub use install::{InstallOperation, InstallOptions, InstallOutcome};
pub use uninstall::{UninstallOperation, UninstallSummary};
