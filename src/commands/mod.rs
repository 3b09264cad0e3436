//! Command implementations for the skillget CLI
//!
//! Commands wire the real collaborators (system git, the native platform,
//! the terminal prompter) into operations and print the result.

pub mod completions;
pub mod install;
pub mod maintenance;
pub mod uninstall;
