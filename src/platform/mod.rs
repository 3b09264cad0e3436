//! Tool integrations and OS capabilities
//!
//! This module handles:
//! - The fixed set of supported tools and their skills directories (via targets)
//! - Symlink capability probing and elevated relaunch (via elevation)

pub mod elevation;
pub mod targets;

pub use elevation::{Platform, native};
pub use targets::{InstallTarget, detect_all};
