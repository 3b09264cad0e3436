//! Skill installation into the shared store and tool directories
//!
//! This module handles:
//! - Copying the selected skill into the shared store (or, in legacy mode,
//!   into every tool directory)
//! - Classifying and linking tool directories to the shared store
//! - Checking symlink capability before any link is created

pub mod mapper;
pub mod store;

pub use mapper::{LinkCapability, LinkState, MapOutcome, TargetMapper, ensure_link_capability};
pub use store::{copy_legacy, copy_to_store};
