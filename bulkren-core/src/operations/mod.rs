//! High-level operations that correspond to CLI commands
//!
//! These tie enumeration, preview building and applying together, separated
//! from CLI concerns like argument parsing and output formatting.

pub mod apply;
pub mod preview;

pub use apply::{apply_operation, apply_previews_operation};
pub use preview::preview_operation;
