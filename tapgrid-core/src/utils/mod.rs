//! Utility functions shared across tapgrid crates.
//!
//! - [`fs`]: filesystem helpers returning [`crate::error::CoreError`].
//! - [`paths`]: XDG and application directory resolution.

pub mod fs;
pub mod paths;
