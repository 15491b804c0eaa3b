//! Adaptive grid layout.

pub mod engine;
pub mod errors;
pub mod types;

pub use engine::{compute_layout, LayoutEngine};
pub use errors::LayoutError;
pub use types::{LayoutGeometry, LayoutParams};
