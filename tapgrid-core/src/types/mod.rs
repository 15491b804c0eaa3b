//! Core data types shared by the tapgrid crates.

pub mod geometry;

pub use geometry::{PointInt, RectInt, SizeInt};
