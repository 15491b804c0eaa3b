//! Icon file lookup.

pub mod errors;
pub mod resolver;

pub use errors::IconError;
pub use resolver::IconResolver;
