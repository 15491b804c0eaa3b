//! Application catalog: desktop entry parsing and directory scanning.

pub mod builder;
pub mod errors;
pub mod parser;
pub mod types;

pub use builder::{build_catalog, build_catalog_from_config, CatalogBuilder};
pub use errors::{CatalogError, EntryError};
pub use parser::{parse_entry, try_parse_entry, EntryParser};
pub use types::{AppEntry, Catalog, ScanStats};
