//! Configuration management.
//!
//! - [`types`]: the schema, rooted at [`TapgridConfig`].
//! - [`defaults`]: default values referenced by the schema.
//! - [`loader`]: [`ConfigLoader`], which merges the system and user files and validates the result.
//!
//! ```rust,ignore
//! use tapgrid_core::config::ConfigLoader;
//!
//! match ConfigLoader::load() {
//!     Ok(config) => println!("scanning {:?}", config.catalog.directories),
//!     Err(e) => {
//!         tapgrid_core::logging::init_minimal_logging();
//!         tracing::error!("Configuration loading failed: {}", e);
//!     }
//! }
//! ```

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    CatalogConfig, DisplayConfig, IconConfig, LayoutConfig, LoggingConfig, TapgridConfig,
};
