//! # tapgrid core library (`tapgrid-core`)
//!
//! Foundation shared by the tapgrid launcher crates:
//!
//! - **Error handling**: [`CoreError`] and the more specific [`ConfigError`] and [`LoggingError`].
//! - **Configuration**: TOML configuration with per-field defaults, loaded and
//!   validated by [`config::ConfigLoader`].
//! - **Logging**: `tracing` subscriber setup with console and rolling file output.
//! - **Geometry**: integer [`PointInt`], [`SizeInt`] and [`RectInt`] for viewports, tiles and taps.
//! - **Utilities**: XDG path resolution and filesystem helpers.
//!
//! ```rust,ignore
//! use tapgrid_core::config::ConfigLoader;
//! use tapgrid_core::logging::init_logging;
//!
//! fn main() -> Result<(), tapgrid_core::CoreError> {
//!     let config = ConfigLoader::load()?;
//!     init_logging(&config.logging, false)?;
//!     tracing::info!("tapgrid core initialized");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

pub use config::{ConfigLoader, TapgridConfig};
pub use error::{ConfigError, CoreError, LoggingError};
pub use types::{PointInt, RectInt, SizeInt};
