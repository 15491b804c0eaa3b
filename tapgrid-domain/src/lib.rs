//! # tapgrid domain layer (`tapgrid-domain`)
//!
//! The launcher's logic, independent of any display server:
//!
//! - [`catalog`]: parse desktop entry files and collect them into a sorted [`Catalog`].
//! - [`icons`]: find an icon file for an entry by searching prioritized directories.
//! - [`layout`]: fit any number of tiles into a fixed viewport.
//! - [`hit_test`]: map a tap back to the tile, and entry, under it.
//!
//! ```rust,ignore
//! use tapgrid_domain::{build_catalog, compute_layout, handle_tap};
//!
//! let catalog = build_catalog(&["/usr/share/applications"])?;
//! let geometry = compute_layout(800, 480, catalog.len());
//! if let Some(request) = handle_tap(75, 75, &catalog, &geometry) {
//!     println!("launch {}", request.command);
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod icons;
pub mod layout;

pub use catalog::{
    build_catalog, parse_entry, AppEntry, Catalog, CatalogBuilder, CatalogError, EntryError,
};
pub use error::DomainError;
pub use hit_test::{handle_tap, hit_test, LaunchRequest};
pub use icons::{IconError, IconResolver};
pub use layout::{compute_layout, LayoutEngine, LayoutError, LayoutGeometry, LayoutParams};
