//! Configuration data structures.
//!
//! Every section uses per-field serde defaults, so a partial file (or none)
//! yields a complete configuration, and `deny_unknown_fields` so typos are
//! reported instead of silently ignored.
//!
//! ```
//! use tapgrid_core::config::TapgridConfig;
//!
//! let config: TapgridConfig = toml::from_str(r#"
//! [layout]
//! shrink_factor = 0.8
//!
//! [catalog]
//! directories = ["/opt/apps"]
//! "#).unwrap();
//! assert_eq!(config.layout.shrink_factor, 0.8);
//! assert_eq!(config.layout.min_icon_size, 40);
//! assert_eq!(config.catalog.file_suffix, ".desktop");
//! ```

use super::defaults;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logging subsystem settings, consumed by [`crate::logging::init_logging`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// One of "trace", "debug", "info", "warn", "error" (case-insensitive).
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Optional log file. Relative paths are resolved against the app state directory.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// "text" or "json".
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::default_log_level(),
            file_path: defaults::default_log_file_path(),
            format: defaults::default_log_format(),
        }
    }
}

/// Where and how desktop entry files are discovered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Directories scanned in order. Earlier directories contribute entries first.
    #[serde(default = "defaults::default_catalog_directories")]
    pub directories: Vec<PathBuf>,
    /// A file is considered when its name contains this string.
    #[serde(default = "defaults::default_file_suffix")]
    pub file_suffix: String,
    /// Longest accepted line in bytes, excluding the terminator. Longer lines reject the file.
    #[serde(default = "defaults::default_max_line_length")]
    pub max_line_length: usize,
    /// Stop accepting entries once this many have been collected.
    #[serde(default = "defaults::default_max_entries")]
    pub max_entries: Option<usize>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            directories: defaults::default_catalog_directories(),
            file_suffix: defaults::default_file_suffix(),
            max_line_length: defaults::default_max_line_length(),
            max_entries: defaults::default_max_entries(),
        }
    }
}

/// Icon lookup settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IconConfig {
    /// Directories searched in priority order.
    #[serde(default = "defaults::default_icon_search_roots")]
    pub search_roots: Vec<PathBuf>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            search_roots: defaults::default_icon_search_roots(),
        }
    }
}

/// Grid sizing parameters. Ratios are fractions of the viewport dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Icon edge as a fraction of viewport width.
    #[serde(default = "defaults::default_icon_ratio")]
    pub icon_ratio: f64,
    /// Spacing as a fraction of viewport width.
    #[serde(default = "defaults::default_padding_ratio")]
    pub padding_ratio: f64,
    /// Label strip height as a fraction of viewport height.
    #[serde(default = "defaults::default_label_ratio")]
    pub label_ratio: f64,
    /// Multiplier applied to icon size and padding on every shrink step. Must lie in (0, 1).
    #[serde(default = "defaults::default_shrink_factor")]
    pub shrink_factor: f64,
    /// Shrinking stops once the icon is smaller than this.
    #[serde(default = "defaults::default_min_icon_size")]
    pub min_icon_size: u32,
    /// Shrinking stops once the padding is smaller than this.
    #[serde(default = "defaults::default_min_padding")]
    pub min_padding: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            icon_ratio: defaults::default_icon_ratio(),
            padding_ratio: defaults::default_padding_ratio(),
            label_ratio: defaults::default_label_ratio(),
            shrink_factor: defaults::default_shrink_factor(),
            min_icon_size: defaults::default_min_icon_size(),
            min_padding: defaults::default_min_padding(),
        }
    }
}

/// Surface settings for hosts without a display server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    #[serde(default = "defaults::default_display_width")]
    pub width: u32,
    #[serde(default = "defaults::default_display_height")]
    pub height: u32,
    /// Background image handed to the renderer as-is.
    #[serde(default = "defaults::default_wallpaper")]
    pub wallpaper: Option<PathBuf>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: defaults::default_display_width(),
            height: defaults::default_display_height(),
            wallpaper: defaults::default_wallpaper(),
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TapgridConfig {
    #[serde(default = "defaults::default_logging_config")]
    pub logging: LoggingConfig,
    #[serde(default = "defaults::default_catalog_config")]
    pub catalog: CatalogConfig,
    #[serde(default = "defaults::default_icon_config")]
    pub icons: IconConfig,
    #[serde(default = "defaults::default_layout_config")]
    pub layout: LayoutConfig,
    #[serde(default = "defaults::default_display_config")]
    pub display: DisplayConfig,
}
