//! Default values for configuration fields.
//!
//! Referenced from `#[serde(default = "...")]` attributes in [`super::types`]
//! and from the `Default` impls there.

use super::types::{CatalogConfig, DisplayConfig, IconConfig, LayoutConfig, LoggingConfig};
use crate::utils::paths;
use std::path::PathBuf;

/// System-wide desktop entry directory, scanned first.
pub const SYSTEM_APPLICATIONS_DIR: &str = "/usr/share/applications";

// --- logging ---

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_log_file_path() -> Option<PathBuf> {
    None
}

pub fn default_log_format() -> String {
    "text".to_string()
}

pub fn default_logging_config() -> LoggingConfig {
    LoggingConfig::default()
}

// --- catalog ---

/// `/usr/share/applications`, then `$XDG_DATA_HOME/applications` when the
/// home directory is known.
pub fn default_catalog_directories() -> Vec<PathBuf> {
    let mut dirs = vec![PathBuf::from(SYSTEM_APPLICATIONS_DIR)];
    if let Ok(data_home) = paths::get_data_base_dir() {
        dirs.push(data_home.join("applications"));
    }
    dirs
}

pub fn default_file_suffix() -> String {
    ".desktop".to_string()
}

pub fn default_max_line_length() -> usize {
    4096
}

pub fn default_max_entries() -> Option<usize> {
    None
}

pub fn default_catalog_config() -> CatalogConfig {
    CatalogConfig::default()
}

// --- icons ---

pub fn default_icon_search_roots() -> Vec<PathBuf> {
    [
        "/usr/share/icons/hicolor/scalable/apps",
        "/usr/share/icons/hicolor/48x48/apps",
        "/usr/share/icons/Adwaita/symbolic/apps",
        "/usr/share/pixmaps",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

pub fn default_icon_config() -> IconConfig {
    IconConfig::default()
}

// --- layout ---

pub fn default_icon_ratio() -> f64 {
    0.15
}

pub fn default_padding_ratio() -> f64 {
    0.062
}

pub fn default_label_ratio() -> f64 {
    0.018
}

pub fn default_shrink_factor() -> f64 {
    0.9
}

pub fn default_min_icon_size() -> u32 {
    40
}

pub fn default_min_padding() -> u32 {
    10
}

pub fn default_layout_config() -> LayoutConfig {
    LayoutConfig::default()
}

// --- display ---

pub fn default_display_width() -> u32 {
    800
}

pub fn default_display_height() -> u32 {
    480
}

/// `<app config dir>/wallpaper.png` when the config directory is known.
pub fn default_wallpaper() -> Option<PathBuf> {
    paths::get_app_config_dir()
        .ok()
        .map(|dir| dir.join("wallpaper.png"))
}

pub fn default_display_config() -> DisplayConfig {
    DisplayConfig::default()
}
