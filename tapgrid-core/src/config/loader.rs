//! Configuration loading.
//!
//! [`ConfigLoader::load`] reads the system file (see
//! [`paths::get_system_config_path_with_override`]) and the user file
//! (`<app config dir>/config.toml`), merges them table by table with user
//! values winning, deserializes the result into [`TapgridConfig`] and validates
//! it. Missing or empty files contribute nothing; a missing pair yields the
//! defaults.

use crate::config::TapgridConfig;
use crate::error::{ConfigError, CoreError};
use crate::utils::{fs as tg_fs, paths};
use std::path::Path;
use toml::Value;
use tracing::debug;

/// Namespace for configuration loading.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads, merges and validates the system and user configuration files.
    pub fn load() -> Result<TapgridConfig, CoreError> {
        let system_path = paths::get_system_config_path_with_override();
        let user_path = paths::get_user_config_path()?;
        Self::load_from_paths(Some(system_path.as_path()), Some(user_path.as_path()))
    }

    /// Same as [`Self::load`] with explicit file locations. `None` skips a layer.
    pub fn load_from_paths(
        system_path: Option<&Path>,
        user_path: Option<&Path>,
    ) -> Result<TapgridConfig, CoreError> {
        let system_value = match system_path {
            Some(path) => Self::read_toml(path)?,
            None => None,
        };
        let user_value = match user_path {
            Some(path) => Self::read_toml(path)?,
            None => None,
        };

        let mut config = match Self::merge_toml_values(system_value, user_value) {
            Some(value) => value.try_into::<TapgridConfig>().map_err(ConfigError::ParseError)?,
            None => TapgridConfig::default(),
        };

        Self::validate_config(&mut config)?;
        Ok(config)
    }

    fn read_toml(path: &Path) -> Result<Option<Value>, CoreError> {
        let content = tg_fs::read_optional_to_string(path).map_err(|source| {
            ConfigError::ReadError {
                path: path.to_path_buf(),
                source,
            }
        })?;
        match content {
            Some(text) if !text.trim().is_empty() => {
                debug!(path = %path.display(), "Read configuration layer");
                let value = text.parse::<Value>().map_err(ConfigError::ParseError)?;
                Ok(Some(value))
            }
            _ => Ok(None),
        }
    }

    /// Merges two optional TOML values. `override_val` takes precedence.
    fn merge_toml_values(base: Option<Value>, override_val: Option<Value>) -> Option<Value> {
        match (base, override_val) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(Value::Table(mut base_table)), Some(Value::Table(override_table))) => {
                Self::merge_toml_tables(&mut base_table, override_table);
                Some(Value::Table(base_table))
            }
            (_, Some(o)) => Some(o),
        }
    }

    /// Recursively merges `override_table` into `base_table`. Arrays are replaced,
    /// not concatenated.
    fn merge_toml_tables(
        base_table: &mut toml::map::Map<String, Value>,
        override_table: toml::map::Map<String, Value>,
    ) {
        for (key, override_item) in override_table {
            let nested = override_item.is_table()
                && matches!(base_table.get(&key), Some(Value::Table(_)));
            if !nested {
                base_table.insert(key, override_item);
            } else if let (Some(Value::Table(base_sub)), Value::Table(override_sub)) =
                (base_table.get_mut(&key), override_item)
            {
                Self::merge_toml_tables(base_sub, override_sub);
            }
        }
    }

    /// Normalizes logging settings and rejects values the rest of the system cannot use.
    fn validate_config(config: &mut TapgridConfig) -> Result<(), CoreError> {
        let level = config.logging.level.to_lowercase();
        match level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => config.logging.level = level,
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: '{}'. Must be one of trace, debug, info, warn, error.",
                    config.logging.level
                ))
                .into());
            }
        }

        let format = config.logging.format.to_lowercase();
        match format.as_str() {
            "text" | "json" => config.logging.format = format,
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log format: '{}'. Must be one of text, json.",
                    config.logging.format
                ))
                .into());
            }
        }

        if let Some(path) = &config.logging.file_path {
            if path.is_relative() {
                config.logging.file_path = Some(paths::get_app_state_dir()?.join(path));
            }
        }

        if config.catalog.file_suffix.is_empty() {
            return Err(invalid("catalog.file_suffix must not be empty"));
        }
        if config.catalog.max_line_length == 0 {
            return Err(invalid("catalog.max_line_length must be greater than zero"));
        }

        let layout = &config.layout;
        for (name, value) in [
            ("layout.icon_ratio", layout.icon_ratio),
            ("layout.padding_ratio", layout.padding_ratio),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(&format!("{} must be a positive number, got {}", name, value)));
            }
        }
        if !layout.label_ratio.is_finite() || layout.label_ratio < 0.0 {
            return Err(invalid(&format!(
                "layout.label_ratio must not be negative, got {}",
                layout.label_ratio
            )));
        }
        if !(layout.shrink_factor > 0.0 && layout.shrink_factor < 1.0) {
            return Err(invalid(&format!(
                "layout.shrink_factor must lie strictly between 0 and 1, got {}",
                layout.shrink_factor
            )));
        }

        if config.display.width == 0 || config.display.height == 0 {
            return Err(invalid("display.width and display.height must be greater than zero"));
        }

        Ok(())
    }
}

fn invalid(message: &str) -> CoreError {
    ConfigError::ValidationError(message.to_string()).into()
}
