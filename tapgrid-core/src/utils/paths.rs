//! XDG base directory and tapgrid-specific path resolution.
//!
//! Built on `directories-next`. Every function returns
//! `Result<PathBuf, CoreError>`, yielding
//! [`ConfigError::DirectoryUnavailable`] when the home directory cannot be
//! determined.

use crate::error::{ConfigError, CoreError};
use directories_next::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "tapgrid";
const APPLICATION: &str = "tapgrid";

/// Environment variable overriding the system-wide configuration file path.
pub const SYSTEM_CONFIG_ENV: &str = "TAPGRID_SYSTEM_CONFIG_PATH";

/// System-wide configuration file used when [`SYSTEM_CONFIG_ENV`] is unset.
pub const DEFAULT_SYSTEM_CONFIG_PATH: &str = "/etc/xdg/tapgrid/config.toml";

fn unavailable(dir_type: &str) -> CoreError {
    CoreError::Config(ConfigError::DirectoryUnavailable {
        dir_type: dir_type.to_string(),
    })
}

/// Returns `$XDG_DATA_HOME` (e.g. `~/.local/share`).
///
/// The per-user desktop entry directory is `applications/` beneath it.
pub fn get_data_base_dir() -> Result<PathBuf, CoreError> {
    BaseDirs::new()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| unavailable("Data Base"))
}

/// Returns `$XDG_STATE_HOME`, falling back to `~/.local/state` on Linux and to
/// the local data directory elsewhere.
pub fn get_state_base_dir() -> Result<PathBuf, CoreError> {
    BaseDirs::new()
        .map(|dirs| {
            #[cfg(target_os = "linux")]
            {
                match std::env::var("XDG_STATE_HOME") {
                    Ok(state_home) if !state_home.is_empty() => PathBuf::from(state_home),
                    _ => dirs.home_dir().join(".local/state"),
                }
            }
            #[cfg(not(target_os = "linux"))]
            {
                dirs.data_local_dir().to_path_buf()
            }
        })
        .ok_or_else(|| unavailable("State Base"))
}

/// Returns the tapgrid configuration directory, e.g. `~/.config/tapgrid`.
pub fn get_app_config_dir() -> Result<PathBuf, CoreError> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| unavailable("Application Config"))
}

/// Returns the tapgrid state directory, used for relative log file paths.
pub fn get_app_state_dir() -> Result<PathBuf, CoreError> {
    get_state_base_dir().map(|base| base.join(APPLICATION))
}

/// Returns the user configuration file path, `<app config dir>/config.toml`.
pub fn get_user_config_path() -> Result<PathBuf, CoreError> {
    get_app_config_dir().map(|dir| dir.join("config.toml"))
}

/// Returns the system configuration file path, honouring [`SYSTEM_CONFIG_ENV`].
pub fn get_system_config_path_with_override() -> PathBuf {
    match std::env::var(SYSTEM_CONFIG_ENV) {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_SYSTEM_CONFIG_PATH),
    }
}
