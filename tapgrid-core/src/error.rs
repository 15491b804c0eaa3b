//! Error handling for the tapgrid core layer.
//!
//! The main error type for this crate is [`CoreError`], which wraps the more
//! specific [`ConfigError`] and [`LoggingError`]. Higher layers wrap
//! `CoreError` in their own error enums via `#[from]`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tapgrid.
///
/// Represents every failure that can occur in the core layer: configuration,
/// logging setup and filesystem helpers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Errors related to configuration loading, parsing, or validation.
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// Errors raised while installing the global `tracing` subscriber.
    #[error("Logging Error: {0}")]
    Logging(#[from] LoggingError),

    /// Errors related to filesystem operations not covered by a more specific variant.
    #[error("Filesystem Error: {message} (Path: {path:?})")]
    Filesystem {
        message: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// General I/O errors.
    #[error("I/O Error: {0}")]
    Io(#[from] io::Error),
}

/// Error type for configuration-related operations.
///
/// Typically wrapped by [`CoreError::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration file exists but could not be read.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A configuration file is not valid TOML or does not match the schema.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration parsed but holds values outside their valid range.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// A required base directory (e.g. XDG config or data home) could not be determined.
    #[error("Could not determine base directory for {dir_type}")]
    DirectoryUnavailable { dir_type: String },
}

/// Error type for logging setup.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The subscriber could not be installed or the configuration was rejected.
    #[error("Failed to initialize logging: {0}")]
    InitializationFailure(String),

    /// An I/O error occurred while preparing a log destination.
    #[error("Logging I/O error: {0}")]
    IoError(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io::ErrorKind;

    #[test]
    fn test_core_error_config_variant() {
        let core_err = CoreError::Config(ConfigError::ValidationError("shrink factor".to_string()));

        assert_eq!(
            core_err.to_string(),
            "Configuration Error: Configuration validation failed: shrink factor"
        );
        match core_err.source().and_then(|s| s.downcast_ref::<ConfigError>()) {
            Some(ConfigError::ValidationError(msg)) => assert_eq!(msg, "shrink factor"),
            _ => panic!("Incorrect source for CoreError::Config"),
        }
    }

    #[test]
    fn test_core_error_logging_variant() {
        let core_err: CoreError =
            LoggingError::InitializationFailure("already set".to_string()).into();
        assert_eq!(
            core_err.to_string(),
            "Logging Error: Failed to initialize logging: already set"
        );
        assert!(core_err.source().is_some());
    }

    #[test]
    fn test_core_error_filesystem_variant() {
        let path = PathBuf::from("/tmp/tapgrid/state");
        let core_err = CoreError::Filesystem {
            message: "Failed to create directory".to_string(),
            path: path.clone(),
            source: io::Error::new(ErrorKind::PermissionDenied, "denied"),
        };

        assert_eq!(
            core_err.to_string(),
            format!("Filesystem Error: Failed to create directory (Path: {:?})", path)
        );
        let source = core_err.source().and_then(|s| s.downcast_ref::<io::Error>());
        assert_eq!(source.map(io::Error::kind), Some(ErrorKind::PermissionDenied));
    }

    #[test]
    fn test_core_error_io_from() {
        let core_err: CoreError = io::Error::new(ErrorKind::NotFound, "gone").into();
        assert_eq!(core_err.to_string(), "I/O Error: gone");
    }

    #[test]
    fn test_config_error_directory_unavailable() {
        let err = ConfigError::DirectoryUnavailable { dir_type: "Data Base".to_string() };
        assert_eq!(err.to_string(), "Could not determine base directory for Data Base");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_config_error_read_error_has_source() {
        let err = ConfigError::ReadError {
            path: PathBuf::from("/etc/xdg/tapgrid/config.toml"),
            source: io::Error::new(ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/etc/xdg/tapgrid/config.toml"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_config_error_parse_error_from_toml() {
        let toml_err = toml::from_str::<toml::Value>("layout = [").unwrap_err();
        let err: ConfigError = toml_err.into();
        assert!(err.to_string().starts_with("Failed to parse configuration file"));
    }
}
