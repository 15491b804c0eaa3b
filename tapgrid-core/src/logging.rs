//! Logging setup on top of the `tracing` ecosystem.
//!
//! [`init_minimal_logging`] is for early startup and tests. [`init_logging`]
//! installs the configured subscriber: a console layer plus an optional daily
//! rolling file layer written through a non-blocking worker.
//!
//! Console output goes to stderr; stdout belongs to the host's own output.

use crate::config::LoggingConfig;
use crate::error::{CoreError, LoggingError};
use crate::utils;

use once_cell::sync::Lazy;
use std::ffi::OsStr;
use std::io::stderr;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Keeps the file writer's worker alive so buffered lines are flushed on exit.
static LOG_WORKER_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

/// Installs a stderr subscriber filtered by `RUST_LOG`, defaulting to `info`.
///
/// Errors from an already-installed subscriber are ignored.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

fn parse_level(level: &str) -> Result<Level, LoggingError> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(LoggingError::InitializationFailure(format!(
            "Invalid log level in config: {}",
            other
        ))),
    }
}

/// Builds a daily rolling file layer for `log_path`, creating its parent directory.
fn create_file_layer(
    log_path: &Path,
    format: &str,
) -> Result<(BoxedLayer, WorkerGuard), CoreError> {
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    utils::fs::ensure_dir_exists(directory)?;

    let file_name = log_path.file_name().unwrap_or_else(|| OsStr::new("tapgrid.log"));
    let appender = tracing_appender::rolling::daily(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = match format.to_lowercase().as_str() {
        "json" => fmt::layer().json().with_writer(writer).with_ansi(false).boxed(),
        _ => fmt::layer().with_writer(writer).with_ansi(false).boxed(),
    };
    Ok((layer, guard))
}

/// Installs the global subscriber described by `config`.
///
/// With `is_reload` set, a failure to replace an existing subscriber is
/// reported on stderr and treated as success. The held file guard is only
/// replaced when the new subscriber was installed.
pub fn init_logging(config: &LoggingConfig, is_reload: bool) -> Result<(), CoreError> {
    let level = parse_level(&config.level)?;

    let console_layer = match config.format.to_lowercase().as_str() {
        "json" => fmt::layer()
            .json()
            .with_writer(stderr)
            .with_ansi(false)
            .with_filter(EnvFilter::new(level.to_string()))
            .boxed(),
        _ => fmt::layer()
            .with_writer(stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
            .with_filter(EnvFilter::new(level.to_string()))
            .boxed(),
    };

    let mut layers: Vec<BoxedLayer> = vec![console_layer];
    let mut new_guard = None;
    if let Some(log_path) = &config.file_path {
        let (file_layer, guard) = create_file_layer(log_path, &config.format)?;
        layers.push(file_layer.with_filter(EnvFilter::new(level.to_string())).boxed());
        new_guard = Some(guard);
    }

    match Registry::default().with(layers).try_init() {
        Ok(()) => {
            store_worker_guard(new_guard);
            Ok(())
        }
        Err(e) if is_reload => {
            eprintln!(
                "[INFO] Logging re-initialization attempted; previous subscriber persists: {}",
                e
            );
            Ok(())
        }
        Err(e) => Err(LoggingError::InitializationFailure(format!(
            "Failed to set global tracing subscriber. Was it already initialized? Error: {}",
            e
        ))
        .into()),
    }
}

fn store_worker_guard(guard: Option<WorkerGuard>) {
    match LOG_WORKER_GUARD.lock() {
        Ok(mut slot) => *slot = guard,
        Err(e) => eprintln!(
            "[ERROR] Failed to lock log worker guard: {}. Log flushing may be affected.",
            e
        ),
    }
}
