//! Desktop entry parsing.
//!
//! Only four keys matter: `Name=`, `Icon=`, `Exec=` and `NoDisplay=`. Keys are
//! matched as line prefixes and the first occurrence of each wins, so values
//! from later groups (e.g. `[Desktop Action ...]`) never replace the main ones.
//!
//! Lines are read with a bounded buffer. A line longer than the configured
//! maximum rejects the whole file rather than being truncated.

use super::errors::EntryError;
use super::types::AppEntry;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tapgrid_core::config::defaults::default_max_line_length;
use tracing::{debug, warn};

const NAME_KEY: &str = "Name=";
const ICON_KEY: &str = "Icon=";
const EXEC_KEY: &str = "Exec=";
const NO_DISPLAY_KEY: &str = "NoDisplay=";
const FIELD_CODE: &str = "%U";

/// Parses desktop entry files with a fixed per-line limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryParser {
    max_line_length: usize,
}

impl Default for EntryParser {
    fn default() -> Self {
        Self::new(default_max_line_length())
    }
}

impl EntryParser {
    pub fn new(max_line_length: usize) -> Self {
        Self { max_line_length }
    }

    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    /// Parses `path`, logging why a file was rejected.
    ///
    /// Read failures are logged at `warn`, rejected content at `debug`.
    pub fn parse(&self, path: &Path) -> Option<AppEntry> {
        match self.try_parse(path) {
            Ok(entry) => Some(entry),
            Err(e) if e.is_io() => {
                warn!("Skipping desktop entry: {}", e);
                None
            }
            Err(e) => {
                debug!("Ignoring desktop entry: {}", e);
                None
            }
        }
    }

    /// Parses `path`, reporting the reason for rejection.
    pub fn try_parse(&self, path: &Path) -> Result<AppEntry, EntryError> {
        let file = File::open(path).map_err(|source| EntryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_reader(BufReader::new(file), path)
    }

    /// Parses already-opened content. `path` is recorded as the entry's source.
    pub fn parse_reader<R: BufRead>(
        &self,
        mut reader: R,
        path: &Path,
    ) -> Result<AppEntry, EntryError> {
        let mut name: Option<String> = None;
        let mut icon: Option<String> = None;
        let mut exec: Option<String> = None;

        // Room for a full line plus "\r\n"; anything longer cannot be a valid line.
        let read_limit = self.max_line_length.saturating_add(2) as u64;
        let mut buf = Vec::new();
        let mut line_number = 0usize;

        loop {
            buf.clear();
            let read = (&mut reader)
                .take(read_limit)
                .read_until(b'\n', &mut buf)
                .map_err(|source| EntryError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
            if read == 0 {
                break;
            }
            line_number += 1;

            let mut content = buf.as_slice();
            if let Some(rest) = content.strip_suffix(b"\n") {
                content = rest;
            }
            if let Some(rest) = content.strip_suffix(b"\r") {
                content = rest;
            }
            if content.len() > self.max_line_length {
                return Err(EntryError::LineTooLong {
                    path: path.to_path_buf(),
                    line: line_number,
                    max: self.max_line_length,
                });
            }

            let line = String::from_utf8_lossy(content);
            if line.starts_with(NO_DISPLAY_KEY) {
                if line.contains("true") {
                    return Err(EntryError::Hidden {
                        path: path.to_path_buf(),
                    });
                }
            } else if let Some(value) = line.strip_prefix(NAME_KEY) {
                name.get_or_insert_with(|| trim_value(value).to_string());
            } else if let Some(value) = line.strip_prefix(ICON_KEY) {
                icon.get_or_insert_with(|| trim_value(value).to_string());
            } else if let Some(value) = line.strip_prefix(EXEC_KEY) {
                exec.get_or_insert_with(|| strip_field_code(trim_value(value)).to_string());
            }
        }

        AppEntry::new(
            name.unwrap_or_default(),
            icon.unwrap_or_default(),
            exec.unwrap_or_default(),
            path.to_path_buf(),
        )
    }
}

/// Parses a desktop entry file with the default line limit.
///
/// Returns `None` for hidden, incomplete, malformed or unreadable files; the
/// reason is logged.
pub fn parse_entry(path: &Path) -> Option<AppEntry> {
    EntryParser::default().parse(path)
}

/// Like [`parse_entry`] but with an explicit line limit and the rejection reason.
pub fn try_parse_entry(path: &Path, max_line_length: usize) -> Result<AppEntry, EntryError> {
    EntryParser::new(max_line_length).try_parse(path)
}

/// Strips leading spaces and trailing spaces, CR and LF. Tabs and other
/// whitespace are kept.
fn trim_value(value: &str) -> &str {
    value
        .trim_start_matches(' ')
        .trim_end_matches(|c| matches!(c, ' ' | '\r' | '\n'))
}

/// Drops `%U` and everything after it.
fn strip_field_code(command: &str) -> &str {
    match command.find(FIELD_CODE) {
        Some(at) => trim_value(&command[..at]),
        None => command,
    }
}
