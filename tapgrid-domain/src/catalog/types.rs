use super::errors::EntryError;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::slice;

/// A launchable application discovered from a desktop entry file.
///
/// All three fields are non-empty. `exec_command` has already had any `%U`
/// placeholder (and everything after it) removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppEntry {
    name: String,
    icon_name: String,
    exec_command: String,
    source: PathBuf,
}

impl AppEntry {
    /// Builds an entry, refusing empty fields. Fields are checked in the order
    /// `Name`, `Icon`, `Exec` and the first empty one is reported.
    pub fn new(
        name: String,
        icon_name: String,
        exec_command: String,
        source: PathBuf,
    ) -> Result<Self, EntryError> {
        for (field, value) in [("Name", &name), ("Icon", &icon_name), ("Exec", &exec_command)] {
            if value.is_empty() {
                return Err(EntryError::MissingField { path: source, field });
            }
        }
        Ok(Self { name, icon_name, exec_command, source })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon_name(&self) -> &str {
        &self.icon_name
    }

    pub fn exec_command(&self) -> &str {
        &self.exec_command
    }

    /// The file this entry was parsed from.
    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// The ordered, read-only list of launchable applications.
///
/// Entries are sorted case-insensitively by name. Ties keep scan order and
/// duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<AppEntry>,
}

impl Catalog {
    /// Builds a catalog from entries in scan order.
    pub fn from_scanned(mut entries: Vec<AppEntry>) -> Self {
        entries.sort_by_cached_key(|entry| entry.name.to_lowercase());
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AppEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, AppEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[AppEntry] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a AppEntry;
    type IntoIter = slice::Iter<'a, AppEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Counters collected while scanning directories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub directories_scanned: usize,
    pub directories_skipped: usize,
    pub files_considered: usize,
    pub entries_accepted: usize,
    pub entries_rejected: usize,
}

#[cfg(test)]
pub(crate) fn entry(name: &str) -> AppEntry {
    AppEntry::new(
        name.to_string(),
        format!("{}-icon", name.to_lowercase()),
        name.to_lowercase(),
        PathBuf::from(format!("/test/{}.desktop", name)),
    )
    .unwrap()
}
