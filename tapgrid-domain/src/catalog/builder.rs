use super::errors::CatalogError;
use super::parser::EntryParser;
use super::types::{AppEntry, Catalog, ScanStats};
use std::fs;
use std::path::Path;
use tapgrid_core::config::defaults::default_file_suffix;
use tapgrid_core::config::CatalogConfig;
use tracing::{debug, info, warn};

/// Accumulates entries from desktop entry directories, then produces a sorted [`Catalog`].
///
/// Directories are scanned in the order given and files in filesystem
/// enumeration order. An unreadable directory or directory entry is logged and
/// skipped; only a failure to grow the entry list aborts the build.
#[derive(Debug)]
pub struct CatalogBuilder {
    parser: EntryParser,
    file_suffix: String,
    max_entries: Option<usize>,
    entries: Vec<AppEntry>,
    stats: ScanStats,
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new(EntryParser::default(), default_file_suffix())
    }
}

impl CatalogBuilder {
    pub fn new(parser: EntryParser, file_suffix: impl Into<String>) -> Self {
        Self {
            parser,
            file_suffix: file_suffix.into(),
            max_entries: None,
            entries: Vec::new(),
            stats: ScanStats::default(),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(EntryParser::new(config.max_line_length), config.file_suffix.clone())
            .with_max_entries(config.max_entries)
    }

    /// Stop accepting entries once `max_entries` have been collected.
    pub fn with_max_entries(mut self, max_entries: Option<usize>) -> Self {
        self.max_entries = max_entries;
        self
    }

    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    fn is_full(&self) -> bool {
        self.max_entries.map_or(false, |max| self.entries.len() >= max)
    }

    /// Scans one directory, appending every accepted entry.
    pub fn scan_directory(&mut self, dir: &Path) -> Result<(), CatalogError> {
        let read_dir = match fs::read_dir(dir) {
            Ok(read_dir) => read_dir,
            Err(e) => {
                warn!("Skipping application directory {}: {}", dir.display(), e);
                self.stats.directories_skipped += 1;
                return Ok(());
            }
        };
        self.stats.directories_scanned += 1;

        for dir_entry in read_dir {
            if self.is_full() {
                debug!("Catalog limit of {:?} entries reached", self.max_entries);
                break;
            }
            let dir_entry = match dir_entry {
                Ok(dir_entry) => dir_entry,
                Err(e) => {
                    warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                    continue;
                }
            };
            if !dir_entry.file_name().to_string_lossy().contains(self.file_suffix.as_str()) {
                continue;
            }

            self.stats.files_considered += 1;
            match self.parser.parse(&dir_entry.path()) {
                Some(entry) => self.push(entry)?,
                None => self.stats.entries_rejected += 1,
            }
        }
        Ok(())
    }

    fn push(&mut self, entry: AppEntry) -> Result<(), CatalogError> {
        self.entries.try_reserve(1)?;
        self.entries.push(entry);
        self.stats.entries_accepted += 1;
        Ok(())
    }

    /// Sorts the collected entries and freezes them into a [`Catalog`].
    pub fn finish(self) -> Catalog {
        let stats = self.stats;
        info!(
            directories_scanned = stats.directories_scanned,
            directories_skipped = stats.directories_skipped,
            files_considered = stats.files_considered,
            entries_accepted = stats.entries_accepted,
            entries_rejected = stats.entries_rejected,
            "Application catalog built"
        );
        Catalog::from_scanned(self.entries)
    }
}

/// Builds a catalog from `metadata_dirs` with the default parser settings.
pub fn build_catalog<P: AsRef<Path>>(metadata_dirs: &[P]) -> Result<Catalog, CatalogError> {
    let mut builder = CatalogBuilder::default();
    for dir in metadata_dirs {
        builder.scan_directory(dir.as_ref())?;
    }
    Ok(builder.finish())
}

/// Builds a catalog from the directories and limits in `config`.
pub fn build_catalog_from_config(config: &CatalogConfig) -> Result<Catalog, CatalogError> {
    let mut builder = CatalogBuilder::from_config(config);
    for dir in &config.directories {
        if builder.is_full() {
            break;
        }
        builder.scan_directory(dir)?;
    }
    Ok(builder.finish())
}
