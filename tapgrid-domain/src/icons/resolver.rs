use super::errors::IconError;
use std::path::{Path, PathBuf};
use tapgrid_core::config::IconConfig;
use tracing::debug;

/// Candidate file names tried in each search root, in priority order.
static CANDIDATE_PATTERNS: [(&str, &str); 3] = [("", ".png"), ("", ".svg"), ("-symbolic", ".svg")];

/// Maps an icon name to a file by probing an ordered list of directories.
///
/// Roots are tried in order; within a root the candidates are
/// `{name}.png`, `{name}.svg`, `{name}-symbolic.svg`. The first existing file
/// wins. Nothing is cached, so every call hits the filesystem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconResolver {
    search_roots: Vec<PathBuf>,
}

impl IconResolver {
    pub fn new(search_roots: Vec<PathBuf>) -> Self {
        Self { search_roots }
    }

    pub fn from_config(config: &IconConfig) -> Self {
        Self::new(config.search_roots.clone())
    }

    pub fn search_roots(&self) -> &[PathBuf] {
        &self.search_roots
    }

    /// Every path that would be probed for `icon_name`, in probe order.
    pub fn candidates<'a>(&'a self, icon_name: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
        self.search_roots.iter().flat_map(move |root| {
            CANDIDATE_PATTERNS
                .iter()
                .map(move |(suffix, ext)| root.join(format!("{}{}{}", icon_name, suffix, ext)))
        })
    }

    /// Returns the first existing candidate for `icon_name`.
    ///
    /// An absolute `icon_name` is checked as-is instead of being searched for.
    pub fn locate(&self, icon_name: &str) -> Result<PathBuf, IconError> {
        let not_found = || IconError::NotFound {
            icon_name: icon_name.to_string(),
        };
        if icon_name.is_empty() {
            return Err(not_found());
        }

        let direct = Path::new(icon_name);
        if direct.is_absolute() {
            return if direct.is_file() {
                Ok(direct.to_path_buf())
            } else {
                Err(not_found())
            };
        }

        match self.candidates(icon_name).find(|candidate| candidate.is_file()) {
            Some(found) => Ok(found),
            None => {
                debug!("No icon file found for '{}'", icon_name);
                Err(not_found())
            }
        }
    }

    /// [`Self::locate`] without the error; `None` means "draw a placeholder".
    pub fn resolve_icon(&self, icon_name: &str) -> Option<PathBuf> {
        self.locate(icon_name).ok()
    }
}
