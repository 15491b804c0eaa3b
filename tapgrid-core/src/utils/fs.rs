//! Filesystem helpers mapping `std::io::Error` into [`CoreError::Filesystem`].

use crate::error::CoreError;
use std::fs;
use std::io;
use std::path::Path;

/// Ensures that a directory exists at `path`, creating parents as needed.
///
/// Fails if `path` exists but is not a directory.
pub fn ensure_dir_exists(path: &Path) -> Result<(), CoreError> {
    if path.exists() {
        if path.is_dir() {
            Ok(())
        } else {
            Err(CoreError::Filesystem {
                message: "Path exists but is not a directory".to_string(),
                path: path.to_path_buf(),
                source: io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    "Path exists but is not a directory",
                ),
            })
        }
    } else {
        fs::create_dir_all(path).map_err(|e| CoreError::Filesystem {
            message: "Failed to create directory".to_string(),
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Reads an optional text file.
///
/// A missing file is `Ok(None)`; any other read failure is returned to the
/// caller unchanged so it can be wrapped in a more specific error.
pub fn read_optional_to_string(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_exists_creates_nested() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a/b/c");
        ensure_dir_exists(&nested).unwrap();
        assert!(nested.is_dir());
        // Second call is a no-op.
        ensure_dir_exists(&nested).unwrap();
    }

    #[test]
    fn test_ensure_dir_exists_rejects_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("occupied");
        fs::write(&file, "x").unwrap();
        match ensure_dir_exists(&file) {
            Err(CoreError::Filesystem { path, .. }) => assert_eq!(path, file),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_read_optional_to_string() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("config.toml");
        assert!(read_optional_to_string(&file).unwrap().is_none());
        fs::write(&file, "[layout]\n").unwrap();
        assert_eq!(read_optional_to_string(&file).unwrap().as_deref(), Some("[layout]\n"));
    }
}
