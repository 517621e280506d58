//! Filesystem primitives used by the builder.
//! Every failure is reported together with the path that was being created.

use log::debug;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

/// Creates `path` and all of its missing parents.
pub fn ensure_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::io(path, e))
}

/// Writes `content` into a new file at `path`, creating parent directories.
///
/// The destination is assumed to be fresh: an existing file is an error and is
/// left untouched.
pub fn create_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }

    debug!("Writing file: {}", path.display());
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;
    file.write_all(content.as_bytes()).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_file_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a/b/c.txt");

        create_file(&path, "hello").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_create_file_refuses_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("file.txt");
        fs::write(&path, "original").unwrap();

        match create_file(&path, "new") {
            Err(Error::IoError { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("Expected IoError, got {other:?}"),
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }
}
