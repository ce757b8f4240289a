// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local filesystem adapter.

use crate::domain::{ConfigError, Result};
use crate::ports::FileSystem;
use std::fs;
use std::path::Path;

/// Maximum allowed size for a configuration file (10MB)
const MAX_CONFIG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// [`FileSystem`] backed by `std::fs`.
///
/// Read failures surface as `ConfigError::IoError`; files larger than 10MB are
/// refused with `ConfigError::SourceError`.
///
/// # Examples
///
/// ```rust
/// use scopecfg::adapters::LocalFileSystem;
/// use scopecfg::ports::FileSystem;
/// use std::path::Path;
///
/// let fs = LocalFileSystem::new();
/// assert!(!fs.is_file(Path::new("/nonexistent/app.json")));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    /// Creates a new local filesystem adapter.
    pub fn new() -> Self {
        LocalFileSystem
    }
}

impl FileSystem for LocalFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let metadata = fs::metadata(path)?;

        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::SourceError {
                source_name: "local-fs".to_string(),
                message: format!(
                    "Configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_CONFIG_FILE_SIZE
                ),
                source: None,
            });
        }

        Ok(fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_is_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let fs = LocalFileSystem::new();

        assert!(fs.is_file(temp_file.path()));
        assert!(!fs.is_file(temp_file.path().parent().unwrap()));
        assert!(!fs.is_file(Path::new("/nonexistent/path/app.json")));
    }

    #[test]
    fn test_read_to_string() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{{\"key\": \"value\"}}").unwrap();

        let content = LocalFileSystem::new()
            .read_to_string(temp_file.path())
            .unwrap();
        assert_eq!(content, "{\"key\": \"value\"}");
    }

    #[test]
    fn test_read_missing_file() {
        let result = LocalFileSystem::new().read_to_string(Path::new("/nonexistent/app.json"));
        match result {
            Err(ConfigError::IoError(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            _ => panic!("expected an I/O error"),
        }
    }

    #[test]
    fn test_read_oversized_file() {
        let temp_file = NamedTempFile::new().unwrap();
        temp_file
            .as_file()
            .set_len(MAX_CONFIG_FILE_SIZE + 1)
            .unwrap();

        let result = LocalFileSystem::new().read_to_string(temp_file.path());
        assert!(matches!(result, Err(ConfigError::SourceError { .. })));
    }
}
