// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filesystem access trait definition.
//!
//! The registry never touches `std::fs` directly. Every existence check and file
//! read goes through a [`FileSystem`], which keeps the storage logic testable and
//! lets hosts sandbox or virtualize configuration files.

use crate::domain::Result;
use std::path::Path;

/// Read-only access to configuration files.
///
/// # Examples
///
/// ```rust
/// use scopecfg::domain::{ConfigError, Result};
/// use scopecfg::ports::FileSystem;
/// use std::path::Path;
///
/// struct Empty;
///
/// impl FileSystem for Empty {
///     fn is_file(&self, _path: &Path) -> bool {
///         false
///     }
///
///     fn read_to_string(&self, path: &Path) -> Result<String> {
///         Err(ConfigError::IoError(std::io::Error::new(
///             std::io::ErrorKind::NotFound,
///             path.display().to_string(),
///         )))
///     }
/// }
///
/// assert!(!Empty.is_file(Path::new("app.json")));
/// ```
pub trait FileSystem: Send + Sync {
    /// Returns `true` if `path` names an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Reads the whole file at `path` as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> Result<String>;
}
