// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conventional lazy-load paths.
//!
//! This module provides the stock [`LazyPathStrategy`], which looks for a missing
//! top-level key `name` at
//!
//! ```text
//! <root>/[<module>/]status/<name>.<extension>
//! ```
//!
//! together with two simple [`ModuleResolver`]s.

use crate::domain::{ConfigError, Result};
use crate::ports::{LazyPathStrategy, ModuleResolver};
use directories::ProjectDirs;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Directory, below the root or module directory, holding lazily loaded files.
pub const LAZY_LOAD_DIR: &str = "status";

/// Extension used when none is configured; matches the native load format.
pub const DEFAULT_EXTENSION: &str = "json";

/// A module resolver for hosts without modules.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoModule;

impl ModuleResolver for NoModule {
    fn current_module(&self) -> Option<String> {
        None
    }
}

/// A module resolver that always reports the same module.
///
/// # Examples
///
/// ```rust
/// use scopecfg::adapters::StaticModuleResolver;
/// use scopecfg::ports::ModuleResolver;
///
/// let resolver = StaticModuleResolver::new("admin");
/// assert_eq!(resolver.current_module().as_deref(), Some("admin"));
/// ```
#[derive(Debug, Clone)]
pub struct StaticModuleResolver(String);

impl StaticModuleResolver {
    /// Creates a resolver reporting `module`.
    pub fn new(module: impl Into<String>) -> Self {
        StaticModuleResolver(module.into())
    }
}

impl ModuleResolver for StaticModuleResolver {
    fn current_module(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// The conventional `<root>/[<module>/]status/<name>.<ext>` strategy.
///
/// Names and module names that are not a single plain path segment (for example
/// `..` or `a/b`) never produce a candidate.
///
/// # Examples
///
/// ```rust
/// use scopecfg::adapters::{ConventionalPathStrategy, StaticModuleResolver};
/// use scopecfg::ports::LazyPathStrategy;
/// use std::path::PathBuf;
///
/// let strategy = ConventionalPathStrategy::new("/etc/shop", "json");
/// assert_eq!(
///     strategy.candidate_path("payment"),
///     Some(PathBuf::from("/etc/shop/status/payment.json"))
/// );
///
/// let strategy = strategy.with_module_resolver(Box::new(StaticModuleResolver::new("admin")));
/// assert_eq!(
///     strategy.candidate_path("payment"),
///     Some(PathBuf::from("/etc/shop/admin/status/payment.json"))
/// );
/// ```
pub struct ConventionalPathStrategy {
    root: PathBuf,
    extension: String,
    modules: Box<dyn ModuleResolver>,
}

impl ConventionalPathStrategy {
    /// Creates a strategy rooted at `root` using `extension` (with or without the
    /// leading dot) and no module.
    pub fn new(root: impl Into<PathBuf>, extension: impl AsRef<str>) -> Self {
        Self {
            root: root.into(),
            extension: extension.as_ref().trim_start_matches('.').to_string(),
            modules: Box::new(NoModule),
        }
    }

    /// Creates a strategy rooted at the OS configuration directory of the
    /// application, using the default extension.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
                source_name: "lazy-load".to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Ok(Self::new(proj_dirs.config_dir(), DEFAULT_EXTENSION))
    }

    /// Uses `resolver` to find the current module.
    pub fn with_module_resolver(mut self, resolver: Box<dyn ModuleResolver>) -> Self {
        self.modules = resolver;
        self
    }

    /// Returns the configuration root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the file extension, without the leading dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

impl fmt::Debug for ConventionalPathStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConventionalPathStrategy")
            .field("root", &self.root)
            .field("extension", &self.extension)
            .finish_non_exhaustive()
    }
}

fn is_plain_segment(segment: &str) -> bool {
    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !segment.contains(['/', '\\'])
}

impl LazyPathStrategy for ConventionalPathStrategy {
    fn candidate_path(&self, top_key: &str) -> Option<PathBuf> {
        if !is_plain_segment(top_key) {
            tracing::debug!("No lazy-load path for unsafe key '{}'", top_key);
            return None;
        }

        let mut path = self.root.clone();
        match self.modules.current_module() {
            Some(module) if module.is_empty() => {}
            Some(module) if is_plain_segment(&module) => path.push(module),
            Some(module) => {
                tracing::debug!("Ignoring unsafe module name '{}'", module);
                return None;
            }
            None => {}
        }
        path.push(LAZY_LOAD_DIR);

        if self.extension.is_empty() {
            path.push(top_key);
        } else {
            path.push(format!("{}.{}", top_key, self.extension));
        }
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_without_module() {
        let strategy = ConventionalPathStrategy::new("/srv/conf", ".json");
        assert_eq!(strategy.extension(), "json");
        assert_eq!(
            strategy.candidate_path("mail"),
            Some(PathBuf::from("/srv/conf/status/mail.json"))
        );
    }

    #[test]
    fn test_candidate_with_module() {
        let strategy = ConventionalPathStrategy::new("/srv/conf", "yaml")
            .with_module_resolver(Box::new(StaticModuleResolver::new("shop")));
        assert_eq!(
            strategy.candidate_path("mail"),
            Some(PathBuf::from("/srv/conf/shop/status/mail.yaml"))
        );
    }

    #[test]
    fn test_empty_module_is_skipped() {
        let strategy = ConventionalPathStrategy::new("/srv/conf", "json")
            .with_module_resolver(Box::new(StaticModuleResolver::new("")));
        assert_eq!(
            strategy.candidate_path("mail"),
            Some(PathBuf::from("/srv/conf/status/mail.json"))
        );
    }

    #[test]
    fn test_unsafe_keys_are_rejected() {
        let strategy = ConventionalPathStrategy::new("/srv/conf", "json");
        assert!(strategy.candidate_path("..").is_none());
        assert!(strategy.candidate_path("../secrets").is_none());
        assert!(strategy.candidate_path("a/b").is_none());
        assert!(strategy.candidate_path("").is_none());
    }

    #[test]
    fn test_unsafe_module_is_rejected() {
        let strategy = ConventionalPathStrategy::new("/srv/conf", "json")
            .with_module_resolver(Box::new(StaticModuleResolver::new("../etc")));
        assert!(strategy.candidate_path("mail").is_none());
    }

    #[test]
    fn test_empty_extension() {
        let strategy = ConventionalPathStrategy::new("/srv/conf", "");
        assert_eq!(
            strategy.candidate_path("mail"),
            Some(PathBuf::from("/srv/conf/status/mail"))
        );
    }

    #[test]
    fn test_no_module_resolver() {
        assert!(NoModule.current_module().is_none());
    }
}
