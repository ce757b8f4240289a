// SPDX-License-Identifier: MIT OR Apache-2.0

//! The scoped configuration registry.
//!
//! [`Registry`] owns one [`ScopeTable`] per scope, the current scope name, the
//! format drivers and the collaborators used to find and read files. It is a plain
//! value: mutation takes `&mut self` and callers share it through a lock (see
//! [`global`](crate::service::global)).

use crate::adapters::{ConventionalPathStrategy, JsonParser, LocalFileSystem};
use crate::domain::{
    ConfigError, ConfigKey, ConfigRegistry, ConfigValue, Mapping, Result, ScopeTable,
    DEFAULT_SCOPE,
};
use crate::ports::{ConfigParser, FileSystem, LazyPathStrategy, ModuleResolver};
use crate::service::DriverRegistry;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Extension of files `load` decodes natively, without a driver lookup.
pub const NATIVE_EXTENSION: &str = "json";

/// A process-wide style, scoped key-value configuration registry.
///
/// # Examples
///
/// ```rust
/// use scopecfg::prelude::*;
/// use scopecfg::service::Registry;
///
/// # fn main() -> Result<()> {
/// let mut registry = Registry::new();
/// registry.parse(r#"{"host": "localhost", "port": 5432}"#, "json", "db", None)?;
/// assert_eq!(registry.get("db.port", None)?, Some(ConfigValue::from(5432)));
///
/// registry.set_scope("tenant-a");
/// assert!(!registry.has("db", None));
/// assert!(registry.has("db", Some(DEFAULT_SCOPE)));
/// # Ok(())
/// # }
/// ```
pub struct Registry {
    scopes: HashMap<String, ScopeTable>,
    current: String,
    drivers: DriverRegistry,
    fs: Box<dyn FileSystem>,
    lazy: Option<Box<dyn LazyPathStrategy>>,
}

impl Registry {
    /// Creates a registry with the stock drivers, the local filesystem and no
    /// lazy loading.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a new registry builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scopecfg::adapters::NoModule;
    /// use scopecfg::domain::ConfigRegistry;
    /// use scopecfg::service::Registry;
    ///
    /// let registry = Registry::builder()
    ///     .default_scope("main")
    ///     .with_conventional_paths("/etc/shop", "json", Box::new(NoModule))
    ///     .build();
    /// assert_eq!(registry.current_scope(), "main");
    /// ```
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Creates a registry that lazy-loads from the OS configuration directory of
    /// the application.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use scopecfg::service::Registry;
    ///
    /// # fn main() -> scopecfg::domain::Result<()> {
    /// let registry = Registry::with_defaults("myapp", "com.example")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_defaults(app_name: &str, qualifier: &str) -> Result<Self> {
        let strategy = ConventionalPathStrategy::from_default_location(app_name, qualifier)?;
        Ok(Self::builder()
            .with_lazy_path_strategy(Box::new(strategy))
            .build())
    }

    /// Returns the table of `scope`, if that scope has been used.
    pub fn scope_table(&self, scope: &str) -> Option<&ScopeTable> {
        self.scopes.get(scope)
    }

    /// Returns the names of all known scopes, sorted.
    pub fn scopes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.scopes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns `true` if `scope` has a table.
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes.contains_key(scope)
    }

    /// Returns the format drivers.
    pub fn drivers(&self) -> &DriverRegistry {
        &self.drivers
    }

    /// Returns the format drivers for registration.
    pub fn drivers_mut(&mut self) -> &mut DriverRegistry {
        &mut self.drivers
    }

    fn resolve_scope(&self, scope: Option<&str>) -> String {
        match scope {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.current.clone(),
        }
    }

    fn table_mut(&mut self, scope: &str) -> &mut ScopeTable {
        self.scopes.entry(scope.to_string()).or_default()
    }

    fn lookup(&self, key: &ConfigKey, scope: &str) -> Option<&ConfigValue> {
        let top = self.scopes.get(scope)?.get(key.top())?;
        match key.sub() {
            Some(sub) => top.get_key(sub),
            None => Some(top),
        }
    }

    /// Stores a parsed document under `name`, or into the top-level table.
    fn store_document(
        &mut self,
        document: ConfigValue,
        name: &str,
        scope: &str,
    ) -> Result<ConfigValue> {
        match document {
            ConfigValue::Mapping(mapping) if name.is_empty() => Ok(self.merge(mapping, Some(scope))),
            ConfigValue::Mapping(mapping) => Ok(self.merge_into(name, mapping, Some(scope))),
            other if name.is_empty() => Err(ConfigError::ParseError {
                message: format!(
                    "Cannot merge a {} document without a target key",
                    other.type_name()
                ),
                source: None,
            }),
            other => {
                tracing::trace!("Storing {} document at '{}'", other.type_name(), name);
                self.table_mut(scope).insert(name, other.clone());
                Ok(other)
            }
        }
    }

    fn load_file(&mut self, path: &Path, name: &str, scope: &str) -> Result<ConfigValue> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let document = match extension.as_str() {
            NATIVE_EXTENSION => JsonParser.parse(&self.fs.read_to_string(path)?)?,
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => {
                crate::adapters::YamlParser.parse(&self.fs.read_to_string(path)?)?
            }
            _ => {
                let parser = self.drivers.resolve(&extension)?;
                parser.parse(&self.fs.read_to_string(path)?)?
            }
        };

        self.store_document(document, &name.to_lowercase(), scope)
    }

    /// Tries to materialize the missing top-level key `top` of `scope` from its
    /// conventional file.
    fn lazy_load(&mut self, top: &str, scope: &str) -> Result<()> {
        let Some(strategy) = &self.lazy else {
            return Ok(());
        };
        let Some(path) = strategy.candidate_path(top) else {
            return Ok(());
        };

        if !self.fs.is_file(&path) {
            tracing::debug!("No lazy-load file for '{}' at {}", top, path.display());
            return Ok(());
        }

        tracing::debug!(
            "Lazy-loading '{}' into scope '{}' from {}",
            top,
            scope,
            path.display()
        );
        if let Err(e) = self.load_file(&path, top, scope) {
            tracing::warn!("Failed to lazy-load '{}' from {}: {}", top, path.display(), e);
            return Err(e);
        }
        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("current", &self.current)
            .field("scopes", &self.scopes)
            .field("drivers", &self.drivers)
            .field("lazy_loading", &self.lazy.is_some())
            .finish_non_exhaustive()
    }
}

impl ConfigRegistry for Registry {
    fn set_scope(&mut self, scope: &str) {
        tracing::trace!("Switching to scope '{}'", scope);
        self.table_mut(scope);
        self.current = scope.to_string();
    }

    fn current_scope(&self) -> &str {
        &self.current
    }

    fn reset(&mut self, scope: Option<&str>) {
        let scope = self.resolve_scope(scope);
        tracing::trace!("Resetting scope '{}'", scope);
        self.scopes.insert(scope, ScopeTable::new());
    }

    fn reset_all(&mut self) {
        tracing::trace!("Resetting all scopes");
        self.scopes.clear();
    }

    fn set_value(&mut self, name: &str, value: ConfigValue, scope: Option<&str>) -> ConfigValue {
        let scope = self.resolve_scope(scope);
        let table = self.table_mut(&scope);
        if name.is_empty() {
            return table.to_value();
        }

        let key = ConfigKey::from(name);
        tracing::trace!("Setting '{}' in scope '{}'", key, scope);
        match key.sub() {
            None => {
                table.insert(key.top(), value.clone());
            }
            Some(sub) => {
                table
                    .get_or_insert_with(key.top(), ConfigValue::empty_mapping)
                    .set_key(sub, value.clone());
            }
        }
        value
    }

    fn merge_into(&mut self, target: &str, mapping: Mapping, scope: Option<&str>) -> ConfigValue {
        if target.is_empty() {
            return self.merge(mapping, scope);
        }

        let scope = self.resolve_scope(scope);
        tracing::trace!("Merging {} keys into '{}' in scope '{}'", mapping.len(), target, scope);
        let entry = self
            .table_mut(&scope)
            .get_or_insert_with(target, ConfigValue::empty_mapping);
        entry.merge_shallow(mapping);
        entry.clone()
    }

    fn merge(&mut self, mapping: Mapping, scope: Option<&str>) -> ConfigValue {
        let scope = self.resolve_scope(scope);
        tracing::trace!("Merging {} top-level keys into scope '{}'", mapping.len(), scope);
        let table = self.table_mut(&scope);
        table.merge(mapping);
        table.to_value()
    }

    fn get(&mut self, name: &str, scope: Option<&str>) -> Result<Option<ConfigValue>> {
        let scope = self.resolve_scope(scope);
        if name.is_empty() {
            return Ok(self.scopes.get(&scope).map(ScopeTable::to_value));
        }

        let key = ConfigKey::from(name);
        if key.is_nested() {
            let materialized = self
                .scopes
                .get(&scope)
                .is_some_and(|table| table.contains(key.top()));
            if !materialized {
                self.lazy_load(key.top(), &scope)?;
            }
        }

        Ok(self.lookup(&key, &scope).cloned())
    }

    fn has(&self, name: &str, scope: Option<&str>) -> bool {
        if name.is_empty() {
            return false;
        }
        let scope = self.resolve_scope(scope);
        self.lookup(&ConfigKey::from(name), &scope).is_some()
    }

    fn load(
        &mut self,
        file_or_content: &str,
        name: &str,
        scope: Option<&str>,
    ) -> Result<ConfigValue> {
        let scope = self.resolve_scope(scope);
        self.table_mut(&scope);

        let path = Path::new(file_or_content);
        if !self.fs.is_file(path) {
            return self.parse(file_or_content, "", name, Some(&scope));
        }

        tracing::debug!("Loading {} into scope '{}'", path.display(), scope);
        self.load_file(path, name, &scope)
    }

    fn parse(
        &mut self,
        source: &str,
        format: &str,
        name: &str,
        scope: Option<&str>,
    ) -> Result<ConfigValue> {
        let scope = self.resolve_scope(scope);
        let path = Path::new(source);

        let format = if format.is_empty() {
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or_default()
                .to_string()
        } else {
            format.to_string()
        };

        let parser = self.drivers.resolve(&format)?;
        let document = if self.fs.is_file(path) {
            parser.parse(&self.fs.read_to_string(path)?)?
        } else {
            parser.parse(source)?
        };

        self.store_document(document, &name.to_lowercase(), &scope)
    }
}

/// Builder for constructing a [`Registry`].
///
/// # Examples
///
/// ```rust
/// use scopecfg::adapters::JsonParser;
/// use scopecfg::domain::ConfigRegistry;
/// use scopecfg::service::RegistryBuilder;
///
/// let mut registry = RegistryBuilder::new()
///     .with_driver("myapp::Json", || Box::new(JsonParser))
///     .build();
/// assert!(registry.parse("[1, 2]", "myapp::Json", "ports", None).is_ok());
/// ```
#[must_use]
pub struct RegistryBuilder {
    default_scope: String,
    drivers: DriverRegistry,
    fs: Option<Box<dyn FileSystem>>,
    lazy: Option<Box<dyn LazyPathStrategy>>,
}

impl RegistryBuilder {
    /// Creates a builder with the stock drivers and the default scope.
    pub fn new() -> Self {
        Self {
            default_scope: DEFAULT_SCOPE.to_string(),
            drivers: DriverRegistry::with_builtins(),
            fs: None,
            lazy: None,
        }
    }

    /// Sets the scope the registry starts in.
    pub fn default_scope(mut self, scope: impl Into<String>) -> Self {
        self.default_scope = scope.into();
        self
    }

    /// Registers an additional driver.
    pub fn with_driver<F>(mut self, format: &str, factory: F) -> Self
    where
        F: Fn() -> Box<dyn ConfigParser> + Send + Sync + 'static,
    {
        self.drivers.register(format, factory);
        self
    }

    /// Replaces the whole driver registry.
    pub fn with_drivers(mut self, drivers: DriverRegistry) -> Self {
        self.drivers = drivers;
        self
    }

    /// Uses `fs` for every existence check and file read.
    pub fn with_file_system(mut self, fs: Box<dyn FileSystem>) -> Self {
        self.fs = Some(fs);
        self
    }

    /// Enables lazy loading with `strategy`.
    pub fn with_lazy_path_strategy(mut self, strategy: Box<dyn LazyPathStrategy>) -> Self {
        self.lazy = Some(strategy);
        self
    }

    /// Enables lazy loading from `<root>/[<module>/]status/<key>.<extension>`.
    pub fn with_conventional_paths(
        self,
        root: impl Into<PathBuf>,
        extension: &str,
        module_resolver: Box<dyn ModuleResolver>,
    ) -> Self {
        let strategy =
            ConventionalPathStrategy::new(root, extension).with_module_resolver(module_resolver);
        self.with_lazy_path_strategy(Box::new(strategy))
    }

    /// Builds the registry.
    pub fn build(self) -> Registry {
        let mut scopes = HashMap::new();
        scopes.insert(self.default_scope.clone(), ScopeTable::new());

        Registry {
            scopes,
            current: self.default_scope,
            drivers: self.drivers,
            fs: self.fs.unwrap_or_else(|| Box::new(LocalFileSystem::new())),
            lazy: self.lazy,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StaticModuleResolver;
    use std::io;

    // In-memory filesystem for testing
    #[derive(Default)]
    struct MemoryFs {
        files: HashMap<PathBuf, String>,
    }

    impl MemoryFs {
        fn with_file(mut self, path: &str, content: &str) -> Self {
            self.files.insert(PathBuf::from(path), content.to_string());
            self
        }
    }

    impl FileSystem for MemoryFs {
        fn is_file(&self, path: &Path) -> bool {
            self.files.contains_key(path)
        }

        fn read_to_string(&self, path: &Path) -> Result<String> {
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "missing").into())
        }
    }

    // Parses `key=value` lines into a flat mapping of strings
    #[derive(Default)]
    struct PairsParser;

    impl ConfigParser for PairsParser {
        fn parse(&self, content: &str) -> Result<ConfigValue> {
            content
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| {
                    line.split_once('=')
                        .map(|(k, v)| (k.trim().to_string(), ConfigValue::from(v.trim())))
                        .ok_or_else(|| ConfigError::ParseError {
                            message: format!("bad line: {}", line),
                            source: None,
                        })
                })
                .collect::<Result<Mapping>>()
                .map(ConfigValue::Mapping)
        }

        fn supported_extensions(&self) -> &[&str] {
            &["pairs"]
        }
    }

    fn registry_with(fs: MemoryFs) -> Registry {
        Registry::builder()
            .with_file_system(Box::new(fs))
            .with_driver("pairs", || Box::new(PairsParser))
            .with_conventional_paths("/conf", "json", Box::new(StaticModuleResolver::new("")))
            .build()
    }

    fn mapping(pairs: &[(&str, i64)]) -> Mapping {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), ConfigValue::from(*v)))
            .collect()
    }

    #[test]
    fn test_starts_in_default_scope() {
        let registry = Registry::new();
        assert_eq!(registry.current_scope(), DEFAULT_SCOPE);
        assert!(registry.has_scope(DEFAULT_SCOPE));
        assert_eq!(registry.scopes(), vec![DEFAULT_SCOPE]);
    }

    #[test]
    fn test_set_value_bare_key() {
        let mut registry = Registry::new();
        let stored = registry.set_value("Foo", ConfigValue::from(1), None);

        assert_eq!(stored, ConfigValue::from(1));
        assert_eq!(registry.get("foo", None).unwrap(), Some(ConfigValue::from(1)));
        assert!(registry.has("FOO", None));
    }

    #[test]
    fn test_set_value_dotted_key() {
        let mut registry = Registry::new();
        registry.set_value("Top.Sub", ConfigValue::from("v"), None);

        assert_eq!(registry.get("top.Sub", None).unwrap(), Some(ConfigValue::from("v")));
        assert!(registry.get("top.sub", None).unwrap().is_none());

        let top = registry.get("TOP", None).unwrap().unwrap();
        assert_eq!(top.get_key("Sub"), Some(&ConfigValue::from("v")));
    }

    #[test]
    fn test_set_value_replaces_scalar_top() {
        let mut registry = Registry::new();
        registry.set_value("top", ConfigValue::from(5), None);
        registry.set_value("top.sub", ConfigValue::from(6), None);

        let top = registry.get("top", None).unwrap().unwrap();
        assert!(top.is_mapping());
        assert_eq!(top.get_key("sub"), Some(&ConfigValue::from(6)));
    }

    #[test]
    fn test_set_value_empty_name_returns_table() {
        let mut registry = Registry::new();
        registry.set_value("a", ConfigValue::from(1), None);

        let table = registry.set_value("", ConfigValue::from(99), None);
        assert_eq!(table, ConfigValue::Mapping(mapping(&[("a", 1)])));
    }

    #[test]
    fn test_merge_is_shallow() {
        let mut registry = Registry::new();
        registry.merge(mapping(&[("a", 1), ("b", 2)]), Some("s"));

        let merged = registry.merge(mapping(&[("B", 3), ("c", 4)]), Some("s"));
        assert_eq!(merged, ConfigValue::Mapping(mapping(&[("a", 1), ("b", 3), ("c", 4)])));
    }

    #[test]
    fn test_merge_into_leaves_siblings() {
        let mut registry = Registry::new();
        registry.set_value("other", ConfigValue::from(true), None);
        registry.merge_into("db", mapping(&[("port", 1), ("pool", 5)]), None);

        let merged = registry.merge_into("DB", mapping(&[("port", 2)]), None);
        assert_eq!(merged, ConfigValue::Mapping(mapping(&[("port", 2), ("pool", 5)])));
        assert_eq!(registry.get("other", None).unwrap(), Some(ConfigValue::from(true)));
    }

    #[test]
    fn test_merge_into_empty_target_merges_table() {
        let mut registry = Registry::new();
        let merged = registry.merge_into("", mapping(&[("x", 1)]), None);
        assert_eq!(merged, ConfigValue::Mapping(mapping(&[("x", 1)])));
    }

    #[test]
    fn test_scopes_are_isolated() {
        let mut registry = Registry::new();
        registry.set_value("k", ConfigValue::from(1), None);
        registry.set_scope("other");

        assert_eq!(registry.current_scope(), "other");
        assert!(!registry.has("k", None));
        assert!(registry.has("k", Some(DEFAULT_SCOPE)));
    }

    #[test]
    fn test_reset_one_scope() {
        let mut registry = Registry::new();
        registry.set_value("k", ConfigValue::from(1), Some("a"));
        registry.set_value("k", ConfigValue::from(2), Some("b"));

        registry.reset(Some("a"));
        assert!(!registry.has("k", Some("a")));
        assert!(registry.has("k", Some("b")));

        registry.reset_all();
        assert!(!registry.has("k", Some("b")));
        assert!(registry.scopes().is_empty());
    }

    #[test]
    fn test_null_is_present() {
        let mut registry = Registry::new();
        registry.set_value("nothing", ConfigValue::Null, None);
        assert!(registry.has("nothing", None));
        assert_eq!(registry.get("nothing", None).unwrap(), Some(ConfigValue::Null));
    }

    #[test]
    fn test_get_empty_name() {
        let mut registry = Registry::new();
        assert_eq!(
            registry.get("", None).unwrap(),
            Some(ConfigValue::empty_mapping())
        );
        assert!(registry.get("", Some("unused")).unwrap().is_none());
        assert!(!registry.has("", None));
    }

    #[test]
    fn test_get_sequence_index() {
        let mut registry = Registry::new();
        registry.set_value("servers", ConfigValue::from(vec!["a", "b"]), None);
        assert_eq!(registry.get("servers.1", None).unwrap(), Some(ConfigValue::from("b")));
    }

    #[test]
    fn test_set_sequence_index_keeps_elements() {
        let mut registry = Registry::new();
        registry.set_value("servers", ConfigValue::from(vec!["a", "b"]), None);
        registry.set_value("servers.1", ConfigValue::from("c"), None);

        assert_eq!(registry.get("servers.0", None).unwrap(), Some(ConfigValue::from("a")));
        assert_eq!(registry.get("servers.1", None).unwrap(), Some(ConfigValue::from("c")));

        registry.set_value("servers.2", ConfigValue::from("d"), None);
        assert_eq!(
            registry.get("servers", None).unwrap(),
            Some(ConfigValue::from(vec!["a", "c", "d"]))
        );

        registry.set_value("servers.backup", ConfigValue::from("e"), None);
        assert_eq!(registry.get("servers.0", None).unwrap(), Some(ConfigValue::from("a")));
        assert_eq!(registry.get("servers.backup", None).unwrap(), Some(ConfigValue::from("e")));
    }

    #[test]
    fn test_lazy_load_into_looked_up_scope() {
        let fs = MemoryFs::default().with_file("/conf/status/moduleconfig.json", r#"{"x": 5}"#);
        let mut registry = registry_with(fs);

        assert!(!registry.has("moduleconfig", Some("s")));
        assert_eq!(
            registry.get("moduleconfig.x", Some("s")).unwrap(),
            Some(ConfigValue::from(5))
        );
        assert!(registry.has("moduleconfig", Some("s")));
        assert!(!registry.has("moduleconfig", None));
    }

    #[test]
    fn test_lazy_load_only_on_dotted_get() {
        let fs = MemoryFs::default().with_file("/conf/status/mail.json", r#"{"x": 5}"#);
        let mut registry = registry_with(fs);

        assert!(registry.get("mail", None).unwrap().is_none());
        assert!(!registry.has("mail.x", None));
        assert!(registry.get("mail.x", None).unwrap().is_some());
    }

    #[test]
    fn test_lazy_load_missing_file() {
        let mut registry = registry_with(MemoryFs::default());
        assert!(registry.get("missing.key", None).unwrap().is_none());
        assert!(!registry.has("missing", None));
    }

    #[test]
    fn test_lazy_load_parse_failure_propagates() {
        let fs = MemoryFs::default().with_file("/conf/status/broken.json", "{not json");
        let mut registry = registry_with(fs);

        let result = registry.get("broken.x", None);
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_lazy_load_uses_module() {
        let fs = MemoryFs::default().with_file("/conf/admin/status/menu.json", r#"{"size": 3}"#);
        let mut registry = Registry::builder()
            .with_file_system(Box::new(fs))
            .with_conventional_paths("/conf", ".json", Box::new(StaticModuleResolver::new("admin")))
            .build();

        assert_eq!(registry.get("menu.size", None).unwrap(), Some(ConfigValue::from(3)));
    }

    #[test]
    fn test_no_lazy_strategy() {
        let fs = MemoryFs::default().with_file("/conf/status/mail.json", r#"{"x": 5}"#);
        let mut registry = Registry::builder().with_file_system(Box::new(fs)).build();
        assert!(registry.get("mail.x", None).unwrap().is_none());
    }

    #[test]
    fn test_load_native_json_file() {
        let fs = MemoryFs::default().with_file("/etc/app.json", r#"{"Name": "shop", "port": 80}"#);
        let mut registry = registry_with(fs);

        registry.load("/etc/app.json", "", None).unwrap();
        assert_eq!(registry.get("name", None).unwrap(), Some(ConfigValue::from("shop")));

        let stored = registry.load("/etc/app.json", "App", None).unwrap();
        assert_eq!(stored.get_key("port"), Some(&ConfigValue::from(80)));
        assert_eq!(registry.get("app.Name", None).unwrap(), Some(ConfigValue::from("shop")));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_load_yaml_file() {
        let fs = MemoryFs::default().with_file("/etc/app.yml", "db:\n  port: 5432\n");
        let mut registry = registry_with(fs);

        registry.load("/etc/app.yml", "", None).unwrap();
        assert_eq!(registry.get("db.port", None).unwrap(), Some(ConfigValue::from(5432)));
    }

    #[test]
    fn test_load_delegates_to_driver() {
        let fs = MemoryFs::default().with_file("/etc/app.pairs", "host = example\n");
        let mut registry = registry_with(fs);

        registry.load("/etc/app.pairs", "net", Some("s")).unwrap();
        assert_eq!(
            registry.get("net.host", Some("s")).unwrap(),
            Some(ConfigValue::from("example"))
        );
    }

    #[test]
    fn test_load_non_file_uses_extension() {
        let mut registry = registry_with(MemoryFs::default());
        let result = registry.load("data.unknownext", "", None);
        assert!(matches!(result, Err(ConfigError::DriverResolution { .. })));
    }

    #[test]
    fn test_load_ensures_scope() {
        let mut registry = registry_with(MemoryFs::default());
        let _ = registry.load("nothing.unknownext", "", Some("fresh"));
        assert!(registry.has_scope("fresh"));
    }

    #[test]
    fn test_parse_inline_content() {
        let mut registry = registry_with(MemoryFs::default());
        registry.parse("a = 1\nb = 2", "pairs", "", None).unwrap();

        assert_eq!(registry.get("a", None).unwrap(), Some(ConfigValue::from("1")));
        assert_eq!(registry.get("b", None).unwrap(), Some(ConfigValue::from("2")));
    }

    #[test]
    fn test_parse_driver_error_propagates() {
        let mut registry = registry_with(MemoryFs::default());
        let result = registry.parse("no equals sign", "pairs", "", None);
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_parse_scalar_document() {
        let mut registry = registry_with(MemoryFs::default());

        let stored = registry.parse("[1, 2]", "json", "Ports", None).unwrap();
        assert!(stored.is_sequence());
        assert_eq!(registry.get("ports.0", None).unwrap(), Some(ConfigValue::from(1)));

        let result = registry.parse("[1, 2]", "json", "", None);
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_parse_unknown_format() {
        let mut registry = registry_with(MemoryFs::default());
        let result = registry.parse("data.unknownext", "", "", None);
        match result {
            Err(ConfigError::DriverResolution { driver }) => {
                assert_eq!(driver, "scopecfg::driver::Unknownext");
            }
            _ => panic!("expected a driver resolution error"),
        }
    }

    #[test]
    fn test_get_or_default() {
        let mut registry = Registry::new();
        registry.set_value("present", ConfigValue::from(1), None);

        assert_eq!(
            registry.get_or_default("present", ConfigValue::from(0), None).unwrap(),
            ConfigValue::from(1)
        );
        assert_eq!(
            registry.get_or_default("absent.key", ConfigValue::from(0), None).unwrap(),
            ConfigValue::from(0)
        );
    }
}
