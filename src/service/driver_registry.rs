// SPDX-License-Identifier: MIT OR Apache-2.0

//! Format driver registry.
//!
//! Drivers are registered by factory under a *driver identifier*. A plain format
//! name such as `json` maps to the conventional identifier
//! `scopecfg::driver::Json`; a name that already contains `::` is taken as a
//! fully qualified identifier and used verbatim, which is how hosts plug in their
//! own drivers.

use crate::adapters::JsonParser;
use crate::domain::{ConfigError, Result};
use crate::ports::ConfigParser;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Namespace prefix of conventional driver identifiers.
pub const DRIVER_NAMESPACE: &str = "scopecfg::driver::";

/// A factory producing a fresh driver instance.
pub type DriverFactory = Arc<dyn Fn() -> Box<dyn ConfigParser> + Send + Sync>;

/// Returns the driver identifier for a format name or qualified identifier.
///
/// # Examples
///
/// ```rust
/// use scopecfg::service::driver_identifier;
///
/// assert_eq!(driver_identifier("json"), "scopecfg::driver::Json");
/// assert_eq!(driver_identifier("YAML"), "scopecfg::driver::Yaml");
/// assert_eq!(driver_identifier("myapp::drivers::Ini"), "myapp::drivers::Ini");
/// ```
pub fn driver_identifier(format: &str) -> String {
    if format.contains("::") {
        return format.to_string();
    }

    let lower = format.to_lowercase();
    let mut chars = lower.chars();
    let title: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("{}{}", DRIVER_NAMESPACE, title)
}

/// Registry of available format drivers.
///
/// # Examples
///
/// ```rust
/// use scopecfg::adapters::JsonParser;
/// use scopecfg::service::DriverRegistry;
///
/// let mut drivers = DriverRegistry::new();
/// drivers.register_parser::<JsonParser>();
///
/// let parser = drivers.resolve("json").unwrap();
/// assert!(parser.parse("{}").unwrap().is_mapping());
/// assert!(drivers.resolve("ini").is_err());
/// ```
#[derive(Clone, Default)]
pub struct DriverRegistry {
    drivers: HashMap<String, DriverFactory>,
}

impl DriverRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            drivers: HashMap::new(),
        }
    }

    /// Creates a registry holding the stock drivers compiled into this build.
    ///
    /// `json` is always present; `yaml`/`yml` and `toml` follow the crate
    /// features of the same name.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_parser::<JsonParser>();

        #[cfg(feature = "yaml")]
        registry.register_parser::<crate::adapters::YamlParser>();

        #[cfg(feature = "toml")]
        registry.register_parser::<crate::adapters::TomlParser>();

        registry
    }

    /// Registers `factory` for a format name or qualified identifier, replacing
    /// any previous driver with the same identifier.
    pub fn register<F>(&mut self, format: &str, factory: F)
    where
        F: Fn() -> Box<dyn ConfigParser> + Send + Sync + 'static,
    {
        let identifier = driver_identifier(format);
        tracing::trace!("Registering configuration driver '{}'", identifier);
        self.drivers.insert(identifier, Arc::new(factory));
    }

    /// Registers a default-constructible parser type under every extension it
    /// reports in [`ConfigParser::supported_extensions`].
    pub fn register_parser<P>(&mut self)
    where
        P: ConfigParser + Default + 'static,
    {
        let parser = P::default();
        for extension in parser.supported_extensions() {
            self.register(extension, || Box::new(P::default()));
        }
    }

    /// Returns `true` if a driver is registered for `format`.
    pub fn contains(&self, format: &str) -> bool {
        self.drivers.contains_key(&driver_identifier(format))
    }

    /// Returns the registered driver identifiers, sorted.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.drivers.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Instantiates the driver for `format`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DriverResolution` if nothing is registered under the
    /// resolved identifier.
    pub fn resolve(&self, format: &str) -> Result<Box<dyn ConfigParser>> {
        let identifier = driver_identifier(format);
        match self.drivers.get(&identifier) {
            Some(factory) => {
                tracing::debug!("Resolved configuration driver '{}'", identifier);
                Ok(factory())
            }
            None => Err(ConfigError::driver_not_found(identifier)),
        }
    }
}

impl fmt::Debug for DriverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DriverRegistry")
            .field("drivers", &self.identifiers())
            .finish()
    }
}
