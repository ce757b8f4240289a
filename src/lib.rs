// SPDX-License-Identifier: MIT OR Apache-2.0

//! A scoped, process-wide configuration registry.
//!
//! Configuration lives in named scopes, each a table of lowercase top-level keys.
//! Values are addressed by bare keys (`"database"`) or dotted two-segment keys
//! (`"database.host"`). Writes merge shallowly, documents are loaded from files or
//! inline content through pluggable format drivers, and a dotted lookup of a
//! missing top-level key can lazily load it from a conventional file location.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and the registry contract (`ConfigKey`,
//!   `ConfigValue`, `ScopeTable`, `ConfigRegistry`, errors)
//! - **Ports**: Trait definitions for collaborators (`ConfigParser`, `FileSystem`,
//!   `ModuleResolver`, `LazyPathStrategy`)
//! - **Adapters**: Stock drivers, the local filesystem and the conventional
//!   lazy-load path strategy
//! - **Service**: The `Registry`, its builder, the driver registry and the
//!   process-wide instance
//!
//! # Features
//!
//! - **Scopes**: Independent namespaces with a switchable current scope
//! - **Dotted Keys**: Case-insensitive top-level keys with one level of nesting
//! - **Shallow Merge**: Bulk writes merge key-wise into existing mappings
//! - **Lazy Loading**: `<root>/[<module>/]status/<key>.<ext>` on a dotted miss
//! - **Extensible**: Register new format drivers by name or qualified identifier
//!
//! # Feature Flags
//!
//! - `yaml`: Enable YAML loading and the `Yaml` driver (default)
//! - `toml`: Enable the `Toml` driver (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use scopecfg::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let mut registry = Registry::new();
//!
//! registry.set_value("app.name", ConfigValue::from("shop"), None);
//! registry.parse(r#"{"host": "localhost", "port": 5432}"#, "json", "database", None)?;
//!
//! registry.set_scope("tenant-a");
//! registry.set_value("app.name", ConfigValue::from("tenant shop"), None);
//!
//! assert_eq!(
//!     registry.get("App.name", Some(DEFAULT_SCOPE))?,
//!     Some(ConfigValue::from("shop"))
//! );
//! assert_eq!(
//!     registry.get("database.port", Some(DEFAULT_SCOPE))?.and_then(|v| v.as_i64()),
//!     Some(5432)
//! );
//! assert!(!registry.has("database", None));
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigError, ConfigKey, ConfigRegistry, ConfigValue, Mapping, Result, ScopeTable,
        DEFAULT_SCOPE,
    };
    pub use crate::ports::{ConfigParser, FileSystem, LazyPathStrategy, ModuleResolver};
    pub use crate::service::{global, DriverRegistry, Registry, RegistryBuilder};

    // Re-export adapters based on feature flags
    pub use crate::adapters::{
        ConventionalPathStrategy, JsonParser, LocalFileSystem, NoModule, StaticModuleResolver,
    };
    #[cfg(feature = "toml")]
    pub use crate::adapters::TomlParser;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlParser;
}
