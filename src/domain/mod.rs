// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module contains the core domain types of the registry: values, dotted
//! keys, scope tables and errors. It is independent of any external concerns.

pub mod config_key;
pub mod config_value;
pub mod errors;
pub mod scope;
pub mod service;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_value::{ConfigValue, Mapping};
pub use errors::{ConfigError, Result};
pub use scope::{ScopeTable, DEFAULT_SCOPE};
pub use service::ConfigRegistry;
