// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser (driver) trait definition.
//!
//! This module defines the `ConfigParser` trait, the interface a format driver
//! implements to turn raw configuration content (JSON, YAML, TOML, ...) into a
//! [`ConfigValue`] tree.

use crate::domain::{ConfigValue, Result};

/// A trait for configuration format drivers.
///
/// A driver receives the full text of a configuration document and returns the
/// nested value it describes. Structure is preserved: nested mappings stay
/// nested, sequences stay sequences.
///
/// Drivers are registered in a
/// [`DriverRegistry`](crate::service::DriverRegistry) by factory and looked up by
/// identifier when the registry parses content.
///
/// # Examples
///
/// ```rust
/// use scopecfg::domain::{ConfigValue, Result};
/// use scopecfg::ports::ConfigParser;
///
/// struct LinesParser;
///
/// impl ConfigParser for LinesParser {
///     fn parse(&self, content: &str) -> Result<ConfigValue> {
///         Ok(content
///             .lines()
///             .filter_map(|line| line.split_once('='))
///             .map(|(k, v)| (k.trim(), v.trim()))
///             .collect())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["lines"]
///     }
/// }
///
/// let value = LinesParser.parse("host = localhost").unwrap();
/// assert_eq!(value.get_key("host").and_then(|v| v.as_str()), Some("localhost"));
/// ```
pub trait ConfigParser: Send + Sync {
    /// Parses configuration content into a value tree.
    ///
    /// # Returns
    ///
    /// * `Ok(ConfigValue)` - The parsed document
    /// * `Err(ConfigError::ParseError)` - The content is not valid for this format
    fn parse(&self, content: &str) -> Result<ConfigValue>;

    /// Returns the file extensions (without the leading dot) handled by this
    /// driver.
    fn supported_extensions(&self) -> &[&str];
}
