// SPDX-License-Identifier: MIT OR Apache-2.0

//! TOML configuration driver, compiled with the `toml` feature.

use crate::domain::{ConfigError, ConfigValue, Result};
use crate::ports::ConfigParser;

/// TOML parser implementation.
///
/// Tables become mappings and arrays become sequences. Datetimes have no
/// counterpart in [`ConfigValue`] and are kept as their RFC 3339 text.
///
/// # Examples
///
/// ```rust
/// use scopecfg::adapters::TomlParser;
/// use scopecfg::ports::ConfigParser;
///
/// let value = TomlParser::new().parse("[server]\nport = 8080").unwrap();
/// let server = value.get_key("server").unwrap();
/// assert_eq!(server.get_key("port").and_then(|v| v.as_i64()), Some(8080));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TomlParser;

impl TomlParser {
    /// Creates a new TOML parser.
    pub fn new() -> Self {
        TomlParser
    }

    fn convert(value: toml::Value) -> ConfigValue {
        match value {
            toml::Value::String(s) => ConfigValue::String(s),
            toml::Value::Integer(i) => ConfigValue::Integer(i),
            toml::Value::Float(f) => ConfigValue::Float(f),
            toml::Value::Boolean(b) => ConfigValue::Bool(b),
            toml::Value::Datetime(dt) => ConfigValue::String(dt.to_string()),
            toml::Value::Array(arr) => {
                ConfigValue::Sequence(arr.into_iter().map(Self::convert).collect())
            }
            toml::Value::Table(table) => table
                .into_iter()
                .map(|(k, v)| (k, Self::convert(v)))
                .collect(),
        }
    }
}

impl Default for TomlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser for TomlParser {
    fn parse(&self, content: &str) -> Result<ConfigValue> {
        let table: toml::Table = toml::from_str(content)
            .map_err(|e| ConfigError::parse(format!("Failed to parse TOML: {}", e), e))?;

        Ok(Self::convert(toml::Value::Table(table)))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["toml"]
    }
}
