// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML configuration driver.
//!
//! This module provides a driver that turns YAML documents into value trees.
//! It is only compiled with the `yaml` feature; the registry's `load` uses it
//! directly for `.yaml`/`.yml` files when available.

use crate::domain::{ConfigError, ConfigValue, Mapping, Result};
use crate::ports::ConfigParser;

/// YAML parser implementation.
///
/// Mappings keep their structure and order. Scalar mapping keys (numbers,
/// booleans) are stringified; complex keys are skipped. Tags are ignored and the
/// tagged value is kept.
///
/// # Examples
///
/// ```rust
/// use scopecfg::adapters::YamlParser;
/// use scopecfg::ports::ConfigParser;
///
/// let parser = YamlParser::new();
/// let value = parser.parse("database:\n  host: localhost\n  port: 5432").unwrap();
/// let db = value.get_key("database").unwrap();
/// assert_eq!(db.get_key("host").and_then(|v| v.as_str()), Some("localhost"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    /// Converts a YAML value into a configuration value.
    fn convert(value: serde_yaml::Value) -> ConfigValue {
        match value {
            serde_yaml::Value::Null => ConfigValue::Null,
            serde_yaml::Value::Bool(b) => ConfigValue::Bool(b),
            serde_yaml::Value::Number(n) => match n.as_i64() {
                Some(i) => ConfigValue::Integer(i),
                None => ConfigValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_yaml::Value::String(s) => ConfigValue::String(s),
            serde_yaml::Value::Sequence(seq) => {
                ConfigValue::Sequence(seq.into_iter().map(Self::convert).collect())
            }
            serde_yaml::Value::Mapping(map) => {
                let mut result = Mapping::with_capacity(map.len());
                for (key, val) in map {
                    match Self::key_string(&key) {
                        Some(key) => {
                            result.insert(key, Self::convert(val));
                        }
                        None => tracing::debug!("Skipping non-scalar YAML mapping key"),
                    }
                }
                ConfigValue::Mapping(result)
            }
            serde_yaml::Value::Tagged(tagged) => Self::convert(tagged.value),
        }
    }

    fn key_string(key: &serde_yaml::Value) -> Option<String> {
        match key {
            serde_yaml::Value::String(s) => Some(s.clone()),
            serde_yaml::Value::Number(n) => Some(n.to_string()),
            serde_yaml::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &str) -> Result<ConfigValue> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::parse(format!("Failed to parse YAML: {}", e), e))?;

        Ok(Self::convert(value))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}
