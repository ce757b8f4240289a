// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON configuration driver.
//!
//! JSON is the registry's native format: `load` decodes `.json` files directly,
//! and the same decoder is registered as the `Json` driver for `parse`.

use crate::domain::{ConfigError, ConfigValue, Result};
use crate::ports::ConfigParser;

/// JSON parser implementation.
///
/// Objects become mappings (key order preserved), arrays become sequences, and
/// numbers become integers when they fit in an `i64`.
///
/// # Examples
///
/// ```rust
/// use scopecfg::adapters::JsonParser;
/// use scopecfg::ports::ConfigParser;
///
/// let parser = JsonParser::new();
/// let value = parser.parse(r#"{"database": {"port": 5432}}"#).unwrap();
/// let db = value.get_key("database").unwrap();
/// assert_eq!(db.get_key("port").and_then(|v| v.as_i64()), Some(5432));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct JsonParser;

impl JsonParser {
    /// Creates a new JSON parser.
    pub fn new() -> Self {
        JsonParser
    }
}

impl Default for JsonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser for JsonParser {
    fn parse(&self, content: &str) -> Result<ConfigValue> {
        serde_json::from_str(content)
            .map_err(|e| ConfigError::parse(format!("Failed to parse JSON: {}", e), e))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }
}
