// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dynamically typed configuration values.
//!
//! This module provides the `ConfigValue` type, the unit that the registry stores,
//! reads and merges. A value is a scalar (string, integer, float, boolean, null),
//! an ordered sequence of values, or an insertion-ordered mapping from string keys
//! to values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An insertion-ordered mapping of string keys to configuration values.
pub type Mapping = IndexMap<String, ConfigValue>;

/// A dynamically typed configuration value.
///
/// # Examples
///
/// ```
/// use scopecfg::domain::ConfigValue;
///
/// let value = ConfigValue::from(42);
/// assert_eq!(value.as_i64(), Some(42));
/// assert_eq!(value.type_name(), "integer");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Null value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// String value
    String(String),
    /// Sequence of values
    Sequence(Vec<ConfigValue>),
    /// Mapping of string keys to values
    Mapping(Mapping),
}

impl ConfigValue {
    /// Creates an empty mapping value.
    pub fn empty_mapping() -> Self {
        ConfigValue::Mapping(Mapping::new())
    }

    /// Returns `true` if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    /// Returns `true` if this value is a mapping.
    pub fn is_mapping(&self) -> bool {
        matches!(self, ConfigValue::Mapping(_))
    }

    /// Returns `true` if this value is a sequence.
    pub fn is_sequence(&self) -> bool {
        matches!(self, ConfigValue::Sequence(_))
    }

    /// Returns the boolean if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this is an `Integer`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the number as `f64` if this is a `Float` or an `Integer`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(f) => Some(*f),
            ConfigValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Returns the string slice if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is a `Sequence`.
    pub fn as_sequence(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    /// Returns the entries if this is a `Mapping`.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            ConfigValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Consumes the value and returns the entries if this is a `Mapping`.
    pub fn into_mapping(self) -> Option<Mapping> {
        match self {
            ConfigValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up a single flat key in this value.
    ///
    /// The key is never split: `"a.b"` is looked up as one key. Mappings are
    /// indexed by key and sequences by a decimal position. Scalars have no
    /// entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use scopecfg::domain::ConfigValue;
    ///
    /// let servers = ConfigValue::from(vec!["alpha", "beta"]);
    /// assert_eq!(servers.get_key("1").and_then(|v| v.as_str()), Some("beta"));
    /// assert!(servers.get_key("two").is_none());
    /// ```
    pub fn get_key(&self, key: &str) -> Option<&ConfigValue> {
        match self {
            ConfigValue::Mapping(map) => map.get(key),
            ConfigValue::Sequence(seq) => key.parse::<usize>().ok().and_then(|i| seq.get(i)),
            _ => None,
        }
    }

    /// Stores `value` under the flat `key`, the write-side counterpart of
    /// [`get_key`](Self::get_key).
    ///
    /// A mapping gets `key` inserted. A sequence has the element at index `key`
    /// replaced, or `value` appended when `key` equals its length; any other key
    /// turns the sequence into a mapping keyed by the existing indices. Scalars and
    /// null are replaced by a fresh mapping holding only `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scopecfg::domain::ConfigValue;
    ///
    /// let mut servers = ConfigValue::from(vec!["alpha", "beta"]);
    /// servers.set_key("1", ConfigValue::from("gamma"));
    /// servers.set_key("2", ConfigValue::from("delta"));
    /// assert_eq!(servers, ConfigValue::from(vec!["alpha", "gamma", "delta"]));
    ///
    /// servers.set_key("primary", ConfigValue::from("alpha"));
    /// assert_eq!(servers.get_key("0").and_then(|v| v.as_str()), Some("alpha"));
    /// assert!(servers.is_mapping());
    /// ```
    pub fn set_key(&mut self, key: &str, value: ConfigValue) {
        match self {
            ConfigValue::Mapping(map) => {
                map.insert(key.to_string(), value);
            }
            ConfigValue::Sequence(seq) => match key.parse::<usize>() {
                Ok(i) if i < seq.len() => seq[i] = value,
                Ok(i) if i == seq.len() => seq.push(value),
                _ => {
                    let mut map: Mapping = std::mem::take(seq)
                        .into_iter()
                        .enumerate()
                        .map(|(i, v)| (i.to_string(), v))
                        .collect();
                    map.insert(key.to_string(), value);
                    *self = ConfigValue::Mapping(map);
                }
            },
            other => {
                *other = ConfigValue::Mapping(Mapping::from([(key.to_string(), value)]));
            }
        }
    }

    /// Shallow-merges `overlay` into this value.
    ///
    /// Keys in `overlay` overwrite the same keys here; other existing keys are kept
    /// in place. When this value is not a mapping it is replaced by `overlay`.
    /// Nested mappings are not merged recursively.
    pub fn merge_shallow(&mut self, overlay: Mapping) {
        match self {
            ConfigValue::Mapping(base) => base.extend(overlay),
            other => *other = ConfigValue::Mapping(overlay),
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::Bool(_) => "boolean",
            ConfigValue::Integer(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::String(_) => "string",
            ConfigValue::Sequence(_) => "sequence",
            ConfigValue::Mapping(_) => "mapping",
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Null => write!(f, "null"),
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Integer(i) => write!(f, "{}", i),
            ConfigValue::Float(n) => write!(f, "{}", n),
            ConfigValue::String(s) => write!(f, "{}", s),
            ConfigValue::Sequence(seq) => {
                write!(f, "[")?;
                for (i, v) in seq.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            ConfigValue::Mapping(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Integer(i)
    }
}

impl From<i32> for ConfigValue {
    fn from(i: i32) -> Self {
        ConfigValue::Integer(i64::from(i))
    }
}

impl From<f64> for ConfigValue {
    fn from(f: f64) -> Self {
        ConfigValue::Float(f)
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl<T: Into<ConfigValue>> From<Vec<T>> for ConfigValue {
    fn from(v: Vec<T>) -> Self {
        ConfigValue::Sequence(v.into_iter().map(Into::into).collect())
    }
}

impl From<Mapping> for ConfigValue {
    fn from(m: Mapping) -> Self {
        ConfigValue::Mapping(m)
    }
}

impl<K: Into<String>, V: Into<ConfigValue>> FromIterator<(K, V)> for ConfigValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ConfigValue::Mapping(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
