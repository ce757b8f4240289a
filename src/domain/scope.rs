// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scopes and their key-value tables.
//!
//! A scope is an isolated namespace of configuration. Every scope owns one
//! [`ScopeTable`], a mapping from lowercase top-level keys to values.

use crate::domain::config_value::{ConfigValue, Mapping};

/// The reserved name of the default scope.
pub const DEFAULT_SCOPE: &str = "_sys_";

/// The top-level table of a single scope.
///
/// All keys are lowercased on the way in and on the way out, so `"Database"` and
/// `"database"` always address the same entry.
///
/// # Examples
///
/// ```
/// use scopecfg::domain::{ConfigValue, ScopeTable};
///
/// let mut table = ScopeTable::new();
/// table.insert("Database", ConfigValue::from("postgres"));
/// assert!(table.contains("DATABASE"));
/// assert_eq!(table.get("database").and_then(|v| v.as_str()), Some("postgres"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScopeTable(Mapping);

impl ScopeTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        ScopeTable(Mapping::new())
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(&key.to_lowercase())
    }

    /// Returns `true` if a value is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(&key.to_lowercase())
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn insert(&mut self, key: &str, value: ConfigValue) -> Option<ConfigValue> {
        self.0.insert(key.to_lowercase(), value)
    }

    /// Returns the value under `key`, inserting `default()` first if it is absent.
    pub fn get_or_insert_with<F>(&mut self, key: &str, default: F) -> &mut ConfigValue
    where
        F: FnOnce() -> ConfigValue,
    {
        self.0.entry(key.to_lowercase()).or_insert_with(default)
    }

    /// Shallow-merges `overlay` into the table, lowercasing its keys.
    ///
    /// Keys present in both are overwritten; keys only present in the table are
    /// kept.
    pub fn merge(&mut self, overlay: Mapping) {
        self.0
            .extend(overlay.into_iter().map(|(k, v)| (k.to_lowercase(), v)));
    }

    /// Returns the number of top-level keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the table holds no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, ConfigValue> {
        self.0.iter()
    }

    /// Returns a copy of the whole table as a mapping value.
    pub fn to_value(&self) -> ConfigValue {
        ConfigValue::Mapping(self.0.clone())
    }
}

impl From<ScopeTable> for ConfigValue {
    fn from(table: ScopeTable) -> Self {
        ConfigValue::Mapping(table.0)
    }
}
