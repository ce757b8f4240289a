// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration registry trait definition.
//!
//! This module defines the `ConfigRegistry` trait, the main interface for
//! reading and writing scoped configuration. Every operation takes an optional
//! scope; `None` (or an empty name) means "the current scope".

use crate::domain::{ConfigValue, Mapping, Result};

/// The main configuration registry trait.
///
/// Values live in independent scopes. Keys are either bare (`"app"`) or dotted
/// (`"app.name"`), split at the first dot only; the top-level segment is
/// case-insensitive.
///
/// # Examples
///
/// ```rust
/// use scopecfg::prelude::*;
/// use scopecfg::service::Registry;
///
/// # fn main() -> Result<()> {
/// let mut registry = Registry::new();
/// registry.set_value("App.Name", ConfigValue::from("shop"), None);
///
/// assert!(registry.has("app", None));
/// assert_eq!(
///     registry.get("APP.Name", None)?,
///     Some(ConfigValue::from("shop"))
/// );
/// # Ok(())
/// # }
/// ```
pub trait ConfigRegistry {
    /// Makes `scope` the current scope, creating its table if needed.
    fn set_scope(&mut self, scope: &str);

    /// Returns the name of the current scope.
    fn current_scope(&self) -> &str;

    /// Empties one scope, leaving every other scope untouched.
    fn reset(&mut self, scope: Option<&str>);

    /// Empties every scope.
    fn reset_all(&mut self);

    /// Stores a single value and returns it.
    ///
    /// A bare key is stored at the top level, overwriting any previous value. A
    /// dotted key `"top.sub"` is stored at `sub` inside the mapping under `top`,
    /// creating that mapping when `top` is missing, null or a scalar. When `top`
    /// holds a sequence, a numeric `sub` updates or appends an element (see
    /// [`ConfigValue::set_key`]). An empty `name` stores nothing and returns the
    /// whole scope table.
    fn set_value(&mut self, name: &str, value: ConfigValue, scope: Option<&str>) -> ConfigValue;

    /// Shallow-merges `mapping` into the mapping under the top-level key
    /// `target` and returns the merged mapping.
    ///
    /// Sibling top-level keys are untouched. An empty `target` behaves like
    /// [`merge`](Self::merge).
    fn merge_into(&mut self, target: &str, mapping: Mapping, scope: Option<&str>) -> ConfigValue;

    /// Shallow-merges `mapping` into the scope's top-level table and returns the
    /// whole table.
    fn merge(&mut self, mapping: Mapping, scope: Option<&str>) -> ConfigValue;

    /// Looks up a value.
    ///
    /// An empty `name` returns the whole scope table (`None` if the scope was
    /// never used). A dotted lookup whose top-level key is missing first tries to
    /// lazy-load it from a file. The loaded document lands in the scope passed to
    /// `get` (the current scope only when `scope` is `None` or empty), so a
    /// following `has(top, scope)` sees it.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(value))` - The value was found
    /// * `Ok(None)` - Nothing is stored under `name`
    /// * `Err(ConfigError)` - A lazily loaded file could not be read or parsed
    fn get(&mut self, name: &str, scope: Option<&str>) -> Result<Option<ConfigValue>>;

    /// Returns `true` if a value is stored under `name`.
    ///
    /// Never loads anything.
    fn has(&self, name: &str, scope: Option<&str>) -> bool;

    /// Loads a configuration file, or hands non-file input to
    /// [`parse`](Self::parse).
    ///
    /// When `name` is non-empty the document is merged under that top-level key;
    /// otherwise it is merged into the top-level table.
    fn load(&mut self, file_or_content: &str, name: &str, scope: Option<&str>)
        -> Result<ConfigValue>;

    /// Parses a file or inline content with a registered driver and stores the
    /// result like [`load`](Self::load).
    ///
    /// An empty `format` is taken from the extension of `source`. A format
    /// containing `::` is used verbatim as a driver identifier.
    ///
    /// # Errors
    ///
    /// * `ConfigError::DriverResolution` - No driver is registered for the format
    /// * `ConfigError::ParseError` - The driver rejected the content
    fn parse(
        &mut self,
        source: &str,
        format: &str,
        name: &str,
        scope: Option<&str>,
    ) -> Result<ConfigValue>;

    /// Looks up a value, falling back to `default` when it is absent.
    fn get_or_default(
        &mut self,
        name: &str,
        default: ConfigValue,
        scope: Option<&str>,
    ) -> Result<ConfigValue> {
        Ok(self.get(name, scope)?.unwrap_or(default))
    }
}
