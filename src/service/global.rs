// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide registry.

use crate::service::Registry;
use once_cell::sync::Lazy;
use std::sync::Mutex;

static GLOBAL: Lazy<Mutex<Registry>> = Lazy::new(|| Mutex::new(Registry::new()));

/// Returns the process-wide registry, creating it with [`Registry::new`] on first
/// use.
///
/// Callers hold the lock for the duration of one operation; the registry itself
/// does no internal locking.
///
/// # Examples
///
/// ```rust
/// use scopecfg::prelude::*;
/// use scopecfg::service::global;
///
/// if let Ok(mut registry) = global().lock() {
///     registry.set_value("app.name", ConfigValue::from("shop"), Some("docs"));
///     assert!(registry.has("app.name", Some("docs")));
/// }
/// ```
pub fn global() -> &'static Mutex<Registry> {
    &GLOBAL
}
