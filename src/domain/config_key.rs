// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotted configuration keys.
//!
//! A key is either a bare top-level key (`"database"`) or a two-part path
//! (`"database.host"`). Only the *first* dot splits: in `"cache.redis.url"` the
//! top-level key is `cache` and `redis.url` is one opaque sub-key. The top-level
//! segment is case-insensitive and always normalized to lowercase; the sub-key is
//! kept exactly as written.

use std::fmt;

/// A parsed, two-level configuration key.
///
/// # Examples
///
/// ```
/// use scopecfg::domain::ConfigKey;
///
/// let key = ConfigKey::from("Cache.Redis.URL");
/// assert_eq!(key.top(), "cache");
/// assert_eq!(key.sub(), Some("Redis.URL"));
///
/// let key = ConfigKey::from("Database");
/// assert_eq!(key.top(), "database");
/// assert_eq!(key.sub(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConfigKey {
    raw: String,
    top: String,
    sub: Option<String>,
}

impl ConfigKey {
    /// Parses a key, splitting at the first dot.
    ///
    /// A leading dot does not split: `".hidden"` is a bare key.
    pub fn new(key: String) -> Self {
        let (top, sub) = match key.find('.') {
            Some(pos) if pos > 0 => (
                key[..pos].to_lowercase(),
                Some(key[pos + 1..].to_string()),
            ),
            _ => (key.to_lowercase(), None),
        };
        ConfigKey { raw: key, top, sub }
    }

    /// Returns the lowercase top-level segment.
    pub fn top(&self) -> &str {
        &self.top
    }

    /// Returns the sub-key after the first dot, if any.
    pub fn sub(&self) -> Option<&str> {
        self.sub.as_deref()
    }

    /// Returns `true` if the key has a sub-key.
    pub fn is_nested(&self) -> bool {
        self.sub.is_some()
    }

    /// Returns `true` if the key is the empty string.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the key exactly as it was supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey::new(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey::new(s.to_string())
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
