// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lazy-load collaborator traits.
//!
//! When a dotted lookup such as `"payment.gateway"` misses because nothing is
//! stored under `payment`, the registry asks a [`LazyPathStrategy`] where a file
//! for `payment` would live and loads it if it exists. The stock strategy builds
//! its paths with the help of a [`ModuleResolver`], which reports the host
//! application's current module.

use std::path::PathBuf;

/// Reports the host application's current module, if any.
///
/// # Examples
///
/// ```rust
/// use scopecfg::ports::ModuleResolver;
///
/// struct Admin;
///
/// impl ModuleResolver for Admin {
///     fn current_module(&self) -> Option<String> {
///         Some("admin".to_string())
///     }
/// }
///
/// assert_eq!(Admin.current_module().as_deref(), Some("admin"));
/// ```
pub trait ModuleResolver: Send + Sync {
    /// Returns the current module name, or `None` when there is none.
    ///
    /// An empty string is treated the same as `None`.
    fn current_module(&self) -> Option<String>;
}

/// Computes the candidate file for a missing top-level key.
///
/// # Examples
///
/// ```rust
/// use scopecfg::ports::LazyPathStrategy;
/// use std::path::PathBuf;
///
/// struct Flat(PathBuf);
///
/// impl LazyPathStrategy for Flat {
///     fn candidate_path(&self, top_key: &str) -> Option<PathBuf> {
///         Some(self.0.join(format!("{}.json", top_key)))
///     }
/// }
///
/// let strategy = Flat(PathBuf::from("/etc/app"));
/// assert_eq!(
///     strategy.candidate_path("mail"),
///     Some(PathBuf::from("/etc/app/mail.json"))
/// );
/// ```
pub trait LazyPathStrategy: Send + Sync {
    /// Returns the path to try for `top_key`, or `None` to skip lazy loading.
    ///
    /// `top_key` is already lowercased.
    fn candidate_path(&self, top_key: &str) -> Option<PathBuf>;
}
