// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration registry.
//!
//! This module defines the error types that can occur when loading or parsing
//! configuration into the registry. All errors use `thiserror` for proper error
//! handling and conversion.
//!
//! Missing keys and missing scopes are never errors: lookups report absence with
//! `None` or `false`.

use thiserror::Error;

/// The main error type for registry operations.
///
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use scopecfg::domain::errors::ConfigError;
///
/// let err = ConfigError::driver_not_found("scopecfg::driver::Ini");
/// assert!(err.to_string().contains("scopecfg::driver::Ini"));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// No parser driver is registered under the resolved identifier.
    #[error("No configuration driver registered for '{driver}'")]
    DriverResolution {
        /// The driver identifier that could not be resolved
        driver: String,
    },

    /// A driver (or the built-in loader) failed to parse configuration content.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A configuration source refused a file or could not be located.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates a `DriverResolution` error for the given driver identifier.
    pub fn driver_not_found(driver: impl Into<String>) -> Self {
        ConfigError::DriverResolution {
            driver: driver.into(),
        }
    }

    /// Creates a `ParseError` wrapping the underlying cause.
    pub fn parse<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ConfigError::ParseError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// A specialized Result type for registry operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
