// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the crate.
//!
//! Resolving a setting never fails on its own account: absence is reported
//! with `Option` and malformed booleans read as `false`. The errors here come
//! from the sources, from typed parsing, and from assembling a context.

use thiserror::Error;

/// The main error type.
///
/// # Examples
///
/// ```
/// use argenv::domain::errors::ConfigError;
///
/// fn required_argument() -> Result<String, ConfigError> {
///     Err(ConfigError::ConfigKeyNotFound {
///         key: "target".to_string(),
///     })
/// }
/// assert!(required_argument().is_err());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A source was asked for the value of a key it does not hold.
    #[error("Configuration key not found: {key}")]
    ConfigKeyNotFound {
        /// The key that was not found
        key: String,
    },

    /// Failed to convert a value to the requested type.
    #[error(
        "Failed to convert configuration value for key '{key}' to type {target_type}: {source}"
    )]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A source failed while looking up a value.
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

    /// A build context was assembled without one of its two sources.
    #[error("No {kind} source configured")]
    MissingSource {
        /// Which capability is missing ("argument" or "environment")
        kind: &'static str,
    },
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, ConfigError>;
