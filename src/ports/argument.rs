// SPDX-License-Identifier: MIT OR Apache-2.0

//! Argument source trait definition.
//!
//! This module defines the `ArgumentSource` trait, the port through which
//! command-line-style named inputs are read. Parsing the command line is the
//! adapter's business; the resolver only asks whether a key is present and
//! what its text is.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};

/// A source of named command-line-style arguments.
///
/// Implementations must hand back exactly the stored text for a present key,
/// and must hand back a supplied fallback verbatim for an absent one.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a build context can be shared
/// between threads.
///
/// # Examples
///
/// ```rust
/// use argenv::ports::ArgumentSource;
/// use argenv::domain::{ConfigError, ConfigKey, ConfigValue, Result};
///
/// struct SingleArgument;
///
/// impl ArgumentSource for SingleArgument {
///     fn name(&self) -> &str {
///         "single"
///     }
///
///     fn has_argument(&self, key: &ConfigKey) -> Result<bool> {
///         Ok(key.as_str() == "target")
///     }
///
///     fn argument(&self, key: &ConfigKey) -> Result<ConfigValue> {
///         if key.as_str() == "target" {
///             Ok(ConfigValue::from("Release"))
///         } else {
///             Err(ConfigError::ConfigKeyNotFound { key: key.to_string() })
///         }
///     }
/// }
///
/// let source = SingleArgument;
/// let value = source.argument_or(&ConfigKey::from("target"), None).unwrap();
/// assert_eq!(value.unwrap().as_str(), "Release");
/// ```
pub trait ArgumentSource: Send + Sync {
    /// Returns the name of this source, used in logs and error messages.
    fn name(&self) -> &str;

    /// Returns whether an argument named `key` was supplied.
    fn has_argument(&self, key: &ConfigKey) -> Result<bool>;

    /// Returns the text of the argument named `key`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigKeyNotFound` when no such argument was supplied.
    fn argument(&self, key: &ConfigKey) -> Result<ConfigValue>;

    /// Returns the argument named `key` if supplied, otherwise `fallback` unchanged.
    ///
    /// An absent fallback stays absent, so callers can chain a further default.
    fn argument_or(
        &self,
        key: &ConfigKey,
        fallback: Option<ConfigValue>,
    ) -> Result<Option<ConfigValue>> {
        if self.has_argument(key)? {
            self.argument(key).map(Some)
        } else {
            Ok(fallback)
        }
    }
}

/// Builds the error for an argument that was asked for but never supplied.
pub(crate) fn not_found(key: &ConfigKey) -> ConfigError {
    ConfigError::ConfigKeyNotFound {
        key: key.to_string(),
    }
}
