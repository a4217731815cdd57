// SPDX-License-Identifier: MIT OR Apache-2.0

//! Setting key newtype and the environment-name prefixing rule.
//!
//! A `ConfigKey` names one logical setting. It is used verbatim against the
//! argument source and, after an optional prefix is prepended, against the
//! environment source.

use std::fmt;

/// A type-safe wrapper for setting keys.
///
/// # Examples
///
/// ```
/// use argenv::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("configuration");
/// assert_eq!(key.as_str(), "configuration");
/// assert_eq!(key.environment_name(Some("MYTOOL_")), "MYTOOL_configuration");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns the name used to look this key up in the environment.
    ///
    /// The prefix is prepended verbatim. `None` and `Some("")` both mean
    /// "no namespacing", in which case the bare key is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use argenv::domain::config_key::ConfigKey;
    ///
    /// let key = ConfigKey::from("Verbose");
    /// assert_eq!(key.environment_name(Some("CI_")), "CI_Verbose");
    /// assert_eq!(key.environment_name(Some("")), "Verbose");
    /// assert_eq!(key.environment_name(None), "Verbose");
    /// ```
    pub fn environment_name(&self, prefix: Option<&str>) -> String {
        let prefix = prefix.unwrap_or_default();
        let mut name = String::with_capacity(prefix.len() + self.0.len());
        name.push_str(prefix);
        name.push_str(&self.0);
        name
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<&ConfigKey> for ConfigKey {
    fn from(key: &ConfigKey) -> Self {
        key.clone()
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
