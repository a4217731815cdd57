// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw setting values and their conversions.
//!
//! Sources hand back the exact text they hold as a `ConfigValue`. Callers then
//! read it as a string, apply the lenient boolean rule, or parse it into any
//! `FromStr` type.

use crate::domain::errors::{ConfigError, Result};
use std::fmt;
use std::str::FromStr;

/// The unparsed text of a setting as held by a source.
///
/// # Examples
///
/// ```
/// use argenv::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::from("Release");
/// assert_eq!(value.as_str(), "Release");
/// assert!(!value.is_true());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigValue(String);

impl ConfigValue {
    /// Creates a new `ConfigValue` from a `String`.
    pub fn new(value: String) -> Self {
        ConfigValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the value into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Reads the value as a boolean using the lenient rule.
    ///
    /// Returns `true` only when the text equals `"true"` ignoring ASCII case.
    /// **Every other text is `false`**, including `"yes"`, `"1"`, `"on"`, text
    /// with surrounding whitespace such as `"TRUE "`, and the empty string.
    /// Malformed input never produces an error.
    ///
    /// Scripts that pass `--flag=1` therefore get `false`. This matches the
    /// behaviour build scripts already rely on and must not be tightened.
    ///
    /// # Examples
    ///
    /// ```
    /// use argenv::domain::config_value::ConfigValue;
    ///
    /// assert!(ConfigValue::from("TRUE").is_true());
    /// assert!(!ConfigValue::from("yes").is_true());
    /// assert!(!ConfigValue::from("garbage").is_true());
    /// ```
    pub fn is_true(&self) -> bool {
        self.0.eq_ignore_ascii_case("true")
    }

    /// Parses the value into any type that implements `FromStr`.
    ///
    /// `key` is only used to label the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use argenv::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::from("8");
    /// let jobs: u16 = value.parse("jobs").unwrap();
    /// assert_eq!(jobs, 8);
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.0
            .parse::<T>()
            .map_err(|e| ConfigError::TypeConversionError {
                key: key.to_string(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Box::new(e),
            })
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(s.to_string())
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue(b.to_string())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ConfigValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
