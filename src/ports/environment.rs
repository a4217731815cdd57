// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment source trait definition.

use crate::domain::{ConfigValue, Result};

/// A source of named environment variables.
///
/// `variable` must return `Ok(None)` for an unset variable, never an empty
/// string, and the exact content otherwise. An `Err` is reserved for a lookup
/// that failed outright; it is passed through to the caller untouched.
///
/// # Examples
///
/// ```rust
/// use argenv::ports::EnvironmentSource;
/// use argenv::domain::{ConfigValue, Result};
///
/// struct CiEnvironment;
///
/// impl EnvironmentSource for CiEnvironment {
///     fn name(&self) -> &str {
///         "ci"
///     }
///
///     fn variable(&self, name: &str) -> Result<Option<ConfigValue>> {
///         Ok((name == "CI").then(|| ConfigValue::from("true")))
///     }
/// }
///
/// assert!(CiEnvironment.variable("CI").unwrap().unwrap().is_true());
/// assert!(CiEnvironment.variable("HOME").unwrap().is_none());
/// ```
pub trait EnvironmentSource: Send + Sync {
    /// Returns the name of this source, used in logs and error messages.
    fn name(&self) -> &str;

    /// Looks up the variable called `name`.
    fn variable(&self, name: &str) -> Result<Option<ConfigValue>>;
}
