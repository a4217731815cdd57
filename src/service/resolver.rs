// SPDX-License-Identifier: MIT OR Apache-2.0

//! Argument-or-environment resolution.
//!
//! Each operation resolves one setting with a fixed precedence: an explicit
//! argument beats an environment variable, which beats the caller's default.
//! The environment variable name is the key with an optional prefix in front,
//! so `--target` on the command line and `MYTOOL_target` in the environment
//! can feed the same setting.
//!
//! Resolution keeps no state and never writes to either source. Errors only
//! ever come from the sources themselves and are returned unchanged.

use crate::domain::{BuildContext, ConfigKey, ConfigValue, Result};
use std::str::FromStr;

/// Resolution operations available on every [`BuildContext`].
///
/// # Examples
///
/// ```rust
/// use argenv::prelude::*;
/// use std::collections::HashMap;
///
/// # fn main() -> Result<()> {
/// let mut vars = HashMap::new();
/// vars.insert("MYTOOL_target".to_string(), "Debug".to_string());
///
/// let ctx = DefaultBuildContext::builder()
///     .with_cli_args(vec!["--verbose"])
///     .with_env_values(vars)
///     .build()?;
///
/// assert_eq!(ctx.resolve_string("target", Some("MYTOOL_"), Some("Release"))?.as_deref(), Some("Debug"));
/// assert!(ctx.resolve_bool("verbose", Some("MYTOOL_"), false)?);
/// assert_eq!(ctx.resolve_string_without_default("missing", None)?, None);
/// # Ok(())
/// # }
/// ```
pub trait ArgumentOrEnvironment: BuildContext {
    /// Resolves a boolean setting.
    ///
    /// The argument named `key` wins if present. Otherwise the environment
    /// variable `prefix + key` is used, and failing that `default`. The chosen
    /// text is `true` only if it equals `"true"` ignoring case; any other text,
    /// `"1"` and `"yes"` included, gives `false` without an error. See
    /// [`ConfigValue::is_true`].
    ///
    /// A `None` prefix behaves exactly like `Some("")`.
    ///
    /// # Errors
    ///
    /// Only errors raised by the argument or environment source, unchanged.
    fn resolve_bool(
        &self,
        key: impl Into<ConfigKey>,
        prefix: Option<&str>,
        default: bool,
    ) -> Result<bool> {
        let key = key.into();
        let env_name = key.environment_name(prefix);

        let fallback = self
            .environment()
            .variable(&env_name)?
            .unwrap_or_else(|| ConfigValue::from(default));
        let resolved = self.arguments().argument_or(&key, Some(fallback))?;
        let value = resolved.is_some_and(|v| v.is_true());

        tracing::trace!(key = %key, env = %env_name, value, "Resolved boolean setting");
        Ok(value)
    }

    /// Resolves a boolean setting whose environment variable is the bare key.
    ///
    /// Same as [`resolve_bool`](Self::resolve_bool) with no prefix.
    fn resolve_bool_unprefixed(&self, key: impl Into<ConfigKey>, default: bool) -> Result<bool> {
        self.resolve_bool(key, None, default)
    }

    /// Resolves a string setting.
    ///
    /// The argument named `key` wins if present. Otherwise the environment
    /// variable `prefix + key` is used, and failing that `default`. An empty
    /// argument or variable is a value like any other. When nothing is found
    /// and `default` is `None`, the result is `None`.
    ///
    /// # Errors
    ///
    /// Only errors raised by the argument or environment source, unchanged.
    fn resolve_string(
        &self,
        key: impl Into<ConfigKey>,
        prefix: Option<&str>,
        default: Option<&str>,
    ) -> Result<Option<String>> {
        let key = key.into();
        let resolved = argument_or_environment(self, &key, prefix)?;
        Ok(resolved
            .map(ConfigValue::into_string)
            .or_else(|| default.map(str::to_string)))
    }

    /// Resolves a string setting with no default.
    ///
    /// Same as [`resolve_string`](Self::resolve_string) with `default` set to
    /// `None`.
    fn resolve_string_without_default(
        &self,
        key: impl Into<ConfigKey>,
        prefix: Option<&str>,
    ) -> Result<Option<String>> {
        self.resolve_string(key, prefix, None)
    }

    /// Resolves a setting and parses it into `T`.
    ///
    /// Precedence is the same as for [`resolve_string`](Self::resolve_string).
    /// The found text is parsed with `FromStr`; when nothing is found, `default`
    /// is returned as is. Use [`resolve_bool`](Self::resolve_bool) for booleans,
    /// since `bool::from_str` is strict and would turn `"True"` into an error.
    ///
    /// # Errors
    ///
    /// `ConfigError::TypeConversionError` if the found text does not parse,
    /// or any error raised by the sources.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argenv::prelude::*;
    ///
    /// # fn main() -> Result<()> {
    /// let ctx = DefaultBuildContext::builder()
    ///     .with_cli_args(vec!["--jobs=8"])
    ///     .with_env_values(Default::default())
    ///     .build()?;
    ///
    /// assert_eq!(ctx.resolve_parsed::<u16>("jobs", None, 1)?, 8);
    /// assert_eq!(ctx.resolve_parsed::<u16>("retries", None, 3)?, 3);
    /// # Ok(())
    /// # }
    /// ```
    fn resolve_parsed<T>(
        &self,
        key: impl Into<ConfigKey>,
        prefix: Option<&str>,
        default: T,
    ) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let key = key.into();
        match argument_or_environment(self, &key, prefix)? {
            Some(value) => value.parse(key.as_str()),
            None => Ok(default),
        }
    }
}

impl<C: BuildContext + ?Sized> ArgumentOrEnvironment for C {}

/// Looks up `key` as an argument, falling back to the prefixed environment variable.
fn argument_or_environment<C: BuildContext + ?Sized>(
    ctx: &C,
    key: &ConfigKey,
    prefix: Option<&str>,
) -> Result<Option<ConfigValue>> {
    let env_name = key.environment_name(prefix);
    let env_value = ctx.environment().variable(&env_name)?;
    tracing::trace!(
        key = %key,
        env = %env_name,
        env_set = env_value.is_some(),
        "Looking up setting"
    );
    ctx.arguments().argument_or(key, env_value)
}
