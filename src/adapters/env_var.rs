// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable source adapter.
//!
//! This module provides an adapter that reads variables from the process
//! environment, either live or from a captured snapshot.

use crate::domain::{ConfigError, ConfigValue, Result};
use crate::ports::EnvironmentSource;
use std::collections::HashMap;
use std::env::{self, VarError};

/// Maximum length for environment variable keys kept in a snapshot (prevents DoS)
const MAX_ENV_KEY_LEN: usize = 512;

/// Maximum length for environment variable values kept in a snapshot (prevents DoS)
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// Environment source backed by the process environment.
///
/// Names are looked up exactly as given: no case folding, no separator
/// rewriting. Any namespacing prefix has already been applied by the caller.
///
/// # Examples
///
/// ```rust
/// use argenv::adapters::EnvVarAdapter;
/// use argenv::ports::EnvironmentSource;
/// use std::collections::HashMap;
///
/// // Live lookups against the process environment
/// let adapter = EnvVarAdapter::new();
///
/// // Fixed values, handy in tests
/// let mut values = HashMap::new();
/// values.insert("MYTOOL_target".to_string(), "Release".to_string());
/// let adapter = EnvVarAdapter::with_values(values);
/// assert_eq!(adapter.variable("MYTOOL_target").unwrap().unwrap().as_str(), "Release");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvVarAdapter {
    /// Fixed variables; `None` means read the process environment on every lookup
    values: Option<HashMap<String, String>>,
}

impl EnvVarAdapter {
    /// Creates an adapter that reads the process environment at lookup time.
    pub fn new() -> Self {
        Self { values: None }
    }

    /// Creates an adapter over a fixed set of variables.
    ///
    /// The process environment is never consulted.
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            values: Some(values),
        }
    }

    /// Captures the current process environment into a fixed adapter.
    ///
    /// Oversized variables and variables that are not valid Unicode are left
    /// out of the snapshot.
    pub fn snapshot() -> Self {
        let mut values = HashMap::new();

        for (key, value) in env::vars_os() {
            let (Some(key), Some(value)) = (key.to_str(), value.to_str()) else {
                tracing::debug!(
                    key = %key.to_string_lossy(),
                    "Skipping non-unicode environment variable"
                );
                continue;
            };

            // Validate input sizes to prevent DoS
            if key.len() > MAX_ENV_KEY_LEN || value.len() > MAX_ENV_VALUE_LEN {
                tracing::debug!(
                    "Skipping oversized environment variable: key_len={}, value_len={} (max key={}, max value={})",
                    key.len(),
                    value.len(),
                    MAX_ENV_KEY_LEN,
                    MAX_ENV_VALUE_LEN
                );
                continue;
            }

            values.insert(key.to_string(), value.to_string());
        }

        tracing::debug!("Captured {} environment variables", values.len());

        Self::with_values(values)
    }

    /// Returns whether this adapter holds fixed values rather than reading live.
    pub fn is_snapshot(&self) -> bool {
        self.values.is_some()
    }
}

impl EnvironmentSource for EnvVarAdapter {
    fn name(&self) -> &str {
        "env"
    }

    fn variable(&self, name: &str) -> Result<Option<ConfigValue>> {
        if let Some(values) = &self.values {
            return Ok(values.get(name).map(|v| ConfigValue::from(v.as_str())));
        }

        // `env::var` panics on these names, so treat them as unset.
        if name.is_empty() || name.contains(['=', '\0']) {
            return Ok(None);
        }

        match env::var(name) {
            Ok(value) => Ok(Some(ConfigValue::from(value))),
            Err(VarError::NotPresent) => Ok(None),
            Err(e @ VarError::NotUnicode(_)) => Err(ConfigError::SourceError {
                source_name: self.name().to_string(),
                message: format!("variable '{}' is not valid unicode", name),
                source: Some(Box::new(e)),
            }),
        }
    }
}
