// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fake sources shared by the integration tests.
//!
//! These record every lookup so tests can check which names were asked for
//! and that resolution never writes back.

use argenv::domain::{BuildContext, ConfigError, ConfigKey, ConfigValue, Result};
use argenv::ports::{ArgumentSource, EnvironmentSource};
use std::collections::HashMap;
use std::sync::Mutex;

/// An argument source with fixed values.
#[derive(Debug, Default)]
pub struct MockArguments {
    values: HashMap<String, String>,
    checked: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl MockArguments {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an argument.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Returns the keys passed to `has_argument`, in order.
    pub fn checked(&self) -> Vec<String> {
        self.checked.lock().unwrap().clone()
    }
}

impl ArgumentSource for MockArguments {
    fn name(&self) -> &str {
        "mock-arguments"
    }

    fn has_argument(&self, key: &ConfigKey) -> Result<bool> {
        self.checked.lock().unwrap().push(key.to_string());
        Ok(self.values.contains_key(key.as_str()))
    }

    fn argument(&self, key: &ConfigKey) -> Result<ConfigValue> {
        self.values
            .get(key.as_str())
            .map(|v| ConfigValue::from(v.as_str()))
            .ok_or_else(|| ConfigError::ConfigKeyNotFound {
                key: key.to_string(),
            })
    }
}

/// An environment source with fixed values.
#[derive(Debug, Default)]
pub struct MockEnvironment {
    values: HashMap<String, String>,
    requested: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl MockEnvironment {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable.
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Returns the names passed to `variable`, in order.
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }

    /// Returns a copy of the stored variables.
    pub fn values(&self) -> HashMap<String, String> {
        self.values.clone()
    }
}

impl EnvironmentSource for MockEnvironment {
    fn name(&self) -> &str {
        "mock-env"
    }

    fn variable(&self, name: &str) -> Result<Option<ConfigValue>> {
        self.requested.lock().unwrap().push(name.to_string());
        Ok(self.values.get(name).map(|v| ConfigValue::from(v.as_str())))
    }
}

/// A build context over the two mocks.
#[derive(Debug, Default)]
pub struct MockContext {
    pub arguments: MockArguments,
    pub environment: MockEnvironment,
}

#[allow(dead_code)]
impl MockContext {
    /// Creates a context from the two mocks.
    pub fn new(arguments: MockArguments, environment: MockEnvironment) -> Self {
        Self {
            arguments,
            environment,
        }
    }
}

impl BuildContext for MockContext {
    fn arguments(&self) -> &dyn ArgumentSource {
        &self.arguments
    }

    fn environment(&self) -> &dyn EnvironmentSource {
        &self.environment
    }
}
