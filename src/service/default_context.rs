// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default build context implementation.
//!
//! This module provides a `BuildContext` that owns one argument source and one
//! environment source, plus a builder for assembling it.

use crate::domain::{BuildContext, Result};
use crate::ports::{ArgumentSource, EnvironmentSource};
#[cfg(feature = "env")]
use std::collections::HashMap;
use std::fmt;

/// Default implementation of the build context.
///
/// # Examples
///
/// ```rust
/// use argenv::prelude::*;
///
/// # fn main() -> Result<()> {
/// // Explicit arguments, live process environment
/// let ctx = DefaultBuildContext::builder()
///     .with_cli_args(vec!["--target", "Release"])
///     .with_env_vars()
///     .build()?;
///
/// assert_eq!(
///     ctx.resolve_string("target", Some("MYTOOL_"), None)?.as_deref(),
///     Some("Release")
/// );
/// # Ok(())
/// # }
/// ```
pub struct DefaultBuildContext {
    arguments: Box<dyn ArgumentSource>,
    environment: Box<dyn EnvironmentSource>,
}

impl DefaultBuildContext {
    /// Creates a context from the two sources.
    pub fn new(
        arguments: Box<dyn ArgumentSource>,
        environment: Box<dyn EnvironmentSource>,
    ) -> Self {
        Self {
            arguments,
            environment,
        }
    }

    /// Creates a new build context builder.
    pub fn builder() -> BuildContextBuilder {
        BuildContextBuilder::new()
    }

    /// Creates a context over the process's own arguments and environment.
    ///
    /// Arguments are parsed from `std::env::args` (skipping the program name);
    /// environment variables are read live.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use argenv::prelude::*;
    ///
    /// # fn main() -> Result<()> {
    /// let ctx = DefaultBuildContext::from_process();
    /// let verbose = ctx.resolve_bool("verbose", Some("MYTOOL_"), false)?;
    /// # Ok(())
    /// # }
    /// ```
    #[cfg(all(feature = "cli", feature = "env"))]
    pub fn from_process() -> Self {
        use crate::adapters::{CommandLineAdapter, EnvVarAdapter};
        Self::new(
            Box::new(CommandLineAdapter::from_env_args()),
            Box::new(EnvVarAdapter::new()),
        )
    }
}

impl BuildContext for DefaultBuildContext {
    fn arguments(&self) -> &dyn ArgumentSource {
        self.arguments.as_ref()
    }

    fn environment(&self) -> &dyn EnvironmentSource {
        self.environment.as_ref()
    }
}

impl fmt::Debug for DefaultBuildContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultBuildContext")
            .field("arguments", &self.arguments.name())
            .field("environment", &self.environment.name())
            .finish()
    }
}

/// Builder for constructing a `DefaultBuildContext`.
///
/// A source that is never set falls back to an empty command line or the
/// live process environment, provided the matching feature is enabled.
/// Setting a source twice keeps the last one.
#[derive(Default)]
pub struct BuildContextBuilder {
    arguments: Option<Box<dyn ArgumentSource>>,
    environment: Option<Box<dyn EnvironmentSource>>,
}

impl BuildContextBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the argument source.
    pub fn with_argument_source(mut self, source: Box<dyn ArgumentSource>) -> Self {
        self.arguments = Some(source);
        self
    }

    /// Sets the environment source.
    pub fn with_environment_source(mut self, source: Box<dyn EnvironmentSource>) -> Self {
        self.environment = Some(source);
        self
    }

    /// Uses the given command-line arguments as the argument source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argenv::service::BuildContextBuilder;
    ///
    /// # fn main() -> argenv::domain::Result<()> {
    /// let ctx = BuildContextBuilder::new()
    ///     .with_cli_args(vec!["--target", "Release"])
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    #[cfg(feature = "cli")]
    pub fn with_cli_args<S: AsRef<str>>(self, args: Vec<S>) -> Self {
        use crate::adapters::CommandLineAdapter;
        self.with_argument_source(Box::new(CommandLineAdapter::from_args(args)))
    }

    /// Uses a `clap` parse result as the argument source.
    #[cfg(feature = "cli")]
    pub fn with_arg_matches(self, matches: &clap::ArgMatches) -> Self {
        use crate::adapters::CommandLineAdapter;
        self.with_argument_source(Box::new(CommandLineAdapter::from_arg_matches(matches)))
    }

    /// Uses the live process environment as the environment source.
    #[cfg(feature = "env")]
    pub fn with_env_vars(self) -> Self {
        use crate::adapters::EnvVarAdapter;
        self.with_environment_source(Box::new(EnvVarAdapter::new()))
    }

    /// Uses a fixed set of variables as the environment source.
    #[cfg(feature = "env")]
    pub fn with_env_values(self, values: HashMap<String, String>) -> Self {
        use crate::adapters::EnvVarAdapter;
        self.with_environment_source(Box::new(EnvVarAdapter::with_values(values)))
    }

    /// Builds the context.
    ///
    /// # Errors
    ///
    /// `ConfigError::MissingSource` if a source was not set and the feature
    /// providing its fallback is disabled.
    pub fn build(self) -> Result<DefaultBuildContext> {
        let arguments = match self.arguments {
            Some(source) => source,
            None => default_arguments()?,
        };
        let environment = match self.environment {
            Some(source) => source,
            None => default_environment()?,
        };

        tracing::debug!(
            "Built context with argument source '{}' and environment source '{}'",
            arguments.name(),
            environment.name()
        );

        Ok(DefaultBuildContext::new(arguments, environment))
    }
}

#[cfg(feature = "cli")]
fn default_arguments() -> Result<Box<dyn ArgumentSource>> {
    Ok(Box::new(crate::adapters::CommandLineAdapter::new()))
}

#[cfg(not(feature = "cli"))]
fn default_arguments() -> Result<Box<dyn ArgumentSource>> {
    Err(crate::domain::ConfigError::MissingSource { kind: "argument" })
}

#[cfg(feature = "env")]
fn default_environment() -> Result<Box<dyn EnvironmentSource>> {
    Ok(Box::new(crate::adapters::EnvVarAdapter::new()))
}

#[cfg(not(feature = "env"))]
fn default_environment() -> Result<Box<dyn EnvironmentSource>> {
    Err(crate::domain::ConfigError::MissingSource {
        kind: "environment",
    })
}
