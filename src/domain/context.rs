// SPDX-License-Identifier: MIT OR Apache-2.0

//! Build context trait definition.
//!
//! A `BuildContext` is whatever the host hands a build script: it pairs an
//! argument source with an environment source. The resolution operations in
//! [`crate::service::ArgumentOrEnvironment`] are available on every type that
//! implements this trait.

use crate::ports::{ArgumentSource, EnvironmentSource};

/// The host abstraction exposing both lookup capabilities.
///
/// # Examples
///
/// ```rust
/// use argenv::domain::BuildContext;
/// use argenv::ports::{ArgumentSource, EnvironmentSource};
///
/// struct ScriptContext<A, E> {
///     arguments: A,
///     environment: E,
/// }
///
/// impl<A: ArgumentSource, E: EnvironmentSource> BuildContext for ScriptContext<A, E> {
///     fn arguments(&self) -> &dyn ArgumentSource {
///         &self.arguments
///     }
///
///     fn environment(&self) -> &dyn EnvironmentSource {
///         &self.environment
///     }
/// }
/// ```
pub trait BuildContext: Send + Sync {
    /// Returns the source of command-line-style arguments.
    fn arguments(&self) -> &dyn ArgumentSource;

    /// Returns the source of environment variables.
    fn environment(&self) -> &dyn EnvironmentSource;
}

impl<C: BuildContext + ?Sized> BuildContext for &C {
    fn arguments(&self) -> &dyn ArgumentSource {
        (**self).arguments()
    }

    fn environment(&self) -> &dyn EnvironmentSource {
        (**self).environment()
    }
}

impl<C: BuildContext + ?Sized> BuildContext for std::sync::Arc<C> {
    fn arguments(&self) -> &dyn ArgumentSource {
        (**self).arguments()
    }

    fn environment(&self) -> &dyn EnvironmentSource {
        (**self).environment()
    }
}
