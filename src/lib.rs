// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolve a setting from a command-line argument, an environment variable, or a default.
//!
//! Build and automation scripts often accept the same setting from several
//! places: `--target Release` on the command line, `MYTOOL_target=Release` in
//! CI, or a built-in default. This crate does that fallback in one call, with
//! one fixed precedence:
//!
//! 1. the argument named `key`, if present;
//! 2. otherwise the environment variable `prefix + key`, if set;
//! 3. otherwise the caller's default.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: `ConfigKey`, `ConfigValue`, `ConfigError`, and the `BuildContext` host abstraction
//! - **Ports**: The two capabilities consumed (`ArgumentSource`, `EnvironmentSource`)
//! - **Adapters**: Implementations backed by the command line and the process environment
//! - **Service**: The resolution operations (`ArgumentOrEnvironment`) and a ready-made context
//!
//! # Booleans
//!
//! Boolean settings are `true` only when the chosen text is `"true"` in any
//! letter case. Every other text, `"1"`, `"yes"` and typos included, reads as
//! `false` and never raises an error. Build scripts depend on this, so it is
//! kept as is; see [`ConfigValue::is_true`](domain::ConfigValue::is_true).
//!
//! # Absence
//!
//! String settings resolve to `Option<String>`. An empty argument or variable
//! is a real value (`Some("")`); `None` means no source and no default supplied
//! anything.
//!
//! # Feature Flags
//!
//! - `env`: Enable the process environment adapter (default)
//! - `cli`: Enable the command-line adapter, including `clap` integration (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use argenv::prelude::*;
//! use std::collections::HashMap;
//!
//! # fn main() -> Result<()> {
//! let ctx = DefaultBuildContext::builder()
//!     .with_cli_args(vec!["--target", "Release"])
//!     .with_env_values(HashMap::from([
//!         ("MYTOOL_target".to_string(), "Debug".to_string()),
//!         ("MYTOOL_publish".to_string(), "True".to_string()),
//!     ]))
//!     .build()?;
//!
//! // The argument beats the environment
//! let target = ctx.resolve_string("target", Some("MYTOOL_"), Some("Debug"))?;
//! assert_eq!(target.as_deref(), Some("Release"));
//!
//! // The environment beats the default
//! assert!(ctx.resolve_bool("publish", Some("MYTOOL_"), false)?);
//!
//! // Nothing set and no default
//! assert_eq!(ctx.resolve_string_without_default("output", Some("MYTOOL_"))?, None);
//! # Ok(())
//! # }
//! ```
//!
//! Any host type can take part by implementing [`BuildContext`](domain::BuildContext)
//! over its own sources.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{BuildContext, ConfigError, ConfigKey, ConfigValue, Result};
    pub use crate::ports::{ArgumentSource, EnvironmentSource};
    pub use crate::service::{ArgumentOrEnvironment, BuildContextBuilder, DefaultBuildContext};

    // Re-export adapters based on feature flags
    #[cfg(feature = "cli")]
    pub use crate::adapters::CommandLineAdapter;
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarAdapter;
}
