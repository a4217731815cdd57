// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing source implementations.
//!
//! This module contains concrete implementations of the capability traits
//! defined in the ports layer: command-line arguments for `ArgumentSource`
//! and the process environment for `EnvironmentSource`.

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "env")]
pub mod env_var;

// Re-export adapters based on feature flags
#[cfg(feature = "cli")]
pub use cli::CommandLineAdapter;
#[cfg(feature = "env")]
pub use env_var::EnvVarAdapter;
