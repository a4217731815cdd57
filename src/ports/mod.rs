// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the two capabilities the resolver consumes: a source of
//! named arguments and a source of environment variables. Adapters in the
//! adapters layer implement them; callers may supply their own.

pub mod argument;
pub mod environment;

// Re-export commonly used types
pub use argument::ArgumentSource;
pub use environment::EnvironmentSource;
