// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the key and value types, the error type, and the
//! build context abstraction. It is independent of any particular source.

pub mod config_key;
pub mod config_value;
pub mod context;
pub mod errors;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_value::ConfigValue;
pub use context::BuildContext;
pub use errors::{ConfigError, Result};
