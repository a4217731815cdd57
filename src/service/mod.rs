// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the resolution operations and the default context.
//!
//! [`ArgumentOrEnvironment`] carries the precedence rule and is implemented for
//! every `BuildContext`. [`DefaultBuildContext`] is a ready-made context built
//! from the bundled adapters or from caller-supplied sources.

pub mod default_context;
pub mod resolver;

// Re-export commonly used types
pub use default_context::{BuildContextBuilder, DefaultBuildContext};
pub use resolver::ArgumentOrEnvironment;
