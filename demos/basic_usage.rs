// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for argenv.
//!
//! This example demonstrates:
//! - Creating a build context over the process arguments and environment
//! - Resolving boolean and string settings with a prefix
//! - Falling back to defaults, or to nothing at all
//! - Parsing a setting into a typed value
//!
//! To run this example:
//! ```bash
//! # Set some environment variables
//! export DEMO_configuration="Release"
//! export DEMO_publish="TRUE"
//! export DEMO_jobs="4"
//!
//! # Run the example, overriding one setting on the command line
//! cargo run --example basic_usage -- --configuration Debug --verbose
//! ```

use argenv::prelude::*;

const PREFIX: &str = "DEMO_";

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== argenv: Basic Usage ===\n");

    let ctx = DefaultBuildContext::from_process();
    println!("Build context created from process arguments and environment.\n");

    // Example 1: String settings
    println!("--- Example 1: String Values ---");
    let configuration = ctx.resolve_string("configuration", Some(PREFIX), Some("Debug"))?;
    println!(
        "configuration = {}",
        configuration.as_deref().unwrap_or_default()
    );

    match ctx.resolve_string_without_default("output", Some(PREFIX))? {
        Some(output) => println!("output        = {}", output),
        None => println!("output        = (not set)"),
    }

    // Example 2: Boolean settings
    println!("\n--- Example 2: Boolean Values ---");
    let verbose = ctx.resolve_bool("verbose", Some(PREFIX), false)?;
    let publish = ctx.resolve_bool("publish", Some(PREFIX), false)?;
    println!("verbose = {}", verbose);
    println!("publish = {}", publish);

    // Anything other than "true" (any case) is false
    let sign = ctx.resolve_bool("sign", Some(PREFIX), true)?;
    println!("sign    = {} (set DEMO_sign=yes to see the lenient rule)", sign);

    // Example 3: Unprefixed variables
    println!("\n--- Example 3: Unprefixed Lookup ---");
    let ci = ctx.resolve_bool_unprefixed("CI", false)?;
    println!("CI = {}", ci);

    // Example 4: Typed values
    println!("\n--- Example 4: Parsed Values ---");
    match ctx.resolve_parsed::<u32>("jobs", Some(PREFIX), 1) {
        Ok(jobs) => println!("jobs = {}", jobs),
        Err(e) => println!("jobs could not be parsed: {}", e),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
