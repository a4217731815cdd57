// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for argument > environment > default precedence.

mod common;

use argenv::prelude::*;
use common::{MockArguments, MockContext, MockEnvironment};

const KEY: &str = "someVariable";
const PREFIX: &str = "somePrefix_";

fn env_name() -> String {
    format!("{PREFIX}{KEY}")
}

#[test]
fn test_bool_default_when_no_source_has_value() {
    let ctx = MockContext::default();
    assert!(ctx.resolve_bool("x", Some("P_"), true).unwrap());
    assert_eq!(ctx.environment.requested(), vec!["P_x".to_string()]);
}

#[test]
fn test_bool_argument_overrides_contrary_environment() {
    let ctx = MockContext::new(
        MockArguments::new().with_value("x", "false"),
        MockEnvironment::new().with_value("P_x", "true"),
    );
    assert!(!ctx.resolve_bool("x", Some("P_"), true).unwrap());
}

#[test]
fn test_bool_true_argument_overrides_false_environment() {
    let ctx = MockContext::new(
        MockArguments::new().with_value(KEY, "True"),
        MockEnvironment::new().with_value(env_name(), "False"),
    );
    assert!(ctx.resolve_bool(KEY, Some(PREFIX), false).unwrap());
}

#[test]
fn test_bool_environment_overrides_default() {
    let ctx = MockContext::new(
        MockArguments::new(),
        MockEnvironment::new().with_value(env_name(), "False"),
    );
    assert!(!ctx.resolve_bool(KEY, Some(PREFIX), true).unwrap());
}

#[test]
fn test_bool_environment_ignored_under_other_prefix() {
    let ctx = MockContext::new(
        MockArguments::new(),
        MockEnvironment::new().with_value(format!("other_{KEY}"), "false"),
    );
    assert!(ctx.resolve_bool(KEY, Some(PREFIX), true).unwrap());
}

#[test]
fn test_bool_prefix_only_applies_to_environment() {
    // An argument spelled with the prefix is a different argument.
    let ctx = MockContext::new(
        MockArguments::new().with_value(env_name(), "true"),
        MockEnvironment::new(),
    );
    assert!(!ctx.resolve_bool(KEY, Some(PREFIX), false).unwrap());
    assert_eq!(ctx.arguments.checked(), vec![KEY.to_string()]);
}

#[test]
fn test_bool_unprefixed_overload() {
    let ctx = MockContext::new(
        MockArguments::new(),
        MockEnvironment::new().with_value(KEY, "true"),
    );
    assert!(ctx.resolve_bool_unprefixed(KEY, false).unwrap());
    assert_eq!(ctx.environment.requested(), vec![KEY.to_string()]);
}

#[test]
fn test_string_argument_wins() {
    let ctx = MockContext::new(
        MockArguments::new().with_value(KEY, "Some"),
        MockEnvironment::new().with_value(env_name(), "Other"),
    );
    let value = ctx.resolve_string(KEY, Some(PREFIX), Some("Default")).unwrap();
    assert_eq!(value.as_deref(), Some("Some"));
}

#[test]
fn test_string_environment_when_argument_absent() {
    let ctx = MockContext::new(
        MockArguments::new(),
        MockEnvironment::new().with_value("P_x", "Some"),
    );
    let value = ctx.resolve_string("x", Some("P_"), None).unwrap();
    assert_eq!(value.as_deref(), Some("Some"));
}

#[test]
fn test_string_without_default_is_none() {
    let ctx = MockContext::default();
    assert_eq!(
        ctx.resolve_string_without_default("x", Some("P_")).unwrap(),
        None
    );
}

#[test]
fn test_string_default_when_nothing_set() {
    let ctx = MockContext::default();
    let value = ctx.resolve_string("x", None, Some("Default")).unwrap();
    assert_eq!(value.as_deref(), Some("Default"));
    assert_eq!(ctx.environment.requested(), vec!["x".to_string()]);
}

#[test]
fn test_none_prefix_matches_empty_prefix() {
    let ctx = MockContext::new(
        MockArguments::new(),
        MockEnvironment::new().with_value(KEY, "Some"),
    );

    assert_eq!(
        ctx.resolve_string(KEY, None, None).unwrap(),
        ctx.resolve_string(KEY, Some(""), None).unwrap()
    );
    assert_eq!(
        ctx.resolve_bool(KEY, None, true).unwrap(),
        ctx.resolve_bool(KEY, Some(""), true).unwrap()
    );
}

#[test]
fn test_resolution_does_not_mutate_sources() {
    let ctx = MockContext::new(
        MockArguments::new().with_value(KEY, "Some"),
        MockEnvironment::new().with_value(env_name(), "Other"),
    );
    let before = ctx.environment.values();

    for _ in 0..3 {
        assert_eq!(
            ctx.resolve_string(KEY, Some(PREFIX), None).unwrap().as_deref(),
            Some("Some")
        );
    }

    assert_eq!(ctx.environment.values(), before);
}

#[test]
#[cfg(all(feature = "cli", feature = "env"))]
fn test_precedence_with_bundled_adapters() {
    use std::collections::HashMap;

    let env = HashMap::from([
        ("TOOL_target".to_string(), "Debug".to_string()),
        ("TOOL_output".to_string(), "artifacts".to_string()),
    ]);
    let ctx = DefaultBuildContext::builder()
        .with_cli_args(vec!["--target=Release"])
        .with_env_values(env)
        .build()
        .unwrap();

    // CLI beats env
    assert_eq!(
        ctx.resolve_string("target", Some("TOOL_"), Some("Debug"))
            .unwrap()
            .as_deref(),
        Some("Release")
    );
    // Env beats default
    assert_eq!(
        ctx.resolve_string("output", Some("TOOL_"), Some("out"))
            .unwrap()
            .as_deref(),
        Some("artifacts")
    );
    // Default last
    assert_eq!(
        ctx.resolve_string("config", Some("TOOL_"), Some("build.toml"))
            .unwrap()
            .as_deref(),
        Some("build.toml")
    );
}
