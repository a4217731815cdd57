// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line argument source adapter.
//!
//! This module provides an adapter that holds named arguments parsed from a
//! command line, either by its own small parser or taken from a `clap`
//! parse result.

use crate::domain::{ConfigKey, ConfigValue, Result};
use crate::ports::argument::{not_found, ArgumentSource};
use clap::parser::ValueSource;
use clap::ArgMatches;
use std::collections::{HashMap, HashSet};

/// Text recorded for a flag given without a value.
const FLAG_VALUE: &str = "true";

/// Argument source adapter for command-line arguments.
///
/// `from_args` understands these forms:
/// - `--key=value`: Long form with equals sign
/// - `--key value`: Long form with space-separated value
/// - `-k value`: Short form with space-separated value
/// - `--flag`: A flag followed by another flag (or nothing) records `"true"`
///
/// A following token that starts with `-` is read as the next flag, unless it
/// is a negative number: `--offset -5` records `"-5"`. Other dash-led values
/// need the `--key=value` form.
///
/// When a key is given more than once the last occurrence wins. Positional
/// arguments are ignored.
///
/// # Examples
///
/// ```rust
/// use argenv::adapters::CommandLineAdapter;
/// use argenv::domain::ConfigKey;
/// use argenv::ports::ArgumentSource;
///
/// let args = vec!["--target=Release", "--verbose", "-j", "8"];
/// let adapter = CommandLineAdapter::from_args(args);
///
/// let target = adapter.argument(&ConfigKey::from("target")).unwrap();
/// assert_eq!(target.as_str(), "Release");
/// assert!(adapter.argument(&ConfigKey::from("verbose")).unwrap().is_true());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandLineAdapter {
    /// Parsed argument values keyed by their original spelling, each tagged
    /// with the position at which it was last given
    values: HashMap<String, (usize, String)>,
    /// Position assigned to the next recorded value
    next: usize,
    /// Whether keys are matched without regard to case
    ignore_case: bool,
}

impl CommandLineAdapter {
    /// Creates a new command-line adapter with no arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new command-line adapter from a vector of arguments.
    ///
    /// The first element is treated as an argument, not as the program name.
    pub fn from_args<S: AsRef<str>>(args: Vec<S>) -> Self {
        let mut adapter = Self::new();
        adapter.parse_args(args);
        adapter
    }

    /// Creates a new command-line adapter from the process's command-line arguments.
    ///
    /// This skips the first argument (the program name) and parses the rest.
    /// Arguments that are not valid Unicode are converted lossily.
    pub fn from_env_args() -> Self {
        let args: Vec<String> = std::env::args_os()
            .skip(1)
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        Self::from_args(args)
    }

    /// Creates a command-line adapter from a `clap` parse result.
    ///
    /// Every argument whose value came from the command line is taken, keyed
    /// by its clap id. Values filled in from defaults or from clap's own
    /// environment fallback are skipped, so the environment source remains
    /// the only place environment variables come from. For arguments given
    /// several values the last one is kept. `SetTrue` flags record `"true"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argenv::adapters::CommandLineAdapter;
    /// use argenv::domain::ConfigKey;
    /// use argenv::ports::ArgumentSource;
    /// use clap::{Arg, ArgAction, Command};
    ///
    /// let matches = Command::new("build")
    ///     .arg(Arg::new("target").long("target"))
    ///     .arg(Arg::new("verbose").long("verbose").action(ArgAction::SetTrue))
    ///     .try_get_matches_from(["build", "--target", "Release"])
    ///     .unwrap();
    ///
    /// let adapter = CommandLineAdapter::from_arg_matches(&matches);
    /// assert!(adapter.has_argument(&ConfigKey::from("target")).unwrap());
    /// assert!(!adapter.has_argument(&ConfigKey::from("verbose")).unwrap());
    /// ```
    pub fn from_arg_matches(matches: &ArgMatches) -> Self {
        let mut adapter = Self::new();

        for id in matches.ids() {
            let id = id.as_str();
            if matches.value_source(id) != Some(ValueSource::CommandLine) {
                continue;
            }

            match matches.try_get_raw(id) {
                Ok(Some(raw)) => {
                    if let Some(last) = raw.last() {
                        adapter.insert(id, &last.to_string_lossy());
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::debug!("Skipping argument '{}' from clap matches: {}", id, e);
                }
            }
        }

        tracing::debug!(
            "Collected {} arguments from clap matches",
            adapter.values.len()
        );

        adapter
    }

    /// Sets whether keys are matched without regard to case.
    ///
    /// When enabled, `--Target` and `--target` name the same argument and a
    /// lookup for `TARGET` finds either. If several spellings were given, the
    /// one given last on the command line wins. Keys keep their original
    /// spelling, so turning the setting off again restores exact matching.
    pub fn ignore_case(mut self, enabled: bool) -> Self {
        self.ignore_case = enabled;
        self
    }

    /// Returns the number of distinct arguments held.
    ///
    /// With `ignore_case` enabled, spellings that differ only by case count once.
    pub fn len(&self) -> usize {
        if self.ignore_case {
            self.values
                .keys()
                .map(|k| k.to_lowercase())
                .collect::<HashSet<_>>()
                .len()
        } else {
            self.values.len()
        }
    }

    /// Returns whether no arguments are held.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn lookup(&self, key: &ConfigKey) -> Option<&String> {
        if !self.ignore_case {
            return self.values.get(key.as_str()).map(|(_, value)| value);
        }

        let wanted = key.as_str().to_lowercase();
        self.values
            .iter()
            .filter(|(k, _)| k.to_lowercase() == wanted)
            .max_by_key(|(_, (position, _))| *position)
            .map(|(_, (_, value))| value)
    }

    fn insert(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), (self.next, value.to_string()));
        self.next += 1;
    }

    /// Parses command-line arguments and populates the values map.
    fn parse_args<S: AsRef<str>>(&mut self, args: Vec<S>) {
        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_ref();

            // Handle --key=value format
            if let Some((key, value)) = arg.strip_prefix("--").and_then(|s| s.split_once('=')) {
                if !key.is_empty() {
                    self.insert(key, value);
                }
                i += 1;
                continue;
            }

            // Handle --key value, --flag, and -k value formats
            let key = match arg.strip_prefix("--") {
                Some(long) => long,
                None if arg.starts_with('-') && arg.chars().count() == 2 => &arg[1..],
                None => {
                    i += 1;
                    continue;
                }
            };
            if key.is_empty() {
                // A bare "--" carries no name
                i += 1;
                continue;
            }

            // Make sure the next argument is not another flag
            match args.get(i + 1).map(|next| next.as_ref()) {
                Some(next) if !next.starts_with('-') || is_negative_number(next) => {
                    self.insert(key, next);
                    i += 2;
                }
                _ => {
                    self.insert(key, FLAG_VALUE);
                    i += 1;
                }
            }
        }
    }
}

/// Returns whether `arg` reads as a negative number such as `-5` or `-0.25`.
fn is_negative_number(arg: &str) -> bool {
    arg.strip_prefix('-').is_some_and(|digits| {
        digits.starts_with(|c: char| c.is_ascii_digit() || c == '.')
            && digits.parse::<f64>().is_ok()
    })
}

impl ArgumentSource for CommandLineAdapter {
    fn name(&self) -> &str {
        "cli"
    }

    fn has_argument(&self, key: &ConfigKey) -> Result<bool> {
        Ok(self.lookup(key).is_some())
    }

    fn argument(&self, key: &ConfigKey) -> Result<ConfigValue> {
        self.lookup(key)
            .map(|v| ConfigValue::from(v.as_str()))
            .ok_or_else(|| not_found(key))
    }
}
