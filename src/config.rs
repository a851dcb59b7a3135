//! Command-line configuration
//!
//! ```text
//! dsconsole [--capacity <N>] [--no-animation]
//! ```
//!
//! The capacity applies to the stack and queue demonstrations. Disabling
//! animation makes every typewriter, progress bar, flash and playback finish
//! immediately.

use crate::structures::constants::{DEFAULT_CAPACITY, MAX_CAPACITY};
use std::fmt;

/// Runtime options for one program run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub capacity: usize,
    pub animations: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            capacity: DEFAULT_CAPACITY,
            animations: true,
        }
    }
}

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Config),
    Help,
}

/// Errors from command-line parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A flag that takes a value appeared last
    MissingValue { flag: String },

    /// The value for a numeric flag was not a number
    InvalidNumber { flag: String, value: String },

    /// Capacity of 0 leaves nothing to demonstrate
    ZeroCapacity,

    /// Capacity above [`MAX_CAPACITY`]
    CapacityTooLarge { value: usize },

    /// Anything not recognised
    UnknownArgument { arg: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingValue { flag } => write!(f, "Missing value for '{}'", flag),
            ConfigError::InvalidNumber { flag, value } => {
                write!(f, "Invalid number '{}' for '{}'", value, flag)
            }
            ConfigError::ZeroCapacity => write!(f, "Capacity must be at least 1"),
            ConfigError::CapacityTooLarge { value } => {
                write!(f, "Capacity {} exceeds the maximum of {}", value, MAX_CAPACITY)
            }
            ConfigError::UnknownArgument { arg } => write!(f, "Unknown argument '{}'", arg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Parse the arguments that follow the program name
    pub fn from_args<I>(args: I) -> Result<Command, ConfigError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--no-animation" => config.animations = false,
                "-c" | "--capacity" => {
                    let value = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue { flag: arg.clone() })?;
                    config.capacity = parse_capacity(&arg, &value)?;
                }
                other => {
                    // --capacity=N form
                    match other.strip_prefix("--capacity=") {
                        Some(value) => config.capacity = parse_capacity("--capacity", value)?,
                        None => {
                            return Err(ConfigError::UnknownArgument {
                                arg: other.to_string(),
                            })
                        }
                    }
                }
            }
        }

        Ok(Command::Run(config))
    }
}

fn parse_capacity(flag: &str, value: &str) -> Result<usize, ConfigError> {
    let capacity: usize = value.parse().map_err(|_| ConfigError::InvalidNumber {
        flag: flag.to_string(),
        value: value.to_string(),
    })?;
    if capacity == 0 {
        return Err(ConfigError::ZeroCapacity);
    }
    if capacity > MAX_CAPACITY {
        return Err(ConfigError::CapacityTooLarge { value: capacity });
    }
    Ok(capacity)
}

/// Usage text printed for `--help` and argument errors
pub fn usage(program_name: &str) -> String {
    format!(
        "Usage: {} [options]\n\
         \n\
         Options:\n\
         \x20 -c, --capacity <N>   Capacity of the stack and queue (default {})\n\
         \x20     --no-animation   Skip typewriter, loading and playback delays\n\
         \x20 -h, --help           Show this message",
        program_name, DEFAULT_CAPACITY
    )
}
