//! Configuration for the inspector.
//!
//! Values come from three layers, later ones winning:
//!
//! - built-in defaults
//! - an optional TOML file (`--config PATH`)
//! - environment variables:
//!   - `CATBUFFER_MAX_INPUT_BYTES` (default: 16 MiB)
//!   - `CATBUFFER_LOG_LEVEL`       (default: "warn")
//!   - `CATBUFFER_OUTPUT`          (default: "summary")
//!
//! Command-line flags are applied on top by the binary.

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_MAX_INPUT_BYTES: usize = 16 * 1024 * 1024;

pub const ENV_MAX_INPUT_BYTES: &str = "CATBUFFER_MAX_INPUT_BYTES";
pub const ENV_LOG_LEVEL: &str = "CATBUFFER_LOG_LEVEL";
pub const ENV_OUTPUT: &str = "CATBUFFER_OUTPUT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value {value:?} for {key}: {reason}")]
    Env {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("max_input_bytes must be greater than zero")]
    ZeroInputBound,
}

/// How a decoded entity is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// One line: family, kind, size.
    #[default]
    Summary,
    /// Full structure dump.
    Debug,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "summary" => Ok(OutputMode::Summary),
            "debug" => Ok(OutputMode::Debug),
            other => Err(format!("expected `summary` or `debug`, got `{other}`")),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputMode::Summary => "summary",
            OutputMode::Debug => "debug",
        })
    }
}

/// Inspector configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Inputs longer than this are rejected before any decoding.
    pub max_input_bytes: usize,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_level: String,

    pub output: OutputMode,

    /// Re-encode every decoded entity and compare with the input.
    pub verify_roundtrip: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            log_level: "warn".to_string(),
            output: OutputMode::Summary,
            verify_roundtrip: true,
        }
    }
}

impl Config {
    /// Defaults, then `path` if given, then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Config::default(),
        };
        config.apply_env(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Override fields from the variables `lookup` knows about.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.max_input_bytes = read_or(&lookup, ENV_MAX_INPUT_BYTES, self.max_input_bytes)?;
        self.output = read_or(&lookup, ENV_OUTPUT, self.output)?;
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_input_bytes == 0 {
            return Err(ConfigError::ZeroInputBound);
        }
        Ok(())
    }
}

fn read_or<T, F>(lookup: &F, key: &'static str, current: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value.trim().parse::<T>().map_err(|e| ConfigError::Env {
            key,
            reason: e.to_string(),
            value,
        }),
        None => Ok(current),
    }
}
