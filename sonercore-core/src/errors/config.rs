//! Configuration loading errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading `sonercore.toml`
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for the expected schema
    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A value parsed but is not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
