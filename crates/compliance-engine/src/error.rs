use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a suite from configuration
///
/// Running checks never fails: a missing or malformed section is reported as
/// a failed check, not as an error.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown compliance check: {0}")]
    UnknownCheck(String),

    #[error("Compliance check listed more than once: {0}")]
    DuplicateCheck(String),

    #[error("No compliance checks configured")]
    NoChecks,

    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
