//! Configuration loading errors.

use std::fmt;

/// Errors raised while loading configuration.
#[derive(Debug, Clone)]
pub enum ConfigLoadError {
    /// The config file could not be read.
    Io(String),
    /// The YAML failed to parse or validate.
    Parse(String),
}

impl fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "Failed to read config: {}", msg),
            Self::Parse(msg) => write!(f, "Failed to parse config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigLoadError {}
