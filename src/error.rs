use std::io;
use thiserror::Error;

use crate::core::threshold::ThresholdError;

/// Custom error type for i3-status-info
#[derive(Error, Debug)]
pub enum StatusError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Threshold(#[from] ThresholdError),

    #[error("Invalid device rule: {0}")]
    InvalidRule(String),

    #[error("Missing required flag: --{0}")]
    MissingFlag(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Battery error: {0}")]
    Battery(#[from] battery::Error),

    #[error("Metric unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for i3-status-info
pub type Result<T> = std::result::Result<T, StatusError>;

impl StatusError {
    /// Create an invalid device rule error
    pub fn invalid_rule<S: Into<String>>(msg: S) -> Self {
        StatusError::InvalidRule(msg.into())
    }

    /// Create a missing flag error
    pub fn missing_flag<S: Into<String>>(flag: S) -> Self {
        StatusError::MissingFlag(flag.into())
    }

    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        StatusError::Config(msg.into())
    }

    pub fn unavailable<S: Into<String>>(msg: S) -> Self {
        StatusError::Unavailable(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        StatusError::Other(msg.into())
    }

    /// Configuration errors abort the invocation with exit code 1.
    ///
    /// Everything else is a failed hardware or OS query, which the
    /// commands report as an unavailable reading instead.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            StatusError::Threshold(_)
                | StatusError::InvalidRule(_)
                | StatusError::MissingFlag(_)
                | StatusError::Config(_)
        )
    }
}
