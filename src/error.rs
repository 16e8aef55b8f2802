//! Unified error types for hostwatch
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from notification delivery
    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl ConfigError {
    pub(crate) fn invalid(key: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

/// Errors from temperature probes and other host metric sources
#[derive(Error, Debug)]
pub enum SamplerError {
    /// Probe cannot run on this platform
    #[error("Probe '{0}' is not supported on this platform")]
    Unsupported(&'static str),

    /// Probe ran but found no usable sensor
    #[error("No sensor available for probe '{0}'")]
    NoSensor(&'static str),

    /// External command exited unsuccessfully
    #[error("Command '{command}' failed: {message}")]
    CommandFailed { command: String, message: String },

    /// Sensor output could not be parsed
    #[error("Could not parse sensor output '{0}'")]
    Parse(String),

    /// IO error while reading a sensor
    #[error("Sensor IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from notification delivery
#[derive(Error, Debug)]
pub enum NotifyError {
    /// HTTP transport failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("Webhook rejected the request with HTTP {0}")]
    Status(u16),

    /// Dispatch worker is gone
    #[error("Notification worker is not running")]
    WorkerStopped,
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
