//! Error types and handling for the `SkyWatch` application

use thiserror::Error;

/// Main error type for the `SkyWatch` application
#[derive(Error, Debug)]
pub enum SkyWatchError {
    /// Network communication errors (transport failure or non-success status)
    #[error("Network error: {message}")]
    Network { message: String },

    /// Malformed payloads from the backend
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Location service could not produce a position
    #[error("Location unavailable: {message}")]
    LocationUnavailable { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl SkyWatchError {
    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new location-unavailable error
    pub fn location_unavailable<S: Into<String>>(message: S) -> Self {
        Self::LocationUnavailable {
            message: message.into(),
        }
    }

    /// Create a new invalid-input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SkyWatchError::Network { message } => message.clone(),
            SkyWatchError::Parse { .. } => {
                "Received an unreadable response from the weather service.".to_string()
            }
            SkyWatchError::LocationUnavailable { message } => message.clone(),
            SkyWatchError::InvalidInput { message } => {
                format!("Invalid input: {message}")
            }
            SkyWatchError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            SkyWatchError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
