//! CLI-specific error types and mappings.
//!
//! This module provides the error type for the CLI adapter and mappings
//! from `CoreError` to exit codes and user-facing messages.

use pokedex_core::{CoreError, SourceError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// No record exists for the requested id.
    #[error("{0}")]
    NotFound(String),

    /// Transport failure talking to the remote API.
    #[error("Network error: {0}")]
    Network(String),

    /// The remote API answered with an unusable body.
    #[error("Invalid response: {0}")]
    Protocol(String),

    /// Database open or query error.
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error writing the rendered output.
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error (record not found)
    /// - 2: Misuse of shell command (raised by clap before bootstrap)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound(_) => 1,
            Self::Database(_) => 65, // EX_DATAERR
            Self::Network(_) => 69,  // EX_UNAVAILABLE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Protocol(_) => 76, // EX_PROTOCOL
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<SourceError> for CliError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::NotFound { .. } => Self::NotFound(err.to_string()),
            SourceError::Network { message } => Self::Network(message),
            SourceError::InvalidResponse { message } => Self::Protocol(message),
            SourceError::Storage { message } => Self::Database(message),
            SourceError::Configuration { message } => Self::Config(message),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Source(source_err) => source_err.into(),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
