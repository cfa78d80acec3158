//! Core error types for sortboard-core.
//!
//! Board operations are total given valid preconditions; a `BoardError` is
//! a contract violation by the caller, not a recoverable runtime condition,
//! and callers are expected to surface it loudly.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for sortboard-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Board contract violations
    #[error("Board error: {0}")]
    Board(#[from] BoardError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Precondition violations on board operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The id matches nothing on the board
    #[error("unknown item id: {id}")]
    UnknownItem { id: String },

    /// `pick` called for an item already sitting in a column
    #[error("item '{id}' is not in the available pool")]
    NotAvailable { id: String },

    /// `put_back` called for an item sitting in the available pool
    #[error("item '{id}' is not in a column")]
    NotInColumn { id: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Config directory could not be determined or created
    #[error("Failed to resolve config directory: {0}")]
    DirUnavailable(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
