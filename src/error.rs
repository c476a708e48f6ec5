//! Domain error types for rowpick
//!
//! Provides structured error types for different domains:
//! - `SelectionError` for invalid navigation requests
//! - `CliError` for command-line parsing
//! - `RowpickError` as the top-level error type

use thiserror::Error;

/// Top-level error type for rowpick
#[derive(Debug, Error)]
pub enum RowpickError {
    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    #[error("Invalid arguments: {0}")]
    Cli(#[from] CliError),
}

/// Errors related to a navigation request
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Row count must not be negative, got {0}")]
    NegativeRowCount(i64),

    #[error("Row count {0} does not fit this platform")]
    RowCountTooLarge(i64),
}

/// Errors related to command-line arguments
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("Invalid number for {flag}: '{value}'")]
    InvalidNumber { flag: String, value: String },

    #[error("Invalid direction '{0}', expected 'up' or 'down'")]
    InvalidDirection(String),

    #[error("Unknown flag '{0}'")]
    UnknownFlag(String),

    #[error("--rows is required")]
    MissingRowCount,
}

/// Result type alias for RowpickError
pub type Result<T> = std::result::Result<T, RowpickError>;

/// Result type alias for SelectionError
pub type SelectionResult<T> = std::result::Result<T, SelectionError>;

/// Result type alias for CliError
pub type CliResult<T> = std::result::Result<T, CliError>;
