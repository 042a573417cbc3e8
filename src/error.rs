//! Error types for the rolodex crate.
//!
//! Crate-level errors are defined with `thiserror`; domain validation
//! errors live in [`crate::domain::errors`].

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Paged iteration needs a positive page size
    #[error("Page size must be greater than zero, got: {0}")]
    InvalidPageSize(usize),
}

/// Errors raised while executing one command line.
///
/// The `Display` strings are the exact one-line replies shown to the
/// user; the dispatch boundary converts every variant with
/// `to_string()`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Lookup by name missed
    #[error("Contact not found.")]
    ContactNotFound,

    /// Command is missing required tokens
    #[error("Invalid input. Please enter name and phone number separated by a space.")]
    MalformedInput,

    /// The line matched no known command
    #[error("Invalid command. Please try again.")]
    UnknownCommand,

    /// A field value failed domain validation; the reply is the
    /// validation message itself
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

/// Errors from loading or saving the backing JSON file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing file does not exist
    #[error("Address book file not found: {0}")]
    NotFound(PathBuf),

    /// The backing file exists but could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file could not be written
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid JSON or not the expected shape
    #[error("Malformed address book file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A stored record failed the same validation as interactive input
    #[error("Invalid stored record for \"{name}\": {source}")]
    InvalidRecord {
        name: String,
        #[source]
        source: ValidationError,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
