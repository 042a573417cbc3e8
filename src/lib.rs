//! Rolodex - a line-oriented contact book with JSON file persistence.
//!
//! Contacts are kept in memory in an insertion-ordered book, persisted as a
//! single JSON file, and driven through a small free-text command language
//! (`add`, `change`, `phone`, `show all`).
//!
//! # Architecture
//!
//! - **domain**: validated value objects for names, phone numbers, and birthdays
//! - **models**: the contact [`Record`]
//! - **book**: the insertion-ordered [`AddressBook`]
//! - **storage**: whole-file JSON save/load with a configurable load policy
//! - **commands**: free-text command parsing and dispatch
//! - **config**: configuration from environment variables
//! - **error**: crate-level error types

// Re-export commonly used types
pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;

pub use book::AddressBook;
pub use commands::{execute, parse, Command, Outcome};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use models::Record;
pub use storage::LoadPolicy;
