//! Unified error types for the attendance core.
//!
//! Lookups that find nothing return `Option::None` instead of an error; the
//! variants here cover rejected input and configuration failures only.

use thiserror::Error;

/// Every error the attendance crate can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// A status value outside `present`, `absent`, `late`, `excused`.
    #[error("Invalid attendance status: {value:?}")]
    InvalidStatus {
        /// The rejected input
        value: String,
    },

    /// A date that is not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid date: {value:?} (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The rejected input
        value: String,
    },

    /// A month that is not a valid `YYYY-MM` key.
    #[error("Invalid month: {value:?} (expected YYYY-MM)")]
    InvalidMonth {
        /// The rejected input
        value: String,
    },

    /// A weekend entry that does not name a day of the week.
    #[error("Invalid weekday: {value:?}")]
    InvalidWeekday {
        /// The rejected input
        value: String,
    },

    /// Two teachers in the directory share an identifier.
    #[error("Duplicate teacher id: {id}")]
    DuplicateTeacher {
        /// The repeated identifier
        id: String,
    },

    /// Two teachers of the same school share an email address.
    #[error("Duplicate email {email} in school {school_id}")]
    DuplicateEmail {
        /// The repeated email address
        email: String,
        /// School both teachers belong to
        school_id: String,
    },

    /// Seed file or environment settings could not be used.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// The ledger could not be converted to or from its TOML form.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Underlying encoder/decoder message
        message: String,
    },

    /// A seed file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An environment setting held non-unicode data.
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
