//! Unified error types for `PolicyDesk`.
//!
//! One crate-wide error enum keeps call sites uniform: remote-store and
//! I/O failures convert via `#[from]`, while domain failures carry enough
//! context to render an inline message.

use thiserror::Error;

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// The remote table store rejected or failed an operation
    #[error("Store error: {0}")]
    Store(#[from] sea_orm::DbErr),

    /// Local file I/O failed (session file, config file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The session record could not be encoded or decoded
    #[error("Session encoding error: {0}")]
    SessionEncoding(#[from] serde_json::Error),

    /// A form field failed synchronous validation; blocks submission
    #[error("{message}")]
    Validation {
        /// Inline message shown next to the form
        message: String,
    },

    /// A monetary amount was out of range
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The offending value
        amount: f64,
    },
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
