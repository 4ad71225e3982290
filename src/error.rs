//! Error types for the faqbot library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`FaqBotError`] enum.
//!
//! # Examples
//!
//! ```
//! use faqbot::error::{FaqBotError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(FaqBotError::invalid_input("Please provide both a question and an answer."))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for faqbot operations.
///
/// Matching never fails; errors come from persistence, from rejected user
/// input, and from building analysis components.
#[derive(Error, Debug)]
pub enum FaqBotError {
    /// I/O errors (reading or writing the FAQ file, terminal I/O)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Rejected user input (blank training fields, malformed session commands)
    #[error("{0}")]
    InvalidInput(String),

    /// Analysis-related errors (building char filters, patterns)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with FaqBotError.
pub type Result<T> = std::result::Result<T, FaqBotError>;

impl FaqBotError {
    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        FaqBotError::Storage(msg.into())
    }

    /// Create a new invalid input error.
    ///
    /// The message is shown to the user as-is.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        FaqBotError::InvalidInput(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        FaqBotError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        FaqBotError::Other(msg.into())
    }
}
