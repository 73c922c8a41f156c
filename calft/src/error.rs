//! Error handling module for the calft CLI.
//!
//! This module provides custom error types using `thiserror` for
//! structured error handling throughout the application.

use thiserror::Error;

/// Main error type for the calft CLI application.
#[derive(Error, Debug)]
pub enum CalftError {
    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A lexical error from the token stream.
    #[error(transparent)]
    Lex(#[from] calf_lex::LexError),

    /// A parse error from the form stream.
    #[error(transparent)]
    Parse(#[from] calf_par::ParseError),

    /// A read error from the value stream.
    #[error(transparent)]
    Read(#[from] calf_read::ReadError),

    /// Error when the logging subsystem cannot be initialized.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

/// Result type alias using CalftError.
pub type Result<T> = std::result::Result<T, CalftError>;
