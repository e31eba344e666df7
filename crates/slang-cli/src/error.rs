//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! the few failure modes the harnesses have of their own.

use std::io;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (writing to stdout, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Boundary contract violation
    #[error("ABI error: {0}")]
    Abi(#[from] slang_abi::AbiError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No language code was given; usage has already been printed
    #[error("missing language code")]
    Usage,

    /// The callee reported a non-zero status; already printed
    #[error("error code: {}", slang_abi::hex_code(*code))]
    Callee { code: i8 },

    /// A custom record was refused by the callee
    #[error("could not register record (error code {}): {message}", slang_abi::hex_code(*code))]
    Register { code: i8, message: String },

    /// Logging could not be set up
    #[error("Logging error: {0}")]
    Logging(String),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Usage => 1,
            Self::Callee { .. } => 1,
            Self::Abi(_) => 2,
            Self::Register { .. } => 2,
            Self::Json(_) => 3,
            Self::Logging(_) => 99,
        }
    }

    /// Check if the error was already written to stdout by the harness
    pub fn is_reported(&self) -> bool {
        matches!(self, Self::Usage | Self::Callee { .. })
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}
