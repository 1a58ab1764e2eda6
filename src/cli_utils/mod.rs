// Shared CLI utilities for the expense command
pub mod formatting;
pub mod input;

pub use input::{KeyInput, TerminalKeys, confirm};

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = std::result::Result<T, CliError>;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// A required positional argument was not given.
    #[error("{0}")]
    MissingArgument(&'static str),
    #[error("{0}")]
    InvalidArgument(String),
    /// The user declined a confirmation prompt.
    #[error("Operation cancelled by user")]
    UserCancelled,
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Print an error message
pub fn print_error(message: &str) {
    use colored::Colorize;
    eprintln!("{}", message.red());
}
