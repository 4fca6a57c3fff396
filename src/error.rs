//! Error types for the pipegate CLI.
//!
//! Uses thiserror for derive macros. Every variant is fatal: the pipeline
//! surfaces it once and the process ends with the mapped exit code.

use crate::exit_codes;
use std::io;
use thiserror::Error;

/// Main error type for pipegate operations.
#[derive(Error, Debug)]
pub enum GateError {
    /// Standard input could not be read to completion.
    #[error("Error reading stdin: {0}")]
    InputRead(#[source] io::Error),

    /// One or more lines failed the selected validation rule.
    #[error("Input validation failed.")]
    ValidationFailed,

    /// The controlling terminal device could not be opened.
    #[error("Error opening {device}: {source}")]
    TerminalOpen {
        device: &'static str,
        #[source]
        source: io::Error,
    },

    /// The operator's reply could not be read from the terminal.
    #[error("Error reading response: {0}")]
    TerminalRead(#[source] io::Error),

    /// Writing the report to stderr or the payload to stdout failed.
    #[error("Error writing output: {0}")]
    OutputWrite(#[source] io::Error),
}

impl GateError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GateError::InputRead(_) => exit_codes::IO_FAILURE,
            GateError::ValidationFailed => exit_codes::VALIDATION_FAILURE,
            GateError::TerminalOpen { .. } => exit_codes::TERMINAL_FAILURE,
            GateError::TerminalRead(_) => exit_codes::TERMINAL_FAILURE,
            GateError::OutputWrite(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for pipegate operations.
pub type Result<T> = std::result::Result<T, GateError>;
