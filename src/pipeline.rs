//! The gate pipeline: ingest, validate, report, confirm, forward.
//!
//! # Steps
//!
//! 1. Read all of stdin into memory
//! 2. If a validation mode is set, check every line; any violation is fatal
//!    and happens before the prompt
//! 3. Write the size summary and sample lines to stderr
//! 4. Open the controlling terminal and ask for confirmation
//! 5. On approval, write the raw input to stdout unchanged
//!
//! Stdout is written at most once, as the last action.

use crate::config::GateConfig;
use crate::confirm::{Decision, confirm};
use crate::error::{GateError, Result};
use crate::ingest::read_input;
use crate::report::write_report;
use crate::validate::{validate_lines, write_diagnostics};
use colored::Colorize;
use std::io::{BufRead, Write};

/// How a run that did not fail ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Input was written to stdout.
    Forwarded,
    /// Operator declined; stdout untouched.
    Declined,
}

/// Run the gate once.
///
/// `open_terminal` is called only after validation and reporting succeed.
/// The handle it returns is dropped before the payload is forwarded.
///
/// # Errors
///
/// - `GateError::InputRead` if stdin cannot be drained
/// - `GateError::ValidationFailed` if any line fails the selected rule
/// - `GateError::TerminalOpen` / `GateError::TerminalRead` on terminal failures
/// - `GateError::OutputWrite` if stderr or stdout cannot be written
pub fn run<R, T, O, E>(
    config: &GateConfig,
    stdin: R,
    open_terminal: impl FnOnce() -> Result<T>,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<Outcome>
where
    R: BufRead,
    T: BufRead,
    O: Write,
    E: Write,
{
    let input = read_input(stdin)?;

    if let Some(mode) = config.mode {
        tracing::debug!(?mode, "validating input lines");
        let outcome = validate_lines(mode, input.lines());
        write_diagnostics(&outcome, stderr).map_err(GateError::OutputWrite)?;
        if !outcome.passed() {
            return Err(GateError::ValidationFailed);
        }
    }

    write_report(&input, stderr).map_err(GateError::OutputWrite)?;

    let decision = {
        let mut terminal = open_terminal()?;
        confirm(&mut terminal, stderr)?
    };

    match decision {
        Decision::Forward => {
            stdout
                .write_all(input.raw())
                .and_then(|()| stdout.flush())
                .map_err(GateError::OutputWrite)?;
            tracing::debug!(bytes = input.raw().len(), "input forwarded");
            Ok(Outcome::Forwarded)
        }
        Decision::Abort => {
            writeln!(stderr, "{}", "Operation aborted by user.".red())
                .map_err(GateError::OutputWrite)?;
            Ok(Outcome::Declined)
        }
    }
}
