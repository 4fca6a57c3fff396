//! Operator confirmation on the controlling terminal.
//!
//! Standard input is already drained by the time the prompt is shown, so the
//! reply is read from the terminal device directly. The prompt itself goes to
//! stderr, keeping stdout reserved for the forwarded payload.

use crate::error::{GateError, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};

/// Question shown before forwarding.
pub const PROMPT: &str = "Do you want to process and send the data forward? (y/n): ";

/// Interactive input device, independent of any stdin redirection.
#[cfg(windows)]
pub const TERMINAL_DEVICE: &str = "CONIN$";

/// Interactive input device, independent of any stdin redirection.
#[cfg(not(windows))]
pub const TERMINAL_DEVICE: &str = "/dev/tty";

/// Outcome of the confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Operator approved; forward the input.
    Forward,
    /// Operator declined; write nothing to stdout.
    Abort,
}

/// Map a raw reply to a decision.
///
/// Only `y` or `Y` (after trimming) approve. Anything else, including `yes`,
/// declines.
pub fn parse_reply(reply: &str) -> Decision {
    match reply.trim() {
        "y" | "Y" => Decision::Forward,
        _ => Decision::Abort,
    }
}

/// Handle to the controlling terminal.
///
/// The device is closed when the handle is dropped.
#[derive(Debug)]
pub struct ControllingTerminal {
    reader: BufReader<File>,
}

impl ControllingTerminal {
    /// Open the terminal device for reading.
    ///
    /// # Errors
    ///
    /// Returns `GateError::TerminalOpen` when no interactive terminal is
    /// attached to the process. There is no non-interactive fallback.
    pub fn open() -> Result<Self> {
        let file = File::open(TERMINAL_DEVICE).map_err(|source| GateError::TerminalOpen {
            device: TERMINAL_DEVICE,
            source,
        })?;
        Ok(Self {
            reader: BufReader::new(file),
        })
    }
}

impl Read for ControllingTerminal {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl BufRead for ControllingTerminal {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.reader.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.reader.consume(amt)
    }
}

/// Show the prompt on `prompt_out` and read one reply line from `terminal`.
///
/// # Errors
///
/// - `GateError::OutputWrite` if the prompt cannot be written
/// - `GateError::TerminalRead` if the reply cannot be read, including when the
///   terminal reaches end-of-file before any reply
///
/// A reply that is not valid UTF-8 is read lossily and declines.
pub fn confirm<T: BufRead, W: Write>(terminal: &mut T, prompt_out: &mut W) -> Result<Decision> {
    write!(prompt_out, "{}", PROMPT.green()).map_err(GateError::OutputWrite)?;
    prompt_out.flush().map_err(GateError::OutputWrite)?;

    let mut reply = Vec::new();
    let read = terminal
        .read_until(b'\n', &mut reply)
        .map_err(GateError::TerminalRead)?;
    if read == 0 {
        return Err(GateError::TerminalRead(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "terminal closed before a reply was entered",
        )));
    }

    // Undecodable bytes can never spell `y`, so they decline like any other reply.
    let decision = parse_reply(&String::from_utf8_lossy(&reply));
    tracing::debug!(?decision, "operator replied");
    Ok(decision)
}
