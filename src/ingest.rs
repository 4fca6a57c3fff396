//! Standard input ingestion.
//!
//! The whole stream is buffered before any decision is made. Two views are
//! kept: the raw bytes, forwarded verbatim on approval, and the trimmed line
//! sequence that validation and reporting look at.

use crate::error::{GateError, Result};
use std::io::BufRead;

/// Fully buffered pipeline input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    raw: Vec<u8>,
    lines: Vec<String>,
}

impl Input {
    /// The exact bytes read, in arrival order.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// One whitespace-trimmed entry per newline-delimited segment.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Size in whole kilobytes (byte length / 1024, truncated).
    pub fn kbytes(&self) -> usize {
        self.raw.len() / 1024
    }
}

/// Drain `reader` to end-of-stream.
///
/// A final segment without a trailing newline still counts as a line. Bytes
/// that are not valid UTF-8 are replaced in the line view only; the raw view
/// is untouched.
///
/// # Errors
///
/// Returns `GateError::InputRead` on any read failure other than end-of-stream.
pub fn read_input<R: BufRead>(mut reader: R) -> Result<Input> {
    let mut input = Input::default();
    let mut segment = Vec::new();

    loop {
        segment.clear();
        let read = reader
            .read_until(b'\n', &mut segment)
            .map_err(GateError::InputRead)?;
        if read == 0 {
            break;
        }

        input.raw.extend_from_slice(&segment);
        input
            .lines
            .push(String::from_utf8_lossy(&segment).trim().to_string());
    }

    tracing::debug!(
        bytes = input.raw.len(),
        lines = input.lines.len(),
        "input ingested"
    );

    Ok(input)
}
