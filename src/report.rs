//! Input summary written to stderr before the confirmation prompt.
//!
//! Output format:
//! ```text
//! Input: 12 kbytes | 480 lines
//!
//! First two lines:
//! <line 1>
//! <line 2>
//!
//! Last two lines:
//! <line n-1>
//! <line n>
//! ```
//!
//! The first block needs at least two lines, the second at least four. Blocks
//! are indexed positionally and may repeat lines for small inputs.

use crate::ingest::Input;
use colored::Colorize;
use std::io::{self, Write};

/// Minimum line count for the "First two lines" block.
const FIRST_BLOCK_MIN_LINES: usize = 2;

/// Minimum line count for the "Last two lines" block.
const LAST_BLOCK_MIN_LINES: usize = 4;

/// Write the size summary and sample lines for `input`.
pub fn write_report<W: Write>(input: &Input, out: &mut W) -> io::Result<()> {
    let lines = input.lines();

    writeln!(
        out,
        "{} {} kbytes | {} lines\n",
        "Input:".green(),
        input.kbytes(),
        lines.len()
    )?;

    if lines.len() >= FIRST_BLOCK_MIN_LINES {
        write_block(out, "First two lines:", &lines[0], &lines[1])?;
    }

    if lines.len() >= LAST_BLOCK_MIN_LINES {
        let n = lines.len();
        write_block(out, "Last two lines:", &lines[n - 2], &lines[n - 1])?;
    }

    Ok(())
}

fn write_block<W: Write>(out: &mut W, title: &str, first: &str, second: &str) -> io::Result<()> {
    writeln!(out, "{}", title.green())?;
    writeln!(out, "{}", first)?;
    writeln!(out, "{}\n", second)
}
