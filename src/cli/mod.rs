//! CLI argument parsing for pipegate.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The two switches are folded into a `GateConfig` by the `config` module.

use clap::Parser;

/// Pipegate: hold piped data for review and forward it only on confirmation.
///
/// Reads all of standard input, optionally validates every line, prints a
/// short summary to standard error, then asks on the controlling terminal
/// whether the data should be sent on to standard output.
#[derive(Parser, Debug)]
#[command(name = "pipegate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Check that every input line is a valid URL.
    #[arg(long)]
    pub urls: bool,

    /// Check that every input line is a valid domain name.
    #[arg(long)]
    pub domains: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
