//! Pipegate: an interactive confirmation gate for shell pipelines.
//!
//! This is the main entry point for the `pipegate` CLI. It parses arguments,
//! runs the gate pipeline against the standard streams, and maps errors to
//! exit codes.

pub mod cli;
pub mod config;
pub mod confirm;
pub mod error;
pub mod exit_codes;
pub mod ingest;
mod logging;
pub mod pipeline;
pub mod report;
pub mod validate;

use cli::Cli;
use colored::Colorize;
use config::GateConfig;
use confirm::ControllingTerminal;
use error::GateError;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init();
    logging::init_color();

    let config = GateConfig::from_cli(&cli);
    let stdin = io::stdin();

    let result = pipeline::run(
        &config,
        stdin.lock(),
        ControllingTerminal::open,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );

    match result {
        Ok(outcome) => {
            tracing::debug!(?outcome, "gate finished");
            ExitCode::from(exit_codes::SUCCESS as u8)
        }
        Err(err) => {
            report_fatal(&mut io::stderr(), &err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Write a fatal error message. A failing error channel is ignored.
fn report_fatal<W: Write>(out: &mut W, err: &GateError) {
    let _ = writeln!(out, "{}", err.to_string().red());
}
