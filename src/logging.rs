//! Logging initialization.
//!
//! Stage-level events are emitted with `tracing` at debug level. Nothing is
//! printed unless `RUST_LOG` enables it, so the operator-facing transcript on
//! stderr stays exactly as the pipeline writes it.

use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber. Writes to stderr; stdout carries only payload.
pub fn init() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::OFF.into())
        .from_env_lossy();

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

/// Style operator messages only when stderr is a terminal.
///
/// Stdout is normally a pipe here, so the default stdout-based detection
/// would never color the stderr transcript.
pub fn init_color() {
    apply_color_choice(io::stderr().is_terminal());
}

fn apply_color_choice(stderr_is_terminal: bool) {
    colored::control::set_override(stderr_is_terminal);
}
