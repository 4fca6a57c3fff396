//! Exit code constants for the pipegate CLI.
//!
//! - 0: Success (input forwarded, or the operator declined)
//! - 1: I/O failure on standard input or output
//! - 2: Validation failure (one or more invalid lines)
//! - 3: Controlling terminal could not be opened or read

/// Successful execution, including an explicit decline at the prompt.
pub const SUCCESS: i32 = 0;

/// Reading standard input or writing the payload failed.
pub const IO_FAILURE: i32 = 1;

/// At least one line failed URL or domain validation.
pub const VALIDATION_FAILURE: i32 = 2;

/// The controlling terminal could not be opened or read.
pub const TERMINAL_FAILURE: i32 = 3;
