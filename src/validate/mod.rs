//! Line validation for pipegate.
//!
//! Two rules are supported, selected by `ValidationMode`:
//! - URL: each line must be a well-formed request URI
//! - Domain: each line must have the syntactic shape of a hostname
//!
//! Validation is strict: a single invalid line fails the run. The scan stops
//! early once `MAX_INVALID_LINES` violations have been seen.

mod domain;
mod request_uri;
mod types;
mod validator;

#[cfg(test)]
mod tests;

pub use validator::{validate_lines, write_diagnostics};
