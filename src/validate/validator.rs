//! Core validation logic.

use crate::config::ValidationMode;
use colored::Colorize;
use std::io::{self, Write};

use super::domain::is_valid_domain;
use super::request_uri::is_valid_request_uri;
use super::types::{MAX_INVALID_LINES, ValidationOutcome};

impl ValidationMode {
    /// Check a single trimmed line against this rule.
    pub fn accepts(self, line: &str) -> bool {
        match self {
            ValidationMode::Url => is_valid_request_uri(line),
            ValidationMode::Domain => is_valid_domain(line),
        }
    }
}

/// Check `lines` in order against `mode`.
///
/// Every invalid line is recorded. When the count reaches
/// `MAX_INVALID_LINES` the scan stops and the outcome is marked aborted;
/// remaining lines are not examined.
///
/// # Example
///
/// ```ignore
/// let lines = vec!["example.com".to_string(), "not a domain".to_string()];
/// let outcome = validate_lines(ValidationMode::Domain, &lines);
/// assert!(!outcome.passed());
/// assert_eq!(outcome.invalid_lines, ["not a domain"]);
/// ```
pub fn validate_lines(mode: ValidationMode, lines: &[String]) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::pass(mode);

    for (index, line) in lines.iter().enumerate() {
        if mode.accepts(line) {
            continue;
        }

        outcome.invalid_lines.push(line.clone());
        if outcome.violation_count() >= MAX_INVALID_LINES {
            tracing::debug!(stopped_at = index + 1, total = lines.len(), "validation scan aborted");
            outcome.aborted = true;
            break;
        }
    }

    outcome
}

/// Write per-line warnings, plus the early-abort notice if the scan stopped.
pub fn write_diagnostics<W: Write>(outcome: &ValidationOutcome, out: &mut W) -> io::Result<()> {
    for line in &outcome.invalid_lines {
        let warning = format!("Invalid {}: {}", outcome.mode.label(), line);
        writeln!(out, "{}", warning.yellow())?;
    }

    if outcome.aborted {
        let notice = format!(
            "Aborting execution: Found more than {} invalid {}",
            MAX_INVALID_LINES,
            outcome.mode.plural()
        );
        writeln!(out, "{}", notice.red())?;
    }

    Ok(())
}
