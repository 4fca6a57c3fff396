//! Core types for line validation results.

use crate::config::ValidationMode;

/// Number of invalid lines after which the scan stops.
///
/// This bounds diagnostic output on pathological input. It is not a
/// tolerance: a single invalid line already fails validation.
pub const MAX_INVALID_LINES: usize = 10;

/// Result of a single validation pass over the line sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Rule the lines were checked against.
    pub mode: ValidationMode,
    /// Invalid lines in input order, at most `MAX_INVALID_LINES`.
    pub invalid_lines: Vec<String>,
    /// Whether the scan stopped before reaching the last line.
    pub aborted: bool,
}

impl ValidationOutcome {
    /// Create a passing outcome.
    pub fn pass(mode: ValidationMode) -> Self {
        Self {
            mode,
            invalid_lines: Vec::new(),
            aborted: false,
        }
    }

    /// Whether every line was valid.
    pub fn passed(&self) -> bool {
        self.invalid_lines.is_empty()
    }

    /// Number of violations seen before the scan finished or stopped.
    pub fn violation_count(&self) -> usize {
        self.invalid_lines.len()
    }
}
