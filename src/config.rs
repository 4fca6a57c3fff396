//! Runtime configuration for pipegate.
//!
//! The command line is the only configuration surface. `GateConfig` is built
//! once at startup and passed by reference into the pipeline.

use crate::cli::Cli;

/// Line validation rule applied before the report is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Every line must be a well-formed request URI.
    Url,
    /// Every line must have the syntactic shape of a hostname.
    Domain,
}

impl ValidationMode {
    /// Label used in per-line warnings ("Invalid URL: ...").
    pub fn label(self) -> &'static str {
        match self {
            Self::Url => "URL",
            Self::Domain => "domain",
        }
    }

    /// Plural noun used in the early-abort notice.
    pub fn plural(self) -> &'static str {
        match self {
            Self::Url => "urls",
            Self::Domain => "domains",
        }
    }
}

/// Immutable configuration for a single gate run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GateConfig {
    /// Selected validation rule, or `None` to skip validation entirely.
    pub mode: Option<ValidationMode>,
}

impl GateConfig {
    /// Build the configuration from parsed arguments.
    ///
    /// `--urls` takes precedence when both switches are given.
    pub fn from_cli(cli: &Cli) -> Self {
        Self::from_flags(cli.urls, cli.domains)
    }

    /// Build the configuration from the two raw switch values.
    pub fn from_flags(urls: bool, domains: bool) -> Self {
        let mode = if urls {
            Some(ValidationMode::Url)
        } else if domains {
            Some(ValidationMode::Domain)
        } else {
            None
        };
        Self { mode }
    }
}
