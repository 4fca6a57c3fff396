//! Syntactic hostname check.
//!
//! No DNS lookup happens here; only the shape of the name is checked.

use regex::Regex;
use std::sync::LazyLock;

/// Dot-separated labels of 1-63 characters (letters, digits, `-`, `_`; first
/// and last character alphanumeric) followed by an alphabetic final label of
/// at least two characters.
static DOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-zA-Z0-9](?:[a-zA-Z0-9_-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,}$")
        .expect("Invalid domain regex")
});

/// Returns `true` if `line` looks like a hostname such as `example.com`.
pub fn is_valid_domain(line: &str) -> bool {
    DOMAIN_REGEX.is_match(line)
}
