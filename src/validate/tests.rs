//! Tests for line validation.

use crate::config::ValidationMode;

use super::domain::is_valid_domain;
use super::request_uri::is_valid_request_uri;
use super::types::{MAX_INVALID_LINES, ValidationOutcome};
use super::validator::{validate_lines, write_diagnostics};

// =========================================================================
// Helper functions
// =========================================================================

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn diagnostics(outcome: &ValidationOutcome) -> String {
    let mut out = Vec::new();
    write_diagnostics(outcome, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

// =========================================================================
// Domain rule
// =========================================================================

#[test]
fn test_domain_accepts_hostnames() {
    assert!(is_valid_domain("example.com"));
    assert!(is_valid_domain("a.b.co"));
    assert!(is_valid_domain("sub.example.org"));
    assert!(is_valid_domain("EXAMPLE.COM"));
    assert!(is_valid_domain("my-host.example.net"));
    assert!(is_valid_domain("sub_domain.example.io"));
    assert!(is_valid_domain("1password.com"));
}

#[test]
fn test_domain_rejects_malformed_names() {
    assert!(!is_valid_domain("example..com"));
    assert!(!is_valid_domain("-example.com"));
    assert!(!is_valid_domain("example-.com"));
    assert!(!is_valid_domain("example"));
    assert!(!is_valid_domain("example.c"));
    assert!(!is_valid_domain("example.c0m"));
    assert!(!is_valid_domain("example.com."));
    assert!(!is_valid_domain(".example.com"));
    assert!(!is_valid_domain("exa mple.com"));
    assert!(!is_valid_domain("https://example.com"));
    assert!(!is_valid_domain("10.0.0.1"));
    assert!(!is_valid_domain(""));
}

#[test]
fn test_domain_label_length_limit() {
    let longest = format!("{}.com", "a".repeat(63));
    let too_long = format!("{}.com", "a".repeat(64));
    assert!(is_valid_domain(&longest));
    assert!(!is_valid_domain(&too_long));
}

// =========================================================================
// Request-URI rule
// =========================================================================

#[test]
fn test_uri_accepts_absolute_urls() {
    assert!(is_valid_request_uri("https://example.com"));
    assert!(is_valid_request_uri("http://example.com/path?q=1"));
    assert!(is_valid_request_uri("https://user:pw@example.com:8443/a/b"));
    assert!(is_valid_request_uri("http://[::1]:8080/"));
    assert!(is_valid_request_uri("ftp://files.example.org/pub/file.txt"));
    assert!(is_valid_request_uri("mailto:ops@example.com"));
    assert!(is_valid_request_uri("http://"));
    assert!(is_valid_request_uri("http://:80/"));
    assert!(is_valid_request_uri("http://example.com:99999/"));
    assert!(is_valid_request_uri("http://1.2.3.256/"));
    assert!(is_valid_request_uri("http://xn--/"));
}

#[test]
fn test_uri_accepts_absolute_paths_and_asterisk() {
    assert!(is_valid_request_uri("/"));
    assert!(is_valid_request_uri("/index.html"));
    assert!(is_valid_request_uri("/search?q=a%20b"));
    assert!(is_valid_request_uri("/a?raw=%zz"));
    assert!(is_valid_request_uri("*"));
}

#[test]
fn test_uri_rejects_bare_strings() {
    assert!(!is_valid_request_uri(""));
    assert!(!is_valid_request_uri("example.com"));
    assert!(!is_valid_request_uri("not a url"));
    assert!(!is_valid_request_uri("relative/path"));
    assert!(!is_valid_request_uri("://missing-scheme"));
    assert!(!is_valid_request_uri("1http://example.com"));
}

#[test]
fn test_uri_rejects_malformed_structure() {
    assert!(!is_valid_request_uri("http://exa mple.com/"));
    assert!(!is_valid_request_uri("http://example.com:port/"));
    assert!(!is_valid_request_uri("http://[::1/"));
    assert!(!is_valid_request_uri("foo://a b"));
    assert!(!is_valid_request_uri("/bad%2"));
    assert!(!is_valid_request_uri("https://example.com/%zz"));
    assert!(!is_valid_request_uri("/tab\there"));
}

// =========================================================================
// Mode dispatch
// =========================================================================

#[test]
fn test_mode_dispatches_to_its_rule() {
    assert!(ValidationMode::Domain.accepts("example.com"));
    assert!(!ValidationMode::Url.accepts("example.com"));
    assert!(ValidationMode::Url.accepts("https://example.com"));
    assert!(!ValidationMode::Domain.accepts("https://example.com"));
}

// =========================================================================
// Scan policy
// =========================================================================

#[test]
fn test_all_valid_lines_pass() {
    let input = lines(&["example.com", "a.b.co", "rust-lang.org"]);
    let outcome = validate_lines(ValidationMode::Domain, &input);

    assert!(outcome.passed());
    assert!(!outcome.aborted);
    assert_eq!(outcome.violation_count(), 0);
}

#[test]
fn test_empty_line_sequence_passes() {
    let outcome = validate_lines(ValidationMode::Url, &[]);
    assert!(outcome.passed());
}

#[test]
fn test_single_invalid_line_fails_whole_run() {
    let input = lines(&["example.com", "bogus", "a.b.co"]);
    let outcome = validate_lines(ValidationMode::Domain, &input);

    assert!(!outcome.passed());
    assert!(!outcome.aborted);
    assert_eq!(outcome.invalid_lines, ["bogus"]);
}

#[test]
fn test_blank_lines_are_invalid() {
    let input = lines(&["example.com", ""]);
    assert!(!validate_lines(ValidationMode::Domain, &input).passed());
    assert!(!validate_lines(ValidationMode::Url, &input).passed());
}

#[test]
fn test_tenth_violation_on_last_line_still_aborts() {
    let mut input: Vec<String> = (0..9).map(|i| format!("bad{i}")).collect();
    input.push("example.com".to_string());
    input.push("last-bad".to_string());

    let outcome = validate_lines(ValidationMode::Domain, &input);

    assert!(outcome.aborted);
    assert_eq!(outcome.violation_count(), MAX_INVALID_LINES);
    assert_eq!(outcome.invalid_lines.last().unwrap(), "last-bad");
}

#[test]
fn test_scan_stops_at_threshold() {
    let input: Vec<String> = (0..25).map(|i| format!("bad{i}")).collect();
    let outcome = validate_lines(ValidationMode::Domain, &input);

    assert!(!outcome.passed());
    assert!(outcome.aborted);
    assert_eq!(outcome.violation_count(), MAX_INVALID_LINES);
    assert_eq!(outcome.invalid_lines.first().unwrap(), "bad0");
    assert_eq!(outcome.invalid_lines.last().unwrap(), "bad9");
}

#[test]
fn test_nine_invalid_lines_do_not_abort() {
    let input: Vec<String> = (0..9).map(|i| format!("bad{i}")).collect();
    let outcome = validate_lines(ValidationMode::Url, &input);

    assert!(!outcome.passed());
    assert!(!outcome.aborted);
    assert_eq!(outcome.violation_count(), 9);
}

// =========================================================================
// Diagnostics
// =========================================================================

#[test]
fn test_passing_outcome_writes_nothing() {
    let outcome = ValidationOutcome::pass(ValidationMode::Domain);
    assert!(diagnostics(&outcome).is_empty());
}

#[test]
fn test_warnings_name_each_invalid_line() {
    let input = lines(&["ok.com", "nope", "also nope"]);
    let text = diagnostics(&validate_lines(ValidationMode::Domain, &input));

    assert!(text.contains("Invalid domain: nope"));
    assert!(text.contains("Invalid domain: also nope"));
    assert!(!text.contains("ok.com"));
    assert!(!text.contains("Aborting execution"));
}

#[test]
fn test_abort_notice_follows_warnings() {
    let input: Vec<String> = (0..12).map(|i| format!("bad{i}")).collect();
    let text = diagnostics(&validate_lines(ValidationMode::Url, &input));

    assert!(text.contains("Invalid URL: bad9"));
    assert!(!text.contains("bad10"));

    let notice = "Aborting execution: Found more than 10 invalid urls";
    let notice_at = text.find(notice).unwrap();
    let last_warning_at = text.find("Invalid URL: bad9").unwrap();
    assert!(notice_at > last_warning_at);
}
