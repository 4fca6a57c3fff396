//! Request-URI check.
//!
//! Accepts the forms an HTTP request line can carry: an absolute path
//! (`/index.html?q=1`), the asterisk form (`*`), or an absolute URI with a
//! scheme (`https://example.com/`, `mailto:ops@example.com`). Bare words and
//! relative references such as `example.com` are rejected.
//!
//! Only syntax is checked. Port ranges, IPv4 octets and internationalized
//! names are not interpreted.

use regex::Regex;
use std::net::Ipv6Addr;
use std::sync::LazyLock;

/// RFC 3986 scheme followed by the `:` delimiter.
static SCHEME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("Invalid scheme regex"));

/// Returns `true` if `line` is a well-formed request URI.
pub fn is_valid_request_uri(line: &str) -> bool {
    if line.is_empty() || line.bytes().any(is_control_byte) {
        return false;
    }

    if line == "*" {
        return true;
    }

    // The query component is carried opaquely; only the part before it is
    // held to strict percent-encoding.
    let before_query = line.split_once('?').map_or(line, |(path, _)| path);
    if !has_valid_escapes(before_query) {
        return false;
    }

    if line.starts_with('/') {
        return true;
    }

    let Some(scheme) = SCHEME_REGEX.find(before_query) else {
        return false;
    };
    let rest = &before_query[scheme.end()..];

    match rest.strip_prefix("//") {
        Some(hier) => {
            let authority = hier.find('/').map_or(hier, |end| &hier[..end]);
            is_valid_authority(authority)
        }
        // Opaque form such as `mailto:ops@example.com`.
        None => true,
    }
}

/// `[userinfo@]host[:port]`, empty host allowed.
fn is_valid_authority(authority: &str) -> bool {
    let host_port = match authority.rsplit_once('@') {
        Some((userinfo, host_port)) => {
            if !userinfo.bytes().all(is_userinfo_byte) {
                return false;
            }
            host_port
        }
        None => authority,
    };

    if let Some(bracketed) = host_port.strip_prefix('[') {
        let Some((literal, after)) = bracketed.split_once(']') else {
            return false;
        };
        return is_valid_ip_literal(literal) && is_valid_optional_port(after);
    }

    let (host, port) = match host_port.rfind(':') {
        Some(colon) => host_port.split_at(colon),
        None => (host_port, ""),
    };
    is_valid_optional_port(port) && host.bytes().all(is_host_byte)
}

/// IPv6 address with an optional `%25`-escaped zone identifier.
fn is_valid_ip_literal(literal: &str) -> bool {
    let address = literal.split_once("%25").map_or(literal, |(addr, _)| addr);
    address.parse::<Ipv6Addr>().is_ok()
}

/// Empty, or `:` followed only by digits.
fn is_valid_optional_port(port: &str) -> bool {
    match port.strip_prefix(':') {
        Some(digits) => digits.bytes().all(|b| b.is_ascii_digit()),
        None => port.is_empty(),
    }
}

fn is_host_byte(b: u8) -> bool {
    !b.is_ascii()
        || b.is_ascii_alphanumeric()
        || b"-._~!$&'()*+,;=%<>\"".contains(&b)
}

fn is_userinfo_byte(b: u8) -> bool {
    !b.is_ascii() || b.is_ascii_alphanumeric() || b"-._:~!$&'()*+,;=%@".contains(&b)
}

fn is_control_byte(b: u8) -> bool {
    b < 0x20 || b == 0x7f
}

/// Every `%` must introduce exactly two hex digits.
fn has_valid_escapes(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            match escape {
                Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}
