//! Hostname extraction and syntactic checks.

use std::net::{IpAddr, Ipv6Addr};

use once_cell::sync::Lazy;
use regex::Regex;
use url::{Host, Url};

/// Maximum hostname length in characters
pub const MAX_HOSTNAME_LEN: usize = 255;

/// Maximum label length in characters
pub const MAX_LABEL_LEN: usize = 63;

/// Scheme prefix: `scheme://` or a bare `//`
/// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
static SCHEME_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[a-z][a-z0-9+.\-]*:)?//")
        .expect("SCHEME_PREFIX: hardcoded regex is invalid")
});

/// Dotted-quad shape, used to tell real IPv4 input from hosts the URL
/// parser turned into IPv4 (e.g. `1234` -> `0.0.4.210`)
static IPV4_LIKE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\d+\.){3}\d+\.?$").expect("IPV4_LIKE: hardcoded regex is invalid")
});

/// Extract a lowercase hostname from a hostname, URL or URL-like string.
///
/// Works for:
/// - `hostname` and `hostname.` (one trailing dot is dropped)
/// - `//hostname`, `scheme://hostname`, `scheme+scheme://hostname`
/// - `hostname:port/path?query#fragment`
/// - IPv6 literals, bare or in brackets (returned without brackets)
///
/// Returns `None` when no hostname can be found.
pub fn extract_hostname(input: &str) -> Option<String> {
    let value = input.trim().to_lowercase();
    if value.is_empty() {
        return None;
    }

    // Fast path: already a hostname
    if is_valid_hostname(&value) {
        return Some(trim_trailing_dot(&value).to_string());
    }

    if let Some(ip) = parse_ipv6_literal(&value) {
        return Some(ip.to_string());
    }

    let url = match SCHEME_PREFIX.find(&value) {
        Some(m) if m.as_str() == "//" => format!("https:{}", value),
        Some(_) => value.clone(),
        None => format!("https://{}", value),
    };

    let parsed = Url::parse(&url).ok()?;
    match parsed.host()? {
        Host::Domain(domain) => {
            let domain = trim_trailing_dot(domain);
            if domain.is_empty() {
                None
            } else {
                Some(domain.to_string())
            }
        }
        Host::Ipv4(ip) => {
            let raw = raw_host(&url);
            if IPV4_LIKE.is_match(raw) {
                Some(ip.to_string())
            } else {
                Some(trim_trailing_dot(raw).to_string())
            }
        }
        Host::Ipv6(ip) => Some(ip.to_string()),
    }
}

/// Check that `hostname` is a syntactically valid hostname.
///
/// Labels are `[a-zA-Z0-9-]`, 1 to 63 characters, and may not end with `-`.
/// The hostname starts with a letter or digit, is at most 255 characters,
/// and contains at least one dot. A single trailing dot is accepted.
///
/// Does not check that the TLD exists.
pub fn is_valid_hostname(hostname: &str) -> bool {
    let bytes = hostname.as_bytes();
    if bytes.is_empty() || bytes.len() > MAX_HOSTNAME_LEN {
        return false;
    }

    if !bytes[0].is_ascii_alphanumeric() {
        return false;
    }

    let mut label_start = 0;
    let mut last_dot = None;
    let mut last_byte = 0u8;

    for (i, &b) in bytes.iter().enumerate() {
        if b == b'.' {
            if i - label_start > MAX_LABEL_LEN || last_byte == b'.' || last_byte == b'-' {
                return false;
            }
            last_dot = Some(i);
            label_start = i + 1;
        } else if !(b.is_ascii_alphanumeric() || b == b'-') {
            return false;
        }
        last_byte = b;
    }

    if last_dot.is_none() {
        return false;
    }

    bytes.len() - label_start <= MAX_LABEL_LEN && last_byte != b'-'
}

/// Check whether `hostname` is an IPv4 or IPv6 literal.
pub fn is_ip(hostname: &str) -> bool {
    let hostname = hostname
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(hostname);
    hostname.parse::<IpAddr>().is_ok()
}

/// Host as written in `url`, between the authority start and the first
/// `/`, `?` or `#`, without userinfo or port.
fn raw_host(url: &str) -> &str {
    let rest = url.split_once("//").map_or(url, |(_, rest)| rest);
    let authority = rest.split(|c: char| matches!(c, '/' | '?' | '#')).next().unwrap_or(rest);
    let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    host.split(':').next().unwrap_or(host)
}

fn parse_ipv6_literal(value: &str) -> Option<Ipv6Addr> {
    if let Ok(ip) = value.parse::<Ipv6Addr>() {
        return Some(ip);
    }
    // "[::1]", "[::1]:8080"
    let inner = value.strip_prefix('[')?;
    let end = inner.find(']')?;
    inner[..end].parse().ok()
}

fn trim_trailing_dot(value: &str) -> &str {
    value.strip_suffix('.').unwrap_or(value)
}
