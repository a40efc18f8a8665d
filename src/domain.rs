//! Registrable domain and subdomain derivation.

/// Check that `hostname` is `suffix` or ends with `.suffix`.
pub(crate) fn ends_with_label_suffix(hostname: &str, suffix: &str) -> bool {
    if suffix.is_empty() || !hostname.ends_with(suffix) {
        return false;
    }
    let rest = hostname.len() - suffix.len();
    rest == 0 || hostname.as_bytes()[rest - 1] == b'.'
}

/// Derive the registrable domain of `hostname` from its public suffix.
///
/// A valid host that `hostname` equals or ends with (at a label boundary)
/// is returned as the domain, whatever the suffix rules say. Otherwise the
/// domain is the public suffix plus the one label before it, and `None`
/// when there is no such label or `public_suffix` is not a suffix of
/// `hostname`.
pub fn get_domain<'a, S: AsRef<str>>(
    valid_hosts: &[S],
    public_suffix: &str,
    hostname: &'a str,
) -> Option<&'a str> {
    for host in valid_hosts {
        let host = host.as_ref();
        if ends_with_label_suffix(hostname, host) {
            return Some(&hostname[hostname.len() - host.len()..]);
        }
    }

    if !ends_with_label_suffix(hostname, public_suffix) {
        return None;
    }

    // The hostname is a public suffix itself
    if hostname.len() == public_suffix.len() {
        return None;
    }

    let prefix = &hostname[..hostname.len() - public_suffix.len() - 1];
    let label_start = prefix.rfind('.').map_or(0, |dot| dot + 1);
    if label_start == prefix.len() {
        return None;
    }

    Some(&hostname[label_start..])
}

/// Everything left of `domain` in `hostname`, or `""` when there is nothing.
pub fn get_subdomain<'a>(hostname: &'a str, domain: Option<&str>) -> &'a str {
    let domain = match domain {
        Some(domain) if domain != hostname => domain,
        _ => return "",
    };

    if !ends_with_label_suffix(hostname, domain) {
        return "";
    }

    &hostname[..hostname.len() - domain.len() - 1]
}
