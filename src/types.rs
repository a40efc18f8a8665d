use serde::Serialize;

use crate::error::{PslError, Result};

/// Wildcard label used in rule patterns.
pub const WILDCARD: &str = "*";

/// A single public suffix rule.
///
/// Labels are stored in hostname order (`["co", "uk"]` for `co.uk`);
/// the trie reverses them on insertion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    /// Dot-separated labels of the rule, wildcard included as `*`
    pub labels: Vec<String>,
    /// Exception rule (`!` prefix in the list)
    pub is_exception: bool,
}

impl Rule {
    /// Create a plain or wildcard rule from a dotted pattern such as `*.ck`.
    pub fn new(pattern: &str) -> Result<Self> {
        Self::from_labels(split_pattern(pattern), false)
    }

    /// Create an exception rule from a dotted pattern such as `www.ck`.
    pub fn exception(pattern: &str) -> Result<Self> {
        Self::from_labels(split_pattern(pattern), true)
    }

    /// Create a rule from pre-split labels.
    pub fn from_labels(labels: Vec<String>, is_exception: bool) -> Result<Self> {
        if labels.is_empty() {
            return Err(PslError::rule_format("rule has no labels"));
        }
        if labels.iter().any(|l| l.is_empty()) {
            return Err(PslError::rule_format(format!(
                "rule contains an empty label: {}",
                labels.join(".")
            )));
        }
        if is_exception {
            if labels.len() < 2 {
                return Err(PslError::rule_format(format!(
                    "exception rule needs at least two labels: {}",
                    labels.join(".")
                )));
            }
            if labels.iter().any(|l| l == WILDCARD) {
                return Err(PslError::rule_format(format!(
                    "exception rule cannot contain a wildcard: {}",
                    labels.join(".")
                )));
            }
        }
        Ok(Self {
            labels,
            is_exception,
        })
    }

    /// Labels from the TLD inward, the order used for trie paths.
    pub fn reversed(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().rev().map(String::as_str)
    }
}

fn split_pattern(pattern: &str) -> Vec<String> {
    let pattern = pattern.trim();
    if pattern.is_empty() {
        return Vec::new();
    }
    pattern.split('.').map(|l| l.to_lowercase()).collect()
}

/// Pipeline stage at which `parse_until` stops.
///
/// Stages are ordered; stopping at a stage still computes that stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Hostname extraction, IP detection and validity
    Hostname,
    /// Whether the TLD exists in the ruleset
    TldExists,
    /// Public suffix resolution
    PublicSuffix,
    /// Registrable domain
    Domain,
    /// Everything, subdomain included
    All,
}

/// Result of decomposing one hostname.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    /// Cleaned hostname, `None` when nothing could be extracted
    pub hostname: Option<String>,
    /// Hostname is an IPv4 or IPv6 literal
    pub is_ip: bool,
    /// Hostname is syntactically valid (always true for IPs)
    pub is_valid: bool,
    /// Hostname's TLD is known to the ruleset
    pub tld_exists: bool,
    /// Public suffix, e.g. `co.uk`
    pub public_suffix: Option<String>,
    /// Registrable domain, e.g. `example.co.uk`
    pub domain: Option<String>,
    /// Labels left of the domain, `""` when there are none
    pub subdomain: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_new() {
        let rule = Rule::new("co.uk").unwrap();
        assert_eq!(rule.labels, vec!["co", "uk"]);
        assert!(!rule.is_exception);
        assert_eq!(rule.reversed().collect::<Vec<_>>(), vec!["uk", "co"]);
    }

    #[test]
    fn test_rule_lowercases() {
        let rule = Rule::new("Co.UK").unwrap();
        assert_eq!(rule.labels, vec!["co", "uk"]);
    }

    #[test]
    fn test_rule_wildcard() {
        let rule = Rule::new("*.ck").unwrap();
        assert_eq!(rule.labels, vec!["*", "ck"]);
    }

    #[test]
    fn test_rule_rejects_empty() {
        assert!(Rule::new("").is_err());
        assert!(Rule::new("   ").is_err());
        assert!(Rule::from_labels(Vec::new(), false).is_err());
    }

    #[test]
    fn test_rule_rejects_empty_label() {
        assert!(Rule::new("a..b").is_err());
        assert!(Rule::new(".com").is_err());
        assert!(Rule::new("com.").is_err());
    }

    #[test]
    fn test_exception_rules() {
        let rule = Rule::exception("www.ck").unwrap();
        assert!(rule.is_exception);

        // A single-label exception would strip the whole hostname
        assert!(Rule::exception("ck").is_err());
        assert!(Rule::exception("*.ck").is_err());
    }

    #[test]
    fn test_stage_ordering() {
        assert!(Stage::Hostname < Stage::TldExists);
        assert!(Stage::TldExists < Stage::PublicSuffix);
        assert!(Stage::PublicSuffix < Stage::Domain);
        assert!(Stage::Domain < Stage::All);
    }

    #[test]
    fn test_parse_result_serializes_camel_case() {
        let result = ParseResult {
            hostname: Some("www.example.com".into()),
            is_ip: false,
            is_valid: true,
            tld_exists: true,
            public_suffix: Some("com".into()),
            domain: Some("example.com".into()),
            subdomain: Some("www".into()),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["publicSuffix"], "com");
        assert_eq!(json["tldExists"], true);
        assert_eq!(json["isIp"], false);
        assert_eq!(json["subdomain"], "www");
    }
}
