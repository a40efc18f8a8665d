//! PSL Engine - Offline Public Suffix List engine for Rust
//!
//! This library splits hostnames into their structural parts:
//! - Public suffix (`co.uk`, `github.io`) via longest-match over a rule trie
//! - Registrable domain (public suffix + one label)
//! - Subdomain (everything left of the domain)
//!
//! Plain, wildcard (`*.ck`) and exception (`!www.ck`) rules are supported.
//! Unknown TLDs fall back to the implicit `*` rule: the last label is the
//! public suffix.
//!
//! # Example
//!
//! ```rust
//! use psl_engine::{parse, get_domain, get_public_suffix};
//!
//! let result = parse("https://www.example.co.uk/index.html");
//! assert_eq!(result.hostname.as_deref(), Some("www.example.co.uk"));
//! assert_eq!(result.public_suffix.as_deref(), Some("co.uk"));
//! assert_eq!(result.domain.as_deref(), Some("example.co.uk"));
//! assert_eq!(result.subdomain.as_deref(), Some("www"));
//!
//! assert_eq!(get_public_suffix("example.github.io").as_deref(), Some("github.io"));
//! assert_eq!(get_domain("a.b.example.com").as_deref(), Some("example.com"));
//! ```
//!
//! # Custom rules
//!
//! ```rust
//! use std::sync::Arc;
//! use psl_engine::{ExtractorOptions, RuleTrie, TldExtractor};
//!
//! let rules = RuleTrie::from_text("com\n*.ck\n!www.ck").unwrap();
//! let extractor = TldExtractor::new(
//!     ExtractorOptions::new()
//!         .with_rules(Arc::new(rules))
//!         .with_valid_hosts(["localhost"]),
//! );
//!
//! assert_eq!(extractor.get_public_suffix("foo.bar.ck").as_deref(), Some("bar.ck"));
//! assert_eq!(extractor.get_domain("api.localhost").as_deref(), Some("localhost"));
//! ```
//!
//! # Migration
//!
//! `is_valid` from older tld libraries is gone; use [`is_valid_hostname`],
//! or [`TldExtractor::is_valid_hostname`] to honor a valid hosts list.

pub mod domain;
pub mod error;
pub mod extractor;
pub mod hostname;
pub mod parser;
pub mod rules;
pub mod suffix;
pub mod types;

// Re-export commonly used items
pub use error::{PslError, Result};
pub use extractor::{default_extractor, ExtractorOptions, TldExtractor};
pub use hostname::{extract_hostname, is_ip, is_valid_hostname};
pub use parser::{parse_rules, parse_rules_from_file};
pub use rules::{default_rules, load_rules, RuleSourceFormat};
pub use suffix::RuleTrie;
pub use types::{ParseResult, Rule, Stage};

/// Decompose `input` with the bundled list.
pub fn parse(input: &str) -> ParseResult {
    default_extractor().parse(input)
}

/// Check whether the TLD of `input` exists in the bundled list.
pub fn tld_exists(input: &str) -> bool {
    default_extractor().tld_exists(input)
}

/// Public suffix of `input` according to the bundled list.
pub fn get_public_suffix(input: &str) -> Option<String> {
    default_extractor().get_public_suffix(input)
}

/// Registrable domain of `input` according to the bundled list.
pub fn get_domain(input: &str) -> Option<String> {
    default_extractor().get_domain(input)
}

/// Subdomain of `input` according to the bundled list.
pub fn get_subdomain(input: &str) -> Option<String> {
    default_extractor().get_subdomain(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_workflow() {
        let result = parse("www.example.com");
        assert_eq!(result.hostname.as_deref(), Some("www.example.com"));
        assert!(result.is_valid);
        assert!(result.tld_exists);
        assert_eq!(result.public_suffix.as_deref(), Some("com"));
        assert_eq!(result.domain.as_deref(), Some("example.com"));
        assert_eq!(result.subdomain.as_deref(), Some("www"));

        // Private section rule
        let result = parse("example.github.io");
        assert_eq!(result.public_suffix.as_deref(), Some("github.io"));
        assert_eq!(result.domain.as_deref(), Some("example.github.io"));
        assert_eq!(result.subdomain.as_deref(), Some(""));

        // IP literal
        let result = parse("192.168.1.1");
        assert!(result.is_ip);
        assert!(result.is_valid);
        assert_eq!(result.public_suffix, None);

        // Nothing to extract
        let result = parse("");
        assert_eq!(result.hostname, None);
        assert!(!result.is_valid);
    }

    #[test]
    fn test_root_helpers() {
        assert!(tld_exists("example.com"));
        assert!(!tld_exists("example.unknownzz"));
        assert_eq!(
            get_public_suffix("something.unknownzz").as_deref(),
            Some("unknownzz")
        );
        assert_eq!(
            get_domain("something.unknownzz").as_deref(),
            Some("something.unknownzz")
        );
        assert_eq!(get_subdomain("a.b.example.co.uk").as_deref(), Some("a.b"));
    }
}
