//! Staged hostname decomposition.
//!
//! The pipeline runs clean → IP check → validity → TLD existence →
//! public suffix → domain → subdomain, and can stop after any stage so
//! callers that only need a prefix of the result skip the rest.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::domain::{get_domain, get_subdomain};
use crate::hostname;
use crate::rules::default_rules;
use crate::suffix::RuleTrie;
use crate::types::{ParseResult, Stage};

/// Hostname extraction override
pub type HostnameExtractor = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Extractor options.
#[derive(Default)]
pub struct ExtractorOptions {
    /// Ruleset (default: bundled public suffix list)
    pub rules: Option<Arc<RuleTrie>>,
    /// Hostnames accepted as valid and registrable regardless of rules
    pub valid_hosts: Vec<String>,
    /// Replacement for [`hostname::extract_hostname`]
    pub hostname_extractor: Option<HostnameExtractor>,
}

impl ExtractorOptions {
    /// Create new extractor options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom ruleset.
    pub fn with_rules(mut self, rules: Arc<RuleTrie>) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Set the valid hosts allow-list.
    pub fn with_valid_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.valid_hosts = hosts.into_iter().map(Into::into).collect();
        self
    }

    /// Replace hostname extraction.
    pub fn with_hostname_extractor<F>(mut self, extractor: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.hostname_extractor = Some(Box::new(extractor));
        self
    }
}

impl fmt::Debug for ExtractorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractorOptions")
            .field("rules", &self.rules.as_ref().map(|r| r.rule_count()))
            .field("valid_hosts", &self.valid_hosts)
            .field("hostname_extractor", &self.hostname_extractor.is_some())
            .finish()
    }
}

/// Hostname decomposer bound to one ruleset and configuration.
///
/// Instances share nothing mutable: the ruleset is an immutable `Arc`,
/// and every call builds a fresh [`ParseResult`].
pub struct TldExtractor {
    rules: Arc<RuleTrie>,
    valid_hosts: Vec<String>,
    hostname_extractor: Option<HostnameExtractor>,
}

impl TldExtractor {
    /// Create an extractor from options.
    pub fn new(options: ExtractorOptions) -> Self {
        let valid_hosts = options
            .valid_hosts
            .into_iter()
            .map(|h| {
                let h = h.trim().to_lowercase();
                h.strip_suffix('.').unwrap_or(&h).to_string()
            })
            .filter(|h| !h.is_empty())
            .collect();

        Self {
            rules: options.rules.unwrap_or_else(default_rules),
            valid_hosts,
            hostname_extractor: options.hostname_extractor,
        }
    }

    /// Ruleset used by this extractor
    pub fn rules(&self) -> &RuleTrie {
        &self.rules
    }

    /// Valid hosts allow-list, normalized to lowercase
    pub fn valid_hosts(&self) -> &[String] {
        &self.valid_hosts
    }

    /// Extract the hostname from `input` with the configured extractor.
    pub fn extract_hostname(&self, input: &str) -> Option<String> {
        match &self.hostname_extractor {
            Some(extract) => extract(input),
            None => hostname::extract_hostname(input),
        }
    }

    /// Check hostname validity, accepting allow-listed hosts as-is.
    pub fn is_valid_hostname(&self, hostname: &str) -> bool {
        self.valid_hosts.iter().any(|h| h == hostname) || hostname::is_valid_hostname(hostname)
    }

    /// Run the full pipeline.
    pub fn parse(&self, input: &str) -> ParseResult {
        self.parse_until(input, Stage::All)
    }

    /// Run the pipeline up to and including `stop_at`.
    ///
    /// Fields of stages that were not reached, or that follow a failed
    /// stage, keep their defaults (`None`/`false`).
    pub fn parse_until(&self, input: &str, stop_at: Stage) -> ParseResult {
        let host = match self.extract_hostname(input) {
            Some(h) => h,
            None => return ParseResult::default(),
        };

        let mut result = ParseResult {
            hostname: Some(host.clone()),
            ..ParseResult::default()
        };

        if hostname::is_ip(&host) {
            result.is_ip = true;
            result.is_valid = true;
            return result;
        }

        // Cleaning already dropped one trailing dot; another one leaves an empty TLD
        result.is_valid = !host.ends_with('.') && self.is_valid_hostname(&host);
        if !result.is_valid || stop_at == Stage::Hostname {
            return result;
        }

        result.tld_exists = self.rules.tld_exists(&host);
        if stop_at == Stage::TldExists {
            return result;
        }

        let public_suffix = self.rules.public_suffix(&host);
        result.public_suffix = public_suffix.map(str::to_string);
        if stop_at == Stage::PublicSuffix {
            return result;
        }

        let domain = public_suffix.and_then(|s| get_domain(&self.valid_hosts, s, &host));
        result.domain = domain.map(str::to_string);
        if stop_at == Stage::Domain {
            return result;
        }

        result.subdomain = Some(get_subdomain(&host, domain).to_string());
        result
    }

    /// Check whether the input's TLD is known to the ruleset.
    pub fn tld_exists(&self, input: &str) -> bool {
        self.parse_until(input, Stage::TldExists).tld_exists
    }

    /// Public suffix of the input's hostname.
    pub fn get_public_suffix(&self, input: &str) -> Option<String> {
        self.parse_until(input, Stage::PublicSuffix).public_suffix
    }

    /// Registrable domain of the input's hostname.
    pub fn get_domain(&self, input: &str) -> Option<String> {
        self.parse_until(input, Stage::Domain).domain
    }

    /// Subdomain of the input's hostname; `None` when the hostname is
    /// missing, invalid or an IP.
    pub fn get_subdomain(&self, input: &str) -> Option<String> {
        self.parse_until(input, Stage::All).subdomain
    }
}

impl Default for TldExtractor {
    fn default() -> Self {
        Self::new(ExtractorOptions::default())
    }
}

impl fmt::Debug for TldExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TldExtractor")
            .field("rules", &self.rules.rule_count())
            .field("exceptions", &self.rules.exception_count())
            .field("valid_hosts", &self.valid_hosts)
            .field("hostname_extractor", &self.hostname_extractor.is_some())
            .finish()
    }
}

/// Extractor over the bundled list with no valid hosts.
static DEFAULT_EXTRACTOR: Lazy<TldExtractor> = Lazy::new(TldExtractor::default);

/// Shared default extractor.
pub fn default_extractor() -> &'static TldExtractor {
    &DEFAULT_EXTRACTOR
}
