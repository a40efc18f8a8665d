//! Longest-match public suffix resolution over a [`RuleTrie`].

use super::trie::{RuleTrie, TrieNode};
use crate::types::WILDCARD;

/// Walk `node` consuming `labels` from the right.
///
/// `remaining` is the number of labels not consumed yet. Returns the
/// smallest label index at which a matched rule starts, i.e. the longest
/// suffix any rule path covers.
fn lookup_in_trie(labels: &[&str], node: &TrieNode, remaining: usize) -> Option<usize> {
    let mut start = node.is_terminal().then_some(remaining);

    if remaining == 0 {
        return start;
    }

    let label = labels[remaining - 1];
    if let Some(next) = node.child(label) {
        start = min_index(start, lookup_in_trie(labels, next, remaining - 1));
    }
    if let Some(next) = node.child(WILDCARD) {
        start = min_index(start, lookup_in_trie(labels, next, remaining - 1));
    }

    start
}

fn min_index(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

impl RuleTrie {
    /// Resolve the public suffix of `hostname`.
    ///
    /// The hostname is split on `.` with empty labels kept. When no rule
    /// matches, the last label is the public suffix (the implicit `*` rule).
    /// A matching exception rule drops its leftmost label from the suffix.
    ///
    /// Returns a slice of `hostname`, or `None` when `hostname` is empty.
    /// The caller is expected to have checked hostname validity first.
    pub fn public_suffix<'a>(&self, hostname: &'a str) -> Option<&'a str> {
        if hostname.is_empty() {
            return None;
        }

        let labels: Vec<&str> = hostname.split('.').collect();
        let count = labels.len();

        let mut start =
            lookup_in_trie(&labels, &self.rules, count).unwrap_or(count - 1);

        if let Some(index) = lookup_in_trie(&labels, &self.exceptions, count) {
            start = (index + 1).min(count - 1);
        }

        let offset: usize = labels[..start].iter().map(|l| l.len() + 1).sum();
        Some(&hostname[offset..])
    }

    /// Check whether `hostname` is itself a public suffix.
    pub fn is_public_suffix(&self, hostname: &str) -> bool {
        self.public_suffix(hostname) == Some(hostname)
    }

    /// Check whether `hostname`, or its last label, is a known TLD.
    pub fn tld_exists(&self, hostname: &str) -> bool {
        if self.has_tld(hostname) {
            return true;
        }
        match hostname.rfind('.') {
            Some(dot) => self.has_tld(&hostname[dot + 1..]),
            None => false,
        }
    }
}
