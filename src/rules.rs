//! Bundled ruleset and rule file loading.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::debug;
use once_cell::sync::Lazy;

use crate::error::Result;
use crate::parser::parse_rules;
use crate::suffix::RuleTrie;

/// Public suffix list shipped with the crate, in PSL text format.
pub const BUNDLED_LIST: &str = include_str!("../data/public_suffix_list.dat");

/// Process-wide default ruleset, compiled on first use and never mutated.
static DEFAULT_RULES: Lazy<Arc<RuleTrie>> = Lazy::new(|| {
    let trie = RuleTrie::from_text(BUNDLED_LIST)
        .expect("DEFAULT_RULES: bundled public suffix list is malformed");
    debug!(
        "initialized bundled public suffix list: {} rules, {} exceptions",
        trie.rule_count(),
        trie.exception_count()
    );
    Arc::new(trie)
});

/// Shared handle to the bundled ruleset.
pub fn default_rules() -> Arc<RuleTrie> {
    Arc::clone(&DEFAULT_RULES)
}

/// Rule file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSourceFormat {
    /// Public Suffix List text (`public_suffix_list.dat`)
    Text,
    /// Compiled trie JSON (`{"rules": ..., "exceptions": ...}`)
    Json,
}

impl RuleSourceFormat {
    /// Detect format from file extension, defaulting to PSL text
    pub fn detect(path: impl AsRef<Path>) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        match ext.as_deref() {
            Some("json") => RuleSourceFormat::Json,
            _ => RuleSourceFormat::Text,
        }
    }
}

/// Load a ruleset from a file, detecting the format from its extension.
pub fn load_rules(path: impl AsRef<Path>) -> Result<RuleTrie> {
    let path = path.as_ref();
    let format = RuleSourceFormat::detect(path);
    debug!("loading rules from {} as {:?}", path.display(), format);

    let text = fs::read_to_string(path)?;
    match format {
        RuleSourceFormat::Text => RuleTrie::build(&parse_rules(&text)?),
        RuleSourceFormat::Json => RuleTrie::from_json(&text),
    }
}
