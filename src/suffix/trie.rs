/// Label tries for public suffix rules.
///
/// Rules and exceptions live in two separate tries keyed by reversed
/// labels, so the children of each root are top-level domains.
use std::collections::HashMap;

use log::debug;
use serde_json::{Map, Value};

use crate::error::{PslError, Result};
use crate::parser::parse_rules;
use crate::types::Rule;

/// Key marking a terminal node in the JSON trie shape.
pub const TERMINAL_KEY: &str = "$";

/// A node of a label trie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    children: HashMap<String, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    /// Child reached through `label`, wildcard label included.
    pub fn child(&self, label: &str) -> Option<&TrieNode> {
        self.children.get(label)
    }

    /// A complete rule ends at this node
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn insert<'a>(&mut self, labels: impl Iterator<Item = &'a str>) {
        let mut node = self;
        for label in labels {
            node = node.children.entry(label.to_string()).or_default();
        }
        node.terminal = true;
    }

    /// Number of terminal nodes in this subtree
    fn terminal_count(&self) -> usize {
        let own = usize::from(self.terminal);
        own + self
            .children
            .values()
            .map(TrieNode::terminal_count)
            .sum::<usize>()
    }

    fn from_value(value: &Value, path: &str) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            PslError::InvalidTrie(format!("node at '{}' is not an object", path))
        })?;

        let mut node = TrieNode::default();
        for (key, child) in object {
            if key == TERMINAL_KEY {
                node.terminal = true;
                continue;
            }
            if key.is_empty() {
                return Err(PslError::InvalidTrie(format!(
                    "empty label under '{}'",
                    path
                )));
            }
            let child_path = if path.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", key, path)
            };
            node.children
                .insert(key.clone(), TrieNode::from_value(child, &child_path)?);
        }
        Ok(node)
    }

    fn to_value(&self) -> Value {
        let mut object = Map::with_capacity(self.children.len() + 1);
        for (label, child) in &self.children {
            object.insert(label.clone(), child.to_value());
        }
        if self.terminal {
            object.insert(TERMINAL_KEY.to_string(), Value::from(0));
        }
        Value::Object(object)
    }
}

/// Compiled, immutable public suffix ruleset.
///
/// Read-only after construction and safe to share across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTrie {
    pub(crate) rules: TrieNode,
    pub(crate) exceptions: TrieNode,
}

impl RuleTrie {
    /// Build a trie from parsed rules.
    ///
    /// Fails with `RuleFormat` on a rule with no labels or an empty label.
    pub fn build<'a>(rules: impl IntoIterator<Item = &'a Rule>) -> Result<Self> {
        let mut trie = RuleTrie::default();

        for rule in rules {
            if rule.labels.is_empty() || rule.labels.iter().any(|l| l.is_empty()) {
                return Err(PslError::rule_format(format!(
                    "rule has an empty label sequence: '{}'",
                    rule.labels.join(".")
                )));
            }
            if rule.is_exception {
                trie.exceptions.insert(rule.reversed());
            } else {
                trie.rules.insert(rule.reversed());
            }
        }

        debug!(
            "compiled suffix trie: {} rules, {} exceptions",
            trie.rule_count(),
            trie.exception_count()
        );
        Ok(trie)
    }

    /// Parse and compile rules in the Public Suffix List text format.
    pub fn from_text(text: &str) -> Result<Self> {
        let rules = parse_rules(text)?;
        Self::build(&rules)
    }

    /// Load a compiled trie in its JSON shape:
    /// `{"rules": {"uk": {"$": 0, "co": {"$": 0}}}, "exceptions": {}}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let object = value
            .as_object()
            .ok_or_else(|| PslError::InvalidTrie("top level is not an object".to_string()))?;

        let rules = object
            .get("rules")
            .ok_or_else(|| PslError::InvalidTrie("missing 'rules' trie".to_string()))?;
        let rules = TrieNode::from_value(rules, "")?;

        let exceptions = match object.get("exceptions") {
            Some(v) => TrieNode::from_value(v, "")?,
            None => TrieNode::default(),
        };

        // A terminal root would make the empty suffix match everything
        if rules.terminal || exceptions.terminal {
            return Err(PslError::InvalidTrie(
                "root node cannot be terminal".to_string(),
            ));
        }

        let trie = Self { rules, exceptions };
        debug!(
            "loaded suffix trie from JSON: {} rules, {} exceptions",
            trie.rule_count(),
            trie.exception_count()
        );
        Ok(trie)
    }

    /// Serialize to the JSON trie shape accepted by `from_json`.
    pub fn to_json(&self) -> String {
        let mut object = Map::with_capacity(2);
        object.insert("rules".to_string(), self.rules.to_value());
        object.insert("exceptions".to_string(), self.exceptions.to_value());
        Value::Object(object).to_string()
    }

    /// Check whether `label` is a top-level entry of the rules trie.
    pub fn has_tld(&self, label: &str) -> bool {
        self.rules.children.contains_key(label)
    }

    /// Number of plain and wildcard rules
    pub fn rule_count(&self) -> usize {
        self.rules.terminal_count()
    }

    /// Number of exception rules
    pub fn exception_count(&self) -> usize {
        self.exceptions.terminal_count()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.children.is_empty() && self.exceptions.children.is_empty()
    }
}
