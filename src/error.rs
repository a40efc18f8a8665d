use thiserror::Error;

/// PSL engine error types.
///
/// Only ruleset construction can fail. Hostname lookups report failure
/// through `None`/`false` fields instead.
#[derive(Error, Debug)]
pub enum PslError {
    #[error("Rule format error at line {line}: {message}")]
    RuleFormat { line: usize, message: String },

    #[error("Invalid trie data: {0}")]
    InvalidTrie(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl PslError {
    /// Build a rule format error for a rule that did not come from a text line.
    pub(crate) fn rule_format(message: impl Into<String>) -> Self {
        PslError::RuleFormat {
            line: 0,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PslError>;
