use std::fs;
use std::path::Path;

use crate::error::{PslError, Result};
use crate::types::{Rule, WILDCARD};

/// Parse rules in the Public Suffix List text format.
///
/// - `// ...` lines and blank lines are skipped
/// - only the first whitespace-delimited token of a line is read
/// - `!label.tld` is an exception rule
/// - `*.label.tld` is a wildcard rule
pub fn parse_rules(text: &str) -> Result<Vec<Rule>> {
    let mut rules = Vec::new();

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1; // 1-based line numbers

        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        let token = match line.split_whitespace().next() {
            Some(token) => token,
            None => continue,
        };

        rules.push(parse_single_rule(token, line_num)?);
    }

    Ok(rules)
}

/// Parse rules from a file in the Public Suffix List text format.
pub fn parse_rules_from_file(path: impl AsRef<Path>) -> Result<Vec<Rule>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| PslError::RuleFormat {
        line: 0,
        message: format!("Failed to read rules file '{}': {}", path.display(), e),
    })?;
    parse_rules(&text)
}

/// Parse a single rule token
fn parse_single_rule(token: &str, line_num: usize) -> Result<Rule> {
    let (pattern, is_exception) = match token.strip_prefix('!') {
        Some(rest) => (rest, true),
        None => (token, false),
    };

    let labels: Vec<String> = pattern.split('.').map(|l| l.to_lowercase()).collect();

    // `*` must be a whole label; `foo*.com` is not a rule
    if let Some(bad) = labels
        .iter()
        .find(|l| l.as_str() != WILDCARD && l.contains(|c: char| c == '*' || c == '!'))
    {
        return Err(PslError::RuleFormat {
            line: line_num,
            message: format!("Invalid label '{}' in rule: {}", bad, token),
        });
    }

    Rule::from_labels(labels, is_exception).map_err(|e| match e {
        PslError::RuleFormat { message, .. } => PslError::RuleFormat {
            line: line_num,
            message,
        },
        other => other,
    })
}
