//! Public suffix resolution.
//!
//! This module provides:
//! - [`RuleTrie`]: plain, wildcard and exception rules in two label tries
//! - longest-match lookup with the implicit `*` fallback for unknown TLDs
//!
//! ## Example
//!
//! ```
//! use psl_engine::suffix::RuleTrie;
//!
//! let trie = RuleTrie::from_text("com\nco.uk\n*.ck\n!www.ck").unwrap();
//!
//! assert_eq!(trie.public_suffix("www.example.co.uk"), Some("co.uk"));
//! assert_eq!(trie.public_suffix("foo.bar.ck"), Some("bar.ck")); // wildcard
//! assert_eq!(trie.public_suffix("www.ck"), Some("ck"));         // exception
//! assert_eq!(trie.public_suffix("example.zz"), Some("zz"));     // fallback
//! ```

mod resolver;
mod trie;

pub use trie::{RuleTrie, TrieNode, TERMINAL_KEY};
