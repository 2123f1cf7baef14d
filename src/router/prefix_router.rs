#![forbid(unsafe_code)]

//! Prefix-keyed argument routing
//!
//! A [`PrefixRouter`] is built once from a table of [`PrefixMapping`]s and then
//! classifies raw command-line tokens by walking a character trie. The walk
//! stops at the first node carrying a category, so when one registered prefix
//! is itself a prefix of another, the shorter one always wins. Whatever follows
//! the matched prefix becomes the token's value.

use super::trie::TrieNode;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors produced while building or using a [`PrefixRouter`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// A mapping was declared with an empty prefix
    #[error("Invalid prefix mapping for {category}: prefix must not be empty")]
    EmptyPrefix { category: String },

    /// A token did not start with any registered prefix
    #[error("Unrecognized argument: {0}")]
    UnrecognizedArgument(String),
}

/// An immutable (prefix, category) pair
///
/// The prefix is guaranteed to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMapping<C> {
    prefix: String,
    category: C,
}

impl<C: Debug> PrefixMapping<C> {
    /// Creates a mapping, rejecting an empty prefix
    pub fn new(prefix: impl Into<String>, category: C) -> Result<Self, RouterError> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(RouterError::EmptyPrefix {
                category: format!("{:?}", category),
            });
        }

        Ok(PrefixMapping { prefix, category })
    }
}

impl<C> PrefixMapping<C> {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn category(&self) -> &C {
        &self.category
    }
}

/// Category to value map produced by a single [`PrefixRouter::route`] call
///
/// Each category holds at most one value. An absent category means no token
/// carried its prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingResult<C: Eq + Hash> {
    values: HashMap<C, String>,
}

impl<C: Eq + Hash> RoutingResult<C> {
    pub fn new() -> Self {
        RoutingResult {
            values: HashMap::new(),
        }
    }

    /// Records a value, returning the one it replaced
    pub(crate) fn insert(&mut self, category: C, value: String) -> Option<String> {
        self.values.insert(category, value)
    }

    pub fn get(&self, category: &C) -> Option<&str> {
        self.values.get(category).map(String::as_str)
    }

    pub fn contains(&self, category: &C) -> bool {
        self.values.contains_key(category)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the routed values in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&C, &str)> {
        self.values.iter().map(|(category, value)| (category, value.as_str()))
    }

    pub fn into_inner(self) -> HashMap<C, String> {
        self.values
    }
}

impl<C: Eq + Hash> Default for RoutingResult<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Eq + Hash> FromIterator<(C, String)> for RoutingResult<C> {
    fn from_iter<I: IntoIterator<Item = (C, String)>>(iter: I) -> Self {
        RoutingResult {
            values: iter.into_iter().collect(),
        }
    }
}

/// Classifies argument tokens by registered prefix
///
/// The trie is built in [`PrefixRouter::new`] and never mutated afterwards, so
/// a router can be shared between threads and routed from concurrently.
#[derive(Debug, Clone)]
pub struct PrefixRouter<C> {
    root: TrieNode<char, C>,
    case_sensitive: bool,
    mapping_count: usize,
}

impl<C: Clone + Eq + Hash + Debug> PrefixRouter<C> {
    /// Builds a router from already validated mappings
    ///
    /// Prefixes are folded to lowercase unless `case_sensitive` is set. A
    /// mapping whose prefix ends on the same trie node as an earlier one
    /// replaces it.
    pub fn new(mappings: impl IntoIterator<Item = PrefixMapping<C>>, case_sensitive: bool) -> Self {
        let mut root = TrieNode::new();
        let mut mapping_count = 0;

        for mapping in mappings {
            let mut node = &mut root;
            for ch in mapping.prefix.chars() {
                node = node.child_or_insert(fold_char(ch, case_sensitive));
            }

            if let Some(shadowed) = node.set_value(mapping.category.clone()) {
                debug!(
                    prefix = %mapping.prefix,
                    shadowed = ?shadowed,
                    category = ?mapping.category,
                    "prefix mapping replaces an earlier registration"
                );
            }
            mapping_count += 1;
        }

        debug!(
            mappings = mapping_count,
            nodes = root.node_count(),
            case_sensitive,
            "built prefix router"
        );

        PrefixRouter {
            root,
            case_sensitive,
            mapping_count,
        }
    }

    /// Validates a static `(prefix, category)` table and builds a router from it
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::EmptyPrefix`] if any prefix is empty. No router
    /// is built in that case.
    pub fn from_table(table: &[(&str, C)], case_sensitive: bool) -> Result<Self, RouterError> {
        let mappings = table
            .iter()
            .map(|(prefix, category)| PrefixMapping::new(*prefix, category.clone()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(mappings, case_sensitive))
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Number of mappings the router was built from, shadowed ones included
    pub fn mapping_count(&self) -> usize {
        self.mapping_count
    }

    /// Classifies a single token
    ///
    /// Returns the category of the first registered prefix reached while
    /// walking the token, together with the rest of the token. The value is
    /// empty when the token is exactly the prefix.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::UnrecognizedArgument`] carrying the whole token
    /// when the walk leaves the trie or runs out of characters first.
    pub fn classify<'t>(&self, token: &'t str) -> Result<(C, &'t str), RouterError> {
        let mut node = &self.root;

        for (offset, ch) in token.char_indices() {
            node = node
                .child(&fold_char(ch, self.case_sensitive))
                .ok_or_else(|| RouterError::UnrecognizedArgument(token.to_string()))?;

            if let Some(category) = node.value() {
                let value = &token[offset + ch.len_utf8()..];
                return Ok((category.clone(), value));
            }
        }

        Err(RouterError::UnrecognizedArgument(token.to_string()))
    }

    /// Routes every token, failing on the first one that cannot be classified
    ///
    /// A later token overwrites the value of an earlier token in the same
    /// category. On failure nothing routed so far is returned.
    pub fn route<I, S>(&self, tokens: I) -> Result<RoutingResult<C>, RouterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut result = RoutingResult::new();

        for token in tokens {
            let token = token.as_ref();
            let (category, value) = self.classify(token)?;
            trace!(token, category = ?category, value, "routed argument");

            if let Some(previous) = result.insert(category, value.to_string()) {
                trace!(token, previous = %previous, "argument overrides an earlier value");
            }
        }

        Ok(result)
    }
}

/// Lowercases one character when routing is case-insensitive
///
/// Characters whose lowercase form is longer than one character are kept as
/// is, so offsets into the token stay on the original character boundaries.
fn fold_char(ch: char, case_sensitive: bool) -> char {
    if case_sensitive {
        return ch;
    }

    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => ch,
    }
}
