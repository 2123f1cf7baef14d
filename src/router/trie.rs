#![forbid(unsafe_code)]

//! Generic trie node keyed by a single alphabet symbol
//!
//! Each node owns its children and optionally carries a payload. A payload is
//! present exactly when some registered key terminates at that node.

use std::collections::HashMap;
use std::hash::Hash;

/// A node in a trie keyed by `K` and carrying an optional `V` payload
#[derive(Debug, Clone)]
pub struct TrieNode<K, V> {
    children: HashMap<K, TrieNode<K, V>>,
    value: Option<V>,
}

impl<K: Eq + Hash, V> TrieNode<K, V> {
    /// Creates an empty node with no children and no payload
    pub fn new() -> Self {
        TrieNode {
            children: HashMap::new(),
            value: None,
        }
    }

    /// Returns the child reached by `key`, if any
    pub fn child(&self, key: &K) -> Option<&TrieNode<K, V>> {
        self.children.get(key)
    }

    /// Returns the child reached by `key`, creating it if it does not exist
    pub fn child_or_insert(&mut self, key: K) -> &mut TrieNode<K, V> {
        self.children.entry(key).or_default()
    }

    /// Returns the payload stored at this node
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Stores a payload at this node, returning the payload it replaced
    pub fn set_value(&mut self, value: V) -> Option<V> {
        self.value.replace(value)
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in the subtree rooted here, including this node
    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(TrieNode::node_count).sum::<usize>()
    }
}

impl<K: Eq + Hash, V> Default for TrieNode<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_empty() {
        let node: TrieNode<char, u8> = TrieNode::new();

        assert!(!node.has_value());
        assert!(node.is_leaf());
        assert_eq!(node.node_count(), 1);
        assert_eq!(node.value(), None);
    }

    #[test]
    fn test_child_or_insert_reuses_existing_child() {
        let mut root: TrieNode<char, u8> = TrieNode::new();

        root.child_or_insert('a').set_value(1);
        root.child_or_insert('a').child_or_insert('b');

        assert_eq!(root.node_count(), 3);
        assert_eq!(root.child(&'a').and_then(TrieNode::value), Some(&1));
        assert!(root.child(&'a').unwrap().child(&'b').is_some());
        assert!(root.child(&'z').is_none());
    }

    #[test]
    fn test_set_value_returns_shadowed_payload() {
        let mut node: TrieNode<char, &str> = TrieNode::new();

        assert_eq!(node.set_value("first"), None);
        assert_eq!(node.set_value("second"), Some("first"));
        assert_eq!(node.value(), Some(&"second"));
    }

    #[test]
    fn test_payload_distinct_from_default_value() {
        // A zero payload is still a payload
        let mut node: TrieNode<char, u32> = TrieNode::new();
        assert!(!node.has_value());

        node.set_value(0);
        assert!(node.has_value());
        assert_eq!(node.value(), Some(&0));
    }
}
