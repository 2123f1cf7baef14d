//! Prefix routing of raw argument tokens

pub mod prefix_router;
pub mod trie;

pub use prefix_router::{PrefixMapping, PrefixRouter, RouterError, RoutingResult};
pub use trie::TrieNode;
