#![forbid(unsafe_code)]

//! csscompactor: command line front end for a CSS compactor
//!
//! Raw arguments such as `/IN:site.css` are classified by a prefix trie
//! ([`router::PrefixRouter`]) and resolved into a request for an external
//! compaction engine ([`engine::Compactor`]).

pub mod cli;
pub mod config;
pub mod engine;
pub mod output;
pub mod router;
pub mod types;
