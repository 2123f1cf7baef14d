#![forbid(unsafe_code)]

//! Argument categories understood by the compactor front end

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic category of a routed command-line argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArgKind {
    InputFile,
    OutputFile,
    Copyright,
    TimeStamp,
    SyntaxOnly,
    Warning,
    PrettyPrint,
}

impl ArgKind {
    /// All categories, in the order they are reported
    pub const ALL: [ArgKind; 7] = [
        ArgKind::InputFile,
        ArgKind::OutputFile,
        ArgKind::Copyright,
        ArgKind::TimeStamp,
        ArgKind::SyntaxOnly,
        ArgKind::Warning,
        ArgKind::PrettyPrint,
    ];

    /// The built-in prefix table, in registration order
    pub fn default_table() -> [(&'static str, ArgKind); 7] {
        [
            ("/IN:", ArgKind::InputFile),
            ("/OUT:", ArgKind::OutputFile),
            ("/INFO:", ArgKind::Copyright),
            ("/TIME:", ArgKind::TimeStamp),
            ("/SYNTAX", ArgKind::SyntaxOnly),
            ("/WARNING", ArgKind::Warning),
            ("/PRETTY", ArgKind::PrettyPrint),
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArgKind::InputFile => "input-file",
            ArgKind::OutputFile => "output-file",
            ArgKind::Copyright => "copyright",
            ArgKind::TimeStamp => "time-stamp",
            ArgKind::SyntaxOnly => "syntax-only",
            ArgKind::Warning => "warning",
            ArgKind::PrettyPrint => "pretty-print",
        }
    }

    /// True for categories whose presence matters but whose value is ignored
    pub fn is_switch(&self) -> bool {
        matches!(
            self,
            ArgKind::SyntaxOnly | ArgKind::Warning | ArgKind::PrettyPrint
        )
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        kind: ArgKind,
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for kind in ArgKind::ALL {
            let parsed: Wrapper = toml::from_str(&format!("kind = \"{}\"", kind.as_str())).unwrap();
            assert_eq!(parsed.kind, kind);
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let parsed: Result<Wrapper, _> = toml::from_str("kind = \"minify\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_default_table_covers_every_kind() {
        let table = ArgKind::default_table();
        for kind in ArgKind::ALL {
            assert!(table.iter().any(|(_, k)| *k == kind), "missing {}", kind);
        }
        assert!(table.iter().all(|(prefix, _)| !prefix.is_empty()));
    }

    #[test]
    fn test_switches() {
        assert!(ArgKind::PrettyPrint.is_switch());
        assert!(ArgKind::SyntaxOnly.is_switch());
        assert!(!ArgKind::InputFile.is_switch());
        assert_eq!(ArgKind::TimeStamp.to_string(), "time-stamp");
    }
}
