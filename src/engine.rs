//! Boundary to the external CSS compaction engine
//!
//! The engine itself lives outside this crate. This module turns routed
//! arguments into a [`CompactRequest`], hands it to a [`Compactor`] and
//! summarizes what came back.

pub mod compactor;
pub mod invocation;
pub mod report;

pub use compactor::{
    CompactOptions, CompactRequest, Compactor, EngineError, OutputTarget, ParseIssue,
};
pub use invocation::{Invocation, InvocationError, Resolved};
pub use report::{Reduction, Report, execute};
