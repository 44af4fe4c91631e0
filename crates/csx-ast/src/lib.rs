//! CSX AST - syntax trees for the CSX teaching language
//!
//! This crate provides the tree a CSX front end builds and the protocol every
//! later pass uses to walk it:
//! - Position: line/column tags and offset lookup
//! - AST: closed node families with sentinel tags and chain-encoded sequences
//! - Visit: the double-dispatch visitor protocol
//! - Unparse, Stats, Validate: operations written against that protocol
//! - Interchange: JSON snapshots of whole programs

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Source positions
pub mod position;

/// Abstract Syntax Tree - node families, chains and sentinels
pub mod ast;

/// Visitor protocol - one handler per node tag
pub mod visit;

/// Source printer
pub mod unparse;

/// Per-tag node counting
pub mod stats;

/// Structural checks over built trees
pub mod validate;

/// JSON snapshots of programs
pub mod interchange;

/// Test utilities - sample trees covering every tag
pub mod testutil;

/// Convenience re-export of the node trait
pub use ast::Node;

/// Convenience re-export of program roots
pub use ast::Program;

/// Convenience re-export of positions
pub use position::{LineIndex, Position};

/// Convenience re-export of the visitor protocol
pub use visit::Visitor;

/// Convenience re-export of the printer
pub use unparse::{UnparseConfig, Unparser};

/// Convenience re-export of node statistics
pub use stats::NodeStats;

/// Convenience re-export of the validator
pub use validate::{Validator, Violation, ViolationKind};

/// Convenience re-export of interchange errors
pub use interchange::InterchangeError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
