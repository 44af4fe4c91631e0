//! Abstract Syntax Tree (AST) for the CSX teaching language
//!
//! This module defines the node families a parser builds and every later pass
//! consumes. Each family is a closed enum; optional and repeated children never
//! use `Option`, they use the family's own `Empty` tag or a [`Chain`] ending in
//! [`Chain::End`]. All real nodes carry the [`Position`] of the token that
//! produced them.

mod chain;
mod decl;
mod expr;
mod program;
mod stmt;
mod types;

pub use chain::*;
pub use decl::*;
pub use expr::*;
pub use program::*;
pub use stmt::*;
pub use types::*;

use serde::{Deserialize, Serialize};

// Re-export Position for convenience
pub use crate::position::Position;
use crate::visit::Visitor;

/// Behaviour shared by every node, including sentinels
pub trait Node {
    /// Dispatch to the visitor handler matching this node's tag
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: V::Context) -> V::Output;

    /// Source position of this node ([`Position::SENTINEL`] for sentinels)
    fn position(&self) -> Position;

    /// Returns true only for a family's sentinel value
    fn is_empty(&self) -> bool {
        false
    }

    /// Stable snake_case name of this node's tag (see [`tag`])
    fn tag(&self) -> &'static str;
}

/// Tag names reported by [`Node::tag`]
pub mod tag {
    pub const LITE_PROGRAM: &str = "lite_program";
    pub const CLASS_PROGRAM: &str = "class_program";
    pub const MEMBER_DECLS: &str = "member_decls";

    pub const FIELD_DECLS: &str = "field_decls";
    pub const FIELD_DECLS_END: &str = "field_decls_end";
    pub const METHOD_DECLS: &str = "method_decls";
    pub const METHOD_DECLS_END: &str = "method_decls_end";
    pub const ARG_DECLS: &str = "arg_decls";
    pub const ARG_DECLS_END: &str = "arg_decls_end";
    pub const STMTS: &str = "stmts";
    pub const STMTS_END: &str = "stmts_end";
    pub const EXPRS: &str = "exprs";
    pub const EXPRS_END: &str = "exprs_end";
    pub const NAMES: &str = "names";
    pub const NAMES_END: &str = "names_end";

    pub const VAR_DECL: &str = "var_decl";
    pub const CONST_DECL: &str = "const_decl";
    pub const ARRAY_DECL: &str = "array_decl";
    pub const METHOD_DECL: &str = "method_decl";
    pub const VAL_ARG_DECL: &str = "val_arg_decl";
    pub const ARRAY_ARG_DECL: &str = "array_arg_decl";

    pub const INT_TYPE: &str = "int_type";
    pub const BOOL_TYPE: &str = "bool_type";
    pub const CHAR_TYPE: &str = "char_type";
    pub const VOID_TYPE: &str = "void_type";
    pub const EMPTY_TYPE: &str = "empty_type";

    pub const ASSIGN: &str = "assign";
    pub const IF: &str = "if";
    pub const WHILE: &str = "while";
    pub const READ: &str = "read";
    pub const PRINT: &str = "print";
    pub const CALL_STMT: &str = "call_stmt";
    pub const RETURN: &str = "return";
    pub const BLOCK: &str = "block";
    pub const BREAK: &str = "break";
    pub const CONTINUE: &str = "continue";
    pub const EMPTY_STMT: &str = "empty_stmt";

    pub const BINARY: &str = "binary";
    pub const UNARY: &str = "unary";
    pub const CAST: &str = "cast";
    pub const CALL_EXPR: &str = "call_expr";
    pub const IDENT: &str = "ident";
    pub const NAME: &str = "name";
    pub const INT_LIT: &str = "int_lit";
    pub const CHAR_LIT: &str = "char_lit";
    pub const STR_LIT: &str = "str_lit";
    pub const TRUE: &str = "true";
    pub const FALSE: &str = "false";
    pub const EMPTY_EXPR: &str = "empty_expr";

    /// Every tag, in declaration order
    pub const ALL: &[&str] = &[
        LITE_PROGRAM,
        CLASS_PROGRAM,
        MEMBER_DECLS,
        FIELD_DECLS,
        FIELD_DECLS_END,
        METHOD_DECLS,
        METHOD_DECLS_END,
        ARG_DECLS,
        ARG_DECLS_END,
        STMTS,
        STMTS_END,
        EXPRS,
        EXPRS_END,
        NAMES,
        NAMES_END,
        VAR_DECL,
        CONST_DECL,
        ARRAY_DECL,
        METHOD_DECL,
        VAL_ARG_DECL,
        ARRAY_ARG_DECL,
        INT_TYPE,
        BOOL_TYPE,
        CHAR_TYPE,
        VOID_TYPE,
        EMPTY_TYPE,
        ASSIGN,
        IF,
        WHILE,
        READ,
        PRINT,
        CALL_STMT,
        RETURN,
        BLOCK,
        BREAK,
        CONTINUE,
        EMPTY_STMT,
        BINARY,
        UNARY,
        CAST,
        CALL_EXPR,
        IDENT,
        NAME,
        INT_LIT,
        CHAR_LIT,
        STR_LIT,
        TRUE,
        FALSE,
        EMPTY_EXPR,
    ];
}

/// An identifier with its source position
///
/// Identifiers are raw names; no binding information lives in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ident {
    /// The identifier name
    pub name: String,
    /// Source position
    pub pos: Position,
}

impl Ident {
    /// Create a new identifier
    #[must_use]
    pub fn new(name: impl Into<String>, pos: Position) -> Self {
        Self {
            name: name.into(),
            pos,
        }
    }
}

impl Node for Ident {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: V::Context) -> V::Output {
        visitor.visit_ident(self, ctx)
    }

    fn position(&self) -> Position {
        self.pos
    }

    fn tag(&self) -> &'static str {
        tag::IDENT
    }
}
