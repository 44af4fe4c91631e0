//! Type AST nodes for the CSX teaching language

use serde::{Deserialize, Serialize};

use super::{tag, Node, Position};
use crate::visit::Visitor;

/// A type written in source code
///
/// Types carry nothing beyond their tag and position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Type {
    /// `int`
    Int(Position),
    /// `bool`
    Bool(Position),
    /// `char`
    Char(Position),
    /// `void`
    Void(Position),
    /// No type applies (the family's sentinel)
    #[default]
    Empty,
}

impl Type {
    /// Returns the keyword for this type, or `""` for [`Type::Empty`]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Type::Int(_) => "int",
            Type::Bool(_) => "bool",
            Type::Char(_) => "char",
            Type::Void(_) => "void",
            Type::Empty => "",
        }
    }
}

impl Node for Type {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: V::Context) -> V::Output {
        match *self {
            Type::Int(pos) => visitor.visit_int_type(pos, ctx),
            Type::Bool(pos) => visitor.visit_bool_type(pos, ctx),
            Type::Char(pos) => visitor.visit_char_type(pos, ctx),
            Type::Void(pos) => visitor.visit_void_type(pos, ctx),
            Type::Empty => visitor.visit_empty_type(ctx),
        }
    }

    fn position(&self) -> Position {
        match *self {
            Type::Int(pos) | Type::Bool(pos) | Type::Char(pos) | Type::Void(pos) => pos,
            Type::Empty => Position::SENTINEL,
        }
    }

    fn is_empty(&self) -> bool {
        matches!(self, Type::Empty)
    }

    fn tag(&self) -> &'static str {
        match self {
            Type::Int(_) => tag::INT_TYPE,
            Type::Bool(_) => tag::BOOL_TYPE,
            Type::Char(_) => tag::CHAR_TYPE,
            Type::Void(_) => tag::VOID_TYPE,
            Type::Empty => tag::EMPTY_TYPE,
        }
    }
}
