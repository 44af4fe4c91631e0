//! Declaration AST nodes: fields, locals and formal arguments

use serde::{Deserialize, Serialize};

use super::{tag, Element, Expr, Ident, IntLit, Link, Node, Position, Type};
use crate::visit::Visitor;

/// A field or local declaration
///
/// Declarations are chained in source order; transformations must keep that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decl {
    /// `int x;` or `int x = 3;`
    Var(VarDecl),
    /// `const c = 10;`
    Const(ConstDecl),
    /// `char buf[80];`
    Array(ArrayDecl),
}

impl Node for Decl {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: V::Context) -> V::Output {
        match self {
            Decl::Var(decl) => visitor.visit_var_decl(decl, ctx),
            Decl::Const(decl) => visitor.visit_const_decl(decl, ctx),
            Decl::Array(decl) => visitor.visit_array_decl(decl, ctx),
        }
    }

    fn position(&self) -> Position {
        match self {
            Decl::Var(decl) => decl.pos,
            Decl::Const(decl) => decl.pos,
            Decl::Array(decl) => decl.pos,
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            Decl::Var(_) => tag::VAR_DECL,
            Decl::Const(_) => tag::CONST_DECL,
            Decl::Array(_) => tag::ARRAY_DECL,
        }
    }
}

impl Element for Decl {
    const LINK_TAG: &'static str = tag::FIELD_DECLS;
    const END_TAG: &'static str = tag::FIELD_DECLS_END;

    fn accept_link<V: Visitor + ?Sized>(
        link: &Link<Self>,
        visitor: &mut V,
        ctx: V::Context,
    ) -> V::Output {
        visitor.visit_field_decls(link, ctx)
    }

    fn accept_end<V: Visitor + ?Sized>(visitor: &mut V, ctx: V::Context) -> V::Output {
        visitor.visit_field_decls_end(ctx)
    }
}

/// A variable declaration with an optional initializer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarDecl {
    /// Variable name
    pub name: Ident,
    /// Declared type
    pub ty: Type,
    /// Initial value, or [`Expr::Empty`] when there is none
    pub init: Expr,
    /// Source position
    pub pos: Position,
}

impl VarDecl {
    /// Create a new variable declaration
    #[must_use]
    pub fn new(name: Ident, ty: Type, init: Expr, pos: Position) -> Self {
        Self {
            name,
            ty,
            init,
            pos,
        }
    }

    /// Create a declaration without an initializer
    #[must_use]
    pub fn uninitialized(name: Ident, ty: Type, pos: Position) -> Self {
        Self::new(name, ty, Expr::Empty, pos)
    }
}

/// A named constant; its value is mandatory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstDecl {
    pub name: Ident,
    pub value: Expr,
    pub pos: Position,
}

impl ConstDecl {
    /// Create a new constant declaration
    #[must_use]
    pub fn new(name: Ident, value: Expr, pos: Position) -> Self {
        Self { name, value, pos }
    }
}

/// A fixed-size array declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayDecl {
    /// Array name
    pub name: Ident,
    /// Element type
    pub elem_type: Type,
    /// Number of elements
    pub size: IntLit,
    /// Source position
    pub pos: Position,
}

impl ArrayDecl {
    /// Create a new array declaration
    #[must_use]
    pub fn new(name: Ident, elem_type: Type, size: IntLit, pos: Position) -> Self {
        Self {
            name,
            elem_type,
            size,
            pos,
        }
    }
}

/// A formal argument of a method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArgDecl {
    /// `int x`
    Val(ValArgDecl),
    /// `int a[]`; passed by reference, though only the shape is recorded here
    Array(ArrayArgDecl),
}

impl Node for ArgDecl {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: V::Context) -> V::Output {
        match self {
            ArgDecl::Val(arg) => visitor.visit_val_arg_decl(arg, ctx),
            ArgDecl::Array(arg) => visitor.visit_array_arg_decl(arg, ctx),
        }
    }

    fn position(&self) -> Position {
        match self {
            ArgDecl::Val(arg) => arg.pos,
            ArgDecl::Array(arg) => arg.pos,
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            ArgDecl::Val(_) => tag::VAL_ARG_DECL,
            ArgDecl::Array(_) => tag::ARRAY_ARG_DECL,
        }
    }
}

impl Element for ArgDecl {
    const LINK_TAG: &'static str = tag::ARG_DECLS;
    const END_TAG: &'static str = tag::ARG_DECLS_END;

    fn accept_link<V: Visitor + ?Sized>(
        link: &Link<Self>,
        visitor: &mut V,
        ctx: V::Context,
    ) -> V::Output {
        visitor.visit_arg_decls(link, ctx)
    }

    fn accept_end<V: Visitor + ?Sized>(visitor: &mut V, ctx: V::Context) -> V::Output {
        visitor.visit_arg_decls_end(ctx)
    }
}

/// A by-value argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValArgDecl {
    pub name: Ident,
    pub ty: Type,
    pub pos: Position,
}

impl ValArgDecl {
    /// Create a new by-value argument
    #[must_use]
    pub fn new(name: Ident, ty: Type, pos: Position) -> Self {
        Self { name, ty, pos }
    }
}

/// An array argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayArgDecl {
    pub name: Ident,
    pub elem_type: Type,
    pub pos: Position,
}

impl ArrayArgDecl {
    /// Create a new array argument
    #[must_use]
    pub fn new(name: Ident, elem_type: Type, pos: Position) -> Self {
        Self {
            name,
            elem_type,
            pos,
        }
    }
}
