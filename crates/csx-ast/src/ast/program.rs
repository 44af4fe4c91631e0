//! Program roots, member lists and method declarations

use serde::{Deserialize, Serialize};

use super::{tag, ArgDecl, Chain, Decl, Element, Ident, Link, Node, Position, Stmt, Type};
use crate::visit::Visitor;

/// The root of one compilation unit
///
/// A unit is either a bare CSX-lite program or a full class; the two shapes
/// are never mixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Program {
    /// `{ decls stmts }` for the reduced language subset
    Lite(LiteProgram),
    /// `class Name { members }`
    Class(ClassProgram),
}

impl Node for Program {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: V::Context) -> V::Output {
        match self {
            Program::Lite(program) => program.accept(visitor, ctx),
            Program::Class(program) => program.accept(visitor, ctx),
        }
    }

    fn position(&self) -> Position {
        match self {
            Program::Lite(program) => program.pos,
            Program::Class(program) => program.pos,
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            Program::Lite(_) => tag::LITE_PROGRAM,
            Program::Class(_) => tag::CLASS_PROGRAM,
        }
    }
}

/// A CSX-lite program: field declarations followed by statements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteProgram {
    /// Declarations, in source order
    pub decls: Chain<Decl>,
    /// Statements, in source order
    pub stmts: Chain<Stmt>,
    /// Source position
    pub pos: Position,
}

impl LiteProgram {
    /// Create a new lite program
    #[must_use]
    pub fn new(decls: Chain<Decl>, stmts: Chain<Stmt>, pos: Position) -> Self {
        Self { decls, stmts, pos }
    }
}

impl Node for LiteProgram {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: V::Context) -> V::Output {
        visitor.visit_lite_program(self, ctx)
    }

    fn position(&self) -> Position {
        self.pos
    }

    fn tag(&self) -> &'static str {
        tag::LITE_PROGRAM
    }
}

/// A class declaration, the root of a full CSX program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassProgram {
    /// Class name
    pub name: Ident,
    /// Fields and methods
    pub members: MemberDecls,
    /// Source position
    pub pos: Position,
}

impl ClassProgram {
    /// Create a new class root
    #[must_use]
    pub fn new(name: Ident, members: MemberDecls, pos: Position) -> Self {
        Self { name, members, pos }
    }
}

impl Node for ClassProgram {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: V::Context) -> V::Output {
        visitor.visit_class_program(self, ctx)
    }

    fn position(&self) -> Position {
        self.pos
    }

    fn tag(&self) -> &'static str {
        tag::CLASS_PROGRAM
    }
}

/// The members of a class: fields, then methods
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDecls {
    pub fields: Chain<Decl>,
    pub methods: Chain<MethodDecl>,
    pub pos: Position,
}

impl MemberDecls {
    /// Create a new member list
    #[must_use]
    pub fn new(fields: Chain<Decl>, methods: Chain<MethodDecl>, pos: Position) -> Self {
        Self {
            fields,
            methods,
            pos,
        }
    }
}

impl Node for MemberDecls {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: V::Context) -> V::Output {
        visitor.visit_member_decls(self, ctx)
    }

    fn position(&self) -> Position {
        self.pos
    }

    fn tag(&self) -> &'static str {
        tag::MEMBER_DECLS
    }
}

/// A method declaration
///
/// There is exactly one body per method. Overloading is not modelled here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDecl {
    /// Method name
    pub name: Ident,
    /// Formal arguments, in order
    pub args: Chain<ArgDecl>,
    /// Return type, or [`Type::Empty`] when none is declared
    pub return_type: Type,
    /// Local declarations
    pub decls: Chain<Decl>,
    /// Method body
    pub body: Chain<Stmt>,
    /// Source position
    pub pos: Position,
}

impl MethodDecl {
    /// Create a new method declaration
    #[must_use]
    pub fn new(
        name: Ident,
        args: Chain<ArgDecl>,
        return_type: Type,
        decls: Chain<Decl>,
        body: Chain<Stmt>,
        pos: Position,
    ) -> Self {
        Self {
            name,
            args,
            return_type,
            decls,
            body,
            pos,
        }
    }
}

impl Node for MethodDecl {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: V::Context) -> V::Output {
        visitor.visit_method_decl(self, ctx)
    }

    fn position(&self) -> Position {
        self.pos
    }

    fn tag(&self) -> &'static str {
        tag::METHOD_DECL
    }
}

impl Element for MethodDecl {
    const LINK_TAG: &'static str = tag::METHOD_DECLS;
    const END_TAG: &'static str = tag::METHOD_DECLS_END;

    fn accept_link<V: Visitor + ?Sized>(
        link: &Link<Self>,
        visitor: &mut V,
        ctx: V::Context,
    ) -> V::Output {
        visitor.visit_method_decls(link, ctx)
    }

    fn accept_end<V: Visitor + ?Sized>(visitor: &mut V, ctx: V::Context) -> V::Output {
        visitor.visit_method_decls_end(ctx)
    }
}
