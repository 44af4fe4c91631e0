//! Statement AST nodes for the CSX teaching language

use serde::{Deserialize, Serialize};

use super::{tag, Chain, Decl, Element, Expr, Ident, Link, Name, Node, Position};
use crate::visit::Visitor;

/// A statement
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Stmt {
    /// Assignment (x = value, a[i] = value)
    Assign(AssignStmt),
    /// If-then with an optional else
    If(IfStmt),
    /// While loop with an optional label
    While(WhileStmt),
    /// read(a, b, ...)
    Read(ReadStmt),
    /// print(e1, e2, ...)
    Print(PrintStmt),
    /// Procedure call used as a statement
    Call(CallStmt),
    /// return, return value
    Return(ReturnStmt),
    /// { decls stmts }
    Block(BlockStmt),
    /// break, break label
    Break(BreakStmt),
    /// continue, continue label
    Continue(ContinueStmt),
    /// No statement (the family's sentinel, e.g. a missing else)
    #[default]
    Empty,
}

impl Node for Stmt {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: V::Context) -> V::Output {
        match self {
            Stmt::Assign(stmt) => visitor.visit_assign(stmt, ctx),
            Stmt::If(stmt) => visitor.visit_if(stmt, ctx),
            Stmt::While(stmt) => visitor.visit_while(stmt, ctx),
            Stmt::Read(stmt) => visitor.visit_read(stmt, ctx),
            Stmt::Print(stmt) => visitor.visit_print(stmt, ctx),
            Stmt::Call(stmt) => visitor.visit_call_stmt(stmt, ctx),
            Stmt::Return(stmt) => visitor.visit_return(stmt, ctx),
            Stmt::Block(stmt) => visitor.visit_block(stmt, ctx),
            Stmt::Break(stmt) => visitor.visit_break(stmt, ctx),
            Stmt::Continue(stmt) => visitor.visit_continue(stmt, ctx),
            Stmt::Empty => visitor.visit_empty_stmt(ctx),
        }
    }

    fn position(&self) -> Position {
        match self {
            Stmt::Assign(stmt) => stmt.pos,
            Stmt::If(stmt) => stmt.pos,
            Stmt::While(stmt) => stmt.pos,
            Stmt::Read(stmt) => stmt.pos,
            Stmt::Print(stmt) => stmt.pos,
            Stmt::Call(stmt) => stmt.pos,
            Stmt::Return(stmt) => stmt.pos,
            Stmt::Block(stmt) => stmt.pos,
            Stmt::Break(stmt) => stmt.pos,
            Stmt::Continue(stmt) => stmt.pos,
            Stmt::Empty => Position::SENTINEL,
        }
    }

    fn is_empty(&self) -> bool {
        matches!(self, Stmt::Empty)
    }

    fn tag(&self) -> &'static str {
        match self {
            Stmt::Assign(_) => tag::ASSIGN,
            Stmt::If(_) => tag::IF,
            Stmt::While(_) => tag::WHILE,
            Stmt::Read(_) => tag::READ,
            Stmt::Print(_) => tag::PRINT,
            Stmt::Call(_) => tag::CALL_STMT,
            Stmt::Return(_) => tag::RETURN,
            Stmt::Block(_) => tag::BLOCK,
            Stmt::Break(_) => tag::BREAK,
            Stmt::Continue(_) => tag::CONTINUE,
            Stmt::Empty => tag::EMPTY_STMT,
        }
    }
}

impl Element for Stmt {
    const LINK_TAG: &'static str = tag::STMTS;
    const END_TAG: &'static str = tag::STMTS_END;

    fn accept_link<V: Visitor + ?Sized>(
        link: &Link<Self>,
        visitor: &mut V,
        ctx: V::Context,
    ) -> V::Output {
        visitor.visit_stmts(link, ctx)
    }

    fn accept_end<V: Visitor + ?Sized>(visitor: &mut V, ctx: V::Context) -> V::Output {
        visitor.visit_stmts_end(ctx)
    }
}

/// Assignment statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignStmt {
    /// Assignment target, possibly subscripted
    pub target: Name,
    /// Assigned value
    pub source: Expr,
    /// Source position
    pub pos: Position,
}

impl AssignStmt {
    /// Create a new assignment
    #[must_use]
    pub fn new(target: Name, source: Expr, pos: Position) -> Self {
        Self {
            target,
            source,
            pos,
        }
    }
}

/// If statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_part: Box<Stmt>,
    /// [`Stmt::Empty`] when there is no else
    pub else_part: Box<Stmt>,
    pub pos: Position,
}

impl IfStmt {
    /// Create a new if statement
    #[must_use]
    pub fn new(condition: Expr, then_part: Stmt, else_part: Stmt, pos: Position) -> Self {
        Self {
            condition,
            then_part: Box::new(then_part),
            else_part: Box::new(else_part),
            pos,
        }
    }

    /// Create an if statement without an else branch
    #[must_use]
    pub fn without_else(condition: Expr, then_part: Stmt, pos: Position) -> Self {
        Self::new(condition, then_part, Stmt::Empty, pos)
    }
}

/// While loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhileStmt {
    /// Loop label ([`Expr::Ident`]) or [`Expr::Empty`]
    pub label: Expr,
    /// Loop condition
    pub condition: Expr,
    /// Loop body
    pub body: Box<Stmt>,
    /// Source position
    pub pos: Position,
}

impl WhileStmt {
    /// Create a new while loop
    #[must_use]
    pub fn new(label: Expr, condition: Expr, body: Stmt, pos: Position) -> Self {
        Self {
            label,
            condition,
            body: Box::new(body),
            pos,
        }
    }
}

/// Read statement; targets are read in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadStmt {
    pub targets: Chain<Name>,
    pub pos: Position,
}

impl ReadStmt {
    /// Create a new read statement
    #[must_use]
    pub fn new(targets: Chain<Name>, pos: Position) -> Self {
        Self { targets, pos }
    }
}

/// Print statement; values are printed in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintStmt {
    pub values: Chain<Expr>,
    pub pos: Position,
}

impl PrintStmt {
    /// Create a new print statement
    #[must_use]
    pub fn new(values: Chain<Expr>, pos: Position) -> Self {
        Self { values, pos }
    }
}

/// Procedure call statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallStmt {
    /// Called method
    pub method: Ident,
    /// Actual arguments, in order
    pub args: Chain<Expr>,
    /// Source position
    pub pos: Position,
}

impl CallStmt {
    /// Create a new call statement
    #[must_use]
    pub fn new(method: Ident, args: Chain<Expr>, pos: Position) -> Self {
        Self { method, args, pos }
    }
}

/// Return statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnStmt {
    /// Returned value, or [`Expr::Empty`]
    pub value: Expr,
    pub pos: Position,
}

impl ReturnStmt {
    /// Create a new return statement
    #[must_use]
    pub fn new(value: Expr, pos: Position) -> Self {
        Self { value, pos }
    }
}

/// A nested block with its own declarations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockStmt {
    /// Local declarations
    pub decls: Chain<Decl>,
    /// Statements
    pub stmts: Chain<Stmt>,
    /// Source position
    pub pos: Position,
}

impl BlockStmt {
    /// Create a new block
    #[must_use]
    pub fn new(decls: Chain<Decl>, stmts: Chain<Stmt>, pos: Position) -> Self {
        Self { decls, stmts, pos }
    }
}

/// Break statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakStmt {
    /// Target label ([`Expr::Ident`]) or [`Expr::Empty`]
    pub label: Expr,
    pub pos: Position,
}

impl BreakStmt {
    /// Create a new break statement
    #[must_use]
    pub fn new(label: Expr, pos: Position) -> Self {
        Self { label, pos }
    }
}

/// Continue statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinueStmt {
    /// Target label ([`Expr::Ident`]) or [`Expr::Empty`]
    pub label: Expr,
    pub pos: Position,
}

impl ContinueStmt {
    /// Create a new continue statement
    #[must_use]
    pub fn new(label: Expr, pos: Position) -> Self {
        Self { label, pos }
    }
}
