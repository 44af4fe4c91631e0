//! Expression AST nodes for the CSX teaching language

use serde::{Deserialize, Serialize};

use super::{tag, Chain, Element, Ident, Link, Node, Position, Type};
use crate::visit::Visitor;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinOp {
    // Arithmetic
    /// Addition (+)
    Plus,
    /// Subtraction (-)
    Minus,
    /// Multiplication (*)
    Times,
    /// Division (/)
    Slash,

    // Comparison
    /// Equal (==)
    Eq,
    /// Not equal (!=)
    NotEq,
    /// Less than (<)
    Lt,
    /// Greater than (>)
    Gt,
    /// Less than or equal (<=)
    LtEq,
    /// Greater than or equal (>=)
    GtEq,

    // Logical
    /// Conditional AND (&&)
    And,
    /// Conditional OR (||)
    Or,
}

impl BinOp {
    /// Returns the symbol representation of the operator
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            BinOp::Plus => "+",
            BinOp::Minus => "-",
            BinOp::Times => "*",
            BinOp::Slash => "/",
            BinOp::Eq => "==",
            BinOp::NotEq => "!=",
            BinOp::Lt => "<",
            BinOp::Gt => ">",
            BinOp::LtEq => "<=",
            BinOp::GtEq => ">=",
            BinOp::And => "&&",
            BinOp::Or => "||",
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    /// Logical NOT (!)
    Not,
    /// Negation (-)
    Neg,
}

impl UnaryOp {
    /// Returns the symbol representation of the operator
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Neg => "-",
        }
    }
}

/// An expression
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Expr {
    /// Binary operation (a + b, x == y, etc.)
    Binary(BinaryExpr),
    /// Unary operation (!flag)
    Unary(UnaryExpr),
    /// Cast ((int) c)
    Cast(CastExpr),
    /// Function call (f(a, b))
    Call(CallExpr),
    /// Bare identifier
    Ident(Ident),
    /// Variable reference, possibly subscripted (x, a[i])
    Name(Name),
    /// Integer literal
    IntLit(IntLit),
    /// Character literal
    CharLit(CharLit),
    /// String literal
    StrLit(StrLit),
    /// `true`
    True(Position),
    /// `false`
    False(Position),
    /// No expression (the family's sentinel, e.g. a missing initializer)
    #[default]
    Empty,
}

impl Expr {
    /// Create an identifier expression
    #[must_use]
    pub fn ident(name: impl Into<String>, pos: Position) -> Self {
        Expr::Ident(Ident::new(name, pos))
    }

    /// Create an unsubscripted name reference
    #[must_use]
    pub fn name(name: impl Into<String>, pos: Position) -> Self {
        Expr::Name(Name::plain(Ident::new(name, pos), pos))
    }

    /// Create an integer literal expression
    #[must_use]
    pub fn int(value: i32, pos: Position) -> Self {
        Expr::IntLit(IntLit::new(value, pos))
    }

    /// Create a character literal expression
    #[must_use]
    pub fn char(value: char, pos: Position) -> Self {
        Expr::CharLit(CharLit::new(value, pos))
    }

    /// Create a string literal expression
    #[must_use]
    pub fn string(value: impl Into<String>, pos: Position) -> Self {
        Expr::StrLit(StrLit::new(value, pos))
    }

    /// Create a boolean literal expression
    #[must_use]
    pub fn bool(value: bool, pos: Position) -> Self {
        if value {
            Expr::True(pos)
        } else {
            Expr::False(pos)
        }
    }

    /// Create a binary expression
    #[must_use]
    pub fn binary(left: Expr, op: BinOp, right: Expr, pos: Position) -> Self {
        Expr::Binary(BinaryExpr::new(left, op, right, pos))
    }

    /// Create a unary expression
    #[must_use]
    pub fn unary(op: UnaryOp, operand: Expr, pos: Position) -> Self {
        Expr::Unary(UnaryExpr::new(op, operand, pos))
    }
}

impl Node for Expr {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: V::Context) -> V::Output {
        match self {
            Expr::Binary(expr) => visitor.visit_binary(expr, ctx),
            Expr::Unary(expr) => visitor.visit_unary(expr, ctx),
            Expr::Cast(expr) => visitor.visit_cast(expr, ctx),
            Expr::Call(expr) => visitor.visit_call_expr(expr, ctx),
            Expr::Ident(ident) => visitor.visit_ident(ident, ctx),
            Expr::Name(name) => visitor.visit_name(name, ctx),
            Expr::IntLit(lit) => visitor.visit_int_lit(lit, ctx),
            Expr::CharLit(lit) => visitor.visit_char_lit(lit, ctx),
            Expr::StrLit(lit) => visitor.visit_str_lit(lit, ctx),
            Expr::True(pos) => visitor.visit_true(*pos, ctx),
            Expr::False(pos) => visitor.visit_false(*pos, ctx),
            Expr::Empty => visitor.visit_empty_expr(ctx),
        }
    }

    fn position(&self) -> Position {
        match self {
            Expr::Binary(expr) => expr.pos,
            Expr::Unary(expr) => expr.pos,
            Expr::Cast(expr) => expr.pos,
            Expr::Call(expr) => expr.pos,
            Expr::Ident(ident) => ident.pos,
            Expr::Name(name) => name.pos,
            Expr::IntLit(lit) => lit.pos,
            Expr::CharLit(lit) => lit.pos,
            Expr::StrLit(lit) => lit.pos,
            Expr::True(pos) | Expr::False(pos) => *pos,
            Expr::Empty => Position::SENTINEL,
        }
    }

    fn is_empty(&self) -> bool {
        matches!(self, Expr::Empty)
    }

    fn tag(&self) -> &'static str {
        match self {
            Expr::Binary(_) => tag::BINARY,
            Expr::Unary(_) => tag::UNARY,
            Expr::Cast(_) => tag::CAST,
            Expr::Call(_) => tag::CALL_EXPR,
            Expr::Ident(_) => tag::IDENT,
            Expr::Name(_) => tag::NAME,
            Expr::IntLit(_) => tag::INT_LIT,
            Expr::CharLit(_) => tag::CHAR_LIT,
            Expr::StrLit(_) => tag::STR_LIT,
            Expr::True(_) => tag::TRUE,
            Expr::False(_) => tag::FALSE,
            Expr::Empty => tag::EMPTY_EXPR,
        }
    }
}

impl Element for Expr {
    const LINK_TAG: &'static str = tag::EXPRS;
    const END_TAG: &'static str = tag::EXPRS_END;

    fn accept_link<V: Visitor + ?Sized>(
        link: &Link<Self>,
        visitor: &mut V,
        ctx: V::Context,
    ) -> V::Output {
        visitor.visit_exprs(link, ctx)
    }

    fn accept_end<V: Visitor + ?Sized>(visitor: &mut V, ctx: V::Context) -> V::Output {
        visitor.visit_exprs_end(ctx)
    }
}

/// Binary operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub op: BinOp,
    pub right: Box<Expr>,
    pub pos: Position,
}

impl BinaryExpr {
    /// Create a new binary operation
    #[must_use]
    pub fn new(left: Expr, op: BinOp, right: Expr, pos: Position) -> Self {
        Self {
            left: Box::new(left),
            op,
            right: Box::new(right),
            pos,
        }
    }
}

/// Unary operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub operand: Box<Expr>,
    pub pos: Position,
}

impl UnaryExpr {
    /// Create a new unary operation
    #[must_use]
    pub fn new(op: UnaryOp, operand: Expr, pos: Position) -> Self {
        Self {
            op,
            operand: Box::new(operand),
            pos,
        }
    }
}

/// Type cast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastExpr {
    /// Target type
    pub ty: Type,
    /// Converted operand
    pub operand: Box<Expr>,
    /// Source position
    pub pos: Position,
}

impl CastExpr {
    /// Create a new cast
    #[must_use]
    pub fn new(ty: Type, operand: Expr, pos: Position) -> Self {
        Self {
            ty,
            operand: Box::new(operand),
            pos,
        }
    }
}

/// Function call used as an expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallExpr {
    /// Called method
    pub method: Ident,
    /// Actual arguments, in order
    pub args: Chain<Expr>,
    /// Source position
    pub pos: Position,
}

impl CallExpr {
    /// Create a new function call
    #[must_use]
    pub fn new(method: Ident, args: Chain<Expr>, pos: Position) -> Self {
        Self { method, args, pos }
    }
}

/// A variable reference with an optional subscript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    /// Referenced variable
    pub ident: Ident,
    /// Subscript, or [`Expr::Empty`] for a plain reference
    pub subscript: Box<Expr>,
    /// Source position
    pub pos: Position,
}

impl Name {
    /// Create a new name reference
    #[must_use]
    pub fn new(ident: Ident, subscript: Expr, pos: Position) -> Self {
        Self {
            ident,
            subscript: Box::new(subscript),
            pos,
        }
    }

    /// Create a name without a subscript
    #[must_use]
    pub fn plain(ident: Ident, pos: Position) -> Self {
        Self::new(ident, Expr::Empty, pos)
    }

    /// Returns true if this reference is subscripted
    #[must_use]
    pub fn is_indexed(&self) -> bool {
        !self.subscript.is_empty()
    }
}

impl Node for Name {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: V::Context) -> V::Output {
        visitor.visit_name(self, ctx)
    }

    fn position(&self) -> Position {
        self.pos
    }

    fn tag(&self) -> &'static str {
        tag::NAME
    }
}

impl Element for Name {
    const LINK_TAG: &'static str = tag::NAMES;
    const END_TAG: &'static str = tag::NAMES_END;

    fn accept_link<V: Visitor + ?Sized>(
        link: &Link<Self>,
        visitor: &mut V,
        ctx: V::Context,
    ) -> V::Output {
        visitor.visit_names(link, ctx)
    }

    fn accept_end<V: Visitor + ?Sized>(visitor: &mut V, ctx: V::Context) -> V::Output {
        visitor.visit_names_end(ctx)
    }
}

/// Integer literal, already converted from its source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntLit {
    pub value: i32,
    pub pos: Position,
}

impl IntLit {
    /// Create a new integer literal
    #[must_use]
    pub const fn new(value: i32, pos: Position) -> Self {
        Self { value, pos }
    }
}

impl Node for IntLit {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: V::Context) -> V::Output {
        visitor.visit_int_lit(self, ctx)
    }

    fn position(&self) -> Position {
        self.pos
    }

    fn tag(&self) -> &'static str {
        tag::INT_LIT
    }
}

/// Character literal, escapes already resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharLit {
    pub value: char,
    pub pos: Position,
}

impl CharLit {
    /// Create a new character literal
    #[must_use]
    pub const fn new(value: char, pos: Position) -> Self {
        Self { value, pos }
    }
}

/// String literal content, without quotes and with escapes resolved
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrLit {
    pub value: String,
    pub pos: Position,
}

impl StrLit {
    /// Create a new string literal
    #[must_use]
    pub fn new(value: impl Into<String>, pos: Position) -> Self {
        Self {
            value: value.into(),
            pos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_symbols() {
        assert_eq!(BinOp::Plus.as_str(), "+");
        assert_eq!(BinOp::NotEq.as_str(), "!=");
        assert_eq!(BinOp::And.as_str(), "&&");
        assert_eq!(UnaryOp::Not.as_str(), "!");
    }

    #[test]
    fn plain_name_has_empty_subscript() {
        let pos = Position::new(2, 7);
        let name = Name::plain(Ident::new("count", pos), pos);
        assert!(!name.is_indexed());
        assert_eq!(*name.subscript, Expr::Empty);

        let indexed = Name::new(Ident::new("a", pos), Expr::int(0, Position::new(2, 9)), pos);
        assert!(indexed.is_indexed());
    }

    #[test]
    fn literal_values_participate_in_equality() {
        let pos = Position::new(1, 1);
        assert_eq!(Expr::int(3, pos), Expr::int(3, pos));
        assert_ne!(Expr::int(3, pos), Expr::int(4, pos));
        assert_eq!(Expr::bool(true, pos), Expr::True(pos));
        assert_ne!(Expr::char('a', pos), Expr::string("a", pos));
    }
}
