//! Visitor protocol for syntax tree traversal
//!
//! An operation over the tree (printer, checker, code generator, ...) is a type
//! implementing [`Visitor`]: one handler per tag in every family, sentinels
//! included. Calling [`Node::accept`](crate::ast::Node::accept) on a node runs
//! exactly the handler for that node's tag; handlers recurse by calling
//! `accept` on children.
//!
//! None of the handlers have default bodies, so adding a tag to the model is a
//! compile error in every operation until it handles the new tag, while adding
//! an operation never touches the model.
//!
//! The context value is owned by the operation. A printer might thread an
//! indentation depth, a checker a scope cursor. Dispatch never mutates the tree.

use crate::ast::{
    ArgDecl, ArrayArgDecl, ArrayDecl, AssignStmt, BinaryExpr, BlockStmt, BreakStmt, CallExpr,
    CallStmt, CastExpr, CharLit, ClassProgram, ConstDecl, ContinueStmt, Decl, Expr, Ident, IfStmt,
    IntLit, Link, LiteProgram, MemberDecls, MethodDecl, Name, Position, PrintStmt, ReadStmt,
    ReturnStmt, Stmt, StrLit, UnaryExpr, ValArgDecl, VarDecl, WhileStmt,
};

/// A complete set of handlers, one per node tag
pub trait Visitor {
    /// Per-call traversal context (e.g. an indentation depth)
    type Context;
    /// Value produced by every handler
    type Output;

    // ==================== Roots ====================

    fn visit_lite_program(&mut self, program: &LiteProgram, ctx: Self::Context) -> Self::Output;
    fn visit_class_program(&mut self, program: &ClassProgram, ctx: Self::Context) -> Self::Output;
    fn visit_member_decls(&mut self, members: &MemberDecls, ctx: Self::Context) -> Self::Output;

    // ==================== Chains ====================

    fn visit_field_decls(&mut self, link: &Link<Decl>, ctx: Self::Context) -> Self::Output;
    fn visit_field_decls_end(&mut self, ctx: Self::Context) -> Self::Output;
    fn visit_method_decls(&mut self, link: &Link<MethodDecl>, ctx: Self::Context) -> Self::Output;
    fn visit_method_decls_end(&mut self, ctx: Self::Context) -> Self::Output;
    fn visit_arg_decls(&mut self, link: &Link<ArgDecl>, ctx: Self::Context) -> Self::Output;
    fn visit_arg_decls_end(&mut self, ctx: Self::Context) -> Self::Output;
    fn visit_stmts(&mut self, link: &Link<Stmt>, ctx: Self::Context) -> Self::Output;
    fn visit_stmts_end(&mut self, ctx: Self::Context) -> Self::Output;
    /// Print values and call arguments
    fn visit_exprs(&mut self, link: &Link<Expr>, ctx: Self::Context) -> Self::Output;
    fn visit_exprs_end(&mut self, ctx: Self::Context) -> Self::Output;
    /// Read targets
    fn visit_names(&mut self, link: &Link<Name>, ctx: Self::Context) -> Self::Output;
    fn visit_names_end(&mut self, ctx: Self::Context) -> Self::Output;

    // ==================== Declarations ====================

    fn visit_var_decl(&mut self, decl: &VarDecl, ctx: Self::Context) -> Self::Output;
    fn visit_const_decl(&mut self, decl: &ConstDecl, ctx: Self::Context) -> Self::Output;
    fn visit_array_decl(&mut self, decl: &ArrayDecl, ctx: Self::Context) -> Self::Output;
    fn visit_method_decl(&mut self, decl: &MethodDecl, ctx: Self::Context) -> Self::Output;
    fn visit_val_arg_decl(&mut self, arg: &ValArgDecl, ctx: Self::Context) -> Self::Output;
    fn visit_array_arg_decl(&mut self, arg: &ArrayArgDecl, ctx: Self::Context) -> Self::Output;

    // ==================== Types ====================

    fn visit_int_type(&mut self, pos: Position, ctx: Self::Context) -> Self::Output;
    fn visit_bool_type(&mut self, pos: Position, ctx: Self::Context) -> Self::Output;
    fn visit_char_type(&mut self, pos: Position, ctx: Self::Context) -> Self::Output;
    fn visit_void_type(&mut self, pos: Position, ctx: Self::Context) -> Self::Output;
    fn visit_empty_type(&mut self, ctx: Self::Context) -> Self::Output;

    // ==================== Statements ====================

    fn visit_assign(&mut self, stmt: &AssignStmt, ctx: Self::Context) -> Self::Output;
    fn visit_if(&mut self, stmt: &IfStmt, ctx: Self::Context) -> Self::Output;
    fn visit_while(&mut self, stmt: &WhileStmt, ctx: Self::Context) -> Self::Output;
    fn visit_read(&mut self, stmt: &ReadStmt, ctx: Self::Context) -> Self::Output;
    fn visit_print(&mut self, stmt: &PrintStmt, ctx: Self::Context) -> Self::Output;
    fn visit_call_stmt(&mut self, stmt: &CallStmt, ctx: Self::Context) -> Self::Output;
    fn visit_return(&mut self, stmt: &ReturnStmt, ctx: Self::Context) -> Self::Output;
    fn visit_block(&mut self, stmt: &BlockStmt, ctx: Self::Context) -> Self::Output;
    fn visit_break(&mut self, stmt: &BreakStmt, ctx: Self::Context) -> Self::Output;
    fn visit_continue(&mut self, stmt: &ContinueStmt, ctx: Self::Context) -> Self::Output;
    fn visit_empty_stmt(&mut self, ctx: Self::Context) -> Self::Output;

    // ==================== Expressions ====================

    fn visit_binary(&mut self, expr: &BinaryExpr, ctx: Self::Context) -> Self::Output;
    fn visit_unary(&mut self, expr: &UnaryExpr, ctx: Self::Context) -> Self::Output;
    fn visit_cast(&mut self, expr: &CastExpr, ctx: Self::Context) -> Self::Output;
    fn visit_call_expr(&mut self, expr: &CallExpr, ctx: Self::Context) -> Self::Output;
    fn visit_ident(&mut self, ident: &Ident, ctx: Self::Context) -> Self::Output;
    fn visit_name(&mut self, name: &Name, ctx: Self::Context) -> Self::Output;
    fn visit_int_lit(&mut self, lit: &IntLit, ctx: Self::Context) -> Self::Output;
    fn visit_char_lit(&mut self, lit: &CharLit, ctx: Self::Context) -> Self::Output;
    fn visit_str_lit(&mut self, lit: &StrLit, ctx: Self::Context) -> Self::Output;
    fn visit_true(&mut self, pos: Position, ctx: Self::Context) -> Self::Output;
    fn visit_false(&mut self, pos: Position, ctx: Self::Context) -> Self::Output;
    fn visit_empty_expr(&mut self, ctx: Self::Context) -> Self::Output;
}
