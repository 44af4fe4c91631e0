//! Per-tag node counts
//!
//! [`NodeStats`] walks a tree and records how many nodes of each tag it met.
//! Chain links, chain ends and sentinels are nodes like any other and are
//! counted under their own tags.

use std::collections::BTreeMap;
use std::fmt;

use crate::ast::{
    tag, ArgDecl, ArrayArgDecl, ArrayDecl, AssignStmt, BinaryExpr, BlockStmt, BreakStmt, CallExpr,
    CallStmt, CastExpr, CharLit, ClassProgram, ConstDecl, ContinueStmt, Decl, Expr, Ident, IfStmt,
    IntLit, Link, LiteProgram, MemberDecls, MethodDecl, Name, Node, Position, PrintStmt, ReadStmt,
    ReturnStmt, Stmt, StrLit, UnaryExpr, ValArgDecl, VarDecl, WhileStmt,
};
use crate::visit::Visitor;

/// Node counts keyed by tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeStats {
    counts: BTreeMap<&'static str, usize>,
}

impl NodeStats {
    /// Create an empty tally
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every node reachable from `node`, `node` included
    #[must_use]
    pub fn collect<N: Node>(node: &N) -> Self {
        let mut stats = Self::new();
        node.accept(&mut stats, ());
        stats
    }

    /// Number of nodes seen with the given tag
    #[must_use]
    pub fn count(&self, tag: &str) -> usize {
        self.counts.get(tag).copied().unwrap_or(0)
    }

    /// Number of nodes seen overall
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Tags that were seen, in name order, with their counts
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        self.counts.iter().map(|(tag, count)| (*tag, *count))
    }

    fn record(&mut self, tag: &'static str) {
        *self.counts.entry(tag).or_insert(0) += 1;
    }
}

impl fmt::Display for NodeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.counts.keys().map(|tag| tag.len()).max().unwrap_or(0).max(5);
        for (tag, count) in &self.counts {
            writeln!(f, "{tag:<width$}  {count}")?;
        }
        write!(f, "{:<width$}  {}", "total", self.total())
    }
}

impl Visitor for NodeStats {
    type Context = ();
    type Output = ();

    fn visit_lite_program(&mut self, program: &LiteProgram, (): ()) {
        self.record(tag::LITE_PROGRAM);
        program.decls.accept(self, ());
        program.stmts.accept(self, ());
    }

    fn visit_class_program(&mut self, program: &ClassProgram, (): ()) {
        self.record(tag::CLASS_PROGRAM);
        program.name.accept(self, ());
        program.members.accept(self, ());
    }

    fn visit_member_decls(&mut self, members: &MemberDecls, (): ()) {
        self.record(tag::MEMBER_DECLS);
        members.fields.accept(self, ());
        members.methods.accept(self, ());
    }

    fn visit_field_decls(&mut self, link: &Link<Decl>, (): ()) {
        self.record(tag::FIELD_DECLS);
        link.head.accept(self, ());
        link.rest.accept(self, ());
    }

    fn visit_field_decls_end(&mut self, (): ()) {
        self.record(tag::FIELD_DECLS_END);
    }

    fn visit_method_decls(&mut self, link: &Link<MethodDecl>, (): ()) {
        self.record(tag::METHOD_DECLS);
        link.head.accept(self, ());
        link.rest.accept(self, ());
    }

    fn visit_method_decls_end(&mut self, (): ()) {
        self.record(tag::METHOD_DECLS_END);
    }

    fn visit_arg_decls(&mut self, link: &Link<ArgDecl>, (): ()) {
        self.record(tag::ARG_DECLS);
        link.head.accept(self, ());
        link.rest.accept(self, ());
    }

    fn visit_arg_decls_end(&mut self, (): ()) {
        self.record(tag::ARG_DECLS_END);
    }

    fn visit_stmts(&mut self, link: &Link<Stmt>, (): ()) {
        self.record(tag::STMTS);
        link.head.accept(self, ());
        link.rest.accept(self, ());
    }

    fn visit_stmts_end(&mut self, (): ()) {
        self.record(tag::STMTS_END);
    }

    fn visit_exprs(&mut self, link: &Link<Expr>, (): ()) {
        self.record(tag::EXPRS);
        link.head.accept(self, ());
        link.rest.accept(self, ());
    }

    fn visit_exprs_end(&mut self, (): ()) {
        self.record(tag::EXPRS_END);
    }

    fn visit_names(&mut self, link: &Link<Name>, (): ()) {
        self.record(tag::NAMES);
        link.head.accept(self, ());
        link.rest.accept(self, ());
    }

    fn visit_names_end(&mut self, (): ()) {
        self.record(tag::NAMES_END);
    }

    fn visit_var_decl(&mut self, decl: &VarDecl, (): ()) {
        self.record(tag::VAR_DECL);
        decl.name.accept(self, ());
        decl.ty.accept(self, ());
        decl.init.accept(self, ());
    }

    fn visit_const_decl(&mut self, decl: &ConstDecl, (): ()) {
        self.record(tag::CONST_DECL);
        decl.name.accept(self, ());
        decl.value.accept(self, ());
    }

    fn visit_array_decl(&mut self, decl: &ArrayDecl, (): ()) {
        self.record(tag::ARRAY_DECL);
        decl.name.accept(self, ());
        decl.elem_type.accept(self, ());
        decl.size.accept(self, ());
    }

    fn visit_method_decl(&mut self, decl: &MethodDecl, (): ()) {
        self.record(tag::METHOD_DECL);
        decl.name.accept(self, ());
        decl.args.accept(self, ());
        decl.return_type.accept(self, ());
        decl.decls.accept(self, ());
        decl.body.accept(self, ());
    }

    fn visit_val_arg_decl(&mut self, arg: &ValArgDecl, (): ()) {
        self.record(tag::VAL_ARG_DECL);
        arg.name.accept(self, ());
        arg.ty.accept(self, ());
    }

    fn visit_array_arg_decl(&mut self, arg: &ArrayArgDecl, (): ()) {
        self.record(tag::ARRAY_ARG_DECL);
        arg.name.accept(self, ());
        arg.elem_type.accept(self, ());
    }

    fn visit_int_type(&mut self, _pos: Position, (): ()) {
        self.record(tag::INT_TYPE);
    }

    fn visit_bool_type(&mut self, _pos: Position, (): ()) {
        self.record(tag::BOOL_TYPE);
    }

    fn visit_char_type(&mut self, _pos: Position, (): ()) {
        self.record(tag::CHAR_TYPE);
    }

    fn visit_void_type(&mut self, _pos: Position, (): ()) {
        self.record(tag::VOID_TYPE);
    }

    fn visit_empty_type(&mut self, (): ()) {
        self.record(tag::EMPTY_TYPE);
    }

    fn visit_assign(&mut self, stmt: &AssignStmt, (): ()) {
        self.record(tag::ASSIGN);
        stmt.target.accept(self, ());
        stmt.source.accept(self, ());
    }

    fn visit_if(&mut self, stmt: &IfStmt, (): ()) {
        self.record(tag::IF);
        stmt.condition.accept(self, ());
        stmt.then_part.accept(self, ());
        stmt.else_part.accept(self, ());
    }

    fn visit_while(&mut self, stmt: &WhileStmt, (): ()) {
        self.record(tag::WHILE);
        stmt.label.accept(self, ());
        stmt.condition.accept(self, ());
        stmt.body.accept(self, ());
    }

    fn visit_read(&mut self, stmt: &ReadStmt, (): ()) {
        self.record(tag::READ);
        stmt.targets.accept(self, ());
    }

    fn visit_print(&mut self, stmt: &PrintStmt, (): ()) {
        self.record(tag::PRINT);
        stmt.values.accept(self, ());
    }

    fn visit_call_stmt(&mut self, stmt: &CallStmt, (): ()) {
        self.record(tag::CALL_STMT);
        stmt.method.accept(self, ());
        stmt.args.accept(self, ());
    }

    fn visit_return(&mut self, stmt: &ReturnStmt, (): ()) {
        self.record(tag::RETURN);
        stmt.value.accept(self, ());
    }

    fn visit_block(&mut self, stmt: &BlockStmt, (): ()) {
        self.record(tag::BLOCK);
        stmt.decls.accept(self, ());
        stmt.stmts.accept(self, ());
    }

    fn visit_break(&mut self, stmt: &BreakStmt, (): ()) {
        self.record(tag::BREAK);
        stmt.label.accept(self, ());
    }

    fn visit_continue(&mut self, stmt: &ContinueStmt, (): ()) {
        self.record(tag::CONTINUE);
        stmt.label.accept(self, ());
    }

    fn visit_empty_stmt(&mut self, (): ()) {
        self.record(tag::EMPTY_STMT);
    }

    fn visit_binary(&mut self, expr: &BinaryExpr, (): ()) {
        self.record(tag::BINARY);
        expr.left.accept(self, ());
        expr.right.accept(self, ());
    }

    fn visit_unary(&mut self, expr: &UnaryExpr, (): ()) {
        self.record(tag::UNARY);
        expr.operand.accept(self, ());
    }

    fn visit_cast(&mut self, expr: &CastExpr, (): ()) {
        self.record(tag::CAST);
        expr.ty.accept(self, ());
        expr.operand.accept(self, ());
    }

    fn visit_call_expr(&mut self, expr: &CallExpr, (): ()) {
        self.record(tag::CALL_EXPR);
        expr.method.accept(self, ());
        expr.args.accept(self, ());
    }

    fn visit_ident(&mut self, _ident: &Ident, (): ()) {
        self.record(tag::IDENT);
    }

    fn visit_name(&mut self, name: &Name, (): ()) {
        self.record(tag::NAME);
        name.ident.accept(self, ());
        name.subscript.accept(self, ());
    }

    fn visit_int_lit(&mut self, _lit: &IntLit, (): ()) {
        self.record(tag::INT_LIT);
    }

    fn visit_char_lit(&mut self, _lit: &CharLit, (): ()) {
        self.record(tag::CHAR_LIT);
    }

    fn visit_str_lit(&mut self, _lit: &StrLit, (): ()) {
        self.record(tag::STR_LIT);
    }

    fn visit_true(&mut self, _pos: Position, (): ()) {
        self.record(tag::TRUE);
    }

    fn visit_false(&mut self, _pos: Position, (): ()) {
        self.record(tag::FALSE);
    }

    fn visit_empty_expr(&mut self, (): ()) {
        self.record(tag::EMPTY_EXPR);
    }
}
