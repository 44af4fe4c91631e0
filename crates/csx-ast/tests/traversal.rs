//! Integration tests for node dispatch and chain traversal
//!
//! Both visitors below are written purely against the public protocol, the
//! way a downstream pass would be.

use std::collections::{BTreeMap, BTreeSet};

use csx_ast::ast::{
    tag, ArgDecl, ArrayArgDecl, ArrayDecl, AssignStmt, BinOp, BinaryExpr, BlockStmt, BreakStmt,
    CallExpr, CallStmt, CastExpr, Chain, CharLit, ClassProgram, ConstDecl, ContinueStmt, Decl,
    Expr, Ident, IfStmt, IntLit, Link, LiteProgram, MemberDecls, MethodDecl, Name, PrintStmt,
    ReadStmt, ReturnStmt, Stmt, StrLit, Type, UnaryExpr, UnaryOp, ValArgDecl, VarDecl, WhileStmt,
};
use csx_ast::testutil::{self, chain, ident, name, pos};
use csx_ast::{Node, Position, Unparser, Visitor};

// ============================================================================
// Recorder: logs every visited tag with its position, plus referenced names
// ============================================================================

#[derive(Default)]
struct Recorder {
    visits: Vec<(&'static str, Position)>,
    names: Vec<String>,
}

impl Recorder {
    fn run<N: Node>(node: &N) -> Self {
        let mut recorder = Self::default();
        node.accept(&mut recorder, ());
        recorder
    }

    fn tags(&self) -> Vec<&'static str> {
        self.visits.iter().map(|(tag, _)| *tag).collect()
    }

    fn hit(&mut self, tag: &'static str, pos: Position) {
        self.visits.push((tag, pos));
    }

    fn end(&mut self, tag: &'static str) {
        self.visits.push((tag, Position::SENTINEL));
    }
}

impl Visitor for Recorder {
    type Context = ();
    type Output = ();

    fn visit_lite_program(&mut self, program: &LiteProgram, (): ()) {
        self.hit(tag::LITE_PROGRAM, program.pos);
        program.decls.accept(self, ());
        program.stmts.accept(self, ());
    }

    fn visit_class_program(&mut self, program: &ClassProgram, (): ()) {
        self.hit(tag::CLASS_PROGRAM, program.pos);
        program.name.accept(self, ());
        program.members.accept(self, ());
    }

    fn visit_member_decls(&mut self, members: &MemberDecls, (): ()) {
        self.hit(tag::MEMBER_DECLS, members.pos);
        members.fields.accept(self, ());
        members.methods.accept(self, ());
    }

    fn visit_field_decls(&mut self, link: &Link<Decl>, (): ()) {
        self.hit(tag::FIELD_DECLS, link.pos);
        link.head.accept(self, ());
        link.rest.accept(self, ());
    }

    fn visit_field_decls_end(&mut self, (): ()) {
        self.end(tag::FIELD_DECLS_END);
    }

    fn visit_method_decls(&mut self, link: &Link<MethodDecl>, (): ()) {
        self.hit(tag::METHOD_DECLS, link.pos);
        link.head.accept(self, ());
        link.rest.accept(self, ());
    }

    fn visit_method_decls_end(&mut self, (): ()) {
        self.end(tag::METHOD_DECLS_END);
    }

    fn visit_arg_decls(&mut self, link: &Link<ArgDecl>, (): ()) {
        self.hit(tag::ARG_DECLS, link.pos);
        link.head.accept(self, ());
        link.rest.accept(self, ());
    }

    fn visit_arg_decls_end(&mut self, (): ()) {
        self.end(tag::ARG_DECLS_END);
    }

    fn visit_stmts(&mut self, link: &Link<Stmt>, (): ()) {
        self.hit(tag::STMTS, link.pos);
        link.head.accept(self, ());
        link.rest.accept(self, ());
    }

    fn visit_stmts_end(&mut self, (): ()) {
        self.end(tag::STMTS_END);
    }

    fn visit_exprs(&mut self, link: &Link<Expr>, (): ()) {
        self.hit(tag::EXPRS, link.pos);
        link.head.accept(self, ());
        link.rest.accept(self, ());
    }

    fn visit_exprs_end(&mut self, (): ()) {
        self.end(tag::EXPRS_END);
    }

    fn visit_names(&mut self, link: &Link<Name>, (): ()) {
        self.hit(tag::NAMES, link.pos);
        link.head.accept(self, ());
        link.rest.accept(self, ());
    }

    fn visit_names_end(&mut self, (): ()) {
        self.end(tag::NAMES_END);
    }

    fn visit_var_decl(&mut self, decl: &VarDecl, (): ()) {
        self.hit(tag::VAR_DECL, decl.pos);
        decl.name.accept(self, ());
        decl.ty.accept(self, ());
        decl.init.accept(self, ());
    }

    fn visit_const_decl(&mut self, decl: &ConstDecl, (): ()) {
        self.hit(tag::CONST_DECL, decl.pos);
        decl.name.accept(self, ());
        decl.value.accept(self, ());
    }

    fn visit_array_decl(&mut self, decl: &ArrayDecl, (): ()) {
        self.hit(tag::ARRAY_DECL, decl.pos);
        decl.name.accept(self, ());
        decl.elem_type.accept(self, ());
        decl.size.accept(self, ());
    }

    fn visit_method_decl(&mut self, decl: &MethodDecl, (): ()) {
        self.hit(tag::METHOD_DECL, decl.pos);
        decl.name.accept(self, ());
        decl.args.accept(self, ());
        decl.return_type.accept(self, ());
        decl.decls.accept(self, ());
        decl.body.accept(self, ());
    }

    fn visit_val_arg_decl(&mut self, arg: &ValArgDecl, (): ()) {
        self.hit(tag::VAL_ARG_DECL, arg.pos);
        arg.name.accept(self, ());
        arg.ty.accept(self, ());
    }

    fn visit_array_arg_decl(&mut self, arg: &ArrayArgDecl, (): ()) {
        self.hit(tag::ARRAY_ARG_DECL, arg.pos);
        arg.name.accept(self, ());
        arg.elem_type.accept(self, ());
    }

    fn visit_int_type(&mut self, pos: Position, (): ()) {
        self.hit(tag::INT_TYPE, pos);
    }

    fn visit_bool_type(&mut self, pos: Position, (): ()) {
        self.hit(tag::BOOL_TYPE, pos);
    }

    fn visit_char_type(&mut self, pos: Position, (): ()) {
        self.hit(tag::CHAR_TYPE, pos);
    }

    fn visit_void_type(&mut self, pos: Position, (): ()) {
        self.hit(tag::VOID_TYPE, pos);
    }

    fn visit_empty_type(&mut self, (): ()) {
        self.end(tag::EMPTY_TYPE);
    }

    fn visit_assign(&mut self, stmt: &AssignStmt, (): ()) {
        self.hit(tag::ASSIGN, stmt.pos);
        stmt.target.accept(self, ());
        stmt.source.accept(self, ());
    }

    fn visit_if(&mut self, stmt: &IfStmt, (): ()) {
        self.hit(tag::IF, stmt.pos);
        stmt.condition.accept(self, ());
        stmt.then_part.accept(self, ());
        stmt.else_part.accept(self, ());
    }

    fn visit_while(&mut self, stmt: &WhileStmt, (): ()) {
        self.hit(tag::WHILE, stmt.pos);
        stmt.label.accept(self, ());
        stmt.condition.accept(self, ());
        stmt.body.accept(self, ());
    }

    fn visit_read(&mut self, stmt: &ReadStmt, (): ()) {
        self.hit(tag::READ, stmt.pos);
        stmt.targets.accept(self, ());
    }

    fn visit_print(&mut self, stmt: &PrintStmt, (): ()) {
        self.hit(tag::PRINT, stmt.pos);
        stmt.values.accept(self, ());
    }

    fn visit_call_stmt(&mut self, stmt: &CallStmt, (): ()) {
        self.hit(tag::CALL_STMT, stmt.pos);
        stmt.method.accept(self, ());
        stmt.args.accept(self, ());
    }

    fn visit_return(&mut self, stmt: &ReturnStmt, (): ()) {
        self.hit(tag::RETURN, stmt.pos);
        stmt.value.accept(self, ());
    }

    fn visit_block(&mut self, stmt: &BlockStmt, (): ()) {
        self.hit(tag::BLOCK, stmt.pos);
        stmt.decls.accept(self, ());
        stmt.stmts.accept(self, ());
    }

    fn visit_break(&mut self, stmt: &BreakStmt, (): ()) {
        self.hit(tag::BREAK, stmt.pos);
        stmt.label.accept(self, ());
    }

    fn visit_continue(&mut self, stmt: &ContinueStmt, (): ()) {
        self.hit(tag::CONTINUE, stmt.pos);
        stmt.label.accept(self, ());
    }

    fn visit_empty_stmt(&mut self, (): ()) {
        self.end(tag::EMPTY_STMT);
    }

    fn visit_binary(&mut self, expr: &BinaryExpr, (): ()) {
        self.hit(tag::BINARY, expr.pos);
        expr.left.accept(self, ());
        expr.right.accept(self, ());
    }

    fn visit_unary(&mut self, expr: &UnaryExpr, (): ()) {
        self.hit(tag::UNARY, expr.pos);
        expr.operand.accept(self, ());
    }

    fn visit_cast(&mut self, expr: &CastExpr, (): ()) {
        self.hit(tag::CAST, expr.pos);
        expr.ty.accept(self, ());
        expr.operand.accept(self, ());
    }

    fn visit_call_expr(&mut self, expr: &CallExpr, (): ()) {
        self.hit(tag::CALL_EXPR, expr.pos);
        expr.method.accept(self, ());
        expr.args.accept(self, ());
    }

    fn visit_ident(&mut self, ident: &Ident, (): ()) {
        self.hit(tag::IDENT, ident.pos);
    }

    fn visit_name(&mut self, name: &Name, (): ()) {
        self.hit(tag::NAME, name.pos);
        self.names.push(name.ident.name.clone());
        name.ident.accept(self, ());
        name.subscript.accept(self, ());
    }

    fn visit_int_lit(&mut self, lit: &IntLit, (): ()) {
        self.hit(tag::INT_LIT, lit.pos);
    }

    fn visit_char_lit(&mut self, lit: &CharLit, (): ()) {
        self.hit(tag::CHAR_LIT, lit.pos);
    }

    fn visit_str_lit(&mut self, lit: &StrLit, (): ()) {
        self.hit(tag::STR_LIT, lit.pos);
    }

    fn visit_true(&mut self, pos: Position, (): ()) {
        self.hit(tag::TRUE, pos);
    }

    fn visit_false(&mut self, pos: Position, (): ()) {
        self.hit(tag::FALSE, pos);
    }

    fn visit_empty_expr(&mut self, (): ()) {
        self.end(tag::EMPTY_EXPR);
    }
}

// ============================================================================
// Evaluator: folds constant integer expressions over a tiny environment
// ============================================================================

/// Variables map to `None` until they hold a value
#[derive(Default)]
struct Evaluator {
    env: BTreeMap<String, Option<i32>>,
}

impl Visitor for Evaluator {
    type Context = ();
    type Output = Option<i32>;

    fn visit_lite_program(&mut self, program: &LiteProgram, (): ()) -> Option<i32> {
        program.decls.accept(self, ());
        program.stmts.accept(self, ())
    }

    fn visit_class_program(&mut self, _program: &ClassProgram, (): ()) -> Option<i32> {
        None
    }

    fn visit_member_decls(&mut self, _members: &MemberDecls, (): ()) -> Option<i32> {
        None
    }

    fn visit_field_decls(&mut self, link: &Link<Decl>, (): ()) -> Option<i32> {
        link.head.accept(self, ());
        link.rest.accept(self, ())
    }

    fn visit_field_decls_end(&mut self, (): ()) -> Option<i32> {
        None
    }

    fn visit_method_decls(&mut self, _link: &Link<MethodDecl>, (): ()) -> Option<i32> {
        None
    }

    fn visit_method_decls_end(&mut self, (): ()) -> Option<i32> {
        None
    }

    fn visit_arg_decls(&mut self, _link: &Link<ArgDecl>, (): ()) -> Option<i32> {
        None
    }

    fn visit_arg_decls_end(&mut self, (): ()) -> Option<i32> {
        None
    }

    fn visit_stmts(&mut self, link: &Link<Stmt>, (): ()) -> Option<i32> {
        link.head.accept(self, ());
        link.rest.accept(self, ())
    }

    fn visit_stmts_end(&mut self, (): ()) -> Option<i32> {
        None
    }

    fn visit_exprs(&mut self, _link: &Link<Expr>, (): ()) -> Option<i32> {
        None
    }

    fn visit_exprs_end(&mut self, (): ()) -> Option<i32> {
        None
    }

    fn visit_names(&mut self, _link: &Link<Name>, (): ()) -> Option<i32> {
        None
    }

    fn visit_names_end(&mut self, (): ()) -> Option<i32> {
        None
    }

    fn visit_var_decl(&mut self, decl: &VarDecl, (): ()) -> Option<i32> {
        // An empty initializer evaluates to nothing; the variable stays unset
        let value = decl.init.accept(self, ());
        self.env.insert(decl.name.name.clone(), value);
        None
    }

    fn visit_const_decl(&mut self, decl: &ConstDecl, (): ()) -> Option<i32> {
        let value = decl.value.accept(self, ());
        self.env.insert(decl.name.name.clone(), value);
        None
    }

    fn visit_array_decl(&mut self, _decl: &ArrayDecl, (): ()) -> Option<i32> {
        None
    }

    fn visit_method_decl(&mut self, _decl: &MethodDecl, (): ()) -> Option<i32> {
        None
    }

    fn visit_val_arg_decl(&mut self, _arg: &ValArgDecl, (): ()) -> Option<i32> {
        None
    }

    fn visit_array_arg_decl(&mut self, _arg: &ArrayArgDecl, (): ()) -> Option<i32> {
        None
    }

    fn visit_int_type(&mut self, _pos: Position, (): ()) -> Option<i32> {
        None
    }

    fn visit_bool_type(&mut self, _pos: Position, (): ()) -> Option<i32> {
        None
    }

    fn visit_char_type(&mut self, _pos: Position, (): ()) -> Option<i32> {
        None
    }

    fn visit_void_type(&mut self, _pos: Position, (): ()) -> Option<i32> {
        None
    }

    fn visit_empty_type(&mut self, (): ()) -> Option<i32> {
        None
    }

    fn visit_assign(&mut self, stmt: &AssignStmt, (): ()) -> Option<i32> {
        let value = stmt.source.accept(self, ());
        self.env.insert(stmt.target.ident.name.clone(), value);
        value
    }

    fn visit_if(&mut self, _stmt: &IfStmt, (): ()) -> Option<i32> {
        None
    }

    fn visit_while(&mut self, _stmt: &WhileStmt, (): ()) -> Option<i32> {
        None
    }

    fn visit_read(&mut self, _stmt: &ReadStmt, (): ()) -> Option<i32> {
        None
    }

    fn visit_print(&mut self, _stmt: &PrintStmt, (): ()) -> Option<i32> {
        None
    }

    fn visit_call_stmt(&mut self, _stmt: &CallStmt, (): ()) -> Option<i32> {
        None
    }

    fn visit_return(&mut self, stmt: &ReturnStmt, (): ()) -> Option<i32> {
        stmt.value.accept(self, ())
    }

    fn visit_block(&mut self, _stmt: &BlockStmt, (): ()) -> Option<i32> {
        None
    }

    fn visit_break(&mut self, _stmt: &BreakStmt, (): ()) -> Option<i32> {
        None
    }

    fn visit_continue(&mut self, _stmt: &ContinueStmt, (): ()) -> Option<i32> {
        None
    }

    fn visit_empty_stmt(&mut self, (): ()) -> Option<i32> {
        None
    }

    fn visit_binary(&mut self, expr: &BinaryExpr, (): ()) -> Option<i32> {
        let left = expr.left.accept(self, ())?;
        let right = expr.right.accept(self, ())?;
        match expr.op {
            BinOp::Plus => left.checked_add(right),
            BinOp::Minus => left.checked_sub(right),
            BinOp::Times => left.checked_mul(right),
            BinOp::Slash => left.checked_div(right),
            _ => None,
        }
    }

    fn visit_unary(&mut self, expr: &UnaryExpr, (): ()) -> Option<i32> {
        match expr.op {
            UnaryOp::Neg => expr.operand.accept(self, ())?.checked_neg(),
            UnaryOp::Not => None,
        }
    }

    fn visit_cast(&mut self, _expr: &CastExpr, (): ()) -> Option<i32> {
        None
    }

    fn visit_call_expr(&mut self, _expr: &CallExpr, (): ()) -> Option<i32> {
        None
    }

    fn visit_ident(&mut self, _ident: &Ident, (): ()) -> Option<i32> {
        None
    }

    fn visit_name(&mut self, name: &Name, (): ()) -> Option<i32> {
        self.env.get(&name.ident.name).copied().flatten()
    }

    fn visit_int_lit(&mut self, lit: &IntLit, (): ()) -> Option<i32> {
        Some(lit.value)
    }

    fn visit_char_lit(&mut self, _lit: &CharLit, (): ()) -> Option<i32> {
        None
    }

    fn visit_str_lit(&mut self, _lit: &StrLit, (): ()) -> Option<i32> {
        None
    }

    fn visit_true(&mut self, _pos: Position, (): ()) -> Option<i32> {
        None
    }

    fn visit_false(&mut self, _pos: Position, (): ()) -> Option<i32> {
        None
    }

    fn visit_empty_expr(&mut self, (): ()) -> Option<i32> {
        None
    }
}

fn is_sentinel_tag(tag: &str) -> bool {
    tag.ends_with("_end") || tag.starts_with("empty_")
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_is_empty_per_family() {
    let p = pos(1, 1);

    assert!(Expr::Empty.is_empty());
    for expr in [
        Expr::int(1, p),
        Expr::char('a', p),
        Expr::string("s", p),
        Expr::bool(true, p),
        Expr::bool(false, p),
        Expr::ident("x", p),
        Expr::name("x", p),
        Expr::unary(UnaryOp::Neg, Expr::int(1, p), p),
        Expr::binary(Expr::int(1, p), BinOp::Minus, Expr::int(2, p), p),
        Expr::Cast(CastExpr::new(Type::Int(p), Expr::char('a', p), p)),
        Expr::Call(CallExpr::new(ident("f", 1, 1), Chain::end(), p)),
    ] {
        assert!(!expr.is_empty(), "{expr:?}");
    }

    assert!(Stmt::Empty.is_empty());
    for stmt in [
        Stmt::Return(ReturnStmt::new(Expr::Empty, p)),
        Stmt::Break(BreakStmt::new(Expr::Empty, p)),
        Stmt::Continue(ContinueStmt::new(Expr::Empty, p)),
        Stmt::Block(BlockStmt::new(Chain::end(), Chain::end(), p)),
        Stmt::Read(ReadStmt::new(Chain::end(), p)),
        Stmt::Print(PrintStmt::new(Chain::end(), p)),
    ] {
        assert!(!stmt.is_empty(), "{stmt:?}");
    }

    assert!(Type::Empty.is_empty());
    for ty in [Type::Int(p), Type::Bool(p), Type::Char(p), Type::Void(p)] {
        assert!(!ty.is_empty());
    }

    assert!(Node::is_empty(&Chain::<Decl>::end()));
    assert!(Node::is_empty(&Chain::<MethodDecl>::end()));
    assert!(Node::is_empty(&Chain::<ArgDecl>::end()));
    assert!(Node::is_empty(&Chain::<Stmt>::end()));
    assert!(Node::is_empty(&Chain::<Expr>::end()));
    assert!(Node::is_empty(&Chain::<Name>::end()));
    assert!(!Node::is_empty(&chain(vec![Expr::int(1, p)])));

    // Real nodes of families without a sentinel
    assert!(!ident("x", 1, 1).is_empty());
    assert!(!name("x", 1, 1).is_empty());
    assert!(!IntLit::new(3, p).is_empty());
}

#[test]
fn test_chain_visits_elements_in_order_then_one_end() {
    let values = chain(vec![
        Expr::name("a", pos(1, 7)),
        Expr::name("b", pos(1, 10)),
        Expr::name("c", pos(1, 13)),
    ]);
    let print = Stmt::Print(PrintStmt::new(values, pos(1, 1)));
    let recorder = Recorder::run(&print);

    assert_eq!(recorder.names, ["a", "b", "c"]);

    let tags = recorder.tags();
    let ends = tags.iter().filter(|tag| **tag == tag::EXPRS_END).count();
    assert_eq!(ends, 1);
    assert_eq!(tags.last(), Some(&tag::EXPRS_END));
    assert_eq!(tags.iter().filter(|tag| **tag == tag::EXPRS).count(), 3);
}

#[test]
fn test_read_targets_in_order() {
    let read = Stmt::Read(ReadStmt::new(
        Chain::cons(
            name("a", 1, 6),
            Chain::cons(name("b", 1, 9), Chain::End, pos(1, 9)),
            pos(1, 6),
        ),
        pos(1, 1),
    ));
    let recorder = Recorder::run(&read);
    assert_eq!(recorder.names, ["a", "b"]);
    assert_eq!(recorder.tags().last(), Some(&tag::NAMES_END));
}

#[test]
fn test_positions_real_and_sentinel() {
    for program in [testutil::sample_class_program(), testutil::sample_lite_program()] {
        let recorder = Recorder::run(&program);
        for (tag, pos) in recorder.visits {
            if is_sentinel_tag(tag) {
                assert_eq!(pos, Position::SENTINEL, "{tag}");
                assert!(pos.is_sentinel());
            } else {
                assert!(pos.line >= 1 && pos.column >= 1, "{tag} at {pos}");
            }
        }
    }

    assert_eq!(Expr::Empty.position(), Position::new(-1, -1));
    assert_eq!(Stmt::Empty.position(), Position::new(-1, -1));
    assert_eq!(Type::Empty.position(), Position::new(-1, -1));
    assert_eq!(Chain::<Stmt>::End.position(), Position::new(-1, -1));
}

#[test]
fn test_structural_equality() {
    let build = |value: i32| {
        Stmt::Assign(AssignStmt::new(
            name("x", 2, 5),
            Expr::binary(
                Expr::name("y", pos(2, 10)),
                BinOp::Plus,
                Expr::int(value, pos(2, 14)),
                pos(2, 12),
            ),
            pos(2, 5),
        ))
    };

    assert_eq!(build(1), build(1));
    assert_ne!(build(1), build(2));

    assert_eq!(testutil::sample_class_program(), testutil::sample_class_program());
    assert_eq!(Expr::Empty, Expr::default());
    assert_eq!(Stmt::Empty, Stmt::default());
}

#[test]
fn test_every_tag_has_a_handler() {
    let mut seen: BTreeSet<&'static str> = BTreeSet::new();
    for program in [testutil::sample_class_program(), testutil::sample_lite_program()] {
        seen.extend(Recorder::run(&program).tags());
    }
    let all: BTreeSet<&'static str> = tag::ALL.iter().copied().collect();
    assert_eq!(seen, all);
}

#[test]
fn test_recorded_tags_match_node_tags() {
    let program = testutil::sample_class_program();
    let recorder = Recorder::run(&program);
    assert_eq!(recorder.visits[0], (program.tag(), program.position()));
}

#[test]
fn test_if_without_else_prints_nothing_for_else() {
    let stmt = Stmt::If(IfStmt::without_else(
        Expr::ident("x", pos(1, 5)),
        Stmt::Assign(AssignStmt::new(name("x", 2, 5), Expr::int(1, pos(2, 9)), pos(2, 5))),
        pos(1, 1),
    ));

    assert_eq!(Unparser::render(&stmt), "if (x)\n    x = 1;\n");

    let recorder = Recorder::run(&stmt);
    assert_eq!(recorder.tags().last(), Some(&tag::EMPTY_STMT));
}

#[test]
fn test_uninitialized_declaration_is_not_evaluated() {
    let program = csx_ast::Program::Lite(LiteProgram::new(
        chain(vec![
            Decl::Var(VarDecl::uninitialized(ident("n", 2, 9), Type::Int(pos(2, 5)), pos(2, 5))),
            Decl::Var(VarDecl::new(
                ident("m", 3, 9),
                Type::Int(pos(3, 5)),
                Expr::binary(
                    Expr::int(2, pos(3, 13)),
                    BinOp::Plus,
                    Expr::int(3, pos(3, 17)),
                    pos(3, 15),
                ),
                pos(3, 5),
            )),
        ]),
        chain(vec![Stmt::Assign(AssignStmt::new(
            name("k", 4, 5),
            Expr::binary(
                Expr::name("m", pos(4, 9)),
                BinOp::Times,
                Expr::name("n", pos(4, 13)),
                pos(4, 11),
            ),
            pos(4, 5),
        ))]),
        pos(1, 1),
    ));

    let decl = VarDecl::uninitialized(ident("n", 2, 9), Type::Int(pos(2, 5)), pos(2, 5));
    assert!(decl.init.is_empty());
    assert_eq!(decl.init, Expr::Empty);

    let mut evaluator = Evaluator::default();
    program.accept(&mut evaluator, ());
    assert_eq!(evaluator.env.get("n"), Some(&None));
    assert_eq!(evaluator.env.get("m"), Some(&Some(5)));
    // m * n has no value because n was never initialized
    assert_eq!(evaluator.env.get("k"), Some(&None));
}
