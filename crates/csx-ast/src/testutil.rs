//! Test utilities for CSX trees
//!
//! Hand-built trees standing in for parser output. [`sample_class_program`]
//! contains every tag of every family except the lite root, sentinels
//! included; [`sample_lite_program`] covers the lite root.

use crate::ast::{
    ArgDecl, ArrayArgDecl, ArrayDecl, AssignStmt, BinOp, BlockStmt, BreakStmt, CallExpr, CallStmt,
    CastExpr, Chain, ClassProgram, ConstDecl, ContinueStmt, Decl, Expr, Ident, IfStmt, IntLit,
    LiteProgram, MemberDecls, MethodDecl, Name, Node, Position, PrintStmt, Program, ReadStmt,
    ReturnStmt, Stmt, Type, UnaryOp, ValArgDecl, VarDecl, WhileStmt,
};

/// Shorthand for a source position
#[must_use]
pub fn pos(line: i32, column: i32) -> Position {
    Position::new(line, column)
}

/// Identifier at the given position
#[must_use]
pub fn ident(name: &str, line: i32, column: i32) -> Ident {
    Ident::new(name, pos(line, column))
}

/// Unsubscripted name at the given position
#[must_use]
pub fn name(id: &str, line: i32, column: i32) -> Name {
    Name::plain(ident(id, line, column), pos(line, column))
}

/// Subscripted name `id[subscript]`
#[must_use]
pub fn indexed(id: &str, subscript: Expr, line: i32, column: i32) -> Name {
    Name::new(ident(id, line, column), subscript, pos(line, column))
}

/// Chain of nodes, each link stamped with its element's position
#[must_use]
pub fn chain<T: Node>(items: Vec<T>) -> Chain<T> {
    Chain::from_links(items.into_iter().map(|item| {
        let pos = item.position();
        (item, pos)
    }))
}

/// The class program used across tests and benches:
///
/// ```text
/// class Sample {
///     int count = 0;
///     const limit = 10;
///     char buf[80];
///     bool done;
///
///     void fill(char src[], int n) {
///         int i = 0;
///         outer: while ((i < n) && !done)
///         {
///             buf[i] = src[i];
///             i = (i + 1);
///             if (i == limit)
///                 break outer;
///             else
///                 continue;
///         }
///     }
///
///     report(int n) {
///         read(count, buf[0]);
///         print("count", 'c', count, (int) 'A', -n, true, false, twice(n));
///         twice(n);
///         return;
///     }
///
///     int twice(int n) {
///         {
///             int k;
///             k = n;
///         }
///         if (n < 0)
///             return 0;
///         return (n * 2);
///     }
/// }
/// ```
#[must_use]
pub fn sample_class_program() -> Program {
    let fields = chain(vec![
        Decl::Var(VarDecl::new(
            ident("count", 2, 9),
            Type::Int(pos(2, 5)),
            Expr::int(0, pos(2, 17)),
            pos(2, 5),
        )),
        Decl::Const(ConstDecl::new(
            ident("limit", 3, 11),
            Expr::int(10, pos(3, 19)),
            pos(3, 5),
        )),
        Decl::Array(ArrayDecl::new(
            ident("buf", 4, 10),
            Type::Char(pos(4, 5)),
            IntLit::new(80, pos(4, 14)),
            pos(4, 5),
        )),
        Decl::Var(VarDecl::uninitialized(
            ident("done", 5, 10),
            Type::Bool(pos(5, 5)),
            pos(5, 5),
        )),
    ]);

    let methods = chain(vec![fill_method(), report_method(), twice_method()]);

    Program::Class(ClassProgram::new(
        ident("Sample", 1, 7),
        MemberDecls::new(fields, methods, pos(2, 5)),
        pos(1, 1),
    ))
}

fn fill_method() -> MethodDecl {
    let args = chain(vec![
        ArgDecl::Array(ArrayArgDecl::new(
            ident("src", 7, 20),
            Type::Char(pos(7, 15)),
            pos(7, 15),
        )),
        ArgDecl::Val(ValArgDecl::new(
            ident("n", 7, 31),
            Type::Int(pos(7, 27)),
            pos(7, 27),
        )),
    ]);
    let decls = chain(vec![Decl::Var(VarDecl::new(
        ident("i", 8, 13),
        Type::Int(pos(8, 9)),
        Expr::int(0, pos(8, 17)),
        pos(8, 9),
    ))]);

    let condition = Expr::binary(
        Expr::binary(
            Expr::Name(name("i", 9, 25)),
            BinOp::Lt,
            Expr::Name(name("n", 9, 29)),
            pos(9, 27),
        ),
        BinOp::And,
        Expr::unary(UnaryOp::Not, Expr::Name(name("done", 9, 36)), pos(9, 35)),
        pos(9, 32),
    );
    let loop_body = Stmt::Block(BlockStmt::new(
        Chain::end(),
        chain(vec![
            Stmt::Assign(AssignStmt::new(
                indexed("buf", Expr::Name(name("i", 11, 17)), 11, 13),
                Expr::Name(indexed("src", Expr::Name(name("i", 11, 26)), 11, 22)),
                pos(11, 13),
            )),
            Stmt::Assign(AssignStmt::new(
                name("i", 12, 13),
                Expr::binary(
                    Expr::Name(name("i", 12, 18)),
                    BinOp::Plus,
                    Expr::int(1, pos(12, 22)),
                    pos(12, 20),
                ),
                pos(12, 13),
            )),
            Stmt::If(IfStmt::new(
                Expr::binary(
                    Expr::Name(name("i", 13, 18)),
                    BinOp::Eq,
                    Expr::Name(name("limit", 13, 23)),
                    pos(13, 20),
                ),
                Stmt::Break(BreakStmt::new(Expr::ident("outer", pos(14, 23)), pos(14, 17))),
                Stmt::Continue(ContinueStmt::new(Expr::Empty, pos(16, 17))),
                pos(13, 13),
            )),
        ]),
        pos(10, 9),
    ));
    let body = chain(vec![Stmt::While(WhileStmt::new(
        Expr::ident("outer", pos(9, 9)),
        condition,
        loop_body,
        pos(9, 9),
    ))]);

    MethodDecl::new(
        ident("fill", 7, 10),
        args,
        Type::Void(pos(7, 5)),
        decls,
        body,
        pos(7, 5),
    )
}

fn twice_call(line: i32, column: i32) -> CallExpr {
    CallExpr::new(
        ident("twice", line, column),
        chain(vec![Expr::Name(name("n", line, column + 6))]),
        pos(line, column),
    )
}

fn report_method() -> MethodDecl {
    let args = chain(vec![ArgDecl::Val(ValArgDecl::new(
        ident("n", 20, 16),
        Type::Int(pos(20, 12)),
        pos(20, 12),
    ))]);

    let read = Stmt::Read(ReadStmt::new(
        chain(vec![
            name("count", 21, 14),
            indexed("buf", Expr::int(0, pos(21, 25)), 21, 21),
        ]),
        pos(21, 9),
    ));
    let print = Stmt::Print(PrintStmt::new(
        chain(vec![
            Expr::string("count", pos(22, 15)),
            Expr::char('c', pos(22, 24)),
            Expr::Name(name("count", 22, 29)),
            Expr::Cast(CastExpr::new(
                Type::Int(pos(22, 37)),
                Expr::char('A', pos(22, 42)),
                pos(22, 36),
            )),
            Expr::unary(UnaryOp::Neg, Expr::Name(name("n", 22, 48)), pos(22, 47)),
            Expr::bool(true, pos(22, 51)),
            Expr::bool(false, pos(22, 57)),
            Expr::Call(twice_call(22, 64)),
        ]),
        pos(22, 9),
    ));
    let call = {
        let call = twice_call(23, 9);
        Stmt::Call(CallStmt::new(call.method, call.args, call.pos))
    };

    MethodDecl::new(
        ident("report", 20, 5),
        args,
        Type::Empty,
        Chain::end(),
        chain(vec![
            read,
            print,
            call,
            Stmt::Return(ReturnStmt::new(Expr::Empty, pos(24, 9))),
        ]),
        pos(20, 5),
    )
}

fn twice_method() -> MethodDecl {
    let args = chain(vec![ArgDecl::Val(ValArgDecl::new(
        ident("n", 27, 19),
        Type::Int(pos(27, 15)),
        pos(27, 15),
    ))]);

    let block = Stmt::Block(BlockStmt::new(
        chain(vec![Decl::Var(VarDecl::uninitialized(
            ident("k", 29, 17),
            Type::Int(pos(29, 13)),
            pos(29, 13),
        ))]),
        chain(vec![Stmt::Assign(AssignStmt::new(
            name("k", 30, 13),
            Expr::Name(name("n", 30, 17)),
            pos(30, 13),
        ))]),
        pos(28, 9),
    ));
    let guard = Stmt::If(IfStmt::without_else(
        Expr::binary(
            Expr::Name(name("n", 32, 14)),
            BinOp::Lt,
            Expr::int(0, pos(32, 18)),
            pos(32, 16),
        ),
        Stmt::Return(ReturnStmt::new(Expr::int(0, pos(33, 20)), pos(33, 13))),
        pos(32, 9),
    ));
    let result = Stmt::Return(ReturnStmt::new(
        Expr::binary(
            Expr::Name(name("n", 34, 17)),
            BinOp::Times,
            Expr::int(2, pos(34, 21)),
            pos(34, 19),
        ),
        pos(34, 9),
    ));

    MethodDecl::new(
        ident("twice", 27, 9),
        args,
        Type::Int(pos(27, 5)),
        Chain::end(),
        chain(vec![block, guard, result]),
        pos(27, 5),
    )
}

/// A small lite program:
///
/// ```text
/// {
///     int x;
///     int y = 2;
///     read(x);
///     y = (x + y);
///     print(y);
/// }
/// ```
#[must_use]
pub fn sample_lite_program() -> Program {
    let decls = chain(vec![
        Decl::Var(VarDecl::uninitialized(ident("x", 2, 9), Type::Int(pos(2, 5)), pos(2, 5))),
        Decl::Var(VarDecl::new(
            ident("y", 3, 9),
            Type::Int(pos(3, 5)),
            Expr::int(2, pos(3, 13)),
            pos(3, 5),
        )),
    ]);
    let stmts = chain(vec![
        Stmt::Read(ReadStmt::new(chain(vec![name("x", 4, 10)]), pos(4, 5))),
        Stmt::Assign(AssignStmt::new(
            name("y", 5, 5),
            Expr::binary(
                Expr::Name(name("x", 5, 10)),
                BinOp::Plus,
                Expr::Name(name("y", 5, 14)),
                pos(5, 12),
            ),
            pos(5, 5),
        )),
        Stmt::Print(PrintStmt::new(chain(vec![Expr::Name(name("y", 6, 11))]), pos(6, 5))),
    ]);
    Program::Lite(LiteProgram::new(decls, stmts, pos(1, 1)))
}

/// A lite program with `statements` assignments, used to stress traversal
#[must_use]
pub fn generated_lite_program(statements: usize) -> Program {
    let mut stmts = Chain::end();
    for index in (0..statements).rev() {
        let line = i32::try_from(index + 3).unwrap_or(i32::MAX);
        let value = i32::try_from(index).unwrap_or(i32::MAX);
        let stmt = Stmt::Assign(AssignStmt::new(
            name("total", line, 5),
            Expr::binary(
                Expr::Name(name("total", line, 13)),
                BinOp::Plus,
                Expr::binary(
                    Expr::int(value, pos(line, 22)),
                    BinOp::Times,
                    Expr::Name(name("step", line, 30)),
                    pos(line, 28),
                ),
                pos(line, 19),
            ),
            pos(line, 5),
        ));
        stmts = Chain::cons(stmt, stmts, pos(line, 5));
    }
    let decls = chain(vec![
        Decl::Var(VarDecl::new(
            ident("total", 2, 9),
            Type::Int(pos(2, 5)),
            Expr::int(0, pos(2, 17)),
            pos(2, 5),
        )),
        Decl::Const(ConstDecl::new(ident("step", 2, 26), Expr::int(3, pos(2, 33)), pos(2, 20))),
    ]);
    Program::Lite(LiteProgram::new(decls, stmts, pos(1, 1)))
}
