//! Source printer for CSX syntax trees
//!
//! [`Unparser`] is a [`Visitor`] that renders a tree back to CSX source with
//! consistent style:
//! - 4-space indentation (configurable)
//! - one statement or declaration per line
//! - fully parenthesized binary operations
//!
//! The traversal context is the indentation depth. Sentinel handlers write
//! nothing, so absent children simply disappear from the output.

use std::fmt::{self, Display, Formatter};

use crate::ast::{
    ArgDecl, ArrayArgDecl, ArrayDecl, AssignStmt, BinOp, BinaryExpr, BlockStmt, BreakStmt,
    CallExpr, CallStmt, CastExpr, CharLit, ClassProgram, ConstDecl, ContinueStmt, Decl, Expr,
    Ident, IfStmt, IntLit, Link, LiteProgram, MemberDecls, MethodDecl, Name, Node, Position,
    PrintStmt, Program, ReadStmt, ReturnStmt, Stmt, StrLit, Type, UnaryExpr, UnaryOp, ValArgDecl,
    VarDecl, WhileStmt,
};
use crate::visit::Visitor;

/// Printer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnparseConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,
    /// Whether program output ends with a newline
    pub trailing_newline: bool,
}

impl Default for UnparseConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            trailing_newline: true,
        }
    }
}

/// The source printer
#[derive(Debug, Default)]
pub struct Unparser {
    /// Output buffer
    output: String,
    /// Configuration
    config: UnparseConfig,
}

impl Unparser {
    /// Create a new printer with default config
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(UnparseConfig::default())
    }

    /// Create a new printer with custom config
    #[must_use]
    pub fn with_config(config: UnparseConfig) -> Self {
        Self {
            output: String::new(),
            config,
        }
    }

    /// Print a whole program with the default config
    #[must_use]
    pub fn unparse_program(program: &Program) -> String {
        Self::unparse_program_with(program, UnparseConfig::default())
    }

    /// Print a whole program with a custom config
    #[must_use]
    pub fn unparse_program_with(program: &Program, config: UnparseConfig) -> String {
        let mut unparser = Self::with_config(config);
        program.accept(&mut unparser, 0);
        let mut output = unparser.finish();
        if config.trailing_newline {
            if !output.ends_with('\n') {
                output.push('\n');
            }
        } else {
            output.truncate(output.trim_end_matches('\n').len());
        }
        output
    }

    /// Print any node at depth zero
    #[must_use]
    pub fn render<N: Node>(node: &N) -> String {
        let mut unparser = Self::new();
        node.accept(&mut unparser, 0);
        unparser.finish()
    }

    /// Consume the printer and return what it has written
    #[must_use]
    pub fn finish(self) -> String {
        self.output
    }

    // ==================== Output Helpers ====================

    fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn writeln(&mut self, s: &str) {
        self.output.push_str(s);
        self.output.push('\n');
    }

    fn write_indent(&mut self, depth: usize) {
        let width = depth * self.config.indent_width;
        self.output.push_str(&" ".repeat(width));
    }

    /// Loop bodies and branches: blocks sit at the statement's own depth,
    /// anything else is indented one level
    fn write_body(&mut self, body: &Stmt, depth: usize) {
        if matches!(body, Stmt::Block(_)) {
            body.accept(self, depth);
        } else {
            body.accept(self, depth + 1);
        }
    }

    /// Binary conditions already carry their parentheses
    fn write_condition(&mut self, condition: &Expr, depth: usize) {
        if matches!(condition, Expr::Binary(_)) {
            condition.accept(self, depth);
        } else {
            self.write("(");
            condition.accept(self, depth);
            self.write(")");
        }
    }

    /// Then-branch of an `if` that has an else; braced when an inner `if`
    /// would otherwise capture that else
    fn write_then(&mut self, then_part: &Stmt, depth: usize) {
        if ends_in_open_if(then_part) {
            self.write_indent(depth);
            self.writeln("{");
            then_part.accept(self, depth + 1);
            self.write_indent(depth);
            self.writeln("}");
        } else {
            self.write_body(then_part, depth);
        }
    }

    fn write_jump(&mut self, keyword: &str, label: &Expr, depth: usize) {
        self.write_indent(depth);
        self.write(keyword);
        if !label.is_empty() {
            self.write(" ");
        }
        label.accept(self, depth);
        self.writeln(";");
    }

    /// Comma-separated chain elements
    fn write_item<T: Node>(&mut self, head: &T, more: bool, depth: usize) {
        head.accept(self, depth);
        if more {
            self.write(", ");
        }
    }

    fn write_escaped(&mut self, c: char, quote: char) {
        match c {
            '\n' => self.write("\\n"),
            '\t' => self.write("\\t"),
            '\\' => self.write("\\\\"),
            '\r' => self.write("\\r"),
            '\0' => self.write("\\0"),
            c if c == quote => {
                self.output.push('\\');
                self.output.push(c);
            }
            c if c.is_control() => {
                self.write(&format!("\\u{{{:04x}}}", u32::from(c)));
            }
            c => self.output.push(c),
        }
    }
}

/// Whether `stmt` ends in an `if` with no else of its own
fn ends_in_open_if(stmt: &Stmt) -> bool {
    match stmt {
        Stmt::If(inner) if inner.else_part.is_empty() => true,
        Stmt::If(inner) => ends_in_open_if(&inner.else_part),
        Stmt::While(inner) => ends_in_open_if(&inner.body),
        _ => false,
    }
}

/// Whether printing `operand` right after a minus would start with another minus
fn starts_with_minus(operand: &Expr) -> bool {
    match operand {
        Expr::Unary(inner) => inner.op == UnaryOp::Neg,
        Expr::IntLit(lit) => lit.value < 0,
        _ => false,
    }
}

impl Visitor for Unparser {
    type Context = usize;
    type Output = ();

    // ==================== Roots ====================

    fn visit_lite_program(&mut self, program: &LiteProgram, depth: usize) {
        self.write_indent(depth);
        self.writeln("{");
        program.decls.accept(self, depth + 1);
        program.stmts.accept(self, depth + 1);
        self.write_indent(depth);
        self.writeln("}");
    }

    fn visit_class_program(&mut self, program: &ClassProgram, depth: usize) {
        self.write_indent(depth);
        self.write("class ");
        program.name.accept(self, depth);
        self.writeln(" {");
        program.members.accept(self, depth + 1);
        self.write_indent(depth);
        self.writeln("}");
    }

    fn visit_member_decls(&mut self, members: &MemberDecls, depth: usize) {
        members.fields.accept(self, depth);
        if !members.fields.is_end() && !members.methods.is_end() {
            self.writeln("");
        }
        members.methods.accept(self, depth);
    }

    // ==================== Chains ====================

    fn visit_field_decls(&mut self, link: &Link<Decl>, depth: usize) {
        link.head.accept(self, depth);
        link.rest.accept(self, depth);
    }

    fn visit_field_decls_end(&mut self, _depth: usize) {}

    fn visit_method_decls(&mut self, link: &Link<MethodDecl>, depth: usize) {
        link.head.accept(self, depth);
        if !link.rest.is_end() {
            self.writeln("");
        }
        link.rest.accept(self, depth);
    }

    fn visit_method_decls_end(&mut self, _depth: usize) {}

    fn visit_arg_decls(&mut self, link: &Link<ArgDecl>, depth: usize) {
        self.write_item(&link.head, !link.rest.is_end(), depth);
        link.rest.accept(self, depth);
    }

    fn visit_arg_decls_end(&mut self, _depth: usize) {}

    fn visit_stmts(&mut self, link: &Link<Stmt>, depth: usize) {
        link.head.accept(self, depth);
        link.rest.accept(self, depth);
    }

    fn visit_stmts_end(&mut self, _depth: usize) {}

    fn visit_exprs(&mut self, link: &Link<Expr>, depth: usize) {
        self.write_item(&link.head, !link.rest.is_end(), depth);
        link.rest.accept(self, depth);
    }

    fn visit_exprs_end(&mut self, _depth: usize) {}

    fn visit_names(&mut self, link: &Link<Name>, depth: usize) {
        self.write_item(&link.head, !link.rest.is_end(), depth);
        link.rest.accept(self, depth);
    }

    fn visit_names_end(&mut self, _depth: usize) {}

    // ==================== Declarations ====================

    fn visit_var_decl(&mut self, decl: &VarDecl, depth: usize) {
        self.write_indent(depth);
        decl.ty.accept(self, depth);
        self.write(" ");
        decl.name.accept(self, depth);
        if !decl.init.is_empty() {
            self.write(" = ");
            decl.init.accept(self, depth);
        }
        self.writeln(";");
    }

    fn visit_const_decl(&mut self, decl: &ConstDecl, depth: usize) {
        self.write_indent(depth);
        self.write("const ");
        decl.name.accept(self, depth);
        self.write(" = ");
        decl.value.accept(self, depth);
        self.writeln(";");
    }

    fn visit_array_decl(&mut self, decl: &ArrayDecl, depth: usize) {
        self.write_indent(depth);
        decl.elem_type.accept(self, depth);
        self.write(" ");
        decl.name.accept(self, depth);
        self.write("[");
        decl.size.accept(self, depth);
        self.writeln("];");
    }

    fn visit_method_decl(&mut self, decl: &MethodDecl, depth: usize) {
        self.write_indent(depth);
        if !decl.return_type.is_empty() {
            decl.return_type.accept(self, depth);
            self.write(" ");
        }
        decl.name.accept(self, depth);
        self.write("(");
        decl.args.accept(self, depth);
        self.writeln(") {");
        decl.decls.accept(self, depth + 1);
        decl.body.accept(self, depth + 1);
        self.write_indent(depth);
        self.writeln("}");
    }

    fn visit_val_arg_decl(&mut self, arg: &ValArgDecl, depth: usize) {
        arg.ty.accept(self, depth);
        self.write(" ");
        arg.name.accept(self, depth);
    }

    fn visit_array_arg_decl(&mut self, arg: &ArrayArgDecl, depth: usize) {
        arg.elem_type.accept(self, depth);
        self.write(" ");
        arg.name.accept(self, depth);
        self.write("[]");
    }

    // ==================== Types ====================

    fn visit_int_type(&mut self, _pos: Position, _depth: usize) {
        self.write("int");
    }

    fn visit_bool_type(&mut self, _pos: Position, _depth: usize) {
        self.write("bool");
    }

    fn visit_char_type(&mut self, _pos: Position, _depth: usize) {
        self.write("char");
    }

    fn visit_void_type(&mut self, _pos: Position, _depth: usize) {
        self.write("void");
    }

    fn visit_empty_type(&mut self, _depth: usize) {}

    // ==================== Statements ====================

    fn visit_assign(&mut self, stmt: &AssignStmt, depth: usize) {
        self.write_indent(depth);
        stmt.target.accept(self, depth);
        self.write(" = ");
        stmt.source.accept(self, depth);
        self.writeln(";");
    }

    fn visit_if(&mut self, stmt: &IfStmt, depth: usize) {
        self.write_indent(depth);
        self.write("if ");
        self.write_condition(&stmt.condition, depth);
        self.writeln("");
        if stmt.else_part.is_empty() {
            self.write_body(&stmt.then_part, depth);
            stmt.else_part.accept(self, depth);
        } else {
            self.write_then(&stmt.then_part, depth);
            self.write_indent(depth);
            self.writeln("else");
            self.write_body(&stmt.else_part, depth);
        }
    }

    fn visit_while(&mut self, stmt: &WhileStmt, depth: usize) {
        self.write_indent(depth);
        if !stmt.label.is_empty() {
            stmt.label.accept(self, depth);
            self.write(": ");
        }
        self.write("while ");
        self.write_condition(&stmt.condition, depth);
        self.writeln("");
        self.write_body(&stmt.body, depth);
    }

    fn visit_read(&mut self, stmt: &ReadStmt, depth: usize) {
        self.write_indent(depth);
        self.write("read(");
        stmt.targets.accept(self, depth);
        self.writeln(");");
    }

    fn visit_print(&mut self, stmt: &PrintStmt, depth: usize) {
        self.write_indent(depth);
        self.write("print(");
        stmt.values.accept(self, depth);
        self.writeln(");");
    }

    fn visit_call_stmt(&mut self, stmt: &CallStmt, depth: usize) {
        self.write_indent(depth);
        stmt.method.accept(self, depth);
        self.write("(");
        stmt.args.accept(self, depth);
        self.writeln(");");
    }

    fn visit_return(&mut self, stmt: &ReturnStmt, depth: usize) {
        self.write_jump("return", &stmt.value, depth);
    }

    fn visit_block(&mut self, stmt: &BlockStmt, depth: usize) {
        self.write_indent(depth);
        self.writeln("{");
        stmt.decls.accept(self, depth + 1);
        stmt.stmts.accept(self, depth + 1);
        self.write_indent(depth);
        self.writeln("}");
    }

    fn visit_break(&mut self, stmt: &BreakStmt, depth: usize) {
        self.write_jump("break", &stmt.label, depth);
    }

    fn visit_continue(&mut self, stmt: &ContinueStmt, depth: usize) {
        self.write_jump("continue", &stmt.label, depth);
    }

    fn visit_empty_stmt(&mut self, _depth: usize) {}

    // ==================== Expressions ====================

    fn visit_binary(&mut self, expr: &BinaryExpr, depth: usize) {
        self.write("(");
        expr.left.accept(self, depth);
        self.write(" ");
        self.write(expr.op.as_str());
        self.write(" ");
        expr.right.accept(self, depth);
        self.write(")");
    }

    fn visit_unary(&mut self, expr: &UnaryExpr, depth: usize) {
        self.write(expr.op.as_str());
        if expr.op == UnaryOp::Neg && starts_with_minus(&expr.operand) {
            self.write("(");
            expr.operand.accept(self, depth);
            self.write(")");
        } else {
            expr.operand.accept(self, depth);
        }
    }

    fn visit_cast(&mut self, expr: &CastExpr, depth: usize) {
        self.write("(");
        expr.ty.accept(self, depth);
        self.write(") ");
        expr.operand.accept(self, depth);
    }

    fn visit_call_expr(&mut self, expr: &CallExpr, depth: usize) {
        expr.method.accept(self, depth);
        self.write("(");
        expr.args.accept(self, depth);
        self.write(")");
    }

    fn visit_ident(&mut self, ident: &Ident, _depth: usize) {
        self.write(&ident.name);
    }

    fn visit_name(&mut self, name: &Name, depth: usize) {
        name.ident.accept(self, depth);
        if name.is_indexed() {
            self.write("[");
            name.subscript.accept(self, depth);
            self.write("]");
        }
    }

    fn visit_int_lit(&mut self, lit: &IntLit, _depth: usize) {
        self.write(&lit.value.to_string());
    }

    fn visit_char_lit(&mut self, lit: &CharLit, _depth: usize) {
        self.output.push('\'');
        self.write_escaped(lit.value, '\'');
        self.output.push('\'');
    }

    fn visit_str_lit(&mut self, lit: &StrLit, _depth: usize) {
        self.output.push('"');
        for c in lit.value.chars() {
            self.write_escaped(c, '"');
        }
        self.output.push('"');
    }

    fn visit_true(&mut self, _pos: Position, _depth: usize) {
        self.write("true");
    }

    fn visit_false(&mut self, _pos: Position, _depth: usize) {
        self.write("false");
    }

    fn visit_empty_expr(&mut self, _depth: usize) {}
}

// ============================================================================
// Display
// ============================================================================

fn write_rendered<N: Node>(f: &mut Formatter<'_>, node: &N) -> fmt::Result {
    f.write_str(Unparser::render(node).trim_end_matches('\n'))
}

impl Display for BinOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&Unparser::unparse_program(self))
    }
}

impl Display for Decl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_rendered(f, self)
    }
}

impl Display for MethodDecl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_rendered(f, self)
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_rendered(f, self)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_rendered(f, self)
    }
}
