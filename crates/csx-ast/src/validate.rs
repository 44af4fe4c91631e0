//! Structural checks over built trees
//!
//! A tree producer promises a few things the types alone cannot enforce:
//! real nodes carry real positions, and sentinels only appear where a child
//! is genuinely optional. [`Validator`] walks a tree and collects every broken
//! promise as a [`Violation`]; it never stops early and never panics.
//!
//! The traversal context is the [`Slot`] the visited node fills. A sentinel
//! handler reports a violation only when its slot is required.

use thiserror::Error;

use crate::ast::{
    tag, ArgDecl, ArrayArgDecl, ArrayDecl, AssignStmt, BinaryExpr, BlockStmt, BreakStmt, CallExpr,
    CallStmt, CastExpr, Chain, CharLit, ClassProgram, ConstDecl, ContinueStmt, Decl, Expr, Ident,
    IfStmt, IntLit, Link, LiteProgram, MemberDecls, MethodDecl, Name, Node, Position, PrintStmt,
    ReadStmt, ReturnStmt, Stmt, StrLit, UnaryExpr, ValArgDecl, VarDecl, WhileStmt,
};
use crate::visit::Visitor;

/// The kind of contract violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViolationKind {
    /// A real node carries a position outside line >= 1, column >= 1
    #[error("invalid position {line}:{column}")]
    InvalidPosition { line: i32, column: i32 },

    /// A required expression slot holds the empty expression
    #[error("missing {slot} expression")]
    MissingExpr { slot: &'static str },

    /// A required type slot holds the empty type
    #[error("missing {slot} type")]
    MissingType { slot: &'static str },

    /// A required statement slot holds the empty statement
    #[error("missing {slot} statement")]
    MissingStmt { slot: &'static str },

    /// A loop label or jump target that is not a plain identifier
    #[error("label is not an identifier")]
    InvalidLabel,
}

/// A violation found in a tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{pos}: {kind} (in {tag})")]
pub struct Violation {
    /// The kind of violation
    pub kind: ViolationKind,
    /// Tag of the offending node, or of the node owning an empty slot
    pub tag: &'static str,
    /// Position of that node
    pub pos: Position,
}

/// A required child slot, passed down as traversal context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Human-readable slot name ("condition", "loop body", ...)
    pub name: &'static str,
    /// Tag of the owning node
    pub owner: &'static str,
    /// Position of the owning node
    pub pos: Position,
}

fn required(name: &'static str, owner: &'static str, pos: Position) -> Option<Slot> {
    Some(Slot { name, owner, pos })
}

/// Collects contract violations from a tree
#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<Violation>,
}

impl Validator {
    /// Create a new validator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a tree and return every violation, in traversal order
    #[must_use]
    pub fn check<N: Node>(node: &N) -> Vec<Violation> {
        let mut validator = Self::new();
        node.accept(&mut validator, None);
        validator.violations
    }

    fn report(&mut self, kind: ViolationKind, tag: &'static str, pos: Position) {
        self.violations.push(Violation { kind, tag, pos });
    }

    fn check_pos(&mut self, tag: &'static str, pos: Position) {
        if !pos.is_valid() {
            self.report(
                ViolationKind::InvalidPosition {
                    line: pos.line,
                    column: pos.column,
                },
                tag,
                pos,
            );
        }
    }

    /// A sequence that must hold at least one element
    fn check_nonempty<T>(
        &mut self,
        chain: &Chain<T>,
        kind: ViolationKind,
        owner: &'static str,
        pos: Position,
    ) {
        if chain.is_end() {
            self.report(kind, owner, pos);
        }
    }

    fn check_label(&mut self, label: &Expr, owner: &'static str, pos: Position) {
        if !matches!(label, Expr::Ident(_) | Expr::Empty) {
            self.report(ViolationKind::InvalidLabel, owner, pos);
        }
        label.accept(self, None);
    }
}

impl Visitor for Validator {
    type Context = Option<Slot>;
    type Output = ();

    // ==================== Roots ====================

    fn visit_lite_program(&mut self, program: &LiteProgram, _slot: Option<Slot>) {
        self.check_pos(tag::LITE_PROGRAM, program.pos);
        program.decls.accept(self, None);
        let statements = required("statement", tag::LITE_PROGRAM, program.pos);
        program.stmts.accept(self, statements);
    }

    fn visit_class_program(&mut self, program: &ClassProgram, _slot: Option<Slot>) {
        self.check_pos(tag::CLASS_PROGRAM, program.pos);
        program.name.accept(self, None);
        program.members.accept(self, None);
    }

    fn visit_member_decls(&mut self, members: &MemberDecls, _slot: Option<Slot>) {
        self.check_pos(tag::MEMBER_DECLS, members.pos);
        members.fields.accept(self, None);
        members.methods.accept(self, None);
    }

    // ==================== Chains ====================
    //
    // A chain's context is the slot each of its elements fills.

    fn visit_field_decls(&mut self, link: &Link<Decl>, slot: Option<Slot>) {
        self.check_pos(tag::FIELD_DECLS, link.pos);
        link.head.accept(self, None);
        link.rest.accept(self, slot);
    }

    fn visit_field_decls_end(&mut self, _slot: Option<Slot>) {}

    fn visit_method_decls(&mut self, link: &Link<MethodDecl>, slot: Option<Slot>) {
        self.check_pos(tag::METHOD_DECLS, link.pos);
        link.head.accept(self, None);
        link.rest.accept(self, slot);
    }

    fn visit_method_decls_end(&mut self, _slot: Option<Slot>) {}

    fn visit_arg_decls(&mut self, link: &Link<ArgDecl>, slot: Option<Slot>) {
        self.check_pos(tag::ARG_DECLS, link.pos);
        link.head.accept(self, None);
        link.rest.accept(self, slot);
    }

    fn visit_arg_decls_end(&mut self, _slot: Option<Slot>) {}

    fn visit_stmts(&mut self, link: &Link<Stmt>, slot: Option<Slot>) {
        self.check_pos(tag::STMTS, link.pos);
        let element = slot.map(|slot| Slot {
            owner: tag::STMTS,
            pos: link.pos,
            ..slot
        });
        link.head.accept(self, element);
        link.rest.accept(self, slot);
    }

    fn visit_stmts_end(&mut self, _slot: Option<Slot>) {}

    fn visit_exprs(&mut self, link: &Link<Expr>, slot: Option<Slot>) {
        self.check_pos(tag::EXPRS, link.pos);
        let element = slot.map(|slot| Slot {
            owner: tag::EXPRS,
            pos: link.pos,
            ..slot
        });
        link.head.accept(self, element);
        link.rest.accept(self, slot);
    }

    fn visit_exprs_end(&mut self, _slot: Option<Slot>) {}

    fn visit_names(&mut self, link: &Link<Name>, slot: Option<Slot>) {
        self.check_pos(tag::NAMES, link.pos);
        link.head.accept(self, None);
        link.rest.accept(self, slot);
    }

    fn visit_names_end(&mut self, _slot: Option<Slot>) {}

    // ==================== Declarations ====================

    fn visit_var_decl(&mut self, decl: &VarDecl, _slot: Option<Slot>) {
        self.check_pos(tag::VAR_DECL, decl.pos);
        decl.name.accept(self, None);
        decl.ty.accept(self, required("declared", tag::VAR_DECL, decl.pos));
        decl.init.accept(self, None);
    }

    fn visit_const_decl(&mut self, decl: &ConstDecl, _slot: Option<Slot>) {
        self.check_pos(tag::CONST_DECL, decl.pos);
        decl.name.accept(self, None);
        decl.value.accept(self, required("constant value", tag::CONST_DECL, decl.pos));
    }

    fn visit_array_decl(&mut self, decl: &ArrayDecl, _slot: Option<Slot>) {
        self.check_pos(tag::ARRAY_DECL, decl.pos);
        decl.name.accept(self, None);
        decl.elem_type.accept(self, required("element", tag::ARRAY_DECL, decl.pos));
        decl.size.accept(self, None);
    }

    fn visit_method_decl(&mut self, decl: &MethodDecl, _slot: Option<Slot>) {
        self.check_pos(tag::METHOD_DECL, decl.pos);
        decl.name.accept(self, None);
        decl.args.accept(self, None);
        decl.return_type.accept(self, None);
        decl.decls.accept(self, None);
        let missing = ViolationKind::MissingStmt { slot: "method body" };
        self.check_nonempty(&decl.body, missing, tag::METHOD_DECL, decl.pos);
        decl.body.accept(self, required("statement", tag::METHOD_DECL, decl.pos));
    }

    fn visit_val_arg_decl(&mut self, arg: &ValArgDecl, _slot: Option<Slot>) {
        self.check_pos(tag::VAL_ARG_DECL, arg.pos);
        arg.name.accept(self, None);
        arg.ty.accept(self, required("argument", tag::VAL_ARG_DECL, arg.pos));
    }

    fn visit_array_arg_decl(&mut self, arg: &ArrayArgDecl, _slot: Option<Slot>) {
        self.check_pos(tag::ARRAY_ARG_DECL, arg.pos);
        arg.name.accept(self, None);
        arg.elem_type.accept(self, required("element", tag::ARRAY_ARG_DECL, arg.pos));
    }

    // ==================== Types ====================

    fn visit_int_type(&mut self, pos: Position, _slot: Option<Slot>) {
        self.check_pos(tag::INT_TYPE, pos);
    }

    fn visit_bool_type(&mut self, pos: Position, _slot: Option<Slot>) {
        self.check_pos(tag::BOOL_TYPE, pos);
    }

    fn visit_char_type(&mut self, pos: Position, _slot: Option<Slot>) {
        self.check_pos(tag::CHAR_TYPE, pos);
    }

    fn visit_void_type(&mut self, pos: Position, _slot: Option<Slot>) {
        self.check_pos(tag::VOID_TYPE, pos);
    }

    fn visit_empty_type(&mut self, slot: Option<Slot>) {
        if let Some(slot) = slot {
            self.report(ViolationKind::MissingType { slot: slot.name }, slot.owner, slot.pos);
        }
    }

    // ==================== Statements ====================

    fn visit_assign(&mut self, stmt: &AssignStmt, _slot: Option<Slot>) {
        self.check_pos(tag::ASSIGN, stmt.pos);
        stmt.target.accept(self, None);
        stmt.source.accept(self, required("assigned", tag::ASSIGN, stmt.pos));
    }

    fn visit_if(&mut self, stmt: &IfStmt, _slot: Option<Slot>) {
        self.check_pos(tag::IF, stmt.pos);
        stmt.condition.accept(self, required("condition", tag::IF, stmt.pos));
        stmt.then_part.accept(self, required("then", tag::IF, stmt.pos));
        stmt.else_part.accept(self, None);
    }

    fn visit_while(&mut self, stmt: &WhileStmt, _slot: Option<Slot>) {
        self.check_pos(tag::WHILE, stmt.pos);
        self.check_label(&stmt.label, tag::WHILE, stmt.pos);
        stmt.condition.accept(self, required("condition", tag::WHILE, stmt.pos));
        stmt.body.accept(self, required("loop body", tag::WHILE, stmt.pos));
    }

    fn visit_read(&mut self, stmt: &ReadStmt, _slot: Option<Slot>) {
        self.check_pos(tag::READ, stmt.pos);
        let missing = ViolationKind::MissingExpr { slot: "read target" };
        self.check_nonempty(&stmt.targets, missing, tag::READ, stmt.pos);
        stmt.targets.accept(self, None);
    }

    fn visit_print(&mut self, stmt: &PrintStmt, _slot: Option<Slot>) {
        self.check_pos(tag::PRINT, stmt.pos);
        let missing = ViolationKind::MissingExpr { slot: "print value" };
        self.check_nonempty(&stmt.values, missing, tag::PRINT, stmt.pos);
        stmt.values.accept(self, required("print value", tag::PRINT, stmt.pos));
    }

    fn visit_call_stmt(&mut self, stmt: &CallStmt, _slot: Option<Slot>) {
        self.check_pos(tag::CALL_STMT, stmt.pos);
        stmt.method.accept(self, None);
        stmt.args.accept(self, required("argument", tag::CALL_STMT, stmt.pos));
    }

    fn visit_return(&mut self, stmt: &ReturnStmt, _slot: Option<Slot>) {
        self.check_pos(tag::RETURN, stmt.pos);
        stmt.value.accept(self, None);
    }

    fn visit_block(&mut self, stmt: &BlockStmt, _slot: Option<Slot>) {
        self.check_pos(tag::BLOCK, stmt.pos);
        stmt.decls.accept(self, None);
        stmt.stmts.accept(self, required("statement", tag::BLOCK, stmt.pos));
    }

    fn visit_break(&mut self, stmt: &BreakStmt, _slot: Option<Slot>) {
        self.check_pos(tag::BREAK, stmt.pos);
        self.check_label(&stmt.label, tag::BREAK, stmt.pos);
    }

    fn visit_continue(&mut self, stmt: &ContinueStmt, _slot: Option<Slot>) {
        self.check_pos(tag::CONTINUE, stmt.pos);
        self.check_label(&stmt.label, tag::CONTINUE, stmt.pos);
    }

    fn visit_empty_stmt(&mut self, slot: Option<Slot>) {
        if let Some(slot) = slot {
            self.report(ViolationKind::MissingStmt { slot: slot.name }, slot.owner, slot.pos);
        }
    }

    // ==================== Expressions ====================

    fn visit_binary(&mut self, expr: &BinaryExpr, _slot: Option<Slot>) {
        self.check_pos(tag::BINARY, expr.pos);
        expr.left.accept(self, required("operand", tag::BINARY, expr.pos));
        expr.right.accept(self, required("operand", tag::BINARY, expr.pos));
    }

    fn visit_unary(&mut self, expr: &UnaryExpr, _slot: Option<Slot>) {
        self.check_pos(tag::UNARY, expr.pos);
        expr.operand.accept(self, required("operand", tag::UNARY, expr.pos));
    }

    fn visit_cast(&mut self, expr: &CastExpr, _slot: Option<Slot>) {
        self.check_pos(tag::CAST, expr.pos);
        expr.ty.accept(self, required("cast", tag::CAST, expr.pos));
        expr.operand.accept(self, required("operand", tag::CAST, expr.pos));
    }

    fn visit_call_expr(&mut self, expr: &CallExpr, _slot: Option<Slot>) {
        self.check_pos(tag::CALL_EXPR, expr.pos);
        expr.method.accept(self, None);
        expr.args.accept(self, required("argument", tag::CALL_EXPR, expr.pos));
    }

    fn visit_ident(&mut self, ident: &Ident, _slot: Option<Slot>) {
        self.check_pos(tag::IDENT, ident.pos);
    }

    fn visit_name(&mut self, name: &Name, _slot: Option<Slot>) {
        self.check_pos(tag::NAME, name.pos);
        name.ident.accept(self, None);
        name.subscript.accept(self, None);
    }

    fn visit_int_lit(&mut self, lit: &IntLit, _slot: Option<Slot>) {
        self.check_pos(tag::INT_LIT, lit.pos);
    }

    fn visit_char_lit(&mut self, lit: &CharLit, _slot: Option<Slot>) {
        self.check_pos(tag::CHAR_LIT, lit.pos);
    }

    fn visit_str_lit(&mut self, lit: &StrLit, _slot: Option<Slot>) {
        self.check_pos(tag::STR_LIT, lit.pos);
    }

    fn visit_true(&mut self, pos: Position, _slot: Option<Slot>) {
        self.check_pos(tag::TRUE, pos);
    }

    fn visit_false(&mut self, pos: Position, _slot: Option<Slot>) {
        self.check_pos(tag::FALSE, pos);
    }

    fn visit_empty_expr(&mut self, slot: Option<Slot>) {
        if let Some(slot) = slot {
            self.report(ViolationKind::MissingExpr { slot: slot.name }, slot.owner, slot.pos);
        }
    }
}
