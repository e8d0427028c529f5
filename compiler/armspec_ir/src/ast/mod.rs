//! AST node types.
//!
//! - [`ExprKind`] lives in the [`ExprArena`](crate::ExprArena)
//! - [`Stmt`] trees own their children and point at arena expressions
//! - [`Program`] bundles both and is immutable once parsing finishes

mod expr;
mod operators;
mod stmt;
mod types;

pub use expr::{Expr, ExprKind, SliceTerm};
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{ElseIf, Stmt, StmtKind, When};
pub use types::TypeExpr;

use crate::ExprArena;

/// A parsed pseudocode unit: the expression arena plus its top-level
/// statements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub arena: ExprArena,
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn new(arena: ExprArena, body: Vec<Stmt>) -> Self {
        Program { arena, body }
    }

    /// Whether the program has no statements.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Walk every statement, nested ones included, in source order.
    pub fn walk_stmts<'a>(&'a self, f: &mut impl FnMut(&'a Stmt)) {
        for stmt in &self.body {
            walk_stmt(stmt, f);
        }
    }
}

fn walk_stmt<'a>(stmt: &'a Stmt, f: &mut impl FnMut(&'a Stmt)) {
    f(stmt);
    match &stmt.kind {
        StmtKind::If {
            then_body,
            elsifs,
            else_body,
            ..
        } => {
            walk_stmt(then_body, f);
            for elsif in elsifs {
                walk_stmt(&elsif.body, f);
            }
            if let Some(body) = else_body {
                walk_stmt(body, f);
            }
        }
        StmtKind::Repeat { body, .. }
        | StmtKind::While { body, .. }
        | StmtKind::For { body, .. } => walk_stmt(body, f),
        StmtKind::Case {
            whens, otherwise, ..
        } => {
            for when in whens {
                walk_stmt(&when.body, f);
            }
            if let Some(body) = otherwise {
                walk_stmt(body, f);
            }
        }
        StmtKind::Block(stmts) => {
            for s in stmts {
                walk_stmt(s, f);
            }
        }
        StmtKind::Assign { .. }
        | StmtKind::Expr(_)
        | StmtKind::Decl(_)
        | StmtKind::Return(_)
        | StmtKind::Undefined
        | StmtKind::Unpredictable
        | StmtKind::See(_)
        | StmtKind::ImplDefined(_)
        | StmtKind::SubarchDefined(_)
        | StmtKind::Assert(_)
        | StmtKind::Enum { .. }
        | StmtKind::Error => {}
    }
}
