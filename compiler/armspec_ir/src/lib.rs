//! armspec IR - Intermediate Representation Types
//!
//! This crate contains the core data structures shared by every phase of the
//! ARM pseudocode interpreter:
//! - Spans for source locations
//! - Tokens and `TokenList` for lexer output
//! - AST nodes (`Expr`, `Stmt`, `TypeExpr`)
//! - Arena allocation for expressions
//!
//! # Design Philosophy
//!
//! - **Flatten expressions**: no `Box<Expr>`, expressions live in an
//!   [`ExprArena`] and are referenced by [`ExprId`].
//! - **Statements own their children**: statement trees are shallow and are
//!   walked once per evaluation, so they stay an ordinary owned tree.
//! - **Immutable after parse**: a [`Program`] is built once and then shared
//!   read-only across any number of evaluations.

mod arena;
pub mod ast;
mod expr_id;
mod span;
mod token;

pub use arena::ExprArena;
pub use ast::{
    BinaryOp, ElseIf, Expr, ExprKind, Program, SliceTerm, Stmt, StmtKind, TypeExpr, UnaryOp, When,
};
pub use expr_id::ExprId;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
