//! Expression Types
//!
//! Expression kinds stored in the [`ExprArena`](crate::ExprArena).

use crate::{ExprId, Span};

use super::{BinaryOp, TypeExpr, UnaryOp};

/// Borrowed view of an arena expression.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Expr<'a> {
    pub kind: &'a ExprKind,
    pub span: Span,
}

/// One term inside a bit-slice `<...>` or index `[...]` suffix.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum SliceTerm {
    /// Single bit position.
    Single(ExprId),
    /// Inclusive range `hi:lo`.
    Range { hi: ExprId, lo: ExprId },
}

/// Expression kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Decimal or hexadecimal integer numeral.
    Int(i64),
    /// Numeral with a fractional part, kept as written.
    Real(String),
    /// Bit-string literal digits over `0`, `1` and `x` (spaces removed).
    BitString(String),
    /// Identifier reference.
    Name(String),
    /// Typed declaration `bits(4) imm`.
    Decl { ty: TypeExpr, name: String },
    /// `UNKNOWN`, optionally typed as in `bits(32) UNKNOWN`.
    Unknown(Option<TypeExpr>),
    /// Call `Name(args)`.
    Call { callee: String, args: Vec<ExprId> },
    /// Parenthesized list. A single element evaluates to that element.
    Tuple(Vec<ExprId>),
    /// Discard slot `-` in a tuple assignment target.
    Blank,
    /// Binary operation.
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    /// Unary operation.
    Unary { op: UnaryOp, operand: ExprId },
    /// Bit slice `x<hi:lo, i>`.
    BitIndex { base: ExprId, terms: Vec<SliceTerm> },
    /// Array-style index `x[i]`.
    Index { base: ExprId, terms: Vec<SliceTerm> },
    /// Ternary `if c then a else b`.
    IfElse {
        cond: ExprId,
        then_val: ExprId,
        else_val: ExprId,
    },
    /// Member access `x.field`.
    Dot { base: ExprId, field: String },
    /// Placeholder produced after a syntax error.
    Error,
}

impl ExprKind {
    /// Short human-readable name of the expression form, used in diagnostics.
    pub const fn describe(&self) -> &'static str {
        match self {
            ExprKind::Int(_) | ExprKind::Real(_) => "numeral",
            ExprKind::BitString(_) => "bit string",
            ExprKind::Name(_) => "name",
            ExprKind::Decl { .. } => "declaration",
            ExprKind::Unknown(_) => "UNKNOWN",
            ExprKind::Call { .. } => "call",
            ExprKind::Tuple(_) => "tuple",
            ExprKind::Blank => "blank",
            ExprKind::Binary { .. } => "binary expression",
            ExprKind::Unary { .. } => "unary expression",
            ExprKind::BitIndex { .. } => "bit slice",
            ExprKind::Index { .. } => "index",
            ExprKind::IfElse { .. } => "conditional expression",
            ExprKind::Dot { .. } => "member access",
            ExprKind::Error => "error",
        }
    }
}
