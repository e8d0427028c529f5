//! Expression arena.
//!
//! Struct-of-arrays storage: parallel `kinds` and `spans` vectors indexed by
//! [`ExprId`]. The parser is the only writer; evaluation reads it through
//! shared references.

use std::ops::Index;

use crate::ast::{Expr, ExprKind};
use crate::{ExprId, Span};

/// Arena for parsed expressions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExprArena {
    /// Expression kinds (parallel with `spans`).
    kinds: Vec<ExprKind>,
    /// Source spans for error reporting (parallel with `kinds`).
    spans: Vec<Span>,
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        ExprArena::default()
    }

    /// Create an arena pre-allocated based on source length.
    ///
    /// Heuristic: roughly one expression per 8 bytes of pseudocode.
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated = source_len / 8;
        ExprArena {
            kinds: Vec::with_capacity(estimated),
            spans: Vec::with_capacity(estimated),
        }
    }

    /// Allocate an expression, returning its ID.
    ///
    /// Returns [`ExprId::INVALID`] if the arena already holds `u32::MAX`
    /// expressions.
    pub fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        let Ok(index) = u32::try_from(self.kinds.len()) else {
            return ExprId::INVALID;
        };
        self.kinds.push(kind);
        self.spans.push(span);
        ExprId::new(index)
    }

    /// Get the kind of an expression.
    #[inline]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.kinds[id.index()]
    }

    /// Get the span of an expression.
    #[inline]
    pub fn span(&self, id: ExprId) -> Span {
        self.spans[id.index()]
    }

    /// Get an expression as a `(kind, span)` view.
    #[inline]
    pub fn get(&self, id: ExprId) -> Expr<'_> {
        Expr {
            kind: self.kind(id),
            span: self.span(id),
        }
    }

    /// Number of allocated expressions.
    #[inline]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Whether no expression has been allocated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl Index<ExprId> for ExprArena {
    type Output = ExprKind;

    fn index(&self, id: ExprId) -> &ExprKind {
        self.kind(id)
    }
}
