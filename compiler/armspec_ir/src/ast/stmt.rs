//! Statement Types
//!
//! Statements form an owned tree whose leaves reference arena expressions.

use std::fmt;

use crate::{ExprId, Span};

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// `elsif cond then body`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ElseIf {
    pub cond: ExprId,
    pub body: Stmt,
}

/// `when p1, p2 body`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct When {
    pub patterns: Vec<ExprId>,
    pub body: Stmt,
}

/// Statement kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `target = value;`
    Assign { target: ExprId, value: ExprId },
    /// Expression evaluated for effect.
    Expr(ExprId),
    /// Declaration without initializer, `bits(4) x;`. The expression is an
    /// [`ExprKind::Decl`](crate::ExprKind::Decl).
    Decl(ExprId),
    /// `return [values];`
    Return(Vec<ExprId>),
    /// `UNDEFINED;`
    Undefined,
    /// `UNPREDICTABLE;`
    Unpredictable,
    /// `SEE <text>;`
    See(String),
    /// `IMPLEMENTATION_DEFINED [text];`
    ImplDefined(String),
    /// `SUBARCHITECTURE_DEFINED [text];`
    SubarchDefined(String),
    If {
        cond: ExprId,
        then_body: Box<Stmt>,
        elsifs: Vec<ElseIf>,
        else_body: Option<Box<Stmt>>,
    },
    Repeat {
        body: Box<Stmt>,
        until: ExprId,
    },
    While {
        cond: ExprId,
        body: Box<Stmt>,
    },
    For {
        var: String,
        from: ExprId,
        to: ExprId,
        body: Box<Stmt>,
    },
    Case {
        selector: ExprId,
        whens: Vec<When>,
        otherwise: Option<Box<Stmt>>,
    },
    Block(Vec<Stmt>),
    Assert(ExprId),
    /// `enumeration Name { A, B };`
    Enum { name: String, values: Vec<String> },
    /// Placeholder produced after a syntax error.
    Error,
}
