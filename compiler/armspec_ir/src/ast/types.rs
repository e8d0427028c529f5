//! Declaration types.

use crate::ExprId;

/// Type written in a declaration position.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeExpr {
    /// `boolean`
    Bool,
    /// `bit`
    Bit,
    /// `integer`
    Integer,
    /// `bits(N)` where `N` is any expression.
    Bits(ExprId),
    /// User-named type such as `SRType`.
    Named(String),
    /// `(T1, T2, ...)`
    Tuple(Vec<TypeExpr>),
}
