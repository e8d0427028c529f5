//! Binary and Unary Operators
//!
//! All operator types used in pseudocode expressions.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    AndAnd,
    OrOr,

    // Bitwise (`AND`, `OR`, `EOR`)
    BitAnd,
    BitOr,
    Eor,

    // Bit-string concatenation (`:`)
    Concat,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    BigDiv,
    BigMod,

    // Shifts
    Shl,
    Shr,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::AndAnd => "&&",
            Self::OrOr => "||",
            Self::BitAnd => "AND",
            Self::BitOr => "OR",
            Self::Eor => "EOR",
            Self::Concat => ":",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::BigDiv => "DIV",
            Self::BigMod => "MOD",
            Self::Shl => "<<",
            Self::Shr => ">>",
        }
    }

    /// Returns the precedence level of this operator.
    ///
    /// Higher number = lower precedence (binds less tightly).
    /// - 1: `<<` `>>`
    /// - 2: `*` `/` `DIV` `MOD`
    /// - 3: `+` `-`
    /// - 4: `:`
    /// - 5: `==` `!=` `<` `<=` `>` `>=`
    /// - 6: `&&` `||`
    /// - 7: `AND` `OR` `EOR`
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Shl | Self::Shr => 1,
            Self::Mul | Self::Div | Self::BigDiv | Self::BigMod => 2,
            Self::Add | Self::Sub => 3,
            Self::Concat => 4,
            Self::Eq | Self::NotEq | Self::Lt | Self::LtEq | Self::Gt | Self::GtEq => 5,
            Self::AndAnd | Self::OrOr => 6,
            Self::BitAnd | Self::BitOr | Self::Eor => 7,
        }
    }

    /// Loosest binary precedence level.
    pub const LOWEST_PRECEDENCE: u8 = 7;

    /// Whether this operator short-circuits on its left operand.
    pub const fn is_short_circuit(self) -> bool {
        matches!(self, Self::AndAnd | Self::OrOr)
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Logical not: `!`
    Not,
    /// Unary plus: `+`
    Plus,
    /// Negation: `-`
    Neg,
    /// Power of two: `2^`
    TwoPow,
}

impl UnaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Plus => "+",
            Self::Neg => "-",
            Self::TwoPow => "2^",
        }
    }
}
