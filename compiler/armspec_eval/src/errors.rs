//! Evaluation defects.
//!
//! A defect means the program or template is outside the subset this
//! interpreter supports: a variant mismatch, a bad call, a malformed
//! assignment. Defects are distinct from the sentinel [`Outcome`]s
//! (`SEE`, `UNDEFINED`, `UNPREDICTABLE`), which are ordinary results.
//!
//! Factory functions are the construction API; they are `#[cold]` so the
//! happy path stays compact.
//!
//! [`Outcome`]: crate::Outcome

use armspec_ir::BinaryOp;
use thiserror::Error;

use crate::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// One evaluation defect.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum EvalError {
    // Operators
    #[error("cannot apply `{}` to {left} and {right}", .op.as_symbol())]
    BinaryTypeMismatch {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },
    #[error("{type_name} does not support `{op}`")]
    MissingCapability {
        op: &'static str,
        type_name: &'static str,
    },
    #[error("`{op}` on mismatched widths {left} and {right}")]
    WidthMismatch { op: &'static str, left: u32, right: u32 },
    #[error("tuples of length {left} and {right} cannot be compared")]
    TupleLengthMismatch { left: usize, right: usize },

    // Arithmetic
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
    #[error("shift amount {amount} out of range")]
    ShiftOutOfRange { amount: i64 },
    #[error("2^{exponent} out of range")]
    ExponentOutOfRange { exponent: i64 },

    // Conditions and operand kinds
    #[error("{context} must be boolean, got {type_name}")]
    NotBool {
        context: &'static str,
        type_name: &'static str,
    },
    #[error("{context} must be an integer, got {type_name}")]
    NotInteger {
        context: &'static str,
        type_name: &'static str,
    },

    // Calls
    #[error("cannot call {name} of type {type_name}")]
    NotCallable {
        name: String,
        type_name: &'static str,
    },
    #[error("{name} expects {expected} argument(s), got {got}")]
    WrongArgCount {
        name: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("{name} expects {expected}, got {got}")]
    WrongArgType {
        name: &'static str,
        expected: &'static str,
        got: String,
    },

    // Assignment
    #[error("assignment of non-tuple {type_name} to tuple")]
    NotATuple { type_name: &'static str },
    #[error("{targets} = {values} in tuple assignment")]
    TupleArity { targets: usize, values: usize },
    #[error("cannot assign to {target}")]
    InvalidAssignTarget { target: &'static str },

    // Case
    #[error("mistyped comparison of {selector} and {pattern} in case statement")]
    MistypedCaseComparison { selector: String, pattern: String },

    // Bit vectors
    #[error("bit index operator requires bits, not {type_name}")]
    BitIndexNotBits { type_name: &'static str },
    #[error("inverted bit indexes {hi}:{lo}")]
    InvertedRange { hi: i64, lo: i64 },
    #[error("bit index {index} out of range for {width}-bit value")]
    BitIndexOutOfRange { index: i64, width: u32 },
    #[error("bit vector width {width} out of range 0..=32")]
    WidthOutOfRange { width: i64 },
    #[error("cannot zero-extend a {from}-bit value to {to} bits")]
    InvalidExtension { from: u32, to: i64 },

    // Names and constructs
    #[error("unresolved name {name}")]
    UnresolvedName { name: String },
    #[error("unsupported {construct}")]
    Unsupported { construct: &'static str },
    #[error("loop exceeded {limit} iterations")]
    LoopLimit { limit: u32 },
    #[error("invalid constant {text}")]
    InvalidConstant { text: String },
}

#[cold]
pub fn binary_type_mismatch(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    EvalError::BinaryTypeMismatch {
        op,
        left: left.type_name(),
        right: right.type_name(),
    }
}

#[cold]
pub fn missing_capability(op: &'static str, value: &Value) -> EvalError {
    EvalError::MissingCapability {
        op,
        type_name: value.type_name(),
    }
}

#[cold]
pub fn width_mismatch(op: &'static str, left: u32, right: u32) -> EvalError {
    EvalError::WidthMismatch { op, left, right }
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::DivisionByZero
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::IntegerOverflow { operation }
}

#[cold]
pub fn not_bool(context: &'static str, value: &Value) -> EvalError {
    EvalError::NotBool {
        context,
        type_name: value.type_name(),
    }
}

#[cold]
pub fn not_integer(context: &'static str, value: &Value) -> EvalError {
    EvalError::NotInteger {
        context,
        type_name: value.type_name(),
    }
}

#[cold]
pub fn not_callable(name: &str, value: &Value) -> EvalError {
    EvalError::NotCallable {
        name: name.to_string(),
        type_name: value.type_name(),
    }
}

#[cold]
pub fn wrong_arg_count(name: &'static str, expected: usize, got: usize) -> EvalError {
    EvalError::WrongArgCount {
        name,
        expected,
        got,
    }
}

#[cold]
pub fn wrong_arg_type(name: &'static str, expected: &'static str, got: &Value) -> EvalError {
    EvalError::WrongArgType {
        name,
        expected,
        got: got.type_name().to_string(),
    }
}

#[cold]
pub fn mistyped_case_comparison(selector: &Value, pattern: &Value) -> EvalError {
    EvalError::MistypedCaseComparison {
        selector: format!("{}({selector})", selector.type_name()),
        pattern: format!("{}({pattern})", pattern.type_name()),
    }
}

#[cold]
pub fn width_out_of_range(width: i64) -> EvalError {
    EvalError::WidthOutOfRange { width }
}

#[cold]
pub fn unsupported(construct: &'static str) -> EvalError {
    EvalError::Unsupported { construct }
}
