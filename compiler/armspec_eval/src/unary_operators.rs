//! Unary operator implementations for the evaluator.

use armspec_ir::UnaryOp;

use crate::errors::{integer_overflow, missing_capability, EvalError};
use crate::{EvalResult, Value};

/// Largest exponent `2^x` accepts; `2^63` does not fit an `i64`.
const MAX_EXPONENT: i64 = 62;

/// Evaluate a unary operation.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> EvalResult {
    match (value, op) {
        (Value::Bool(b), UnaryOp::Not) => Ok(Value::Bool(!b)),

        (Value::Int(n), UnaryOp::Plus) => Ok(Value::Int(*n)),
        (Value::Int(n), UnaryOp::Neg) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("negation")),
        (Value::Int(n), UnaryOp::TwoPow) => {
            if (0..=MAX_EXPONENT).contains(n) {
                Ok(Value::Int(1 << n))
            } else {
                Err(EvalError::ExponentOutOfRange { exponent: *n })
            }
        }

        _ => Err(missing_capability(op.as_symbol(), value)),
    }
}
