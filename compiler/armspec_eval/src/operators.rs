//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the value set is closed, so each variant's
//! capabilities are a `match` over [`BinaryOp`]. Both operands must be the
//! same variant; nothing is coerced.

use armspec_ir::BinaryOp;

use crate::errors::{
    binary_type_mismatch, division_by_zero, integer_overflow, missing_capability, EvalError,
};
use crate::{Bits, EvalResult, Value};

/// Checked arithmetic where the only failure is overflow.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

/// Checked division or remainder with a zero guard.
#[inline]
fn checked_div(divisor: i64, op: impl FnOnce() -> Option<i64>, op_name: &'static str) -> EvalResult {
    if divisor == 0 {
        Err(division_by_zero())
    } else {
        checked_arith(op(), op_name)
    }
}

fn shift_amount(amount: i64) -> Result<u32, EvalError> {
    match u32::try_from(amount) {
        Ok(n) if n < 64 => Ok(n),
        _ => Err(EvalError::ShiftOutOfRange { amount }),
    }
}

/// Evaluate a binary operation.
///
/// `&&` and `||` are handled by the interpreter, which short-circuits
/// before both operands exist; here they only apply to two booleans.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Bool(a), Value::Bool(b)) => eval_bool_binary(*a, *b, op),
        (Value::Bits(a), Value::Bits(b)) => eval_bits_binary(a, b, op),
        (Value::Tuple(a), Value::Tuple(b)) => eval_tuple_binary(a, b, op),
        _ if left.same_variant(right) => Err(missing_capability(op.as_symbol(), left)),
        _ => Err(binary_type_mismatch(op, left, right)),
    }
}

/// Binary operations on integers.
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::BigDiv => checked_div(b, || a.checked_div(b), "DIV"),
        BinaryOp::BigMod => checked_div(b, || a.checked_rem(b), "MOD"),
        BinaryOp::Shl => {
            let n = shift_amount(b)?;
            let shifted = a << n;
            if shifted >> n == a {
                Ok(Value::Int(shifted))
            } else {
                Err(integer_overflow("left shift"))
            }
        }
        BinaryOp::Shr => Ok(Value::Int(a >> shift_amount(b)?)),
        _ => Err(EvalError::MissingCapability {
            op: op.as_symbol(),
            type_name: "integer",
        }),
    }
}

/// Binary operations on booleans.
fn eval_bool_binary(a: bool, b: bool, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::AndAnd => Ok(Value::Bool(a && b)),
        BinaryOp::OrOr => Ok(Value::Bool(a || b)),
        _ => Err(EvalError::MissingCapability {
            op: op.as_symbol(),
            type_name: "bool",
        }),
    }
}

/// Binary operations on bit vectors. Equality treats the right operand's
/// don't-care positions as wildcards.
fn eval_bits_binary(a: &Bits, b: &Bits, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => a.matches(b).map(Value::Bool),
        BinaryOp::NotEq => a.matches(b).map(|eq| Value::Bool(!eq)),
        BinaryOp::BitAnd => a.bitwise(b, "AND", |x, y| x & y).map(Value::Bits),
        BinaryOp::BitOr => a.bitwise(b, "OR", |x, y| x | y).map(Value::Bits),
        BinaryOp::Eor => a.bitwise(b, "EOR", |x, y| x ^ y).map(Value::Bits),
        BinaryOp::Concat => a.concat(b).map(Value::Bits),
        _ => Err(EvalError::MissingCapability {
            op: op.as_symbol(),
            type_name: "bits",
        }),
    }
}

/// Element-wise tuple equality; each slot follows its own variant's rules.
fn eval_tuple_binary(a: &[Value], b: &[Value], op: BinaryOp) -> EvalResult {
    let negate = match op {
        BinaryOp::Eq => false,
        BinaryOp::NotEq => true,
        _ => {
            return Err(EvalError::MissingCapability {
                op: op.as_symbol(),
                type_name: "tuple",
            })
        }
    };
    if a.len() != b.len() {
        return Err(EvalError::TupleLengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    let mut all_equal = true;
    for (x, y) in a.iter().zip(b) {
        if evaluate_binary(x, y, BinaryOp::Eq)? != Value::Bool(true) {
            all_equal = false;
        }
    }
    Ok(Value::Bool(all_equal != negate))
}
