//! Tests for unary operator implementations.

use crate::unary_operators::evaluate_unary;
use crate::{Bits, EvalError, Value};
use armspec_ir::UnaryOp;
use pretty_assertions::assert_eq;

#[test]
fn test_not_on_bool_only() {
    assert_eq!(
        evaluate_unary(&Value::Bool(true), UnaryOp::Not),
        Ok(Value::Bool(false))
    );
    assert_eq!(
        evaluate_unary(&Value::Int(1), UnaryOp::Not),
        Err(EvalError::MissingCapability {
            op: "!",
            type_name: "integer"
        })
    );
}

#[test]
fn test_integer_sign_operators() {
    assert_eq!(evaluate_unary(&Value::Int(5), UnaryOp::Plus), Ok(Value::Int(5)));
    assert_eq!(evaluate_unary(&Value::Int(5), UnaryOp::Neg), Ok(Value::Int(-5)));
    assert_eq!(
        evaluate_unary(&Value::Int(i64::MIN), UnaryOp::Neg),
        Err(EvalError::IntegerOverflow {
            operation: "negation"
        })
    );
}

#[test]
fn test_power_of_two() {
    assert_eq!(evaluate_unary(&Value::Int(0), UnaryOp::TwoPow), Ok(Value::Int(1)));
    assert_eq!(evaluate_unary(&Value::Int(10), UnaryOp::TwoPow), Ok(Value::Int(1024)));
    assert_eq!(
        evaluate_unary(&Value::Int(63), UnaryOp::TwoPow),
        Err(EvalError::ExponentOutOfRange { exponent: 63 })
    );
    assert_eq!(
        evaluate_unary(&Value::Int(-1), UnaryOp::TwoPow),
        Err(EvalError::ExponentOutOfRange { exponent: -1 })
    );
}

#[test]
fn test_sign_operators_reject_bits() {
    let bits = Value::Bits(Bits::zeros(4).unwrap_or_default());
    assert_eq!(
        evaluate_unary(&bits, UnaryOp::Neg),
        Err(EvalError::MissingCapability {
            op: "-",
            type_name: "bits"
        })
    );
}
