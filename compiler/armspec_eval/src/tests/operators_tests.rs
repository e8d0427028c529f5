//! Tests for binary operator implementations.

#![allow(clippy::unwrap_used)]

use crate::operators::evaluate_binary;
use crate::{Bits, EvalError, Value};
use armspec_ir::BinaryOp;
use pretty_assertions::assert_eq;

fn bits(digits: &str) -> Value {
    Value::Bits(Bits::from_literal(digits).unwrap())
}

fn int(n: i64) -> Value {
    Value::Int(n)
}

#[test]
fn test_int_arithmetic() {
    assert_eq!(evaluate_binary(&int(2), &int(3), BinaryOp::Add), Ok(int(5)));
    assert_eq!(evaluate_binary(&int(5), &int(7), BinaryOp::Sub), Ok(int(-2)));
    assert_eq!(evaluate_binary(&int(4), &int(3), BinaryOp::Mul), Ok(int(12)));
    assert_eq!(evaluate_binary(&int(-7), &int(2), BinaryOp::BigDiv), Ok(int(-3)));
    assert_eq!(evaluate_binary(&int(-7), &int(2), BinaryOp::BigMod), Ok(int(-1)));
    assert_eq!(evaluate_binary(&int(1), &int(4), BinaryOp::Shl), Ok(int(16)));
    assert_eq!(evaluate_binary(&int(-16), &int(2), BinaryOp::Shr), Ok(int(-4)));
}

#[test]
fn test_int_arithmetic_defects() {
    assert_eq!(
        evaluate_binary(&int(1), &int(0), BinaryOp::BigDiv),
        Err(EvalError::DivisionByZero)
    );
    assert_eq!(
        evaluate_binary(&int(1), &int(0), BinaryOp::BigMod),
        Err(EvalError::DivisionByZero)
    );
    assert_eq!(
        evaluate_binary(&int(i64::MAX), &int(1), BinaryOp::Add),
        Err(EvalError::IntegerOverflow {
            operation: "addition"
        })
    );
    assert_eq!(
        evaluate_binary(&int(1), &int(64), BinaryOp::Shl),
        Err(EvalError::ShiftOutOfRange { amount: 64 })
    );
    assert_eq!(
        evaluate_binary(&int(1), &int(-1), BinaryOp::Shr),
        Err(EvalError::ShiftOutOfRange { amount: -1 })
    );
    assert_eq!(
        evaluate_binary(&int(i64::MAX), &int(1), BinaryOp::Shl),
        Err(EvalError::IntegerOverflow {
            operation: "left shift"
        })
    );
    assert_eq!(
        evaluate_binary(&int(6), &int(2), BinaryOp::Div),
        Err(EvalError::MissingCapability {
            op: "/",
            type_name: "integer"
        })
    );
}

#[test]
fn test_int_ordering() {
    let cases = [
        (BinaryOp::Lt, 3, 4, true),
        (BinaryOp::Lt, 4, 4, false),
        (BinaryOp::LtEq, 4, 4, true),
        (BinaryOp::Gt, 5, 4, true),
        (BinaryOp::GtEq, 3, 4, false),
        (BinaryOp::NotEq, 3, 4, true),
    ];
    for (op, a, b, expected) in cases {
        assert_eq!(
            evaluate_binary(&int(a), &int(b), op),
            Ok(Value::Bool(expected)),
            "{a} {} {b}",
            op.as_symbol()
        );
    }
}

#[test]
fn test_variants_must_match() {
    assert_eq!(
        evaluate_binary(&int(1), &bits("1"), BinaryOp::Eq),
        Err(EvalError::BinaryTypeMismatch {
            op: BinaryOp::Eq,
            left: "integer",
            right: "bits"
        })
    );
    assert_eq!(
        evaluate_binary(&Value::Bool(true), &int(1), BinaryOp::Eq),
        Err(EvalError::BinaryTypeMismatch {
            op: BinaryOp::Eq,
            left: "bool",
            right: "integer"
        })
    );
}

#[test]
fn test_symbols_support_nothing() {
    let a = Value::Symbol("APSR.C".into());
    assert_eq!(
        evaluate_binary(&a, &a, BinaryOp::Eq),
        Err(EvalError::MissingCapability {
            op: "==",
            type_name: "symbol"
        })
    );
    assert!(evaluate_binary(&Value::Inconsistent, &Value::Inconsistent, BinaryOp::Eq).is_err());
}

#[test]
fn test_bits_equality_wildcard_on_right() {
    assert_eq!(
        evaluate_binary(&bits("1011"), &bits("1x11"), BinaryOp::Eq),
        Ok(Value::Bool(true))
    );
    assert_eq!(
        evaluate_binary(&bits("1011"), &bits("1111"), BinaryOp::NotEq),
        Ok(Value::Bool(true))
    );
    // The left operand's don't-care bits are not wildcards.
    assert_eq!(
        evaluate_binary(&bits("1x11"), &bits("1111"), BinaryOp::Eq),
        Ok(Value::Bool(false))
    );
}

#[test]
fn test_bits_bitwise_and_concat() {
    assert_eq!(
        evaluate_binary(&bits("1100"), &bits("1010"), BinaryOp::BitAnd),
        Ok(bits("1000"))
    );
    assert_eq!(
        evaluate_binary(&bits("1100"), &bits("1010"), BinaryOp::BitOr),
        Ok(bits("1110"))
    );
    assert_eq!(
        evaluate_binary(&bits("1100"), &bits("1010"), BinaryOp::Eor),
        Ok(bits("0110"))
    );
    assert_eq!(
        evaluate_binary(&bits("11"), &bits("010"), BinaryOp::Concat),
        Ok(bits("11010"))
    );
    assert_eq!(
        evaluate_binary(&bits("11"), &bits("010"), BinaryOp::BitAnd),
        Err(EvalError::WidthMismatch {
            op: "AND",
            left: 2,
            right: 3
        })
    );
    assert_eq!(
        evaluate_binary(&bits("11"), &bits("01"), BinaryOp::Lt),
        Err(EvalError::MissingCapability {
            op: "<",
            type_name: "bits"
        })
    );
}

#[test]
fn test_tuple_equality() {
    let left = Value::Tuple(vec![bits("10"), int(3)]);
    let same = Value::Tuple(vec![bits("1x"), int(3)]);
    let other = Value::Tuple(vec![bits("10"), int(4)]);
    assert_eq!(evaluate_binary(&left, &same, BinaryOp::Eq), Ok(Value::Bool(true)));
    assert_eq!(evaluate_binary(&left, &other, BinaryOp::Eq), Ok(Value::Bool(false)));
    assert_eq!(evaluate_binary(&left, &other, BinaryOp::NotEq), Ok(Value::Bool(true)));

    let short = Value::Tuple(vec![bits("10")]);
    assert_eq!(
        evaluate_binary(&left, &short, BinaryOp::Eq),
        Err(EvalError::TupleLengthMismatch { left: 2, right: 1 })
    );
    let mixed = Value::Tuple(vec![int(2), int(3)]);
    assert!(matches!(
        evaluate_binary(&left, &mixed, BinaryOp::Eq),
        Err(EvalError::BinaryTypeMismatch { .. })
    ));
}
