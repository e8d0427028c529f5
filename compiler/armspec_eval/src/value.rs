//! Runtime values.
//!
//! A closed tagged union; operator support per variant is decided by
//! pattern matching in [`operators`](crate::operators) rather than traits.

use std::fmt;

use crate::{Bits, EvalResult};

/// Signature of a builtin primitive.
pub type BuiltinFn = fn(&[Value]) -> EvalResult;

/// Named builtin callable.
#[derive(Copy, Clone)]
pub struct FunctionValue {
    pub name: &'static str,
    pub func: BuiltinFn,
}

impl FunctionValue {
    pub const fn new(name: &'static str, func: BuiltinFn) -> Self {
        FunctionValue { name, func }
    }

    pub fn call(&self, args: &[Value]) -> EvalResult {
        (self.func)(args)
    }
}

// Builtins are unique by name; comparing by name avoids relying on
// function pointer identity.
impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for FunctionValue {}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionValue({})", self.name)
    }
}

/// Runtime value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Bits(Bits),
    /// Two or more values; a one-element tuple collapses to its element.
    Tuple(Vec<Value>),
    /// Placeholder for a name with no binding, such as unmodeled
    /// architecture state.
    Symbol(String),
    Func(FunctionValue),
    /// A template field bound twice with different contents.
    Inconsistent,
}

impl Value {
    /// Variant name used in defect messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::Bits(_) => "bits",
            Value::Tuple(_) => "tuple",
            Value::Symbol(_) => "symbol",
            Value::Func(_) => "function",
            Value::Inconsistent => "inconsistent",
        }
    }

    /// Whether both values are the same variant.
    pub fn same_variant(&self, other: &Value) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<Bits> for Value {
    fn from(bits: Bits) -> Self {
        Value::Bits(bits)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(true) => f.write_str("TRUE"),
            Value::Bool(false) => f.write_str("FALSE"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Bits(bits) => write!(f, "{bits}"),
            Value::Tuple(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
            Value::Symbol(name) => f.write_str(name),
            Value::Func(func) => f.write_str(func.name),
            Value::Inconsistent => f.write_str("INCONSISTENT"),
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display() {
        let tuple = Value::Tuple(vec![
            Value::Int(-3),
            Value::Bits(Bits::from_literal("1x0").unwrap()),
            Value::Bool(true),
        ]);
        assert_eq!(tuple.to_string(), "(-3, '1x0', TRUE)");
        assert_eq!(Value::Symbol("APSR.N".into()).to_string(), "APSR.N");
        assert_eq!(Value::Inconsistent.to_string(), "INCONSISTENT");
    }

    #[test]
    fn test_same_variant_ignores_payload() {
        assert!(Value::Int(1).same_variant(&Value::Int(2)));
        assert!(!Value::Int(1).same_variant(&Value::Bool(true)));
    }
}
