//! Global builtin table.
//!
//! Built once per process and read-only afterwards; the [`Environment`]
//! consults it after local bindings.
//!
//! [`Environment`]: crate::Environment

use std::sync::{Once, OnceLock};

use rustc_hash::FxHashMap;
use tracing::warn;

use crate::errors::{width_out_of_range, wrong_arg_count, wrong_arg_type, EvalError};
use crate::{Bits, EvalResult, FunctionValue, Value};

static BUILTINS: OnceLock<FxHashMap<&'static str, Value>> = OnceLock::new();

/// The builtin table.
pub fn builtins() -> &'static FxHashMap<&'static str, Value> {
    BUILTINS.get_or_init(|| {
        let functions: [(&'static str, crate::value::BuiltinFn); 9] = [
            ("UInt", uint),
            ("SInt", sint),
            ("ZeroExtend", zero_extend),
            ("Zeros", zeros),
            ("BitCount", bit_count),
            ("Consistent", consistent),
            ("ArchVersion", arch_version),
            ("ARMExpandImm", arm_expand_imm),
            ("DecodeImmShift", decode_imm_shift),
        ];
        let mut table = FxHashMap::default();
        table.insert("TRUE", Value::Bool(true));
        table.insert("FALSE", Value::Bool(false));
        for (name, func) in functions {
            table.insert(name, Value::Func(FunctionValue::new(name, func)));
        }
        table
    })
}

/// Look up one builtin by name.
pub fn builtin(name: &str) -> Option<&'static Value> {
    builtins().get(name)
}

fn expect_args<'a, const N: usize>(
    name: &'static str,
    args: &'a [Value],
) -> Result<&'a [Value; N], EvalError> {
    args.try_into()
        .map_err(|_| wrong_arg_count(name, N, args.len()))
}

fn bits_arg(name: &'static str, value: &Value) -> Result<Bits, EvalError> {
    match value {
        Value::Bits(bits) => Ok(*bits),
        other => Err(wrong_arg_type(name, "bits", other)),
    }
}

fn int_arg(name: &'static str, value: &Value) -> Result<i64, EvalError> {
    match value {
        Value::Int(n) => Ok(*n),
        other => Err(wrong_arg_type(name, "integer", other)),
    }
}

fn width_arg(name: &'static str, value: &Value) -> Result<u32, EvalError> {
    let n = int_arg(name, value)?;
    u32::try_from(n)
        .ok()
        .filter(|w| *w <= Bits::MAX_WIDTH)
        .ok_or_else(|| width_out_of_range(n))
}

fn uint(args: &[Value]) -> EvalResult {
    let [x] = expect_args::<1>("UInt", args)?;
    Ok(Value::Int(bits_arg("UInt", x)?.to_unsigned()))
}

fn sint(args: &[Value]) -> EvalResult {
    let [x] = expect_args::<1>("SInt", args)?;
    Ok(Value::Int(bits_arg("SInt", x)?.to_signed()))
}

/// Relabels the width; the payload already holds only the low bits.
fn zero_extend(args: &[Value]) -> EvalResult {
    let [x, n] = expect_args::<2>("ZeroExtend", args)?;
    let bits = bits_arg("ZeroExtend", x)?;
    let to = int_arg("ZeroExtend", n)?;
    match u32::try_from(to) {
        Ok(width) if (bits.width()..=Bits::MAX_WIDTH).contains(&width) => {
            Ok(Value::Bits(bits.relabel(width)))
        }
        _ => Err(EvalError::InvalidExtension {
            from: bits.width(),
            to,
        }),
    }
}

fn zeros(args: &[Value]) -> EvalResult {
    let [n] = expect_args::<1>("Zeros", args)?;
    Bits::zeros(width_arg("Zeros", n)?).map(Value::Bits)
}

fn bit_count(args: &[Value]) -> EvalResult {
    let [x] = expect_args::<1>("BitCount", args)?;
    Ok(Value::Int(i64::from(bits_arg("BitCount", x)?.count_ones())))
}

fn consistent(args: &[Value]) -> EvalResult {
    let [x] = expect_args::<1>("Consistent", args)?;
    Ok(Value::Bool(*x != Value::Inconsistent))
}

fn arch_version(args: &[Value]) -> EvalResult {
    expect_args::<0>("ArchVersion", args)?;
    Ok(Value::Int(7))
}

/// A-profile modified immediate: the low byte rotated right by twice the
/// top four bits.
fn arm_expand_imm(args: &[Value]) -> EvalResult {
    let [x] = expect_args::<1>("ARMExpandImm", args)?;
    let imm12 = bits_arg("ARMExpandImm", x)?;
    if imm12.width() != 12 {
        return Err(wrong_arg_type("ARMExpandImm", "12-bit bits", x));
    }
    let byte = imm12.value() & 0xFF;
    let rotation = 2 * ((imm12.value() >> 8) & 0xF);
    Bits::new(32, byte.rotate_right(rotation)).map(Value::Bits)
}

static DECODE_IMM_SHIFT_WARNING: Once = Once::new();

/// Placeholder: shift decoding is not modeled and always yields `(0, 0)`.
fn decode_imm_shift(args: &[Value]) -> EvalResult {
    let [ty, imm5] = expect_args::<2>("DecodeImmShift", args)?;
    bits_arg("DecodeImmShift", ty)?;
    bits_arg("DecodeImmShift", imm5)?;
    DECODE_IMM_SHIFT_WARNING.call_once(|| {
        warn!("DecodeImmShift is not modeled; returning placeholder (0, 0)");
    });
    Ok(Value::Tuple(vec![Value::Int(0), Value::Int(0)]))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn call(name: &str, args: &[Value]) -> EvalResult {
        match builtin(name) {
            Some(Value::Func(f)) => f.call(args),
            other => panic!("{name} is not a builtin function: {other:?}"),
        }
    }

    fn bits(width: u32, value: u32) -> Value {
        Value::Bits(Bits::new(width, value).unwrap())
    }

    #[test]
    fn test_constants() {
        assert_eq!(builtin("TRUE"), Some(&Value::Bool(true)));
        assert_eq!(builtin("FALSE"), Some(&Value::Bool(false)));
        assert_eq!(builtin("R"), None);
    }

    #[test]
    fn test_uint_and_sint() {
        assert_eq!(call("UInt", &[bits(8, 0xFF)]), Ok(Value::Int(255)));
        assert_eq!(call("SInt", &[bits(8, 0xFF)]), Ok(Value::Int(-1)));
        assert_eq!(call("SInt", &[bits(4, 0b0111)]), Ok(Value::Int(7)));
    }

    #[test]
    fn test_arg_validation() {
        assert_eq!(
            call("UInt", &[]),
            Err(EvalError::WrongArgCount {
                name: "UInt",
                expected: 1,
                got: 0
            })
        );
        assert_eq!(
            call("BitCount", &[Value::Int(3)]),
            Err(EvalError::WrongArgType {
                name: "BitCount",
                expected: "bits",
                got: "integer".to_string()
            })
        );
    }

    #[test]
    fn test_arm_expand_imm() {
        assert_eq!(call("ARMExpandImm", &[bits(12, 0x0AB)]), Ok(bits(32, 0xAB)));
        assert_eq!(
            call("ARMExpandImm", &[bits(12, 0x4AB)]),
            Ok(bits(32, 0xAB00_0000))
        );
        assert!(call("ARMExpandImm", &[bits(8, 0xAB)]).is_err());
    }

    #[test]
    fn test_zero_extend_relabels() {
        assert_eq!(
            call("ZeroExtend", &[bits(8, 0xA5), Value::Int(32)]),
            Ok(bits(32, 0xA5))
        );
        assert_eq!(
            call("ZeroExtend", &[bits(8, 0xA5), Value::Int(4)]),
            Err(EvalError::InvalidExtension { from: 8, to: 4 })
        );
    }

    #[test]
    fn test_zeros_bit_count_consistent() {
        assert_eq!(call("Zeros", &[Value::Int(4)]), Ok(bits(4, 0)));
        assert_eq!(
            call("Zeros", &[Value::Int(33)]),
            Err(EvalError::WidthOutOfRange { width: 33 })
        );
        assert_eq!(call("BitCount", &[bits(8, 0b1011_0001)]), Ok(Value::Int(4)));
        assert_eq!(
            call("Consistent", &[Value::Inconsistent]),
            Ok(Value::Bool(false))
        );
        assert_eq!(call("Consistent", &[bits(4, 3)]), Ok(Value::Bool(true)));
    }

    #[test]
    fn test_arch_version_and_placeholder() {
        assert_eq!(call("ArchVersion", &[]), Ok(Value::Int(7)));
        assert_eq!(
            call("DecodeImmShift", &[bits(2, 0), bits(5, 3)]),
            Ok(Value::Tuple(vec![Value::Int(0), Value::Int(0)]))
        );
    }
}
