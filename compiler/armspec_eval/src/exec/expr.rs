//! Expression evaluation.

use armspec_ir::{BinaryOp, ExprId, ExprKind, SliceTerm, TypeExpr};
use armspec_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{missing_capability, not_bool, not_callable, not_integer, unsupported};
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::{Bits, EvalError, EvalResult, Value};

impl Interpreter<'_> {
    pub fn eval_expr(&mut self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(id))
    }

    fn eval_expr_inner(&mut self, id: ExprId) -> EvalResult {
        match self.arena.kind(id) {
            ExprKind::Int(n) => Ok(Value::Int(*n)),
            ExprKind::Real(text) => Err(EvalError::InvalidConstant { text: text.clone() }),
            ExprKind::BitString(digits) => Bits::from_literal(digits).map(Value::Bits),
            ExprKind::Name(name) => self.env.lookup(name),
            ExprKind::Decl { .. } => Err(unsupported("declaration used as a value")),
            ExprKind::Unknown(ty) => self.eval_unknown(ty.as_ref()),
            ExprKind::Call { callee, args } => {
                let args = args
                    .iter()
                    .map(|&arg| self.eval_expr(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                match self.env.lookup(callee)? {
                    Value::Func(func) => func.call(&args),
                    other => Err(not_callable(callee, &other)),
                }
            }
            ExprKind::Tuple(items) if items.len() == 1 => self.eval_expr(items[0]),
            ExprKind::Tuple(items) => items
                .iter()
                .map(|&item| self.eval_expr(item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Tuple),
            ExprKind::Blank => Err(unsupported("`-` outside a tuple assignment")),
            ExprKind::Binary { op, left, right } if op.is_short_circuit() => {
                self.eval_short_circuit(*op, *left, *right)
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(*left)?;
                let right = self.eval_expr(*right)?;
                evaluate_binary(&left, &right, *op)
            }
            ExprKind::Unary { op, operand } => evaluate_unary(&self.eval_expr(*operand)?, *op),
            ExprKind::BitIndex { base, terms } => match self.eval_expr(*base)? {
                Value::Bits(bits) => self.eval_slice(bits, terms).map(Value::Bits),
                other => Err(EvalError::BitIndexNotBits {
                    type_name: other.type_name(),
                }),
            },
            ExprKind::Index { base, terms } => match self.eval_expr(*base)? {
                Value::Bits(bits) => self.eval_slice(bits, terms).map(Value::Bits),
                other => Err(missing_capability("[]", &other)),
            },
            ExprKind::IfElse {
                cond,
                then_val,
                else_val,
            } => {
                if self.eval_bool(*cond, "conditional expression")? {
                    self.eval_expr(*then_val)
                } else {
                    self.eval_expr(*else_val)
                }
            }
            ExprKind::Dot { base, field } => match self.eval_expr(*base)? {
                Value::Symbol(name) => Ok(Value::Symbol(format!("{name}.{field}"))),
                other => Err(missing_capability(".", &other)),
            },
            ExprKind::Error => Err(unsupported("malformed expression")),
        }
    }

    pub(super) fn eval_bool(&mut self, id: ExprId, context: &'static str) -> Result<bool, EvalError> {
        match self.eval_expr(id)? {
            Value::Bool(b) => Ok(b),
            other => Err(not_bool(context, &other)),
        }
    }

    pub(super) fn eval_int(&mut self, id: ExprId, context: &'static str) -> Result<i64, EvalError> {
        match self.eval_expr(id)? {
            Value::Int(n) => Ok(n),
            other => Err(not_integer(context, &other)),
        }
    }

    /// `&&` yields `FALSE` without touching the right operand when the left
    /// is false, `||` yields `TRUE` when the left is true. Otherwise the
    /// right operand's value is the result, whatever its variant.
    fn eval_short_circuit(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> EvalResult {
        let context = if op == BinaryOp::AndAnd {
            "left operand of `&&`"
        } else {
            "left operand of `||`"
        };
        let left = self.eval_bool(left, context)?;
        match (op, left) {
            (BinaryOp::AndAnd, false) => Ok(Value::Bool(false)),
            (BinaryOp::OrOr, true) => Ok(Value::Bool(true)),
            _ => self.eval_expr(right),
        }
    }

    fn eval_unknown(&mut self, ty: Option<&TypeExpr>) -> EvalResult {
        match ty {
            Some(TypeExpr::Bits(width)) => {
                let width = self.eval_int(*width, "bits width")?;
                let width = u32::try_from(width)
                    .map_err(|_| EvalError::WidthOutOfRange { width })?;
                Bits::unknown(width).map(Value::Bits)
            }
            Some(TypeExpr::Bit) => Bits::unknown(1).map(Value::Bits),
            _ => Err(unsupported("UNKNOWN of a non-bits type")),
        }
    }

    /// Concatenate the selected bits left to right. Don't-care positions in
    /// `bits` carry through.
    fn eval_slice(&mut self, bits: Bits, terms: &[SliceTerm]) -> Result<Bits, EvalError> {
        let mut out = Bits::default();
        for term in terms {
            let (hi, lo) = match *term {
                SliceTerm::Single(index) => {
                    let index = self.eval_int(index, "bit index")?;
                    (index, index)
                }
                SliceTerm::Range { hi, lo } => {
                    let hi = self.eval_int(hi, "bit index")?;
                    let lo = self.eval_int(lo, "bit index")?;
                    if hi <= lo {
                        return Err(EvalError::InvertedRange { hi, lo });
                    }
                    (hi, lo)
                }
            };
            let hi = bit_position(hi, bits.width())?;
            let lo = bit_position(lo, bits.width())?;
            out = out.concat(&bits.slice(hi, lo))?;
        }
        Ok(out)
    }
}

/// Check `index` lies in `0..width`.
fn bit_position(index: i64, width: u32) -> Result<u32, EvalError> {
    u32::try_from(index)
        .ok()
        .filter(|&i| i < width)
        .ok_or(EvalError::BitIndexOutOfRange { index, width })
}
