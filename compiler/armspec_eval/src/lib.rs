//! armspec Eval - value model and tree-walking evaluator for ARM pseudocode.
//!
//! # Architecture
//!
//! - [`Value`]: closed runtime union (`Bool`, `Int`, `Bits`, `Tuple`,
//!   `Symbol`, `Func`, `Inconsistent`)
//! - [`evaluate_binary`] / [`evaluate_unary`]: enum-based operator dispatch;
//!   a variant without an operator is a typed defect, never a coercion
//! - [`builtins`]: the process-wide builtin table
//! - [`Environment`]: one flat scope per evaluation, layered over builtins
//! - [`run`]: executes a [`Program`](armspec_ir::Program) body to an
//!   [`Outcome`]
//!
//! Sentinel statements (`SEE`, `UNDEFINED`, `UNPREDICTABLE`, ...) are
//! [`Outcome`]s. Anything the interpreter cannot give a meaning to is an
//! [`EvalError`].

mod bits;
mod builtins;
mod environment;
pub mod errors;
mod eval_mode;
pub mod exec;
mod operators;
mod unary_operators;
mod value;

pub use bits::Bits;
pub use builtins::{builtin, builtins};
pub use environment::Environment;
pub use errors::{
    binary_type_mismatch, division_by_zero, integer_overflow, missing_capability,
    mistyped_case_comparison, not_bool, not_callable, not_integer, unsupported, width_mismatch,
    width_out_of_range, wrong_arg_count, wrong_arg_type, EvalError, EvalResult,
};
pub use eval_mode::{EvalConfig, NameResolution};
pub use exec::{run, Interpreter, Outcome};
pub use operators::evaluate_binary;
pub use unary_operators::evaluate_unary;
pub use value::{BuiltinFn, FunctionValue, Value};

#[cfg(test)]
mod tests;
