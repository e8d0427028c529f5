//! Tree-walking execution of pseudocode bodies.
//!
//! - `stmt`: statements, control flow and assignment
//! - `expr`: expressions, calls and bit slicing
//!
//! Every statement yields an [`Outcome`]. Sentinel outcomes travel back up
//! through blocks, branches and loops as ordinary values; only defects use
//! `Err`.

mod expr;
mod stmt;

use armspec_ir::{ExprArena, Program};
use tracing::trace;

use crate::{EvalConfig, EvalError, Environment};

/// Result of executing a statement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Fall through to the next statement.
    Continue,
    /// `SEE`: the encoding belongs to another instruction.
    SeeOther,
    /// `UNDEFINED`.
    Undefined,
    /// `UNPREDICTABLE`, `IMPLEMENTATION_DEFINED` or
    /// `SUBARCHITECTURE_DEFINED`: reachable, behavior unspecified.
    Stop,
}

impl Outcome {
    #[inline]
    pub fn is_continue(self) -> bool {
        matches!(self, Outcome::Continue)
    }
}

/// Evaluator over one program's arena and one environment.
pub struct Interpreter<'a> {
    arena: &'a ExprArena,
    env: &'a mut Environment,
    config: &'a EvalConfig,
}

impl<'a> Interpreter<'a> {
    pub fn new(arena: &'a ExprArena, env: &'a mut Environment, config: &'a EvalConfig) -> Self {
        Interpreter { arena, env, config }
    }
}

/// Execute a program body against `env`.
#[tracing::instrument(level = "trace", skip_all, fields(stmts = program.body.len()))]
pub fn run(
    program: &Program,
    env: &mut Environment,
    config: &EvalConfig,
) -> Result<Outcome, EvalError> {
    let outcome = Interpreter::new(&program.arena, env, config).exec_block(&program.body)?;
    if !outcome.is_continue() {
        trace!(?outcome, "sentinel outcome");
    }
    Ok(outcome)
}
