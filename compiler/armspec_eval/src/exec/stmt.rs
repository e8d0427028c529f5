//! Statement execution.

use armspec_ir::{BinaryOp, ExprId, ExprKind, Stmt, StmtKind, When};
use armspec_stack::ensure_sufficient_stack;

use super::{Interpreter, Outcome};
use crate::errors::{mistyped_case_comparison, unsupported};
use crate::operators::evaluate_binary;
use crate::{EvalError, Value};

/// Per-execution loop iteration counter.
struct LoopBudget {
    used: u32,
    limit: u32,
}

impl LoopBudget {
    fn new(limit: u32) -> Self {
        LoopBudget { used: 0, limit }
    }

    fn tick(&mut self) -> Result<(), EvalError> {
        if self.used >= self.limit {
            return Err(EvalError::LoopLimit { limit: self.limit });
        }
        self.used += 1;
        Ok(())
    }
}

impl Interpreter<'_> {
    /// Run statements in order, stopping at the first non-`Continue`
    /// outcome.
    pub fn exec_block(&mut self, stmts: &[Stmt]) -> Result<Outcome, EvalError> {
        for stmt in stmts {
            let outcome = self.exec_stmt(stmt)?;
            if !outcome.is_continue() {
                return Ok(outcome);
            }
        }
        Ok(Outcome::Continue)
    }

    pub fn exec_stmt(&mut self, stmt: &Stmt) -> Result<Outcome, EvalError> {
        ensure_sufficient_stack(|| self.exec_stmt_inner(stmt))
    }

    fn exec_stmt_inner(&mut self, stmt: &Stmt) -> Result<Outcome, EvalError> {
        match &stmt.kind {
            StmtKind::Assign { target, value } => {
                let value = self.eval_expr(*value)?;
                self.assign(*target, value)?;
                Ok(Outcome::Continue)
            }
            StmtKind::Expr(expr) | StmtKind::Assert(expr) => {
                self.eval_expr(*expr)?;
                Ok(Outcome::Continue)
            }
            StmtKind::Decl(_) | StmtKind::Enum { .. } => Ok(Outcome::Continue),
            StmtKind::Return(_) => Err(unsupported("return statement")),
            StmtKind::Undefined => Ok(Outcome::Undefined),
            StmtKind::See(_) => Ok(Outcome::SeeOther),
            StmtKind::Unpredictable | StmtKind::ImplDefined(_) | StmtKind::SubarchDefined(_) => {
                Ok(Outcome::Stop)
            }
            StmtKind::If {
                cond,
                then_body,
                elsifs,
                else_body,
            } => {
                if self.eval_bool(*cond, "if condition")? {
                    return self.exec_stmt(then_body);
                }
                for elsif in elsifs {
                    if self.eval_bool(elsif.cond, "elsif condition")? {
                        return self.exec_stmt(&elsif.body);
                    }
                }
                match else_body {
                    Some(body) => self.exec_stmt(body),
                    None => Ok(Outcome::Continue),
                }
            }
            StmtKind::Repeat { body, until } => {
                let mut budget = LoopBudget::new(self.config.max_loop_iterations);
                loop {
                    budget.tick()?;
                    let outcome = self.exec_stmt(body)?;
                    if !outcome.is_continue() {
                        return Ok(outcome);
                    }
                    if self.eval_bool(*until, "until condition")? {
                        return Ok(Outcome::Continue);
                    }
                }
            }
            StmtKind::While { cond, body } => {
                let mut budget = LoopBudget::new(self.config.max_loop_iterations);
                while self.eval_bool(*cond, "while condition")? {
                    budget.tick()?;
                    let outcome = self.exec_stmt(body)?;
                    if !outcome.is_continue() {
                        return Ok(outcome);
                    }
                }
                Ok(Outcome::Continue)
            }
            StmtKind::For {
                var,
                from,
                to,
                body,
            } => {
                let from = self.eval_int(*from, "for loop bound")?;
                let to = self.eval_int(*to, "for loop bound")?;
                let mut budget = LoopBudget::new(self.config.max_loop_iterations);
                for i in from..=to {
                    budget.tick()?;
                    self.env.bind(var.as_str(), Value::Int(i));
                    let outcome = self.exec_stmt(body)?;
                    if !outcome.is_continue() {
                        return Ok(outcome);
                    }
                }
                Ok(Outcome::Continue)
            }
            StmtKind::Case {
                selector,
                whens,
                otherwise,
            } => {
                let selector = self.eval_expr(*selector)?;
                if let Some(body) = self.select_arm(&selector, whens)? {
                    return self.exec_stmt(body);
                }
                match otherwise {
                    Some(body) => self.exec_stmt(body),
                    None => Ok(Outcome::Continue),
                }
            }
            StmtKind::Block(stmts) => self.exec_block(stmts),
            StmtKind::Error => Err(unsupported("malformed statement")),
        }
    }

    /// First arm with a pattern equal to the selector.
    fn select_arm<'w>(
        &mut self,
        selector: &Value,
        whens: &'w [When],
    ) -> Result<Option<&'w Stmt>, EvalError> {
        for when in whens {
            for &pattern in &when.patterns {
                let pattern = self.eval_expr(pattern)?;
                if !selector.same_variant(&pattern) {
                    return Err(mistyped_case_comparison(selector, &pattern));
                }
                if evaluate_binary(selector, &pattern, BinaryOp::Eq)? == Value::Bool(true) {
                    return Ok(Some(&when.body));
                }
            }
        }
        Ok(None)
    }

    /// Bind `value` to an assignment target.
    fn assign(&mut self, target: ExprId, value: Value) -> Result<(), EvalError> {
        match self.arena.kind(target) {
            ExprKind::Name(name) | ExprKind::Decl { name, .. } => {
                self.env.bind(name.as_str(), value);
                Ok(())
            }
            ExprKind::Tuple(slots) if slots.len() == 1 => self.assign(slots[0], value),
            ExprKind::Tuple(slots) => {
                let values = match value {
                    Value::Tuple(values) => values,
                    other => {
                        return Err(EvalError::NotATuple {
                            type_name: other.type_name(),
                        })
                    }
                };
                if slots.len() != values.len() {
                    return Err(EvalError::TupleArity {
                        targets: slots.len(),
                        values: values.len(),
                    });
                }
                for (&slot, value) in slots.iter().zip(values) {
                    if !matches!(self.arena.kind(slot), ExprKind::Blank) {
                        self.assign(slot, value)?;
                    }
                }
                Ok(())
            }
            other => Err(EvalError::InvalidAssignTarget {
                target: other.describe(),
            }),
        }
    }
}
