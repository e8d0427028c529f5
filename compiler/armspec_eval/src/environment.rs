//! Name bindings for one evaluation.
//!
//! Pseudocode bodies have a single flat scope: assignments anywhere in the
//! body bind in the same map. An `Environment` is created per check and
//! dropped with it.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::builtins::builtin;
use crate::{EvalError, NameResolution, Value};

/// Local bindings layered over the builtin table.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    locals: FxHashMap<String, Value>,
    names: NameResolution,
}

impl Environment {
    pub fn new(names: NameResolution) -> Self {
        Environment {
            locals: FxHashMap::default(),
            names,
        }
    }

    /// Bind or rebind a local.
    pub fn bind(&mut self, name: impl Into<String>, value: Value) {
        self.locals.insert(name.into(), value);
    }

    /// Bind a template field. A field seen again with different contents
    /// becomes [`Value::Inconsistent`], and stays so for the rest of the
    /// binding pass.
    pub fn bind_field(&mut self, name: &str, value: Value) {
        match self.locals.get_mut(name) {
            Some(Value::Inconsistent) => {}
            Some(old) if *old != value => {
                trace!(field = name, first = %old, second = %value, "inconsistent field");
                *old = Value::Inconsistent;
            }
            Some(_) => {}
            None => {
                self.locals.insert(name.to_string(), value);
            }
        }
    }

    /// Local binding only.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.locals.get(name)
    }

    /// Resolve a name: locals, then builtins, then the resolution policy.
    pub fn lookup(&self, name: &str) -> Result<Value, EvalError> {
        if let Some(value) = self.locals.get(name).or_else(|| builtin(name)) {
            return Ok(value.clone());
        }
        if self.names.is_strict() {
            Err(EvalError::UnresolvedName {
                name: name.to_string(),
            })
        } else {
            Ok(Value::Symbol(name.to_string()))
        }
    }

    /// Number of local bindings.
    pub fn len(&self) -> usize {
        self.locals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locals.is_empty()
    }
}
