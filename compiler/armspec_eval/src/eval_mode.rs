//! Evaluation policy.
//!
//! One [`EvalConfig`] is shared by every evaluation a checker runs; it
//! holds no per-call state.

/// How a name with no local binding and no builtin resolves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum NameResolution {
    /// The name becomes an inert `Symbol`, standing in for architecture
    /// state the interpreter does not model.
    #[default]
    Lenient,
    /// The name is an `UnresolvedName` defect.
    Strict,
}

impl NameResolution {
    #[inline]
    pub fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}

/// Evaluation settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EvalConfig {
    pub names: NameResolution,
    /// Cap on iterations of any single loop execution.
    pub max_loop_iterations: u32,
}

impl EvalConfig {
    pub const DEFAULT_MAX_LOOP_ITERATIONS: u32 = 1024;

    /// Default settings with strict name resolution.
    pub fn strict() -> Self {
        EvalConfig {
            names: NameResolution::Strict,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_max_loop_iterations(mut self, limit: u32) -> Self {
        self.max_loop_iterations = limit;
        self
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            names: NameResolution::Lenient,
            max_loop_iterations: Self::DEFAULT_MAX_LOOP_ITERATIONS,
        }
    }
}
