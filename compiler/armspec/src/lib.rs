//! armspec - ARM pseudocode interpreter and encoding validity checker.
//!
//! Decode pseudocode is parsed once into a [`Program`] and paired with a
//! 32-bit field layout to form a [`Template`]. [`is_valid`] decides whether
//! a candidate word is a valid encoding of the template by binding its
//! fields and running the body:
//!
//! | Body outcome | [`Verdict`] | valid |
//! |---|---|---|
//! | runs to completion | `Valid` | yes |
//! | `UNPREDICTABLE`, `IMPLEMENTATION_DEFINED`, `SUBARCHITECTURE_DEFINED` | `Unspecified` | yes |
//! | `SEE ...` | `SeeOther` | no |
//! | `UNDEFINED` | `Undefined` | no |
//! | literal layout bit mismatch | `NotApplicable` | no |
//!
//! A body the interpreter cannot give meaning to yields an [`EvalError`];
//! [`Checker::check_batch`] reports such defects per template.

mod checker;
mod template;

use std::sync::Once;

use tracing_subscriber::util::TryInitError;

pub use armspec_diagnostic::queue::DiagnosticConfig;
pub use armspec_diagnostic::{Diagnostic, ErrorCode};
pub use armspec_eval::{
    Bits, EvalConfig, EvalError, Environment, NameResolution, Outcome, Value,
};
pub use armspec_ir::Program;
pub use armspec_parse::{parse, parse_with_config, ParseFailure, ParseOutput};
pub use checker::{BatchReport, Checker, Defect, TemplateReport, Verdict};
pub use template::{FieldSpec, LoadError, Template, TemplateError, WORD_BITS};

/// Whether `word` is a valid encoding of `template`, under the default
/// [`EvalConfig`].
pub fn is_valid(template: &Template, word: u32) -> Result<bool, EvalError> {
    Checker::default().is_valid(template, word)
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=armspec_parse=trace`. Only the first call installs anything;
/// later calls return `Ok(())`. Fails if another global subscriber is
/// already in place.
pub fn init_tracing() -> Result<(), TryInitError> {
    let mut result = Ok(());
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            result = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
    result
}
