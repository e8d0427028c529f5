//! Parse failure reported to callers that need a whole program.

use thiserror::Error;

/// A source unit had syntax errors.
///
/// Carries the rendered `file:line: message` lines so the caller can report
/// them without holding on to the diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "{source_name}: {count} syntax error(s)\n{lines}",
    count = .messages.len(),
    lines = .messages.join("\n")
)]
pub struct ParseFailure {
    pub source_name: String,
    pub messages: Vec<String>,
}
