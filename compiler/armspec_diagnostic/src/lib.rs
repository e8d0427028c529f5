//! Diagnostic system for the pseudocode front end.
//!
//! Every lexical or syntax problem becomes a [`Diagnostic`] with:
//! - an error code for searchability
//! - a message saying what went wrong
//! - a primary span saying where
//!
//! Diagnostics are collected in a bounded [`DiagnosticQueue`](queue::DiagnosticQueue)
//! shared by the lexer and parser of one unit, and rendered in the classic
//! `file:line: message` form by [`emitter`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;
pub mod span_utils;

pub use diagnostic::{
    expected_expression, lexer_stuck, too_many_errors, unclosed_delimiter, unexpected_token,
    unterminated_comment, Diagnostic, Severity,
};
pub use error_code::ErrorCode;
