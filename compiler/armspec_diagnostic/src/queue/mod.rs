//! Diagnostic queue for collecting, deduplicating, and bounding diagnostics.
//!
//! Features:
//! - Error limit: once reached, a single "too many errors" diagnostic is
//!   appended and everything after it is dropped
//! - Deduplication of same-line syntax errors produced during recovery

use armspec_ir::Span;

use crate::span_utils::LineOffsetTable;
use crate::{too_many_errors, Diagnostic};

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors before the unit is abandoned (0 = unlimited).
    pub error_limit: usize,
    /// Keep only the first syntax error reported on any one line.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 20,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

/// Queued diagnostic with its line for sorting.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
struct QueuedDiagnostic {
    diagnostic: Diagnostic,
    line: u32,
}

/// Queue shared by the lexer and parser of one unit.
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// queue.add(diagnostic, line);
/// if queue.limit_reached() { /* stop */ }
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<QueuedDiagnostic>,
    /// Count of errors (not warnings/notes).
    error_count: usize,
    /// Last line with a syntax error (for dedup).
    last_syntax_line: Option<u32>,
    /// Set once the error limit has been hit.
    limit_hit: bool,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        DiagnosticQueue::default()
    }

    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..DiagnosticQueue::default()
        }
    }

    /// Add a diagnostic reported on `line` (1-based).
    ///
    /// Returns `true` if the diagnostic was added, `false` if it was filtered
    /// or the limit had already been reached.
    pub fn add(&mut self, diag: Diagnostic, line: u32) -> bool {
        if self.limit_hit {
            return false;
        }

        let is_error = diag.is_error();
        let is_syntax = diag.code.is_parser_error();

        if self.config.deduplicate && is_syntax && self.last_syntax_line == Some(line) {
            return false;
        }
        if is_syntax {
            self.last_syntax_line = Some(line);
        }

        let span = diag.span.unwrap_or(Span::DUMMY);
        self.diagnostics.push(QueuedDiagnostic {
            diagnostic: diag,
            line,
        });

        if is_error {
            self.error_count += 1;
            if self.config.error_limit > 0 && self.error_count >= self.config.error_limit {
                self.limit_hit = true;
                self.diagnostics.push(QueuedDiagnostic {
                    diagnostic: too_many_errors(span),
                    line,
                });
            }
        }

        true
    }

    /// Add a diagnostic, computing its line from the span.
    pub fn add_with_table(&mut self, diag: Diagnostic, table: &LineOffsetTable) -> bool {
        let line = diag.span.map_or(1, |span| table.line_from_offset(span.start));
        self.add(diag, line)
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.limit_hit
    }

    /// Get the number of errors collected (the limit marker excluded).
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Check if any error was recorded.
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Number of queued diagnostics of any severity.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Sort diagnostics by line and return them with their lines.
    ///
    /// Clears the queue. The sort is stable, so diagnostics reported on the
    /// same line keep their reporting order and the limit marker stays last.
    pub fn flush(&mut self) -> Vec<(Diagnostic, u32)> {
        let mut queued = std::mem::take(&mut self.diagnostics);
        if self.limit_hit {
            // The marker always stays last, whatever line it carries.
            let marker = queued.pop();
            queued.sort_by_key(|d| d.line);
            queued.extend(marker);
        } else {
            queued.sort_by_key(|d| d.line);
        }

        self.error_count = 0;
        self.last_syntax_line = None;
        self.limit_hit = false;

        queued.into_iter().map(|q| (q.diagnostic, q.line)).collect()
    }
}
