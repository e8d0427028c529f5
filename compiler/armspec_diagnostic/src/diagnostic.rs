//! Core diagnostic type and the common constructors used by the lexer and
//! parser.

use std::fmt;

use armspec_ir::Span;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// A single reported problem.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Severity level.
    pub severity: Severity,
    /// Main error message.
    pub message: String,
    /// Where the problem was found, if anywhere in particular.
    pub span: Option<Span>,
    /// Additional notes providing context.
    pub notes: Vec<String>,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            span: None,
            notes: Vec::new(),
        }
    }

    /// Create a new error diagnostic.
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Error)
    }

    /// Create a new warning diagnostic.
    #[cold]
    pub fn warning(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Warning)
    }

    /// Set the main message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the primary location.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Add a note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Check if this is an error (vs warning/note).
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)
    }
}

/// No lexer pattern matches at `span`; `rest` is the unmatched input.
#[cold]
pub fn lexer_stuck(span: Span, rest: &str) -> Diagnostic {
    let prefix: String = rest.chars().take(10).collect();
    Diagnostic::error(ErrorCode::E0001)
        .with_message(format!("lexer stuck at {prefix:?}"))
        .with_span(span)
}

/// A `/*` comment runs to end of input.
#[cold]
pub fn unterminated_comment(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0003)
        .with_message("unterminated block comment")
        .with_span(span)
        .with_note("block comments close with `*/`")
}

/// Found a token the grammar does not allow here.
#[cold]
pub fn unexpected_token(span: Span, expected: &str, found: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001)
        .with_message(format!("syntax error: expected {expected}, found {found}"))
        .with_span(span)
}

/// An expression was required.
#[cold]
pub fn expected_expression(span: Span, found: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1002)
        .with_message(format!("syntax error: expected expression, found {found}"))
        .with_span(span)
}

/// An opening delimiter was never closed.
#[cold]
pub fn unclosed_delimiter(open_span: Span, found_span: Span, delim: char) -> Diagnostic {
    let closing = match delim {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        '<' => '>',
        '»' => '«',
        _ => delim,
    };
    Diagnostic::error(ErrorCode::E1003)
        .with_message(format!("syntax error: unclosed '{delim}', expected '{closing}'"))
        .with_span(found_span)
        .with_note(format!("'{delim}' opened at {open_span}"))
}

/// The error limit was hit and the unit was abandoned.
#[cold]
pub fn too_many_errors(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E9002)
        .with_message("too many errors")
        .with_span(span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder() {
        let diag = Diagnostic::error(ErrorCode::E1002)
            .with_message("missing")
            .with_span(Span::new(3, 4))
            .with_note("context");
        assert!(diag.is_error());
        assert_eq!(diag.span, Some(Span::new(3, 4)));
        assert_eq!(diag.notes, vec!["context".to_string()]);
        assert_eq!(diag.to_string(), "error [E1002]: missing");
    }

    #[test]
    fn test_lexer_stuck_truncates_to_ten_chars() {
        let diag = lexer_stuck(Span::new(0, 1), "@abcdefghijklmnop");
        assert_eq!(diag.message, "lexer stuck at \"@abcdefghi\"");
    }

    #[test]
    fn test_unclosed_delimiter_note() {
        let diag = unclosed_delimiter(Span::new(2, 3), Span::new(9, 10), '(');
        assert_eq!(diag.message, "syntax error: unclosed '(', expected ')'");
        assert_eq!(diag.notes, vec!["'(' opened at 2..3".to_string()]);
    }

    #[test]
    fn test_warning_is_not_error() {
        assert!(!Diagnostic::warning(ErrorCode::E1001).is_error());
    }
}
