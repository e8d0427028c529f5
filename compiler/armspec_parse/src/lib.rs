//! Recursive descent parser for ARM pseudocode.
//!
//! Produces a [`Program`]: an owned statement tree over a flat
//! [`ExprArena`]. Syntax errors are collected in a bounded
//! [`DiagnosticQueue`] shared with the lexer; the parser resynchronizes at
//! statement boundaries and keeps going until the error limit is reached.

mod cursor;
mod error;
mod grammar;
mod recovery;

use std::io::{self, Write};

use armspec_diagnostic::emitter::{render, LineEmitter};
use armspec_diagnostic::queue::{DiagnosticConfig, DiagnosticQueue};
use armspec_diagnostic::span_utils::LineOffsetTable;
use armspec_diagnostic::{unexpected_token, Diagnostic, ErrorCode};
use armspec_ir::{ExprArena, Program, Span, Stmt, StmtKind, TokenKind, TokenList};
use tracing::debug;

pub use cursor::Cursor;
pub use error::ParseFailure;

/// Parser state for one source unit.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
    queue: &'a mut DiagnosticQueue,
    table: &'a LineOffsetTable,
    /// Set while parsing `when` patterns, where `Name Name` is a pattern
    /// followed by a statement rather than a declaration.
    in_case_patterns: bool,
}

type ParseResult<T> = Result<T, Diagnostic>;

impl<'a> Parser<'a> {
    pub fn new(
        tokens: &'a TokenList,
        source_len: usize,
        queue: &'a mut DiagnosticQueue,
        table: &'a LineOffsetTable,
    ) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            arena: ExprArena::with_capacity(source_len),
            queue,
            table,
            in_case_patterns: false,
        }
    }

    /// Parse every top-level statement and hand back the program.
    pub fn parse_program(mut self) -> Program {
        let body = self.parse_stmt_list(|_| false);
        Program::new(self.arena, body)
    }

    /// Record a diagnostic against the shared queue.
    fn report(&mut self, diag: Diagnostic) {
        self.queue.add_with_table(diag, self.table);
    }

    fn current_kind(&self) -> &'a TokenKind {
        self.cursor.current_kind()
    }

    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    /// Consume a token of the given variant or fail with an
    /// unexpected-token diagnostic naming it.
    fn expect(&mut self, kind: &TokenKind) -> ParseResult<Span> {
        if self.check(kind) {
            Ok(self.cursor.advance().span)
        } else {
            Err(self.unexpected(kind.display_name()))
        }
    }

    /// Consume an identifier and return its text.
    fn expect_name(&mut self) -> ParseResult<String> {
        match self.current_kind() {
            TokenKind::Name(name) => {
                self.cursor.advance();
                Ok(name.clone())
            }
            found => Err(Diagnostic::error(ErrorCode::E1004)
                .with_message(format!(
                    "syntax error: expected identifier, found {}",
                    describe_found(found)
                ))
                .with_span(self.current_span())),
        }
    }

    fn unexpected(&self, expected: &str) -> Diagnostic {
        unexpected_token(self.current_span(), expected, &describe_found(self.current_kind()))
    }

    /// Span from `start` through the last consumed token.
    fn span_from(&self, start: Span) -> Span {
        start.merge(self.cursor.previous_span())
    }

    /// Allocate a statement spanning from `start` to the last consumed token.
    fn finish_stmt(&self, kind: StmtKind, start: Span) -> Stmt {
        Stmt::new(kind, self.span_from(start))
    }
}

/// Describe the offending token for diagnostics, including name text.
fn describe_found(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Name(name) | TokenKind::NameParen(name) => format!("'{name}'"),
        TokenKind::Int(n) => n.to_string(),
        other => other.display_name().to_string(),
    }
}

/// Parsed program plus every diagnostic the lexer and parser produced.
#[derive(Debug)]
pub struct ParseOutput {
    pub source_name: String,
    pub program: Program,
    /// Diagnostics paired with their 1-based line, in line order.
    pub diagnostics: Vec<(Diagnostic, u32)>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|(diag, _)| diag.is_error())
    }

    /// Diagnostics rendered as `file:line: message`.
    pub fn rendered(&self) -> Vec<String> {
        self.diagnostics
            .iter()
            .map(|(diag, line)| render(&self.source_name, *line, diag))
            .collect()
    }

    /// Write all diagnostics to `writer`.
    pub fn emit_diagnostics<W: Write>(&self, writer: W) -> io::Result<()> {
        LineEmitter::new(&self.source_name, writer).emit_all(&self.diagnostics)
    }

    /// The program, or a [`ParseFailure`] if any error was reported.
    pub fn into_result(self) -> Result<Program, ParseFailure> {
        if self.has_errors() {
            Err(ParseFailure {
                messages: self.rendered(),
                source_name: self.source_name,
            })
        } else {
            Ok(self.program)
        }
    }
}

/// Markup, tokenize and parse `text`, attributing diagnostics to
/// `source_name`.
pub fn parse(source_name: &str, text: &str) -> ParseOutput {
    parse_with_config(source_name, text, DiagnosticConfig::default())
}

/// [`parse`] with explicit diagnostic limits.
pub fn parse_with_config(source_name: &str, text: &str, config: DiagnosticConfig) -> ParseOutput {
    let marked = armspec_lexer::markup(text);
    let table = LineOffsetTable::build(&marked);
    let mut queue = DiagnosticQueue::with_config(config);

    let tokens = armspec_lexer::lex(&marked, &table, &mut queue);
    let program = if queue.limit_reached() {
        Program::default()
    } else {
        Parser::new(&tokens, marked.len(), &mut queue, &table).parse_program()
    };

    let diagnostics = queue.flush();
    debug!(
        source = source_name,
        tokens = tokens.len(),
        statements = program.body.len(),
        errors = diagnostics.len(),
        "parsed unit"
    );
    ParseOutput {
        source_name: source_name.to_string(),
        program,
        diagnostics,
    }
}

#[cfg(test)]
mod tests;
