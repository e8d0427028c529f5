//! Lexer for ARM pseudocode using logos.
//!
//! Two stages:
//! 1. [`markup`] fixes known transcription typos and turns tab indentation
//!    into explicit block markers.
//! 2. [`lex`] tokenizes the marked-up text into a [`TokenList`], reporting
//!    unmatched input to the shared [`DiagnosticQueue`] and continuing.

mod markup;
mod raw_token;

use armspec_diagnostic::queue::DiagnosticQueue;
use armspec_diagnostic::span_utils::LineOffsetTable;
use armspec_diagnostic::{lexer_stuck, unterminated_comment, Diagnostic, ErrorCode};
use armspec_ir::{Span, Token, TokenKind, TokenList};
use logos::Logos;
use tracing::debug;

pub use markup::{markup, INDENT, UNINDENT};
use raw_token::RawToken;

/// Tokenize marked-up pseudocode.
///
/// Lexical errors become [`TokenKind::Error`] tokens plus a diagnostic; the
/// lexer skips the offending input and keeps going until the queue's error
/// limit is reached. The list always ends with [`TokenKind::Eof`].
pub fn lex(source: &str, table: &LineOffsetTable, queue: &mut DiagnosticQueue) -> TokenList {
    let mut result = TokenList::with_capacity(source.len() / 3);
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());

        match token_result {
            Ok(raw) => result.push(Token::new(convert_token(raw), span)),
            Err(()) => {
                let rest = source.get(logos.span().start..).unwrap_or_default();
                let diag = lex_error(span, logos.slice(), rest);
                debug!(%span, message = %diag.message, "lexical error");
                queue.add_with_table(diag, table);
                result.push(Token::new(TokenKind::Error, span));
                if queue.limit_reached() {
                    break;
                }
            }
        }
    }

    let eof = u32::try_from(source.len()).unwrap_or(u32::MAX);
    result.push(Token::new(TokenKind::Eof, Span::point(eof)));
    result
}

/// Classify a failed match: an unclosed block comment, a numeral that
/// overflowed its callback, or input no pattern accepts.
fn lex_error(span: Span, slice: &str, rest: &str) -> Diagnostic {
    if slice.starts_with("/*") {
        unterminated_comment(span)
    } else if slice.starts_with(|c: char| c.is_ascii_digit()) {
        Diagnostic::error(ErrorCode::E0002)
            .with_message(format!("numeral {slice} does not fit a 64-bit integer"))
            .with_span(span)
    } else {
        lexer_stuck(span, rest)
    }
}

fn convert_token(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::Indent => TokenKind::Indent,
        RawToken::Unindent => TokenKind::Unindent,
        // The callback only skips or errors.
        RawToken::BlockComment => TokenKind::Error,

        RawToken::See(text) => TokenKind::See(text),
        RawToken::ImplDefined(text) => TokenKind::ImplDefined(text),
        RawToken::SubarchDefined(text) => TokenKind::SubarchDefined(text),

        RawToken::Return => TokenKind::Return,
        RawToken::Undefined => TokenKind::Undefined,
        RawToken::Unpredictable => TokenKind::Unpredictable,
        RawToken::If => TokenKind::If,
        RawToken::Then => TokenKind::Then,
        RawToken::Elsif => TokenKind::Elsif,
        RawToken::Else => TokenKind::Else,
        RawToken::Repeat => TokenKind::Repeat,
        RawToken::Until => TokenKind::Until,
        RawToken::While => TokenKind::While,
        RawToken::Do => TokenKind::Do,
        RawToken::For => TokenKind::For,
        RawToken::To => TokenKind::To,
        RawToken::Case => TokenKind::Case,
        RawToken::Of => TokenKind::Of,
        RawToken::When => TokenKind::When,
        RawToken::Otherwise => TokenKind::Otherwise,
        RawToken::Enumeration => TokenKind::Enumeration,
        RawToken::Assert => TokenKind::Assert,
        RawToken::Unknown => TokenKind::Unknown,
        RawToken::Integer => TokenKind::Integer,
        RawToken::Boolean => TokenKind::Boolean,
        RawToken::Bit => TokenKind::Bit,
        RawToken::BitsParen => TokenKind::BitsParen,

        RawToken::Div => TokenKind::Div,
        RawToken::Mod => TokenKind::Mod,
        RawToken::And => TokenKind::And,
        RawToken::Or => TokenKind::Or,
        RawToken::Eor => TokenKind::Eor,

        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Shl => TokenKind::Shl,
        RawToken::Shr => TokenKind::Shr,
        RawToken::LAngle => TokenKind::LAngle,
        RawToken::RAngle => TokenKind::RAngle,

        RawToken::AndAnd => TokenKind::AndAnd,
        RawToken::OrOr => TokenKind::OrOr,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::TwoPow => TokenKind::TwoPow,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Assign => TokenKind::Assign,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Amp => TokenKind::Amp,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::Caret => TokenKind::Caret,
        RawToken::Bang => TokenKind::Bang,

        RawToken::Int(n) | RawToken::HexInt(n) => TokenKind::Int(n),
        RawToken::Real(text) => TokenKind::Real(text),
        RawToken::BitString(digits) => TokenKind::BitString(digits),
        RawToken::Name(name) => TokenKind::Name(name),
        RawToken::NameParen(name) => TokenKind::NameParen(name),
    }
}

#[cfg(test)]
mod tests;
