//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.

use std::mem::discriminant;

use armspec_ir::{Span, Token, TokenKind, TokenList};

/// Cursor for navigating tokens.
///
/// Tracks the current position in the token stream. The last token is
/// always [`TokenKind::Eof`], and the cursor never moves past it.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Current position, used for progress tracking during recovery.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &'a Token {
        debug_assert!(
            self.pos < self.tokens.len(),
            "cursor position out of bounds"
        );
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the most recently consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    /// Check if at end of token stream.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check if the current token has the same variant as `kind`. Payloads
    /// are ignored, so `check(&TokenKind::Name(String::new()))` matches any
    /// name.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        discriminant(self.current_kind()) == discriminant(kind)
    }

    /// Kind of the token after the current one; `Eof` past the end.
    pub fn peek_next_kind(&self) -> &'a TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(self.eof_kind(), |token| &token.kind)
    }

    fn eof_kind(&self) -> &'a TokenKind {
        &self.tokens[self.tokens.len() - 1].kind
    }

    /// Consume the current token and return it. At `Eof` the cursor stays
    /// put.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }
}
