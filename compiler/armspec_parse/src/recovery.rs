//! Error recovery for the parser.
//!
//! After a syntax error the parser skips ahead to a point where a fresh
//! statement can begin: just past a `;`, or at a block marker or statement
//! keyword. Block markers are left in place so the enclosing block parser
//! still sees its closing `«`.

use armspec_ir::TokenKind;
use tracing::trace;

use crate::Parser;

impl Parser<'_> {
    /// Skip to the next statement boundary. Always consumes at least one
    /// token when the failed statement consumed none, so recovery cannot
    /// loop.
    pub(crate) fn synchronize(&mut self, start: usize) {
        let skipped_from = self.cursor.current_span();
        if self.cursor.position() == start && !self.cursor.is_at_end() {
            let at_boundary = matches!(
                self.current_kind(),
                TokenKind::Semicolon | TokenKind::Indent | TokenKind::Unindent
            );
            self.cursor.advance();
            if at_boundary {
                return;
            }
        }

        loop {
            match self.current_kind() {
                TokenKind::Eof | TokenKind::Indent | TokenKind::Unindent => break,
                TokenKind::Semicolon => {
                    self.cursor.advance();
                    break;
                }
                kind if kind.starts_statement() => break,
                _ => {
                    self.cursor.advance();
                }
            }
        }
        trace!(from = %skipped_from, to = %self.cursor.current_span(), "resynchronized");
    }
}
