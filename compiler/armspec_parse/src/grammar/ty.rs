//! Type parsing for declarations.

use armspec_diagnostic::{unclosed_delimiter, Diagnostic, ErrorCode};
use armspec_ir::{TokenKind, TypeExpr};

use crate::{describe_found, ParseResult, Parser};

impl Parser<'_> {
    /// `bits(N)`, `bit`, `integer`, `boolean`, a named type, or a
    /// parenthesized tuple of types.
    pub(crate) fn parse_type(&mut self) -> ParseResult<TypeExpr> {
        let start = self.current_span();
        let ty = match self.current_kind() {
            TokenKind::BitsParen => {
                self.cursor.advance();
                let width = self.parse_expr()?;
                if !self.cursor.eat(&TokenKind::RParen) {
                    return Err(unclosed_delimiter(start, self.current_span(), '('));
                }
                return Ok(TypeExpr::Bits(width));
            }
            TokenKind::Bit => TypeExpr::Bit,
            TokenKind::Integer => TypeExpr::Integer,
            TokenKind::Boolean => TypeExpr::Bool,
            TokenKind::Name(name) => TypeExpr::Named(name.clone()),
            TokenKind::LParen => {
                self.cursor.advance();
                let mut items = vec![self.parse_type()?];
                while self.cursor.eat(&TokenKind::Comma) {
                    items.push(self.parse_type()?);
                }
                if !self.cursor.eat(&TokenKind::RParen) {
                    return Err(unclosed_delimiter(start, self.current_span(), '('));
                }
                return Ok(TypeExpr::Tuple(items));
            }
            found => {
                return Err(Diagnostic::error(ErrorCode::E1005)
                    .with_message(format!(
                        "syntax error: expected type, found {}",
                        describe_found(found)
                    ))
                    .with_span(start))
            }
        };
        self.cursor.advance();
        Ok(ty)
    }
}
