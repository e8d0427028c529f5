//! Expression parsing.
//!
//! Binary operators are parsed by precedence climbing over the levels of
//! [`BinaryOp::precedence`]: level 1 binds tightest, all levels are
//! left-associative. Below level 1 sit unary prefixes, then postfix
//! suffixes (`<...>`, `[...]`, `.name`), then primaries.

use armspec_diagnostic::{expected_expression, unclosed_delimiter};
use armspec_ir::{BinaryOp, ExprId, ExprKind, SliceTerm, TokenKind, TypeExpr, UnaryOp};
use armspec_stack::ensure_sufficient_stack;

use crate::{describe_found, ParseResult, Parser};

/// Binary operator spelled by `kind`, if any.
fn binary_op(kind: &TokenKind) -> Option<BinaryOp> {
    let op = match kind {
        TokenKind::EqEq => BinaryOp::Eq,
        TokenKind::NotEq => BinaryOp::NotEq,
        TokenKind::Lt => BinaryOp::Lt,
        TokenKind::LtEq => BinaryOp::LtEq,
        TokenKind::Gt => BinaryOp::Gt,
        TokenKind::GtEq => BinaryOp::GtEq,
        TokenKind::AndAnd => BinaryOp::AndAnd,
        TokenKind::OrOr => BinaryOp::OrOr,
        TokenKind::And => BinaryOp::BitAnd,
        TokenKind::Or => BinaryOp::BitOr,
        TokenKind::Eor => BinaryOp::Eor,
        TokenKind::Colon => BinaryOp::Concat,
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Sub,
        TokenKind::Star => BinaryOp::Mul,
        TokenKind::Slash => BinaryOp::Div,
        TokenKind::Div => BinaryOp::BigDiv,
        TokenKind::Mod => BinaryOp::BigMod,
        TokenKind::Shl => BinaryOp::Shl,
        TokenKind::Shr => BinaryOp::Shr,
        _ => return None,
    };
    Some(op)
}

impl Parser<'_> {
    /// Parse a full expression.
    pub(crate) fn parse_expr(&mut self) -> ParseResult<ExprId> {
        ensure_sufficient_stack(|| self.parse_binary(BinaryOp::LOWEST_PRECEDENCE))
    }

    /// One or more comma-separated expressions.
    pub(crate) fn parse_expr_list(&mut self) -> ParseResult<Vec<ExprId>> {
        let mut items = vec![self.parse_expr()?];
        while self.cursor.eat(&TokenKind::Comma) {
            items.push(self.parse_expr()?);
        }
        Ok(items)
    }

    /// Operators at `level` and tighter.
    fn parse_binary(&mut self, level: u8) -> ParseResult<ExprId> {
        if level == 0 {
            return self.parse_unary();
        }
        let mut left = self.parse_binary(level - 1)?;
        while let Some(op) = binary_op(self.current_kind()).filter(|op| op.precedence() == level) {
            self.cursor.advance();
            let right = self.parse_binary(level - 1)?;
            let span = self.arena.span(left).merge(self.arena.span(right));
            left = self.arena.alloc(ExprKind::Binary { op, left, right }, span);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> ParseResult<ExprId> {
        let op = match self.current_kind() {
            TokenKind::Bang => UnaryOp::Not,
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Plus => UnaryOp::Plus,
            TokenKind::TwoPow => UnaryOp::TwoPow,
            _ => return self.parse_postfix(),
        };
        let start = self.cursor.advance().span;
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        let span = start.merge(self.arena.span(operand));
        Ok(self.arena.alloc(ExprKind::Unary { op, operand }, span))
    }

    /// Primary followed by any number of `<...>`, `[...]` and `.name`
    /// suffixes.
    fn parse_postfix(&mut self) -> ParseResult<ExprId> {
        let mut base = self.parse_primary()?;
        loop {
            let start = self.arena.span(base);
            base = match self.current_kind() {
                TokenKind::LAngle => {
                    let terms = self.parse_slice_terms(&TokenKind::RAngle, '<')?;
                    let span = self.span_from(start);
                    self.arena.alloc(ExprKind::BitIndex { base, terms }, span)
                }
                TokenKind::LBracket => {
                    let terms = self.parse_slice_terms(&TokenKind::RBracket, '[')?;
                    let span = self.span_from(start);
                    self.arena.alloc(ExprKind::Index { base, terms }, span)
                }
                TokenKind::Dot => {
                    self.cursor.advance();
                    let field = self.expect_name()?;
                    let span = self.span_from(start);
                    self.arena.alloc(ExprKind::Dot { base, field }, span)
                }
                _ => return Ok(base),
            };
        }
    }

    /// `<t, hi:lo, ...>` or `[...]`. Each bound is an additive expression so
    /// the `:` separating `hi` and `lo` is not read as concatenation.
    fn parse_slice_terms(
        &mut self,
        close: &TokenKind,
        open_char: char,
    ) -> ParseResult<Vec<SliceTerm>> {
        let open = self.cursor.advance().span;
        let bound_level = BinaryOp::Concat.precedence() - 1;
        let mut terms = Vec::new();
        loop {
            let hi = self.parse_binary(bound_level)?;
            let term = if self.cursor.eat(&TokenKind::Colon) {
                let lo = self.parse_binary(bound_level)?;
                SliceTerm::Range { hi, lo }
            } else {
                SliceTerm::Single(hi)
            };
            terms.push(term);
            if !self.cursor.eat(&TokenKind::Comma) {
                break;
            }
        }
        if !self.cursor.eat(close) {
            return Err(unclosed_delimiter(open, self.current_span(), open_char));
        }
        Ok(terms)
    }

    fn parse_primary(&mut self) -> ParseResult<ExprId> {
        let start = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Int(n) => {
                self.cursor.advance();
                ExprKind::Int(*n)
            }
            TokenKind::Real(text) => {
                self.cursor.advance();
                ExprKind::Real(text.clone())
            }
            TokenKind::BitString(digits) => {
                self.cursor.advance();
                ExprKind::BitString(digits.clone())
            }
            TokenKind::Name(name) => {
                self.cursor.advance();
                match self.current_kind() {
                    // `SRType shift_t` declares a variable of a named type.
                    TokenKind::Name(var) if !self.in_case_patterns => {
                        self.cursor.advance();
                        ExprKind::Decl {
                            ty: TypeExpr::Named(name.clone()),
                            name: var.clone(),
                        }
                    }
                    _ => ExprKind::Name(name.clone()),
                }
            }
            TokenKind::NameParen(callee) => {
                self.cursor.advance();
                let args = if self.check(&TokenKind::RParen) {
                    Vec::new()
                } else {
                    self.parse_expr_list()?
                };
                if !self.cursor.eat(&TokenKind::RParen) {
                    return Err(unclosed_delimiter(start, self.current_span(), '('));
                }
                ExprKind::Call {
                    callee: callee.clone(),
                    args,
                }
            }
            TokenKind::LParen if self.type_follows_paren() => self.parse_typed_primary()?,
            TokenKind::LParen => self.parse_tuple()?,
            TokenKind::BitsParen | TokenKind::Bit | TokenKind::Integer | TokenKind::Boolean => {
                self.parse_typed_primary()?
            }
            TokenKind::Unknown => {
                self.cursor.advance();
                ExprKind::Unknown(None)
            }
            TokenKind::If => self.parse_conditional()?,
            // Already reported by the lexer.
            TokenKind::Error => {
                self.cursor.advance();
                ExprKind::Error
            }
            found => {
                return Err(expected_expression(
                    self.current_span(),
                    &describe_found(found),
                ))
            }
        };
        let span = self.span_from(start);
        Ok(self.arena.alloc(kind, span))
    }

    /// `(a, -, b)`. A single parenthesized expression is a one-element
    /// tuple; evaluation unwraps it.
    fn parse_tuple(&mut self) -> ParseResult<ExprKind> {
        let open = self.cursor.advance().span;
        let mut items = Vec::new();
        loop {
            let blank = self.check(&TokenKind::Minus)
                && matches!(
                    self.cursor.peek_next_kind(),
                    TokenKind::Comma | TokenKind::RParen
                );
            if blank {
                let span = self.cursor.advance().span;
                items.push(self.arena.alloc(ExprKind::Blank, span));
            } else {
                items.push(self.parse_expr()?);
            }
            if !self.cursor.eat(&TokenKind::Comma) {
                break;
            }
        }
        if !self.cursor.eat(&TokenKind::RParen) {
            return Err(unclosed_delimiter(open, self.current_span(), '('));
        }
        Ok(ExprKind::Tuple(items))
    }

    /// `if c then a else b` in expression position.
    fn parse_conditional(&mut self) -> ParseResult<ExprKind> {
        self.cursor.advance();
        let cond = self.parse_expr()?;
        self.expect(&TokenKind::Then)?;
        let then_val = self.parse_expr()?;
        self.expect(&TokenKind::Else)?;
        let else_val = self.parse_expr()?;
        Ok(ExprKind::IfElse {
            cond,
            then_val,
            else_val,
        })
    }

    /// A type followed by the declared name or `UNKNOWN`.
    fn parse_typed_primary(&mut self) -> ParseResult<ExprKind> {
        let ty = self.parse_type()?;
        if self.cursor.eat(&TokenKind::Unknown) {
            return Ok(ExprKind::Unknown(Some(ty)));
        }
        let name = self.expect_name()?;
        Ok(ExprKind::Decl { ty, name })
    }

    /// Whether `(` opens a tuple type rather than a tuple value.
    fn type_follows_paren(&self) -> bool {
        matches!(
            self.cursor.peek_next_kind(),
            TokenKind::BitsParen | TokenKind::Bit | TokenKind::Integer | TokenKind::Boolean
        )
    }
}
