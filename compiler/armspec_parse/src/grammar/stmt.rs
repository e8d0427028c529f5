//! Statement parsing.
//!
//! Blocks are either a single statement or a `»`...`«` run produced by the
//! markup pass. `case` arms may also hold an unbracketed run of statements
//! that ends at the next `when`, `otherwise` or `«`.

use armspec_diagnostic::unclosed_delimiter;
use armspec_ir::{ElseIf, ExprId, ExprKind, Stmt, StmtKind, TokenKind, When};
use armspec_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseResult, Parser};

impl Parser<'_> {
    /// Parse statements until `until` accepts the current token, the input
    /// ends, or the error limit is hit. Failed statements are reported and
    /// skipped.
    pub(crate) fn parse_stmt_list(&mut self, until: impl Fn(&TokenKind) -> bool) -> Vec<Stmt> {
        let mut stmts = Vec::new();
        while !self.cursor.is_at_end()
            && !until(self.current_kind())
            && !self.queue.limit_reached()
        {
            let start = self.cursor.position();
            match self.parse_statement() {
                Ok(stmt) => stmts.push(stmt),
                Err(diag) => {
                    trace!(message = %diag.message, "statement failed, recovering");
                    self.report(diag);
                    self.synchronize(start);
                }
            }
        }
        stmts
    }

    pub(crate) fn parse_statement(&mut self) -> ParseResult<Stmt> {
        ensure_sufficient_stack(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> ParseResult<Stmt> {
        let start = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Indent => return self.parse_indented_block(),
            TokenKind::Unindent => return Err(self.unexpected("statement")),
            TokenKind::Undefined => self.terminal(StmtKind::Undefined)?,
            TokenKind::Unpredictable => self.terminal(StmtKind::Unpredictable)?,
            TokenKind::See(text) => self.terminal(StmtKind::See(text.clone()))?,
            TokenKind::ImplDefined(text) => self.terminal(StmtKind::ImplDefined(text.clone()))?,
            TokenKind::SubarchDefined(text) => {
                self.terminal(StmtKind::SubarchDefined(text.clone()))?
            }
            TokenKind::Return => self.parse_return()?,
            TokenKind::If => self.parse_if()?,
            TokenKind::Repeat => self.parse_repeat()?,
            TokenKind::While => self.parse_while()?,
            TokenKind::For => self.parse_for()?,
            TokenKind::Case => self.parse_case()?,
            TokenKind::Assert => {
                self.cursor.advance();
                let cond = self.parse_expr()?;
                self.expect(&TokenKind::Semicolon)?;
                StmtKind::Assert(cond)
            }
            TokenKind::Enumeration => self.parse_enumeration()?,
            _ => self.parse_simple_statement()?,
        };
        Ok(self.finish_stmt(kind, start))
    }

    /// Keyword statement with no operands: `UNDEFINED;`, `SEE text;`.
    fn terminal(&mut self, kind: StmtKind) -> ParseResult<StmtKind> {
        self.cursor.advance();
        self.expect(&TokenKind::Semicolon)?;
        Ok(kind)
    }

    /// `expr;`, `decl;` or `target = value;`
    fn parse_simple_statement(&mut self) -> ParseResult<StmtKind> {
        let target = self.parse_expr()?;
        if self.cursor.eat(&TokenKind::Assign) {
            let value = self.parse_expr()?;
            self.expect(&TokenKind::Semicolon)?;
            return Ok(StmtKind::Assign { target, value });
        }
        self.expect(&TokenKind::Semicolon)?;
        if matches!(self.arena.kind(target), ExprKind::Decl { .. }) {
            Ok(StmtKind::Decl(target))
        } else {
            Ok(StmtKind::Expr(target))
        }
    }

    fn parse_return(&mut self) -> ParseResult<StmtKind> {
        self.cursor.advance();
        let mut values = Vec::new();
        if !self.check(&TokenKind::Semicolon) {
            values.push(self.parse_expr()?);
            while self.cursor.eat(&TokenKind::Comma) {
                values.push(self.parse_expr()?);
            }
        }
        self.expect(&TokenKind::Semicolon)?;
        Ok(StmtKind::Return(values))
    }

    /// `if c then body {elsif c then body} [else body]`
    fn parse_if(&mut self) -> ParseResult<StmtKind> {
        self.cursor.advance();
        let cond = self.parse_expr()?;
        self.expect(&TokenKind::Then)?;
        let then_body = Box::new(self.parse_body()?);

        let mut elsifs = Vec::new();
        while self.cursor.eat(&TokenKind::Elsif) {
            let cond = self.parse_expr()?;
            self.expect(&TokenKind::Then)?;
            let body = self.parse_body()?;
            elsifs.push(ElseIf { cond, body });
        }

        let else_body = if self.cursor.eat(&TokenKind::Else) {
            Some(Box::new(self.parse_body()?))
        } else {
            None
        };

        Ok(StmtKind::If {
            cond,
            then_body,
            elsifs,
            else_body,
        })
    }

    fn parse_repeat(&mut self) -> ParseResult<StmtKind> {
        self.cursor.advance();
        let body = Box::new(self.parse_body()?);
        self.expect(&TokenKind::Until)?;
        let until = self.parse_expr()?;
        self.expect(&TokenKind::Semicolon)?;
        Ok(StmtKind::Repeat { body, until })
    }

    fn parse_while(&mut self) -> ParseResult<StmtKind> {
        self.cursor.advance();
        let cond = self.parse_expr()?;
        self.expect(&TokenKind::Do)?;
        let body = Box::new(self.parse_body()?);
        Ok(StmtKind::While { cond, body })
    }

    /// `for i = from to to do body`
    fn parse_for(&mut self) -> ParseResult<StmtKind> {
        self.cursor.advance();
        let var = self.expect_name()?;
        self.expect(&TokenKind::Assign)?;
        let from = self.parse_expr()?;
        self.expect(&TokenKind::To)?;
        let to = self.parse_expr()?;
        self.expect(&TokenKind::Do)?;
        let body = Box::new(self.parse_body()?);
        Ok(StmtKind::For {
            var,
            from,
            to,
            body,
        })
    }

    /// `case selector of » {when patterns body} [otherwise body] «`
    fn parse_case(&mut self) -> ParseResult<StmtKind> {
        self.cursor.advance();
        let selector = self.parse_expr()?;
        self.expect(&TokenKind::Of)?;
        let open = self.expect(&TokenKind::Indent)?;

        let mut whens = Vec::new();
        let mut otherwise = None;
        loop {
            match self.current_kind() {
                TokenKind::When => {
                    self.cursor.advance();
                    let patterns = self.parse_when_patterns()?;
                    let body = self.parse_arm_body()?;
                    whens.push(When { patterns, body });
                }
                TokenKind::Otherwise => {
                    self.cursor.advance();
                    otherwise = Some(Box::new(self.parse_arm_body()?));
                }
                TokenKind::Unindent => {
                    self.cursor.advance();
                    break;
                }
                TokenKind::Eof => {
                    return Err(unclosed_delimiter(open, self.current_span(), '»'));
                }
                _ => return Err(self.unexpected("when, otherwise or end of case")),
            }
        }

        Ok(StmtKind::Case {
            selector,
            whens,
            otherwise,
        })
    }

    fn parse_when_patterns(&mut self) -> ParseResult<Vec<ExprId>> {
        self.in_case_patterns = true;
        let result = self.parse_expr_list();
        self.in_case_patterns = false;
        result
    }

    /// Arm body: an indented block, or the statements up to the next arm.
    fn parse_arm_body(&mut self) -> ParseResult<Stmt> {
        if self.check(&TokenKind::Indent) {
            return self.parse_indented_block();
        }
        let start = self.current_span();
        let stmts = self.parse_stmt_list(|kind| {
            matches!(
                kind,
                TokenKind::When | TokenKind::Otherwise | TokenKind::Unindent
            )
        });
        Ok(self.finish_stmt(StmtKind::Block(stmts), start))
    }

    /// `enumeration Name { A, B, C };`
    fn parse_enumeration(&mut self) -> ParseResult<StmtKind> {
        self.cursor.advance();
        let name = self.expect_name()?;
        let open = self.expect(&TokenKind::LBrace)?;
        let mut values = Vec::new();
        if !self.check(&TokenKind::RBrace) {
            values.push(self.expect_name()?);
            while self.cursor.eat(&TokenKind::Comma) {
                values.push(self.expect_name()?);
            }
        }
        if !self.cursor.eat(&TokenKind::RBrace) {
            return Err(unclosed_delimiter(open, self.current_span(), '{'));
        }
        self.cursor.eat(&TokenKind::Semicolon);
        Ok(StmtKind::Enum { name, values })
    }

    /// Body of a compound statement: a block or a single statement.
    fn parse_body(&mut self) -> ParseResult<Stmt> {
        if self.check(&TokenKind::Indent) {
            self.parse_indented_block()
        } else {
            self.parse_statement()
        }
    }

    /// `» statement* «`
    fn parse_indented_block(&mut self) -> ParseResult<Stmt> {
        let open = self.expect(&TokenKind::Indent)?;
        let stmts = self.parse_stmt_list(|kind| matches!(kind, TokenKind::Unindent));
        if !self.cursor.eat(&TokenKind::Unindent) && !self.queue.limit_reached() {
            return Err(unclosed_delimiter(open, self.current_span(), '»'));
        }
        Ok(self.finish_stmt(StmtKind::Block(stmts), open))
    }
}
