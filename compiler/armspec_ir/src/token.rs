//! Token types for the pseudocode lexer.

use std::fmt;
use std::ops::Index;

use crate::Span;

/// A token with its source span.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Token kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Layout markers injected by markup
    Indent,
    Unindent,

    // Literals
    Int(i64),
    Real(String),
    BitString(String),
    Name(String),
    /// Identifier immediately followed by `(`; holds the identifier only.
    NameParen(String),

    // Text-carrying statements
    See(String),
    ImplDefined(String),
    SubarchDefined(String),

    // Keywords
    Return,
    Undefined,
    Unpredictable,
    If,
    Then,
    Elsif,
    Else,
    Repeat,
    Until,
    While,
    Do,
    For,
    To,
    Case,
    Of,
    When,
    Otherwise,
    Enumeration,
    Assert,
    Unknown,
    Integer,
    Boolean,
    Bit,
    /// `bits(`
    BitsParen,

    // Word operators
    Div,
    Mod,
    And,
    Or,
    Eor,

    // Symbol operators
    AndAnd,
    OrOr,
    EqEq,
    NotEq,
    /// Relational `<` (written with a leading space).
    Lt,
    LtEq,
    /// Relational `>` (written with a leading space).
    Gt,
    GtEq,
    Shl,
    Shr,
    /// `2^`
    TwoPow,
    /// Bit-slice opening `<`.
    LAngle,
    /// Bit-slice closing `>`.
    RAngle,
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Colon,
    Semicolon,
    Dot,
    Assign,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Amp,
    Pipe,
    Caret,
    Bang,

    /// Lexical error placeholder.
    Error,
    Eof,
}

impl TokenKind {
    /// Human-readable token description for diagnostics.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Indent => "indent",
            TokenKind::Unindent => "unindent",
            TokenKind::Int(_) | TokenKind::Real(_) => "number",
            TokenKind::BitString(_) => "bit string",
            TokenKind::Name(_) => "identifier",
            TokenKind::NameParen(_) => "call",
            TokenKind::See(_) => "SEE",
            TokenKind::ImplDefined(_) => "IMPLEMENTATION_DEFINED",
            TokenKind::SubarchDefined(_) => "SUBARCHITECTURE_DEFINED",
            TokenKind::Return => "return",
            TokenKind::Undefined => "UNDEFINED",
            TokenKind::Unpredictable => "UNPREDICTABLE",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Elsif => "elsif",
            TokenKind::Else => "else",
            TokenKind::Repeat => "repeat",
            TokenKind::Until => "until",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::For => "for",
            TokenKind::To => "to",
            TokenKind::Case => "case",
            TokenKind::Of => "of",
            TokenKind::When => "when",
            TokenKind::Otherwise => "otherwise",
            TokenKind::Enumeration => "enumeration",
            TokenKind::Assert => "assert",
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::Integer => "integer",
            TokenKind::Boolean => "boolean",
            TokenKind::Bit => "bit",
            TokenKind::BitsParen => "bits(",
            TokenKind::Div => "DIV",
            TokenKind::Mod => "MOD",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Eor => "EOR",
            TokenKind::AndAnd => "&&",
            TokenKind::OrOr => "||",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt | TokenKind::LAngle => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt | TokenKind::RAngle => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Shl => "<<",
            TokenKind::Shr => ">>",
            TokenKind::TwoPow => "2^",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Dot => ".",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Amp => "&",
            TokenKind::Pipe => "|",
            TokenKind::Caret => "^",
            TokenKind::Bang => "!",
            TokenKind::Error => "invalid token",
            TokenKind::Eof => "end of input",
        }
    }

    /// Whether this token opens a statement (used for error recovery).
    pub fn starts_statement(&self) -> bool {
        matches!(
            self,
            TokenKind::Return
                | TokenKind::Undefined
                | TokenKind::Unpredictable
                | TokenKind::See(_)
                | TokenKind::ImplDefined(_)
                | TokenKind::SubarchDefined(_)
                | TokenKind::If
                | TokenKind::Repeat
                | TokenKind::While
                | TokenKind::For
                | TokenKind::Case
                | TokenKind::Assert
                | TokenKind::Enumeration
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int(n) => write!(f, "{n}"),
            TokenKind::Real(s) | TokenKind::Name(s) => write!(f, "{s}"),
            TokenKind::BitString(s) => write!(f, "'{s}'"),
            TokenKind::NameParen(s) => write!(f, "{s}("),
            TokenKind::See(s) => write!(f, "SEE {s}"),
            _ => write!(f, "{}", self.display_name()),
        }
    }
}

/// Token stream produced by the lexer, always terminated by `Eof`.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Create a new empty token list.
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    /// Create a new token list with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Token kinds only, without spans.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind.clone()).collect()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
