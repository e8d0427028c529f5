//! Raw Token Definition
//!
//! The logos-derived tokenizer output before conversion to
//! [`TokenKind`](armspec_ir::TokenKind). Logos keeps the longest match at
//! each position; on a tie a literal `#[token]` outranks a `#[regex]`, which
//! is what lets `if` beat the identifier pattern and `bits(` beat the call
//! pattern.

use logos::{FilterResult, Lexer, Logos};

/// Raw token from logos.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
pub(crate) enum RawToken {
    #[token("»")]
    Indent,
    #[token("«")]
    Unindent,
    #[token("/*", block_comment)]
    BlockComment,

    // Text-carrying statements
    #[regex(r"SEE [^;]+", |lex| trailing_text(lex, "SEE"))]
    See(String),
    #[regex(r"IMPLEMENTATION_DEFINED( [^;]+)?", |lex| trailing_text(lex, "IMPLEMENTATION_DEFINED"))]
    ImplDefined(String),
    #[regex(r"SUBARCHITECTURE_DEFINED( [^;]+)?", |lex| trailing_text(lex, "SUBARCHITECTURE_DEFINED"))]
    SubarchDefined(String),

    // Keywords
    #[token("return")]
    Return,
    #[token("UNDEFINED")]
    Undefined,
    #[token("UNPREDICTABLE")]
    Unpredictable,
    #[token("if")]
    If,
    #[token("then")]
    Then,
    #[token("elsif")]
    Elsif,
    #[token("else")]
    Else,
    #[token("repeat")]
    Repeat,
    #[token("until")]
    Until,
    #[token("while")]
    While,
    #[token("do")]
    Do,
    #[token("for")]
    For,
    #[token("to")]
    To,
    #[token("case")]
    Case,
    #[token("of")]
    Of,
    #[token("when")]
    When,
    #[token("otherwise")]
    Otherwise,
    #[token("enumeration")]
    Enumeration,
    #[token("assert")]
    Assert,
    #[token("UNKNOWN")]
    Unknown,
    #[token("integer")]
    Integer,
    #[token("boolean")]
    Boolean,
    #[token("bit")]
    Bit,
    #[token("bits(")]
    BitsParen,

    // Word operators
    #[token("DIV")]
    Div,
    #[token("MOD")]
    Mod,
    #[token("AND")]
    And,
    #[token("OR")]
    Or,
    #[token("EOR")]
    Eor,

    // Relational `<`/`>` need a leading space; bare ones are slice brackets.
    #[token(" <")]
    Lt,
    #[token(" >")]
    Gt,
    #[token("<=")]
    #[token(" <=")]
    LtEq,
    #[token(">=")]
    #[token(" >=")]
    GtEq,
    #[token("<<")]
    #[token(" <<")]
    Shl,
    #[token(">>")]
    #[token(" >>")]
    Shr,
    #[token("<")]
    LAngle,
    #[token(">")]
    RAngle,

    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("2^")]
    TwoPow,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Dot,
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("!")]
    Bang,

    // Literals
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Int(i64),
    #[regex(r"0x[0-9A-Fa-f]+", |lex| i64::from_str_radix(&lex.slice()[2..], 16).ok())]
    HexInt(i64),
    #[regex(r"[0-9]+\.[0-9]+", |lex| lex.slice().to_string())]
    Real(String),
    #[regex(r"[‘’'][ 01x]+[’']", bit_digits)]
    BitString(String),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Name(String),
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*\(", |lex| {
        let s = lex.slice();
        s[..s.len() - 1].to_string()
    })]
    NameParen(String),
}

/// Skip past the closing `*/`. An unclosed comment swallows the rest of
/// the input and surfaces as a lexical error.
fn block_comment(lex: &mut Lexer<'_, RawToken>) -> FilterResult<(), ()> {
    if let Some(end) = lex.remainder().find("*/") {
        lex.bump(end + 2);
        FilterResult::Skip
    } else {
        lex.bump(lex.remainder().len());
        FilterResult::Error(())
    }
}

/// Text following a statement keyword, trimmed.
fn trailing_text(lex: &mut Lexer<'_, RawToken>, keyword: &str) -> String {
    lex.slice()[keyword.len()..].trim().to_string()
}

/// Bit-string digits with quotes and spaces removed.
fn bit_digits(lex: &mut Lexer<'_, RawToken>) -> String {
    lex.slice()
        .chars()
        .filter(|c| matches!(c, '0' | '1' | 'x'))
        .collect()
}
