use super::*;
use armspec_diagnostic::queue::DiagnosticConfig;
use pretty_assertions::assert_eq;
use TokenKind as T;

fn lex_with(source: &str, queue: &mut DiagnosticQueue) -> Vec<TokenKind> {
    let marked = markup(source);
    let table = LineOffsetTable::build(&marked);
    lex(&marked, &table, queue).kinds()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    let mut queue = DiagnosticQueue::new();
    let kinds = lex_with(source, &mut queue);
    assert!(!queue.has_errors(), "unexpected lexical errors in {source:?}");
    kinds
}

fn name(s: &str) -> TokenKind {
    T::Name(s.to_string())
}

#[test]
fn test_lex_if_condition() {
    assert_eq!(
        kinds("if x == '1' then"),
        vec![
            T::If,
            name("x"),
            T::EqEq,
            T::BitString("1".into()),
            T::Then,
            T::Eof
        ]
    );
}

#[test]
fn test_spaced_angle_is_relational() {
    assert_eq!(kinds("a < b"), vec![name("a"), T::Lt, name("b"), T::Eof]);
    assert_eq!(kinds("a > b"), vec![name("a"), T::Gt, name("b"), T::Eof]);
    assert_eq!(kinds("a <= b"), vec![name("a"), T::LtEq, name("b"), T::Eof]);
    assert_eq!(kinds("a>=b"), vec![name("a"), T::GtEq, name("b"), T::Eof]);
    assert_eq!(kinds("n >> 1"), vec![name("n"), T::Shr, T::Int(1), T::Eof]);
    assert_eq!(kinds("n<<1"), vec![name("n"), T::Shl, T::Int(1), T::Eof]);
}

#[test]
fn test_unspaced_angle_is_slice_bracket() {
    assert_eq!(
        kinds("imm<3:0>"),
        vec![
            name("imm"),
            T::LAngle,
            T::Int(3),
            T::Colon,
            T::Int(0),
            T::RAngle,
            T::Eof
        ]
    );
}

#[test]
fn test_bit_string_literals() {
    assert_eq!(kinds("‘1 0x’"), vec![T::BitString("10x".into()), T::Eof]);
    assert_eq!(kinds("’0000’"), vec![T::BitString("0000".into()), T::Eof]);
    assert_eq!(kinds("'11'"), vec![T::BitString("11".into()), T::Eof]);
}

#[test]
fn test_text_carrying_statements() {
    assert_eq!(
        kinds("SEE ADD (register);"),
        vec![T::See("ADD (register)".into()), T::Semicolon, T::Eof]
    );
    assert_eq!(
        kinds("IMPLEMENTATION_DEFINED;"),
        vec![T::ImplDefined(String::new()), T::Semicolon, T::Eof]
    );
    assert_eq!(
        kinds("SUBARCHITECTURE_DEFINED shadow;"),
        vec![T::SubarchDefined("shadow".into()), T::Semicolon, T::Eof]
    );
}

#[test]
fn test_calls_and_type_keywords() {
    assert_eq!(
        kinds("UInt(imm4)"),
        vec![T::NameParen("UInt".into()), name("imm4"), T::RParen, T::Eof]
    );
    assert_eq!(
        kinds("bits(32) x"),
        vec![T::BitsParen, T::Int(32), T::RParen, name("x"), T::Eof]
    );
    assert_eq!(kinds("bit b"), vec![T::Bit, name("b"), T::Eof]);
    assert_eq!(kinds("bitsy"), vec![name("bitsy"), T::Eof]);
    assert_eq!(kinds("iffy"), vec![name("iffy"), T::Eof]);
}

#[test]
fn test_numerals() {
    assert_eq!(kinds("0xFF"), vec![T::Int(255), T::Eof]);
    assert_eq!(kinds("2^n"), vec![T::TwoPow, name("n"), T::Eof]);
    assert_eq!(kinds("1.5"), vec![T::Real("1.5".into()), T::Eof]);
    assert_eq!(kinds("x.y"), vec![name("x"), T::Dot, name("y"), T::Eof]);
}

#[test]
fn test_word_operators() {
    assert_eq!(
        kinds("a AND b EOR c DIV 2 MOD 3"),
        vec![
            name("a"),
            T::And,
            name("b"),
            T::Eor,
            name("c"),
            T::Div,
            T::Int(2),
            T::Mod,
            T::Int(3),
            T::Eof
        ]
    );
}

#[test]
fn test_comments_skipped() {
    assert_eq!(
        kinds("x = 1; /* block\ncomment */ // tail"),
        vec![name("x"), T::Assign, T::Int(1), T::Semicolon, T::Eof]
    );
}

#[test]
fn test_block_comment_between_tokens() {
    assert_eq!(
        kinds("x /* c */ = 1 /**/ + /* ** */ 2;"),
        vec![
            name("x"),
            T::Assign,
            T::Int(1),
            T::Plus,
            T::Int(2),
            T::Semicolon,
            T::Eof
        ]
    );
    assert_eq!(kinds("/* a */"), vec![T::Eof]);
}

#[test]
fn test_block_comment_inside_indented_body() {
    assert_eq!(
        kinds("if c then\n\tx = 1; /* note\nmore */\n\ty = 2;"),
        vec![
            T::If,
            name("c"),
            T::Then,
            T::Indent,
            name("x"),
            T::Assign,
            T::Int(1),
            T::Semicolon,
            name("y"),
            T::Assign,
            T::Int(2),
            T::Semicolon,
            T::Unindent,
            T::Eof
        ]
    );
}

#[test]
fn test_unterminated_block_comment() {
    let mut queue = DiagnosticQueue::new();
    let tokens = lex_with("x = 1;\n/* never closed\ny = 2;", &mut queue);
    assert_eq!(
        tokens,
        vec![name("x"), T::Assign, T::Int(1), T::Semicolon, T::Error, T::Eof]
    );
    assert_eq!(queue.error_count(), 1);

    let (diag, line) = &queue.flush()[0];
    assert_eq!(diag.code, ErrorCode::E0003);
    assert_eq!(diag.message, "unterminated block comment");
    assert_eq!(*line, 2);
}

#[test]
fn test_indentation_markers() {
    assert_eq!(
        kinds("if c then\n\tx = 1;"),
        vec![
            T::If,
            name("c"),
            T::Then,
            T::Indent,
            name("x"),
            T::Assign,
            T::Int(1),
            T::Semicolon,
            T::Unindent,
            T::Eof
        ]
    );
}

#[test]
fn test_two_level_dedent_two_unindents() {
    let tokens = kinds("if a then\n\tif b then\n\t\tx = 1;\ny = 2;");
    let unindents = tokens.iter().filter(|t| **t == T::Unindent).count();
    let indents = tokens.iter().filter(|t| **t == T::Indent).count();
    assert_eq!(indents, 2);
    assert_eq!(unindents, 2);
}

#[test]
fn test_unmatched_input_reports_and_continues() {
    let mut queue = DiagnosticQueue::new();
    let tokens = lex_with("x = @;", &mut queue);
    assert!(tokens.contains(&T::Error));
    assert_eq!(&tokens[tokens.len() - 2..], &[T::Semicolon, T::Eof]);
    assert_eq!(queue.error_count(), 1);

    let (diag, line) = &queue.flush()[0];
    assert_eq!(diag.code, ErrorCode::E0001);
    assert!(diag.message.starts_with("lexer stuck at \"@"));
    assert_eq!(*line, 1);
}

#[test]
fn test_error_line_numbers_follow_source() {
    let mut queue = DiagnosticQueue::new();
    lex_with("x = 1;\n\ny = $;", &mut queue);
    let (_, line) = &queue.flush()[0];
    assert_eq!(*line, 3);
}

#[test]
fn test_oversized_numeral() {
    let mut queue = DiagnosticQueue::new();
    lex_with("99999999999999999999", &mut queue);
    let (diag, _) = &queue.flush()[0];
    assert_eq!(diag.code, ErrorCode::E0002);
}

#[test]
fn test_error_limit_stops_lexing() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::default());
    let source = "@\n".repeat(25);
    let tokens = lex_with(&source, &mut queue);
    let errors = tokens.iter().filter(|t| **t == T::Error).count();
    assert_eq!(errors, 20);
    assert!(queue.limit_reached());
    assert_eq!(tokens.last(), Some(&T::Eof));
}
