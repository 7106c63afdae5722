//! Integration tests for end-to-end lexical analysis.
//!
//! These tests run complete multi-line programs through the public API and
//! check the resulting token stream, or the failure offset plus the partial
//! token stream when the source contains unknown lexemes.

use basic_lexer::lexer::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

#[test]
fn test_lex_simple_program() {
    let source = r#"Option Explicit
Dim count
Set count = 0
Print count ; "total"
"#
    .to_string();

    let tokens = tokenize(source).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Option,
            TokenKind::Explicit,
            TokenKind::Dim,
            TokenKind::Identifier,
            TokenKind::Set,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Number,
            TokenKind::Print,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::DoubleQuote,
            TokenKind::Identifier,
            TokenKind::DoubleQuote,
        ]
    );
    assert_eq!(tokens[3].text, "count");
    assert_eq!(tokens[12].text, "total");
}

#[test]
fn test_lex_for_each_loop() {
    let source = "For Each item In list\nNext".to_string();
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::For);
    assert_eq!(tokens[1].kind, TokenKind::Each);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].text, "item");
    // `In` is not part of the catalog and lexes as a plain identifier.
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].text, "In");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[5].kind, TokenKind::Next);
    assert_eq!(tokens.len(), 6);
}

#[test]
fn test_lex_expression_with_operators() {
    let source = "Set x = (a + b) * c \\ 2 Mod 7".to_string();
    let tokens = tokenize(source).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Set,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::OpeningBracket,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::ClosingBracket,
            TokenKind::Multiply,
            TokenKind::Identifier,
            TokenKind::IntegerDivide,
            TokenKind::Number,
            TokenKind::Mod,
            TokenKind::Number,
        ]
    );
}

#[test]
fn test_lex_error_reports_offset_and_remainder() {
    let source = "Dim x\nSet x = 1\nPrint x @ done\n".to_string();
    let mut lexer = Lexer::new(source.clone());

    let error = lexer.run().unwrap_err();
    assert_eq!(error.get_offset(), 24);
    assert_eq!(error.unparsed_remainder(&source), "@ done\n");

    // Everything before the failure is still available.
    let tokens = lexer.tokens();
    assert_eq!(tokens.len(), 8);
    assert_eq!(tokens[6].kind, TokenKind::Print);
    assert_eq!(tokens[7].kind, TokenKind::Identifier);
}

#[test]
fn test_lex_error_invalid_character() {
    let source = "Dim x = #".to_string();
    let result = tokenize(source);
    assert!(result.is_err(), "Should fail on invalid character");
}

#[test]
fn test_token_spans_cover_their_text() {
    let source = "Sub main ( ) Print 42 End".to_string();
    let tokens = tokenize(source.clone()).unwrap();

    for token in &tokens {
        assert_eq!(
            &source[token.offset..token.offset + token.length],
            token.text
        );
    }
}
