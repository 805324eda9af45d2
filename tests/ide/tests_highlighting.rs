//! Highlighting tests for the IDE layer.

use crate::helpers::lexer_helpers::*;
use crate::helpers::source_fixtures::*;
use nlang::ide::{HighlightOptions, SyntaxHighlighter, TextStyle};
use nlang::parser::TokenKind;

// =============================================================================
// HIGHLIGHTING - RANGES
// =============================================================================

#[test]
fn test_highlight_spans_tile_the_range() {
    let spans = SyntaxHighlighter::default()
        .highlight_range(FUNCTION, full_range(FUNCTION))
        .unwrap();

    let mut cursor = 0u32;
    for span in &spans {
        assert_eq!(u32::from(span.range.start()), cursor);
        cursor = span.range.end().into();
    }
    assert_eq!(cursor as usize, FUNCTION.len());
}

#[test]
fn test_function_highlights() {
    let spans = SyntaxHighlighter::default()
        .highlight_range(FUNCTION, full_range(FUNCTION))
        .unwrap();

    let styled: Vec<_> = spans
        .iter()
        .filter(|span| span.kind != TokenKind::SPACE && span.kind != TokenKind::NEWLINE)
        .map(|span| (&FUNCTION[span.range], span.style))
        .collect();

    assert_eq!(styled[0], ("fn", TextStyle::Keyword));
    assert_eq!(styled[1], ("greet", TextStyle::Identifier));
    assert_eq!(styled[2], ("(", TextStyle::Parentheses));
    assert!(styled.contains(&("// say hello\n", TextStyle::BlockComment)));
    assert!(styled.contains(&("\"hello, \"", TextStyle::String)));
    assert!(styled.contains(&("return", TextStyle::Keyword)));
    assert!(styled.contains(&(";", TextStyle::Semicolon)));
    // Operators have no dedicated style.
    assert!(styled.contains(&("+", TextStyle::PredefinedSymbol)));
}

#[test]
fn test_malformed_input_is_bad_character() {
    let spans = SyntaxHighlighter::default()
        .highlight_range(MALFORMED, full_range(MALFORMED))
        .unwrap();
    let bad: Vec<_> = spans
        .iter()
        .filter(|s| s.style == TextStyle::BadCharacter)
        .map(|s| &MALFORMED[s.range])
        .collect();
    assert_eq!(bad, vec!["\"", "$"]);
}

#[test]
fn test_highlight_subrange() {
    // Only `x = 42` of `let x = 42;`
    let spans = SyntaxHighlighter::default()
        .highlight_range(SIMPLE_LET, range(4, 10))
        .unwrap();
    let kinds: Vec<_> = spans.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::IDENTIFIER,
            TokenKind::SPACE,
            TokenKind::ASSIGN,
            TokenKind::SPACE,
            TokenKind::NUMBER,
        ]
    );
    assert_eq!(spans.last().unwrap().range, range(8, 10));
}

// =============================================================================
// HIGHLIGHTING - OPTIONS
// =============================================================================

#[test]
fn test_custom_fallback_applies_to_unknown_labels() {
    let highlighter =
        SyntaxHighlighter::new(HighlightOptions::default().with_fallback(TextStyle::Identifier));
    assert_eq!(highlighter.highlight_label("MYSTERY"), TextStyle::Identifier);
    assert_eq!(highlighter.highlight_label("STRING"), TextStyle::String);
}

#[test]
fn test_highlighting_lexer_is_fresh() {
    let highlighter = SyntaxHighlighter::default();
    let lexer = highlighter.highlighting_lexer();
    assert_eq!(lexer.current_token(), None);
    assert_eq!(lexer.boundaries().count(), 0);
}
