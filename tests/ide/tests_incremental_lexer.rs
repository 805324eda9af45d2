//! Incremental lexer tests: cursor protocol, region isolation, coverage.

use std::cell::Cell;

use crate::helpers::lexer_helpers::*;
use crate::helpers::source_fixtures::*;
use nlang::base::{TextRange, TextSize};
use nlang::ide::{IncrementalLexer, TokenSpan};
use nlang::parser::{NlangTokenizer, TokenKind, TokenMap, Tokenizer};
use proptest::prelude::*;
use rstest::rstest;

fn nlang_lexer<'a>() -> IncrementalLexer<'a, NlangTokenizer> {
    IncrementalLexer::default()
}

fn boundaries_in<T: Tokenizer>(
    lexer: &IncrementalLexer<'_, T>,
    region: TextRange,
) -> Vec<(TextSize, T::Kind)> {
    lexer
        .boundaries()
        .filter(|(offset, _)| region.contains(*offset))
        .collect()
}

/// Counts how often the wrapped tokenizer runs.
#[derive(Default)]
struct CountingTokenizer {
    calls: Cell<usize>,
}

impl Tokenizer for CountingTokenizer {
    type Kind = TokenKind;

    fn tokenize(&self, text: &str, range: TextRange) -> TokenMap<TokenKind> {
        self.calls.set(self.calls.get() + 1);
        NlangTokenizer.tokenize(text, range)
    }
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_quoted_run_scenario() {
    let mut lexer = nlang_lexer();
    lexer.reset(QUOTED_RUN, full_range(QUOTED_RUN)).unwrap();

    let tokens: Vec<_> = drain(&mut lexer)
        .into_iter()
        .map(|t| (t.kind, &QUOTED_RUN[t.range]))
        .collect();

    assert_eq!(
        tokens,
        vec![
            (TokenKind::IDENTIFIER, "kek"),
            (TokenKind::SPACE, " "),
            (TokenKind::IDENTIFIER, "лул"),
            (TokenKind::SPACE, " "),
            (TokenKind::STRING, "\"asdfas\""),
            (TokenKind::STRING, "\"\""),
            (TokenKind::STRING, "\"\""),
            (TokenKind::SPACE, " "),
            (TokenKind::IDENTIFIER, "kek"),
        ]
    );
    assert_eq!(lexer.current_token(), None);
}

#[test]
fn test_first_token_span() {
    let mut lexer = nlang_lexer();
    lexer.reset(QUOTED_RUN, full_range(QUOTED_RUN)).unwrap();
    assert_eq!(
        lexer.current_token(),
        Some(TokenSpan {
            kind: TokenKind::IDENTIFIER,
            range: range(0, 3),
        })
    );
}

#[test]
fn test_empty_range_scenario() {
    let mut lexer = nlang_lexer();
    lexer.reset(FUNCTION, range(5, 5)).unwrap();
    assert_eq!(lexer.current_token(), None);
    lexer.advance();
    assert_eq!(lexer.token_start(), TextSize::new(5));
}

#[test]
fn test_malformed_input_highlights_as_invalid() {
    let mut lexer = nlang_lexer();
    lexer.reset(MALFORMED, full_range(MALFORMED)).unwrap();
    let tokens = drain(&mut lexer);
    assert_tiles(&tokens, full_range(MALFORMED));

    // Only the stray quote and `$` are bad; lexing resumes after each.
    let invalid: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::INVALID)
        .map(|t| &MALFORMED[t.range])
        .collect();
    assert_eq!(invalid, vec!["\"", "$"]);
    assert_eq!(tokens[7].kind, TokenKind::IDENTIFIER);
    assert_eq!(&MALFORMED[tokens[7].range], "unterminated");
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::SEMICOLON));
}

// =============================================================================
// CURSOR PROTOCOL
// =============================================================================

#[test]
fn test_advance_is_idempotent_at_end() {
    let mut lexer = nlang_lexer();
    lexer.reset(SIMPLE_LET, full_range(SIMPLE_LET)).unwrap();
    drain(&mut lexer);

    let end = lexer.token_start();
    for _ in 0..5 {
        lexer.advance();
        assert_eq!(lexer.current_token(), None);
        assert_eq!(lexer.token_start(), end);
    }
}

#[test]
fn test_position_round_trip() {
    let mut lexer = nlang_lexer();
    lexer.reset(CONTROL_FLOW, full_range(CONTROL_FLOW)).unwrap();

    let mut seen = Vec::new();
    while let Some(token) = lexer.current_token() {
        seen.push((lexer.save_position(), token));
        lexer.advance();
    }
    assert!(seen.len() > 10);

    for (position, token) in seen.iter().rev() {
        lexer.restore(*position);
        assert_eq!(lexer.current_token(), Some(*token));
        assert_eq!(lexer.token_start(), position.offset());
    }
}

#[test]
fn test_restore_then_continue_iteration() {
    let mut lexer = nlang_lexer();
    lexer.reset(FUNCTION, full_range(FUNCTION)).unwrap();
    let all = drain(&mut lexer);

    lexer.reset(FUNCTION, full_range(FUNCTION)).unwrap();
    lexer.advance();
    lexer.advance();
    let saved = lexer.save_position();
    drain(&mut lexer);

    lexer.restore(saved);
    assert_eq!(drain(&mut lexer), all[2..].to_vec());
}

#[test]
fn test_token_end_uses_physical_end() {
    let text = "a b";
    let mut lexer = nlang_lexer();
    lexer.reset(text, full_range(text)).unwrap();
    lexer.advance();
    lexer.advance();
    assert_eq!(lexer.token_end(), TextSize::new(3));
    assert_eq!(lexer.buffer_end(), TextSize::new(3));
}

// =============================================================================
// REGIONS
// =============================================================================

#[test]
fn test_reset_tokenizes_once() {
    let mut lexer = IncrementalLexer::new(CountingTokenizer::default());
    lexer.reset(FUNCTION, full_range(FUNCTION)).unwrap();
    lexer.reset(FUNCTION, range(0, 2)).unwrap();
    lexer.reset(FUNCTION, range(2, 2)).unwrap();
    assert_eq!(lexer.tokenizer().calls.get(), 3);
}

#[test]
fn test_reset_isolates_regions() {
    let text = "let a = 1; let b = 2; let c = 3;";
    let mut lexer = nlang_lexer();
    lexer.reset(text, range(0, 10)).unwrap();
    let first = boundaries_in(&lexer, range(0, 10));

    lexer.reset(text, range(10, 20)).unwrap();
    assert_eq!(boundaries_in(&lexer, range(0, 10)), first);
    assert_eq!(drain(&mut lexer).first().map(|t| t.range.start()), Some(TextSize::new(10)));
}

#[test]
fn test_reset_overwrites() {
    let before = "aaaaaaaaaa;";
    let after = "if (x) {};;";
    let mut lexer = nlang_lexer();
    lexer.reset(before, range(0, 10)).unwrap();
    lexer.reset(after, range(0, 10)).unwrap();

    let mut fresh = nlang_lexer();
    fresh.reset(after, range(0, 10)).unwrap();

    assert_eq!(
        boundaries_in(&lexer, range(0, 10)),
        boundaries_in(&fresh, range(0, 10))
    );
    assert_eq!(drain(&mut lexer), drain(&mut fresh));
}

#[test]
fn test_split_resets_match_full_tokenization() {
    let text = "let a = 1; let b = 2;";
    let mut split = nlang_lexer();
    split.reset(text, range(0, 10)).unwrap();
    split.reset(text, range(10, 21)).unwrap();

    let mut whole = nlang_lexer();
    whole.reset(text, full_range(text)).unwrap();

    let split: Vec<_> = split.boundaries().collect();
    let whole: Vec<_> = whole.boundaries().collect();
    assert_eq!(split, whole);
}

#[test]
fn test_edit_relexes_only_changed_region() {
    let v1 = "let a = 1; let b = 2;";
    let v2 = "let a = 1; let bb = 22;";
    let mut lexer = IncrementalLexer::new(CountingTokenizer::default());
    lexer.reset(v1, full_range(v1)).unwrap();
    lexer.reset(v2, TextRange::new(TextSize::new(10), TextSize::of(v2))).unwrap();

    let mut fresh = nlang_lexer();
    fresh.reset(v2, full_range(v2)).unwrap();

    let merged: Vec<_> = lexer.boundaries().collect();
    let expected: Vec<_> = fresh.boundaries().collect();
    assert_eq!(merged, expected);
    assert_eq!(lexer.tokenizer().calls.get(), 2);
}

#[rstest]
#[case(0, 3)]
#[case(1, 4)]
#[case(4, 10)]
#[case(11, 23)]
#[case(12, 20)]
#[case(0, 27)]
fn test_subrange_tiles_after_full_pass(#[case] start: u32, #[case] end: u32) {
    let mut lexer = nlang_lexer();
    lexer.reset(QUOTED_RUN, full_range(QUOTED_RUN)).unwrap();
    lexer.reset(QUOTED_RUN, range(start, end)).unwrap();
    assert_tiles(&drain(&mut lexer), range(start, end));
}

#[test]
fn test_errors_are_reported() {
    let mut lexer = nlang_lexer();
    assert!(lexer.reset(QUOTED_RUN, range(0, 100)).is_err());
    // Inside the two-byte `л`.
    assert!(lexer.reset(QUOTED_RUN, range(5, 10)).is_err());
    assert!(lexer.reset(QUOTED_RUN, range(4, 5)).is_err());
    assert_eq!(lexer.current_token(), None);
}

// =============================================================================
// COVERAGE
// =============================================================================

#[rstest]
#[case(QUOTED_RUN)]
#[case(SIMPLE_LET)]
#[case(FUNCTION)]
#[case(MALFORMED)]
fn test_every_range_tiles(#[case] buffer: &str) {
    let offsets = char_boundaries(buffer);
    for (i, &start) in offsets.iter().enumerate() {
        for &end in &offsets[i..] {
            let mut lexer = nlang_lexer();
            lexer.reset(buffer, range(start, end)).unwrap();
            assert_tiles(&drain(&mut lexer), range(start, end));
        }
    }
}

fn source_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just("let"),
            Just("x"),
            Just("лул"),
            Just(" "),
            Just("\n"),
            Just("\""),
            Just("'"),
            Just("\\"),
            Just("//"),
            Just("/*"),
            Just("*/"),
            Just("1.5"),
            Just("=="),
            Just("{"),
            Just("$"),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn prop_successive_resets_tile(
        text in source_text(),
        cuts in proptest::collection::vec((any::<prop::sample::Index>(), any::<prop::sample::Index>()), 1..6),
    ) {
        let offsets = char_boundaries(&text);
        let mut lexer = nlang_lexer();
        for (a, b) in cuts {
            let x = offsets[a.index(offsets.len())];
            let y = offsets[b.index(offsets.len())];
            let region = range(x.min(y), x.max(y));

            lexer.reset(&text, region).unwrap();
            let tokens = drain(&mut lexer);

            let mut cursor = region.start();
            for token in &tokens {
                prop_assert_eq!(token.range.start(), cursor);
                prop_assert!(!token.range.is_empty());
                cursor = token.range.end();
            }
            prop_assert_eq!(cursor, region.end());
        }
    }
}
