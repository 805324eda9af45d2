//! The tokenizer boundary consumed by the incremental lexer.
//!
//! A [`Tokenizer`] turns one half-open range of a buffer into an ordered map
//! from token start offset to token kind. It keeps no state between calls.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;

use text_size::{TextRange, TextSize};

use super::lexer::Lexer;
use super::token_kind::TokenKind;

/// Token start offset -> token kind, in ascending offset order.
pub type TokenMap<K> = BTreeMap<TextSize, K>;

/// Converts a range of text into token boundaries.
///
/// Implementations must be total: malformed text yields an invalid-kind token
/// covering the offending span, never a panic. Every returned key lies in
/// `range`, and for a non-empty range the first key is `range.start()`.
pub trait Tokenizer {
    type Kind: Copy + Eq + fmt::Debug;

    fn tokenize(&self, text: &str, range: TextRange) -> TokenMap<Self::Kind>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    type Kind = T::Kind;

    fn tokenize(&self, text: &str, range: TextRange) -> TokenMap<Self::Kind> {
        (**self).tokenize(text, range)
    }
}

/// The nlang tokenizer, backed by the logos [`Lexer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NlangTokenizer;

impl Tokenizer for NlangTokenizer {
    type Kind = TokenKind;

    fn tokenize(&self, text: &str, range: TextRange) -> TokenMap<TokenKind> {
        let Some(slice) = text.get(Range::<usize>::from(range)) else {
            tracing::warn!(?range, len = text.len(), "tokenize range is not a valid slice");
            return TokenMap::new();
        };

        Lexer::with_offset(slice, range.start())
            .map(|token| (token.offset, token.kind))
            .collect()
    }
}
