//! Incremental lexer: the streaming token cursor editors drive.
//!
//! The lexer keeps a sparse, ordered index of token boundaries over a
//! borrowed buffer. [`IncrementalLexer::reset`] re-tokenizes one range
//! through a [`Tokenizer`] and merges the result into the index; the cursor
//! then walks the tokens of that range.
//!
//! ## Index
//!
//! Every key is a token start. A token ends at the next greater key, or at
//! the physical end of the buffer when there is none. A reset always replaces
//! every key inside its range, so a region is either fully tokenized by one
//! pass or not present at all.
//!
//! When a non-empty reset range ends inside the buffer at an offset that is
//! not a known boundary, an unknown-boundary entry is placed there. It closes
//! the last token of the range and marks the text behind it as not tokenized.
//! An empty reset only moves the cursor.
//!
//! ## Usage
//!
//! ```
//! use nlang::base::{TextRange, TextSize};
//! use nlang::ide::IncrementalLexer;
//! use nlang::parser::TokenKind;
//!
//! let text = "let x;";
//! let mut lexer: IncrementalLexer = IncrementalLexer::default();
//! lexer.reset(text, TextRange::up_to(TextSize::of(text))).unwrap();
//!
//! let kinds: Vec<_> = lexer.tokens().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![TokenKind::LET, TokenKind::SPACE, TokenKind::IDENTIFIER, TokenKind::SEMICOLON]
//! );
//! ```

use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

use text_size::{TextRange, TextSize};

use super::error::LexerError;
use crate::base::{is_char_boundary, text_len};
use crate::parser::{NlangTokenizer, Tokenizer};

/// An entry of the boundary index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary<K> {
    /// A token of this kind starts here
    Token(K),
    /// Text from here on was not covered by the pass that inserted this entry
    Unknown,
}

/// A token reported by the lexer cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpan<K> {
    pub kind: K,
    pub range: TextRange,
}

/// A saved cursor offset.
///
/// Only positions obtained from [`IncrementalLexer::save_position`] are
/// meaningful to [`IncrementalLexer::restore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LexerPosition {
    offset: TextSize,
}

impl LexerPosition {
    pub fn offset(self) -> TextSize {
        self.offset
    }
}

/// Incremental lexer over a borrowed buffer.
///
/// Not synchronized: every mutation goes through `&mut self`.
pub struct IncrementalLexer<'a, T: Tokenizer = NlangTokenizer> {
    tokenizer: T,
    text: &'a str,
    index: BTreeMap<TextSize, Boundary<T::Kind>>,
    cursor: TextSize,
    buffer_end: TextSize,
}

impl<'a, T: Tokenizer + Default> Default for IncrementalLexer<'a, T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<'a, T: Tokenizer> IncrementalLexer<'a, T> {
    pub fn new(tokenizer: T) -> Self {
        Self {
            tokenizer,
            text: "",
            index: BTreeMap::new(),
            cursor: TextSize::new(0),
            buffer_end: TextSize::new(0),
        }
    }

    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    /// Re-tokenize `range` of `text` and place the cursor at its start.
    ///
    /// Every boundary inside `range` is discarded first, then the tokenizer
    /// runs once over the whole range. Boundaries outside `range` are kept.
    /// On error the lexer is left untouched.
    pub fn reset(&mut self, text: &'a str, range: TextRange) -> Result<(), LexerError> {
        let len = text_len(text);
        if range.end() > len {
            return Err(LexerError::out_of_bounds(range, len));
        }
        for offset in [range.start(), range.end()] {
            if !is_char_boundary(text, offset) {
                return Err(LexerError::not_char_boundary(offset));
            }
        }

        // Keys at or past the physical end describe some other buffer.
        self.index.retain(|offset, _| *offset < len);

        let mut stale = self.index.split_off(&range.start());
        let mut after = stale.split_off(&range.end());
        self.index.append(&mut after);

        let fresh = self.tokenizer.tokenize(text, range);
        let mut inserted = 0usize;
        for (offset, kind) in fresh {
            if !range.contains(offset) {
                tracing::warn!(?offset, ?range, "tokenizer produced a boundary outside the range");
                continue;
            }
            self.index.insert(offset, Boundary::Token(kind));
            inserted += 1;
        }

        if !range.is_empty() && !self.index.contains_key(&range.start()) {
            tracing::warn!(?range, "tokenizer output does not start at the range start");
        }

        // An empty range leaves the index alone and only moves the cursor.
        if !range.is_empty() && range.end() < len && !self.index.contains_key(&range.end()) {
            self.index.insert(range.end(), Boundary::Unknown);
        }

        self.text = text;
        self.buffer_end = range.end();
        self.cursor = range.start();

        tracing::trace!(?range, stale = stale.len(), inserted, "relexed range");
        Ok(())
    }

    /// The token under the cursor, or `None` at the end of the stream.
    pub fn current_token(&self) -> Option<TokenSpan<T::Kind>> {
        if self.cursor >= self.buffer_end {
            return None;
        }

        let kind = match self.index.range(..=self.cursor).next_back() {
            Some((_, Boundary::Token(kind))) => *kind,
            Some((&offset, Boundary::Unknown)) => {
                tracing::warn!(cursor = ?self.cursor, ?offset, "cursor is in a region that was never tokenized");
                return None;
            }
            None => {
                tracing::warn!(cursor = ?self.cursor, "cursor precedes every known token");
                return None;
            }
        };

        Some(TokenSpan {
            kind,
            range: TextRange::new(self.cursor, self.next_boundary()),
        })
    }

    pub fn token_kind(&self) -> Option<T::Kind> {
        self.current_token().map(|token| token.kind)
    }

    pub fn token_start(&self) -> TextSize {
        self.cursor
    }

    /// End of the token under the cursor: the next boundary, or the buffer length.
    pub fn token_end(&self) -> TextSize {
        self.next_boundary()
    }

    /// Move the cursor to the next token. A no-op at the end of the stream.
    pub fn advance(&mut self) {
        if self.cursor >= self.buffer_end {
            return;
        }
        self.cursor = self.next_boundary();
    }

    pub fn save_position(&self) -> LexerPosition {
        LexerPosition {
            offset: self.cursor,
        }
    }

    pub fn restore(&mut self, position: LexerPosition) {
        self.cursor = position.offset;
    }

    /// The buffer of the last reset.
    pub fn buffer(&self) -> &'a str {
        self.text
    }

    /// Exclusive end of the range being iterated.
    pub fn buffer_end(&self) -> TextSize {
        self.buffer_end
    }

    /// Iterate the remaining tokens, advancing the cursor.
    pub fn tokens(&mut self) -> Tokens<'_, 'a, T> {
        Tokens { lexer: self }
    }

    /// Known token starts and their kinds, in offset order.
    pub fn boundaries(&self) -> impl Iterator<Item = (TextSize, T::Kind)> + '_ {
        self.index.iter().filter_map(|(&offset, entry)| match entry {
            Boundary::Token(kind) => Some((offset, *kind)),
            Boundary::Unknown => None,
        })
    }

    fn next_boundary(&self) -> TextSize {
        self.index
            .range((Excluded(self.cursor), Unbounded))
            .next()
            .map(|(&offset, _)| offset)
            .unwrap_or_else(|| text_len(self.text))
    }
}

/// Iterator returned by [`IncrementalLexer::tokens`]
pub struct Tokens<'l, 'a, T: Tokenizer> {
    lexer: &'l mut IncrementalLexer<'a, T>,
}

impl<T: Tokenizer> Iterator for Tokens<'_, '_, T> {
    type Item = TokenSpan<T::Kind>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.lexer.current_token()?;
        self.lexer.advance();
        Some(token)
    }
}
