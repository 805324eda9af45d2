//! Syntax highlighting: token kinds to display styles.
//!
//! The mapping is deliberately small: literals, comments, brackets,
//! separators and keywords get their own style, everything else (trivia,
//! operators, unknown labels) falls back to a plain symbol style.

use text_size::TextRange;

use super::error::LexerError;
use super::incremental_lexer::IncrementalLexer;
use super::options::HighlightOptions;
use crate::parser::{NlangTokenizer, TokenKind};

/// Display style for highlighted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    BadCharacter,
    String,
    Identifier,
    BlockComment,
    Number,
    Parentheses,
    Braces,
    Comma,
    Semicolon,
    Keyword,
    PredefinedSymbol,
}

impl TextStyle {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadCharacter => "bad_character",
            Self::String => "string",
            Self::Identifier => "identifier",
            Self::BlockComment => "block_comment",
            Self::Number => "number",
            Self::Parentheses => "parentheses",
            Self::Braces => "braces",
            Self::Comma => "comma",
            Self::Semicolon => "semicolon",
            Self::Keyword => "keyword",
            Self::PredefinedSymbol => "predefined_symbol",
        }
    }
}

/// Built-in style for `kind`, if it has one.
fn builtin_style(kind: TokenKind) -> Option<TextStyle> {
    let style = match kind {
        TokenKind::INVALID => TextStyle::BadCharacter,
        TokenKind::STRING => TextStyle::String,
        TokenKind::IDENTIFIER => TextStyle::Identifier,
        TokenKind::COMMENT => TextStyle::BlockComment,
        TokenKind::NUMBER => TextStyle::Number,
        TokenKind::LEFT_PAR | TokenKind::RIGHT_PAR => TextStyle::Parentheses,
        TokenKind::LEFT_BRACE | TokenKind::RIGHT_BRACE => TextStyle::Braces,
        TokenKind::COMMA => TextStyle::Comma,
        TokenKind::SEMICOLON => TextStyle::Semicolon,
        kind if kind.is_keyword() => TextStyle::Keyword,
        _ => return None,
    };
    Some(style)
}

/// A highlighted span of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub range: TextRange,
    pub kind: TokenKind,
    pub style: TextStyle,
}

/// Maps tokens to styles and drives the incremental lexer for a range.
#[derive(Debug, Clone, Default)]
pub struct SyntaxHighlighter {
    options: HighlightOptions,
}

impl SyntaxHighlighter {
    pub fn new(options: HighlightOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HighlightOptions {
        &self.options
    }

    /// A fresh lexer for the host to drive.
    pub fn highlighting_lexer<'a>(&self) -> IncrementalLexer<'a, NlangTokenizer> {
        IncrementalLexer::default()
    }

    /// Style for a token kind.
    pub fn highlight(&self, kind: TokenKind) -> TextStyle {
        self.options
            .overrides
            .get(&kind)
            .copied()
            .or_else(|| builtin_style(kind))
            .unwrap_or(self.options.fallback)
    }

    /// Style for a raw token label. Unknown labels get the fallback style.
    pub fn highlight_label(&self, label: &str) -> TextStyle {
        match TokenKind::from_label(label) {
            Some(kind) => self.highlight(kind),
            None => self.options.fallback,
        }
    }

    /// Lex `range` of `text` and style every token in it.
    pub fn highlight_range(
        &self,
        text: &str,
        range: TextRange,
    ) -> Result<Vec<HighlightSpan>, LexerError> {
        let mut lexer = self.highlighting_lexer();
        lexer.reset(text, range)?;

        let spans = lexer
            .tokens()
            .map(|token| HighlightSpan {
                range: token.range,
                kind: token.kind,
                style: self.highlight(token.kind),
            })
            .collect();
        Ok(spans)
    }
}
