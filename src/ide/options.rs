//! Highlighting options

use rustc_hash::FxHashMap;

use super::highlighting::TextStyle;
use crate::parser::TokenKind;

/// Highlighting options for nlang code
#[derive(Debug, Clone)]
pub struct HighlightOptions {
    /// Style for kinds without a built-in or overridden style, and for
    /// labels that name no known kind
    pub fallback: TextStyle,
    /// Per-kind styles that take precedence over the built-in mapping
    pub overrides: FxHashMap<TokenKind, TextStyle>,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            fallback: TextStyle::PredefinedSymbol,
            overrides: FxHashMap::default(),
        }
    }
}

impl HighlightOptions {
    /// Use `style` for every token of `kind`
    pub fn with_override(mut self, kind: TokenKind, style: TextStyle) -> Self {
        self.overrides.insert(kind, style);
        self
    }

    /// Use `style` for everything the mapping does not cover
    pub fn with_fallback(mut self, style: TextStyle) -> Self {
        self.fallback = style;
        self
    }
}
