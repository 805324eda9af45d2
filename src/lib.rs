//! # nlang-base
//!
//! Incremental highlighting lexer, token vocabulary and editor glue for the
//! nlang language.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Incremental lexer, highlighting, file type
//!   ↓
//! parser    → Logos lexer, TokenKind, Tokenizer boundary
//!   ↓
//! base      → Primitives (TextSize, TextRange)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → ide)
// ============================================================================

/// Foundation types: byte offsets and ranges
pub mod base;

/// Lexical layer: Logos lexer, token kinds, tokenizer boundary
pub mod parser;

/// IDE features: incremental lexer, highlighting, file type
pub mod ide;

// Re-export commonly needed items
pub use base::{TextRange, TextSize};
pub use ide::{IncrementalLexer, LexerError, LexerPosition, SyntaxHighlighter, TokenSpan};
pub use parser::{NlangTokenizer, TokenKind, Tokenizer};
