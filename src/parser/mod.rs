//! Lexical layer for nlang
//!
//! ## Architecture
//!
//! ```text
//! Source Text + TextRange
//!     ↓
//! Lexer (logos) → Tokens with TokenKind
//!     ↓
//! Tokenizer → TokenMap (offset → kind) for one range
//! ```
//!
//! The [`Tokenizer`] trait is the boundary the incremental lexer in
//! [`crate::ide`] consumes. [`NlangTokenizer`] is the implementation for nlang.

mod lexer;
mod token_kind;
mod tokenizer;

pub use lexer::{Lexer, Token, dump_tokens, tokenize};
pub use token_kind::TokenKind;
pub use tokenizer::{NlangTokenizer, TokenMap, Tokenizer};
