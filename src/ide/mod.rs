//! IDE features: the editor-facing layer.
//!
//! ## Design Principles
//!
//! 1. **Host-agnostic**: no editor types; hosts convert at their boundary
//! 2. **Streaming**: the incremental lexer hands out one token at a time
//! 3. **Total**: malformed text highlights as bad characters, it never fails
//!
//! ## Usage
//!
//! ```
//! use nlang::base::{TextRange, TextSize};
//! use nlang::ide::{SyntaxHighlighter, TextStyle};
//!
//! let text = "let answer = 42;";
//! let spans = SyntaxHighlighter::default()
//!     .highlight_range(text, TextRange::up_to(TextSize::of(text)))
//!     .unwrap();
//! assert_eq!(spans[0].style, TextStyle::Keyword);
//! ```

mod error;
mod file_type;
mod highlighting;
mod incremental_lexer;
mod options;

pub use error::LexerError;
pub use file_type::{FileType, NLANG_FILE_TYPE};
pub use highlighting::{HighlightSpan, SyntaxHighlighter, TextStyle};
pub use incremental_lexer::{IncrementalLexer, LexerPosition, TokenSpan, Tokens};
pub use options::HighlightOptions;
