//! Foundation types for the nlang toolchain.
//!
//! Offsets are UTF-8 byte offsets into the source text:
//! - [`TextSize`] - a single offset
//! - [`TextRange`] - a half-open `[start, end)` range
//!
//! This module has NO dependencies on other nlang modules.

mod span;

pub use span::{is_char_boundary, text_len};
pub use text_size::{TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
