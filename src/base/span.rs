//! Helpers for byte offsets into `str` buffers.

use text_size::TextSize;

/// Length of `text` as a [`TextSize`].
///
/// Buffers larger than `u32::MAX` bytes are clamped; editors never hand us
/// anything close to that.
#[inline]
pub fn text_len(text: &str) -> TextSize {
    TextSize::try_from(text.len()).unwrap_or(TextSize::new(u32::MAX))
}

/// Check that `offset` falls on a UTF-8 character boundary of `text`.
///
/// The end of the buffer counts as a boundary.
#[inline]
pub fn is_char_boundary(text: &str, offset: TextSize) -> bool {
    text.is_char_boundary(usize::from(offset))
}
