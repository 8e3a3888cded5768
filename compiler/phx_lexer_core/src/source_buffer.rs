//! Sentinel-terminated source buffer for bounds-check-free lookahead.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content
//! followed by zero padding, so [`Cursor::peek`](crate::Cursor::peek) and
//! [`Cursor::peek2`](crate::Cursor::peek2) are valid at every position up
//! to and including end of input. The total size is rounded up to the next
//! 64-byte boundary.
//!
//! Unlike a `&str`-based buffer, this one accepts arbitrary bytes: PHP
//! sources are not required to be valid UTF-8, and every span the lexer
//! produces is a byte range.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Zero bytes guaranteed after the last source byte: the sentinel itself
/// plus two bytes of lookahead from a cursor parked at end of input.
const MIN_PADDING: usize = 3;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, 0x00, 0x00, padding_zeros...]
///  ^                ^                 ^
///  0                |                 rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source bytes.
    ///
    /// # File Size
    ///
    /// Sources larger than `u32::MAX` bytes are truncated to `u32::MAX`
    /// bytes of content. The [`Driver`](crate::Driver) rejects such sources
    /// with [`LexError::SourceTooLarge`](crate::LexError::SourceTooLarge)
    /// before a buffer is ever built.
    pub fn new(source: &[u8]) -> Self {
        let source_len = u32::try_from(source.len()).unwrap_or(u32::MAX);
        let content = &source[..source_len as usize];

        let padded_len = (content.len() + MIN_PADDING + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Zero-filled, so the sentinel and padding need no extra writes.
        let mut buf = vec![0u8; padded_len];
        buf[..content.len()].copy_from_slice(content);

        Self { buf, source_len }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the full buffer including sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] at byte 0 whose line counter starts at `line`.
    pub fn cursor(&self, line: u32) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len, line)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
