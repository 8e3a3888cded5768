//! Token text spans: borrowed source ranges or owned synthesized text.

use smallvec::SmallVec;

/// Inline capacity for synthesized token text. Every synthesized PHP
/// token (`(string)`, `(object)`, `=&`, ...) fits without spilling.
pub const OWNED_INLINE: usize = 16;

/// The text of a token.
///
/// Ordinary tokens borrow a contiguous `offset..offset + len` range of the
/// source buffer. Tokens synthesized from several source pieces (a merged
/// type cast, an operator assembled across whitespace) have no such range
/// and carry their own bytes instead.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextSpan {
    /// Zero-copy reference into the source buffer.
    Borrowed { offset: u32, len: u32 },
    /// Owned text for synthesized tokens.
    Owned(SmallVec<[u8; OWNED_INLINE]>),
}

impl TextSpan {
    /// Create a borrowed span covering `start..end`.
    #[inline]
    pub fn borrowed(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span start {start} exceeds end {end}");
        TextSpan::Borrowed {
            offset: start,
            len: end - start,
        }
    }

    /// Create an owned span holding `text`.
    pub fn owned(text: &str) -> Self {
        TextSpan::Owned(SmallVec::from_slice(text.as_bytes()))
    }

    /// Resolve the span's bytes against `source`.
    ///
    /// Borrowed spans that do not fit `source` resolve to an empty slice.
    pub fn text<'s>(&'s self, source: &'s [u8]) -> &'s [u8] {
        match self {
            TextSpan::Borrowed { offset, len } => {
                let start = *offset as usize;
                source.get(start..start + *len as usize).unwrap_or(&[])
            }
            TextSpan::Owned(bytes) => bytes,
        }
    }

    /// Length of the text in bytes.
    pub fn len(&self) -> u32 {
        match self {
            TextSpan::Borrowed { len, .. } => *len,
            TextSpan::Owned(bytes) => u32::try_from(bytes.len()).unwrap_or(u32::MAX),
        }
    }

    /// Returns `true` if the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Source offset of the first byte, or `None` for synthesized text.
    pub fn offset(&self) -> Option<u32> {
        match self {
            TextSpan::Borrowed { offset, .. } => Some(*offset),
            TextSpan::Owned(_) => None,
        }
    }

    /// Source offset one past the last byte, or `None` for synthesized text.
    pub fn end(&self) -> Option<u32> {
        match self {
            TextSpan::Borrowed { offset, len } => Some(offset + len),
            TextSpan::Owned(_) => None,
        }
    }

    /// Returns `true` for owned, synthesized text.
    pub fn is_synthesized(&self) -> bool {
        matches!(self, TextSpan::Owned(_))
    }
}
