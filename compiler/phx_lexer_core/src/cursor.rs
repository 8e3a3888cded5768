//! Forward-only cursor over a sentinel-terminated buffer, with line tracking.
//!
//! The cursor never moves past the end of the source content: every
//! movement method clamps at `end`. Reads at `end`, `end + 1` and `end + 2`
//! land on the sentinel padding guaranteed by
//! [`SourceBuffer`](crate::SourceBuffer) and return `0x00`.
//!
//! # Line Counting
//!
//! The line counter is bumped exactly once per `\n` byte the cursor moves
//! over, by every movement method. Code that needs to undo lookahead takes
//! a snapshot (`let saved = *cursor;`) and writes it back, which restores
//! the line counter together with the position.
//!
//! # Interior Null Bytes
//!
//! A `0x00` at `pos < end` is source content, not end of input. Use
//! [`at_end()`](Cursor::at_end) rather than comparing `current()` to zero.

/// Forward-only cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], enabling cheap state snapshots for bounded
/// intra-token lookahead.
///
/// # Invariant
///
/// `pos <= end`, and `buf[end..end + 3]` are all `0x00`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of the actual source content.
    end: u32,
    /// Line number of the byte at `pos`.
    line: u32,
}

/// Size assertion: 16-byte fat pointer plus three `u32`s.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 32);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], end: u32, line: u32) -> Self {
        debug_assert!(
            end as usize + 2 < buf.len(),
            "sentinel padding must cover two bytes of lookahead"
        );
        debug_assert!(buf[end as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            end,
            line,
        }
    }

    /// Returns the byte at the current position (`0x00` at end of input).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Returns the byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    /// Advance the cursor by one byte. No-op at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.end {
            if self.buf[self.pos as usize] == b'\n' {
                self.line += 1;
            }
            self.pos += 1;
        }
    }

    /// Advance the cursor by up to `n` bytes, stopping at end of input.
    pub fn advance_n(&mut self, n: u32) {
        let target = self.pos.saturating_add(n).min(self.end);
        self.move_to(target);
    }

    /// Returns `true` once every source byte has been consumed.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos >= self.end
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content.
    #[inline]
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Line number of the byte at the current position.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Extract a range of source bytes.
    ///
    /// Out-of-range requests are clamped to the source content.
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        let end = end.min(self.end) as usize;
        let start = (start as usize).min(end);
        &self.buf[start..end]
    }

    /// Extract source bytes from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// Unconsumed source bytes (excludes sentinel).
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos as usize..self.end as usize]
    }

    /// Skip whitespace: space, tab, `\r`, `\n`, vertical tab, form feed.
    #[inline]
    pub fn skip_whitespace(&mut self) {
        while self.pos < self.end {
            match self.buf[self.pos as usize] {
                b'\n' => {
                    self.line += 1;
                    self.pos += 1;
                }
                b' ' | b'\t' | b'\r' | 0x0B | 0x0C => self.pos += 1,
                _ => break,
            }
        }
    }

    /// Advance while `pred` returns `true` for the current byte.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.pos < self.end && pred(self.buf[self.pos as usize]) {
            self.advance();
        }
    }

    /// Advance to the next `\n` byte (not consumed) or end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < end which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        match memchr::memchr(b'\n', self.rest()) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.end,
        }
    }

    /// Advance past the first occurrence of `needle`.
    ///
    /// Returns `false` (cursor at end of input) if `needle` does not occur.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset + needle length <= remaining length which fits in u32"
    )]
    pub fn eat_through(&mut self, needle: &[u8]) -> bool {
        match memchr::memmem::find(self.rest(), needle) {
            Some(offset) => {
                self.move_to(self.pos + (offset + needle.len()) as u32);
                true
            }
            None => {
                self.move_to(self.end);
                false
            }
        }
    }

    /// Advance to the next `a` or `b` byte without consuming it.
    ///
    /// Returns the byte found, or `0` with the cursor at end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining length which fits in u32"
    )]
    pub fn skip_to2(&mut self, a: u8, b: u8) -> u8 {
        match memchr::memchr2(a, b, self.rest()) {
            Some(offset) => {
                self.move_to(self.pos + offset as u32);
                self.current()
            }
            None => {
                self.move_to(self.end);
                0
            }
        }
    }

    /// Advance to the next `byte` without consuming it.
    ///
    /// Returns `false` with the cursor at end of input if not found.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining length which fits in u32"
    )]
    pub fn skip_to(&mut self, byte: u8) -> bool {
        match memchr::memchr(byte, self.rest()) {
            Some(offset) => {
                self.move_to(self.pos + offset as u32);
                true
            }
            None => {
                self.move_to(self.end);
                false
            }
        }
    }

    /// Count consecutive `byte`s immediately before the current position,
    /// never looking further back than `floor`.
    pub fn count_preceding(&self, byte: u8, floor: u32) -> u32 {
        let window = &self.buf[floor.min(self.pos) as usize..self.pos as usize];
        let run = window.iter().rev().take_while(|&&b| b == byte).count();
        u32::try_from(run).unwrap_or(u32::MAX)
    }

    /// Move forward to `target`, counting the newlines skipped over.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "newline count <= span length which fits in u32"
    )]
    fn move_to(&mut self, target: u32) {
        debug_assert!(target >= self.pos, "cursor must not rewind");
        debug_assert!(target <= self.end, "cursor must not pass end of input");
        let skipped = &self.buf[self.pos as usize..target as usize];
        self.line += memchr::memchr_iter(b'\n', skipped).count() as u32;
        self.pos = target;
    }
}
