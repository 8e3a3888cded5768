//! Rule-agnostic lexer driver.
//!
//! The driver owns the loop; a [`Classify`] implementation owns every
//! lexical rule. Each call to [`Classify::classify`] yields one [`Step`]:
//!
//! ```text
//! source → SourceBuffer → Cursor ─┐
//!                                 ├→ classify() → Step → TokenBuffer
//!           TokenBuffer (lookback)┘
//! ```
//!
//! The driver guarantees termination: if a classifier returns without
//! moving the cursor, the driver moves it one byte itself.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::{Cursor, LexError, SourceBuffer, TokenBuffer};

/// Outcome of one classifier call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step<T> {
    /// A complete token to append to the sink.
    Token(T),
    /// Input was consumed but produces no token (comments).
    Skip,
    /// No input left. Must be returned without consuming anything.
    EndOfInput,
    /// Stop the loop, keeping every token emitted so far.
    Stop,
    /// Hard stop requested by a caller continuation. The driver returns
    /// [`LexError::Aborted`] without finalizing the sink.
    Abort,
}

/// A token language.
///
/// Implementations receive the cursor positioned at the start of unread
/// input and the sink holding every token emitted so far. The sink is
/// mutable so that a classifier can replace already-emitted tokens when
/// later input shows they form one lexical unit.
pub trait Classify {
    /// Token record produced by this language.
    type Token;

    /// Produce the next [`Step`].
    ///
    /// Must consume at least one byte when returning [`Step::Token`] or
    /// [`Step::Skip`].
    fn classify(
        &mut self,
        cursor: &mut Cursor<'_>,
        sink: &mut TokenBuffer<Self::Token>,
    ) -> Step<Self::Token>;
}

/// Comparator for the optional post-pass sort.
pub type SortFn<T> = fn(&T, &T) -> Ordering;

/// Driver configuration.
#[derive(Debug)]
pub struct DriverOptions<T> {
    /// Line number of the first source byte. Lets a host resume
    /// tokenization of an embedded code region at its real line.
    pub starting_line: u32,
    /// Stable sort applied to the sink after a successful run.
    pub sort: Option<SortFn<T>>,
}

// Manual impls: the fields are `Copy` whatever the token type is.
impl<T> Clone for DriverOptions<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DriverOptions<T> {}

impl<T> Default for DriverOptions<T> {
    fn default() -> Self {
        DriverOptions {
            starting_line: 1,
            sort: None,
        }
    }
}

impl<T> DriverOptions<T> {
    /// Set the line number of the first source byte.
    #[must_use]
    pub fn with_starting_line(mut self, line: u32) -> Self {
        self.starting_line = line;
        self
    }

    /// Sort the sink with `compare` once the loop finishes.
    #[must_use]
    pub fn with_sort(mut self, compare: SortFn<T>) -> Self {
        self.sort = Some(compare);
        self
    }
}

/// Counters collected during one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexStats {
    /// Tokens appended to the sink.
    pub emitted: usize,
    /// [`Step::Skip`] results (comments).
    pub skipped: usize,
    /// Times the driver had to move a stalled classifier forward.
    pub forced_advances: usize,
    /// Line counter when the loop stopped.
    pub last_line: u32,
}

/// Runs a classifier over a source buffer.
#[derive(Debug)]
pub struct Driver<T> {
    options: DriverOptions<T>,
}

impl<T> Clone for Driver<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Driver<T> {}

impl<T> Default for Driver<T> {
    fn default() -> Self {
        Driver::new(DriverOptions::default())
    }
}

impl<T> Driver<T> {
    /// Create a driver with the given options.
    pub fn new(options: DriverOptions<T>) -> Self {
        Driver { options }
    }

    /// The options this driver was built with.
    pub fn options(&self) -> &DriverOptions<T> {
        &self.options
    }

    /// Tokenize `source` into `sink`.
    ///
    /// On [`Step::Stop`] and [`Step::EndOfInput`] the tokens emitted so far
    /// stay in the sink and the run counts as successful. On
    /// [`Step::Abort`] and allocation failure the partial sink is left as
    /// is and an error is returned.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn run<C>(
        &self,
        classifier: &mut C,
        source: &[u8],
        sink: &mut TokenBuffer<T>,
    ) -> Result<LexStats, LexError>
    where
        C: Classify<Token = T>,
    {
        if u32::try_from(source.len()).is_err() {
            return Err(LexError::SourceTooLarge { len: source.len() });
        }

        let buffer = SourceBuffer::new(source);
        let mut cursor = buffer.cursor(self.options.starting_line);
        let mut stats = LexStats::default();

        while !cursor.at_end() {
            let before = cursor.pos();
            match classifier.classify(&mut cursor, sink) {
                Step::Token(token) => {
                    sink.push(token)?;
                    stats.emitted += 1;
                }
                Step::Skip => stats.skipped += 1,
                Step::EndOfInput | Step::Stop => break,
                Step::Abort => {
                    debug!(offset = cursor.pos(), line = cursor.line(), "classifier aborted");
                    return Err(LexError::Aborted {
                        offset: cursor.pos(),
                        line: cursor.line(),
                    });
                }
            }
            if cursor.pos() == before {
                trace!(offset = before, "classifier stalled, forcing advance");
                cursor.advance();
                stats.forced_advances += 1;
            }
        }

        if let Some(compare) = self.options.sort {
            sink.sort_by(compare);
        }

        stats.last_line = cursor.line();
        debug!(
            emitted = stats.emitted,
            skipped = stats.skipped,
            forced = stats.forced_advances,
            "tokenized"
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests;
