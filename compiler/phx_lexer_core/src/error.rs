//! Driver error type.
//!
//! Lexical anomalies (unterminated strings, stray bytes, malformed numbers)
//! are never errors at this level: classifiers always produce a token or
//! consume to end of input, and the parser reports them with full grammar
//! context. Only conditions that stop tokenization outright are errors.

use std::collections::TryReserveError;

/// Hard failure while running a classifier.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// The classifier returned [`Step::Abort`](crate::Step::Abort) because a
    /// caller-supplied continuation asked it to stop.
    #[error("tokenization aborted at byte {offset} (line {line})")]
    Aborted { offset: u32, line: u32 },

    /// The token buffer could not grow.
    #[error("token buffer allocation failed")]
    Alloc(#[from] TryReserveError),

    /// The source does not fit 32-bit byte offsets.
    #[error("source of {len} bytes exceeds the 4 GiB limit")]
    SourceTooLarge { len: usize },
}
