//! Language-agnostic tokenizer driver.
//!
//! This crate has no knowledge of any token language. It provides:
//!
//! - [`SourceBuffer`]: sentinel-terminated copy of the source bytes
//! - [`Cursor`]: forward-only read position with a line counter
//! - [`TextSpan`]: borrowed source range or owned synthesized text
//! - [`TokenBuffer`]: the token sink, with a lookback window
//! - [`Classify`] / [`Step`]: the contract a token language implements
//! - [`Driver`]: the loop that runs a classifier to completion
//!
//! The PHP classifier lives in `phx_lexer`; other token languages can
//! depend on this crate alone.

mod buffer;
mod cursor;
mod driver;
mod error;
mod source_buffer;
mod span;

pub use buffer::{TokenBuffer, INITIAL_CAPACITY};
pub use cursor::Cursor;
pub use driver::{Classify, Driver, DriverOptions, LexStats, SortFn, Step};
pub use error::LexError;
pub use source_buffer::SourceBuffer;
pub use span::{TextSpan, OWNED_INLINE};
