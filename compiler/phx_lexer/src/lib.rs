//! PHP lexical analysis.
//!
//! Turns PHP source bytes into a flat [`TokenBuffer`] of [`Token`]s. Each
//! token records its [`TokenKind`] flags, its text (a borrowed source span,
//! or owned text for merged tokens such as `(int)` and `=&`), the line it
//! starts on, and a keyword or operator payload.
//!
//! # Quick Start
//!
//! ```
//! let out = phx_lexer::tokenize(b"$x = (int) $y;").unwrap();
//! assert_eq!(out.tokens.len(), 7);
//! ```
//!
//! Embedders that lex a code region extracted from a larger file use
//! [`tokenize_from_line`], or drive [`PhpClassifier`] directly with a
//! [`Driver`] to install a hook or a custom [`OperatorResolver`].

mod classifier;
mod keywords;
mod kind;
mod literals;
mod operators;
mod token;

pub use classifier::PhpClassifier;
pub use keywords::{lookup as lookup_keyword, Keyword};
pub use kind::TokenKind;
pub use operators::{
    operator, Arity, Assoc, Operator, OperatorId, OperatorResolver, PhpOperators, OPERATORS,
};
pub use phx_lexer_core::{Driver, DriverOptions, LexError, LexStats, TextSpan, TokenBuffer};
pub use token::{SemanticId, Token};

/// Tokens produced by one run, with the driver's counters.
#[derive(Debug)]
pub struct LexOutput {
    pub tokens: TokenBuffer<Token>,
    pub stats: LexStats,
}

/// Tokenize `source`, numbering lines from 1.
///
/// # Errors
///
/// See [`tokenize_from_line`].
pub fn tokenize(source: &[u8]) -> Result<LexOutput, LexError> {
    tokenize_from_line(source, 1)
}

/// Tokenize `source`, numbering its first line `line`.
///
/// # Errors
///
/// Returns [`LexError::SourceTooLarge`] for sources over 4 GiB and
/// [`LexError::Alloc`] if the token buffer cannot grow.
pub fn tokenize_from_line(source: &[u8], line: u32) -> Result<LexOutput, LexError> {
    let mut classifier = PhpClassifier::new();
    let mut tokens = TokenBuffer::new();
    let driver = Driver::new(DriverOptions::default().with_starting_line(line));
    let stats = driver.run(&mut classifier, source, &mut tokens)?;
    Ok(LexOutput { tokens, stats })
}
