//! Token kind flags.
//!
//! A token's kind is a set, not a single tag. Several PHP tokens satisfy two
//! independent downstream queries at once and keep both bits:
//!
//! - `new`, `clone`, `instanceof`: [`ID`](TokenKind::ID) and
//!   [`OP`](TokenKind::OP)
//! - `,`: [`COMMA`](TokenKind::COMMA) and `OP`
//! - `=`: [`EQUAL`](TokenKind::EQUAL) and `OP`
//! - `&`: [`AMPER`](TokenKind::AMPER) and `OP`
//! - `.`: [`DOT`](TokenKind::DOT) and `OP`
//! - `?`: [`QUESTION`](TokenKind::QUESTION) and `OP`

use bitflags::bitflags;

bitflags! {
    /// Classification bits carried by every token.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TokenKind: u32 {
        // === Literals (bits 0-7) ===

        /// Integer literal (decimal, `0x` hex, `0b` binary).
        const INTEGER = 1 << 0;
        /// Real literal (has a decimal point or an exponent).
        const REAL = 1 << 1;
        /// Single-quoted string body.
        const SSTR = 1 << 2;
        /// Double-quoted string body (may contain `{$...}` interpolation).
        const DSTR = 1 << 3;
        /// Backtick (shell) string body.
        const BSTR = 1 << 4;
        /// Heredoc body (`<<<LABEL` / `<<<"LABEL"`).
        const HEREDOC = 1 << 5;
        /// Nowdoc body (`<<<'LABEL'`).
        const NOWDOC = 1 << 6;

        // === Names (bits 8-11) ===

        /// Identifier (including keywords that act as operators).
        const ID = 1 << 8;
        /// Reserved word; the payload carries its code.
        const KEYWORD = 1 << 9;
        /// `$` variable sigil.
        const DOLLAR = 1 << 10;

        // === Operators & Punctuation (bits 12-31) ===

        /// Resolved operator; the payload carries its descriptor.
        const OP = 1 << 12;
        /// `{`
        const OPEN_BRACE = 1 << 13;
        /// `}`
        const CLOSE_BRACE = 1 << 14;
        /// `(`
        const LPAREN = 1 << 15;
        /// `)`
        const RPAREN = 1 << 16;
        /// `[`
        const OPEN_BRACKET = 1 << 17;
        /// `]`
        const CLOSE_BRACKET = 1 << 18;
        /// `.`
        const DOT = 1 << 19;
        /// `,`
        const COMMA = 1 << 20;
        /// `;`
        const SEMI = 1 << 21;
        /// `:`
        const COLON = 1 << 22;
        /// `?`
        const QUESTION = 1 << 23;
        /// `&`
        const AMPER = 1 << 24;
        /// `=`
        const EQUAL = 1 << 25;
        /// `=>`
        const DOUBLE_ARROW = 1 << 26;
        /// `\` namespace separator.
        const NS_SEP = 1 << 27;
        /// Punctuation that is not a known operator, or an unexpected byte.
        const OTHER = 1 << 28;

        // === Groups ===

        /// Any numeric literal.
        const NUMBER = Self::INTEGER.bits() | Self::REAL.bits();
        /// Any string-like literal body.
        const STRING = Self::SSTR.bits()
            | Self::DSTR.bits()
            | Self::BSTR.bits()
            | Self::HEREDOC.bits()
            | Self::NOWDOC.bits();
    }
}

impl TokenKind {
    /// Check if this kind is a literal (number or string).
    #[inline]
    pub const fn is_literal(self) -> bool {
        self.intersects(Self::NUMBER.union(Self::STRING))
    }

    /// Check if this kind carries the operator bit.
    #[inline]
    pub const fn is_operator(self) -> bool {
        self.contains(Self::OP)
    }
}
