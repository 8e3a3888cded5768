//! The PHP token record.

use phx_lexer_core::TextSpan;

use crate::{Keyword, Operator, TokenKind};

/// Semantic payload attached to keyword and operator tokens.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SemanticId {
    Keyword(Keyword),
    Operator(&'static Operator),
}

/// One lexical unit.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: TextSpan,
    /// Line of the token's first byte. Synthesized tokens take the line of
    /// their first source piece.
    pub line: u32,
    pub payload: Option<SemanticId>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: TextSpan, line: u32) -> Self {
        Token {
            kind,
            span,
            line,
            payload: None,
        }
    }

    #[must_use]
    pub fn with_payload(mut self, payload: SemanticId) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Check if the kind shares any bit with `kind`.
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind.intersects(kind)
    }

    /// The token's bytes, resolved against the source it was lexed from.
    pub fn text<'s>(&'s self, source: &'s [u8]) -> &'s [u8] {
        self.span.text(source)
    }

    pub fn keyword(&self) -> Option<Keyword> {
        match self.payload {
            Some(SemanticId::Keyword(kw)) => Some(kw),
            _ => None,
        }
    }

    pub fn operator(&self) -> Option<&'static Operator> {
        match self.payload {
            Some(SemanticId::Operator(op)) => Some(op),
            _ => None,
        }
    }

    /// Whether an operator right after this token is binary (or postfix).
    ///
    /// True for literals, identifiers that are not operators themselves,
    /// `)` and `]`.
    pub fn ends_operand(&self) -> bool {
        if self.kind.is_operator() {
            return false;
        }
        self.kind.is_literal()
            || self
                .kind
                .intersects(TokenKind::ID | TokenKind::RPAREN | TokenKind::CLOSE_BRACKET)
    }
}
