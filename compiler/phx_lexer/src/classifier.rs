//! PHP token classifier.
//!
//! One [`classify`](Classify::classify) call produces one token. The first
//! byte selects the rule, checked in this order:
//!
//! 1. whitespace is skipped; end of input ends the run
//! 2. identifier start byte: keyword, operator word, or identifier
//! 3. `#` or `//`: line comment; `/*`: block comment
//! 4. digit: number
//! 5. `'`, `"`, `` ` ``: string body
//! 6. `<<<` with a valid label: heredoc or nowdoc body
//! 7. everything else: punctuation, longest match first
//!
//! Two rules look back into the sink and rewrite it:
//!
//! - A `)` closing `( keyword )` where the keyword is a cast target
//!   replaces the `(` and keyword tokens with one synthesized cast
//!   operator (`(int)`, `(string)`, ...).
//! - An `=` followed, across optional whitespace, by `&` becomes one
//!   synthesized `=&` operator.
//!
//! Every operator-tagged token is checked with the [`OperatorResolver`].

use std::ops::ControlFlow;

use phx_lexer_core::{Classify, Cursor, Step, TextSpan, TokenBuffer};
use tracing::trace;

use crate::keywords;
use crate::literals::{self, is_ident_continue, is_ident_start};
use crate::{OperatorResolver, PhpOperators, SemanticId, Token, TokenKind};

/// Caller continuation: sees every token before it is appended.
type Hook<'h> = Box<dyn FnMut(&Token) -> ControlFlow<()> + 'h>;

/// Classifies PHP source into [`Token`]s.
pub struct PhpClassifier<'h, R = PhpOperators> {
    resolver: R,
    hook: Option<Hook<'h>>,
}

impl<'h> PhpClassifier<'h, PhpOperators> {
    /// A classifier using the PHP operator table.
    pub fn new() -> Self {
        Self::with_resolver(PhpOperators)
    }
}

impl Default for PhpClassifier<'_, PhpOperators> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'h, R: OperatorResolver> PhpClassifier<'h, R> {
    /// A classifier using a custom operator resolver.
    pub fn with_resolver(resolver: R) -> Self {
        PhpClassifier {
            resolver,
            hook: None,
        }
    }

    /// Install a continuation that sees each token before it is emitted.
    ///
    /// Returning [`ControlFlow::Break`] aborts the run: the token is not
    /// emitted and the driver reports an abort error.
    #[must_use]
    pub fn with_hook(mut self, hook: impl FnMut(&Token) -> ControlFlow<()> + 'h) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    /// Scan one step. The count is how many tokens at the end of the sink
    /// the step's token replaces; the caller removes them only once the
    /// token is accepted.
    fn scan(&self, cursor: &mut Cursor<'_>, sink: &TokenBuffer<Token>) -> (Step<Token>, usize) {
        cursor.skip_whitespace();
        if cursor.at_end() {
            return (Step::EndOfInput, 0);
        }

        let start = cursor.pos();
        let line = cursor.line();
        let step = match cursor.current() {
            b if is_ident_start(b) => Step::Token(self.word(cursor, sink, start, line)),
            b'#' => line_comment(cursor),
            b'/' if cursor.peek() == b'/' => line_comment(cursor),
            b'/' if cursor.peek() == b'*' => {
                cursor.advance_n(2);
                cursor.eat_through(b"*/");
                Step::Skip
            }
            b'0'..=b'9' => {
                let kind = literals::number(cursor);
                Step::Token(Token::new(kind, TextSpan::borrowed(start, cursor.pos()), line))
            }
            b'\'' => Step::Token(Token::new(
                TokenKind::SSTR,
                literals::quoted(cursor, b'\''),
                line,
            )),
            b'`' => Step::Token(Token::new(
                TokenKind::BSTR,
                literals::quoted(cursor, b'`'),
                line,
            )),
            b'"' => Step::Token(Token::new(
                TokenKind::DSTR,
                literals::double_quoted(cursor),
                line,
            )),
            b'<' if cursor.peek() == b'<' && cursor.peek2() == b'<' => {
                match literals::heredoc(cursor) {
                    Some(doc) => Step::Token(Token::new(doc.kind, doc.span, doc.line)),
                    None => self.punctuation(cursor, sink, start, line),
                }
            }
            b')' => return self.close_paren(cursor, sink, start, line),
            _ => self.punctuation(cursor, sink, start, line),
        };
        (step, 0)
    }

    // ─── Words ──────────────────────────────────────────────────────────

    fn word(
        &self,
        cursor: &mut Cursor<'_>,
        sink: &TokenBuffer<Token>,
        start: u32,
        line: u32,
    ) -> Token {
        cursor.advance();
        cursor.eat_while(is_ident_continue);
        let text = cursor.slice_from(start);
        let span = TextSpan::borrowed(start, cursor.pos());

        match keywords::lookup(text) {
            Some(kw) if kw.is_operator_word() => {
                let token = Token::new(TokenKind::ID | TokenKind::OP, span, line);
                match self.resolver.resolve(text, sink.last()) {
                    Some(op) => token.with_payload(SemanticId::Operator(op)),
                    None => Token::new(TokenKind::ID, token.span, line),
                }
            }
            Some(kw) => Token::new(TokenKind::KEYWORD, span, line)
                .with_payload(SemanticId::Keyword(kw)),
            None => Token::new(TokenKind::ID, span, line),
        }
    }

    // ─── Punctuation ────────────────────────────────────────────────────

    fn punctuation(
        &self,
        cursor: &mut Cursor<'_>,
        sink: &TokenBuffer<Token>,
        start: u32,
        line: u32,
    ) -> Step<Token> {
        let first = cursor.current();
        cursor.advance();
        let next = cursor.current();

        let kind = match first {
            b'=' => return Step::Token(self.equals(cursor, sink, start, line)),
            b'<' => {
                match next {
                    b'<' => {
                        cursor.advance();
                        eat_if(cursor, b'=');
                    }
                    b'>' | b'=' => cursor.advance(),
                    _ => {}
                }
                TokenKind::OP
            }
            b'>' => {
                match next {
                    b'>' => {
                        cursor.advance();
                        eat_if(cursor, b'=');
                    }
                    b'=' => cursor.advance(),
                    _ => {}
                }
                TokenKind::OP
            }
            b'!' => {
                if eat_if(cursor, b'=') {
                    eat_if(cursor, b'=');
                }
                TokenKind::OP
            }
            b'&' => match next {
                b'&' | b'=' => {
                    cursor.advance();
                    TokenKind::OP
                }
                _ => TokenKind::AMPER | TokenKind::OP,
            },
            b'|' | b'+' => {
                if next == first || next == b'=' {
                    cursor.advance();
                }
                TokenKind::OP
            }
            b'-' => {
                if matches!(next, b'-' | b'=' | b'>') {
                    cursor.advance();
                }
                TokenKind::OP
            }
            b'*' | b'/' | b'%' | b'^' => {
                eat_if(cursor, b'=');
                TokenKind::OP
            }
            b'.' => {
                if eat_if(cursor, b'=') {
                    TokenKind::OP
                } else {
                    TokenKind::DOT | TokenKind::OP
                }
            }
            b':' => {
                if eat_if(cursor, b':') {
                    TokenKind::OP
                } else {
                    TokenKind::COLON
                }
            }
            b'~' | b'@' => TokenKind::OP,
            b',' => TokenKind::COMMA | TokenKind::OP,
            b'?' => TokenKind::QUESTION | TokenKind::OP,
            b'(' => TokenKind::LPAREN,
            b')' => TokenKind::RPAREN,
            b'[' => TokenKind::OPEN_BRACKET,
            b']' => TokenKind::CLOSE_BRACKET,
            b'{' => TokenKind::OPEN_BRACE,
            b'}' => TokenKind::CLOSE_BRACE,
            b';' => TokenKind::SEMI,
            b'$' => TokenKind::DOLLAR,
            b'\\' => TokenKind::NS_SEP,
            _ => TokenKind::OTHER,
        };

        let token = Token::new(kind, TextSpan::borrowed(start, cursor.pos()), line);
        Step::Token(self.check_operator(token, cursor.slice_from(start), sink.last()))
    }

    /// `=`, `==`, `===`, `=>`, or `=&` (whitespace allowed before the `&`).
    fn equals(
        &self,
        cursor: &mut Cursor<'_>,
        sink: &TokenBuffer<Token>,
        start: u32,
        line: u32,
    ) -> Token {
        let kind = match cursor.current() {
            b'=' => {
                cursor.advance();
                eat_if(cursor, b'=');
                TokenKind::OP
            }
            b'>' => {
                cursor.advance();
                return Token::new(
                    TokenKind::DOUBLE_ARROW,
                    TextSpan::borrowed(start, cursor.pos()),
                    line,
                );
            }
            _ => {
                let saved = *cursor;
                cursor.skip_whitespace();
                if !cursor.at_end() && cursor.current() == b'&' {
                    cursor.advance();
                    trace!(line, "merged reference assignment");
                    let token = Token::new(TokenKind::OP, TextSpan::owned("=&"), line);
                    return self.check_operator(token, b"=&", sink.last());
                }
                *cursor = saved;
                TokenKind::EQUAL | TokenKind::OP
            }
        };
        let token = Token::new(kind, TextSpan::borrowed(start, cursor.pos()), line);
        self.check_operator(token, cursor.slice_from(start), sink.last())
    }

    /// `)`, or the end of a `( cast-type )` sequence. A merged cast
    /// replaces the `(` and keyword tokens at the end of the sink.
    fn close_paren(
        &self,
        cursor: &mut Cursor<'_>,
        sink: &TokenBuffer<Token>,
        start: u32,
        line: u32,
    ) -> (Step<Token>, usize) {
        let cast = match sink.last_n(2) {
            [open, word] if open.kind.contains(TokenKind::LPAREN) => word
                .keyword()
                .and_then(|kw| kw.cast_text())
                .map(|text| (text, open.line)),
            _ => None,
        };
        let Some((text, open_line)) = cast else {
            return (self.punctuation(cursor, sink, start, line), 0);
        };

        cursor.advance();
        trace!(cast = text, line = open_line, "merged type cast");
        let prev = sink.len().checked_sub(3).and_then(|i| sink.get(i));
        let token = Token::new(TokenKind::OP, TextSpan::owned(text), open_line);
        (Step::Token(self.check_operator(token, text.as_bytes(), prev)), 2)
    }

    /// Attach the resolver's descriptor to an operator-tagged token, or
    /// degrade it to [`OTHER`](TokenKind::OTHER) if the resolver rejects it.
    fn check_operator(&self, mut token: Token, text: &[u8], prev: Option<&Token>) -> Token {
        if !token.kind.is_operator() {
            return token;
        }
        match self.resolver.resolve(text, prev) {
            Some(op) => token.payload = Some(SemanticId::Operator(op)),
            None => {
                token.kind.remove(TokenKind::OP);
                token.kind.insert(TokenKind::OTHER);
            }
        }
        token
    }
}

impl<R: OperatorResolver> Classify for PhpClassifier<'_, R> {
    type Token = Token;

    fn classify(&mut self, cursor: &mut Cursor<'_>, sink: &mut TokenBuffer<Token>) -> Step<Token> {
        let (step, replaces) = self.scan(cursor, sink);
        if let (Step::Token(token), Some(hook)) = (&step, self.hook.as_mut()) {
            if hook(token).is_break() {
                trace!(line = token.line, "hook requested abort");
                return Step::Abort;
            }
        }
        sink.pop_n(replaces);
        step
    }
}

impl<R: std::fmt::Debug> std::fmt::Debug for PhpClassifier<'_, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhpClassifier")
            .field("resolver", &self.resolver)
            .field("hook", &self.hook.is_some())
            .finish()
    }
}

fn line_comment(cursor: &mut Cursor<'_>) -> Step<Token> {
    cursor.eat_until_newline_or_eof();
    Step::Skip
}

/// Consume the current byte if it is `byte`.
#[inline]
fn eat_if(cursor: &mut Cursor<'_>, byte: u8) -> bool {
    if !cursor.at_end() && cursor.current() == byte {
        cursor.advance();
        true
    } else {
        false
    }
}
