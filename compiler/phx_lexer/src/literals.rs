//! Literal scanners: numbers, quoted strings, heredoc and nowdoc.
//!
//! Each scanner is entered with the cursor on the literal's first byte and
//! leaves it just past the literal. None of them fails: an unterminated
//! string or heredoc runs to end of input and the parser reports it.

use phx_lexer_core::{Cursor, TextSpan};

use crate::TokenKind;

// ─── Numbers ────────────────────────────────────────────────────────────

/// Scan a numeric literal starting at an ASCII digit.
///
/// `0x`/`0X` and `0b`/`0B` prefixes are recognized only after a leading
/// `0` and only when a valid digit follows. An exponent is consumed only
/// when a digit (or a sign and a digit) follows the `e`, so `1else` lexes
/// as `1` then `else`.
pub(crate) fn number(cursor: &mut Cursor<'_>) -> TokenKind {
    let first = cursor.current();
    cursor.advance();

    if first == b'0' {
        match (cursor.current(), cursor.peek()) {
            (b'x' | b'X', d) if d.is_ascii_hexdigit() => {
                cursor.advance();
                cursor.eat_while(|b| b.is_ascii_hexdigit());
                return TokenKind::INTEGER;
            }
            (b'b' | b'B', b'0' | b'1') => {
                cursor.advance();
                cursor.eat_while(|b| matches!(b, b'0' | b'1'));
                return TokenKind::INTEGER;
            }
            _ => {}
        }
    }

    cursor.eat_while(|b| b.is_ascii_digit());
    let mut kind = TokenKind::INTEGER;

    if cursor.current() == b'.' {
        cursor.advance();
        cursor.eat_while(|b| b.is_ascii_digit());
        kind = TokenKind::REAL;
    }

    if matches!(cursor.current(), b'e' | b'E') {
        let digits_at = match cursor.peek() {
            b'+' | b'-' => 2,
            _ => 1,
        };
        let next = if digits_at == 2 { cursor.peek2() } else { cursor.peek() };
        if next.is_ascii_digit() {
            cursor.advance_n(digits_at);
            cursor.eat_while(|b| b.is_ascii_digit());
            kind = TokenKind::REAL;
        }
    }

    kind
}

// ─── Quoted Strings ─────────────────────────────────────────────────────

/// Scan a single-quoted or backtick string. Returns the body span, quotes
/// excluded.
///
/// A closing quote is escaped when an odd number of backslashes precedes
/// it (`\\'` closes, `\'` does not).
pub(crate) fn quoted(cursor: &mut Cursor<'_>, quote: u8) -> TextSpan {
    cursor.advance();
    let body = cursor.pos();
    loop {
        if !cursor.skip_to(quote) {
            return TextSpan::borrowed(body, cursor.pos());
        }
        if is_escaped(cursor, body) {
            cursor.advance();
            continue;
        }
        let end = cursor.pos();
        cursor.advance();
        return TextSpan::borrowed(body, end);
    }
}

/// Scan a double-quoted string. Returns the body span, quotes excluded.
///
/// A `{$` opens an interpolated expression that runs to its matching `}`.
/// Quote characters inside it never close the string. Braces inside a
/// nested quoted string (`{$a['{']}`) are not counted.
pub(crate) fn double_quoted(cursor: &mut Cursor<'_>) -> TextSpan {
    cursor.advance();
    let body = cursor.pos();
    loop {
        match cursor.skip_to2(b'"', b'{') {
            b'"' if is_escaped(cursor, body) => cursor.advance(),
            b'"' => {
                let end = cursor.pos();
                cursor.advance();
                return TextSpan::borrowed(body, end);
            }
            b'{' if cursor.peek() == b'$' => interpolation(cursor),
            b'{' => cursor.advance(),
            _ => return TextSpan::borrowed(body, cursor.pos()),
        }
    }
}

fn is_escaped(cursor: &Cursor<'_>, floor: u32) -> bool {
    cursor.count_preceding(b'\\', floor) % 2 == 1
}

/// Consume `{$ ... }` with the cursor on the `{`.
fn interpolation(cursor: &mut Cursor<'_>) {
    cursor.advance();
    let mut depth: u32 = 1;
    while !cursor.at_end() {
        match cursor.current() {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    cursor.advance();
                    return;
                }
            }
            quote @ (b'\'' | b'"') => {
                nested_quote(cursor, quote);
                continue;
            }
            _ => {}
        }
        cursor.advance();
    }
}

/// Skip a quoted string inside an interpolated expression.
fn nested_quote(cursor: &mut Cursor<'_>, quote: u8) {
    cursor.advance();
    let floor = cursor.pos();
    while cursor.skip_to(quote) {
        let escaped = is_escaped(cursor, floor);
        cursor.advance();
        if !escaped {
            return;
        }
    }
}

// ─── Heredoc / Nowdoc ───────────────────────────────────────────────────

/// A scanned heredoc or nowdoc body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DocBody {
    pub kind: TokenKind,
    pub span: TextSpan,
    /// Line of the first body byte.
    pub line: u32,
}

/// Try to scan a heredoc (`<<<LABEL`, `<<<"LABEL"`) or nowdoc
/// (`<<<'LABEL'`) with the cursor on the first `<`.
///
/// The opener must be followed by optional spaces or tabs and a line
/// break. The body ends before the line break preceding a line whose
/// first non-blank text is the label, not followed by another identifier
/// byte. Returns `None` and leaves the cursor untouched when the opener is
/// malformed.
pub(crate) fn heredoc(cursor: &mut Cursor<'_>) -> Option<DocBody> {
    let saved = *cursor;
    match doc_opener(cursor) {
        Some(opener) => Some(doc_body(cursor, opener)),
        None => {
            *cursor = saved;
            None
        }
    }
}

struct DocOpener<'a> {
    label: &'a [u8],
    kind: TokenKind,
}

fn doc_opener<'a>(cursor: &mut Cursor<'a>) -> Option<DocOpener<'a>> {
    cursor.advance_n(3);
    cursor.eat_while(is_blank);

    let quote = match cursor.current() {
        q @ (b'\'' | b'"') => {
            cursor.advance();
            Some(q)
        }
        _ => None,
    };

    let start = cursor.pos();
    if !is_ident_start(cursor.current()) {
        return None;
    }
    cursor.eat_while(is_ident_continue);
    let label = cursor.slice_from(start);

    if let Some(q) = quote {
        if cursor.current() != q {
            return None;
        }
        cursor.advance();
    }

    cursor.eat_while(is_blank);
    match (cursor.current(), cursor.peek()) {
        (b'\n', _) => cursor.advance(),
        (b'\r', b'\n') => cursor.advance_n(2),
        _ => return None,
    }

    let kind = if quote == Some(b'\'') {
        TokenKind::NOWDOC
    } else {
        TokenKind::HEREDOC
    };
    Some(DocOpener { label, kind })
}

fn doc_body(cursor: &mut Cursor<'_>, opener: DocOpener<'_>) -> DocBody {
    let body = cursor.pos();
    let line = cursor.line();

    loop {
        let line_start = cursor.pos();
        let mut probe = *cursor;
        probe.eat_while(is_blank);
        if closes_doc(probe.rest(), opener.label) {
            probe.advance_n(len_u32(opener.label));
            *cursor = probe;
            return DocBody {
                kind: opener.kind,
                span: TextSpan::borrowed(body, trim_line_break(cursor, body, line_start)),
                line,
            };
        }

        cursor.eat_until_newline_or_eof();
        if cursor.at_end() {
            return DocBody {
                kind: opener.kind,
                span: TextSpan::borrowed(body, cursor.pos()),
                line,
            };
        }
        cursor.advance();
    }
}

fn closes_doc(rest: &[u8], label: &[u8]) -> bool {
    rest.starts_with(label)
        && !rest
            .get(label.len())
            .is_some_and(|&b| is_ident_continue(b))
}

/// Body end for a closing label found at `line_start`: the line break
/// before it is not part of the body.
fn trim_line_break(cursor: &Cursor<'_>, body: u32, line_start: u32) -> u32 {
    if line_start == body {
        return body;
    }
    let mut end = line_start - 1;
    if end > body && cursor.slice(end - 1, end) == b"\r" {
        end -= 1;
    }
    end
}

fn len_u32(bytes: &[u8]) -> u32 {
    u32::try_from(bytes.len()).unwrap_or(u32::MAX)
}

// ─── Byte Classes ───────────────────────────────────────────────────────

#[inline]
fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t')
}

/// First byte of an identifier: ASCII letter, `_`, or a UTF-8 lead byte.
#[inline]
pub(crate) fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0xC0
}

/// Identifier continuation: ASCII alphanumeric, `_`, or any non-ASCII byte.
#[inline]
pub(crate) fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}
