//! Property-based tests for the PHP lexer.
//!
//! 1. Termination: arbitrary bytes always tokenize without panicking.
//! 2. Spans: borrowed spans are in bounds, ordered, and disjoint.
//! 3. Lines: every token's line matches the newlines before its first byte.
//! 4. Round trip: the bytes between tokens are whitespace, string
//!    delimiters, complete comments, or the pieces of a synthesized token.
//! 5. Idempotence: re-serialized tokens lex to the same kinds.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use phx_lexer::{tokenize, tokenize_from_line, Token, TokenKind};
use proptest::prelude::*;

// -- Strategies --

/// Arbitrary bytes, biased toward the bytes that drive lexer state.
fn source_bytes() -> impl Strategy<Value = Vec<u8>> {
    let interesting = prop::sample::select(vec![
        b'\n', b' ', b'\'', b'"', b'`', b'\\', b'{', b'}', b'$', b'<', b'=', b'&', b'(', b')',
        b'/', b'*', b'#', b'0', b'x', b'e', b'.', b'i', b'n', b't', 0x00, 0x80, 0xC3,
    ]);
    prop::collection::vec(prop_oneof![any::<u8>(), interesting], 0..256)
}

/// Well-formed token fragments.
const FRAGMENTS: &[&str] = &[
    "foo", "Bar", "$", "x1", "new", "echo", "int", "string", "(", ")", "[", "]", "{", "}", ";",
    ",", "=", "&", "+", "-", "*", "/", "%", ".", "<", ">", "!", "?", ":", "|", "^", "~", "@",
    "==", "->", "::", "=>", "&&", "<>", "<=", "123", "1.5", "0x1F", "1e3", "'s'", "\"d\"",
    "`b`", "\\", "# note\n", "// note\n", "/* note */", "/* a\nb */",
];

fn fragment_source() -> impl Strategy<Value = String> {
    let fragment = prop::sample::select(FRAGMENTS);
    let separator = prop::sample::select(vec![" ", "  ", "\n", " \n "]);
    prop::collection::vec((fragment, separator), 0..40).prop_map(|parts| {
        parts
            .into_iter()
            .flat_map(|(fragment, sep)| [fragment, sep])
            .collect()
    })
}

// -- Helpers --

fn newlines_before(src: &[u8], offset: u32) -> u32 {
    let count = src[..offset as usize].iter().filter(|&&b| b == b'\n').count();
    u32::try_from(count).unwrap()
}

fn reserialize(src: &[u8], tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let text = String::from_utf8_lossy(token.text(src));
        let quote = if token.is(TokenKind::SSTR) {
            "'"
        } else if token.is(TokenKind::DSTR) {
            "\""
        } else if token.is(TokenKind::BSTR) {
            "`"
        } else {
            ""
        };
        out.push_str(quote);
        out.push_str(&text);
        out.push_str(quote);
        out.push(' ');
    }
    out
}

/// Length of the complete comment at the start of `rest`, or 0.
///
/// A line comment runs to its newline (or the end of the gap). A block
/// comment counts only with its closing `*/`.
fn comment_len(rest: &[u8]) -> usize {
    if rest.starts_with(b"#") || rest.starts_with(b"//") {
        rest.iter().position(|&b| b == b'\n').unwrap_or(rest.len())
    } else if rest.starts_with(b"/*") {
        rest[2..]
            .windows(2)
            .position(|w| w == b"*/")
            .map_or(0, |at| at + 4)
    } else {
        0
    }
}

/// Bytes of `gap` other than whitespace, string delimiters and complete
/// comments, lowercased.
fn residue(gap: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < gap.len() {
        let comment = comment_len(&gap[i..]);
        if comment > 0 {
            i += comment;
            continue;
        }
        let b = gap[i];
        if !b.is_ascii_whitespace() && !matches!(b, b'\'' | b'"' | b'`') {
            out.push(b.to_ascii_lowercase());
        }
        i += 1;
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn arbitrary_bytes_terminate(src in source_bytes()) {
        let out = tokenize(&src).unwrap();
        prop_assert!(out.tokens.len() <= src.len());
    }

    #[test]
    fn spans_are_ordered_and_in_bounds(src in source_bytes()) {
        let out = tokenize(&src).unwrap();
        let mut floor = 0u32;
        for token in &out.tokens {
            if let (Some(start), Some(end)) = (token.span.offset(), token.span.end()) {
                prop_assert!(start >= floor, "{:?} overlaps previous token", token);
                prop_assert!(end as usize <= src.len());
                floor = end;
            }
        }
    }

    #[test]
    fn lines_match_newline_count(src in source_bytes(), first in 1u32..1000) {
        let out = tokenize_from_line(&src, first).unwrap();
        let mut last = first;
        for token in &out.tokens {
            prop_assert!(token.line >= last, "lines went backwards at {:?}", token);
            last = token.line;
            if let Some(start) = token.span.offset() {
                prop_assert_eq!(token.line, first + newlines_before(&src, start));
            }
        }
        prop_assert_eq!(out.stats.last_line, first + newlines_before(&src, u32::try_from(src.len()).unwrap()));
    }

    #[test]
    fn gaps_hold_only_layout_and_merged_pieces(src in fragment_source()) {
        let bytes = src.as_bytes();
        let out = tokenize(bytes).unwrap();
        let mut pos = 0usize;
        let mut merged = Vec::new();
        for token in &out.tokens {
            match (token.span.offset(), token.span.end()) {
                (Some(start), Some(end)) => {
                    prop_assert_eq!(residue(&bytes[pos..start as usize]), merged.clone(), "source: {:?}", src);
                    merged.clear();
                    pos = end as usize;
                }
                _ => merged.extend_from_slice(token.text(bytes)),
            }
        }
        prop_assert_eq!(residue(&bytes[pos..]), merged, "source: {:?}", src);
    }

    #[test]
    fn relexing_preserves_kinds(src in fragment_source()) {
        let first = tokenize(src.as_bytes()).unwrap();
        let again = reserialize(src.as_bytes(), first.tokens.as_slice());
        let second = tokenize(again.as_bytes()).unwrap();
        let kinds = |tokens: &[Token]| tokens.iter().map(|t| t.kind).collect::<Vec<_>>();
        prop_assert_eq!(kinds(first.tokens.as_slice()), kinds(second.tokens.as_slice()), "relexed: {:?}", again);
    }
}
