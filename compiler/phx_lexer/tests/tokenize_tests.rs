//! End-to-end tokenization through the public entry points.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::ops::ControlFlow;

use phx_lexer::{
    tokenize, tokenize_from_line, Driver, DriverOptions, Keyword, LexError, OperatorId,
    PhpClassifier, Token, TokenBuffer, TokenKind,
};
use pretty_assertions::assert_eq;

fn summary(src: &str) -> Vec<(TokenKind, String, u32)> {
    let out = tokenize(src.as_bytes()).unwrap();
    out.tokens
        .iter()
        .map(|t| {
            let text = String::from_utf8_lossy(t.text(src.as_bytes())).into_owned();
            (t.kind, text, t.line)
        })
        .collect()
}

fn texts(src: &str) -> Vec<String> {
    summary(src).into_iter().map(|(_, text, _)| text).collect()
}

// === Merging ===

#[test]
fn cast_merges_into_one_token() {
    assert_eq!(summary("(int) $x"), vec![
        (TokenKind::OP, "(int)".into(), 1),
        (TokenKind::DOLLAR, "$".into(), 1),
        (TokenKind::ID, "x".into(), 1),
    ]);
}

#[test]
fn reference_assignment_never_splits() {
    for src in ["$a=&$b", "$a =& $b", "$a = &$b", "$a =\n\t& $b"] {
        assert_eq!(texts(src), vec!["$", "a", "=&", "$", "b"], "{src:?}");
    }
}

// === Strings ===

#[test]
fn escape_parity() {
    // Even run before the quote: the quote closes.
    assert_eq!(summary(r"'a\\' b")[0].1, r"a\\");
    // Odd run before the quote: escaped, scanning continues.
    assert_eq!(summary(r"'a\\\'b' c")[0].1, r"a\\\'b");
    assert_eq!(summary(r"'a\\\\\'b' c")[0].1, r"a\\\\\'b");
}

#[test]
fn interpolation_spans_whole_string() {
    let src = r#"$s = "x{$a['{'].$b}y";"#;
    let tokens = summary(src);
    assert_eq!(tokens[3], (TokenKind::DSTR, r"x{$a['{'].$b}y".into(), 1));
    assert_eq!(tokens[4].0, TokenKind::SEMI);
}

#[test]
fn heredoc_in_context() {
    let src = "<?php\n$html = <<<HTML\n  <b>{$name}</b>\nHTML;\necho $html;\n";
    let tokens = summary(src);
    let doc = tokens.iter().find(|t| t.0 == TokenKind::HEREDOC).unwrap();
    assert_eq!(doc.1, "  <b>{$name}</b>");
    assert_eq!(doc.2, 3);
    let echo = tokens.iter().find(|t| t.1 == "echo").unwrap();
    assert_eq!(echo.2, 5);
}

// === Numbers ===

#[test]
fn numeric_classification() {
    let cases = [
        ("123", TokenKind::INTEGER),
        ("123.", TokenKind::REAL),
        ("1e10", TokenKind::REAL),
        ("0x1F", TokenKind::INTEGER),
        ("0b101", TokenKind::INTEGER),
        ("1.5e-3", TokenKind::REAL),
    ];
    for (src, kind) in cases {
        assert_eq!(summary(src), vec![(kind, src.to_owned(), 1)], "{src}");
    }
}

// === Operators ===

#[test]
fn compound_operators_are_single_tokens() {
    for src in ["===", "!==", ">>=", "<<=", "=&"] {
        let tokens = tokenize(src.as_bytes()).unwrap().tokens;
        assert_eq!(tokens.len(), 1, "{src}");
        assert!(tokens[0].kind.is_operator(), "{src}");
        assert!(tokens[0].operator().is_some(), "{src}");
    }
}

#[test]
fn operator_words_keep_both_tags() {
    let out = tokenize(b"$o = new Foo; $o instanceof Foo").unwrap();
    let new = &out.tokens[3];
    assert!(new.is(TokenKind::ID) && new.is(TokenKind::OP));
    assert_eq!(new.operator().map(|op| op.id), Some(OperatorId::New));
    let instanceof = &out.tokens[8];
    assert_eq!(instanceof.operator().map(|op| op.id), Some(OperatorId::Instanceof));
}

// === Statements ===

#[test]
fn small_program() {
    let src = "<?php\nfunction add($a, $b) {\n  // sum\n  return $a + $b;\n}\n";
    let tokens = tokenize(src.as_bytes()).unwrap().tokens;
    let keywords: Vec<_> = tokens.iter().filter_map(Token::keyword).collect();
    assert_eq!(keywords, vec![Keyword::Function, Keyword::Return]);
    let ret = tokens.iter().find(|t| t.keyword() == Some(Keyword::Return)).unwrap();
    assert_eq!(ret.line, 4);
    let plus = tokens.iter().find(|t| t.text(src.as_bytes()) == b"+").unwrap();
    assert_eq!(plus.operator().map(|op| op.id), Some(OperatorId::Add));
}

#[test]
fn comments_contribute_lines() {
    let src = "/* a\nb\nc */ x # y\n z";
    assert_eq!(summary(src), vec![
        (TokenKind::ID, "x".into(), 3),
        (TokenKind::ID, "z".into(), 4),
    ]);
    assert_eq!(tokenize(src.as_bytes()).unwrap().stats.skipped, 2);
}

#[test]
fn embedded_region_keeps_real_lines() {
    let out = tokenize_from_line(b"$x;\n$y;", 12).unwrap();
    let lines: Vec<_> = out.tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![12, 12, 12, 13, 13, 13]);
    assert_eq!(out.stats.last_line, 13);
}

#[test]
fn empty_source() {
    let out = tokenize(b"").unwrap();
    assert!(out.tokens.is_empty());
    assert_eq!(out.stats.emitted, 0);
}

// === Driver ===

#[test]
fn hook_can_stop_a_run() {
    let mut seen = 0usize;
    let result = {
        let mut classifier = PhpClassifier::new().with_hook(|_: &Token| {
            seen += 1;
            if seen == 3 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        let mut sink = TokenBuffer::new();
        Driver::default().run(&mut classifier, b"a b c d", &mut sink)
    };
    assert_eq!(result, Err(LexError::Aborted { offset: 5, line: 1 }));
    assert_eq!(seen, 3);
}

#[test]
fn sorted_output() {
    fn by_line_descending(a: &Token, b: &Token) -> std::cmp::Ordering {
        b.line.cmp(&a.line)
    }
    let mut sink = TokenBuffer::new();
    Driver::new(DriverOptions::default().with_sort(by_line_descending))
        .run(&mut PhpClassifier::new(), b"a\nb\nc", &mut sink)
        .unwrap();
    let lines: Vec<_> = sink.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![3, 2, 1]);
}
