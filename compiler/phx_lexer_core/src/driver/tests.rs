#![allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]

use super::*;
use pretty_assertions::assert_eq;

/// Toy token: `(start, end, line)` of an ASCII word.
type Word = (u32, u32, u32);

/// Toy language exercising every `Step`:
/// - ASCII words → tokens
/// - digits → skipped
/// - `;` → stop
/// - `@` → abort
/// - `?` → stalls (returns `Skip` without consuming)
/// - anything else → consumed silently as a skip
struct Words;

impl Classify for Words {
    type Token = Word;

    fn classify(&mut self, cursor: &mut Cursor<'_>, _sink: &mut TokenBuffer<Word>) -> Step<Word> {
        cursor.skip_whitespace();
        if cursor.at_end() {
            return Step::EndOfInput;
        }
        let start = cursor.pos();
        let line = cursor.line();
        match cursor.current() {
            b if b.is_ascii_alphabetic() => {
                cursor.eat_while(|b| b.is_ascii_alphabetic());
                Step::Token((start, cursor.pos(), line))
            }
            b if b.is_ascii_digit() => {
                cursor.eat_while(|b| b.is_ascii_digit());
                Step::Skip
            }
            b';' => Step::Stop,
            b'@' => Step::Abort,
            b'?' => Step::Skip,
            _ => {
                cursor.advance();
                Step::Skip
            }
        }
    }
}

fn run(options: DriverOptions<Word>, source: &[u8]) -> (Result<LexStats, LexError>, Vec<Word>) {
    let mut sink = TokenBuffer::new();
    let result = Driver::new(options).run(&mut Words, source, &mut sink);
    (result, sink.into_vec())
}

// === Loop ===

#[test]
fn collects_tokens_in_order() {
    let (result, tokens) = run(DriverOptions::default(), b"ab cd\nef");
    let stats = result.unwrap();
    assert_eq!(tokens, vec![(0, 2, 1), (3, 5, 1), (6, 8, 2)]);
    assert_eq!(stats.emitted, 3);
    assert_eq!(stats.skipped, 0);
    assert_eq!(stats.last_line, 2);
}

#[test]
fn empty_source_produces_nothing() {
    let (result, tokens) = run(DriverOptions::default(), b"");
    assert_eq!(result.unwrap(), LexStats { last_line: 1, ..LexStats::default() });
    assert!(tokens.is_empty());
}

#[test]
fn whitespace_only_reports_end_of_input() {
    let (result, tokens) = run(DriverOptions::default(), b"  \n  ");
    assert!(tokens.is_empty());
    assert_eq!(result.unwrap().last_line, 2);
}

#[test]
fn skips_are_counted() {
    let (result, tokens) = run(DriverOptions::default(), b"a 12 b 345");
    let stats = result.unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(stats.skipped, 2);
}

#[test]
fn starting_line_offsets_every_token() {
    let (result, tokens) = run(DriverOptions::default().with_starting_line(10), b"a\nb");
    assert_eq!(tokens, vec![(0, 1, 10), (2, 3, 11)]);
    assert_eq!(result.unwrap().last_line, 11);
}

// === Termination ===

#[test]
fn stalled_classifier_is_forced_forward() {
    let (result, tokens) = run(DriverOptions::default(), b"a??b");
    let stats = result.unwrap();
    assert_eq!(tokens, vec![(0, 1, 1), (3, 4, 1)]);
    assert_eq!(stats.forced_advances, 2);
}

#[test]
fn stop_keeps_partial_tokens() {
    let (result, tokens) = run(DriverOptions::default(), b"ab ; cd");
    assert_eq!(result.unwrap().emitted, 1);
    assert_eq!(tokens, vec![(0, 2, 1)]);
}

#[test]
fn abort_is_propagated() {
    let (result, tokens) = run(DriverOptions::default(), b"ab\n@ cd");
    assert_eq!(result, Err(LexError::Aborted { offset: 3, line: 2 }));
    assert_eq!(tokens, vec![(0, 2, 1)]);
}

// === Sorting ===

fn by_start_descending(a: &Word, b: &Word) -> Ordering {
    b.0.cmp(&a.0)
}

#[test]
fn sort_applies_after_run() {
    let options = DriverOptions::default().with_sort(by_start_descending);
    let (result, tokens) = run(options, b"a b c");
    result.unwrap();
    assert_eq!(tokens, vec![(4, 5, 1), (2, 3, 1), (0, 1, 1)]);
}

#[test]
fn abort_skips_sort() {
    let options = DriverOptions::default().with_sort(by_start_descending);
    let (result, tokens) = run(options, b"a b @");
    assert!(result.is_err());
    assert_eq!(tokens, vec![(0, 1, 1), (2, 3, 1)]);
}

#[test]
fn default_options() {
    let driver: Driver<Word> = Driver::default();
    assert_eq!(driver.options().starting_line, 1);
    assert!(driver.options().sort.is_none());
}
