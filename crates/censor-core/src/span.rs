//! Spans and block runs
//!
//! Every redaction replaces the matched characters with [`BLOCK`] repeated once
//! per character, so the redacted document keeps its layout.

use crate::Category;
use regex::{Captures, Regex};

/// Filler character for redacted spans
pub const BLOCK: char = '█';

/// A redaction target within one text snapshot (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub category: Category,
}

impl Span {
    pub fn new(start: usize, end: usize, category: Category) -> Self {
        Self {
            start,
            end,
            category,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Number of characters (not bytes) in `text`
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// A block run as long as `text` in characters
pub fn block_run(text: &str) -> String {
    std::iter::repeat_n(BLOCK, char_len(text)).collect()
}

/// Replace every span with a block run. Spans must be sorted and disjoint.
pub fn redact_spans(text: &str, spans: &[Span]) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    let mut cursor = 0;
    for span in spans.iter().filter(|s| !s.is_empty()) {
        out.push_str(&text[cursor..span.start]);
        out.push_str(&block_run(&text[span.start..span.end]));
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Count and block out every non-overlapping match of `pattern`
pub fn redact_matches(pattern: &Regex, text: &str) -> (String, usize) {
    let mut count = 0;
    let redacted = pattern
        .replace_all(text, |caps: &Captures<'_>| {
            count += 1;
            block_run(&caps[0])
        })
        .into_owned();
    (redacted, count)
}
