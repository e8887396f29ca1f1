//! Concept redaction
//!
//! Coarse-grained: any sentence containing a vocabulary term is blocked out
//! whole. Sentences are rejoined with single spaces, so runs of spaces after
//! sentence-final punctuation collapse to one. Line terminators are kept.

use censor_core::{Category, RedactionStats, Result, block_run};
use censor_lexicon::ConceptVocabulary;
use regex::Regex;
use std::collections::BTreeSet;
use tracing::debug;

use crate::stage::Stage;

pub struct ConceptStage {
    pattern: Option<Regex>,
}

impl ConceptStage {
    pub fn new(vocabulary: &ConceptVocabulary) -> Result<Self> {
        Ok(Self {
            pattern: vocabulary.pattern()?,
        })
    }
}

impl Stage for ConceptStage {
    fn category(&self) -> Category {
        Category::Concepts
    }

    fn apply(&self, text: &str, stats: &mut RedactionStats) -> String {
        let Some(pattern) = &self.pattern else {
            return text.to_string();
        };

        let mut found = BTreeSet::new();
        let mut result = String::with_capacity(text.len());

        for raw in text.split_inclusive('\n') {
            let (line, terminator) = split_terminator(raw);
            let sentences: Vec<String> = split_sentences(line)
                .into_iter()
                .map(|sentence| match pattern.find(sentence) {
                    Some(term) => {
                        stats.add(Category::Concepts, 1);
                        found.insert(term.as_str().to_lowercase());
                        block_run(sentence)
                    }
                    None => sentence.to_string(),
                })
                .collect();
            result.push_str(&sentences.join(" "));
            result.push_str(terminator);
        }

        if !found.is_empty() {
            debug!(terms = ?found, "found similar words");
        }

        result
    }
}

/// Separate a line from its `\n` or `\r\n` terminator
fn split_terminator(raw: &str) -> (&str, &str) {
    if let Some(line) = raw.strip_suffix("\r\n") {
        (line, "\r\n")
    } else if let Some(line) = raw.strip_suffix('\n') {
        (line, "\n")
    } else {
        (raw, "")
    }
}

/// Split a line after `.`, `!` or `?` followed by spaces (the spaces are
/// dropped), and after an ellipsis followed directly by more text.
pub fn split_sentences(line: &str) -> Vec<&str> {
    let bytes = line.as_bytes();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let after_terminal = i > 0 && matches!(bytes[i - 1], b'.' | b'!' | b'?');
        if after_terminal && bytes[i] == b' ' {
            sentences.push(&line[start..i]);
            while i < bytes.len() && bytes[i] == b' ' {
                i += 1;
            }
            start = i;
            continue;
        }
        if i >= 3 && i > start && &bytes[i - 3..i] == b"..." {
            sentences.push(&line[start..i]);
            start = i;
        }
        i += 1;
    }

    sentences.push(&line[start..]);
    sentences
}
