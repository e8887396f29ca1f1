//! Redaction of recognizer spans

use censor_core::{Category, Span, span::redact_spans};

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether a `\b` assertion holds between `before` and `after`
fn is_boundary(before: Option<char>, after: Option<char>) -> bool {
    before.is_some_and(is_word) != after.is_some_and(is_word)
}

/// Spans of every occurrence of `needle` that `\bneedle\b` would match,
/// left to right and non-overlapping
pub fn whole_word_spans(text: &str, needle: &str, category: Category) -> Vec<Span> {
    let mut spans = Vec::new();
    let (Some(first), Some(last)) = (needle.chars().next(), needle.chars().next_back()) else {
        return spans;
    };

    let mut from = 0;
    while let Some(offset) = text[from..].find(needle) {
        let start = from + offset;
        let end = start + needle.len();
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();

        if is_boundary(before, Some(first)) && is_boundary(Some(last), after) {
            spans.push(Span::new(start, end, category));
            from = end;
        } else {
            // A rejected candidate may overlap the next real occurrence
            from = start + first.len_utf8();
        }
    }

    spans
}

/// Block out every whole-word occurrence of `needle`
pub fn redact_whole_word(text: &str, needle: &str, category: Category) -> String {
    let spans = whole_word_spans(text, needle, category);
    if spans.is_empty() {
        return text.to_string();
    }
    redact_spans(text, &spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_every_whole_word() {
        assert_eq!(
            redact_whole_word("Ann met Ann, not Anna.", "Ann", Category::Names),
            "███ met ███, not Anna."
        );
    }

    #[test]
    fn test_multiword_needle() {
        assert_eq!(
            redact_whole_word("to New York City", "New York", Category::Addresses),
            "to ████████ City"
        );
    }

    #[test]
    fn test_block_neighbours_are_boundaries() {
        assert_eq!(redact_whole_word("██Ann", "Ann", Category::Names), "█████");
    }

    #[test]
    fn test_no_match_and_empty() {
        assert_eq!(
            redact_whole_word("nothing here", "Ann", Category::Names),
            "nothing here"
        );
        assert_eq!(redact_whole_word("", "Ann", Category::Names), "");
        assert_eq!(redact_whole_word("Ann", "", Category::Names), "Ann");
    }

    #[test]
    fn test_overlapping_rejected_candidate() {
        assert_eq!(
            redact_whole_word("xab ab ab", "ab ab", Category::Names),
            "xab █████"
        );
        assert_eq!(
            whole_word_spans("xab ab ab", "ab ab", Category::Names),
            vec![Span::new(4, 9, Category::Names)]
        );
    }

    #[test]
    fn test_multibyte_neighbours() {
        assert_eq!(redact_whole_word("éAnn Ann", "Ann", Category::Names), "éAnn ███");
    }
}
