use censor_core::{Category, RedactionStats, span::redact_matches};
use regex::Regex;
use tracing::trace;

/// A named pattern in a prioritized rule list
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub name: &'static str,
    pub regex: Regex,
}

impl PatternRule {
    /// Build a rule from a pattern known at compile time
    pub(crate) fn fixed(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).unwrap(),
        }
    }
}

/// Apply rules in order, each one on the previous rule's output.
///
/// Every match is counted and blocked out, so later rules only ever see block
/// runs where earlier rules matched.
pub fn apply_chained(
    rules: &[PatternRule],
    text: &str,
    category: Category,
    stats: &mut RedactionStats,
) -> String {
    let mut result = text.to_string();

    for rule in rules {
        let (redacted, count) = redact_matches(&rule.regex, &result);
        if count > 0 {
            trace!(rule = rule.name, count, "pattern matched");
            stats.add(category, count);
            result = redacted;
        }
    }

    result
}
