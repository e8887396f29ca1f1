//! Postal addresses
//!
//! Recognizer `Place` spans first, then street, street + ZIP and bare ZIP
//! patterns. The patterns overlap, so a street address followed by a ZIP code
//! is counted by both the street and ZIP rules.

use censor_core::{Category, RedactionStats};
use censor_entities::{EntityCategory, EntityRecognizer, recognize};
use std::sync::Arc;
use tracing::debug;

use crate::entity::redact_whole_word;
use crate::pattern::{PatternRule, apply_chained};
use crate::stage::Stage;

const STREET_SUFFIX: &str = "(?:St|Street|Ave|Avenue|Rd|Road|Blvd|Boulevard|Dr|Drive|Lane|Ln|Way|Plaza|Square|Place|Court|Ct|Crescent|Cres|Circle|Cir)";

pub struct AddressStage {
    recognizer: Arc<dyn EntityRecognizer>,
    rules: Vec<PatternRule>,
}

impl AddressStage {
    pub fn new(recognizer: Arc<dyn EntityRecognizer>) -> Self {
        let rules = vec![
            PatternRule::fixed(
                "street",
                &format!(r"\b\d{{1,5}}\s(?:[A-Za-z]+\s)*{STREET_SUFFIX}\b"),
            ),
            PatternRule::fixed(
                "street_zip",
                r"\b\d{1,5}\s(?:[A-Za-z]+\s)*\d{5}(?:-\d{4})?\b",
            ),
            PatternRule::fixed("zip", r"\b\d{5}\b"),
        ];

        Self { recognizer, rules }
    }
}

impl Stage for AddressStage {
    fn category(&self) -> Category {
        Category::Addresses
    }

    fn apply(&self, text: &str, stats: &mut RedactionStats) -> String {
        let mut result = text.to_string();

        for entity in recognize(self.recognizer.as_ref(), text)
            .into_iter()
            .filter(|e| e.category == EntityCategory::Place)
        {
            debug!(entity = %entity.text, "redacting place entity");
            stats.add(Category::Addresses, 1);
            result = redact_whole_word(&result, &entity.text, Category::Addresses);
        }

        apply_chained(&self.rules, &result, Category::Addresses, stats)
    }
}
