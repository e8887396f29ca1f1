//! Phone numbers
//!
//! All shapes are combined into one alternation and scanned left to right;
//! the first alternative that matches at the leftmost position wins.

use censor_core::{Category, RedactionStats, block_run};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::stage::Stage;

const SHAPES: &[&str] = &[
    // 123-456-7890
    r"\b\d{3}[-.\s]?\d{3}[-.\s]?\d{4}\b",
    // (123) 456-7890
    r"\(\d{3}\)\s?\d{3}[-.\s]?\d{4}\b",
    // +1 (123) 456-7890
    r"\b\+?[1-9]{1,2}[-.\s]?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b",
    // 123 456 7890
    r"\b\d{3}\s\d{3}\s\d{4}\b",
    // 1234567890
    r"\b\d{10}\b",
    // +11234567890
    r"\b\+?[1-9]{1,2}\d{10}\b",
    // 123-456-7890 x1234
    r"\b\d{3}[-.\s]?\d{3}[-.\s]?\d{4}(?:\s?(?:x|ext\.?)\s?\d{1,5})?\b",
];

lazy_static! {
    static ref PHONE: Regex = Regex::new(
        &SHAPES
            .iter()
            .map(|shape| format!("({})", shape))
            .collect::<Vec<_>>()
            .join("|")
    )
    .unwrap();
}

#[derive(Debug, Default)]
pub struct PhoneStage;

impl PhoneStage {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for PhoneStage {
    fn category(&self) -> Category {
        Category::Phones
    }

    fn apply(&self, text: &str, stats: &mut RedactionStats) -> String {
        let mut result = text.to_string();

        for found in PHONE.find_iter(text) {
            let number = found.as_str();
            trace!(len = number.len(), "phone number matched");
            stats.add(Category::Phones, 1);
            if result.contains(number) {
                result = result.replace(number, &block_run(number));
            }
        }

        result
    }
}
