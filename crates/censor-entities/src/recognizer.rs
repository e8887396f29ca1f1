use serde::{Deserialize, Serialize};

/// A labelled span as produced by a recognizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntity {
    pub text: String,
    pub label: String,
}

impl RawEntity {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// Entity categories the redaction stages care about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityCategory {
    Person,
    Place,
    Other,
}

impl EntityCategory {
    pub fn from_label(label: &str) -> Self {
        match label {
            "PERSON" => EntityCategory::Person,
            "GPE" | "LOC" | "FAC" => EntityCategory::Place,
            _ => EntityCategory::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMatch {
    pub text: String,
    pub category: EntityCategory,
}

/// Text classifier labelling spans with semantic categories.
///
/// Implementations are loaded once and shared read-only across documents.
pub trait EntityRecognizer: Send + Sync {
    /// Labelled spans in text order
    fn recognize(&self, text: &str) -> Vec<RawEntity>;
}

/// Run `recognizer` and map its labels, dropping [`EntityCategory::Other`]
pub fn recognize(recognizer: &dyn EntityRecognizer, text: &str) -> Vec<EntityMatch> {
    if text.is_empty() {
        return Vec::new();
    }
    recognizer
        .recognize(text)
        .into_iter()
        .filter(|e| !e.text.is_empty())
        .map(|e| EntityMatch {
            category: EntityCategory::from_label(&e.label),
            text: e.text,
        })
        .filter(|e| e.category != EntityCategory::Other)
        .collect()
}
