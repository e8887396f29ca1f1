use serde::{Deserialize, Serialize};

/// Which stages run for a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionOptions {
    #[serde(default)]
    pub names: bool,

    #[serde(default)]
    pub dates: bool,

    #[serde(default)]
    pub phones: bool,

    #[serde(default)]
    pub address: bool,

    /// Seed word for concept redaction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concept: Option<String>,
}

impl RedactionOptions {
    /// Every pattern category on, no concept
    pub fn all() -> Self {
        Self {
            names: true,
            dates: true,
            phones: true,
            address: true,
            concept: None,
        }
    }

    pub fn with_concept(mut self, concept: impl Into<String>) -> Self {
        self.concept = Some(concept.into());
        self
    }

    /// Concept seed, ignoring blank input
    pub fn concept_seed(&self) -> Option<&str> {
        self.concept
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    pub fn is_noop(&self) -> bool {
        !self.names && !self.dates && !self.phones && !self.address && self.concept_seed().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_noop() {
        assert!(RedactionOptions::default().is_noop());
        assert!(!RedactionOptions::all().is_noop());
    }

    #[test]
    fn test_blank_concept_is_ignored() {
        let options = RedactionOptions::default().with_concept("   ");
        assert_eq!(options.concept_seed(), None);
        assert!(options.is_noop());

        let options = RedactionOptions::default().with_concept(" dog ");
        assert_eq!(options.concept_seed(), Some("dog"));
    }
}
