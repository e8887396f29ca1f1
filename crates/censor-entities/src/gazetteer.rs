//! Dictionary-based recognizer
//!
//! Matches configured names as whole, case-sensitive words. Longer entries win
//! over their prefixes ("New York City" before "New York").

use censor_core::Result;
use regex::Regex;
use std::collections::HashMap;
use tracing::debug;

use crate::recognizer::{EntityRecognizer, RawEntity};

/// US state names and postal codes
pub const US_STATES: &[(&str, &str)] = &[
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("District of Columbia", "DC"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
];

/// Collects gazetteer entries before compiling the matcher
#[derive(Debug, Default)]
pub struct GazetteerBuilder {
    entries: Vec<(String, String)>,
}

impl GazetteerBuilder {
    pub fn persons<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries("PERSON", names)
    }

    pub fn places<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries("GPE", names)
    }

    pub fn facilities<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries("FAC", names)
    }

    pub fn us_states(self) -> Self {
        let names = US_STATES.iter().flat_map(|(name, code)| [*name, *code]);
        self.places(names)
    }

    pub fn entries<I, S>(mut self, label: &str, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into().trim().to_string();
            if !name.is_empty() {
                self.entries.push((name, label.to_string()));
            }
        }
        self
    }

    pub fn build(self) -> Result<GazetteerRecognizer> {
        // First label registered for a name wins
        let mut labels: HashMap<String, String> = HashMap::new();
        for (name, label) in self.entries {
            labels.entry(name).or_insert(label);
        }

        if labels.is_empty() {
            return Ok(GazetteerRecognizer {
                pattern: None,
                labels,
            });
        }

        let mut names: Vec<&String> = labels.keys().collect();
        names.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        let alternation = names
            .iter()
            .map(|n| regex::escape(n))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"\b(?:{})\b", alternation))?;

        debug!(entries = labels.len(), "compiled gazetteer");
        Ok(GazetteerRecognizer {
            pattern: Some(pattern),
            labels,
        })
    }
}

pub struct GazetteerRecognizer {
    pattern: Option<Regex>,
    labels: HashMap<String, String>,
}

impl GazetteerRecognizer {
    pub fn builder() -> GazetteerBuilder {
        GazetteerBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl EntityRecognizer for GazetteerRecognizer {
    fn recognize(&self, text: &str) -> Vec<RawEntity> {
        let Some(pattern) = &self.pattern else {
            return Vec::new();
        };
        pattern
            .find_iter(text)
            .filter_map(|m| {
                self.labels
                    .get(m.as_str())
                    .map(|label| RawEntity::new(m.as_str(), label.as_str()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognizes_configured_entries() {
        let recognizer = GazetteerRecognizer::builder()
            .persons(["Ann Lee", "Bob"])
            .places(["Gainesville"])
            .facilities(["Union Station"])
            .build()
            .unwrap();

        let entities = recognizer.recognize("Bob met Ann Lee at Union Station in Gainesville.");
        assert_eq!(
            entities,
            vec![
                RawEntity::new("Bob", "PERSON"),
                RawEntity::new("Ann Lee", "PERSON"),
                RawEntity::new("Union Station", "FAC"),
                RawEntity::new("Gainesville", "GPE"),
            ]
        );
    }

    #[test]
    fn test_whole_words_only() {
        let recognizer = GazetteerRecognizer::builder()
            .persons(["Bob"])
            .build()
            .unwrap();

        assert!(recognizer.recognize("Bobby and bob").is_empty());
    }

    #[test]
    fn test_longest_entry_wins() {
        let recognizer = GazetteerRecognizer::builder().us_states().build().unwrap();

        let entities = recognizer.recognize("From West Virginia to Virginia, FL too.");
        let texts: Vec<_> = entities.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["West Virginia", "Virginia", "FL"]);
        assert!(entities.iter().all(|e| e.label == "GPE"));
    }

    #[test]
    fn test_first_label_wins() {
        let recognizer = GazetteerRecognizer::builder()
            .persons(["Georgia"])
            .us_states()
            .build()
            .unwrap();

        assert_eq!(recognizer.recognize("Georgia")[0].label, "PERSON");
    }

    #[test]
    fn test_empty_gazetteer() {
        let recognizer = GazetteerRecognizer::builder().build().unwrap();
        assert!(recognizer.is_empty());
        assert!(recognizer.recognize("Anything at all").is_empty());
    }
}
