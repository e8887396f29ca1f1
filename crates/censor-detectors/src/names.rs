//! Personal names
//!
//! Four passes, in order: greeting + name, "First M. Last", e-mail local
//! parts, then recognizer `Person` spans.

use censor_core::{Category, RedactionStats, block_run, span::redact_matches};
use censor_entities::{EntityCategory, EntityRecognizer, recognize};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::sync::Arc;
use tracing::debug;

use crate::entity::redact_whole_word;
use crate::stage::Stage;

lazy_static! {
    static ref GREETING: Regex = Regex::new(
        r"\b(Dear|Hello|Hi|Greetings)(\s+)([A-Z][a-zA-Z]+(?:\s[A-Z][a-zA-Z]+)?)\b"
    )
    .unwrap();
    static ref MIDDLE_INITIAL: Regex =
        Regex::new(r"\b[A-Z][a-z]+\s[A-Z]\.\s[A-Z][a-zA-Z']+\b").unwrap();
    static ref EMAIL: Regex = Regex::new(
        r"([a-zA-Z0-9._%+-]+(?:'[a-zA-Z0-9._%+-]+)*)@([a-zA-Z0-9.-]+\.[a-zA-Z]{2,})"
    )
    .unwrap();
    /// Identifier-shaped tokens such as `ID123` or `emp_42`
    static ref IDENTIFIER: Regex =
        Regex::new(r"\b[A-Za-z]+[-_]?[0-9]+[A-Za-z0-9-]*\b").unwrap();
}

pub struct NameStage {
    recognizer: Arc<dyn EntityRecognizer>,
}

impl NameStage {
    pub fn new(recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self { recognizer }
    }

    /// Keep the greeting word, block out the name that follows
    fn redact_greetings(text: &str, stats: &mut RedactionStats) -> String {
        let mut count = 0;
        let result = GREETING
            .replace_all(text, |caps: &Captures<'_>| {
                count += 1;
                format!("{}{}{}", &caps[1], &caps[2], block_run(&caps[3]))
            })
            .into_owned();
        stats.add(Category::Names, count);
        result
    }

    fn redact_initials(text: &str, stats: &mut RedactionStats) -> String {
        let (result, count) = redact_matches(&MIDDLE_INITIAL, text);
        stats.add(Category::Names, count);
        result
    }

    /// Block out the local part, keep `@domain`
    fn redact_emails(text: &str, stats: &mut RedactionStats) -> String {
        let mut count = 0;
        let result = EMAIL
            .replace_all(text, |caps: &Captures<'_>| {
                count += 1;
                format!("{}@{}", block_run(&caps[1]), &caps[2])
            })
            .into_owned();
        stats.add(Category::Names, count);
        result
    }
}

impl Stage for NameStage {
    fn category(&self) -> Category {
        Category::Names
    }

    fn apply(&self, text: &str, stats: &mut RedactionStats) -> String {
        // Entities come from the stage input, before any pass rewrites it
        let entities = recognize(self.recognizer.as_ref(), text);

        let mut result = Self::redact_greetings(text, stats);
        result = Self::redact_initials(&result, stats);
        result = Self::redact_emails(&result, stats);

        for entity in entities
            .iter()
            .filter(|e| e.category == EntityCategory::Person)
        {
            if IDENTIFIER.is_match(&entity.text) {
                debug!(entity = %entity.text, "skipping identifier-shaped person entity");
                continue;
            }
            stats.add(Category::Names, 1);
            result = redact_whole_word(&result, &entity.text, Category::Names);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use censor_core::char_len;
    use censor_entities::RawEntity;

    struct Fixed(Vec<RawEntity>);

    impl EntityRecognizer for Fixed {
        fn recognize(&self, _text: &str) -> Vec<RawEntity> {
            self.0.clone()
        }
    }

    fn stage(entities: Vec<RawEntity>) -> NameStage {
        NameStage::new(Arc::new(Fixed(entities)))
    }

    fn run(stage: &NameStage, text: &str) -> (String, RedactionStats) {
        let mut stats = RedactionStats::new();
        let result = stage.apply(text, &mut stats);
        (result, stats)
    }

    #[test]
    fn test_greeting_keeps_salutation() {
        let (result, stats) = run(&stage(vec![]), "Dear Alice Smith, hello there. Hi Bob!");

        assert_eq!(result, "Dear ███████████, hello there. Hi ███!");
        assert_eq!(stats.names, 2);
    }

    #[test]
    fn test_lowercase_greeting_name_is_not_matched() {
        let (result, stats) = run(&stage(vec![]), "Dear anna,");
        assert_eq!(result, "Dear anna,");
        assert_eq!(stats.names, 0);
    }

    #[test]
    fn test_middle_initial_name() {
        let (result, stats) = run(&stage(vec![]), "Signed, Sean A. O'Brien today");

        assert_eq!(result, "Signed, ███████████████ today");
        assert_eq!(stats.names, 1);
    }

    #[test]
    fn test_email_local_part() {
        let (result, stats) = run(&stage(vec![]), "Mail anna.b@example.com or x@y.org");

        assert_eq!(result, "Mail ██████@example.com or █@y.org");
        assert_eq!(stats.names, 2);
    }

    #[test]
    fn test_person_entities() {
        let names = stage(vec![
            RawEntity::new("Carol", "PERSON"),
            RawEntity::new("Austin", "GPE"),
        ]);
        let (result, stats) = run(&names, "Carol moved to Austin. Carol likes it.");

        assert_eq!(result, "█████ moved to Austin. █████ likes it.");
        assert_eq!(stats.names, 1);
    }

    #[test]
    fn test_identifier_entities_are_skipped() {
        let names = stage(vec![RawEntity::new("ID123", "PERSON")]);
        let (result, stats) = run(&names, "Ticket ID123 closed");

        assert_eq!(result, "Ticket ID123 closed");
        assert_eq!(stats.names, 0);
    }

    #[test]
    fn test_length_preserved() {
        let text = "Hello Maria Lopez,\nwrite to maria@example.com or John Q. Public.";
        let (result, _) = run(&stage(vec![RawEntity::new("Maria", "PERSON")]), text);
        assert_eq!(char_len(&result), char_len(text));
    }

    #[test]
    fn test_rerun_redacts_nothing_new() {
        let names = stage(vec![]);
        let (once, _) = run(&names, "Hi Tom, email tom@example.com, from Jane K. Doe");
        let (twice, stats) = run(&names, &once);

        assert_eq!(once, twice);
        assert_eq!(stats.names, 0);
    }

    #[test]
    fn test_empty_text() {
        let (result, stats) = run(&stage(vec![]), "");
        assert_eq!(result, "");
        assert_eq!(stats.total(), 0);
    }
}
