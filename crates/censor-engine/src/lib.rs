//! Redaction orchestrator
//!
//! Stages always run in the order Names, Dates, Phones, Concepts, Addresses.
//! Disabled stages are skipped entirely and leave their counters at zero.

use std::sync::Arc;

use censor_core::{Category, Error, RedactionOptions, RedactionStats, Result};
use censor_detectors::{AddressStage, ConceptStage, DateStage, NameStage, PhoneStage, Stage};
use censor_entities::EntityRecognizer;
use censor_lexicon::{
    ConceptExpander, ConceptVocabulary, DEFAULT_SIMILARITY_THRESHOLD, LexicalDatabase,
};
use tracing::{debug, info};

/// Redacted text and the counters that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactionOutcome {
    pub text: String,
    pub stats: RedactionStats,
}

/// Holds the shared, read-only recognizer and lexicon
pub struct Redactor {
    recognizer: Arc<dyn EntityRecognizer>,
    lexicon: Arc<dyn LexicalDatabase>,
    similarity_threshold: f64,
}

impl Redactor {
    pub fn new(recognizer: Arc<dyn EntityRecognizer>, lexicon: Arc<dyn LexicalDatabase>) -> Self {
        Self {
            recognizer,
            lexicon,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }

    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Expand a concept seed against the lexicon
    pub fn vocabulary(&self, seed: &str) -> ConceptVocabulary {
        ConceptExpander::new(self.lexicon.as_ref())
            .with_threshold(self.similarity_threshold)
            .expand(seed)
    }

    /// Build the stage list for `options` once, for reuse across documents
    pub fn prepare(&self, options: &RedactionOptions) -> Result<Pipeline> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(Error::InvalidConfig(format!(
                "similarity threshold must be within [0, 1], got {}",
                self.similarity_threshold
            )));
        }

        let mut stages: Vec<Box<dyn Stage>> = Vec::new();

        if options.names {
            stages.push(Box::new(NameStage::new(self.recognizer.clone())));
        }
        if options.dates {
            stages.push(Box::new(DateStage::new()));
        }
        if options.phones {
            stages.push(Box::new(PhoneStage::new()));
        }
        if let Some(seed) = options.concept_seed() {
            let vocabulary = self.vocabulary(seed);
            if vocabulary.is_empty() {
                info!(concept = seed, "concept has no related terms; skipping concept stage");
            }
            stages.push(Box::new(ConceptStage::new(&vocabulary)?));
        }
        if options.address {
            stages.push(Box::new(AddressStage::new(self.recognizer.clone())));
        }

        debug!(
            stages = ?stages.iter().map(|s| s.category()).collect::<Vec<_>>(),
            "prepared pipeline"
        );
        Ok(Pipeline { stages })
    }

    /// Redact one document
    pub fn redact(&self, text: &str, options: &RedactionOptions) -> Result<RedactionOutcome> {
        Ok(self.prepare(options)?.run(text))
    }
}

/// Ordered stages for one set of options
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn categories(&self) -> Vec<Category> {
        self.stages.iter().map(|s| s.category()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn run(&self, text: &str) -> RedactionOutcome {
        let mut stats = RedactionStats::new();
        let mut current = text.to_string();

        for stage in &self.stages {
            current = stage.apply(&current, &mut stats);
            debug!(
                category = %stage.category(),
                count = stats.get(stage.category()),
                "stage complete"
            );
        }

        RedactionOutcome {
            text: current,
            stats,
        }
    }
}
