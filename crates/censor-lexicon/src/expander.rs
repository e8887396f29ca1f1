//! Concept expansion
//!
//! Expansion order: lemma, stem, synonyms of the primary sense, close hyponyms
//! of that sense, then the stem of every term collected so far.

use censor_core::Result;
use regex::Regex;
use std::collections::BTreeSet;
use tracing::debug;

use crate::database::LexicalDatabase;

/// Minimum similarity for a hyponym to join the vocabulary
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.4;

/// Inflections accepted after any vocabulary term
const SUFFIXES: &str = "(?:s|es|ing)?";

/// Lower-cased match terms derived from one seed concept
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConceptVocabulary {
    terms: BTreeSet<String>,
}

impl ConceptVocabulary {
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Case-insensitive alternation of every term plus an optional
    /// `s`/`es`/`ing` suffix. `None` when the vocabulary is empty.
    pub fn pattern(&self) -> Result<Option<Regex>> {
        if self.terms.is_empty() {
            return Ok(None);
        }

        // Longest first so the recorded match is the most specific term
        let mut terms: Vec<&String> = self.terms.iter().collect();
        terms.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

        let alternation = terms
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = Regex::new(&format!(r"(?i)\b(?:{}){}\b", alternation, SUFFIXES))?;
        Ok(Some(pattern))
    }
}

/// Builds concept vocabularies from a lexical database
pub struct ConceptExpander<'a> {
    db: &'a dyn LexicalDatabase,
    threshold: f64,
}

impl<'a> ConceptExpander<'a> {
    pub fn new(db: &'a dyn LexicalDatabase) -> Self {
        Self {
            db,
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Expand `seed` into its vocabulary. Unknown seeds give an empty one.
    pub fn expand(&self, seed: &str) -> ConceptVocabulary {
        let seed = seed.trim().to_lowercase();
        if seed.is_empty() {
            return ConceptVocabulary::default();
        }

        let base = self.db.lemmatize(&seed);
        let senses = self.db.synsets(&base);
        let Some(primary) = senses.first() else {
            debug!(seed = %seed, "concept has no senses; vocabulary is empty");
            return ConceptVocabulary::default();
        };

        let mut terms = vec![base.clone(), self.db.stem(&base)];
        terms.extend(primary.terms());

        for hyponym in self.db.hyponyms(primary) {
            for term in hyponym.terms() {
                let score = self.db.similarity(&term, &base);
                if score >= self.threshold {
                    terms.push(term);
                } else {
                    debug!(term = %term, score, "hyponym below similarity threshold");
                }
            }
        }

        let stems: Vec<String> = terms.iter().map(|t| self.db.stem(t)).collect();
        terms.extend(stems);

        let vocabulary = ConceptVocabulary::from_terms(terms);
        debug!(seed = %seed, terms = vocabulary.len(), "expanded concept");
        vocabulary
    }
}
