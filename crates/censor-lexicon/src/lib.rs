//! Lexical database access and concept expansion
//!
//! A seed concept is expanded into a [`ConceptVocabulary`]: its lemma and stem,
//! the synonyms of its primary sense, and the hyponyms of that sense that are
//! taxonomically close to the seed.

pub mod database;
pub mod expander;
pub mod wordnet;

pub use database::{LexicalDatabase, Sense};
pub use expander::{ConceptExpander, ConceptVocabulary, DEFAULT_SIMILARITY_THRESHOLD};
pub use wordnet::Lexicon;
