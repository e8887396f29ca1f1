//! In-memory WordNet-style lexicon
//!
//! Synsets are loaded from JSON. Each record names its lemmas and hypernyms;
//! hyponym edges are derived from the hypernym edges at load time.

use censor_core::{Error, Result};
use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::Path;

use crate::database::{LexicalDatabase, Sense};

const BUNDLED: &str = include_str!("../data/lexicon.json");

/// Noun detachment rules, tried in order
const NOUN_SUFFIXES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynsetRecord {
    pub id: String,
    pub lemmas: Vec<String>,
    #[serde(default)]
    pub hypernyms: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LexiconFile {
    synsets: Vec<SynsetRecord>,
}

pub struct Lexicon {
    records: Vec<SynsetRecord>,
    hypernyms: Vec<Vec<usize>>,
    hyponyms: Vec<Vec<usize>>,
    by_id: HashMap<String, usize>,
    by_word: HashMap<String, Vec<usize>>,
    stemmer: Stemmer,
}

impl Lexicon {
    /// Lexicon shipped with the crate
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::DependencyUnavailable(format!(
                "Failed to read lexicon {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let file: LexiconFile = serde_json::from_str(content)?;
        Self::from_records(file.synsets)
    }

    pub fn from_records(records: Vec<SynsetRecord>) -> Result<Self> {
        let mut by_id = HashMap::new();
        for (idx, record) in records.iter().enumerate() {
            if by_id.insert(record.id.clone(), idx).is_some() {
                return Err(Error::DependencyUnavailable(format!(
                    "Duplicate synset id: {}",
                    record.id
                )));
            }
        }

        let mut hypernyms = vec![Vec::new(); records.len()];
        let mut hyponyms = vec![Vec::new(); records.len()];
        let mut by_word: HashMap<String, Vec<usize>> = HashMap::new();

        for (idx, record) in records.iter().enumerate() {
            for parent in &record.hypernyms {
                let &parent_idx = by_id.get(parent).ok_or_else(|| {
                    Error::DependencyUnavailable(format!(
                        "Synset {} names unknown hypernym {}",
                        record.id, parent
                    ))
                })?;
                hypernyms[idx].push(parent_idx);
                hyponyms[parent_idx].push(idx);
            }

            for lemma in &record.lemmas {
                let senses = by_word.entry(normalize(lemma)).or_default();
                if !senses.contains(&idx) {
                    senses.push(idx);
                }
            }
        }

        Ok(Self {
            records,
            hypernyms,
            hyponyms,
            by_id,
            by_word,
            stemmer: Stemmer::create(Algorithm::English),
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.by_word.contains_key(&normalize(word))
    }

    fn sense(&self, idx: usize) -> Sense {
        let record = &self.records[idx];
        Sense {
            id: record.id.clone(),
            lemmas: record.lemmas.clone(),
        }
    }

    fn first_sense(&self, word: &str) -> Option<usize> {
        self.by_word
            .get(&normalize(word))
            .and_then(|senses| senses.first().copied())
    }

    /// Every ancestor of `idx` (itself included) with its shortest distance
    fn ancestors(&self, idx: usize) -> HashMap<usize, usize> {
        let mut distances = HashMap::from([(idx, 0)]);
        let mut queue = VecDeque::from([idx]);
        while let Some(current) = queue.pop_front() {
            let next = distances[&current] + 1;
            for &parent in &self.hypernyms[current] {
                if !distances.contains_key(&parent) {
                    distances.insert(parent, next);
                    queue.push_back(parent);
                }
            }
        }
        distances
    }

    /// Longest hypernym path from `idx` to a root
    fn max_depth(&self, idx: usize, seen: &mut HashSet<usize>) -> usize {
        if !seen.insert(idx) {
            return 0;
        }
        let depth = self.hypernyms[idx]
            .iter()
            .map(|&parent| self.max_depth(parent, seen) + 1)
            .max()
            .unwrap_or(0);
        seen.remove(&idx);
        depth
    }

    /// Wu-Palmer similarity between two synsets
    fn wup(&self, a: usize, b: usize) -> f64 {
        let from_a = self.ancestors(a);
        let from_b = self.ancestors(b);

        let subsumer = from_a
            .keys()
            .filter(|k| from_b.contains_key(k))
            .map(|&k| (self.max_depth(k, &mut HashSet::new()), k))
            .max_by(|x, y| x.0.cmp(&y.0).then(y.1.cmp(&x.1)));

        let Some((depth, lcs)) = subsumer else {
            return 0.0;
        };
        let depth = depth + 1;
        let len_a = from_a[&lcs] + depth;
        let len_b = from_b[&lcs] + depth;

        (2 * depth) as f64 / (len_a + len_b) as f64
    }
}

impl LexicalDatabase for Lexicon {
    fn lemmatize(&self, word: &str) -> String {
        let word = word.trim().to_lowercase();
        if self.contains(&word) {
            return word;
        }
        NOUN_SUFFIXES
            .iter()
            .filter_map(|(suffix, replacement)| {
                word.strip_suffix(suffix)
                    .map(|root| format!("{}{}", root, replacement))
            })
            .find(|candidate| !candidate.is_empty() && self.contains(candidate))
            .unwrap_or(word)
    }

    fn stem(&self, word: &str) -> String {
        self.stemmer.stem(&word.to_lowercase()).into_owned()
    }

    fn synsets(&self, word: &str) -> Vec<Sense> {
        self.by_word
            .get(&normalize(word))
            .map(|senses| senses.iter().map(|&idx| self.sense(idx)).collect())
            .unwrap_or_default()
    }

    fn hyponyms(&self, sense: &Sense) -> Vec<Sense> {
        self.by_id
            .get(&sense.id)
            .map(|&idx| {
                self.hyponyms[idx]
                    .iter()
                    .map(|&child| self.sense(child))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        match (self.first_sense(a), self.first_sense(b)) {
            (Some(a), Some(b)) => self.wup(a, b),
            _ => 0.0,
        }
    }
}

/// Lookup key: lower-case with `_` for spaces
fn normalize(word: &str) -> String {
    word.trim().to_lowercase().replace(' ', "_")
}
