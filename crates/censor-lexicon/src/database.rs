//! Lexical database trait

/// One word sense and the lemma names that express it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sense {
    pub id: String,
    /// Lemma names as stored, multiword lemmas joined with `_`
    pub lemmas: Vec<String>,
}

impl Sense {
    /// Lemma names with `_` turned back into spaces
    pub fn terms(&self) -> impl Iterator<Item = String> + '_ {
        self.lemmas.iter().map(|l| l.replace('_', " "))
    }
}

/// Read-only lexical resource shared across documents
pub trait LexicalDatabase: Send + Sync {
    /// Dictionary base form of `word`
    fn lemmatize(&self, word: &str) -> String;

    /// Morphological stem of `word`
    fn stem(&self, word: &str) -> String;

    /// Senses of `word`, most frequent first
    fn synsets(&self, word: &str) -> Vec<Sense>;

    /// Direct hyponyms of `sense`
    fn hyponyms(&self, sense: &Sense) -> Vec<Sense>;

    /// Taxonomic similarity of two words in [0, 1]
    fn similarity(&self, a: &str, b: &str) -> f64;
}
