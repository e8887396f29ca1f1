use serde::{Deserialize, Serialize};
use std::fmt;

/// Sensitive-information categories, in pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Names,
    Dates,
    Phones,
    Concepts,
    Addresses,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Names,
        Category::Dates,
        Category::Phones,
        Category::Concepts,
        Category::Addresses,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Names => "Names",
            Category::Dates => "Dates",
            Category::Phones => "Phones",
            Category::Concepts => "Concepts",
            Category::Addresses => "Addresses",
        }
    }

    /// Key used in reports, e.g. `Names_count`
    pub fn count_key(&self) -> String {
        format!("{}_count", self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-document redaction counters.
///
/// Counters start at zero and only ever grow. One record belongs to exactly
/// one document run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionStats {
    #[serde(rename = "Names_count")]
    pub names: usize,
    #[serde(rename = "Dates_count")]
    pub dates: usize,
    #[serde(rename = "Phones_count")]
    pub phones: usize,
    #[serde(rename = "Concepts_count")]
    pub concepts: usize,
    #[serde(rename = "Addresses_count")]
    pub addresses: usize,
}

impl RedactionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, category: Category, count: usize) {
        *self.slot(category) += count;
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Names => self.names,
            Category::Dates => self.dates,
            Category::Phones => self.phones,
            Category::Concepts => self.concepts,
            Category::Addresses => self.addresses,
        }
    }

    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c)).sum()
    }

    /// Counters in the fixed report order
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    fn slot(&mut self, category: Category) -> &mut usize {
        match category {
            Category::Names => &mut self.names,
            Category::Dates => &mut self.dates,
            Category::Phones => &mut self.phones,
            Category::Concepts => &mut self.concepts,
            Category::Addresses => &mut self.addresses,
        }
    }
}
