//! Statistics reporting
//!
//! Rendering is deterministic: reports appear in the order given and counters
//! in the fixed category order.

use crate::{RedactionStats, Result};
use serde::{Deserialize, Serialize};

/// Outcome of redacting one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub filename: String,
    pub stats: RedactionStats,
    /// blake3 digest of the redacted text
    pub output_hash: String,
}

impl FileReport {
    pub fn new(filename: impl Into<String>, stats: RedactionStats, redacted: &str) -> Self {
        Self {
            filename: filename.into(),
            stats,
            output_hash: blake3::hash(redacted.as_bytes()).to_hex().to_string(),
        }
    }
}

/// Human-readable report
pub fn render_text(reports: &[FileReport]) -> String {
    let mut lines = vec!["Statistics of Redacted Files:".to_string()];
    for report in reports {
        lines.push(format!("File: {}", report.filename));
        for (category, count) in report.stats.iter() {
            lines.push(format!("{}: {}", category.count_key(), count));
        }
        lines.push("\n".to_string());
    }
    lines.join("\n")
}

pub fn render_json(reports: &[FileReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    fn sample() -> FileReport {
        let mut stats = RedactionStats::new();
        stats.add(Category::Names, 2);
        stats.add(Category::Addresses, 3);
        FileReport::new("letter.censored", stats, "Dear ████")
    }

    #[test]
    fn test_text_layout() {
        let text = render_text(&[sample()]);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "Statistics of Redacted Files:");
        assert_eq!(lines[1], "File: letter.censored");
        assert_eq!(lines[2], "Names_count: 2");
        assert_eq!(lines[3], "Dates_count: 0");
        assert_eq!(lines[6], "Addresses_count: 3");
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(render_text(&[]), "Statistics of Redacted Files:");
    }

    #[test]
    fn test_json_round_trip() {
        let json = render_json(&[sample()]).unwrap();
        let parsed: Vec<FileReport> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec![sample()]);
    }

    #[test]
    fn test_hash_is_deterministic() {
        let a = FileReport::new("a", RedactionStats::new(), "same text");
        let b = FileReport::new("b", RedactionStats::new(), "same text");
        assert_eq!(a.output_hash, b.output_hash);
        assert_eq!(a.output_hash.len(), 64);
    }
}
