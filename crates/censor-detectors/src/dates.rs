//! Dates
//!
//! Overlapping date shapes, most specific first. Month and weekday names match
//! case-insensitively and may be abbreviated or spelled out.

use censor_core::{Category, RedactionStats};

use crate::pattern::{PatternRule, apply_chained};
use crate::stage::Stage;

const WEEKDAY: &str = r"(?:Mon|Tue|Wed|Thu|Fri|Sat|Sun)[a-z]*";
const MONTH: &str = r"(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*";
const ORDINAL: &str = r"(?:st|nd|rd|th)";

pub struct DateStage {
    rules: Vec<PatternRule>,
}

impl DateStage {
    pub fn new() -> Self {
        let rule = |name, body: String| PatternRule::fixed(name, &format!("(?i){}", body));

        let rules = vec![
            // Tue, 12 April 2023
            rule(
                "weekday_day_month_year",
                format!(r"\b{WEEKDAY},?\s+\d{{1,2}}\s+{MONTH}\s+\d{{4}}\b"),
            ),
            rule("mm/dd/yyyy", r"\b\d{2}/\d{2}/\d{4}\b".to_string()),
            rule("yyyy-mm-dd", r"\b\d{4}-\d{2}-\d{2}\b".to_string()),
            rule("mm-dd-yyyy", r"\b\d{2}-\d{2}-\d{4}\b".to_string()),
            rule("mm/dd/yy", r"\b\d{2}/\d{2}/\d{2}\b".to_string()),
            // April 12, 2023
            rule(
                "month_day_year",
                format!(r"\b{MONTH}\s+\d{{1,2}},?\s+\d{{4}}\b"),
            ),
            // 12th April 2023
            rule(
                "day_month_year",
                format!(r"\b\d{{1,2}}{ORDINAL}?\s+{MONTH}\s+\d{{4}}\b"),
            ),
            rule("yyyy/mm/dd", r"\b\d{4}/\d{2}/\d{2}\b".to_string()),
            rule("dd.mm.yy", r"\b\d{2}\.\d{2}\.\d{2}\b".to_string()),
            rule("mm-dd-yy", r"\b\d{2}-\d{2}-\d{2}\b".to_string()),
            // Monday, April 12th, 2023
            rule(
                "weekday_month_day_year",
                format!(r"\b{WEEKDAY},?\s+{MONTH}\s+\d{{1,2}}{ORDINAL}?,?\s+\d{{4}}\b"),
            ),
            // April 2000
            rule("month_year", format!(r"\b{MONTH}\s+\d{{4}}\b")),
            // May 30
            rule("month_day", format!(r"\b{MONTH}\s+\d{{1,2}}\b")),
            // 1900 through 2025
            rule("year", r"\b(?:19\d{2}|20[01]\d|202[0-5])\b".to_string()),
        ];

        Self { rules }
    }
}

impl Default for DateStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for DateStage {
    fn category(&self) -> Category {
        Category::Dates
    }

    fn apply(&self, text: &str, stats: &mut RedactionStats) -> String {
        apply_chained(&self.rules, text, Category::Dates, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use censor_core::{block_run, char_len};

    fn run(text: &str) -> (String, usize) {
        let mut stats = RedactionStats::new();
        let result = DateStage::new().apply(text, &mut stats);
        (result, stats.dates)
    }

    #[test]
    fn test_month_day_year_counts_once() {
        let (result, count) = run("I meet you on Sept 21, 2024 at 5 PM.");

        assert_eq!(count, 1);
        assert_eq!(
            result,
            format!("I meet you on {} at 5 PM.", block_run("Sept 21, 2024"))
        );
    }

    #[test]
    fn test_numeric_forms() {
        for date in [
            "12/04/2023",
            "2023-04-12",
            "12-05-2024",
            "12/29/00",
            "2023/04/12",
            "12.04.23",
            "04-12-23",
        ] {
            let (result, count) = run(&format!("on {} ok", date));
            assert_eq!(count, 1, "{}", date);
            assert_eq!(result, format!("on {} ok", block_run(date)));
        }
    }

    #[test]
    fn test_named_forms() {
        for date in [
            "Tue, 12 April 2023",
            "12th April 2023",
            "Monday, April 12th, 2023",
            "April 2000",
            "May 30",
            "1999",
        ] {
            let (result, count) = run(&format!("on {} ok", date));
            assert_eq!(count, 1, "{}", date);
            assert_eq!(result, format!("on {} ok", block_run(date)));
        }
    }

    #[test]
    fn test_case_insensitive_month() {
        let (_, count) = run("due JANUARY 5, 2020 and december 1");
        assert_eq!(count, 2);
    }

    #[test]
    fn test_year_range() {
        let (result, count) = run("in 1899, 1900, 2025 and 2026");
        assert_eq!(count, 2);
        assert_eq!(result, "in 1899, ████, ████ and 2026");

        for year in ["1957", "2006", "2009", "2016", "2019", "2020"] {
            let (result, count) = run(&format!("back in {} we met", year));
            assert_eq!(count, 1, "{}", year);
            assert_eq!(result, "back in ████ we met");
        }
    }

    #[test]
    fn test_length_preserved() {
        let text = "From 01/02/2020 to Wed, 3 March 2021; née 1985.";
        let (result, _) = run(text);
        assert_eq!(char_len(&result), char_len(text));
    }

    #[test]
    fn test_no_dates() {
        assert_eq!(run(""), (String::new(), 0));
        assert_eq!(run("nothing to see"), ("nothing to see".to_string(), 0));
    }
}
