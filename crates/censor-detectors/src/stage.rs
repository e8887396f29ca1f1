use censor_core::{Category, RedactionStats};

/// One step of the redaction pipeline: `text × stats -> text × stats`.
///
/// A stage only adds to its own category's counter and never panics on empty
/// input.
pub trait Stage: Send + Sync {
    fn category(&self) -> Category;

    fn apply(&self, text: &str, stats: &mut RedactionStats) -> String;
}
