//! Core domain models for censor
//!
//! This crate contains:
//! - Redaction categories and the per-document statistics record
//! - Span and block-run helpers shared by every detector
//! - The options record selecting which stages run
//! - Statistics reporting (text and JSON)

pub mod error;
pub mod options;
pub mod report;
pub mod span;
pub mod stats;

pub use error::{Error, Result};
pub use options::RedactionOptions;
pub use report::{FileReport, render_json, render_text};
pub use span::{BLOCK, Span, block_run, char_len};
pub use stats::{Category, RedactionStats};
