//! Redaction stages
//!
//! Each stage finds one category of sensitive text, replaces every match with
//! a block run of the same length and adds to that category's counter.

pub mod address;
pub mod concepts;
pub mod dates;
pub mod entity;
pub mod names;
pub mod pattern;
pub mod phones;
pub mod stage;

pub use address::AddressStage;
pub use concepts::{ConceptStage, split_sentences};
pub use dates::DateStage;
pub use names::NameStage;
pub use pattern::PatternRule;
pub use phones::PhoneStage;
pub use stage::Stage;
