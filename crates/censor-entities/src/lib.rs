//! Entity recognition
//!
//! Recognizers return raw labelled spans; [`recognize`] maps the open label set
//! onto the closed [`EntityCategory`] used by the redaction stages.

pub mod gazetteer;
pub mod recognizer;

pub use gazetteer::{GazetteerBuilder, GazetteerRecognizer, US_STATES};
pub use recognizer::{EntityCategory, EntityMatch, EntityRecognizer, RawEntity, recognize};
