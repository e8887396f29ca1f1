//! Document input and output
//!
//! Glob expansion of input patterns, UTF-8 document loading and writing of
//! `<stem>.<extension>` redacted copies.

pub mod collection;
pub mod file;

pub use collection::{expand_glob, expand_globs};
pub use file::{censored_name, load_document, write_censored};
