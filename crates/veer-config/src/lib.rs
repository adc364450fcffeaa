//! Declaration-file parsing for the veer launcher.
//!
//! # Architecture
//!
//! A declaration file is a flat list of `KEY = VALUE` lines. Keys starting
//! with `.` declare extension rules, everything else pattern rules; values
//! are command templates taken verbatim. Parsing produces a [`Rules`] value
//! that the caller threads through the rest of the pipeline. There is no
//! ambient state here and nothing is written back.

pub use error::{Error, Result};
pub use rules::{ExtensionRule, PatternRule, Rules};

mod error;
mod rules;
