//! Validation of rule-set documents.
//!
//! A rule-set document is an array of rule sets, each wrapping a tree of
//! conditions combined with `if`/`then`/`and`/`or` plus optional actions.
//! [`validate`] checks a document against the grammar and collects every
//! violation instead of stopping at the first one.

pub mod cmd;
pub mod domain;
pub mod engine;
pub mod io;

pub use domain::rules::ValidationReport;
pub use engine::validate::{parse, validate, validate_bytes};
