//! Triage Core - keyword categorization and duplicate detection.
//!
//! This crate holds the classification logic used by the `triage` binary.

pub mod classifier;
pub mod duplicate;
pub mod error;

pub use error::{ClassifierError, Result};
