//! Complaint text classification.
//!
//! [`KeywordClassifier`] is the first-match rule table behind the `triage`
//! binary. [`WeightedCategorizer`] scores every category by keyword hits.

mod category;
mod keyword;
mod weighted;

pub use category::{Category, ClassificationResult};
pub use keyword::KeywordClassifier;
pub use weighted::{WeightedCategorizer, WeightedResult};
