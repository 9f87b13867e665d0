//! Duplicate complaint detection.
//!
//! Compares new complaint text against open complaints in the same category
//! using Jaccard similarity over lower-cased word sets.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::classifier::Category;

/// Lifecycle status of a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ComplaintStatus {
    /// Newly filed.
    #[default]
    Submitted,
    /// Being worked on.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Fixed.
    Resolved,
    /// Declined by an authority.
    Rejected,
    /// Closed without further action.
    Closed,
}

impl ComplaintStatus {
    /// Returns true if complaints in this status can still receive duplicates.
    pub fn is_open(&self) -> bool {
        !matches!(self, ComplaintStatus::Resolved | ComplaintStatus::Closed)
    }
}

/// An existing complaint to compare against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintRecord {
    /// Complaint identifier.
    pub id: u64,
    /// Short title entered by the student.
    pub title: String,
    /// Free-text body of the complaint.
    pub description: String,
    /// Category the complaint was filed under.
    pub category: Category,
    /// Current status; defaults to Submitted.
    #[serde(default)]
    pub status: ComplaintStatus,
}

impl ComplaintRecord {
    /// Title and description joined with a space.
    pub fn text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

/// A likely duplicate of the complaint being checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateMatch {
    /// Identifier of the existing complaint.
    pub id: u64,
    /// Title of the existing complaint.
    pub title: String,
    /// Similarity in percent, rounded.
    pub similarity: u8,
}

/// Configuration for duplicate detection.
#[derive(Debug, Clone)]
pub struct DuplicateConfig {
    /// Similarity (percent) a candidate must exceed to be reported.
    /// Default: 30.0
    pub threshold: f64,

    /// Maximum number of matches returned.
    /// Default: 3
    pub limit: usize,
}

impl Default for DuplicateConfig {
    fn default() -> Self {
        Self {
            threshold: 30.0,
            limit: 3,
        }
    }
}

/// Jaccard similarity of the word sets of `a` and `b`, in percent.
///
/// Words are split on whitespace after lower-casing. Returns 0.0 when both
/// inputs have no words.
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let set_a: HashSet<&str> = a.split_whitespace().collect();
    let set_b: HashSet<&str> = b.split_whitespace().collect();

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = set_a.intersection(&set_b).count();

    intersection as f64 / union as f64 * 100.0
}

/// Finds open complaints that look like the one being filed.
#[derive(Debug, Clone, Default)]
pub struct DuplicateDetector {
    config: DuplicateConfig,
}

impl DuplicateDetector {
    /// Creates a detector with default configuration.
    pub fn new() -> Self {
        Self::with_config(DuplicateConfig::default())
    }

    /// Creates a detector with the given configuration.
    pub fn with_config(config: DuplicateConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &DuplicateConfig {
        &self.config
    }

    /// Compares `text` against open `candidates` filed under `category`.
    ///
    /// Matches are sorted by similarity, highest first, and truncated to the
    /// configured limit.
    pub fn find_duplicates(
        &self,
        text: &str,
        category: Category,
        candidates: &[ComplaintRecord],
    ) -> Vec<DuplicateMatch> {
        let mut matches: Vec<DuplicateMatch> = candidates
            .iter()
            .filter(|c| c.category == category && c.status.is_open())
            .filter_map(|c| {
                let similarity = jaccard_similarity(text, &c.text());
                (similarity > self.config.threshold).then(|| DuplicateMatch {
                    id: c.id,
                    title: c.title.clone(),
                    similarity: similarity.round() as u8,
                })
            })
            .collect();

        matches.sort_by(|a, b| b.similarity.cmp(&a.similarity));
        matches.truncate(self.config.limit);

        tracing::debug!(
            category = category.name(),
            candidates = candidates.len(),
            found = matches.len(),
            "Duplicate check finished"
        );

        matches
    }
}
