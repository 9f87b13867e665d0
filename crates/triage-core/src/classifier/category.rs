//! Complaint categories and the classification result record.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Categories a complaint can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Network, connectivity and computing issues.
    Technology,
    /// Rooms, mess and other hostel facilities.
    Hostel,
    /// Exams, grading and coursework.
    Academic,
    /// Buildings, furniture and power.
    Infrastructure,
    /// Buses, shuttles and parking.
    Transport,
    /// Security incidents and emergencies.
    Safety,
    /// Nothing recognisable matched.
    Other,
}

impl Category {
    /// Returns all available categories.
    pub fn all() -> &'static [Category] {
        &[
            Category::Technology,
            Category::Hostel,
            Category::Academic,
            Category::Infrastructure,
            Category::Transport,
            Category::Safety,
            Category::Other,
        ]
    }

    /// Returns the display name for this category.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Hostel => "Hostel",
            Category::Academic => "Academic",
            Category::Infrastructure => "Infrastructure",
            Category::Transport => "Transport",
            Category::Safety => "Safety",
            Category::Other => "Other",
        }
    }
}

/// Result of classifying a piece of text against the keyword rule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// The category of the rule that fired.
    pub category: Category,
    /// Tags attached by that rule, in table order.
    pub tags: Vec<String>,
    /// Fixed confidence of that rule (0.0 to 1.0).
    pub score: f32,
}

impl ClassificationResult {
    /// Score attached when no rule matches.
    pub const FALLBACK_SCORE: f32 = 0.5;

    /// Creates a result for the given category, tags and score.
    pub fn new(category: Category, tags: &[&str], score: f32) -> Self {
        Self {
            category,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            score: score.clamp(0.0, 1.0),
        }
    }

    /// The result returned when no rule matches.
    pub fn fallback() -> Self {
        Self::new(Category::Other, &["general"], Self::FALLBACK_SCORE)
    }

    /// Returns true if this is the no-match result.
    pub fn is_fallback(&self) -> bool {
        self.category == Category::Other
    }

    /// Encodes this result as a single-line JSON object.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
