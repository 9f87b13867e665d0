//! Keyword-count categorizer.
//!
//! Scores every category by how many of its keywords occur in the text and
//! picks the highest count. Matched keywords double as tags.

use serde::{Deserialize, Serialize};

use super::Category;

/// Maximum number of matched keywords reported as tags.
const MAX_TAGS: usize = 5;

/// Confidence ceiling, in percent.
const MAX_CONFIDENCE: usize = 95;

/// Keyword dictionary in evaluation order. Ties keep the earlier category.
/// A keyword belongs to at most one category, so matched tags never repeat.
const DICTIONARY: &[(Category, &[&str])] = &[
    (
        Category::Technology,
        &[
            "wifi", "internet", "network", "computer", "printer", "software", "login", "server",
            "slow", "connect",
        ],
    ),
    (
        Category::Hostel,
        &[
            "room", "bed", "mess", "food", "water", "bathroom", "clean", "laundry", "warden",
            "light", "fan",
        ],
    ),
    (
        Category::Academic,
        &[
            "class", "lecture", "exam", "grade", "professor", "library", "book", "attendance",
            "lab",
        ],
    ),
    (
        Category::Infrastructure,
        &[
            "ac", "chair", "desk", "broken", "wall", "door", "window", "electricity", "power",
            "road",
        ],
    ),
    (
        Category::Transport,
        &["bus", "shuttle", "driver", "parking", "late", "route", "seat"],
    ),
    (
        Category::Safety,
        &["security", "guard", "theft", "stolen", "harassment", "fight", "emergency"],
    ),
];

/// Result of weighted categorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedResult {
    /// Category with the most keyword hits.
    pub category: Category,
    /// Pseudo-confidence in percent (0 when nothing matched, capped at 95).
    pub confidence: u8,
    /// Up to five matched keywords, in discovery order.
    pub tags: Vec<String>,
}

impl WeightedResult {
    /// The result for empty or unmatched text.
    pub fn empty() -> Self {
        Self {
            category: Category::Other,
            confidence: 0,
            tags: Vec::new(),
        }
    }
}

/// Categorizer that counts keyword hits per category.
#[derive(Debug, Default, Clone, Copy)]
pub struct WeightedCategorizer;

impl WeightedCategorizer {
    /// Creates a new categorizer over the built-in dictionary.
    pub fn new() -> Self {
        Self
    }

    /// Categorizes the given text.
    pub fn categorize(&self, text: &str) -> WeightedResult {
        if text.is_empty() {
            return WeightedResult::empty();
        }

        let text_lower = text.to_lowercase();
        let mut best_category = Category::Other;
        let mut max_count = 0;
        let mut found_tags: Vec<&str> = Vec::new();

        for (category, words) in DICTIONARY {
            let mut count = 0;
            for word in words.iter().copied() {
                if text_lower.contains(word) {
                    count += 1;
                    found_tags.push(word);
                }
            }

            if count > max_count {
                max_count = count;
                best_category = *category;
            }
        }

        let confidence = if max_count > 0 {
            (50 + max_count * 10).min(MAX_CONFIDENCE) as u8
        } else {
            0
        };

        tracing::debug!(
            category = best_category.name(),
            hits = max_count,
            confidence,
            "Weighted categorization"
        );

        WeightedResult {
            category: best_category,
            confidence,
            tags: found_tags
                .into_iter()
                .take(MAX_TAGS)
                .map(str::to_string)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categorize(text: &str) -> WeightedResult {
        WeightedCategorizer::new().categorize(text)
    }

    #[test]
    fn empty_text_is_other_with_zero_confidence() {
        assert_eq!(categorize(""), WeightedResult::empty());
    }

    #[test]
    fn unmatched_text_is_other() {
        let result = categorize("zzz");
        assert_eq!(result.category, Category::Other);
        assert_eq!(result.confidence, 0);
        assert!(result.tags.is_empty());
    }

    #[test]
    fn single_hit_gives_sixty() {
        let result = categorize("the printer jammed");
        assert_eq!(result.category, Category::Technology);
        assert_eq!(result.confidence, 60);
        assert_eq!(result.tags, vec!["printer"]);
    }

    #[test]
    fn most_hits_wins() {
        let result = categorize("The bus driver skipped the shuttle stop");
        assert_eq!(result.category, Category::Transport);
        assert_eq!(result.confidence, 80);
        assert_eq!(result.tags, vec!["bus", "shuttle", "driver"]);
    }

    #[test]
    fn tie_keeps_earlier_category() {
        // one Technology hit, one Safety hit
        let result = categorize("server theft");
        assert_eq!(result.category, Category::Technology);
        assert_eq!(result.tags, vec!["server", "theft"]);
    }

    #[test]
    fn confidence_is_capped() {
        let result = categorize("wifi internet network computer printer software");
        assert_eq!(result.category, Category::Technology);
        assert_eq!(result.confidence, 95);
    }

    #[test]
    fn tags_are_limited_to_five() {
        let result = categorize("wifi internet network computer printer software login");
        assert_eq!(result.tags.len(), 5);
        assert_eq!(
            result.tags,
            vec!["wifi", "internet", "network", "computer", "printer"]
        );
    }

    #[test]
    fn keywords_match_as_substrings() {
        // "each" contains "ac"
        let result = categorize("each");
        assert_eq!(result.category, Category::Infrastructure);
        assert_eq!(result.tags, vec!["ac"]);
    }

    #[test]
    fn dictionary_keywords_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for (_, words) in DICTIONARY {
            for word in words.iter() {
                assert!(seen.insert(*word), "keyword {word} listed twice");
            }
        }
    }

    #[test]
    fn tags_do_not_repeat() {
        let result = categorize("wifi wifi WIFI room room");
        assert_eq!(result.tags, vec!["wifi", "room"]);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(categorize("LIBRARY Book"), categorize("library book"));
    }
}
