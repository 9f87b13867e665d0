//! First-match keyword classifier.
//!
//! Each rule is a group of keywords compiled into a [`RegexSet`] of escaped
//! literals. Rules are tried in table order and the first rule with any
//! keyword present in the lower-cased input decides the result.

use regex::RegexSet;

use super::{Category, ClassificationResult};
use crate::error::Result;

/// A row of the rule table.
struct KeywordRule {
    category: Category,
    keywords: &'static [&'static str],
    tags: &'static [&'static str],
    score: f32,
}

/// Rule table in priority order. Reordering changes results for inputs that
/// hit more than one group.
const RULES: &[KeywordRule] = &[
    KeywordRule {
        category: Category::Technology,
        keywords: &["wifi", "network", "internet"],
        tags: &["network", "connectivity"],
        score: 0.9,
    },
    KeywordRule {
        category: Category::Hostel,
        keywords: &["hostel", "room", "mess", "maintenance"],
        tags: &["facility", "maintenance"],
        score: 0.85,
    },
    KeywordRule {
        category: Category::Academic,
        keywords: &["grade", "grading", "exam", "marks"],
        tags: &["grading", "academic"],
        score: 0.88,
    },
];

/// A rule with its keywords compiled for matching.
struct CompiledRule {
    rule: &'static KeywordRule,
    regex_set: RegexSet,
}

impl CompiledRule {
    fn compile(rule: &'static KeywordRule) -> Result<Self> {
        let regex_set = RegexSet::new(rule.keywords.iter().map(|k| regex::escape(k)))?;
        Ok(Self { rule, regex_set })
    }

    /// Returns the first keyword of this rule found in `text_lower`.
    fn find(&self, text_lower: &str) -> Option<&'static str> {
        self.regex_set
            .matches(text_lower)
            .iter()
            .next()
            .map(|idx| self.rule.keywords[idx])
    }

    fn result(&self) -> ClassificationResult {
        ClassificationResult::new(self.rule.category, self.rule.tags, self.rule.score)
    }
}

/// Keyword classifier over the built-in rule table.
pub struct KeywordClassifier {
    rules: Vec<CompiledRule>,
}

impl KeywordClassifier {
    /// Compiles the built-in rule table.
    pub fn new() -> Result<Self> {
        let rules = RULES
            .iter()
            .map(CompiledRule::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Classifies the given text. Never fails; unmatched text falls back to
    /// [`ClassificationResult::fallback`].
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let text_lower = text.to_lowercase();

        for compiled in &self.rules {
            if let Some(keyword) = compiled.find(&text_lower) {
                tracing::debug!(
                    category = compiled.rule.category.name(),
                    keyword,
                    "Keyword rule matched"
                );
                return compiled.result();
            }
        }

        tracing::debug!("No keyword rule matched, using fallback");
        ClassificationResult::fallback()
    }

    /// Classifies optional text; `None` is treated as the empty string.
    pub fn classify_opt(&self, text: Option<&str>) -> ClassificationResult {
        self.classify(text.unwrap_or_default())
    }

    /// Number of rules in the table.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}
