//! Performance-review categories and keyword classification

use serde::{Deserialize, Serialize};

/// The five fixed review dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Ownership,
    Execution,
    Impact,
    Collaboration,
    TechnicalDepth,
}

impl Category {
    /// All categories in report order
    pub const ALL: [Category; 5] = [
        Category::Ownership,
        Category::Execution,
        Category::Impact,
        Category::Collaboration,
        Category::TechnicalDepth,
    ];

    /// Lower-case keywords that place a statement in this category
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Ownership => &[
                "led",
                "owned",
                "drove",
                "initiated",
                "championed",
                "designed",
                "architected",
            ],
            Category::Execution => &[
                "completed",
                "shipped",
                "delivered",
                "fixed",
                "resolved",
                "implemented",
                "built",
            ],
            Category::Impact => &[
                "improved",
                "reduced",
                "increased",
                "saved",
                "enabled",
                "unblocked",
            ],
            Category::Collaboration => &[
                "with",
                "team",
                "helped",
                "reviewed",
                "mentored",
                "pair",
                "collaborated",
            ],
            Category::TechnicalDepth => &[
                "refactored",
                "optimized",
                "debugged",
                "investigated",
                "analyzed",
                "migrated",
                "upgraded",
            ],
        }
    }

    /// Human-readable heading
    pub fn title(&self) -> &'static str {
        match self {
            Category::Ownership => "Ownership",
            Category::Execution => "Execution",
            Category::Impact => "Impact",
            Category::Collaboration => "Collaboration",
            Category::TechnicalDepth => "Technical Depth",
        }
    }

    /// Bullet used when no statement landed in this category
    pub fn fallback_bullet(&self) -> String {
        format!(
            "Review your logs to identify {} examples.",
            self.title().to_lowercase()
        )
    }

    /// Case-insensitive substring match against this category's keywords.
    ///
    /// Plain containment: "led" also matches "scheduled".
    pub fn matches(&self, statement: &str) -> bool {
        let folded = statement.to_lowercase();
        self.matches_folded(&folded)
    }

    fn matches_folded(&self, folded: &str) -> bool {
        self.keywords().iter().any(|k| folded.contains(k))
    }
}

/// Every category the statement belongs to, in report order.
///
/// Categories are not exclusive; the result may be empty or hold several.
pub fn classify(statement: &str) -> Vec<Category> {
    let folded = statement.to_lowercase();
    Category::ALL
        .into_iter()
        .filter(|c| c.matches_folded(&folded))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_led_the_rollout_is_ownership_only() {
        assert_eq!(classify("Led the rollout"), vec![Category::Ownership]);
    }

    #[test]
    fn test_case_insensitive() {
        assert!(Category::Execution.matches("SHIPPED the new dashboard"));
        assert!(Category::TechnicalDepth.matches("Refactored the payment module"));
    }

    #[test]
    fn test_multiple_categories() {
        let categories = classify("Debugged the flaky deploy with the infra team");
        assert_eq!(
            categories,
            vec![Category::Collaboration, Category::TechnicalDepth]
        );
    }

    #[test]
    fn test_only_listed_keywords_count() {
        // "migration" is not "migrated"
        assert!(!Category::TechnicalDepth.matches("Planned the migration"));
        assert!(classify("Planned the migration").is_empty());
    }

    #[test]
    fn test_substring_containment() {
        // "scheduled" contains "led"
        assert!(Category::Ownership.matches("Scheduled the retro"));
    }

    #[test]
    fn test_titles_and_fallbacks() {
        assert_eq!(Category::TechnicalDepth.title(), "Technical Depth");
        assert_eq!(
            Category::TechnicalDepth.fallback_bullet(),
            "Review your logs to identify technical depth examples."
        );
        assert_eq!(
            Category::Ownership.fallback_bullet(),
            "Review your logs to identify ownership examples."
        );
    }
}
