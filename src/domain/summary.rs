//! Summary value types produced by the generators
//!
//! These are derived on demand and never stored.

use crate::domain::Category;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandupSummary {
    pub yesterday: String,
    pub today: String,
    pub blockers: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummary {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub key_contributions: String,
    pub impact: String,
    pub challenges_and_learnings: String,
    pub next_week_focus: String,
    pub generated_at: DateTime<Utc>,
}

/// One category section of a review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSection {
    pub title: String,
    pub bullets: Vec<String>,
}

/// The five review sections, one per [`Category`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSections {
    pub ownership: ReviewSection,
    pub execution: ReviewSection,
    pub impact: ReviewSection,
    pub collaboration: ReviewSection,
    pub technical_depth: ReviewSection,
}

impl ReviewSections {
    /// Build every section by asking `section` for each category in report order
    pub fn from_fn(mut section: impl FnMut(Category) -> ReviewSection) -> Self {
        ReviewSections {
            ownership: section(Category::Ownership),
            execution: section(Category::Execution),
            impact: section(Category::Impact),
            collaboration: section(Category::Collaboration),
            technical_depth: section(Category::TechnicalDepth),
        }
    }

    pub fn get(&self, category: Category) -> &ReviewSection {
        match category {
            Category::Ownership => &self.ownership,
            Category::Execution => &self.execution,
            Category::Impact => &self.impact,
            Category::Collaboration => &self.collaboration,
            Category::TechnicalDepth => &self.technical_depth,
        }
    }

    /// Sections in report order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &ReviewSection)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReview {
    pub date_range_start: NaiveDate,
    pub date_range_end: NaiveDate,
    pub categories: ReviewSections,
    pub generated_at: DateTime<Utc>,
}

impl PerformanceReview {
    /// Section for a category
    pub fn section(&self, category: Category) -> &ReviewSection {
        self.categories.get(category)
    }

    /// Bullets for a category
    pub fn bullets(&self, category: Category) -> &[String] {
        &self.section(category).bullets
    }
}
