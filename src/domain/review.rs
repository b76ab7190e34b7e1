//! Performance-review evidence generation

use crate::domain::segment::key_points;
use crate::domain::weekly::entries_in_range;
use crate::domain::{
    classify, Category, LogEntry, PerformanceReview, ReviewSection, ReviewSections,
};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;

/// Per-category bullets gathered in discovery order
#[derive(Debug, Default)]
struct Evidence {
    bullets: BTreeMap<Category, Vec<String>>,
}

impl Evidence {
    fn push(&mut self, category: Category, bullet: String) {
        self.bullets.entry(category).or_default().push(bullet);
    }

    /// Impact bullets are deduplicated on exact text
    fn push_unique(&mut self, category: Category, bullet: String) {
        let list = self.bullets.entry(category).or_default();
        if !list.contains(&bullet) {
            list.push(bullet);
        }
    }

    fn collect(&mut self, entry: &LogEntry) {
        for point in key_points(&entry.work_description) {
            let matched = classify(point);

            for &category in matched.iter().filter(|c| **c != Category::Impact) {
                self.push(category, point.to_string());
            }

            // an entry-level impact statement makes every point impact evidence
            match entry.impact() {
                Some(impact) => {
                    self.push_unique(Category::Impact, format!("{} - {}", point, impact))
                }
                None if matched.contains(&Category::Impact) => {
                    self.push_unique(Category::Impact, point.to_string())
                }
                None => {}
            }
        }
    }

    fn into_sections(mut self) -> ReviewSections {
        ReviewSections::from_fn(|category| {
            let bullets = match self.bullets.remove(&category) {
                Some(list) if !list.is_empty() => list,
                _ => vec![category.fallback_bullet()],
            };
            ReviewSection {
                title: category.title().to_string(),
                bullets,
            }
        })
    }
}

/// Categorise work logged in `[start, end]`, stamped with the current time.
pub fn generate_review(entries: &[LogEntry], start: NaiveDate, end: NaiveDate) -> PerformanceReview {
    review_at(entries, start, end, Utc::now())
}

pub fn review_at(
    entries: &[LogEntry],
    start: NaiveDate,
    end: NaiveDate,
    generated_at: DateTime<Utc>,
) -> PerformanceReview {
    let period = entries_in_range(entries, start, end);

    let mut evidence = Evidence::default();
    for entry in &period {
        evidence.collect(entry);
    }

    log::debug!(
        "review {}..={}: {} entries, {} categories with evidence",
        start,
        end,
        period.len(),
        evidence.bullets.len()
    );

    PerformanceReview {
        date_range_start: start,
        date_range_end: end,
        categories: evidence.into_sections(),
        generated_at,
    }
}
