//! Summary use cases
//!
//! Fetches the relevant entries from a [`LogStore`] and hands them to the
//! pure generators in [`crate::domain`].

use crate::domain::{
    generate_review, generate_standup, generate_weekly, DateRange, PerformanceReview,
    StandupSummary, WeeklySummary,
};
use crate::error::Result;
use crate::infrastructure::LogStore;
use chrono::NaiveDate;

/// Service producing standup, weekly and review summaries from a store
pub struct SummaryService<S: LogStore> {
    store: S,
}

impl<S: LogStore> SummaryService<S> {
    pub fn new(store: S) -> Self {
        SummaryService { store }
    }

    /// Standup for `date`, using that day's entry and the day before
    pub fn standup(&self, date: NaiveDate) -> Result<StandupSummary> {
        let mut entries = Vec::with_capacity(2);
        if let Some(today) = self.store.get_by_date(date)? {
            entries.push(today);
        }
        if let Some(yesterday) = date.pred_opt() {
            if let Some(entry) = self.store.get_by_date(yesterday)? {
                entries.push(entry);
            }
        }

        Ok(generate_standup(&entries, date))
    }

    /// Weekly summary for `[start, end]`
    pub fn weekly(&self, start: NaiveDate, end: NaiveDate) -> Result<WeeklySummary> {
        let range = DateRange::new(start, end)?;
        let entries = self.store.get_by_date_range(range.start, range.end)?;
        Ok(generate_weekly(&entries, range.start, range.end))
    }

    /// Review evidence for `[start, end]`
    pub fn review(&self, start: NaiveDate, end: NaiveDate) -> Result<PerformanceReview> {
        let range = DateRange::new(start, end)?;
        let entries = self.store.get_by_date_range(range.start, range.end)?;
        Ok(generate_review(&entries, range.start, range.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, EntryDraft};
    use crate::error::ImpactLogError;
    use crate::infrastructure::MemoryLogStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store() -> MemoryLogStore {
        let mut store = MemoryLogStore::new();
        store
            .save(
                EntryDraft::new(date(2024, 6, 9), "Fixed login bug. Reviewed PR")
                    .with_blockers("waiting on design"),
            )
            .unwrap();
        store
            .save(EntryDraft::new(date(2024, 6, 3), "Led the quarterly planning session"))
            .unwrap();
        store
    }

    #[test]
    fn test_standup_reads_yesterday_from_store() {
        let summary = SummaryService::new(store()).standup(date(2024, 6, 10)).unwrap();

        assert_eq!(summary.yesterday, "• Fixed login bug\n• Reviewed PR");
        assert_eq!(summary.today, "Follow up on: waiting on design");
        assert_eq!(summary.blockers, "waiting on design");
    }

    #[test]
    fn test_weekly_only_sees_range() {
        let summary = SummaryService::new(store())
            .weekly(date(2024, 6, 3), date(2024, 6, 9))
            .unwrap();

        assert_eq!(
            summary.key_contributions,
            "• Fixed login bug\n• Reviewed PR\n• Led the quarterly planning session"
        );
        assert_eq!(summary.next_week_focus, "• Address blockers: waiting on design");
    }

    #[test]
    fn test_review_over_store() {
        let review = SummaryService::new(store())
            .review(date(2024, 6, 1), date(2024, 6, 30))
            .unwrap();

        assert_eq!(review.bullets(Category::Ownership), ["Led the quarterly planning session"]);
        assert_eq!(review.bullets(Category::Execution), ["Fixed login bug"]);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let service = SummaryService::new(store());
        assert!(matches!(
            service.weekly(date(2024, 6, 9), date(2024, 6, 3)),
            Err(ImpactLogError::InvalidDate(_))
        ));
        assert!(service.review(date(2024, 6, 9), date(2024, 6, 3)).is_err());
    }
}
