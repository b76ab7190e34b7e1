//! Daily log entry use cases

use crate::domain::{DateRange, EntryDraft, LogEntry};
use crate::error::{ImpactLogError, Result};
use crate::infrastructure::LogStore;
use chrono::NaiveDate;

/// A calendar day and the entry logged for it, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineDay {
    pub date: NaiveDate,
    pub entry: Option<LogEntry>,
}

/// Service for recording and browsing daily entries
pub struct LogService<S: LogStore> {
    store: S,
}

impl<S: LogStore> LogService<S> {
    pub fn new(store: S) -> Self {
        LogService { store }
    }

    /// Log a day, replacing whatever was logged for that date
    pub fn record(&mut self, draft: EntryDraft) -> Result<LogEntry> {
        let entry = self.store.save(draft)?;
        log::info!("logged {} ({})", entry.date, entry.id);
        Ok(entry)
    }

    /// The entry for a given day
    pub fn show(&self, date: NaiveDate) -> Result<LogEntry> {
        self.store
            .get_by_date(date)?
            .ok_or_else(|| ImpactLogError::EntryNotFound(date.to_string()))
    }

    /// Entries newest first, optionally bounded and truncated
    pub fn list(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        limit: Option<usize>,
    ) -> Result<Vec<LogEntry>> {
        let mut entries = match (from, to) {
            (None, None) => self.store.get_all()?,
            (from, to) => {
                let range = DateRange::new(
                    from.unwrap_or(NaiveDate::MIN),
                    to.unwrap_or(NaiveDate::MAX),
                )?;
                self.store.get_by_date_range(range.start, range.end)?
            }
        };

        if let Some(n) = limit {
            entries.truncate(n);
        }
        Ok(entries)
    }

    /// Every day of `range` oldest first, paired with its entry
    pub fn timeline(&self, range: DateRange) -> Result<Vec<TimelineDay>> {
        let mut entries = self.store.get_by_date_range(range.start, range.end)?;

        let days = range
            .days()
            .map(|date| {
                let entry = entries
                    .iter()
                    .position(|e| e.date == date)
                    .map(|i| entries.swap_remove(i));
                TimelineDay { date, entry }
            })
            .collect();
        Ok(days)
    }

    /// Delete by id
    pub fn delete(&mut self, id: &str) -> Result<()> {
        if !self.store.delete(id)? {
            return Err(ImpactLogError::EntryNotFound(id.to_string()));
        }
        log::info!("deleted entry {}", id);
        Ok(())
    }
}
