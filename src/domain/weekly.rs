//! Weekly summary generation

use crate::domain::segment::{bulleted, key_points};
use crate::domain::{LogEntry, WeeklySummary};
use chrono::{DateTime, NaiveDate, Utc};

pub const NO_CONTRIBUTIONS: &str = "No contributions logged this week.";
pub const NO_IMPACT: &str = "No impact statements logged this week.";
pub const NO_CHALLENGES: &str = "No challenges or blockers logged this week.";
pub const CONTINUE_ITEMS: &str = "• Continue with ongoing work items.";

/// Entries dated within `[start, end]`, newest first.
///
/// Input order is not trusted; ties keep their incoming order.
pub fn entries_in_range(entries: &[LogEntry], start: NaiveDate, end: NaiveDate) -> Vec<&LogEntry> {
    let mut in_range: Vec<&LogEntry> = entries
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .collect();
    in_range.sort_by(|a, b| b.date.cmp(&a.date));
    in_range
}

/// Summarise the week `[week_start, week_end]`, stamped with the current time.
pub fn generate_weekly(
    entries: &[LogEntry],
    week_start: NaiveDate,
    week_end: NaiveDate,
) -> WeeklySummary {
    weekly_at(entries, week_start, week_end, Utc::now())
}

pub fn weekly_at(
    entries: &[LogEntry],
    week_start: NaiveDate,
    week_end: NaiveDate,
    generated_at: DateTime<Utc>,
) -> WeeklySummary {
    let week = entries_in_range(entries, week_start, week_end);
    log::debug!(
        "weekly summary {}..={}: {} of {} entries in range",
        week_start,
        week_end,
        week.len(),
        entries.len()
    );

    let contributions: Vec<&str> = week
        .iter()
        .flat_map(|e| key_points(&e.work_description))
        .collect();
    let impacts: Vec<&str> = week.iter().filter_map(|e| e.impact()).collect();
    let challenges: Vec<&str> = week.iter().filter_map(|e| e.blockers()).collect();

    let next_week_focus = match week.first().and_then(|e| e.blockers()) {
        Some(blockers) => format!("• Address blockers: {}", blockers),
        None => CONTINUE_ITEMS.to_string(),
    };

    WeeklySummary {
        week_start,
        week_end,
        key_contributions: section(&contributions, NO_CONTRIBUTIONS),
        impact: section(&impacts, NO_IMPACT),
        challenges_and_learnings: section(&challenges, NO_CHALLENGES),
        next_week_focus,
        generated_at,
    }
}

fn section(items: &[&str], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        bulleted(items)
    }
}
