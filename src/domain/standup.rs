//! Daily standup generation

use crate::domain::segment::{bulleted, statements};
use crate::domain::{LogEntry, StandupSummary};
use chrono::{DateTime, NaiveDate, Utc};

pub const NO_YESTERDAY: &str = "No work logged for yesterday.";
pub const CONTINUE_WORK: &str = "Continue with ongoing work.";
pub const NO_BLOCKERS: &str = "No blockers.";

/// Build a standup for `current_date`, stamped with the current time.
pub fn generate_standup(entries: &[LogEntry], current_date: NaiveDate) -> StandupSummary {
    standup_at(entries, current_date, Utc::now())
}

/// Build a standup from the entries for `current_date` and the day before.
///
/// Only those two days are looked at; everything else in `entries` is ignored.
pub fn standup_at(
    entries: &[LogEntry],
    current_date: NaiveDate,
    generated_at: DateTime<Utc>,
) -> StandupSummary {
    let find = |date: NaiveDate| entries.iter().find(|e| e.date == date);

    let yesterday_entry = current_date.pred_opt().and_then(find);
    let today_entry = find(current_date);

    log::debug!(
        "standup for {}: yesterday logged = {}, today logged = {}",
        current_date,
        yesterday_entry.is_some(),
        today_entry.is_some()
    );

    let yesterday = match yesterday_entry {
        Some(entry) => {
            let mut text = bulleted(&statements(&entry.work_description));
            if let Some(impact) = entry.impact() {
                text.push_str(&format!("\n• Impact: {}", impact));
            }
            text
        }
        None => NO_YESTERDAY.to_string(),
    };

    let today = match (today_entry, yesterday_entry.and_then(LogEntry::blockers)) {
        (Some(entry), _) => bulleted(&statements(&entry.work_description)),
        (None, Some(blockers)) => format!("Follow up on: {}", blockers),
        (None, None) => CONTINUE_WORK.to_string(),
    };

    let recent_blockers: Vec<&str> = [yesterday_entry, today_entry]
        .into_iter()
        .flatten()
        .filter_map(LogEntry::blockers)
        .collect();
    let blockers = if recent_blockers.is_empty() {
        NO_BLOCKERS.to_string()
    } else {
        recent_blockers.join("\n• ")
    };

    StandupSummary {
        yesterday,
        today,
        blockers,
        generated_at,
    }
}
