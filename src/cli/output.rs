//! Output formatting utilities

use crate::application::TimelineDay;
use crate::domain::LogEntry;

/// Format a list of entries, one line per day
pub fn format_entry_list(entries: &[LogEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let headline = entry
            .work_description
            .lines()
            .next()
            .unwrap_or_default()
            .trim();
        output.push_str(&format!("{}  {}  {}\n", entry.date, entry.id, headline));
    }
    output
}

/// Format a week as one line per day, flagging days with no entry
pub fn format_timeline(days: &[TimelineDay]) -> String {
    let (first, last) = match (days.first(), days.last()) {
        (Some(first), Some(last)) => (first.date, last.date),
        _ => return "No days in range".to_string(),
    };

    let mut output = format!(
        "Week of {} - {}\n\n",
        first.format("%b %-d"),
        last.format("%b %-d, %Y")
    );
    for day in days {
        let line = match &day.entry {
            Some(entry) => entry
                .work_description
                .lines()
                .next()
                .unwrap_or_default()
                .trim()
                .to_string(),
            None => "(no entry)".to_string(),
        };
        output.push_str(&format!("{}  {}\n", day.date.format("%a %Y-%m-%d"), line));
    }

    let logged = days.iter().filter(|d| d.entry.is_some()).count();
    output.push_str(&format!("\n{} of {} days logged\n", logged, days.len()));
    output
}

/// Format a single entry with all of its fields
pub fn format_entry(entry: &LogEntry) -> String {
    let mut output = format!(
        "{} ({})\n\n{}\n",
        entry.date.format("%A, %B %-d, %Y"),
        entry.id,
        entry.work_description
    );

    if let Some(impact) = entry.impact() {
        output.push_str(&format!("\nImpact: {}\n", impact));
    }
    if let Some(blockers) = entry.blockers() {
        output.push_str(&format!("\nBlockers: {}\n", blockers));
    }
    if !entry.links.is_empty() {
        output.push_str("\nLinks:\n");
        for link in &entry.links {
            match &link.label {
                Some(label) => output.push_str(&format!("  {} <{}>\n", label, link.url)),
                None => output.push_str(&format!("  {}\n", link.url)),
            }
        }
    }
    output
}
