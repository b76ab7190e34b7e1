#![allow(dead_code)]

use assert_cmd::Command;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use impactlog::domain::{EntryDraft, LogEntry};

pub fn impactlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("impactlog").unwrap();
    cmd.env_remove("IMPACTLOG_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Fixed generation stamp so whole summaries can be compared
pub fn stamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap()
}

pub fn entry(day: &str, work: &str) -> LogEntry {
    build(EntryDraft::new(date(day), work))
}

pub fn build(draft: EntryDraft) -> LogEntry {
    draft.validate().unwrap().into_entry(None, stamp())
}
