//! Weekly summary generation over in-memory entries

mod common;
use common::{build, date, entry, stamp};

use impactlog::domain::weekly::{entries_in_range, weekly_at};
use impactlog::domain::{generate_weekly, EntryDraft};

#[test]
fn test_empty_range_uses_fallbacks() {
    let entries = vec![entry("2024-06-01", "Outside of the week entirely")];
    let summary = weekly_at(&entries, date("2024-06-10"), date("2024-06-16"), stamp());

    assert_eq!(summary.key_contributions, "No contributions logged this week.");
    assert_eq!(summary.impact, "No impact statements logged this week.");
    assert_eq!(
        summary.challenges_and_learnings,
        "No challenges or blockers logged this week."
    );
    assert_eq!(summary.next_week_focus, "• Continue with ongoing work items.");
    assert_eq!(summary.week_start, date("2024-06-10"));
    assert_eq!(summary.week_end, date("2024-06-16"));
}

#[test]
fn test_range_is_inclusive_at_both_ends() {
    let entries = vec![
        entry("2024-06-16", "Closed out the sprint board"),
        entry("2024-06-10", "Kicked off the sprint planning"),
        entry("2024-06-17", "Next week already"),
        entry("2024-06-09", "Last week already"),
    ];

    let summary = weekly_at(&entries, date("2024-06-10"), date("2024-06-16"), stamp());

    assert_eq!(
        summary.key_contributions,
        "• Closed out the sprint board\n• Kicked off the sprint planning"
    );
}

#[test]
fn test_short_fragments_are_not_contributions() {
    let entries = vec![entry("2024-06-11", "Standup. Migrated the billing cron jobs. 1:1s")];
    let summary = weekly_at(&entries, date("2024-06-10"), date("2024-06-16"), stamp());

    assert_eq!(summary.key_contributions, "• Migrated the billing cron jobs");
}

#[test]
fn test_impact_and_challenges_collected_per_entry() {
    let entries = vec![
        build(
            EntryDraft::new(date("2024-06-12"), "Rolled out caching layer")
                .with_impact("p95 latency halved")
                .with_blockers("cache invalidation edge cases"),
        ),
        build(EntryDraft::new(date("2024-06-11"), "Wrote the caching RFC").with_impact("Team aligned")),
    ];

    let summary = weekly_at(&entries, date("2024-06-10"), date("2024-06-16"), stamp());

    assert_eq!(summary.impact, "• p95 latency halved\n• Team aligned");
    assert_eq!(summary.challenges_and_learnings, "• cache invalidation edge cases");
    assert_eq!(
        summary.next_week_focus,
        "• Address blockers: cache invalidation edge cases"
    );
}

#[test]
fn test_next_week_focus_uses_latest_entry_regardless_of_input_order() {
    // ascending input: the latest entry has no blockers
    let entries = vec![
        build(EntryDraft::new(date("2024-06-10"), "Started the audit").with_blockers("no access")),
        entry("2024-06-14", "Finished the audit"),
    ];

    let summary = weekly_at(&entries, date("2024-06-10"), date("2024-06-16"), stamp());
    assert_eq!(summary.next_week_focus, "• Continue with ongoing work items.");
}

#[test]
fn test_entries_in_range_sorts_newest_first() {
    let entries = vec![
        entry("2024-06-10", "a"),
        entry("2024-06-12", "b"),
        entry("2024-06-11", "c"),
    ];

    let dates: Vec<_> = entries_in_range(&entries, date("2024-06-10"), date("2024-06-11"))
        .iter()
        .map(|e| e.date)
        .collect();
    assert_eq!(dates, vec![date("2024-06-11"), date("2024-06-10")]);
}

#[test]
fn test_repeat_calls_differ_only_in_timestamp() {
    let entries = vec![
        build(
            EntryDraft::new(date("2024-06-12"), "Rolled out caching layer. Updated the runbook")
                .with_impact("p95 latency halved")
                .with_blockers("cache invalidation edge cases"),
        ),
        entry("2024-06-10", "Kicked off the caching project"),
    ];

    let mut first = generate_weekly(&entries, date("2024-06-10"), date("2024-06-16"));
    let second = generate_weekly(&entries, date("2024-06-10"), date("2024-06-16"));
    first.generated_at = second.generated_at;

    assert_eq!(first, second);
}
