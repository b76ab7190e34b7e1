//! Standup generation over in-memory entries

mod common;
use common::{build, date, entry, stamp};

use impactlog::domain::standup::{generate_standup, standup_at};
use impactlog::domain::EntryDraft;

#[test]
fn test_no_entries_uses_fallbacks() {
    let summary = standup_at(&[], date("2024-06-10"), stamp());

    assert_eq!(summary.yesterday, "No work logged for yesterday.");
    assert_eq!(summary.today, "Continue with ongoing work.");
    assert_eq!(summary.blockers, "No blockers.");
    assert_eq!(summary.generated_at, stamp());
}

#[test]
fn test_yesterday_blockers_become_today_follow_up() {
    let entries = vec![build(
        EntryDraft::new(date("2024-06-09"), "Fixed login bug. Reviewed PR")
            .with_blockers("waiting on design"),
    )];

    let summary = standup_at(&entries, date("2024-06-10"), stamp());

    assert_eq!(summary.yesterday, "• Fixed login bug\n• Reviewed PR");
    assert_eq!(summary.today, "Follow up on: waiting on design");
    assert_eq!(summary.blockers, "waiting on design");
}

#[test]
fn test_single_statement_is_still_bulleted() {
    let entries = vec![entry("2024-06-09", "Pairing day.")];
    let summary = standup_at(&entries, date("2024-06-10"), stamp());
    assert_eq!(summary.yesterday, "• Pairing day");
}

#[test]
fn test_yesterday_impact_is_appended() {
    let entries = vec![build(
        EntryDraft::new(date("2024-06-09"), "Shipped search").with_impact("Support tickets down 20%"),
    )];

    let summary = standup_at(&entries, date("2024-06-10"), stamp());
    assert_eq!(
        summary.yesterday,
        "• Shipped search\n• Impact: Support tickets down 20%"
    );
}

#[test]
fn test_today_entry_wins_over_follow_up() {
    let entries = vec![
        build(
            EntryDraft::new(date("2024-06-10"), "Writing the rollout plan\nSync with infra")
                .with_blockers("need staging access"),
        ),
        build(EntryDraft::new(date("2024-06-09"), "Debugging deploys").with_blockers("flaky CI")),
    ];

    let summary = standup_at(&entries, date("2024-06-10"), stamp());

    assert_eq!(summary.today, "• Writing the rollout plan\n• Sync with infra");
    // yesterday's blockers first, then today's
    assert_eq!(summary.blockers, "flaky CI\n• need staging access");
}

#[test]
fn test_only_adjacent_days_are_considered() {
    let entries = vec![
        build(EntryDraft::new(date("2024-06-08"), "Weekend hack").with_blockers("old blocker")),
        entry("2024-06-11", "Future work"),
    ];

    let summary = standup_at(&entries, date("2024-06-10"), stamp());

    assert_eq!(summary.yesterday, "No work logged for yesterday.");
    assert_eq!(summary.today, "Continue with ongoing work.");
    assert_eq!(summary.blockers, "No blockers.");
}

#[test]
fn test_yesterday_crosses_month_boundary() {
    let entries = vec![entry("2024-02-29", "Leap day release")];
    let summary = standup_at(&entries, date("2024-03-01"), stamp());
    assert_eq!(summary.yesterday, "• Leap day release");
}

#[test]
fn test_repeat_calls_differ_only_in_timestamp() {
    let entries = vec![entry("2024-06-09", "Fixed login bug. Reviewed PR")];

    let mut first = generate_standup(&entries, date("2024-06-10"));
    let second = generate_standup(&entries, date("2024-06-10"));
    first.generated_at = second.generated_at;

    assert_eq!(first, second);
}
