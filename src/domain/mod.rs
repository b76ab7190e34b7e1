//! Domain layer - Log entries and the summary generators

pub mod category;
pub mod entry;
pub mod review;
pub mod segment;
pub mod standup;
pub mod summary;
pub mod time_ref;
pub mod weekly;

pub use category::{classify, Category};
pub use entry::{EntryDraft, Link, LogEntry, ValidDraft};
pub use review::generate_review;
pub use standup::generate_standup;
pub use summary::{
    PerformanceReview, ReviewSection, ReviewSections, StandupSummary, WeeklySummary,
};
pub use time_ref::{DateRange, TimeReference, WeekStart};
pub use weekly::generate_weekly;
