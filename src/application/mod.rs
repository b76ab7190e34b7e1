//! Application layer - Use cases and orchestration

pub mod export;
pub mod init;
pub mod log_entry;
pub mod manage_config;
pub mod summaries;

pub use export::{
    export_review, export_weekly, render_review, render_standup, render_weekly, ExportFormat,
};
pub use log_entry::{LogService, TimelineDay};
pub use manage_config::ConfigService;
pub use summaries::SummaryService;
