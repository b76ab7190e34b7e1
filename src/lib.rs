//! impactlog - Personal work log with generated summaries
//!
//! Records one entry per working day (what you did, why it mattered,
//! links, blockers) and derives standup notes, weekly summaries and
//! performance-review evidence from them by keyword-based extraction.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ImpactLogError;
