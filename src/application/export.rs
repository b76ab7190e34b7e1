//! Rendering summaries for copying and exporting
//!
//! Markdown is what the `standup`/`weekly`/`review` commands print; the
//! plain-text form is what `--export` writes to disk.

use crate::domain::segment::bulleted;
use crate::domain::{Category, PerformanceReview, StandupSummary, WeeklySummary};
use crate::error::Result;
use chrono::{DateTime, NaiveDate, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Output flavour for rendered summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Headings and bold labels, for pasting into chat or docs
    Markdown,
    /// Upper-case headings with a rule and a generated-on footer
    Text,
}

const RULE_WIDTH: usize = 50;

fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn footer(generated_at: DateTime<Utc>) -> String {
    format!("---\nGenerated on {}", long_date(generated_at.date_naive()))
}

pub fn render_standup(summary: &StandupSummary) -> String {
    format!(
        "**Yesterday:**\n{}\n\n**Today:**\n{}\n\n**Blockers:**\n{}",
        summary.yesterday, summary.today, summary.blockers
    )
}

pub fn render_weekly(summary: &WeeklySummary, format: ExportFormat) -> String {
    let period = format!(
        "{} - {}",
        short_date(summary.week_start),
        short_date(summary.week_end)
    );
    let sections = [
        ("Key Contributions", &summary.key_contributions),
        ("Impact", &summary.impact),
        ("Challenges & Learnings", &summary.challenges_and_learnings),
        ("Next Week Focus", &summary.next_week_focus),
    ];

    match format {
        ExportFormat::Markdown => {
            let mut out = format!("# Weekly Summary: {}", period);
            for (heading, body) in sections {
                out.push_str(&format!("\n\n## {}\n{}", heading, body));
            }
            out
        }
        ExportFormat::Text => {
            let mut out = format!("Weekly Summary: {}\n{}", period, "=".repeat(RULE_WIDTH));
            for (heading, body) in sections {
                out.push_str(&format!("\n\n{}\n{}", heading.to_uppercase(), body));
            }
            out.push_str(&format!("\n\n{}", footer(summary.generated_at)));
            out
        }
    }
}

pub fn render_review(review: &PerformanceReview, format: ExportFormat) -> String {
    let period = format!(
        "Period: {} - {}",
        long_date(review.date_range_start),
        long_date(review.date_range_end)
    );

    let mut out = match format {
        ExportFormat::Markdown => format!("# Performance Review Evidence\n{}", period),
        ExportFormat::Text => format!(
            "PERFORMANCE REVIEW EVIDENCE\n{}\n{}",
            period,
            "=".repeat(RULE_WIDTH)
        ),
    };

    for category in Category::ALL {
        let section = review.section(category);
        let heading = match format {
            ExportFormat::Markdown => format!("## {}", section.title),
            ExportFormat::Text => section.title.to_uppercase(),
        };
        out.push_str(&format!("\n\n{}\n{}", heading, bulleted(&section.bullets)));
    }

    if format == ExportFormat::Text {
        out.push_str(&format!("\n\n{} using impactlog", footer(review.generated_at)));
    }
    out
}

/// Write the plain-text weekly summary into `dir`, returning the file path
pub fn export_weekly(summary: &WeeklySummary, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(format!("weekly-summary-{}.txt", summary.week_start));
    write_export(&path, &render_weekly(summary, ExportFormat::Text))?;
    Ok(path)
}

/// Write the plain-text review into `dir`, returning the file path
pub fn export_review(review: &PerformanceReview, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(format!(
        "performance-review-{}-to-{}.txt",
        review.date_range_start, review.date_range_end
    ));
    write_export(&path, &render_review(review, ExportFormat::Text))?;
    Ok(path)
}

fn write_export(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, contents)?;
    log::info!("exported {}", path.display());
    Ok(())
}
