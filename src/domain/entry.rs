//! Daily log entries

use crate::error::{ImpactLogError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A link attached to a day's entry (PR, doc, ticket...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Link {
    pub fn new(url: impl Into<String>, label: Option<String>) -> Self {
        Link {
            id: uuid::Uuid::new_v4().to_string(),
            url: url.into(),
            label,
        }
    }

    /// Parse `URL` or `URL|LABEL` as given on the command line
    pub fn parse(input: &str) -> Result<Self> {
        let (url, label) = match input.split_once('|') {
            Some((url, label)) => (url.trim(), clean_text(Some(label.to_string()))),
            None => (input.trim(), None),
        };

        if url.is_empty() {
            return Err(ImpactLogError::InvalidEntry(format!(
                "Link has no URL: '{}'",
                input
            )));
        }

        Ok(Link::new(url, label))
    }
}

/// One calendar day's logged work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: String,
    pub date: NaiveDate,
    pub work_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blockers: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LogEntry {
    /// Impact statement, if one was written
    pub fn impact(&self) -> Option<&str> {
        non_blank(self.impact.as_deref())
    }

    /// Blockers or follow-ups, if any were written
    pub fn blockers(&self) -> Option<&str> {
        non_blank(self.blockers.as_deref())
    }
}

/// Fields supplied by the user when logging a day.
///
/// `id` is set when editing an existing entry; without it the store
/// matches on `date`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub id: Option<String>,
    pub date: Option<NaiveDate>,
    pub work_description: String,
    pub impact: Option<String>,
    pub blockers: Option<String>,
    pub links: Vec<Link>,
}

impl EntryDraft {
    pub fn new(date: NaiveDate, work_description: impl Into<String>) -> Self {
        EntryDraft {
            date: Some(date),
            work_description: work_description.into(),
            ..Default::default()
        }
    }

    pub fn with_impact(mut self, impact: impl Into<String>) -> Self {
        self.impact = Some(impact.into());
        self
    }

    pub fn with_blockers(mut self, blockers: impl Into<String>) -> Self {
        self.blockers = Some(blockers.into());
        self
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    /// Check required fields and normalise blank optional text to `None`
    pub fn validate(self) -> Result<ValidDraft> {
        let date = self
            .date
            .ok_or_else(|| ImpactLogError::InvalidEntry("Entry needs a date".to_string()))?;

        let work_description = self.work_description.trim().to_string();
        if work_description.is_empty() {
            return Err(ImpactLogError::InvalidEntry(
                "Work description is required".to_string(),
            ));
        }

        if let Some(link) = self.links.iter().find(|l| l.url.trim().is_empty()) {
            return Err(ImpactLogError::InvalidEntry(format!(
                "Link '{}' has an empty URL",
                link.id
            )));
        }

        Ok(ValidDraft {
            id: self.id,
            date,
            work_description,
            impact: clean_text(self.impact),
            blockers: clean_text(self.blockers),
            links: self.links,
        })
    }
}

/// A draft that passed validation, ready to be stamped and stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub id: Option<String>,
    pub date: NaiveDate,
    pub work_description: String,
    pub impact: Option<String>,
    pub blockers: Option<String>,
    pub links: Vec<Link>,
}

impl ValidDraft {
    /// Turn the draft into a stored entry.
    ///
    /// `existing` is the entry being replaced; its id and creation time are kept.
    pub fn into_entry(self, existing: Option<&LogEntry>, now: DateTime<Utc>) -> LogEntry {
        let (id, created_at) = match existing {
            Some(prev) => (prev.id.clone(), prev.created_at),
            None => (
                self.id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
                now,
            ),
        };

        LogEntry {
            id,
            date: self.date,
            work_description: self.work_description,
            impact: self.impact,
            links: self.links,
            blockers: self.blockers,
            created_at,
            updated_at: now.max(created_at),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn clean_text(value: Option<String>) -> Option<String> {
    non_blank(value.as_deref()).map(str::to_string)
}
