//! Date references and calendar ranges used to pick report periods

use crate::error::{ImpactLogError, Result};
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user-supplied reference to a calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeReference {
    /// Days relative to the base date (`today` = 0, `yesterday` = -1, `tomorrow` = 1)
    Relative(i64),
    /// Most recent occurrence of a weekday, today included
    Weekday(Weekday),
    /// Occurrence strictly before the base date
    LastWeekday(Weekday),
    /// Occurrence strictly after the base date
    NextWeekday(Weekday),
    /// An ISO `YYYY-MM-DD` date
    Date(NaiveDate),
}

impl TimeReference {
    /// Parse `today`, `yesterday`, weekday names, `last friday`, or `2024-06-10`
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();
        let invalid = || ImpactLogError::InvalidTimeReference(input.to_string());

        match normalized.as_str() {
            "today" | "now" => return Ok(TimeReference::Relative(0)),
            "yesterday" => return Ok(TimeReference::Relative(-1)),
            "tomorrow" => return Ok(TimeReference::Relative(1)),
            _ => {}
        }

        if let Some(day) = normalized.strip_prefix("last ") {
            return parse_weekday(day)
                .map(TimeReference::LastWeekday)
                .ok_or_else(invalid);
        }
        if let Some(day) = normalized.strip_prefix("next ") {
            return parse_weekday(day)
                .map(TimeReference::NextWeekday)
                .ok_or_else(invalid);
        }
        if let Some(weekday) = parse_weekday(&normalized) {
            return Ok(TimeReference::Weekday(weekday));
        }

        NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
            .map(TimeReference::Date)
            .map_err(|_| invalid())
    }

    /// Resolve against `base` (normally today's local date)
    pub fn resolve(&self, base: NaiveDate) -> NaiveDate {
        match *self {
            TimeReference::Relative(days) => shift_days(base, days),
            TimeReference::Weekday(target) => base - Days::new(days_since(base.weekday(), target)),
            TimeReference::LastWeekday(target) => {
                let back = match days_since(base.weekday(), target) {
                    0 => 7,
                    n => n,
                };
                base - Days::new(back)
            }
            TimeReference::NextWeekday(target) => {
                let forward = match days_since(target, base.weekday()) {
                    0 => 7,
                    n => n,
                };
                base + Days::new(forward)
            }
            TimeReference::Date(date) => date,
        }
    }
}

impl FromStr for TimeReference {
    type Err = ImpactLogError;

    fn from_str(s: &str) -> Result<Self> {
        TimeReference::parse(s)
    }
}

/// Full weekday names only; chrono's parser also takes "mon", which we don't want
fn parse_weekday(name: &str) -> Option<Weekday> {
    let weekday = match name.trim() {
        "monday" => Weekday::Mon,
        "tuesday" => Weekday::Tue,
        "wednesday" => Weekday::Wed,
        "thursday" => Weekday::Thu,
        "friday" => Weekday::Fri,
        "saturday" => Weekday::Sat,
        "sunday" => Weekday::Sun,
        _ => return None,
    };
    Some(weekday)
}

/// Days to walk back from `from` to reach `to` (0..=6)
fn days_since(from: Weekday, to: Weekday) -> u64 {
    u64::from((from.num_days_from_monday() + 7 - to.num_days_from_monday()) % 7)
}

fn shift_days(base: NaiveDate, days: i64) -> NaiveDate {
    let shifted = if days >= 0 {
        base.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        base.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.unwrap_or(base)
}

/// First day of the working week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    fn weekday(self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekStart::Monday => f.write_str("monday"),
            WeekStart::Sunday => f.write_str("sunday"),
        }
    }
}

impl FromStr for WeekStart {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monday" => Ok(WeekStart::Monday),
            "sunday" => Ok(WeekStart::Sunday),
            _ => Err(format!(
                "Invalid week start: '{}'. Valid values are: monday, sunday",
                s
            )),
        }
    }
}

/// An inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `start > end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ImpactLogError::InvalidDate(format!(
                "start {} is after end {}",
                start, end
            )));
        }
        Ok(DateRange { start, end })
    }

    /// The week containing `date`
    pub fn week_of(date: NaiveDate, week_start: WeekStart) -> Result<Self> {
        let back = days_since(date.weekday(), week_start.weekday());
        let start = date.checked_sub_days(Days::new(back));
        let end = start.and_then(|s| s.checked_add_days(Days::new(6)));
        match (start, end) {
            (Some(start), Some(end)) => Ok(DateRange { start, end }),
            _ => Err(out_of_range(date)),
        }
    }

    /// The `months` months leading up to and including `end`
    pub fn months_back(end: NaiveDate, months: u32) -> Result<Self> {
        let start = end
            .checked_sub_months(Months::new(months))
            .ok_or_else(|| {
                ImpactLogError::InvalidDate(format!(
                    "{} months before {} is outside the supported calendar",
                    months, end
                ))
            })?;
        Ok(DateRange { start, end })
    }

    pub fn previous_week(&self) -> Result<Self> {
        self.shift(|d| d.checked_sub_days(Days::new(7)))
    }

    pub fn next_week(&self) -> Result<Self> {
        self.shift(|d| d.checked_add_days(Days::new(7)))
    }

    fn shift(&self, by: impl Fn(NaiveDate) -> Option<NaiveDate>) -> Result<Self> {
        match (by(self.start), by(self.end)) {
            (Some(start), Some(end)) => Ok(DateRange { start, end }),
            _ => Err(out_of_range(self.end)),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every day in the range, oldest first
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| self.contains(*d))
    }
}

fn out_of_range(date: NaiveDate) -> ImpactLogError {
    ImpactLogError::InvalidDate(format!("week around {} is outside the supported calendar", date))
}
