//! Overdue/today/upcoming bucketing for task lists.
//!
//! The reference "today" window is an explicit argument so the
//! classification stays a pure function: callers (the CLI, tests)
//! decide what "today" means once, then classify any number of tasks
//! against it.

use chrono::{NaiveDate, NaiveTime};
use std::{fmt, str::FromStr};

use crate::model::{ParseEnumError, normalize};

/// One calendar day as a half-open epoch-microsecond interval
/// `[start_us, end_us)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodayWindow {
    pub start_us: i64,
    pub end_us: i64,
}

impl TodayWindow {
    const DAY_US: i64 = 24 * 60 * 60 * 1_000_000;

    /// Window covering the given UTC calendar date.
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        let start_us = date.and_time(NaiveTime::MIN).and_utc().timestamp_micros();
        Self {
            start_us,
            end_us: start_us + Self::DAY_US,
        }
    }
}

/// Where a task's due date falls relative to the reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    Overdue,
    DueToday,
    Upcoming,
    NoDueDate,
}

impl DueStatus {
    /// Classify a due timestamp against the reference window.
    /// A missing due date is its own bucket, never an error.
    #[must_use]
    pub const fn classify(due_at_us: Option<i64>, window: TodayWindow) -> Self {
        match due_at_us {
            None => Self::NoDueDate,
            Some(t) if t < window.start_us => Self::Overdue,
            Some(t) if t < window.end_us => Self::DueToday,
            Some(_) => Self::Upcoming,
        }
    }
}

impl fmt::Display for DueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overdue => f.write_str("overdue"),
            Self::DueToday => f.write_str("today"),
            Self::Upcoming => f.write_str("upcoming"),
            Self::NoDueDate => f.write_str("none"),
        }
    }
}

impl FromStr for DueStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "overdue" => Ok(Self::Overdue),
            "today" => Ok(Self::DueToday),
            "upcoming" => Ok(Self::Upcoming),
            "none" => Ok(Self::NoDueDate),
            _ => Err(ParseEnumError {
                expected: "due filter",
                got: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DueStatus, TodayWindow};
    use chrono::NaiveDate;

    fn window() -> TodayWindow {
        TodayWindow::for_date(NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date"))
    }

    #[test]
    fn window_covers_one_utc_day() {
        let w = window();
        assert_eq!(w.end_us - w.start_us, 24 * 60 * 60 * 1_000_000);
    }

    #[test]
    fn classification_buckets() {
        let w = window();
        assert_eq!(
            DueStatus::classify(Some(w.start_us - 1), w),
            DueStatus::Overdue
        );
        assert_eq!(DueStatus::classify(Some(w.start_us), w), DueStatus::DueToday);
        assert_eq!(
            DueStatus::classify(Some(w.end_us - 1), w),
            DueStatus::DueToday
        );
        assert_eq!(DueStatus::classify(Some(w.end_us), w), DueStatus::Upcoming);
        assert_eq!(DueStatus::classify(None, w), DueStatus::NoDueDate);
    }

    #[test]
    fn display_parse_roundtrips() {
        for status in [
            DueStatus::Overdue,
            DueStatus::DueToday,
            DueStatus::Upcoming,
            DueStatus::NoDueDate,
        ] {
            let reparsed: DueStatus = status.to_string().parse().unwrap();
            assert_eq!(status, reparsed);
        }
    }

    #[test]
    fn parse_rejects_unknown_bucket() {
        assert!("someday".parse::<DueStatus>().is_err());
    }
}
