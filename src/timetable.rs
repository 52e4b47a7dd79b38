//! Weekly schedule definition and current-week derivation.

use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc, Weekday};

use crate::error::{TutorLogError, TutorLogResult};
use crate::semester::Semester;
use crate::week::Week;

/// A tutorial's weekly schedule: day of week, start time, duration and the
/// sparse set of semester weeks it runs in. Immutable once constructed.
///
/// Pure definition data; all date math happens relative to a [`Semester`]
/// anchor supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeTable {
    day: Weekday,
    start_time: NaiveTime,
    weeks: BTreeSet<Week>,
    duration: Duration,
}

impl TimeTable {
    /// Rejects non-positive durations; everything else is valid by type.
    pub fn new(
        day: Weekday,
        start_time: NaiveTime,
        weeks: BTreeSet<Week>,
        duration: Duration,
    ) -> TutorLogResult<Self> {
        if duration <= Duration::zero() {
            return Err(TutorLogError::InvalidDuration(duration.num_minutes()));
        }
        Ok(TimeTable {
            day,
            start_time,
            weeks,
            duration,
        })
    }

    pub fn day(&self) -> Weekday {
        self.day
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn weeks(&self) -> &BTreeSet<Week> {
        &self.weeks
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// First calendar date on or after `anchor` that falls on this
    /// schedule's day of week.
    pub fn first_occurrence(&self, anchor: NaiveDate) -> NaiveDate {
        let days_ahead = (self.day.num_days_from_monday() + 7
            - anchor.weekday().num_days_from_monday())
            % 7;
        anchor + Duration::days(i64::from(days_ahead))
    }

    /// Week number the wall clock currently falls in, counting from the
    /// semester anchor. None if the anchor is unset.
    pub fn current_week(&self, semester: &Semester) -> Option<Week> {
        self.current_week_at(semester, Utc::now())
    }

    /// Week number `now` falls in. Week 1 covers the anchor date and the six
    /// days after it. None if the anchor is unset or `now` precedes it.
    pub fn current_week_at(&self, semester: &Semester, now: DateTime<Utc>) -> Option<Week> {
        let start = semester.start()?;
        let elapsed = now.date_naive().signed_duration_since(start).num_days();
        if elapsed < 0 {
            return None;
        }
        Some(Week(elapsed as u32 / 7 + 1))
    }
}
