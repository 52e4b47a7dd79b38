//! Semester anchor configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The semester start date the recurrence engine derives occurrences from.
///
/// The anchor is owned by the configuration layer and injected into every
/// derivation that needs it; it may be unset at any point, in which case
/// derivations produce an empty result rather than fail. Callers re-read it
/// on each call, never cache it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    start: Option<NaiveDate>,
}

impl Semester {
    /// A semester with no start date configured yet.
    pub fn unset() -> Self {
        Semester { start: None }
    }

    pub fn starting(date: NaiveDate) -> Self {
        Semester { start: Some(date) }
    }

    pub fn set_start(&mut self, date: NaiveDate) {
        self.start = Some(date);
    }

    pub fn clear_start(&mut self) {
        self.start = None;
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }
}
