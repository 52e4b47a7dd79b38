//! Concrete, dated tutorial occurrences.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One concrete session: either materialized from the recurrence pattern or
/// logged manually. Equality is structural over all three fields; events are
/// never mutated after creation.
///
/// The event log sorts by `start`; ties keep their insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub label: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Event {
    pub fn new(label: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Event {
            label: label.to_string(),
            start,
            end,
        }
    }

    /// Whole hours this event ran for; the fraction is discarded per event,
    /// not pooled across the log.
    pub fn hours(&self) -> i64 {
        (self.end - self.start).num_hours()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} - {})",
            self.label,
            self.start.format("%Y-%m-%d %H:%M"),
            self.end.format("%Y-%m-%d %H:%M")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn test_hours_truncate_fraction() {
        let start = Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap();
        let event = Event::new("T01 CS1010", start, start + Duration::minutes(90));
        assert_eq!(event.hours(), 1);

        let short = Event::new("T01 CS1010", start, start + Duration::minutes(30));
        assert_eq!(short.hours(), 0);
    }

    #[test]
    fn test_json_roundtrip() {
        let start = Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap();
        let event = Event::new("T01 CS1010", start, start + Duration::hours(2));

        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
