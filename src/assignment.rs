//! Assignment keys for submission tracking.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marker meaning a student has not submitted a given assignment. Any other
/// marker value encodes submission order or hours spent.
pub const NOT_SUBMITTED: i32 = -1;

/// A gradable task tracked per tutorial.
///
/// Ordering (name, then deadline, then max score) fixes the iteration order
/// of the assignment table, so positional lookup is deterministic.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Assignment {
    pub name: String,
    pub deadline: DateTime<Utc>,
    pub max_score: u32,
}

impl Assignment {
    pub fn new(name: &str, deadline: DateTime<Utc>, max_score: u32) -> Self {
        Assignment {
            name: name.to_string(),
            deadline,
            max_score,
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (due {}, max score {})",
            self.name,
            self.deadline.format("%Y-%m-%d %H:%M"),
            self.max_score
        )
    }
}
