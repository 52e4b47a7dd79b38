//! Week ordinals for the recurrence pattern.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One slot in a tutorial's weekly recurrence. Week 1 is the semester's
/// first week. Used both as a set-membership key (which weeks a tutorial
/// runs) and as a lookup key into the attendance table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Week(pub u32);

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
