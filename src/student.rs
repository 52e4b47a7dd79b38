//! Students enrolled in a tutorial.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A student on a tutorial's roster. The roster holds copies of records
/// owned by the surrounding application; identity is by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub email: String,
}

impl Student {
    pub fn new(name: &str, email: &str) -> Self {
        Student {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    /// Identity check: two records refer to the same student when their
    /// names match, even if contact details differ.
    pub fn is_same_student(&self, other: &Student) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
