use std::fmt;

use serde::{Deserialize, Serialize};

use crate::condition::Condition;

/// A named participant in the meetup simulation.
///
/// Agents are values: transitions return a new `Agent` and leave the
/// original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    pub category: Condition,
}

impl Agent {
    pub fn new(name: impl Into<String>, category: Condition) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }

    pub fn with_category(&self, category: Condition) -> Self {
        Self {
            name: self.name.clone(),
            category,
        }
    }

    pub fn improve(&self) -> Self {
        self.with_category(self.category.improved())
    }

    pub fn worsen(&self) -> Self {
        self.with_category(self.category.worsened())
    }

    pub fn is_active(&self) -> bool {
        self.category.is_active()
    }

    pub fn is_cure(&self) -> bool {
        self.category.is_cure()
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Agent(name={}, category={})", self.name, self.category)
    }
}
