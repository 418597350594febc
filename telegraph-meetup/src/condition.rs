//! Health conditions and their one-step transitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Health condition of an agent, ordered by severity.
///
/// `Cure` is a modifier that heals whoever it meets. `Healthy` and `Dead`
/// are inactive: agents carrying them never take part in a meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Condition {
    Cure,
    Healthy,
    Sick,
    Dying,
    Dead,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Condition::Cure,
        Condition::Healthy,
        Condition::Sick,
        Condition::Dying,
        Condition::Dead,
    ];

    /// Whether an agent with this condition takes part in meetings.
    pub fn is_active(self) -> bool {
        !matches!(self, Condition::Healthy | Condition::Dead)
    }

    pub fn is_cure(self) -> bool {
        self == Condition::Cure
    }

    /// One step towards health. Only `Dying` and `Sick` move.
    pub fn improved(self) -> Condition {
        match self {
            Condition::Dying => Condition::Sick,
            Condition::Sick => Condition::Healthy,
            other => other,
        }
    }

    /// One step towards death. Only `Sick` and `Dying` move.
    pub fn worsened(self) -> Condition {
        match self {
            Condition::Sick => Condition::Dying,
            Condition::Dying => Condition::Dead,
            other => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Condition::Cure => "CURE",
            Condition::Healthy => "HEALTHY",
            Condition::Sick => "SICK",
            Condition::Dying => "DYING",
            Condition::Dead => "DEAD",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
