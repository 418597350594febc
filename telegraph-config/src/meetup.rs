//! Meetup simulation settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MeetupConfig {
    /// Scenario YAML to run. The reference scenario is used when unset.
    pub scenario: Option<PathBuf>,

    /// Upper bound on meetup rounds.
    #[validate(range(min = 1, max = 10000))]
    pub rounds: usize,
}

impl Default for MeetupConfig {
    fn default() -> Self {
        Self {
            scenario: None,
            rounds: 1,
        }
    }
}
