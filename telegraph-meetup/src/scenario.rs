//! Scenario files for the meetup simulation.
//!
//! ```yaml
//! rounds: 2
//! agents:
//!   - { name: Adam, category: SICK }
//!   - { name: Cure0, category: CURE }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use crate::agent::Agent;
use crate::meeting::{run_rounds_with_summary, MeetupSummary};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Scenario {
    pub agents: Vec<Agent>,
    /// Number of meetup rounds to run (default 1).
    #[serde(default = "default_rounds")]
    #[validate(range(min = 1, max = 10000))]
    pub rounds: usize,
}

fn default_rounds() -> usize {
    1
}

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Scenario file not found: {0}")]
    FileNotFound(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Deserialization error: {0}")]
    Serde(#[from] serde_yaml::Error),
    #[error("Invalid scenario: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl Scenario {
    pub fn new(agents: Vec<Agent>) -> Self {
        Self {
            agents,
            rounds: default_rounds(),
        }
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// The fixed ten-agent demonstration scenario.
    pub fn reference() -> Self {
        use crate::condition::Condition::*;

        Self::new(vec![
            Agent::new("Adam", Sick),
            Agent::new("Cure0", Cure),
            Agent::new("Cure1", Cure),
            Agent::new("Bob", Healthy),
            Agent::new("Alice", Dead),
            Agent::new("Charlie", Dying),
            Agent::new("Vaccine", Sick),
            Agent::new("Darlene", Dying),
            Agent::new("Emma", Sick),
            Agent::new("Cure2", Cure),
        ])
    }

    /// Loads a scenario from a YAML file.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ScenarioError::FileNotFound(format!(
                "{} does not exist",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ScenarioError> {
        let scenario: Self = serde_yaml::from_str(content)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn run(&self) -> (Vec<Agent>, MeetupSummary) {
        run_rounds_with_summary(&self.agents, self.rounds)
    }
}
