use std::collections::BTreeMap;
use std::fmt;

use crate::agent::Agent;
use crate::condition::Condition;

/// Number of agents per condition, ordered by severity.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Census {
    counts: BTreeMap<Condition, usize>,
}

impl Census {
    pub fn of(agents: &[Agent]) -> Self {
        let mut counts = BTreeMap::new();
        for agent in agents {
            *counts.entry(agent.category).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn count(&self, condition: Condition) -> usize {
        self.counts.get(&condition).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Agents that would still take part in a meeting.
    pub fn active(&self) -> usize {
        self.counts
            .iter()
            .filter(|(condition, _)| condition.is_active())
            .map(|(_, n)| n)
            .sum()
    }
}

impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for condition in Condition::ALL {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{}={}", condition, self.count(condition))?;
        }
        Ok(())
    }
}
