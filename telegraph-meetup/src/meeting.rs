//! Meeting rules and the meetup rounds built from them.
//!
//! Within a round, active agents (`CURE`, `SICK`, `DYING`) meet in consecutive
//! pairs in input order. Inactive agents (`HEALTHY`, `DEAD`) sit the round out
//! and are appended after every pair result, in their original order. An odd
//! active agent out passes through unchanged.

use tracing::debug;

use crate::agent::Agent;

/// Outcome of a meeting between two slots.
///
/// - one slot empty: the other agent is returned unchanged
/// - exactly one `CURE`: the cure stays, the other agent improves
/// - two `CURE`s: nothing happens
/// - no `CURE`: both agents worsen
pub fn resolve_meeting(first: Option<&Agent>, second: Option<&Agent>) -> Vec<Agent> {
    match (first, second) {
        (None, None) => Vec::new(),
        (Some(agent), None) | (None, Some(agent)) => vec![agent.clone()],
        (Some(a), Some(b)) => match (a.is_cure(), b.is_cure()) {
            (true, false) => vec![a.clone(), b.improve()],
            (false, true) => vec![a.improve(), b.clone()],
            (true, true) => vec![a.clone(), b.clone()],
            (false, false) => vec![a.worsen(), b.worsen()],
        },
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct RoundStats {
    meetings: usize,
    transitions: usize,
}

fn meet_round(agents: &[Agent]) -> (Vec<Agent>, RoundStats) {
    let (active, inactive): (Vec<&Agent>, Vec<&Agent>) =
        agents.iter().partition(|agent| agent.is_active());

    let mut stats = RoundStats::default();
    let mut result = Vec::with_capacity(agents.len());

    for pair in active.chunks(2) {
        let resolved = resolve_meeting(pair.first().copied(), pair.get(1).copied());
        if pair.len() == 2 {
            stats.meetings += 1;
        }
        stats.transitions += pair
            .iter()
            .zip(&resolved)
            .filter(|(before, after)| before.category != after.category)
            .count();
        result.extend(resolved);
    }

    result.extend(inactive.into_iter().cloned());
    (result, stats)
}

/// Runs a single meetup round.
///
/// The output holds the same number of agents as the input, but pair results
/// come first and inactive agents last.
pub fn run_meetups(agents: &[Agent]) -> Vec<Agent> {
    meet_round(agents).0
}

/// Totals across the rounds of [`run_rounds_with_summary`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MeetupSummary {
    /// Rounds actually executed.
    pub rounds: usize,
    pub meetings: usize,
    /// Agents whose condition changed, summed over rounds.
    pub transitions: usize,
    /// The last round changed nothing, so further rounds would be no-ops.
    pub settled: bool,
}

/// Feeds each round's output into the next, up to `rounds` times.
pub fn run_rounds(agents: &[Agent], rounds: usize) -> Vec<Agent> {
    run_rounds_with_summary(agents, rounds).0
}

pub fn run_rounds_with_summary(agents: &[Agent], rounds: usize) -> (Vec<Agent>, MeetupSummary) {
    let mut current = agents.to_vec();
    let mut summary = MeetupSummary::default();

    for round in 1..=rounds {
        let (next, stats) = meet_round(&current);
        debug!(
            round,
            meetings = stats.meetings,
            transitions = stats.transitions,
            "Meetup round resolved"
        );

        summary.rounds += 1;
        summary.meetings += stats.meetings;
        summary.transitions += stats.transitions;
        current = next;

        // With no transitions the active agents keep their order and
        // conditions, so every later round would pair and resolve identically.
        if stats.transitions == 0 {
            summary.settled = true;
            break;
        }
    }

    (current, summary)
}
