// telegraph-meetup/src/lib.rs

/*!
# Telegraph Meetup

A small discrete-event simulation of agents whose health condition changes
when they meet.

## Key Components:
- **Condition:** Closed, severity-ordered set of health states.
- **Agent:** Immutable (name, condition) value.
- **Meetings:** Pairwise rules driven by the presence of a `CURE`.
- **Rounds:** Repeated meetups until a round budget or a fixed point is hit.
- **Scenario:** YAML-loadable agent lists, including the reference scenario.
*/

pub mod agent;
pub mod census;
pub mod condition;
pub mod meeting;
pub mod scenario;

pub use agent::Agent;
pub use census::Census;
pub use condition::Condition;
pub use meeting::{
    resolve_meeting, run_meetups, run_rounds, run_rounds_with_summary, MeetupSummary,
};
pub use scenario::{Scenario, ScenarioError};
