//! Final results of a run.

use rescue_core::{AgentId, NodeId, SimTime};
use rescue_search::StrategyKind;

use crate::AgentStatus;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentOutcome {
    pub agent:           AgentId,
    pub strategy:        StrategyKind,
    pub status:          AgentStatus,
    pub path_cost:       f64,
    pub world_time:      SimTime,
    pub expansions:      u64,
    pub turns:           u64,
    pub targets_reached: Vec<NodeId>,
    /// People at the targets in `targets_reached`.
    pub people_saved:    u32,
}

/// Points per person saved in [`AgentOutcome::score`].
pub const PERSON_SCORE: f64 = 1000.0;

impl AgentOutcome {
    /// `people_saved * 1000 - world_time`.
    pub fn score(&self) -> f64 {
        f64::from(self.people_saved) * PERSON_SCORE - self.world_time.secs()
    }
}

/// What [`Sim::run`][crate::Sim::run] returns.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    /// One entry per agent, in `AgentId` order.
    pub agents:    Vec<AgentOutcome>,
    /// Targets nobody reached.
    pub unclaimed: Vec<NodeId>,
    /// Turns taken by all agents together.
    pub turns:     u64,
}

impl Outcome {
    pub fn all_finished(&self) -> bool {
        self.agents.iter().all(|a| a.status == AgentStatus::Finished)
    }

    /// The agent that saved the most people, whatever its final status.
    /// Equal counts go to the lower world time, then to the lower `AgentId`.
    /// `None` when nobody saved anyone.
    pub fn winner(&self) -> Option<&AgentOutcome> {
        self.agents
            .iter()
            .filter(|a| a.people_saved > 0)
            .min_by(|a, b| {
                b.people_saved
                    .cmp(&a.people_saved)
                    .then(a.world_time.cmp(&b.world_time))
                    .then(a.agent.cmp(&b.agent))
            })
    }

    /// People saved by all agents together.
    pub fn people_saved(&self) -> u32 {
        self.agents.iter().map(|a| a.people_saved).sum()
    }

    pub fn agent(&self, id: AgentId) -> Option<&AgentOutcome> {
        self.agents.get(id.index())
    }
}
