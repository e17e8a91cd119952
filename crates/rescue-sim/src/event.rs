//! The event stream — the only observable output of a run.

use rescue_core::{AgentId, NodeId};
use rescue_search::IllegalAction;

use crate::StuckReason;

/// Something that happened to one agent.
///
/// Delivered to [`SimObserver::on_event`][crate::SimObserver::on_event]
/// together with the agent's world time after the event took effect.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "event", rename_all = "snake_case"))]
pub enum SimEvent {
    Moved { agent: AgentId, from: NodeId, to: NodeId, cost: f64 },
    Equipped { agent: AgentId },
    Unequipped { agent: AgentId },
    /// `people` is how many were waiting at `target`.
    TargetReached { agent: AgentId, target: NodeId, people: u32 },
    /// A planning call succeeded; `actions` were committed.
    PlanCommitted { agent: AgentId, expansions: u64, actions: usize },
    AgentFinished { agent: AgentId, total_cost: f64, total_time: f64 },
    /// `expansions` is what the failing call (if any) consumed.
    AgentStuck { agent: AgentId, reason: StuckReason, expansions: u64 },
    /// An externally chosen action was illegal and was not applied.
    ActionRejected { agent: AgentId, reason: IllegalAction },
}

impl SimEvent {
    pub fn agent(&self) -> AgentId {
        match *self {
            SimEvent::Moved { agent, .. }
            | SimEvent::Equipped { agent }
            | SimEvent::Unequipped { agent }
            | SimEvent::TargetReached { agent, .. }
            | SimEvent::PlanCommitted { agent, .. }
            | SimEvent::AgentFinished { agent, .. }
            | SimEvent::AgentStuck { agent, .. }
            | SimEvent::ActionRejected { agent, .. } => agent,
        }
    }

    /// Stable snake_case name, used as the `kind` column by writers.
    pub fn kind(&self) -> &'static str {
        match self {
            SimEvent::Moved { .. } => "moved",
            SimEvent::Equipped { .. } => "equipped",
            SimEvent::Unequipped { .. } => "unequipped",
            SimEvent::TargetReached { .. } => "target_reached",
            SimEvent::PlanCommitted { .. } => "plan_committed",
            SimEvent::AgentFinished { .. } => "agent_finished",
            SimEvent::AgentStuck { .. } => "agent_stuck",
            SimEvent::ActionRejected { .. } => "action_rejected",
        }
    }
}
