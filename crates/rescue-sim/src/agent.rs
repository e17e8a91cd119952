//! Per-agent runtime state.

use std::collections::VecDeque;
use std::fmt;

use rescue_core::{AgentId, NodeId, SimTime};
use rescue_search::{Action, PlanError, SearchNode, Strategy, StrategyKind, TargetSet};

// ── AgentSpec ─────────────────────────────────────────────────────────────────

/// One roster entry: which automated strategy, starting where.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSpec {
    pub strategy: StrategyKind,
    pub start:    NodeId,
}

impl AgentSpec {
    pub fn new(strategy: StrategyKind, start: NodeId) -> Self {
        Self { strategy, start }
    }
}

// ── Status ────────────────────────────────────────────────────────────────────

/// Why an agent stopped without finishing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StuckReason {
    /// A* hit its expansion limit.
    PlanningExhausted,
    /// No remaining target can be reached with any equip sequence.
    TargetUnreachable,
    /// The agent used up `max_turns_per_agent`.
    TurnLimit,
    /// An external action source gave up.
    Resigned,
}

impl StuckReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            StuckReason::PlanningExhausted => "planning_exhausted",
            StuckReason::TargetUnreachable => "target_unreachable",
            StuckReason::TurnLimit => "turn_limit",
            StuckReason::Resigned => "resigned",
        }
    }
}

impl From<&PlanError> for StuckReason {
    fn from(e: &PlanError) -> Self {
        match e {
            PlanError::PlanningExhausted { .. } => StuckReason::PlanningExhausted,
            PlanError::TargetUnreachable { .. } => StuckReason::TargetUnreachable,
            PlanError::Resigned => StuckReason::Resigned,
        }
    }
}

impl fmt::Display for StuckReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AgentStatus {
    #[default]
    Active,
    Finished,
    Stuck(StuckReason),
}

impl AgentStatus {
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, AgentStatus::Active)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentStatus::Active => f.write_str("active"),
            AgentStatus::Finished => f.write_str("finished"),
            AgentStatus::Stuck(r) => write!(f, "stuck:{r}"),
        }
    }
}

// ── AgentState ────────────────────────────────────────────────────────────────

/// Everything the runtime tracks for one agent.
///
/// `remaining` is the agent's own view of the targets: refreshed from the
/// pool whenever it plans, shrunk by its own arrivals in between.  World
/// time is derived, never accumulated, so it always equals
/// `path_cost + T × expansions` exactly.
#[derive(Debug)]
pub struct AgentState {
    pub id:              AgentId,
    pub strategy:        Strategy,
    pub position:        NodeId,
    pub equipped:        bool,
    pub remaining:       TargetSet,
    /// Sum of committed action costs.
    pub path_cost:       f64,
    /// Sum of expansions over all planning calls, failed ones included.
    pub expansions:      u64,
    /// Turns taken, rejected ones included.
    pub turns:           u64,
    pub targets_reached: Vec<NodeId>,
    /// People at the targets this agent claimed.
    pub people_saved:    u32,
    pub status:          AgentStatus,
    /// Actions committed but not yet applied.
    pub plan:            VecDeque<Action>,
}

impl AgentState {
    pub fn new(id: AgentId, strategy: Strategy, start: NodeId) -> Self {
        Self {
            id,
            strategy,
            position:        start,
            equipped:        false,
            remaining:       TargetSet::new(),
            path_cost:       0.0,
            expansions:      0,
            turns:           0,
            targets_reached: Vec::new(),
            people_saved:    0,
            status:          AgentStatus::Active,
            plan:            VecDeque::new(),
        }
    }

    /// `path_cost + expansion_time × expansions`.
    #[inline]
    pub fn world_time(&self, expansion_time: f64) -> SimTime {
        SimTime(self.path_cost + expansion_time * self.expansions as f64)
    }

    /// The planning state implied by the agent's position and view.
    pub fn search_node(&self) -> SearchNode {
        SearchNode::new(self.position, self.equipped, self.remaining.clone())
    }
}
