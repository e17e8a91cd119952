//! `Strategy` — the closed set of ways an agent decides what to do.

use std::fmt;

use rescue_core::{AgentId, CostModel, SimTime};
use rescue_graph::FloodGraph;

use crate::{
    best_first, stupid_greedy_step, Action, ActionSource, HeuristicEngine, IllegalAction,
    PlanError, PlanResult, Priority, RtaPlanner, SearchNode, TargetSet,
};

/// Default expansion limit for `astar` when a roster leaves it blank.
pub const DEFAULT_ASTAR_LIMIT: u64 = 10_000;

/// Default lookahead for `rta` when a roster leaves it blank.
pub const DEFAULT_LOOKAHEAD: u64 = 10;

// ── Plan ──────────────────────────────────────────────────────────────────────

/// The outcome of a successful planning call.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    /// Actions to commit, in order.  Never empty.
    pub actions:    Vec<Action>,
    /// Sum of the action costs as the planner computed them.
    pub cost:       f64,
    /// Search nodes expanded by this call.
    pub expansions: u64,
}

// ── AgentView ─────────────────────────────────────────────────────────────────

/// Read-only snapshot handed to a strategy on the agent's turn.
///
/// `state.remaining` is the agent's own view of the targets, which may lag
/// the shared pool.
#[derive(Clone, Copy)]
pub struct AgentView<'a> {
    pub agent:      AgentId,
    pub graph:      &'a FloodGraph,
    pub costs:      &'a CostModel,
    pub state:      &'a SearchNode,
    pub world_time: SimTime,
}

// ── StrategyKind ──────────────────────────────────────────────────────────────

/// Strategy name plus its parameters; the data form of a [`Strategy`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum StrategyKind {
    StupidGreedy,
    GreedySearch,
    #[cfg_attr(feature = "serde", serde(rename = "astar"))]
    AStar { limit: u64 },
    Rta { lookahead: u64 },
    Thief,
    Human,
}

impl StrategyKind {
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::StupidGreedy => "stupid_greedy",
            StrategyKind::GreedySearch => "greedy_search",
            StrategyKind::AStar { .. } => "astar",
            StrategyKind::Rta { .. } => "rta",
            StrategyKind::Thief => "thief",
            StrategyKind::Human => "human",
        }
    }

    /// Parse a strategy name with optional parameters.  Missing parameters
    /// fall back to [`DEFAULT_ASTAR_LIMIT`] and [`DEFAULT_LOOKAHEAD`].
    /// `human` is not accepted: it needs an [`ActionSource`].
    pub fn parse(name: &str, limit: Option<u64>, lookahead: Option<u64>) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "stupid_greedy" => Some(StrategyKind::StupidGreedy),
            "greedy_search" | "greedy" => Some(StrategyKind::GreedySearch),
            "astar" | "a_star" => Some(StrategyKind::AStar {
                limit: limit.unwrap_or(DEFAULT_ASTAR_LIMIT),
            }),
            "rta" => Some(StrategyKind::Rta {
                lookahead: lookahead.unwrap_or(DEFAULT_LOOKAHEAD),
            }),
            "thief" => Some(StrategyKind::Thief),
            _ => None,
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::AStar { limit } => write!(f, "astar(limit={limit})"),
            StrategyKind::Rta { lookahead } => write!(f, "rta(L={lookahead})"),
            other => f.write_str(other.name()),
        }
    }
}

// ── Strategy ──────────────────────────────────────────────────────────────────

/// A per-agent decision procedure, with whatever state it keeps between
/// turns.
pub enum Strategy {
    /// One greedy step per turn.
    StupidGreedy,
    /// Greedy best-first to a goal; the whole plan is committed.
    GreedySearch,
    /// A* bounded by `limit` expansions; the whole plan is committed.
    AStar { limit: u64 },
    /// Bounded-lookahead real-time search; one action per round.
    Rta(RtaPlanner),
    /// Greedy best-first, abandoning its plan when another agent takes a
    /// target it was counting on.
    Thief,
    /// Actions supplied from outside.
    Human(Box<dyn ActionSource>),
}

impl Strategy {
    /// Build the automated strategy for `kind`.  Returns `None` for
    /// [`StrategyKind::Human`], which needs a source; use
    /// [`Strategy::human`].
    pub fn from_kind(kind: StrategyKind) -> Option<Self> {
        Some(match kind {
            StrategyKind::StupidGreedy => Strategy::StupidGreedy,
            StrategyKind::GreedySearch => Strategy::GreedySearch,
            StrategyKind::AStar { limit } => Strategy::AStar { limit },
            StrategyKind::Rta { lookahead } => Strategy::Rta(RtaPlanner::new(lookahead)),
            StrategyKind::Thief => Strategy::Thief,
            StrategyKind::Human => return None,
        })
    }

    pub fn human(source: impl ActionSource + 'static) -> Self {
        Strategy::Human(Box::new(source))
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::StupidGreedy => StrategyKind::StupidGreedy,
            Strategy::GreedySearch => StrategyKind::GreedySearch,
            Strategy::AStar { limit } => StrategyKind::AStar { limit: *limit },
            Strategy::Rta(p) => StrategyKind::Rta { lookahead: p.lookahead() },
            Strategy::Thief => StrategyKind::Thief,
            Strategy::Human(_) => StrategyKind::Human,
        }
    }

    /// `true` for strategies whose actions come from outside and must be
    /// checked before they are applied.
    pub fn is_external(&self) -> bool {
        matches!(self, Strategy::Human(_))
    }

    /// Decide what to do from `view.state`.
    pub fn plan(&mut self, view: &AgentView<'_>, engine: &mut HeuristicEngine) -> PlanResult<Plan> {
        let graph = view.graph;
        let start = view.state;
        let result = match self {
            Strategy::StupidGreedy => stupid_greedy_step(graph, engine, start),
            Strategy::GreedySearch | Strategy::Thief => {
                best_first(graph, engine, start, Priority::Heuristic, None)
            }
            Strategy::AStar { limit } => {
                best_first(graph, engine, start, Priority::CostPlusHeuristic, Some(*limit))
            }
            Strategy::Rta(planner) => planner.plan(graph, engine, start),
            Strategy::Human(source) => match source.next_action(view) {
                Some(action) => {
                    let cost = action
                        .apply(graph, view.costs, start.node, start.equipped)
                        .map_or(0.0, |t| t.cost);
                    Ok(Plan { actions: vec![action], cost, expansions: 0 })
                }
                None => Err(PlanError::Resigned),
            },
        };

        match &result {
            Ok(plan) => tracing::debug!(
                agent = %view.agent,
                strategy = self.kind().name(),
                actions = plan.actions.len(),
                expansions = plan.expansions,
                cost = plan.cost,
                "planned"
            ),
            Err(e) => tracing::debug!(
                agent = %view.agent,
                strategy = self.kind().name(),
                error = %e,
                "planning failed"
            ),
        }
        result
    }

    /// Whether a committed plan should be dropped before the next action.
    ///
    /// `view` is the agent's own target view; `pool` is what is really
    /// left.  Only the thief reacts: as soon as another agent has taken a
    /// target it still counts on, it replans.
    pub fn wants_replan(&self, view: &TargetSet, pool: &TargetSet) -> bool {
        match self {
            Strategy::Thief => !view.is_subset(pool),
            _ => false,
        }
    }

    /// Forward a rejection to an external source.
    pub fn on_rejected(&mut self, action: &Action, reason: &IllegalAction) {
        if let Strategy::Human(source) = self {
            source.on_rejected(action, reason);
        }
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Strategy({})", self.kind())
    }
}
