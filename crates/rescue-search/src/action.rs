//! The three primitive actions and their legality rules.

use thiserror::Error;

use rescue_core::{CostModel, EdgeId, NodeId};
use rescue_graph::FloodGraph;

/// One primitive step of an agent.
///
/// `Move` names the arc explicitly; `to` is carried along so events and logs
/// don't need the graph to say where the agent went.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Move { edge: EdgeId, to: NodeId },
    Equip,
    Unequip,
}

/// Where an agent ends up after a legal action, and what it paid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transition {
    pub to:       NodeId,
    pub equipped: bool,
    pub cost:     f64,
}

/// Reasons an action cannot be applied in the current state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IllegalAction {
    #[error("{edge} does not leave {at}")]
    NoSuchEdge { at: NodeId, edge: EdgeId },

    #[error("{edge} leads to {actual}, not {claimed}")]
    WrongDestination { edge: EdgeId, claimed: NodeId, actual: NodeId },

    #[error("{edge} is flooded and the agent is not equipped")]
    Flooded { edge: EdgeId },

    #[error("agent is already equipped")]
    AlreadyEquipped,

    #[error("agent is not equipped")]
    NotEquipped,
}

impl Action {
    /// Build a `Move` along the first arc `from → to`, if one exists.
    pub fn move_to(graph: &FloodGraph, from: NodeId, to: NodeId) -> Option<Action> {
        graph.edge_between(from, to).map(|edge| Action::Move { edge, to })
    }

    pub fn is_move(&self) -> bool {
        matches!(self, Action::Move { .. })
    }

    /// Check the action against the agent's state and compute the result.
    pub fn apply(
        &self,
        graph:    &FloodGraph,
        costs:    &CostModel,
        at:       NodeId,
        equipped: bool,
    ) -> Result<Transition, IllegalAction> {
        match *self {
            Action::Move { edge, to } => {
                if !graph.contains_edge(edge) || graph.edge_from[edge.index()] != at {
                    return Err(IllegalAction::NoSuchEdge { at, edge });
                }
                let actual = graph.edge_to[edge.index()];
                if actual != to {
                    return Err(IllegalAction::WrongDestination { edge, claimed: to, actual });
                }
                let cost = graph
                    .traversal_cost(edge, equipped, costs)
                    .ok_or(IllegalAction::Flooded { edge })?;
                Ok(Transition { to, equipped, cost })
            }
            Action::Equip if equipped => Err(IllegalAction::AlreadyEquipped),
            Action::Equip => Ok(Transition { to: at, equipped: true, cost: costs.equip_cost }),
            Action::Unequip if !equipped => Err(IllegalAction::NotEquipped),
            Action::Unequip => Ok(Transition { to: at, equipped: false, cost: costs.unequip_cost }),
        }
    }
}
