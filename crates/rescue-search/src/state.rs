//! Search state and successor generation.

use rescue_core::{CostModel, NodeId};
use rescue_graph::FloodGraph;

use crate::Action;

// ── TargetSet ─────────────────────────────────────────────────────────────────

/// An ordered set of target nodes.
///
/// Stored as a sorted, deduplicated `Vec` so that equal sets hash and compare
/// equal no matter how they were built.  Target counts are small, so the
/// linear `remove` is fine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetSet(Vec<NodeId>);

impl TargetSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        self.0.binary_search(&node).is_ok()
    }

    /// Insert `node`; returns `false` if it was already present.
    pub fn insert(&mut self, node: NodeId) -> bool {
        match self.0.binary_search(&node) {
            Ok(_) => false,
            Err(pos) => {
                self.0.insert(pos, node);
                true
            }
        }
    }

    /// Remove `node`; returns `false` if it was not present.
    pub fn remove(&mut self, node: NodeId) -> bool {
        match self.0.binary_search(&node) {
            Ok(pos) => {
                self.0.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// `true` if every target in `self` is also in `other`.
    pub fn is_subset(&self, other: &TargetSet) -> bool {
        self.0.iter().all(|&n| other.contains(n))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.0
    }
}

impl FromIterator<NodeId> for TargetSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        let mut v: Vec<NodeId> = iter.into_iter().collect();
        v.sort_unstable();
        v.dedup();
        TargetSet(v)
    }
}

// ── SearchNode ────────────────────────────────────────────────────────────────

/// `(position, equipped, remaining targets)` — the full planning state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SearchNode {
    pub node:      NodeId,
    pub equipped:  bool,
    pub remaining: TargetSet,
}

impl SearchNode {
    pub fn new(node: NodeId, equipped: bool, remaining: TargetSet) -> Self {
        Self { node, equipped, remaining }
    }

    /// No targets left.
    #[inline]
    pub fn is_goal(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// A legal action out of a [`SearchNode`], its cost, and the resulting state.
#[derive(Clone, Debug, PartialEq)]
pub struct Successor {
    pub action: Action,
    pub cost:   f64,
    pub node:   SearchNode,
}

/// All legal successors of `state`.
///
/// Order is fixed: moves in arc insertion order, then `Equip` (if not
/// equipped) or `Unequip` (if equipped).  Arriving at a target removes it
/// from the remaining set.
pub fn successors(graph: &FloodGraph, costs: &CostModel, state: &SearchNode) -> Vec<Successor> {
    let mut out = Vec::with_capacity(graph.out_degree(state.node) + 1);

    for edge in graph.out_edges(state.node) {
        let action = Action::Move { edge, to: graph.edge_to[edge.index()] };
        let Ok(t) = action.apply(graph, costs, state.node, state.equipped) else {
            continue;
        };
        let mut remaining = state.remaining.clone();
        remaining.remove(t.to);
        out.push(Successor {
            action,
            cost: t.cost,
            node: SearchNode::new(t.to, t.equipped, remaining),
        });
    }

    let toggle = if state.equipped { Action::Unequip } else { Action::Equip };
    if let Ok(t) = toggle.apply(graph, costs, state.node, state.equipped) {
        out.push(Successor {
            action: toggle,
            cost:   t.cost,
            node:   SearchNode::new(t.to, t.equipped, state.remaining.clone()),
        });
    }

    out
}
