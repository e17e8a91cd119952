//! Admissible cost-to-go estimate for a [`SearchNode`].
//!
//! ```text
//! h(node, eq, R) = min_{t ∈ R} d_eq(node, t)  +  MST(R)
//! ```
//!
//! * `d_eq` is the exact shortest-path cost from `(node, eq)` when the agent
//!   may equip or unequip along the way ([`Capability::Toggling`]).
//! * `MST(R)` is the minimum spanning tree over `R` with pair weights
//!   `min(d*(a, b), d*(b, a))`, where `d*` is the [`Capability::Unconstrained`]
//!   distance: the cheapest route between two targets whatever the agent
//!   carries when it gets there.
//!
//! Any complete tour visits some target first (at least `d_eq` to get there)
//! and then connects the rest; every leg between consecutive targets costs at
//! least the pair weight, and those legs form a spanning path, which weighs
//! at least the MST.  So `h` never overestimates.  It is `+∞` only when some
//! target really is unreachable.
//!
//! Distances are cached per `(node, eq)` and per target; MST weights are
//! cached per target set.  An engine is bound to the graph it was first used
//! with.

use rustc_hash::FxHashMap;

use rescue_core::{CostModel, NodeId};
use rescue_graph::{mst_weight, shortest_paths, Capability, FloodGraph, ShortestPaths};

use crate::{SearchNode, TargetSet};

/// Memoising evaluator of the rescue heuristic.
#[derive(Debug)]
pub struct HeuristicEngine {
    costs:       CostModel,
    from_state:  FxHashMap<(NodeId, bool), ShortestPaths>,
    from_target: FxHashMap<NodeId, ShortestPaths>,
    tree:        FxHashMap<TargetSet, f64>,
    evaluations: u64,
}

impl HeuristicEngine {
    pub fn new(costs: CostModel) -> Self {
        Self {
            costs,
            from_state:  FxHashMap::default(),
            from_target: FxHashMap::default(),
            tree:        FxHashMap::default(),
            evaluations: 0,
        }
    }

    pub fn costs(&self) -> &CostModel {
        &self.costs
    }

    /// Number of `estimate` calls answered so far.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// `h` for a search node.
    pub fn estimate_node(&mut self, graph: &FloodGraph, state: &SearchNode) -> f64 {
        self.estimate(graph, state.node, state.equipped, &state.remaining)
    }

    /// `h(node, equipped, remaining)`.  Zero when nothing remains.
    pub fn estimate(
        &mut self,
        graph:     &FloodGraph,
        node:      NodeId,
        equipped:  bool,
        remaining: &TargetSet,
    ) -> f64 {
        self.evaluations += 1;
        if remaining.is_empty() {
            return 0.0;
        }
        let first = self.nearest_target(graph, node, equipped, remaining);
        if first.is_infinite() {
            return first;
        }
        first + self.target_tree(graph, remaining)
    }

    /// Cheapest cost from `(node, equipped)` to any target in `remaining`.
    pub fn nearest_target(
        &mut self,
        graph:     &FloodGraph,
        node:      NodeId,
        equipped:  bool,
        remaining: &TargetSet,
    ) -> f64 {
        let costs = self.costs;
        let sp = self
            .from_state
            .entry((node, equipped))
            .or_insert_with(|| shortest_paths(graph, &costs, node, Capability::Toggling(equipped)));
        remaining.iter().map(|t| sp.dist(t)).fold(f64::INFINITY, f64::min)
    }

    /// Weight of the minimum spanning tree connecting `remaining`.
    pub fn target_tree(&mut self, graph: &FloodGraph, remaining: &TargetSet) -> f64 {
        if let Some(&w) = self.tree.get(remaining) {
            return w;
        }
        let costs = self.costs;
        for t in remaining.iter() {
            self.from_target
                .entry(t)
                .or_insert_with(|| shortest_paths(graph, &costs, t, Capability::Unconstrained));
        }
        let between = &self.from_target;
        let w = mst_weight(remaining.as_slice(), |a, b| {
            between[&a].dist(b).min(between[&b].dist(a))
        });
        self.tree.insert(remaining.clone(), w);
        w
    }
}
