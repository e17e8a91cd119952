//! Shortest paths over the equip-state product graph.
//!
//! # State space
//!
//! Each node exists twice: once without the kit and once with it.  Arc
//! `u → v` connects `(u, eq)` to `(v, eq)` when [`CostModel::edge_cost`]
//! allows it; when toggling is permitted, `(u, false) ↔ (u, true)` are joined
//! by arcs costing `Q` and `U`.
//!
//! | [`Capability`]       | Seeds                  | Toggle arcs |
//! |----------------------|------------------------|-------------|
//! | `Fixed(eq)`          | `(source, eq)`         | no          |
//! | `Toggling(eq)`       | `(source, eq)`         | yes         |
//! | `Unconstrained`      | both layers at 0       | yes         |
//!
//! `Fixed` is the plain "current capability only" Dijkstra.  `Toggling` is
//! the exact single-source cost for an agent that may change equipment on the
//! way.  `Unconstrained` is a lower bound on any route leaving `source`
//! whatever the agent happens to carry there.
//!
//! # Determinism
//!
//! The heap is keyed by `(cost, insertion sequence)` and relaxation is strict,
//! so among equal-cost paths the first one discovered wins.  Arcs are scanned
//! in insertion order and toggles after moves.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rescue_core::{CostModel, EdgeId, NodeId, OrderedCost};

use crate::network::FloodGraph;

// ── Capability ────────────────────────────────────────────────────────────────

/// Which equip states a shortest-path query may use.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Capability {
    /// Stay in the given equip state for the whole path.
    Fixed(bool),
    /// Start in the given equip state; toggling costs `Q` / `U`.
    Toggling(bool),
    /// Start in either state for free; toggling costs `Q` / `U`.
    Unconstrained,
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// One step of a [`Route`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Leg {
    Traverse(EdgeId),
    Equip,
    Unequip,
}

/// The result of a routing query: ordered legs and their total cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub legs: Vec<Leg>,
    pub cost: f64,
}

impl Route {
    /// `true` if the source already is the destination.
    pub fn is_trivial(&self) -> bool {
        self.legs.is_empty()
    }
}

// ── ShortestPaths ─────────────────────────────────────────────────────────────

/// Single-source distances to every `(node, equipped)` state.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: NodeId,
    /// Indexed by `state(node, equipped)`.  `+∞` for unreachable states.
    dist:   Vec<f64>,
    /// Predecessor state and the leg that reached it.
    prev:   Vec<Option<(usize, Leg)>>,
}

#[inline]
fn state(node: NodeId, equipped: bool) -> usize {
    node.index() * 2 + equipped as usize
}

#[inline]
fn node_of(state: usize) -> NodeId {
    NodeId((state / 2) as u32)
}

impl ShortestPaths {
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Cheapest cost to reach `node` in any equip state.
    #[inline]
    pub fn dist(&self, node: NodeId) -> f64 {
        let s = state(node, false);
        self.dist[s].min(self.dist[s + 1])
    }

    /// Cheapest cost to reach `node` holding exactly the given equip state.
    #[inline]
    pub fn dist_in(&self, node: NodeId, equipped: bool) -> f64 {
        self.dist[state(node, equipped)]
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.dist(node).is_finite()
    }

    /// Reconstruct the cheapest route to `node`.  Returns `None` if `node` is
    /// unreachable.  When both layers tie, the unequipped arrival wins.
    pub fn route_to(&self, node: NodeId) -> Option<Route> {
        let dry = state(node, false);
        let end = if self.dist[dry] <= self.dist[dry + 1] { dry } else { dry + 1 };
        let cost = self.dist[end];
        if !cost.is_finite() {
            return None;
        }
        let mut legs = Vec::new();
        let mut cur = end;
        while let Some((prev, leg)) = self.prev[cur] {
            legs.push(leg);
            cur = prev;
        }
        legs.reverse();
        Some(Route { legs, cost })
    }
}

/// Run Dijkstra from `source` over the product graph restricted by `capability`.
pub fn shortest_paths(
    graph:      &FloodGraph,
    costs:      &CostModel,
    source:     NodeId,
    capability: Capability,
) -> ShortestPaths {
    let n = graph.node_count() * 2;
    let mut dist = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<(usize, Leg)>> = vec![None; n];

    let toggles = !matches!(capability, Capability::Fixed(_));
    let seeds: &[bool] = match capability {
        Capability::Fixed(false) | Capability::Toggling(false) => &[false],
        Capability::Fixed(true) | Capability::Toggling(true) => &[true],
        Capability::Unconstrained => &[false, true],
    };

    // Min-heap on (cost, seq).  `seq` makes equal-cost pops FIFO.
    let mut heap: BinaryHeap<Reverse<(OrderedCost, u64, usize)>> = BinaryHeap::new();
    let mut seq = 0u64;
    for &eq in seeds {
        let s = state(source, eq);
        dist[s] = 0.0;
        heap.push(Reverse((OrderedCost(0.0), seq, s)));
        seq += 1;
    }

    while let Some(Reverse((OrderedCost(d), _, s))) = heap.pop() {
        // Skip stale heap entries.
        if d > dist[s] {
            continue;
        }
        let node = node_of(s);
        let equipped = s % 2 == 1;

        for edge in graph.out_edges(node) {
            let Some(c) = graph.traversal_cost(edge, equipped, costs) else {
                continue;
            };
            let next = state(graph.edge_to[edge.index()], equipped);
            let nd = d + c;
            if nd < dist[next] {
                dist[next] = nd;
                prev[next] = Some((s, Leg::Traverse(edge)));
                heap.push(Reverse((OrderedCost(nd), seq, next)));
                seq += 1;
            }
        }

        if toggles {
            let next = state(node, !equipped);
            let nd = d + costs.toggle_cost(equipped);
            if nd < dist[next] {
                dist[next] = nd;
                let leg = if equipped { Leg::Unequip } else { Leg::Equip };
                prev[next] = Some((s, leg));
                heap.push(Reverse((OrderedCost(nd), seq, next)));
                seq += 1;
            }
        }
    }

    ShortestPaths { source, dist, prev }
}
