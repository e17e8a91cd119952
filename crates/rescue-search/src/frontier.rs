//! Best-first search over [`SearchNode`]s.
//!
//! One routine serves two orderings:
//!
//! * [`Priority::CostPlusHeuristic`] — A*.  Keyed on `(g + h, h, seq)`, goal
//!   tested when popped, nodes re-opened when a cheaper `g` turns up, so the
//!   returned plan is optimal whenever `h` is admissible.
//! * [`Priority::Heuristic`] — greedy best-first.  Keyed on `(h, seq)`; each
//!   state is queued at most once.
//!
//! `seq` is an insertion counter, so equal keys pop in generation order and
//! results are reproducible.  States with `h = +∞` are never queued.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use rescue_core::OrderedCost;
use rescue_graph::FloodGraph;

use crate::{successors, Action, HeuristicEngine, PlanError, PlanResult, Plan, SearchNode};

/// Queue ordering for [`best_first`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Priority {
    CostPlusHeuristic,
    Heuristic,
}

struct Record {
    node:   SearchNode,
    g:      f64,
    parent: Option<(usize, Action)>,
}

type Entry = Reverse<(OrderedCost, OrderedCost, u64, usize)>;

/// Search from `start` until a goal is popped, the frontier empties, or a
/// live state comes up after `limit` expansions have already been made.
/// `Some(0)` fails before expanding anything.
///
/// An expansion is one pop of a live state followed by generating its
/// successors.  The returned [`Plan`] holds the whole action sequence from
/// `start` to the goal.
pub fn best_first(
    graph:    &FloodGraph,
    engine:   &mut HeuristicEngine,
    start:    &SearchNode,
    priority: Priority,
    limit:    Option<u64>,
) -> PlanResult<Plan> {
    let costs = *engine.costs();
    let mut arena: Vec<Record> = Vec::new();
    let mut heap: BinaryHeap<Entry> = BinaryHeap::new();
    let mut best_g: FxHashMap<SearchNode, f64> = FxHashMap::default();
    let mut seen: FxHashSet<SearchNode> = FxHashSet::default();
    let mut seq = 0u64;
    let mut expansions = 0u64;

    let h0 = engine.estimate_node(graph, start);
    if h0.is_infinite() {
        return Err(PlanError::TargetUnreachable { expansions });
    }
    arena.push(Record { node: start.clone(), g: 0.0, parent: None });
    heap.push(Reverse((key(priority, 0.0, h0), OrderedCost(h0), seq, 0)));
    best_g.insert(start.clone(), 0.0);
    seen.insert(start.clone());
    seq += 1;

    while let Some(Reverse((_, _, _, idx))) = heap.pop() {
        let g = arena[idx].g;
        if priority == Priority::CostPlusHeuristic
            && best_g.get(&arena[idx].node).is_some_and(|&best| g > best)
        {
            continue;
        }

        if let Some(limit) = limit {
            if expansions >= limit {
                return Err(PlanError::PlanningExhausted { limit, expansions });
            }
        }
        expansions += 1;
        if arena[idx].node.is_goal() {
            return Ok(reconstruct(&arena, idx, expansions));
        }

        for succ in successors(graph, &costs, &arena[idx].node) {
            let ng = g + succ.cost;
            match priority {
                Priority::CostPlusHeuristic => {
                    if best_g.get(&succ.node).is_some_and(|&best| ng >= best) {
                        continue;
                    }
                }
                Priority::Heuristic => {
                    if seen.contains(&succ.node) {
                        continue;
                    }
                }
            }
            let h = engine.estimate_node(graph, &succ.node);
            if h.is_infinite() {
                continue;
            }
            if priority == Priority::CostPlusHeuristic {
                best_g.insert(succ.node.clone(), ng);
            } else {
                seen.insert(succ.node.clone());
            }
            let child = arena.len();
            arena.push(Record { node: succ.node, g: ng, parent: Some((idx, succ.action)) });
            heap.push(Reverse((key(priority, ng, h), OrderedCost(h), seq, child)));
            seq += 1;
        }
    }

    Err(PlanError::TargetUnreachable { expansions })
}

#[inline]
fn key(priority: Priority, g: f64, h: f64) -> OrderedCost {
    match priority {
        Priority::CostPlusHeuristic => OrderedCost(g + h),
        Priority::Heuristic => OrderedCost(h),
    }
}

fn reconstruct(arena: &[Record], goal: usize, expansions: u64) -> Plan {
    let mut actions = Vec::new();
    let mut cur = goal;
    while let Some((parent, action)) = arena[cur].parent {
        actions.push(action);
        cur = parent;
    }
    actions.reverse();
    Plan { actions, cost: arena[goal].g, expansions }
}
