//! Real-time A* with a bounded lookahead and learned state values.
//!
//! Each round:
//!
//! 1. The current state is expanded (one expansion) and its successors seed
//!    a local A* frontier, each tagged with the first action leading to it.
//! 2. Expansion continues until `lookahead` expansions have been made in
//!    total, a goal is popped, or the frontier empties.  Frontier states are
//!    valued at `g + max(h, learned)`.
//! 3. Every first action is scored by the best `f` of the open states in its
//!    subtree (or of the popped goal).  The lowest score wins; ties go to the
//!    earlier action.
//! 4. The departed state learns the second-best score (the best one when it
//!    has a single action), never lowering an earlier value.
//!
//! Exactly one action is committed per round.  With `lookahead = 1` this is
//! one-step LRTA*.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use rescue_core::OrderedCost;
use rescue_graph::FloodGraph;

use crate::{successors, HeuristicEngine, Plan, PlanError, PlanResult, SearchNode};

#[derive(Debug, Clone)]
pub struct RtaPlanner {
    lookahead: u64,
    learned:   FxHashMap<SearchNode, f64>,
}

impl RtaPlanner {
    /// `lookahead` is clamped to at least one expansion.
    pub fn new(lookahead: u64) -> Self {
        Self { lookahead: lookahead.max(1), learned: FxHashMap::default() }
    }

    pub fn lookahead(&self) -> u64 {
        self.lookahead
    }

    /// The value learned for `state`, if it was ever departed from.
    pub fn learned_value(&self, state: &SearchNode) -> Option<f64> {
        self.learned.get(state).copied()
    }

    pub fn learned_len(&self) -> usize {
        self.learned.len()
    }

    fn value(&self, graph: &FloodGraph, engine: &mut HeuristicEngine, state: &SearchNode) -> f64 {
        let h = engine.estimate_node(graph, state);
        match self.learned.get(state) {
            Some(&l) => h.max(l),
            None => h,
        }
    }

    /// Run one lookahead round from `start` and commit a single action.
    pub fn plan(
        &mut self,
        graph:  &FloodGraph,
        engine: &mut HeuristicEngine,
        start:  &SearchNode,
    ) -> PlanResult<Plan> {
        let costs = *engine.costs();
        let children = successors(graph, &costs, start);
        let mut expansions = 1u64;

        // (node, g, index of the first action)
        let mut arena: Vec<(SearchNode, f64, usize)> = Vec::new();
        let mut heap: BinaryHeap<Reverse<(OrderedCost, OrderedCost, u64, usize)>> = BinaryHeap::new();
        let mut closed: FxHashSet<SearchNode> = FxHashSet::default();
        closed.insert(start.clone());
        let mut seq = 0u64;

        for (first, child) in children.iter().enumerate() {
            let h = self.value(graph, engine, &child.node);
            if h.is_infinite() {
                continue;
            }
            arena.push((child.node.clone(), child.cost, first));
            heap.push(Reverse((OrderedCost(child.cost + h), OrderedCost(h), seq, arena.len() - 1)));
            seq += 1;
        }

        let mut score = vec![f64::INFINITY; children.len()];
        let mut goal_first = None;

        while expansions < self.lookahead {
            let Some(Reverse((OrderedCost(f), _, _, idx))) = heap.pop() else {
                break;
            };
            let (node, g, first) = arena[idx].clone();
            if !closed.insert(node.clone()) {
                continue;
            }
            expansions += 1;
            if node.is_goal() {
                score[first] = score[first].min(f);
                goal_first = Some(first);
                break;
            }
            for succ in successors(graph, &costs, &node) {
                if closed.contains(&succ.node) {
                    continue;
                }
                let h = self.value(graph, engine, &succ.node);
                if h.is_infinite() {
                    continue;
                }
                let ng = g + succ.cost;
                arena.push((succ.node, ng, first));
                heap.push(Reverse((OrderedCost(ng + h), OrderedCost(h), seq, arena.len() - 1)));
                seq += 1;
            }
        }

        for Reverse((OrderedCost(f), _, _, idx)) in heap.into_vec() {
            let (node, _, first) = &arena[idx];
            if !closed.contains(node) {
                score[*first] = score[*first].min(f);
            }
        }

        let chosen = match goal_first {
            Some(first) => first,
            None => {
                let mut chosen = None;
                for (i, &s) in score.iter().enumerate() {
                    if s.is_finite() && chosen.is_none_or(|c: usize| s < score[c]) {
                        chosen = Some(i);
                    }
                }
                chosen.ok_or(PlanError::TargetUnreachable { expansions })?
            }
        };

        let best = score[chosen];
        let second = score
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != chosen)
            .map(|(_, &s)| s)
            .fold(f64::INFINITY, f64::min);
        let learned = if second.is_finite() { second } else { best };
        let slot = self.learned.entry(start.clone()).or_insert(learned);
        *slot = slot.max(learned);

        tracing::trace!(
            node = %start.node,
            expansions,
            best,
            learned = *slot,
            "rta round"
        );

        let action = children[chosen].action;
        Ok(Plan { actions: vec![action], cost: children[chosen].cost, expansions })
    }
}
