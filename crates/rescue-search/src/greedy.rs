//! The one-step greedy policy.

use rescue_graph::FloodGraph;

use crate::{successors, HeuristicEngine, Plan, PlanError, PlanResult, SearchNode};

/// Pick the successor minimising `step cost + h(successor)`.
///
/// Counts as exactly one expansion.  Ties keep the earliest successor in
/// generation order.  Fails with `TargetUnreachable` when every successor
/// scores `+∞`.
pub fn stupid_greedy_step(
    graph:  &FloodGraph,
    engine: &mut HeuristicEngine,
    start:  &SearchNode,
) -> PlanResult<Plan> {
    let costs = *engine.costs();
    let mut best: Option<(f64, Plan)> = None;

    for succ in successors(graph, &costs, start) {
        let score = succ.cost + engine.estimate_node(graph, &succ.node);
        if !score.is_finite() {
            continue;
        }
        if best.as_ref().is_none_or(|(b, _)| score < *b) {
            best = Some((score, Plan { actions: vec![succ.action], cost: succ.cost, expansions: 1 }));
        }
    }

    best.map(|(_, plan)| plan)
        .ok_or(PlanError::TargetUnreachable { expansions: 1 })
}
