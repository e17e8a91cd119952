//! CSV agent roster loader.
//!
//! # CSV format
//!
//! One row per automated agent.  `limit` only matters for `astar`,
//! `lookahead` only for `rta`; either may be left empty.
//!
//! ```csv
//! agent,strategy,start,limit,lookahead
//! 0,astar,V1,10000,
//! 1,rta,V4,,5
//! 2,thief,3,,
//! ```
//!
//! **`start`** is a vertex label (`V3`) or a 1-based vertex number (`3`).
//! Agents are returned in ascending `agent` order; ids must be unique.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rescue_core::NodeId;
use rescue_graph::FloodGraph;
use rescue_search::StrategyKind;
use rescue_sim::AgentSpec;

use crate::{ScenarioError, ScenarioResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RosterRecord {
    agent:     u32,
    strategy:  String,
    start:     String,
    limit:     Option<u64>,
    lookahead: Option<u64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

pub fn load_roster_csv(path: &Path, graph: &FloodGraph) -> ScenarioResult<Vec<AgentSpec>> {
    let file = std::fs::File::open(path)?;
    load_roster_reader(file, graph)
}

/// Like [`load_roster_csv`] but accepts any `Read` source.
pub fn load_roster_reader<R: Read>(reader: R, graph: &FloodGraph) -> ScenarioResult<Vec<AgentSpec>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut rows: Vec<(u32, AgentSpec)> = Vec::new();

    for result in csv_reader.deserialize::<RosterRecord>() {
        let row = result.map_err(|e| ScenarioError::Roster(e.to_string()))?;
        let strategy = StrategyKind::parse(&row.strategy, row.limit, row.lookahead).ok_or_else(|| {
            ScenarioError::Roster(format!(
                "agent {}: unknown strategy {:?} (expected stupid_greedy, greedy_search, astar, rta or thief)",
                row.agent, row.strategy
            ))
        })?;
        let start = resolve_vertex(graph, &row.start).ok_or_else(|| {
            ScenarioError::Roster(format!("agent {}: unknown start vertex {:?}", row.agent, row.start))
        })?;
        rows.push((row.agent, AgentSpec::new(strategy, start)));
    }

    rows.sort_by_key(|&(id, _)| id);
    if let Some(w) = rows.windows(2).find(|w| w[0].0 == w[1].0) {
        return Err(ScenarioError::Roster(format!("agent {} listed twice", w[0].0)));
    }
    Ok(rows.into_iter().map(|(_, spec)| spec).collect())
}

/// Resolve a vertex label (`V3`) or 1-based vertex number (`3`).
pub fn resolve_vertex(graph: &FloodGraph, text: &str) -> Option<NodeId> {
    let text = text.trim();
    if let Some(node) = graph.node_by_label(text) {
        return Some(node);
    }
    let k: u32 = text.parse().ok()?;
    let node = NodeId(k.checked_sub(1)?);
    graph.contains_node(node).then_some(node)
}
