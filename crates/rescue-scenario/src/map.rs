//! ASCII flood-map loader.
//!
//! # Format
//!
//! One directive per line; blank lines and everything after `;` are ignored.
//!
//! ```text
//! #N 4            ; number of vertices, numbered 1..=N
//! #Q 2            ; equip cost
//! #U 1            ; unequip cost
//! #P 3            ; flood penalty multiplier
//! #V3 P2          ; vertex 3 holds 2 people  → a target
//! #V4 P1 P1       ; counts add up
//! #E1 1 2 W1      ; road 1 between vertices 1 and 2, weight 1
//! #E2 2 3 W1 F    ; flooded road
//! ```
//!
//! Vertex `k` becomes `NodeId(k - 1)` with label `V<k>`.  Every vertex with
//! a positive person count is a target.  Roads are undirected.  Kit markers
//! (`K`) and unknown tokens are skipped with a warning; equipping is legal
//! everywhere in this model.  The map carries no per-expansion time; that
//! comes from the caller's `SimConfig`.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use rescue_core::{CostModel, NodeId, SimConfig};
use rescue_graph::{FloodGraph, FloodGraphBuilder};

use crate::{ScenarioError, ScenarioResult};

/// Everything a map file describes.
#[derive(Debug, Clone)]
pub struct MapData {
    pub graph:   FloodGraph,
    pub costs:   CostModel,
    /// Vertices with people, ascending.
    pub targets: Vec<NodeId>,
    /// People per target vertex.
    pub people:  BTreeMap<NodeId, u32>,
}

impl MapData {
    /// `base` with the map's Q / U / P filled in.
    pub fn sim_config(&self, base: SimConfig) -> SimConfig {
        SimConfig { costs: self.costs, ..base }
    }

    pub fn total_people(&self) -> u32 {
        self.people.values().sum()
    }
}

/// Largest `#N` accepted.  Vertices are allocated up front.
pub const MAX_VERTICES: u32 = 1_000_000;

struct RawRoad {
    line:    usize,
    u:       u32,
    v:       u32,
    weight:  f64,
    flooded: bool,
}

// ── Public API ────────────────────────────────────────────────────────────────

pub fn load_map_file(path: &Path) -> ScenarioResult<MapData> {
    let file = std::fs::File::open(path)?;
    load_map_reader(file)
}

/// Like [`load_map_file`] but accepts any `Read` source.
pub fn load_map_reader<R: Read>(mut reader: R) -> ScenarioResult<MapData> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_map(&text)
}

pub fn parse_map(text: &str) -> ScenarioResult<MapData> {
    let mut n: Option<(usize, u32)> = None;
    let mut q: Option<f64> = None;
    let mut u: Option<f64> = None;
    let mut p: Option<f64> = None;
    let mut people: BTreeMap<u32, u32> = BTreeMap::new();
    let mut vertex_lines: Vec<(usize, u32)> = Vec::new();
    let mut roads: Vec<RawRoad> = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let content = raw.split(';').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }

        let mut tokens = content.split_whitespace();
        let head = tokens.next().unwrap_or("");
        let directive = head.get(..2).unwrap_or(head);
        let attached = head.get(2..).unwrap_or("");

        match directive {
            "#N" => n = Some((line, parse_num(line, "#N", global_arg(attached, &mut tokens))?)),
            "#Q" => q = Some(parse_num(line, "#Q", global_arg(attached, &mut tokens))?),
            "#U" => u = Some(parse_num(line, "#U", global_arg(attached, &mut tokens))?),
            "#P" => p = Some(parse_num(line, "#P", global_arg(attached, &mut tokens))?),
            "#V" => {
                let id_text = if attached.is_empty() { tokens.next() } else { Some(attached) };
                let vid: u32 = parse_num(line, "vertex id", id_text)?;
                vertex_lines.push((line, vid));
                for tok in tokens {
                    if let Some(count) = tok.strip_prefix('P') {
                        let count: u32 = parse_num(line, "person count", Some(count))?;
                        if count > 0 {
                            *people.entry(vid).or_default() += count;
                        }
                    } else if tok == "K" {
                        tracing::warn!(line, vertex = vid, "kit marker ignored");
                    } else {
                        tracing::warn!(line, vertex = vid, token = tok, "unknown vertex token ignored");
                    }
                }
            }
            "#E" => {
                let from: u32 = parse_num(line, "edge endpoint", tokens.next())?;
                let to: u32 = parse_num(line, "edge endpoint", tokens.next())?;
                let weight_tok = tokens.next().ok_or_else(|| parse_err(line, "edge is missing its W<weight>"))?;
                let weight_text = weight_tok
                    .strip_prefix('W')
                    .ok_or_else(|| parse_err(line, format!("expected W<weight>, found {weight_tok:?}")))?;
                let weight: f64 = parse_num(line, "edge weight", Some(weight_text))?;
                let mut flooded = false;
                for tok in tokens {
                    if tok == "F" {
                        flooded = true;
                    } else {
                        tracing::warn!(line, token = tok, "unknown edge token ignored");
                    }
                }
                roads.push(RawRoad { line, u: from, v: to, weight, flooded });
            }
            other => {
                tracing::warn!(line, directive = other, "unknown directive ignored");
            }
        }
    }

    let (n_line, n) = n.ok_or(ScenarioError::MissingGlobal("#N"))?;
    if n > MAX_VERTICES {
        return Err(parse_err(n_line, format!("#N {n} exceeds the limit of {MAX_VERTICES} vertices")));
    }
    let costs = CostModel::new(
        q.ok_or(ScenarioError::MissingGlobal("#Q"))?,
        u.ok_or(ScenarioError::MissingGlobal("#U"))?,
        p.ok_or(ScenarioError::MissingGlobal("#P"))?,
    );

    let in_range = |vid: u32| (1..=n).contains(&vid);
    for &(line, vid) in &vertex_lines {
        if !in_range(vid) {
            return Err(parse_err(line, format!("vertex {vid} outside 1..={n}")));
        }
    }

    let mut builder = FloodGraphBuilder::with_capacity(n as usize, roads.len() * 2);
    for k in 1..=n {
        builder.add_node(format!("V{k}"));
    }
    for road in &roads {
        for end in [road.u, road.v] {
            if !in_range(end) {
                return Err(parse_err(road.line, format!("edge endpoint {end} outside 1..={n}")));
            }
        }
        builder.add_road(NodeId(road.u - 1), NodeId(road.v - 1), road.weight, road.flooded);
    }
    let graph = builder.build()?;

    let people: BTreeMap<NodeId, u32> =
        people.into_iter().map(|(vid, count)| (NodeId(vid - 1), count)).collect();
    let targets: Vec<NodeId> = people.keys().copied().collect();

    tracing::debug!(
        vertices = n,
        roads = roads.len(),
        targets = targets.len(),
        "map loaded"
    );

    Ok(MapData { graph, costs, targets, people })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `#Q 2` and `#Q2` both mean Q = 2.
fn global_arg<'a>(attached: &'a str, tokens: &mut impl Iterator<Item = &'a str>) -> Option<&'a str> {
    if attached.is_empty() { tokens.next() } else { Some(attached) }
}

fn parse_num<T: std::str::FromStr>(line: usize, what: &str, text: Option<&str>) -> ScenarioResult<T> {
    let text = text.ok_or_else(|| parse_err(line, format!("missing {what}")))?;
    text.parse::<T>()
        .map_err(|_| parse_err(line, format!("invalid {what} {text:?}")))
}

fn parse_err(line: usize, message: impl Into<String>) -> ScenarioError {
    ScenarioError::Parse { line, message: message.into() }
}
