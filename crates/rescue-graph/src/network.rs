//! Flood-region graph representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing arcs.
//! Given a `NodeId n`, its outgoing arcs occupy the slice:
//!
//! ```text
//! edge_from[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All arc arrays (`edge_from`, `edge_to`, `edge_cost`, `edge_flooded`) are
//! indexed by `EdgeId`.  Within one source node, arcs keep the order in which
//! they were added to the builder; planners rely on that order for
//! deterministic tie-breaking.
//!
//! An undirected road is stored as two arcs with identical attributes.

use rustc_hash::FxHashMap;

use rescue_core::{CostModel, EdgeId, NodeId};

use crate::{GraphError, GraphResult};

// ── FloodGraph ────────────────────────────────────────────────────────────────

/// Directed graph in CSR format with per-arc base cost and flood flag.
///
/// All fields except the label index are `pub` for direct indexed access on
/// hot paths.  Do not construct directly; use [`FloodGraphBuilder`].
/// The graph is immutable once built.
#[derive(Debug, Clone)]
pub struct FloodGraph {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Stable human-readable identifier of each node.  Indexed by `NodeId`.
    pub node_labels: Vec<String>,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    /// CSR row pointer.  Outgoing arcs of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Arc data (indexed by EdgeId) ──────────────────────────────────────
    /// Source node of each arc.
    pub edge_from: Vec<NodeId>,

    /// Destination node of each arc.
    pub edge_to: Vec<NodeId>,

    /// Base traversal cost (positive, finite).
    pub edge_cost: Vec<f64>,

    /// `true` if the arc is flooded and needs the amphibious kit.
    pub edge_flooded: Vec<bool>,

    label_index: FxHashMap<String, NodeId>,
}

impl FloodGraph {
    /// Construct a graph with no nodes or arcs.
    pub fn empty() -> Self {
        FloodGraph {
            node_labels:    Vec::new(),
            node_out_start: vec![0],
            edge_from:      Vec::new(),
            edge_to:        Vec::new(),
            edge_cost:      Vec::new(),
            edge_flooded:   Vec::new(),
            label_index:    FxHashMap::default(),
        }
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_labels.is_empty()
    }

    #[inline]
    pub fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    #[inline]
    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        edge.index() < self.edge_count()
    }

    // ── Labels ────────────────────────────────────────────────────────────

    pub fn label(&self, node: NodeId) -> &str {
        &self.node_labels[node.index()]
    }

    pub fn node_by_label(&self, label: &str) -> Option<NodeId> {
        self.label_index.get(label).copied()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing arcs from `node`, in
    /// insertion order.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Out-degree of `node`.
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// First arc `from → to`, if any.
    pub fn edge_between(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        self.out_edges(from).find(|e| self.edge_to[e.index()] == to)
    }

    /// Effective cost of traversing `edge` under the given capability, or
    /// `None` if the traversal is illegal.
    #[inline]
    pub fn traversal_cost(&self, edge: EdgeId, equipped: bool, costs: &CostModel) -> Option<f64> {
        costs.edge_cost(
            self.edge_cost[edge.index()],
            self.edge_flooded[edge.index()],
            equipped,
        )
    }
}

// ── FloodGraphBuilder ─────────────────────────────────────────────────────────

/// Construct a [`FloodGraph`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts nodes and arcs in any order; `build()` validates them
/// (unknown endpoints, non-positive costs, conflicting duplicates) and lays
/// out the CSR arrays.
///
/// # Example
///
/// ```
/// use rescue_graph::FloodGraphBuilder;
///
/// let mut b = FloodGraphBuilder::new();
/// let a = b.add_node("A");
/// let c = b.add_node("C");
/// b.add_road(a, c, 2.0, true);
/// let g = b.build().unwrap();
/// assert_eq!(g.node_count(), 2);
/// assert_eq!(g.edge_count(), 2); // bidirectional
/// ```
#[derive(Default)]
pub struct FloodGraphBuilder {
    labels:    Vec<String>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from:    NodeId,
    to:      NodeId,
    cost:    f64,
    flooded: bool,
}

impl FloodGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of nodes and arcs.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            labels:    Vec::with_capacity(nodes),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, label: impl Into<String>) -> NodeId {
        let id = NodeId(self.labels.len() as u32);
        self.labels.push(label.into());
        id
    }

    /// Add a **directed** arc from `from` to `to`.
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId, cost: f64, flooded: bool) {
        self.raw_edges.push(RawEdge { from, to, cost, flooded });
    }

    /// Add arcs in **both directions** for an undirected road segment.
    pub fn add_road(&mut self, a: NodeId, b: NodeId, cost: f64, flooded: bool) {
        self.add_directed_edge(a, b, cost, flooded);
        self.add_directed_edge(b, a, cost, flooded);
    }

    pub fn node_count(&self) -> usize { self.labels.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Validate and consume the builder, producing a [`FloodGraph`].
    ///
    /// Identical duplicate arcs are collapsed into one; duplicates that
    /// disagree on cost or flood flag are rejected.
    pub fn build(self) -> GraphResult<FloodGraph> {
        let node_count = self.labels.len();

        let mut label_index = FxHashMap::default();
        for (i, label) in self.labels.iter().enumerate() {
            if label_index.insert(label.clone(), NodeId(i as u32)).is_some() {
                return Err(GraphError::DuplicateLabel(label.clone()));
            }
        }

        let mut seen: FxHashMap<(NodeId, NodeId), (f64, bool)> = FxHashMap::default();
        let mut raw = Vec::with_capacity(self.raw_edges.len());
        for e in self.raw_edges {
            if e.from.index() >= node_count || e.to.index() >= node_count {
                return Err(GraphError::UnknownNode { from: e.from, to: e.to });
            }
            if !e.cost.is_finite() || e.cost <= 0.0 {
                return Err(GraphError::InvalidCost { from: e.from, to: e.to, cost: e.cost });
            }
            match seen.get(&(e.from, e.to)) {
                Some(&(cost, flooded)) if cost == e.cost && flooded == e.flooded => continue,
                Some(_) => return Err(GraphError::ConflictingEdge { from: e.from, to: e.to }),
                None => {
                    seen.insert((e.from, e.to), (e.cost, e.flooded));
                }
            }
            raw.push(e);
        }

        // Stable sort: arcs of one node keep their insertion order.
        raw.sort_by_key(|e| e.from.0);

        let edge_from:    Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to:      Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_cost:    Vec<f64>    = raw.iter().map(|e| e.cost).collect();
        let edge_flooded: Vec<bool>   = raw.iter().map(|e| e.flooded).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, raw.len());

        Ok(FloodGraph {
            node_labels: self.labels,
            node_out_start,
            edge_from,
            edge_to,
            edge_cost,
            edge_flooded,
            label_index,
        })
    }
}
