//! Minimum spanning tree weight over a small complete graph.
//!
//! Used by the heuristic to bound the cost of connecting the remaining
//! targets to each other.  Kruskal over all `k·(k-1)/2` pairs; pairs are
//! sorted by `(weight, lower id, higher id)` so equal weights always resolve
//! the same way.

use rescue_core::{NodeId, OrderedCost};

/// Weight of a minimum spanning tree over `nodes`, with pair weights supplied
/// by `weight(a, b)` for `a < b`.
///
/// Returns `0.0` for fewer than two nodes.  If the nodes cannot be connected
/// with finite weights the result is `+∞`.
pub fn mst_weight<F>(nodes: &[NodeId], mut weight: F) -> f64
where
    F: FnMut(NodeId, NodeId) -> f64,
{
    let mut sorted = nodes.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    let k = sorted.len();
    if k < 2 {
        return 0.0;
    }

    let mut pairs: Vec<(OrderedCost, usize, usize)> = Vec::with_capacity(k * (k - 1) / 2);
    for i in 0..k {
        for j in (i + 1)..k {
            pairs.push((OrderedCost(weight(sorted[i], sorted[j])), i, j));
        }
    }
    // Indices follow id order, so this is (weight, lower id, higher id).
    pairs.sort_unstable();

    let mut parent: Vec<usize> = (0..k).collect();
    let mut total = 0.0;
    let mut joined = 0;
    for (OrderedCost(w), i, j) in pairs {
        let (ri, rj) = (find(&mut parent, i), find(&mut parent, j));
        if ri == rj {
            continue;
        }
        parent[ri.max(rj)] = ri.min(rj);
        total += w;
        joined += 1;
        if joined == k - 1 {
            break;
        }
    }
    total
}

fn find(parent: &mut [usize], mut x: usize) -> usize {
    while parent[x] != x {
        parent[x] = parent[parent[x]];
        x = parent[x];
    }
    x
}
