//! Deterministic random graph construction.
//!
//! Builds small connected simple graphs: a spanning path first (so
//! connectivity never depends on the random draws), then uniform random
//! pairs until the edge set reaches the requested size.

use std::collections::BTreeSet;

use rand::Rng;
use tracing::debug;

use crate::types::Graph;

/// Inclusive node count bounds.
pub const MIN_NODES: i64 = 1;
pub const MAX_NODES: i64 = 10;

/// Inclusive edge count bounds (before the simple-graph cap).
pub const MIN_EDGES: i64 = 1;
pub const MAX_EDGES: i64 = 20;

/// Build a connected simple graph with `num_nodes` nodes and `num_edges`
/// edges, drawing extra edges from `rng`.
///
/// Inputs are clamped, never rejected: nodes to `1..=10`, edges to `1..=20`
/// and then capped at `n*(n-1)/2`. For a single node the cap is 0 and the
/// graph has no edges. Identical inputs and an identically seeded `rng`
/// produce an identical graph.
pub fn build_graph(num_nodes: i64, num_edges: i64, rng: &mut impl Rng) -> Graph {
  let num_nodes = num_nodes.clamp(MIN_NODES, MAX_NODES) as usize;
  let max_possible_edges = num_nodes * (num_nodes - 1) / 2;
  let num_edges =
    (num_edges.clamp(MIN_EDGES, MAX_EDGES) as usize).min(max_possible_edges);

  // BTreeSet gives set semantics for duplicate draws and a canonical
  // ascending edge order for the final list.
  let mut edges: BTreeSet<(usize, usize)> = BTreeSet::new();

  // Spanning path 0-1-..-(n-1): connectivity holds before any randomness.
  for i in 0..num_nodes.saturating_sub(1) {
    edges.insert((i, i + 1));
  }

  while edges.len() < num_edges {
    let a = rng.gen_range(0..num_nodes);
    let b = rng.gen_range(0..num_nodes);
    if a != b {
      edges.insert((a.min(b), a.max(b)));
    }
  }

  debug!(
    nodes = num_nodes,
    edges = edges.len(),
    "graph built"
  );
  Graph::from_edges(num_nodes, edges.into_iter().collect())
}
