//! Tests for `builder`.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::builder::build_graph;

fn rng(seed: u64) -> StdRng {
  StdRng::seed_from_u64(seed)
}

#[test]
fn spanning_path_alone_meets_small_edge_targets() {
  // 4 nodes and 3 requested edges: the path 0-1-2-3 already has 3 edges,
  // so no random edge is ever drawn and the graph is fully determined.
  let g = build_graph(4, 3, &mut rng(42));
  assert_eq!(g.edges, vec![(0, 1), (1, 2), (2, 3)]);
}

#[test]
fn single_node_graph_has_no_edges() {
  let g = build_graph(1, 10, &mut rng(42));
  assert_eq!(g.node_count, 1);
  assert!(g.edges.is_empty());
  assert!(g.is_connected());
}

#[test]
fn node_count_is_clamped_to_bounds() {
  assert_eq!(build_graph(0, 5, &mut rng(1)).node_count, 1);
  assert_eq!(build_graph(-7, 5, &mut rng(1)).node_count, 1);
  assert_eq!(build_graph(99, 5, &mut rng(1)).node_count, 10);
}

#[test]
fn edge_count_is_capped_at_simple_graph_bound() {
  // 4 nodes allow at most 6 edges; a request for 20 saturates the graph.
  let g = build_graph(4, 20, &mut rng(7));
  assert_eq!(g.edges.len(), 6);
}

#[test]
fn same_seed_builds_same_graph() {
  let a = build_graph(8, 15, &mut rng(42));
  let b = build_graph(8, 15, &mut rng(42));
  assert_eq!(a, b);
}

#[test]
fn different_seeds_can_differ() {
  // 10 nodes, 20 edges leaves 11 random edges out of 36 slots; two seeds
  // agreeing on all of them would be remarkable.
  let a = build_graph(10, 20, &mut rng(1));
  let b = build_graph(10, 20, &mut rng(2));
  assert_ne!(a.edges, b.edges);
}

proptest! {
  #[test]
  fn built_graphs_are_connected(nodes in -5i64..20, edges in -5i64..30, seed in 0u64..500) {
    let g = build_graph(nodes, edges, &mut rng(seed));
    prop_assert!(g.is_connected());
  }

  #[test]
  fn edge_count_matches_clamped_request(nodes in 1i64..=10, edges in 1i64..=20, seed in 0u64..500) {
    let g = build_graph(nodes, edges, &mut rng(seed));
    let n = nodes as usize;
    let max_possible = n * (n - 1) / 2;
    // The spanning path contributes n-1 edges that are never removed.
    let expected = (edges as usize).min(max_possible).max(n - 1);
    prop_assert_eq!(g.edges.len(), expected);
  }

  #[test]
  fn edges_are_canonical_and_simple(nodes in 1i64..=10, edges in 1i64..=20, seed in 0u64..500) {
    let g = build_graph(nodes, edges, &mut rng(seed));
    for window in g.edges.windows(2) {
      prop_assert!(window[0] < window[1], "edge list must be strictly ascending");
    }
    for &(a, b) in &g.edges {
      prop_assert!(a < b, "edge ({a}, {b}) not canonical");
      prop_assert!(b < g.node_count);
    }
  }
}
