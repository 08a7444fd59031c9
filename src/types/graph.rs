//! Undirected simple graph over node ids `0..node_count`.

/// Undirected simple graph over node ids `0..node_count`.
///
/// Edges are canonical `(low, high)` pairs with no duplicates and no
/// self-loops, kept in ascending order. `adjacency[node]` lists that node's
/// neighbors in ascending id order; that order is what op traces report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
  pub node_count: usize,
  pub edges: Vec<(usize, usize)>,
  pub adjacency: Vec<Vec<usize>>,
}

impl Graph {
  /// Build a graph from a canonical edge list. Edges must already be
  /// deduplicated `(low, high)` pairs; adjacency is derived and sorted.
  pub fn from_edges(node_count: usize, edges: Vec<(usize, usize)>) -> Self {
    let mut adjacency = vec![Vec::new(); node_count];
    for &(a, b) in &edges {
      adjacency[a].push(b);
      adjacency[b].push(a);
    }
    for neighbors in &mut adjacency {
      neighbors.sort_unstable();
    }
    Self {
      node_count,
      edges,
      adjacency,
    }
  }

  /// Neighbor ids of `node`, ascending.
  pub fn neighbors(&self, node: usize) -> &[usize] {
    &self.adjacency[node]
  }

  /// True if every node is reachable from node 0 (trivially true for a
  /// single-node graph).
  pub fn is_connected(&self) -> bool {
    if self.node_count == 0 {
      return true;
    }
    let mut seen = vec![false; self.node_count];
    let mut queue = std::collections::VecDeque::from([0usize]);
    seen[0] = true;
    while let Some(node) = queue.pop_front() {
      for &next in self.neighbors(node) {
        if !seen[next] {
          seen[next] = true;
          queue.push_back(next);
        }
      }
    }
    seen.into_iter().all(|s| s)
  }
}
