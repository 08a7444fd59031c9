//! Wire representation of a graph for rendering.

use serde::{Deserialize, Serialize};

use super::Graph;

/// A node reference in the wire payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRef {
  pub id: usize,
}

/// An undirected edge in the wire payload, `source < target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRef {
  pub source: usize,
  pub target: usize,
}

/// Graph structure as the front end consumes it: a node list plus a link
/// list, ids matching embedding indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphPayload {
  pub nodes: Vec<NodeRef>,
  pub links: Vec<LinkRef>,
}

impl GraphPayload {
  pub fn from_graph(graph: &Graph) -> Self {
    Self {
      nodes: (0..graph.node_count).map(|id| NodeRef { id }).collect(),
      links: graph
        .edges
        .iter()
        .map(|&(source, target)| LinkRef { source, target })
        .collect(),
    }
  }
}
