//! Full response for one computation request.

use serde::{Deserialize, Serialize};

use super::{Graph, GraphPayload, Timeline};

/// The graph that was built plus the full propagation timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputeResponse {
  pub graph: GraphPayload,
  pub timeline: Timeline,
}

impl ComputeResponse {
  pub fn new(graph: &Graph, timeline: Timeline) -> Self {
    Self {
      graph: GraphPayload::from_graph(graph),
      timeline,
    }
  }
}
