//! One snapshot in the propagation timeline.

use serde::{Deserialize, Serialize};

use super::OpTrace;

/// Embedding snapshot after layer `layer`, with the per-node traces that
/// produced it. Layer 0 is the initial state and has no ops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerRecord {
  /// Layer index, 0-based; 0 is the initial embedding.
  pub layer: usize,
  /// One value per node, indexed by node id.
  pub embeddings: Vec<f64>,
  /// Per-node traces in node id order; empty for layer 0.
  pub ops: Vec<OpTrace>,
}

/// Ordered snapshots, index 0 being the initial state. Length is always
/// `num_layers + 1`.
pub type Timeline = Vec<LayerRecord>;
