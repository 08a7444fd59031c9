//! Per-node computation trace for one layer.

use serde::{Deserialize, Serialize};

/// What one node did during one layer: the inputs it read, the pooled value
/// it derived, and the value it wrote. Neighbor ids are ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpTrace {
  /// Node id.
  pub node: usize,
  /// The node's value going into the layer.
  #[serde(rename = "self")]
  pub self_value: f64,
  /// Pooled neighbor value.
  pub pooled: f64,
  /// Value written for the next layer.
  pub updated: f64,
  /// Neighbor ids the pooled value was computed from.
  pub neighbors: Vec<usize>,
}
