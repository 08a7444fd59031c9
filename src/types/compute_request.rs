//! Options accepted by a computation request.

use serde::Deserialize;

/// Recognized options for one computation request. Every field has a
/// default, and out-of-range numbers are clamped downstream rather than
/// rejected, so any JSON object deserializes into a valid request.
#[derive(Debug, Clone, Deserialize)]
pub struct ComputeRequest {
  /// Model name selecting the update rule; unrecognized names run identity.
  #[serde(default = "default_model")]
  pub model: String,
  /// Number of propagation layers. Negative values run zero layers.
  #[serde(default = "default_layers")]
  pub layers: i64,
  /// Pooling strategy name; anything but `mean`/`max` runs attention.
  #[serde(default = "default_pooling")]
  pub pooling: String,
  /// Requested node count, clamped to 1..=10.
  #[serde(default = "default_nodes")]
  pub nodes: i64,
  /// Requested edge count, clamped to 1..=20 and the simple-graph bound.
  #[serde(default = "default_edges")]
  pub edges: i64,
  /// When false, graph and embedding randomness use the fixed seed so the
  /// response is reproducible; when true, both are drawn fresh.
  #[serde(default)]
  pub regenerate: bool,
}

impl Default for ComputeRequest {
  fn default() -> Self {
    Self {
      model: default_model(),
      layers: default_layers(),
      pooling: default_pooling(),
      nodes: default_nodes(),
      edges: default_edges(),
      regenerate: false,
    }
  }
}

fn default_model() -> String {
  "GCN".to_string()
}

fn default_layers() -> i64 {
  2
}

fn default_pooling() -> String {
  "mean".to_string()
}

fn default_nodes() -> i64 {
  6
}

fn default_edges() -> i64 {
  10
}
