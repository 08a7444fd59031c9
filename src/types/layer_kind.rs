//! Update rule applied per node per layer.

use std::fmt;

/// Update rule combining a node's own value with its pooled neighbor value.
///
/// A closed set: unrecognized model names map to [LayerKind::Identity], which
/// leaves node values untouched, so every request has a defined behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
  Gcn,
  Gin,
  GraphSage,
  GanGate,
  Identity,
}

impl LayerKind {
  /// Resolve a model name from a request. Anything unrecognized is Identity.
  pub fn from_name(name: &str) -> Self {
    match name {
      "GCN" => LayerKind::Gcn,
      "GIN" => LayerKind::Gin,
      "GraphSage" => LayerKind::GraphSage,
      "GAN" | "GAN-gate" => LayerKind::GanGate,
      _ => LayerKind::Identity,
    }
  }

  /// New value for a node from its previous value and pooled neighbor value.
  pub fn apply(&self, self_value: f64, pooled: f64) -> f64 {
    match self {
      LayerKind::Gcn => 0.5 * self_value + 0.5 * pooled,
      LayerKind::Gin => 1.2 * self_value + 0.8 * pooled,
      LayerKind::GraphSage => (self_value + pooled).tanh(),
      LayerKind::GanGate => {
        let gate = 1.0 / (1.0 + (-self_value).exp());
        gate * self_value + (1.0 - gate) * pooled
      }
      LayerKind::Identity => self_value,
    }
  }
}

impl fmt::Display for LayerKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      LayerKind::Gcn => write!(f, "GCN"),
      LayerKind::Gin => write!(f, "GIN"),
      LayerKind::GraphSage => write!(f, "GraphSage"),
      LayerKind::GanGate => write!(f, "GAN"),
      LayerKind::Identity => write!(f, "identity"),
    }
  }
}
