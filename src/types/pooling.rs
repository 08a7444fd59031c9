//! Neighbor pooling strategy.

use std::fmt;

/// Aggregates a node's neighbor values into one scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pooling {
  Mean,
  Max,
  Attention,
}

impl Pooling {
  /// Resolve a pooling name from a request. Only `mean` and `max` have their
  /// own branches; everything else takes the attention branch.
  pub fn from_name(name: &str) -> Self {
    match name {
      "mean" => Pooling::Mean,
      "max" => Pooling::Max,
      _ => Pooling::Attention,
    }
  }

  /// Pool `neighbor_values` into one scalar. A node with no neighbors pools
  /// to 0.0 under every strategy.
  pub fn pool(&self, neighbor_values: &[f64]) -> f64 {
    if neighbor_values.is_empty() {
      return 0.0;
    }
    match self {
      Pooling::Mean => {
        neighbor_values.iter().sum::<f64>() / neighbor_values.len() as f64
      }
      Pooling::Max => neighbor_values.iter().copied().fold(f64::MIN, f64::max),
      Pooling::Attention => {
        // Softmax over neighbor values, stabilized by subtracting the max,
        // then a weighted sum of the same values.
        let max = neighbor_values.iter().copied().fold(f64::MIN, f64::max);
        let scores: Vec<f64> = neighbor_values.iter().map(|v| (v - max).exp()).collect();
        let total: f64 = scores.iter().sum();
        scores
          .iter()
          .zip(neighbor_values)
          .map(|(score, value)| (score / total) * value)
          .sum()
      }
    }
  }
}

impl fmt::Display for Pooling {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Pooling::Mean => write!(f, "mean"),
      Pooling::Max => write!(f, "max"),
      Pooling::Attention => write!(f, "attention"),
    }
  }
}
