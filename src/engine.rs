//! Layered message-passing over a fixed graph.
//!
//! The graph never changes during propagation; only the embedding vector
//! evolves. Each layer is a pure map over the previous layer's full vector,
//! so every node reads a consistent snapshot.

use tracing::debug;

use crate::types::{Graph, LayerKind, LayerRecord, OpTrace, Pooling, Timeline};

/// Apply one layer: pool each node's neighbor values, combine with the
/// node's own value under `layer`, and record an [OpTrace] per node.
///
/// Reads only `embeddings` (the previous layer's vector) and writes a fresh
/// vector, so a node's update never observes a partially updated state.
pub fn apply_layer(
  graph: &Graph,
  embeddings: &[f64],
  layer: LayerKind,
  pooling: Pooling,
) -> (Vec<f64>, Vec<OpTrace>) {
  let mut new_embeddings = Vec::with_capacity(embeddings.len());
  let mut ops = Vec::with_capacity(embeddings.len());

  for node in 0..graph.node_count {
    let neighbors = graph.neighbors(node);
    let neighbor_values: Vec<f64> = neighbors.iter().map(|&n| embeddings[n]).collect();
    let pooled = pooling.pool(&neighbor_values);
    let self_value = embeddings[node];
    let updated = layer.apply(self_value, pooled);

    new_embeddings.push(updated);
    ops.push(OpTrace {
      node,
      self_value,
      pooled,
      updated,
      neighbors: neighbors.to_vec(),
    });
  }

  (new_embeddings, ops)
}

/// Run `num_layers` layers over `initial`, producing the full timeline.
///
/// Record 0 holds the initial embedding with empty ops; records `1..=L`
/// hold each layer's output, every layer consuming the previous record's
/// vector. The returned timeline always has `num_layers + 1` records.
pub fn run(
  graph: &Graph,
  initial: Vec<f64>,
  layer: LayerKind,
  pooling: Pooling,
  num_layers: usize,
) -> Timeline {
  debug!(%layer, %pooling, num_layers, nodes = graph.node_count, "propagation start");

  let mut timeline: Timeline = Vec::with_capacity(num_layers + 1);
  timeline.push(LayerRecord {
    layer: 0,
    embeddings: initial,
    ops: Vec::new(),
  });

  for index in 1..=num_layers {
    let previous = &timeline[index - 1].embeddings;
    let (embeddings, ops) = apply_layer(graph, previous, layer, pooling);
    timeline.push(LayerRecord {
      layer: index,
      embeddings,
      ops,
    });
  }

  timeline
}
