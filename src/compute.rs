//! Per-request orchestration: seed policy, graph build, initial embedding,
//! propagation, response assembly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::builder::build_graph;
use crate::engine;
use crate::types::{ComputeRequest, ComputeResponse, LayerKind, Pooling};

/// Seed used whenever a request does not ask to regenerate, so repeated
/// requests with the same options get byte-identical responses.
pub const FIXED_SEED: u64 = 42;

/// RNG for one draw sequence under the request's seed policy. Graph
/// construction and the initial embedding each get their own instance, both
/// starting from [FIXED_SEED] when not regenerating.
fn request_rng(regenerate: bool) -> StdRng {
  if regenerate {
    StdRng::from_entropy()
  } else {
    StdRng::seed_from_u64(FIXED_SEED)
  }
}

/// Initial embedding: `node_count` uniform draws scaled into `[0.5, 2.0)`.
pub fn initial_embedding(node_count: usize, rng: &mut impl Rng) -> Vec<f64> {
  (0..node_count).map(|_| 0.5 + 1.5 * rng.gen::<f64>()).collect()
}

/// Serve one computation request end to end.
///
/// Total over its input: counts are clamped, unrecognized model and pooling
/// names fall back to identity and attention, negative layer counts run
/// zero layers. Never fails.
pub fn compute(request: &ComputeRequest) -> ComputeResponse {
  let layer = LayerKind::from_name(&request.model);
  let pooling = Pooling::from_name(&request.pooling);
  let num_layers = request.layers.max(0) as usize;

  let mut graph_rng = request_rng(request.regenerate);
  let graph = build_graph(request.nodes, request.edges, &mut graph_rng);

  let mut embedding_rng = request_rng(request.regenerate);
  let initial = initial_embedding(graph.node_count, &mut embedding_rng);

  let timeline = engine::run(&graph, initial, layer, pooling, num_layers);

  info!(
    %layer,
    %pooling,
    num_layers,
    nodes = graph.node_count,
    edges = graph.edges.len(),
    regenerate = request.regenerate,
    "computed timeline"
  );
  ComputeResponse::new(&graph, timeline)
}
