//! # gnn-playground
//!
//! Step-by-step simulation of message passing over small graphs, in the
//! style of GCN/GIN/GraphSage/GAN-style layers (simplified for teaching and
//! visualization, not trained inference).
//!
//! ## Architecture
//!
//! One request flows through two components in sequence: `builder`
//! constructs a connected simple graph, then `engine` applies the requested
//! layers to a per-node scalar embedding, recording a full timeline of
//! snapshots and per-node op traces. `compute` owns the seed policy and
//! glues the two together; `server` exposes the result as JSON.

pub mod builder;
#[cfg(test)]
mod builder_test;
pub mod compute;
pub mod engine;
pub mod server;
pub mod types;

pub use builder::build_graph;
pub use compute::compute;
pub use engine::run;
pub use types::{ComputeRequest, ComputeResponse, Graph, LayerKind, Pooling, Timeline};
