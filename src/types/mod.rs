//! Domain and wire types for the message-passing playground.
//!
//! The graph and the enums are the domain; the `*Request`/`*Response`/
//! payload types are the JSON wire surface the front end consumes.

mod compute_request;
mod compute_response;
mod graph;
mod graph_payload;
mod layer_kind;
mod layer_record;
mod op_trace;
mod pooling;

pub use compute_request::ComputeRequest;
pub use compute_response::ComputeResponse;
pub use graph::Graph;
pub use graph_payload::{GraphPayload, LinkRef, NodeRef};
pub use layer_kind::LayerKind;
pub use layer_record::{LayerRecord, Timeline};
pub use op_trace::OpTrace;
pub use pooling::Pooling;
