//! HTTP boundary: a small axum app exposing the compute endpoint.
//!
//! The core is total, so the only failures here are transport-level:
//! binding the listener and serving. Malformed JSON bodies are rejected by
//! the axum extractor before they reach the core.

use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::info;

use crate::compute::compute;
use crate::types::{ComputeRequest, ComputeResponse};

/// Failures while standing up or running the HTTP server.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
  #[error("failed to bind {addr}: {source}")]
  Bind {
    addr: String,
    source: std::io::Error,
  },
  #[error("server error: {0}")]
  Serve(#[from] std::io::Error),
}

const INDEX_PAGE: &str = r#"<!doctype html>
<html>
<head><title>gnn-playground</title></head>
<body>
<h1>gnn-playground</h1>
<p>POST a JSON body to <code>/compute</code>. Recognized options (all
optional): <code>model</code>, <code>layers</code>, <code>pooling</code>,
<code>nodes</code>, <code>edges</code>, <code>regenerate</code>.</p>
</body>
</html>
"#;

async fn index() -> Html<&'static str> {
  Html(INDEX_PAGE)
}

async fn compute_handler(Json(request): Json<ComputeRequest>) -> Json<ComputeResponse> {
  Json(compute(&request))
}

/// The playground router: `GET /` usage page, `POST /compute` JSON API.
pub fn router() -> Router {
  Router::new()
    .route("/", get(index))
    .route("/compute", post(compute_handler))
}

/// Bind `addr` and serve the router until ctrl-c.
pub async fn serve(addr: &str) -> Result<(), ServeError> {
  let listener = tokio::net::TcpListener::bind(addr)
    .await
    .map_err(|source| ServeError::Bind {
      addr: addr.to_string(),
      source,
    })?;
  info!(addr, "listening");
  axum::serve(listener, router())
    .with_graceful_shutdown(shutdown_signal())
    .await?;
  Ok(())
}

async fn shutdown_signal() {
  if tokio::signal::ctrl_c().await.is_ok() {
    info!("shutdown requested");
  }
}
