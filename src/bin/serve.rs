//! CLI: serve the message-passing playground over HTTP.
//!
//! Usage: `serve [--host 0.0.0.0] [--port 5000]`
//!
//! Set RUST_LOG=gnn_playground=debug for per-request build/propagation events.

use clap::Parser;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Serve the message-passing playground over HTTP.
#[derive(Parser, Debug)]
#[command(name = "serve")]
struct Args {
  /// Address to bind.
  #[arg(long, default_value = "0.0.0.0")]
  host: String,

  /// Port to listen on.
  #[arg(long, default_value_t = 5000)]
  port: u16,
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let args = Args::parse();
  let addr = format!("{}:{}", args.host, args.port);
  info!(%addr, "serve starting");

  if let Err(e) = gnn_playground::server::serve(&addr).await {
    eprintln!("Server error: {}", e);
    process::exit(1);
  }
}
