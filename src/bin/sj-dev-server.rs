//! In-memory stand-in for the platform REST API, for local development and tests.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::Parser;
use serde_json::json;
use tokio::sync::RwLock;

use sj_console::model::{CustomFile, Service, Stream};

#[path = "sj_dev_server/state.rs"]
mod state;
use self::state::*;
#[path = "sj_dev_server/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "sj_dev_server/handlers_custom.rs"]
mod handlers_custom;
use self::handlers_custom::*;
#[path = "sj_dev_server/handlers_streams.rs"]
mod handlers_streams;
use self::handlers_streams::*;
#[path = "sj_dev_server/routes.rs"]
mod routes;
use self::routes::*;

#[derive(Parser)]
#[command(name = "sj-dev-server")]
#[command(about = "Stream platform REST API (development, in-memory)", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    addr_file: Option<PathBuf>,

    /// Start with demo services, streams and instances
    #[arg(long)]
    seed_demo: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();
    sj_console::logging::init_stderr(args.verbose);

    let state = Arc::new(AppState::default());
    if args.seed_demo {
        state.seed_demo().await;
    }

    let app = Router::new()
        .route("/healthz", get(healthz))
        .nest("/v1", api_router())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;

    let local_addr = listener.local_addr().context("read listener local addr")?;
    eprintln!("sj-dev-server listening on {}", local_addr);

    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

async fn healthz() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}
