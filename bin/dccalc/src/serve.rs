//! ---
//! dcc_section: "05-networking-external-interfaces"
//! dcc_subsection: "binary"
//! dcc_type: "source"
//! dcc_scope: "code"
//! dcc_description: "HTTP server hosting the calculator API."
//! dcc_version: "v0.1.0"
//! dcc_owner: "tbd"
//! ---
use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Args;
use dcc_calc_engine::api::router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Listen address (defaults to `api.listen` from the configuration).
    #[arg(long, value_name = "ADDR")]
    pub listen: Option<SocketAddr>,
}

/// Serve the calculator routes until ctrl-c is received.
pub async fn run(addr: SocketAddr) -> Result<()> {
    let app = router().layer(TraceLayer::new_for_http());
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind API listener {addr}"))?;
    info!(address = %addr, "api server listening");

    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(address = %addr, error = %err, "api server exited with error");
        return Err(err.into());
    }
    info!("api server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        warn!(error = %err, "unable to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("ctrl-c received; shutting down");
}
