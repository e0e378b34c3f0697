//! Serve command implementation.

use anyhow::{Context, Result};
use hryvnia_lib::prelude::*;
use std::sync::Arc;
use tracing::{info, warn};

/// Run the chat relay until Ctrl-C.
pub(crate) async fn serve(config: ServerConfig) -> Result<()> {
    let server = Arc::new(ChatServer::from_config(&config)?);
    hryvnia_lib::serve(server, config.addr, shutdown_signal())
        .await
        .with_context(|| format!("Chat server on {} failed", config.addr))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
