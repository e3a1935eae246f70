// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::{error::Error, net::SocketAddr, sync::Arc};

use gasless_wallet_server::{
    api::router,
    blockchain::{ChainRegistry, HttpExecutionNode, HttpRelayerClient},
    config::{LogFormat, RuntimeConfig},
    state::AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = RuntimeConfig::from_env()?;
    init_tracing(config.log_format);

    let registry = ChainRegistry::new(config.rpc.clone());
    if let Err(e) = registry.resolve_rpc_endpoint(None) {
        tracing::warn!(error = %e, "Default chain has no RPC endpoint; balance reads will fail");
    }

    let relayer = HttpRelayerClient::new(&config.relayer)?;
    let state = AppState::new(
        registry,
        Arc::new(HttpExecutionNode::new()),
        Arc::new(relayer),
    );
    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        %addr,
        relayer = %config.relayer.base_url,
        "Gasless wallet server listening (docs at /docs)"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
