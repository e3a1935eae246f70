// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    blockchain::{ChainId, RpcSource, DEFAULT_CHAIN_ID},
    state::AppState,
};

/// Endpoint availability for one registered chain.
#[derive(Debug, Serialize, ToSchema)]
pub struct ChainReadiness {
    pub chain_id: ChainId,
    /// Balance reads have a vetted endpoint
    pub reads: bool,
    /// Tier the transfer path would hand to the relayer
    pub transfer_rpc: RpcSource,
}

/// Readiness report. `degraded` means the default chain cannot serve reads.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadinessReport {
    pub status: String,
    pub default_chain_id: ChainId,
    pub chains: Vec<ChainReadiness>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LivenessResponse {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Default chain is readable", body = ReadinessReport),
        (status = 503, description = "Default chain has no RPC endpoint", body = ReadinessReport)
    )
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<ReadinessReport>) {
    let chains: Vec<ChainReadiness> = state
        .registry
        .chains()
        .into_iter()
        .filter_map(|summary| {
            let id = summary.chain_id;
            let endpoint = state.registry.resolve_transfer_endpoint(id).ok()?;
            Some(ChainReadiness {
                chain_id: id,
                reads: state.registry.resolve_rpc_endpoint(Some(id)).is_ok(),
                transfer_rpc: endpoint.source,
            })
        })
        .collect();

    let ready = chains
        .iter()
        .any(|chain| chain.chain_id == DEFAULT_CHAIN_ID && chain.reads);
    let (status, label) = if ready {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status,
        Json(ReadinessReport {
            status: label.to_string(),
            default_chain_id: DEFAULT_CHAIN_ID,
            chains,
        }),
    )
}

/// Always 200 while the process is up.
#[utoipa::path(
    get,
    path = "/health/live",
    tag = "Health",
    responses((status = 200, body = LivenessResponse))
)]
pub async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "ok".to_string(),
    })
}
