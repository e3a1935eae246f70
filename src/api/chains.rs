// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    blockchain::{ChainSummary, DEFAULT_CHAIN_ID},
    state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct ChainListResponse {
    /// Chain used when a request does not name one
    pub default_chain_id: u64,
    pub chains: Vec<ChainSummary>,
}

#[utoipa::path(
    get,
    path = "/v1/chains",
    tag = "Chains",
    responses((status = 200, body = ChainListResponse))
)]
pub async fn list_chains(State(state): State<AppState>) -> Json<ChainListResponse> {
    Json(ChainListResponse {
        default_chain_id: DEFAULT_CHAIN_ID,
        chains: state.registry.chains(),
    })
}
