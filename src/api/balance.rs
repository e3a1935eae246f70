// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Blockchain balance query endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::parse_address;
use crate::{blockchain::WalletBalances, error::ApiError, state::AppState};

/// Query parameters for balance request.
#[derive(Debug, Deserialize, IntoParams)]
pub struct BalanceQuery {
    /// Chain to query. Defaults to Base (8453).
    pub chain_id: Option<u64>,
    /// Token contract address. Defaults to the chain's USDC.
    pub token: Option<String>,
}

/// Get the native and token balance of an address.
#[utoipa::path(
    get,
    path = "/v1/wallets/{address}/balances",
    tag = "Balances",
    params(
        ("address" = String, Path, description = "Wallet address"),
        BalanceQuery
    ),
    responses(
        (status = 200, description = "Balance retrieved successfully", body = WalletBalances),
        (status = 400, description = "Invalid address or unsupported chain"),
        (status = 502, description = "Execution node unavailable"),
        (status = 503, description = "RPC endpoint not configured")
    )
)]
pub async fn get_wallet_balances(
    State(state): State<AppState>,
    Path(address): Path<String>,
    Query(query): Query<BalanceQuery>,
) -> Result<Json<WalletBalances>, ApiError> {
    let address = parse_address(&address, "wallet")?;
    let token = query
        .token
        .as_deref()
        .map(|t| parse_address(t, "token"))
        .transpose()?;

    let balances = state
        .balances
        .get_balances(address, query.chain_id, token)
        .await
        .map_err(|e| {
            tracing::warn!(address = %address, error = %e, "Balance query failed");
            ApiError::from(e)
        })?;

    Ok(Json(balances))
}
