// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Gas-less transfer endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::parse_address;
use crate::{
    blockchain::{SessionCredential, SignerAccount, TransferOptions},
    error::ApiError,
    state::AppState,
};

/// Sending account.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TransferAccount {
    /// Account address (0x + 40 hex chars)
    pub address: String,
    /// Public key of the account's threshold key
    pub public_key: String,
}

/// Request to transfer a token through the relayer.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TransferRequest {
    pub account: TransferAccount,
    /// Recipient address (0x + 40 hex chars)
    pub to: String,
    /// Amount in human-readable format (e.g., "10.25")
    pub amount: String,
    /// Chain ID. Defaults to Base (8453).
    pub chain_id: Option<u64>,
    /// Token contract address. Defaults to the chain's USDC.
    pub token: Option<String>,
    /// Token decimals. Looked up on chain when omitted.
    pub token_decimals: Option<u8>,
    /// Delegated signing credential (required)
    pub session_credential: Option<SessionCredential>,
}

/// Relayed transfer response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TransferResponse {
    /// Transaction hash
    pub tx_hash: String,
    /// Chain ID
    pub chain_id: u64,
    /// Token contract address
    pub token: String,
    /// Block explorer URL
    pub explorer_url: String,
}

/// Transfer tokens without paying gas.
///
/// The relayer signs the authorization through the session credential,
/// broadcasts it and pays gas.
#[utoipa::path(
    post,
    path = "/v1/transfers",
    tag = "Transfers",
    request_body = TransferRequest,
    responses(
        (status = 200, description = "Transfer broadcast", body = TransferResponse),
        (status = 400, description = "Invalid address or unsupported chain"),
        (status = 401, description = "Missing session credential"),
        (status = 422, description = "Invalid amount"),
        (status = 502, description = "Relayer failed")
    )
)]
pub async fn create_transfer(
    State(state): State<AppState>,
    Json(request): Json<TransferRequest>,
) -> Result<Json<TransferResponse>, ApiError> {
    let account = SignerAccount {
        address: parse_address(&request.account.address, "account")?,
        public_key: request.account.public_key,
    };
    let recipient = parse_address(&request.to, "recipient")?;
    let token = request
        .token
        .as_deref()
        .map(|t| parse_address(t, "token"))
        .transpose()?;

    let options = TransferOptions {
        chain_id: request.chain_id,
        token,
        token_decimals: request.token_decimals,
        session_credential: request.session_credential,
    };

    let result = state
        .transfers
        .transfer_token(&account, recipient, request.amount.trim(), options)
        .await?;

    Ok(Json(TransferResponse {
        tx_hash: result.tx_hash.to_string(),
        chain_id: result.chain_id,
        token: result.token.to_checksum(None),
        explorer_url: result.explorer_url,
    }))
}
