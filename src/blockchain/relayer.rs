// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Relayer boundary.
//!
//! The relayer arranges signing of a gas-less authorization transfer with the
//! threshold-signing service, broadcasts it and pays gas. This module defines
//! the request handed to it and an HTTP client for it.
//!
//! Endpoint:
//! - POST /v1/relay/transfer-with-authorization

use std::{fmt, str::FromStr, time::Duration};

use alloy::primitives::{Address, B256, U256};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::types::ChainId;
use crate::config::RelayerSettings;

const TRANSFER_PATH: &str = "/v1/relay/transfer-with-authorization";

/// Opaque delegated-signing credential for a threshold-signed account.
///
/// Passed through to the relayer untouched and never logged.
#[derive(Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct SessionCredential(serde_json::Value);

impl SessionCredential {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }
}

impl fmt::Debug for SessionCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionCredential(<redacted>)")
    }
}

/// Everything the relayer needs to execute one transfer.
///
/// Built once per transfer and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorizationRequest {
    pub signer_address: Address,
    pub signer_public_key: String,
    pub session_credential: SessionCredential,
    pub chain_id: ChainId,
    pub rpc_endpoint: String,
    pub token_contract: Address,
    pub recipient: Address,
    /// Amount in token base units
    pub amount: U256,
}

/// Errors from the relayer collaborator.
#[derive(Debug, thiserror::Error)]
pub enum RelayerError {
    #[error("relayer request failed: {0}")]
    Transport(String),

    #[error("relayer returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("relayer response was invalid: {0}")]
    InvalidResponse(String),

    #[error("relayer rejected the transfer: {0}")]
    Rejected(String),
}

/// Executes authorized transfers on chain.
#[async_trait]
pub trait Relayer: Send + Sync {
    /// Sign, broadcast and pay for a transfer; returns the transaction hash.
    async fn execute_transfer(&self, request: &AuthorizationRequest) -> Result<B256, RelayerError>;
}

/// Relayer API response wrapper.
#[derive(Debug, Deserialize)]
struct RelayerResponse<T> {
    code: Option<i32>,
    message: Option<String>,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct RelayedTransfer {
    tx_hash: String,
}

#[derive(Debug, Serialize)]
struct TransferPayload<'a> {
    signer_address: String,
    signer_public_key: &'a str,
    session_credential: &'a SessionCredential,
    chain_id: ChainId,
    rpc_url: &'a str,
    token: String,
    to: String,
    /// Base units as a decimal string
    amount: String,
}

impl<'a> From<&'a AuthorizationRequest> for TransferPayload<'a> {
    fn from(request: &'a AuthorizationRequest) -> Self {
        Self {
            signer_address: request.signer_address.to_checksum(None),
            signer_public_key: &request.signer_public_key,
            session_credential: &request.session_credential,
            chain_id: request.chain_id,
            rpc_url: &request.rpc_endpoint,
            token: request.token_contract.to_checksum(None),
            to: request.recipient.to_checksum(None),
            amount: request.amount.to_string(),
        }
    }
}

/// HTTP client for the relayer service.
#[derive(Debug, Clone)]
pub struct HttpRelayerClient {
    base_url: String,
    api_key: Option<String>,
    http: Client,
}

impl HttpRelayerClient {
    pub fn new(settings: &RelayerSettings) -> Result<Self, RelayerError> {
        let http = Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .build()
            .map_err(|e| RelayerError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            http,
        })
    }
}

#[async_trait]
impl Relayer for HttpRelayerClient {
    async fn execute_transfer(&self, request: &AuthorizationRequest) -> Result<B256, RelayerError> {
        let request_id = Uuid::new_v4().to_string();
        let url = format!("{}{}", self.base_url, TRANSFER_PATH);

        tracing::info!(
            request_id = %request_id,
            chain_id = request.chain_id,
            token = %request.token_contract,
            to = %request.recipient,
            amount = %request.amount,
            "Submitting transfer to relayer"
        );

        let mut builder = self
            .http
            .post(&url)
            .header("x-request-id", &request_id)
            .json(&TransferPayload::from(request));
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| RelayerError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = error_body(response.text().await);
            tracing::warn!(request_id = %request_id, status, body = %body, "Relayer returned an error status");
            return Err(RelayerError::Status { status, body });
        }

        let body: RelayerResponse<RelayedTransfer> = response
            .json()
            .await
            .map_err(|e| RelayerError::InvalidResponse(e.to_string()))?;

        if let Some(code) = body.code.filter(|code| *code != 0) {
            return Err(RelayerError::Rejected(format!(
                "code {code}: {}",
                body.message.unwrap_or_default()
            )));
        }

        let data = body
            .data
            .ok_or_else(|| RelayerError::InvalidResponse("missing data".to_string()))?;

        let tx_hash = B256::from_str(&data.tx_hash)
            .map_err(|e| RelayerError::InvalidResponse(format!("invalid tx_hash: {e}")))?;

        tracing::info!(request_id = %request_id, tx_hash = %tx_hash, "Relayer accepted transfer");
        Ok(tx_hash)
    }
}

/// Body of a failed response, or why it could not be read.
fn error_body(body: Result<String, reqwest::Error>) -> String {
    body.unwrap_or_else(|e| format!("<unreadable body: {e}>"))
}
