// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Execution node boundary: read-only RPC calls.

use alloy::{
    primitives::{Address, U256},
    providers::{Provider, ProviderBuilder},
};
use async_trait::async_trait;

use super::erc20::IERC20;

/// Errors returned by execution node reads.
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Contract error: {0}")]
    Contract(String),
}

/// Read-only access to an EVM execution node.
///
/// Each call names the endpoint to use, since the endpoint depends on the chain
/// being queried.
#[async_trait]
pub trait ExecutionNode: Send + Sync {
    /// Native currency balance in wei.
    async fn native_balance(&self, rpc_url: &str, owner: Address) -> Result<U256, NodeError>;

    /// ERC-20 `balanceOf(owner)` in base units.
    async fn token_balance(
        &self,
        rpc_url: &str,
        token: Address,
        owner: Address,
    ) -> Result<U256, NodeError>;

    /// ERC-20 `decimals()`.
    async fn token_decimals(&self, rpc_url: &str, token: Address) -> Result<u8, NodeError>;
}

/// [`ExecutionNode`] backed by alloy's HTTP provider.
#[derive(Debug, Clone, Default)]
pub struct HttpExecutionNode;

impl HttpExecutionNode {
    pub fn new() -> Self {
        Self
    }

    fn provider(rpc_url: &str) -> Result<impl Provider + Clone, NodeError> {
        let url: url::Url = rpc_url
            .parse()
            .map_err(|e: url::ParseError| NodeError::InvalidRpcUrl(e.to_string()))?;
        Ok(ProviderBuilder::new().connect_http(url))
    }
}

#[async_trait]
impl ExecutionNode for HttpExecutionNode {
    async fn native_balance(&self, rpc_url: &str, owner: Address) -> Result<U256, NodeError> {
        let provider = Self::provider(rpc_url)?;
        provider
            .get_balance(owner)
            .await
            .map_err(|e| NodeError::Rpc(e.to_string()))
    }

    async fn token_balance(
        &self,
        rpc_url: &str,
        token: Address,
        owner: Address,
    ) -> Result<U256, NodeError> {
        let provider = Self::provider(rpc_url)?;
        IERC20::new(token, provider)
            .balanceOf(owner)
            .call()
            .await
            .map_err(|e| NodeError::Contract(e.to_string()))
    }

    async fn token_decimals(&self, rpc_url: &str, token: Address) -> Result<u8, NodeError> {
        let provider = Self::provider(rpc_url)?;
        IERC20::new(token, provider)
            .decimals()
            .call()
            .await
            .map_err(|e| NodeError::Contract(e.to_string()))
    }
}
