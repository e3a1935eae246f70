// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Native and token balance reads.

use std::sync::Arc;

use alloy::primitives::Address;
use serde::Serialize;
use utoipa::ToSchema;

use super::amount::format_units;
use super::error::WalletError;
use super::node::ExecutionNode;
use super::registry::ChainRegistry;
use super::token::TokenMetadataResolver;
use super::types::ChainId;

/// Combined native and token balance for one address on one chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct WalletBalances {
    /// Wallet address
    pub address: String,
    /// Native currency balance, formatted
    pub native: String,
    /// Native currency symbol
    pub native_symbol: String,
    /// Token balance, formatted
    pub token: String,
    /// Token contract address
    pub token_address: String,
    /// Token decimals used for formatting
    pub token_decimals: u8,
    /// Chain ID
    pub chain_id: ChainId,
}

/// Reads balances through the execution node of a resolved chain.
#[derive(Clone)]
pub struct BalanceReader {
    registry: Arc<ChainRegistry>,
    node: Arc<dyn ExecutionNode>,
    tokens: TokenMetadataResolver,
}

impl BalanceReader {
    pub fn new(
        registry: Arc<ChainRegistry>,
        node: Arc<dyn ExecutionNode>,
        tokens: TokenMetadataResolver,
    ) -> Self {
        Self {
            registry,
            node,
            tokens,
        }
    }

    /// Query the native and token balance of `address`.
    ///
    /// Both reads run concurrently. Either failing fails the call; there are
    /// no retries. Decimals discovery cannot fail (see [`TokenMetadataResolver`]).
    pub async fn get_balances(
        &self,
        address: Address,
        chain_id: Option<ChainId>,
        token: Option<Address>,
    ) -> Result<WalletBalances, WalletError> {
        let rpc_url = self.registry.resolve_rpc_endpoint(chain_id)?;
        let chain = self.registry.resolve_chain(chain_id);
        let token = token.unwrap_or(chain.default_token.contract_address);

        let (native_raw, token_raw, decimals) = tokio::try_join!(
            async {
                self.node
                    .native_balance(&rpc_url, address)
                    .await
                    .map_err(WalletError::from)
            },
            async {
                self.node
                    .token_balance(&rpc_url, token, address)
                    .await
                    .map_err(WalletError::from)
            },
            async {
                Ok::<_, WalletError>(
                    self.tokens
                        .resolve_decimals(token, Some(chain.chain_id))
                        .await
                        .decimals(),
                )
            },
        )?;

        Ok(WalletBalances {
            address: address.to_checksum(None),
            native: format_units(native_raw, chain.native_decimals),
            native_symbol: chain.native_symbol.to_string(),
            token: format_units(token_raw, decimals),
            token_address: token.to_checksum(None),
            token_decimals: decimals,
            chain_id: chain.chain_id,
        })
    }
}
