// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Chain registry: the only source of chain configuration.
//!
//! Metadata lookups are forgiving (unknown chains fall back to the default
//! network's metadata). Endpoint lookups are not: an RPC endpoint is only ever
//! handed out for a registered chain, because sending a value-moving call to an
//! unvetted endpoint risks funds.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use super::error::WalletError;
use super::types::{
    ChainConfig, ChainId, ChainSummary, BASE_MAINNET, BUILTIN_CHAINS, DEFAULT_CHAIN_ID,
};
use crate::config::RpcSettings;

static FALLBACK_DEFAULT_CHAIN: ChainConfig = BASE_MAINNET;

/// Which tier produced an RPC endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RpcSource {
    /// Operator-configured primary endpoint
    Primary,
    /// Endpoint derived from the RPC API key
    Keyed,
    /// Hard-coded public endpoint
    Public,
}

/// A resolved RPC endpoint and the tier it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcEndpoint {
    pub url: String,
    pub source: RpcSource,
}

/// Chain ID to configuration mapping plus injected RPC settings.
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    chains: BTreeMap<ChainId, ChainConfig>,
    settings: RpcSettings,
}

impl ChainRegistry {
    /// Create a registry holding the built-in chains.
    pub fn new(settings: RpcSettings) -> Self {
        let mut registry = Self {
            chains: BTreeMap::new(),
            settings,
        };
        for chain in BUILTIN_CHAINS {
            registry.register(chain);
        }
        registry
    }

    /// Register (or replace) a chain.
    pub fn register(&mut self, chain: ChainConfig) {
        self.chains.insert(chain.chain_id, chain);
    }

    pub fn is_registered(&self, chain_id: ChainId) -> bool {
        self.chains.contains_key(&chain_id)
    }

    /// Registered chains in chain ID order.
    pub fn chains(&self) -> Vec<ChainSummary> {
        self.chains.values().map(ChainSummary::from).collect()
    }

    fn default_chain(&self) -> &ChainConfig {
        self.chains
            .get(&DEFAULT_CHAIN_ID)
            .unwrap_or(&FALLBACK_DEFAULT_CHAIN)
    }

    /// Resolve chain metadata.
    ///
    /// Unknown chain IDs resolve to the default chain's metadata with a warning.
    pub fn resolve_chain(&self, chain_id: Option<ChainId>) -> &ChainConfig {
        let id = chain_id.unwrap_or(DEFAULT_CHAIN_ID);
        match self.chains.get(&id) {
            Some(chain) => chain,
            None => {
                tracing::warn!(
                    chain_id = id,
                    default_chain_id = DEFAULT_CHAIN_ID,
                    "Unknown chain, using default chain metadata"
                );
                self.default_chain()
            }
        }
    }

    /// Resolve the RPC endpoint for reads, strictly.
    ///
    /// - default chain: primary endpoint, else keyed endpoint, else
    ///   [`WalletError::MissingConfiguration`]
    /// - other registered chains: primary endpoint, else the hard-coded one
    /// - anything else: [`WalletError::UnsupportedChain`]
    pub fn resolve_rpc_endpoint(&self, chain_id: Option<ChainId>) -> Result<String, WalletError> {
        let id = chain_id.unwrap_or(DEFAULT_CHAIN_ID);
        let chain = self
            .chains
            .get(&id)
            .ok_or(WalletError::UnsupportedChain(id))?;

        if let Some(endpoint) = self.primary_endpoint(chain) {
            return Ok(endpoint.url);
        }

        if id != DEFAULT_CHAIN_ID {
            return Ok(chain.rpc_url.to_string());
        }

        self.keyed_endpoint(chain)
            .map(|endpoint| endpoint.url)
            .ok_or_else(|| {
                WalletError::MissingConfiguration(format!(
                    "no RPC endpoint for chain {id}: set {} or the RPC API key",
                    chain.rpc_env
                ))
            })
    }

    /// Resolve the RPC endpoint handed to the relayer for a transfer.
    ///
    /// Precedence is primary, then keyed, then public. Only registered chains
    /// can be used for transfers.
    pub fn resolve_transfer_endpoint(
        &self,
        chain_id: ChainId,
    ) -> Result<RpcEndpoint, WalletError> {
        let chain = self
            .chains
            .get(&chain_id)
            .ok_or(WalletError::UnsupportedChain(chain_id))?;

        let endpoint = self
            .primary_endpoint(chain)
            .or_else(|| self.keyed_endpoint(chain))
            .unwrap_or_else(|| RpcEndpoint {
                url: chain.rpc_url.to_string(),
                source: RpcSource::Public,
            });

        tracing::debug!(chain_id, source = ?endpoint.source, "Resolved transfer RPC endpoint");
        Ok(endpoint)
    }

    fn primary_endpoint(&self, chain: &ChainConfig) -> Option<RpcEndpoint> {
        self.settings
            .primary_url(chain.chain_id)
            .map(|url| RpcEndpoint {
                url: url.to_string(),
                source: RpcSource::Primary,
            })
    }

    fn keyed_endpoint(&self, chain: &ChainConfig) -> Option<RpcEndpoint> {
        self.settings
            .api_key
            .as_deref()
            .and_then(|key| chain.keyed_rpc_url(key))
            .map(|url| RpcEndpoint {
                url,
                source: RpcSource::Keyed,
            })
    }
}

impl Default for ChainRegistry {
    fn default() -> Self {
        Self::new(RpcSettings::default())
    }
}
