// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token precision discovery with a safe default.

use std::sync::Arc;

use alloy::primitives::Address;

use super::node::ExecutionNode;
use super::registry::ChainRegistry;
use super::types::{ChainId, FALLBACK_TOKEN_DECIMALS};

/// Why a decimals lookup fell back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackCause {
    /// No vetted endpoint for the chain; no call was made
    Configuration,
    /// The node or the contract call failed
    Node,
}

/// Outcome of a decimals lookup.
///
/// A failed lookup is not an error: the resolver substitutes
/// [`FALLBACK_TOKEN_DECIMALS`] and records why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecimalsLookup {
    /// Read from the token contract
    Fetched(u8),
    /// Lookup failed; the fallback precision applies
    Fallback {
        decimals: u8,
        cause: FallbackCause,
        reason: String,
    },
}

impl DecimalsLookup {
    pub fn decimals(&self) -> u8 {
        match self {
            DecimalsLookup::Fetched(decimals) => *decimals,
            DecimalsLookup::Fallback { decimals, .. } => *decimals,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, DecimalsLookup::Fallback { .. })
    }

    pub fn fallback_cause(&self) -> Option<FallbackCause> {
        match self {
            DecimalsLookup::Fetched(_) => None,
            DecimalsLookup::Fallback { cause, .. } => Some(*cause),
        }
    }
}

/// Resolves ERC-20 decimals on the chain's execution node.
///
/// Results are not cached: precision is looked up per call.
#[derive(Clone)]
pub struct TokenMetadataResolver {
    registry: Arc<ChainRegistry>,
    node: Arc<dyn ExecutionNode>,
}

impl TokenMetadataResolver {
    pub fn new(registry: Arc<ChainRegistry>, node: Arc<dyn ExecutionNode>) -> Self {
        Self { registry, node }
    }

    /// Look up `decimals()` for a token, falling back to 18 on any failure.
    pub async fn resolve_decimals(
        &self,
        token: Address,
        chain_id: Option<ChainId>,
    ) -> DecimalsLookup {
        let rpc_url = match self.registry.resolve_rpc_endpoint(chain_id) {
            Ok(url) => url,
            Err(e) => {
                return Self::fallback(token, chain_id, FallbackCause::Configuration, e.to_string())
            }
        };

        match self.node.token_decimals(&rpc_url, token).await {
            Ok(decimals) => DecimalsLookup::Fetched(decimals),
            Err(e) => Self::fallback(token, chain_id, FallbackCause::Node, e.to_string()),
        }
    }

    fn fallback(
        token: Address,
        chain_id: Option<ChainId>,
        cause: FallbackCause,
        reason: String,
    ) -> DecimalsLookup {
        tracing::warn!(
            token = %token,
            chain_id = ?chain_id,
            cause = ?cause,
            error = %reason,
            fallback_decimals = FALLBACK_TOKEN_DECIMALS,
            "Failed to resolve token decimals, using fallback"
        );
        DecimalsLookup::Fallback {
            decimals: FALLBACK_TOKEN_DECIMALS,
            cause,
            reason,
        }
    }
}
