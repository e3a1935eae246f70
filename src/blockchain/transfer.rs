// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Gas-less token transfers.
//!
//! The wallet never pays gas: the orchestrator resolves chain, token precision
//! and amount, then hands an [`AuthorizationRequest`] to the relayer, which
//! coordinates signing and broadcasts. Steps run strictly in order since each
//! depends on the previous one. Nothing is retried.

use std::sync::Arc;

use alloy::primitives::{Address, B256};

use super::amount::{parse_units, validate_amount};
use super::error::WalletError;
use super::registry::ChainRegistry;
use super::relayer::{AuthorizationRequest, Relayer, SessionCredential};
use super::token::{DecimalsLookup, FallbackCause, TokenMetadataResolver};
use super::types::{ChainId, DEFAULT_CHAIN_ID};

/// The sending threshold-signed account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignerAccount {
    pub address: Address,
    /// Public key of the account's threshold key, as issued by the signing service
    pub public_key: String,
}

/// Optional transfer parameters.
#[derive(Debug, Clone, Default)]
pub struct TransferOptions {
    /// Target chain; the default chain when unset
    pub chain_id: Option<ChainId>,
    /// Token contract; the chain's default token when unset
    pub token: Option<Address>,
    /// Token precision; skips discovery when set
    pub token_decimals: Option<u8>,
    /// Delegated signing credential; required
    pub session_credential: Option<SessionCredential>,
}

/// Outcome of a relayed transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferResult {
    pub tx_hash: B256,
    pub chain_id: ChainId,
    pub token: Address,
    pub explorer_url: String,
}

/// Coordinates registry, token metadata and relayer for one transfer.
#[derive(Clone)]
pub struct TransferOrchestrator {
    registry: Arc<ChainRegistry>,
    tokens: TokenMetadataResolver,
    relayer: Arc<dyn Relayer>,
}

impl TransferOrchestrator {
    pub fn new(
        registry: Arc<ChainRegistry>,
        tokens: TokenMetadataResolver,
        relayer: Arc<dyn Relayer>,
    ) -> Self {
        Self {
            registry,
            tokens,
            relayer,
        }
    }

    /// Transfer `amount` (a decimal string) of a token from `account` to
    /// `recipient` through the relayer.
    ///
    /// Credential, amount syntax and chain support are checked before any
    /// network call. Relayer failures are returned as-is.
    pub async fn transfer_token(
        &self,
        account: &SignerAccount,
        recipient: Address,
        amount: &str,
        options: TransferOptions,
    ) -> Result<TransferResult, WalletError> {
        let session_credential = options
            .session_credential
            .ok_or(WalletError::MissingCredential)?;
        validate_amount(amount)?;

        let chain_id = options.chain_id.unwrap_or(DEFAULT_CHAIN_ID);
        if !self.registry.is_registered(chain_id) {
            return Err(WalletError::UnsupportedChain(chain_id));
        }
        let chain = self.registry.resolve_chain(Some(chain_id));
        let token = options
            .token
            .unwrap_or(chain.default_token.contract_address);

        let decimals = match options.token_decimals {
            Some(decimals) => decimals,
            None if token == chain.default_token.contract_address => chain.default_token.decimals,
            None => match self.tokens.resolve_decimals(token, Some(chain_id)).await {
                // No endpoint means no lookup happened: never guess precision here.
                DecimalsLookup::Fallback {
                    cause: FallbackCause::Configuration,
                    reason,
                    ..
                } => {
                    return Err(WalletError::MissingConfiguration(format!(
                        "cannot discover decimals for token {token} on chain {chain_id} \
                         ({reason}); pass token_decimals explicitly"
                    )));
                }
                lookup => lookup.decimals(),
            },
        };

        let amount = parse_units(amount, decimals)?;
        let endpoint = self.registry.resolve_transfer_endpoint(chain_id)?;

        let request = AuthorizationRequest {
            signer_address: account.address,
            signer_public_key: account.public_key.clone(),
            session_credential,
            chain_id,
            rpc_endpoint: endpoint.url,
            token_contract: token,
            recipient,
            amount,
        };

        let tx_hash = self
            .relayer
            .execute_transfer(&request)
            .await
            .map_err(|e| {
                tracing::warn!(
                    chain_id,
                    token = %token,
                    from = %account.address,
                    error = %e,
                    "Relayer failed to execute transfer"
                );
                e
            })?;

        tracing::info!(
            chain_id,
            token = %token,
            from = %account.address,
            to = %recipient,
            tx_hash = %tx_hash,
            "Transfer relayed"
        );

        Ok(TransferResult {
            tx_hash,
            chain_id,
            token,
            explorer_url: chain.tx_explorer_url(&tx_hash.to_string()),
        })
    }
}
