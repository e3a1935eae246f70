// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Errors surfaced by balance reads and transfers.

use super::amount::AmountError;
use super::node::NodeError;
use super::relayer::RelayerError;
use super::types::ChainId;

/// Errors that can occur during wallet operations.
///
/// Decimals discovery never fails: see [`super::token::DecimalsLookup`].
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Chain {0} has no vetted RPC endpoint")]
    UnsupportedChain(ChainId),

    #[error("A session credential is required to transfer")]
    MissingCredential,

    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Execution node error: {0}")]
    Node(#[from] NodeError),

    #[error("Relayer execution failed: {0}")]
    Relayer(#[from] RelayerError),
}
