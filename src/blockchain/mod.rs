// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! EVM integration for gas-less wallets.
//!
//! This module provides functionality for:
//! - Resolving chain configuration and RPC endpoints
//! - Querying native and ERC-20 balances
//! - Discovering token precision
//! - Relaying token transfers without the wallet paying gas

pub mod amount;
pub mod balance;
pub mod erc20;
pub mod error;
pub mod node;
pub mod registry;
pub mod relayer;
pub mod token;
pub mod transfer;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use amount::{format_units, parse_units, AmountError};
pub use balance::{BalanceReader, WalletBalances};
pub use error::WalletError;
pub use node::{ExecutionNode, HttpExecutionNode, NodeError};
pub use registry::{ChainRegistry, RpcEndpoint, RpcSource};
pub use relayer::{AuthorizationRequest, HttpRelayerClient, Relayer, RelayerError, SessionCredential};
pub use token::{DecimalsLookup, FallbackCause, TokenMetadataResolver};
pub use transfer::{SignerAccount, TransferOptions, TransferOrchestrator, TransferResult};
pub use types::*;
