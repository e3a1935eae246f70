// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Chain and token types, plus the built-in network table.

use alloy::primitives::{address, Address};
use serde::Serialize;
use utoipa::ToSchema;

/// EIP-155 chain identifier.
pub type ChainId = u64;

/// Chain used when a caller does not name one (Base mainnet).
pub const DEFAULT_CHAIN_ID: ChainId = 8453;

/// Precision substituted when token decimals cannot be discovered.
pub const FALLBACK_TOKEN_DECIMALS: u8 = 18;

/// An ERC-20 deployment: contract address and decimal precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenDescriptor {
    pub contract_address: Address,
    pub decimals: u8,
}

/// Static network configuration.
///
/// Immutable once registered. `rpc_url` is the vetted public endpoint; the
/// endpoint actually used for a call is chosen by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    /// EIP-155 chain ID
    pub chain_id: ChainId,
    /// Network name for display
    pub name: &'static str,
    /// Native currency symbol
    pub native_symbol: &'static str,
    /// Native currency precision
    pub native_decimals: u8,
    /// Public RPC endpoint
    pub rpc_url: &'static str,
    /// Environment variable holding the operator's primary endpoint
    pub rpc_env: &'static str,
    /// Base URL of the API-keyed fallback endpoint (key is appended)
    pub keyed_rpc_base: Option<&'static str>,
    /// Block explorer URL
    pub explorer_url: &'static str,
    /// Token used when a caller does not name one
    pub default_token: TokenDescriptor,
}

impl ChainConfig {
    /// Build the keyed fallback endpoint for an API key, if this chain has one.
    pub fn keyed_rpc_url(&self, api_key: &str) -> Option<String> {
        self.keyed_rpc_base
            .map(|base| format!("{}/{}", base.trim_end_matches('/'), api_key))
    }

    /// Block explorer link for a transaction hash.
    pub fn tx_explorer_url(&self, tx_hash: &str) -> String {
        format!("{}/tx/{}", self.explorer_url, tx_hash)
    }
}

/// Base mainnet (default chain).
pub const BASE_MAINNET: ChainConfig = ChainConfig {
    chain_id: DEFAULT_CHAIN_ID,
    name: "Base",
    native_symbol: "ETH",
    native_decimals: 18,
    rpc_url: "https://mainnet.base.org",
    rpc_env: "BASE_RPC_URL",
    keyed_rpc_base: Some("https://base-mainnet.g.alchemy.com/v2"),
    explorer_url: "https://basescan.org",
    default_token: TokenDescriptor {
        // Circle USDC on Base
        contract_address: address!("833589fCD6eDb6E08f4c7C32D4f71b54bdA02913"),
        decimals: 6,
    },
};

/// Base Sepolia testnet.
pub const BASE_SEPOLIA: ChainConfig = ChainConfig {
    chain_id: 84532,
    name: "Base Sepolia",
    native_symbol: "ETH",
    native_decimals: 18,
    rpc_url: "https://sepolia.base.org",
    rpc_env: "BASE_SEPOLIA_RPC_URL",
    keyed_rpc_base: Some("https://base-sepolia.g.alchemy.com/v2"),
    explorer_url: "https://sepolia.basescan.org",
    default_token: TokenDescriptor {
        contract_address: address!("036CbD53842c5426634e7929541eC2318f3dCF7e"),
        decimals: 6,
    },
};

/// Ethereum mainnet.
pub const ETHEREUM_MAINNET: ChainConfig = ChainConfig {
    chain_id: 1,
    name: "Ethereum",
    native_symbol: "ETH",
    native_decimals: 18,
    rpc_url: "https://ethereum-rpc.publicnode.com",
    rpc_env: "ETHEREUM_RPC_URL",
    keyed_rpc_base: Some("https://eth-mainnet.g.alchemy.com/v2"),
    explorer_url: "https://etherscan.io",
    default_token: TokenDescriptor {
        contract_address: address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
        decimals: 6,
    },
};

/// Networks known at startup, default first.
pub const BUILTIN_CHAINS: [ChainConfig; 3] = [BASE_MAINNET, BASE_SEPOLIA, ETHEREUM_MAINNET];

/// Public view of a registered chain.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChainSummary {
    /// Chain ID
    pub chain_id: ChainId,
    /// Network name
    pub name: String,
    /// Native currency symbol
    pub native_symbol: String,
    /// Native currency decimals
    pub native_decimals: u8,
    /// Default token contract address
    pub default_token: String,
    /// Default token decimals
    pub default_token_decimals: u8,
    /// Whether this is the default chain
    pub is_default: bool,
}

impl From<&ChainConfig> for ChainSummary {
    fn from(chain: &ChainConfig) -> Self {
        Self {
            chain_id: chain.chain_id,
            name: chain.name.to_string(),
            native_symbol: chain.native_symbol.to_string(),
            native_decimals: chain.native_decimals,
            default_token: chain.default_token.contract_address.to_checksum(None),
            default_token_decimals: chain.default_token.decimals,
            is_default: chain.chain_id == DEFAULT_CHAIN_ID,
        }
    }
}
