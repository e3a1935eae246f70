// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Gasless Wallet Server - Relayed Token Transfers on EVM Chains
//!
//! Reads native and ERC-20 balances for threshold-signed accounts and moves
//! tokens through a relayer service, so the account never needs native gas.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `blockchain` - Chain registry, balance reads and transfer orchestration
//! - `config` - Environment-driven runtime configuration
//! - `error` - HTTP error mapping

pub mod api;
pub mod blockchain;
pub mod config;
pub mod error;
pub mod state;
