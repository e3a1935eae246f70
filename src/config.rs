// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is read from the environment
//! exactly once at startup into [`RuntimeConfig`]; no component reads the
//! environment afterwards.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `BASE_RPC_URL` | Primary RPC endpoint for the default chain (Base) | None |
//! | `BASE_SEPOLIA_RPC_URL` | Primary RPC endpoint for Base Sepolia | None |
//! | `ETHEREUM_RPC_URL` | Primary RPC endpoint for Ethereum mainnet | None |
//! | `ALCHEMY_API_KEY` | API key used to build keyed fallback endpoints | None |
//! | `RELAYER_URL` | Base URL of the relayer service | Required |
//! | `RELAYER_API_KEY` | Bearer token sent to the relayer | Optional |
//! | `RELAYER_TIMEOUT_MS` | Relayer request timeout in milliseconds | `30000` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |
//!
//! Blank values are treated as unset.

use std::collections::BTreeMap;

use crate::blockchain::{ChainId, BUILTIN_CHAINS};

/// API key for keyed fallback RPC endpoints.
pub const RPC_API_KEY_ENV: &str = "ALCHEMY_API_KEY";

/// Relayer service base URL.
pub const RELAYER_URL_ENV: &str = "RELAYER_URL";

/// Optional bearer token for the relayer.
pub const RELAYER_API_KEY_ENV: &str = "RELAYER_API_KEY";

/// Relayer request timeout override.
pub const RELAYER_TIMEOUT_ENV: &str = "RELAYER_TIMEOUT_MS";

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_RELAYER_TIMEOUT_MS: u64 = 30_000;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::to_ascii_lowercase).as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// RPC endpoint inputs, injected into the chain registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RpcSettings {
    /// Operator-configured primary endpoints keyed by chain ID
    pub primary_urls: BTreeMap<ChainId, String>,
    /// API key for keyed fallback endpoints
    pub api_key: Option<String>,
}

impl RpcSettings {
    /// Collect primary endpoints for every built-in chain plus the API key.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let primary_urls = BUILTIN_CHAINS
            .iter()
            .filter_map(|chain| lookup(chain.rpc_env).map(|url| (chain.chain_id, url)))
            .collect();

        Self {
            primary_urls,
            api_key: lookup(RPC_API_KEY_ENV),
        }
    }

    pub fn primary_url(&self, chain_id: ChainId) -> Option<&str> {
        self.primary_urls.get(&chain_id).map(String::as_str)
    }
}

/// Relayer connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayerSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_ms: u64,
}

/// Process-wide configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    pub rpc: RpcSettings,
    pub relayer: RelayerSettings,
}

/// Startup configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Required environment variable `{0}` is not set")]
    Missing(&'static str),

    #[error("Environment variable `{name}` is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

impl RuntimeConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_optional)
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(PORT_ENV) {
            Some(raw) => raw.parse().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                name: PORT_ENV,
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let timeout_ms = match lookup(RELAYER_TIMEOUT_ENV) {
            Some(raw) => raw.parse().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                name: RELAYER_TIMEOUT_ENV,
                reason: e.to_string(),
            })?,
            None => DEFAULT_RELAYER_TIMEOUT_MS,
        };

        let relayer_url = lookup(RELAYER_URL_ENV).ok_or(ConfigError::Missing(RELAYER_URL_ENV))?;
        url::Url::parse(&relayer_url).map_err(|e| ConfigError::Invalid {
            name: RELAYER_URL_ENV,
            reason: e.to_string(),
        })?;

        Ok(Self {
            host: lookup(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            log_format: LogFormat::parse(lookup(LOG_FORMAT_ENV).as_deref()),
            rpc: RpcSettings::from_lookup(&lookup),
            relayer: RelayerSettings {
                base_url: relayer_url,
                api_key: lookup(RELAYER_API_KEY_ENV),
                timeout_ms,
            },
        })
    }
}

/// Read an environment variable, treating blank values as unset.
fn env_optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
