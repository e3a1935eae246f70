// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory collaborators for unit tests.

use std::{
    io,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use alloy::primitives::{Address, B256, U256};
use async_trait::async_trait;

use super::node::{ExecutionNode, NodeError};
use super::relayer::{AuthorizationRequest, Relayer, RelayerError};
use super::types::DEFAULT_CHAIN_ID;
use crate::config::RpcSettings;

/// Settings with a primary endpoint for the default chain.
pub fn rpc_settings() -> RpcSettings {
    let mut settings = RpcSettings::default();
    settings
        .primary_urls
        .insert(DEFAULT_CHAIN_ID, "https://rpc.base.example".to_string());
    settings
}

/// Log sink for asserting on emitted events.
///
/// `install` sets a thread-local subscriber; `#[tokio::test]` runs on the
/// current thread, so events from the awaited future land here.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let sink = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Execution node returning canned values and counting calls.
///
/// Reads without a canned value fail with a transport-style error.
#[derive(Default)]
pub struct FakeNode {
    native: Option<U256>,
    token: Option<U256>,
    decimals: Option<u8>,
    calls: AtomicUsize,
    last_rpc_url: Mutex<Option<String>>,
}

impl FakeNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_native(mut self, balance: U256) -> Self {
        self.native = Some(balance);
        self
    }

    pub fn with_token(mut self, balance: U256) -> Self {
        self.token = Some(balance);
        self
    }

    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = Some(decimals);
        self
    }

    pub fn failing_decimals(mut self) -> Self {
        self.decimals = None;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_rpc_url(&self) -> Option<String> {
        self.last_rpc_url.lock().unwrap().clone()
    }

    fn record(&self, rpc_url: &str) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_rpc_url.lock().unwrap() = Some(rpc_url.to_string());
    }
}

#[async_trait]
impl ExecutionNode for FakeNode {
    async fn native_balance(&self, rpc_url: &str, _owner: Address) -> Result<U256, NodeError> {
        self.record(rpc_url);
        self.native
            .ok_or_else(|| NodeError::Rpc("connection refused".to_string()))
    }

    async fn token_balance(
        &self,
        rpc_url: &str,
        _token: Address,
        _owner: Address,
    ) -> Result<U256, NodeError> {
        self.record(rpc_url);
        self.token
            .ok_or_else(|| NodeError::Contract("execution reverted".to_string()))
    }

    async fn token_decimals(&self, rpc_url: &str, _token: Address) -> Result<u8, NodeError> {
        self.record(rpc_url);
        self.decimals
            .ok_or_else(|| NodeError::Rpc("connection refused".to_string()))
    }
}

/// Relayer that records requests and answers with a fixed hash or error.
pub struct FakeRelayer {
    response: Result<B256, String>,
    requests: Mutex<Vec<AuthorizationRequest>>,
}

impl FakeRelayer {
    pub fn returning(tx_hash: B256) -> Self {
        Self {
            response: Ok(tx_hash),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<AuthorizationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Relayer for FakeRelayer {
    async fn execute_transfer(&self, request: &AuthorizationRequest) -> Result<B256, RelayerError> {
        self.requests.lock().unwrap().push(request.clone());
        self.response.clone().map_err(RelayerError::Rejected)
    }
}
