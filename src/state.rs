// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::blockchain::{
    BalanceReader, ChainRegistry, ExecutionNode, Relayer, TokenMetadataResolver,
    TransferOrchestrator,
};

/// Shared handler state. Everything inside is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ChainRegistry>,
    pub balances: Arc<BalanceReader>,
    pub transfers: Arc<TransferOrchestrator>,
}

impl AppState {
    /// Wire the registry, execution node and relayer together.
    pub fn new(
        registry: ChainRegistry,
        node: Arc<dyn ExecutionNode>,
        relayer: Arc<dyn Relayer>,
    ) -> Self {
        let registry = Arc::new(registry);
        let tokens = TokenMetadataResolver::new(registry.clone(), node.clone());
        let balances = BalanceReader::new(registry.clone(), node, tokens.clone());
        let transfers = TransferOrchestrator::new(registry.clone(), tokens, relayer);

        Self {
            registry,
            balances: Arc::new(balances),
            transfers: Arc::new(transfers),
        }
    }
}
