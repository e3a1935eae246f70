// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::str::FromStr;

use alloy::primitives::Address;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    blockchain::{ChainSummary, RpcSource, SessionCredential, WalletBalances, WalletError},
    error::ApiError,
    state::AppState,
};

pub mod balance;
pub mod chains;
pub mod health;
pub mod transfers;

pub fn router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route("/chains", get(chains::list_chains))
        .route(
            "/wallets/{address}/balances",
            get(balance::get_wallet_balances),
        )
        .route("/transfers", post(transfers::create_transfer));

    Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .nest("/v1", v1_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(CorsLayer::permissive())
}

/// Parse a hex address from a request, naming the offending field on failure.
pub(crate) fn parse_address(raw: &str, field: &str) -> Result<Address, ApiError> {
    Address::from_str(raw.trim()).map_err(|e| {
        ApiError::from(WalletError::InvalidAddress(format!("{field} `{raw}` ({e})")))
    })
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        health::liveness,
        chains::list_chains,
        balance::get_wallet_balances,
        transfers::create_transfer
    ),
    components(
        schemas(
            ChainSummary,
            WalletBalances,
            SessionCredential,
            RpcSource,
            health::LivenessResponse,
            health::ReadinessReport,
            health::ChainReadiness,
            chains::ChainListResponse,
            transfers::TransferAccount,
            transfers::TransferRequest,
            transfers::TransferResponse
        )
    ),
    tags(
        (name = "Health", description = "Liveness and per-chain readiness"),
        (name = "Chains", description = "Supported networks"),
        (name = "Balances", description = "Native and token balances"),
        (name = "Transfers", description = "Gas-less relayed token transfers")
    )
)]
struct ApiDoc;


#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::testing::{FakeNode, FakeRelayer};
    use alloy::primitives::B256;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn liveness_route_sets_request_id() {
        let app = router(test_support::state_with(
            FakeNode::new(),
            FakeRelayer::returning(B256::ZERO),
        ));

        let response = app
            .oneshot(Request::get("/health/live").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn chains_route_is_nested_under_v1() {
        let app = router(test_support::state_with(
            FakeNode::new(),
            FakeRelayer::returning(B256::ZERO),
        ));

        let response = app
            .oneshot(Request::get("/v1/chains").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["default_chain_id"], 8453);
    }

    #[tokio::test]
    async fn missing_credential_maps_to_json_error() {
        let app = router(test_support::state_with(
            FakeNode::new(),
            FakeRelayer::returning(B256::ZERO),
        ));
        let body = serde_json::json!({
            "account": {
                "address": "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
                "public_key": "0x04ff"
            },
            "to": "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
            "amount": "1"
        });

        let response = app
            .oneshot(
                Request::post("/v1/transfers")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error_code"], "missing_credential");
    }

    #[test]
    fn parse_address_accepts_lowercase_and_checksum() {
        assert!(parse_address("0x833589fcd6edb6e08f4c7c32d4f71b54bda02913", "token").is_ok());
        assert!(parse_address(" 0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913 ", "token").is_ok());
    }

    #[test]
    fn parse_address_names_the_field() {
        let err = parse_address("0x1234", "recipient").unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code, "invalid_address");
        assert!(err.message.contains("recipient"));
    }
}
