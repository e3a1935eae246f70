// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::blockchain::WalletError;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub error_code: &'static str,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    error_code: String,
}

impl ApiError {
    pub fn new(status: StatusCode, error_code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            error_code,
        }
    }
}

impl From<WalletError> for ApiError {
    fn from(err: WalletError) -> Self {
        let (status, code) = match &err {
            WalletError::MissingConfiguration(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "missing_configuration")
            }
            WalletError::UnsupportedChain(_) => (StatusCode::BAD_REQUEST, "unsupported_chain"),
            WalletError::MissingCredential => (StatusCode::UNAUTHORIZED, "missing_credential"),
            WalletError::InvalidAmount(_) => (StatusCode::UNPROCESSABLE_ENTITY, "invalid_amount"),
            WalletError::InvalidAddress(_) => (StatusCode::BAD_REQUEST, "invalid_address"),
            WalletError::Node(_) => (StatusCode::BAD_GATEWAY, "execution_node_error"),
            WalletError::Relayer(_) => (StatusCode::BAD_GATEWAY, "relayer_error"),
        };
        Self::new(status, code, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.message,
            error_code: self.error_code.to_string(),
        });
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::{AmountError, RelayerError};
    use axum::body::to_bytes;

    #[test]
    fn wallet_errors_map_to_status_codes() {
        let cases = [
            (
                WalletError::MissingConfiguration("BASE_RPC_URL".into()),
                StatusCode::SERVICE_UNAVAILABLE,
                "missing_configuration",
            ),
            (
                WalletError::UnsupportedChain(137),
                StatusCode::BAD_REQUEST,
                "unsupported_chain",
            ),
            (
                WalletError::MissingCredential,
                StatusCode::UNAUTHORIZED,
                "missing_credential",
            ),
            (
                WalletError::InvalidAmount(AmountError::Empty),
                StatusCode::UNPROCESSABLE_ENTITY,
                "invalid_amount",
            ),
            (
                WalletError::InvalidAddress("recipient `0x12`".into()),
                StatusCode::BAD_REQUEST,
                "invalid_address",
            ),
            (
                WalletError::Relayer(RelayerError::Rejected("nope".into())),
                StatusCode::BAD_GATEWAY,
                "relayer_error",
            ),
        ];

        for (err, status, code) in cases {
            let api = ApiError::from(err);
            assert_eq!(api.status, status);
            assert_eq!(api.error_code, code);
        }
    }

    #[tokio::test]
    async fn into_response_returns_json_body() {
        let response = ApiError::from(WalletError::MissingCredential).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body_bytes.to_vec()).unwrap();
        assert_eq!(
            body,
            r#"{"error":"A session credential is required to transfer","error_code":"missing_credential"}"#
        );
    }
}
