//! Relay error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::email::DispatchError;
use crate::payments::VerifyError;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Order not completed")]
    OrderNotCompleted,

    #[error(transparent)]
    Verify(#[from] VerifyError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            RelayError::MissingFields => (StatusCode::BAD_REQUEST, "Missing required fields"),
            RelayError::OrderNotCompleted => (StatusCode::BAD_REQUEST, "Order not completed"),
            RelayError::Verify(VerifyError::Authentication(detail)) => {
                tracing::error!("Provider authentication failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Payment provider authentication failed",
                )
            }
            RelayError::Verify(VerifyError::Provider(detail)) => {
                tracing::error!("Order verification failed: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "Payment verification failed")
            }
            RelayError::Dispatch(detail) => {
                tracing::error!("Email dispatch failed: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to send email")
            }
            RelayError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}
