//! Payment order verification

pub mod paypal;

pub use paypal::{PayPalConfig, PayPalVerifier};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Provider status value for a fully captured order
pub const COMPLETED: &str = "COMPLETED";

/// Failures raised while verifying an order with the payment provider
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("provider authentication failed: {0}")]
    Authentication(String),

    #[error("order lookup failed: {0}")]
    Provider(String),
}

/// The provider's view of an order, as returned by the lookup endpoint
#[derive(Debug, Clone)]
pub struct OrderDetails {
    /// Provider status string ("COMPLETED", "PENDING", ...)
    pub status: String,
    /// Full provider payload
    pub raw: Value,
}

impl OrderDetails {
    /// Build from a provider payload; a missing status reads as empty,
    /// which callers treat as not completed.
    pub fn from_payload(raw: Value) -> Self {
        let status = raw
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Self { status, raw }
    }

    pub fn is_completed(&self) -> bool {
        self.status == COMPLETED
    }
}

/// Trait for verifying payment orders
///
/// Each call re-authenticates and performs the lookup; no token caching and
/// no retries.
#[async_trait]
pub trait OrderVerifier: Send + Sync {
    /// Fetch order details for a provider order identifier
    async fn verify_order(&self, order_id: &str) -> Result<OrderDetails, VerifyError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn completed_status_is_recognized() {
        let details = OrderDetails::from_payload(json!({"id": "O1", "status": "COMPLETED"}));
        assert!(details.is_completed());
        assert_eq!(details.status, "COMPLETED");
    }

    #[test]
    fn other_statuses_are_not_completed() {
        let details = OrderDetails::from_payload(json!({"id": "O1", "status": "PENDING"}));
        assert!(!details.is_completed());
    }

    #[test]
    fn missing_status_reads_as_not_completed() {
        let details = OrderDetails::from_payload(json!({"id": "O1"}));
        assert!(!details.is_completed());
        assert_eq!(details.status, "");
    }
}
