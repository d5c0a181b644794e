//! PayPal order verification over the REST API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use super::{OrderDetails, OrderVerifier, VerifyError};

/// Sandbox API host; override with PAYPAL_API_BASE for production
/// ("https://api.paypal.com").
const SANDBOX_API_BASE: &str = "https://api.sandbox.paypal.com";

/// PayPal REST API credentials and endpoint
#[derive(Debug, Clone)]
pub struct PayPalConfig {
    pub client_id: String,
    pub client_secret: String,
    pub api_base: String,
}

impl PayPalConfig {
    /// Create config from environment variables
    ///
    /// Reads PAYPAL_CLIENT_ID, PAYPAL_CLIENT_SECRET and PAYPAL_API_BASE
    /// (default: sandbox). Missing credentials are kept empty so the token
    /// exchange fails per its error contract rather than at startup.
    pub fn from_env() -> Self {
        let client_id = std::env::var("PAYPAL_CLIENT_ID").unwrap_or_default();
        let client_secret = std::env::var("PAYPAL_CLIENT_SECRET").unwrap_or_default();
        if client_id.is_empty() || client_secret.is_empty() {
            tracing::warn!("PayPal credentials not set; order verification will fail");
        }

        let api_base = std::env::var("PAYPAL_API_BASE")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| SANDBOX_API_BASE.to_string());

        Self {
            client_id,
            client_secret,
            api_base,
        }
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// Order verifier backed by PayPal's OAuth and checkout-orders endpoints
pub struct PayPalVerifier {
    http: Client,
    config: PayPalConfig,
}

impl PayPalVerifier {
    /// Create a new verifier
    pub fn new(config: PayPalConfig) -> Result<Self, VerifyError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| VerifyError::Provider(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Exchange client credentials for a bearer token
    async fn access_token(&self) -> Result<String, VerifyError> {
        let url = format!("{}/v1/oauth2/token", self.config.api_base);

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| VerifyError::Authentication(format!("token request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(VerifyError::Authentication(format!(
                "token endpoint returned {}",
                response.status()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| VerifyError::Authentication(format!("invalid token payload: {e}")))?;

        token
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| VerifyError::Authentication("no access token in response".to_string()))
    }
}

#[async_trait]
impl OrderVerifier for PayPalVerifier {
    async fn verify_order(&self, order_id: &str) -> Result<OrderDetails, VerifyError> {
        let token = self.access_token().await?;

        let url = format!("{}/v2/checkout/orders/{}", self.config.api_base, order_id);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| VerifyError::Provider(format!("order request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(VerifyError::Provider(format!(
                "order endpoint returned {}",
                response.status()
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| VerifyError::Provider(format!("invalid order payload: {e}")))?;

        Ok(OrderDetails::from_payload(payload))
    }
}
