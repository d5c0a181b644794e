//! Donation checkout confirmation endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::email::{EmailMessage, EmailSender};
use crate::error::RelayError;
use crate::payments::OrderVerifier;
use crate::state::AppState;

use super::require;

#[derive(Deserialize)]
pub struct CheckoutRequest {
    #[serde(rename = "orderID", default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
}

#[derive(Serialize)]
pub struct CheckoutResponse {
    pub success: bool,
    #[serde(rename = "transactionID")]
    pub transaction_id: String,
    pub message: String,
}

/// POST /api/paypal-webhook
///
/// Verifies the order with the payment provider, then sends the donor a
/// thank-you receipt. Verification strictly precedes the email send, so a
/// failed or incomplete order never produces mail.
pub async fn confirm_donation<V, E>(
    State(state): State<Arc<AppState<V, E>>>,
    Json(req): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, RelayError>
where
    V: OrderVerifier,
    E: EmailSender,
{
    let order_id = require(&req.order_id)?;
    let email = require(&req.email)?;
    let name = require(&req.name)?;
    let amount = req.amount.ok_or(RelayError::MissingFields)?;

    let order = state.verifier.verify_order(order_id).await?;

    if !order.is_completed() {
        tracing::info!(order_id, status = %order.status, "Order not completed, skipping email");
        return Err(RelayError::OrderNotCompleted);
    }

    // The orderID doubles as the transaction id shown to the donor
    let receipt = EmailMessage::donation_receipt(&state.from_email, email, name, amount, order_id);
    state.email_sender.send(&receipt)?;

    tracing::info!(order_id, donor = %email, "Donation confirmed and receipt sent");

    Ok(Json(CheckoutResponse {
        success: true,
        transaction_id: order_id.to_string(),
        message: "Donation received successfully".to_string(),
    }))
}
