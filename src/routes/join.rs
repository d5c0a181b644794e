//! Join/contact form endpoint

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
pub struct JoinRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "helpType", default)]
    pub help_type: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
}

#[derive(Serialize)]
pub struct JoinResponse {
    pub success: bool,
    pub message: String,
}

/// POST /api/send-email
///
/// Forwards a join/contact request to the configured inbox. No payment
/// step; the only outbound call is the email send.
pub async fn send_join_request<V, E>(
    State(state): State<Arc<AppState<V, E>>>,
    Json(req): Json<JoinRequest>,
) -> Result<Json<JoinResponse>, RelayError>
where
    V: OrderVerifier,
    E: EmailSender,
{
    let name = require(&req.name)?;
    let email = require(&req.email)?;
    let message = require(&req.message)?;

    let notification = EmailMessage::join_request(
        &state.from_email,
        &state.contact_email,
        name,
        email,
        message,
        req.help_type.as_deref(),
        req.subject.as_deref(),
    );
    state.email_sender.send(&notification)?;

    tracing::info!(from = %email, "Join request forwarded");

    Ok(Json(JoinResponse {
        success: true,
        message: "Thank you for joining us!".to_string(),
    }))
}
