//! HTTP routes for the relay

mod checkout;
mod join;

use std::sync::Arc;

use axum::routing::post;
use axum::Router;
use tower_http::services::ServeDir;

use crate::email::EmailSender;
use crate::error::RelayError;
use crate::payments::OrderVerifier;
use crate::state::AppState;

/// Pull a required string field, rejecting absent or blank values
fn require(field: &Option<String>) -> Result<&str, RelayError> {
    field
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .ok_or(RelayError::MissingFields)
}

/// Create the router with all routes
pub fn create_router<V, E>(state: Arc<AppState<V, E>>) -> Router
where
    V: OrderVerifier + 'static,
    E: EmailSender + 'static,
{
    create_router_with_static_path(state, "static")
}

/// Create the router with a custom static file path
pub fn create_router_with_static_path<V, E>(
    state: Arc<AppState<V, E>>,
    static_path: &str,
) -> Router
where
    V: OrderVerifier + 'static,
    E: EmailSender + 'static,
{
    Router::new()
        .route("/api/paypal-webhook", post(checkout::confirm_donation))
        .route("/api/send-email", post(join::send_join_request))
        // Serve the static site (pages, CSS, JS)
        .fallback_service(ServeDir::new(static_path))
        .with_state(state)
}
