//! Donation Relay
//!
//! Backend for a charity website's donation and contact flows: verifies
//! PayPal orders before sending donation receipts, and forwards join/contact
//! requests to a configured inbox over SMTP.

use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use donation_relay::{
    routes, AppState, Config, ConsoleEmailSender, EmailSender, PayPalConfig, PayPalVerifier,
    SmtpConfig, SmtpEmailSender,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "donation_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    tracing::info!(?config, "Loaded configuration");

    // Payment verifier
    let verifier = PayPalVerifier::new(PayPalConfig::from_env())
        .map_err(|e| anyhow::anyhow!("failed to create PayPal verifier: {e}"))?;

    // Email sender: SMTP when configured, console otherwise
    let email_sender: Box<dyn EmailSender> = match SmtpConfig::from_env() {
        Some(smtp) => Box::new(
            SmtpEmailSender::new(smtp)
                .map_err(|e| anyhow::anyhow!("failed to create SMTP sender: {e}"))?,
        ),
        None => {
            tracing::warn!("SMTP not configured; logging emails to console");
            Box::new(ConsoleEmailSender::new())
        }
    };

    // Create app state
    let state = Arc::new(AppState::new(
        verifier,
        email_sender,
        config.from_email.clone(),
        config.contact_email.clone(),
    ));

    // Create router
    let app = routes::create_router_with_static_path(state, &config.static_dir);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Relay listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
