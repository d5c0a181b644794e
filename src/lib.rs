//! Donation Relay
//!
//! Backend for a charity website's donation and contact flows: verifies
//! PayPal orders before sending donation receipts, and forwards join/contact
//! requests to a configured inbox over SMTP.

pub mod config;
pub mod email;
pub mod error;
pub mod payments;
pub mod routes;
pub mod state;

pub use config::Config;
pub use email::{
    ConsoleEmailSender, DispatchError, EmailMessage, EmailSender, SmtpConfig, SmtpEmailSender,
};
pub use payments::{OrderDetails, OrderVerifier, PayPalConfig, PayPalVerifier, VerifyError};
pub use state::AppState;
