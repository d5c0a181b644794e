//! Email sending abstractions

pub mod console;
pub mod message;
pub mod smtp;

pub use console::ConsoleEmailSender;
pub use message::{escape_html, EmailMessage};
pub use smtp::{SmtpConfig, SmtpEmailSender};

use thiserror::Error;

/// Failures raised by an email transport
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("transport failure: {0}")]
    Transport(String),
}

/// Trait for dispatching transactional emails
///
/// Exactly one outbound email is sent per successful call; implementations
/// do not retry.
pub trait EmailSender: Send + Sync {
    /// Send a single message, as-is
    fn send(&self, message: &EmailMessage) -> Result<(), DispatchError>;
}

/// Allow using Box<dyn EmailSender> as an EmailSender
impl EmailSender for Box<dyn EmailSender> {
    fn send(&self, message: &EmailMessage) -> Result<(), DispatchError> {
        (**self).send(message)
    }
}
