//! Console-based email sender for development

use super::{DispatchError, EmailMessage, EmailSender};

/// Email sender that logs to console (for development)
pub struct ConsoleEmailSender;

impl ConsoleEmailSender {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleEmailSender {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailSender for ConsoleEmailSender {
    fn send(&self, message: &EmailMessage) -> Result<(), DispatchError> {
        println!();
        println!("========================================");
        println!("  EMAIL TO: {}", message.to);
        println!("  SUBJECT: {}", message.subject);
        println!("----------------------------------------");
        println!("{}", message.text_body);
        println!("========================================");
        println!();

        tracing::info!(to = %message.to, subject = %message.subject, "Email logged to console");

        Ok(())
    }
}
