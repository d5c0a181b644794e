//! SMTP-based email sender for production

use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    Message, SmtpTransport, Transport,
};

use super::{DispatchError, EmailMessage, EmailSender};

/// Configuration for SMTP email sending
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP server host (e.g., "smtp.gmail.com")
    pub host: String,
    /// SMTP server port (typically 465 for TLS, 587 for STARTTLS)
    pub port: u16,
    /// SMTP username
    pub username: String,
    /// SMTP password (an app password for Gmail)
    pub password: String,
}

impl SmtpConfig {
    /// Create config from environment variables
    ///
    /// Required:
    /// - SMTP_HOST
    /// - SMTP_USERNAME
    /// - SMTP_PASSWORD
    ///
    /// Optional:
    /// - SMTP_PORT (default: 465)
    pub fn from_env() -> Option<Self> {
        // Helper to get non-empty env var
        fn get_env(key: &str) -> Option<String> {
            std::env::var(key).ok().filter(|s| !s.is_empty())
        }

        let host = get_env("SMTP_HOST")?;
        let username = get_env("SMTP_USERNAME")?;
        let password = get_env("SMTP_PASSWORD")?;

        let port = std::env::var("SMTP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(465);

        Some(Self {
            host,
            port,
            username,
            password,
        })
    }
}

/// SMTP email sender for production use
pub struct SmtpEmailSender {
    transport: SmtpTransport,
}

impl SmtpEmailSender {
    /// Create a new SMTP email sender
    pub fn new(config: SmtpConfig) -> Result<Self, DispatchError> {
        let creds = Credentials::new(config.username, config.password);

        let transport = SmtpTransport::relay(&config.host)
            .map_err(|e| DispatchError::Transport(format!("failed to create transport: {e}")))?
            .port(config.port)
            .credentials(creds)
            .build();

        // Test the connection
        transport
            .test_connection()
            .map_err(|e| DispatchError::Transport(format!("connection test failed: {e}")))?;

        tracing::info!(host = %config.host, port = config.port, "SMTP connection established");

        Ok(Self { transport })
    }

    fn parse_mailbox(addr: &str) -> Result<Mailbox, DispatchError> {
        addr.parse()
            .map_err(|e| DispatchError::InvalidAddress(format!("{addr}: {e}")))
    }
}

impl EmailSender for SmtpEmailSender {
    fn send(&self, message: &EmailMessage) -> Result<(), DispatchError> {
        let mut builder = Message::builder()
            .from(Self::parse_mailbox(&message.from)?)
            .to(Self::parse_mailbox(&message.to)?)
            .subject(&message.subject);

        if let Some(reply_to) = &message.reply_to {
            builder = builder.reply_to(Self::parse_mailbox(reply_to)?);
        }

        let email = builder
            .multipart(MultiPart::alternative_plain_html(
                message.text_body.clone(),
                message.html_body.clone(),
            ))
            .map_err(|e| DispatchError::Build(e.to_string()))?;

        self.transport
            .send(&email)
            .map_err(|e| DispatchError::Transport(e.to_string()))?;

        tracing::info!(to = %message.to, subject = %message.subject, "Email sent");
        Ok(())
    }
}
