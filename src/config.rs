//! Service configuration

/// Top-level service settings
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on
    pub port: u16,

    /// Directory of static site assets
    pub static_dir: String,

    /// From address on outgoing mail
    pub from_email: String,

    /// Inbox that receives join/contact notifications
    pub contact_email: String,
}

impl Config {
    /// Create config from environment variables
    ///
    /// Reads PORT (default 3000), STATIC_DIR (default "static"),
    /// FROM_EMAIL and CONTACT_EMAIL. The addresses fall back to
    /// SMTP_USERNAME, which covers the common single-mailbox setup.
    pub fn from_env() -> Self {
        fn get_env(key: &str) -> Option<String> {
            std::env::var(key).ok().filter(|s| !s.is_empty())
        }

        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let static_dir = get_env("STATIC_DIR").unwrap_or_else(|| "static".to_string());

        let mailbox = get_env("SMTP_USERNAME").unwrap_or_default();
        let from_email = get_env("FROM_EMAIL").unwrap_or_else(|| mailbox.clone());
        let contact_email = get_env("CONTACT_EMAIL").unwrap_or(mailbox);

        Self {
            port,
            static_dir,
            from_email,
            contact_email,
        }
    }
}
