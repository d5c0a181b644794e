//! Shared application state

/// Per-process state handed to every handler
///
/// Holds the injected dependencies (order verifier, email sender) and the
/// fixed addresses messages are sent from and to. Handlers only read from
/// it; nothing here is mutated across requests.
pub struct AppState<V, E> {
    /// Payment order verifier
    pub verifier: V,
    /// Email transport
    pub email_sender: E,
    /// From address on outgoing mail
    pub from_email: String,
    /// Inbox that receives join/contact notifications
    pub contact_email: String,
}

impl<V, E> AppState<V, E> {
    pub fn new(verifier: V, email_sender: E, from_email: String, contact_email: String) -> Self {
        Self {
            verifier,
            email_sender,
            from_email,
            contact_email,
        }
    }
}
