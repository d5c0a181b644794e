//! Common test utilities for relay integration tests

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::json;

use donation_relay::{
    routes, AppState, DispatchError, EmailMessage, EmailSender, OrderDetails, OrderVerifier,
    VerifyError,
};

pub const FROM_EMAIL: &str = "donations@example.org";
pub const CONTACT_EMAIL: &str = "team@example.org";

/// What the mock provider reports for any order
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Lookup succeeds with this status string
    Status(String),
    /// Token exchange fails
    AuthFailure,
    /// Order lookup fails
    ProviderFailure,
}

impl MockOutcome {
    pub fn completed() -> Self {
        MockOutcome::Status("COMPLETED".to_string())
    }

    pub fn status(s: &str) -> Self {
        MockOutcome::Status(s.to_string())
    }
}

/// Mock order verifier that counts calls
#[derive(Clone)]
pub struct MockVerifier {
    outcome: MockOutcome,
    calls: Arc<AtomicUsize>,
}

impl MockVerifier {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderVerifier for MockVerifier {
    async fn verify_order(&self, order_id: &str) -> Result<OrderDetails, VerifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            MockOutcome::Status(status) => Ok(OrderDetails::from_payload(
                json!({ "id": order_id, "status": status }),
            )),
            MockOutcome::AuthFailure => Err(VerifyError::Authentication(
                "mock token exchange rejected".to_string(),
            )),
            MockOutcome::ProviderFailure => {
                Err(VerifyError::Provider("mock lookup failed".to_string()))
            }
        }
    }
}

/// Mock email sender that captures sent messages
#[derive(Default, Clone)]
pub struct MockEmailSender {
    pub sent: Arc<RwLock<Vec<EmailMessage>>>,
    fail: Arc<AtomicBool>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sender whose every send fails at the transport level
    pub fn failing() -> Self {
        let sender = Self::default();
        sender.fail.store(true, Ordering::SeqCst);
        sender
    }

    pub fn sent_count(&self) -> usize {
        self.sent.read().unwrap().len()
    }

    pub fn last(&self) -> Option<EmailMessage> {
        self.sent.read().unwrap().last().cloned()
    }
}

impl EmailSender for MockEmailSender {
    fn send(&self, message: &EmailMessage) -> Result<(), DispatchError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DispatchError::Transport("mock transport down".to_string()));
        }
        self.sent.write().unwrap().push(message.clone());
        Ok(())
    }
}

/// Create a test server with the given provider outcome and email sender
pub fn create_test_server_with(
    outcome: MockOutcome,
    email_sender: MockEmailSender,
) -> (TestServer, MockEmailSender, MockVerifier) {
    let verifier = MockVerifier::new(outcome);

    let state = Arc::new(AppState::new(
        verifier.clone(),
        email_sender.clone(),
        FROM_EMAIL.to_string(),
        CONTACT_EMAIL.to_string(),
    ));

    let app = routes::create_router(state);
    let server = TestServer::new(app).expect("Failed to create test server");

    (server, email_sender, verifier)
}

/// Create a test server with a capturing email sender
pub fn create_test_server(outcome: MockOutcome) -> (TestServer, MockEmailSender, MockVerifier) {
    create_test_server_with(outcome, MockEmailSender::new())
}
