//! Outbound contact-form delivery through a third-party form relay.

use std::time::Duration;

use http::StatusCode;
use reqwest::header::ACCEPT;
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://formspree.io/f/mdkngpjq";

/// A relay that has not answered by then counts as unreachable.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Endpoint baked in at build time, `CONTACT_RELAY_URL` overrides the default.
pub const RELAY_ENDPOINT: &str = match option_env!("CONTACT_RELAY_URL") {
    Some(url) => url,
    None => DEFAULT_RELAY_ENDPOINT,
};

/// Why the relay did not accept a message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("relay rejected the message with status {0}")]
    Rejected(StatusCode),
    #[error("couldn't reach the relay: {0}")]
    Transport(String),
}

impl DeliveryError {
    /// Text shown under the form.
    pub fn status_text(&self) -> &'static str {
        match self {
            DeliveryError::Rejected(_) => "Failed to send message. Please try again.",
            DeliveryError::Transport(_) => "An error occurred. Please try again later.",
        }
    }
}

#[derive(Serialize, Debug)]
struct ContactPayload<'a> {
    message: &'a str,
}

#[derive(Debug, Clone)]
pub struct RelayClient {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl RelayClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_config() -> Self {
        Self::new(RELAY_ENDPOINT)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POSTs `{"message": ...}` as JSON. Only the status code is inspected.
    pub async fn submit(&self, message: &str) -> Result<(), DeliveryError> {
        log::debug!("sending contact message to {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(&ContactPayload { message })
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            log::warn!("contact relay answered {status}");
            Err(DeliveryError::Rejected(status))
        }
    }
}

impl Default for RelayClient {
    fn default() -> Self {
        Self::from_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ContactForm, SubmitError, SubmitState};
    use httpmock::prelude::*;
    use serde_json::json;

    async fn send(form: &mut ContactForm, relay: &RelayClient) {
        let message = form.begin_submit().expect("form should accept the message");
        assert_eq!(*form.state(), SubmitState::Sending);
        let outcome = relay.submit(&message).await;
        form.finish(outcome);
    }

    #[tokio::test]
    async fn test_submit_posts_json_message() {
        let server = MockServer::start_async().await;
        let relay_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/f/test")
                    .header("content-type", "application/json")
                    .json_body(json!({ "message": "hello" }));
                then.status(200).json_body(json!({ "ok": true }));
            })
            .await;

        let relay = RelayClient::new(server.url("/f/test"));
        assert_eq!(relay.submit("hello").await, Ok(()));
        relay_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_success_clears_message() {
        let server = MockServer::start_async().await;
        let relay_mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/f/test");
                then.status(200);
            })
            .await;

        let relay = RelayClient::new(server.url("/f/test"));
        let mut form = ContactForm::default();
        form.set_message("hello");
        send(&mut form, &relay).await;

        relay_mock.assert_async().await;
        assert_eq!(*form.state(), SubmitState::Succeeded);
        assert_eq!(form.message(), "");
        assert!(form.status().is_some_and(|s| s.contains("success")));
        assert!(form.is_success());
    }

    #[tokio::test]
    async fn test_server_rejection_keeps_message() {
        let server = MockServer::start_async().await;
        let relay_mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/f/test");
                then.status(500);
            })
            .await;

        let relay = RelayClient::new(server.url("/f/test"));
        let mut form = ContactForm::default();
        form.set_message("hello");
        send(&mut form, &relay).await;

        relay_mock.assert_async().await;
        assert_eq!(
            *form.state(),
            SubmitState::Failed(DeliveryError::Rejected(StatusCode::INTERNAL_SERVER_ERROR))
        );
        assert_eq!(form.message(), "hello");
        assert_eq!(
            form.status(),
            Some("Failed to send message. Please try again.")
        );
        assert!(!form.is_success());
    }

    #[tokio::test]
    async fn test_retry_after_failure() {
        let server = MockServer::start_async().await;
        let mut failing = server
            .mock_async(|when, then| {
                when.method(POST).path("/f/test");
                then.status(503);
            })
            .await;

        let relay = RelayClient::new(server.url("/f/test"));
        let mut form = ContactForm::default();
        form.set_message("hello");
        send(&mut form, &relay).await;
        assert!(matches!(form.state(), SubmitState::Failed(_)));

        failing.delete_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/f/test");
                then.status(201);
            })
            .await;

        send(&mut form, &relay).await;
        assert_eq!(*form.state(), SubmitState::Succeeded);
        assert_eq!(form.message(), "");
    }

    #[tokio::test]
    async fn test_empty_message_never_reaches_relay() {
        let server = MockServer::start_async().await;
        let relay_mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/f/test");
                then.status(200);
            })
            .await;

        let mut form = ContactForm::default();
        form.set_message("   ");
        assert_eq!(form.begin_submit(), Err(SubmitError::EmptyMessage));
        assert_eq!(*form.state(), SubmitState::Idle);

        relay_mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_unreachable_relay_is_transport_failure() {
        // nothing listens on port 1
        let relay = RelayClient::new("http://127.0.0.1:1/f/test");
        let mut form = ContactForm::default();
        form.set_message("hello");
        send(&mut form, &relay).await;

        assert!(matches!(
            form.state(),
            SubmitState::Failed(DeliveryError::Transport(_))
        ));
        assert_eq!(form.message(), "hello");
        assert_eq!(
            form.status(),
            Some("An error occurred. Please try again later.")
        );
    }

    #[tokio::test]
    async fn test_silent_relay_times_out_and_allows_resubmit() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/f/test");
                then.status(200).delay(Duration::from_secs(2));
            })
            .await;

        let relay = RelayClient::new(server.url("/f/test")).with_timeout(Duration::from_millis(200));
        let mut form = ContactForm::default();
        form.set_message("hello");

        let settled = tokio::time::timeout(Duration::from_secs(3), send(&mut form, &relay)).await;
        assert!(settled.is_ok(), "submission should settle once the timeout hits");
        assert!(matches!(
            form.state(),
            SubmitState::Failed(DeliveryError::Transport(_))
        ));
        assert_eq!(form.message(), "hello");

        // not stuck in Sending, so the next submit goes out
        assert!(form.begin_submit().is_ok());
        assert!(form.is_sending());
    }

    #[test]
    fn test_default_endpoint() {
        assert_eq!(RelayClient::default().endpoint(), RELAY_ENDPOINT);
    }
}
