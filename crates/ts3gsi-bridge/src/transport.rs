//! Transport Sender: one synchronous POST per document, never retried.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use ts3gsi_common::{StateDocument, TransportError};
use ts3gsi_config::TransportConfig;

/// The single well-known receiver.
pub const RECEIVER_URL: &str = "http://localhost:9088";

pub type DeliveryResult = Result<(), TransportError>;

/// Delivers a state document to the receiver.
pub trait Transport: Send + Sync {
    fn send(&self, document: &StateDocument) -> DeliveryResult;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, document: &StateDocument) -> DeliveryResult {
        (**self).send(document)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, document: &StateDocument) -> DeliveryResult {
        (**self).send(document)
    }
}

/// Blocking HTTP transport. The client is built once and reused for
/// every send.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
        Self::with_endpoint(RECEIVER_URL, config)
    }

    pub fn with_endpoint(
        endpoint: impl Into<String>,
        config: &TransportConfig,
    ) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(u64::from(config.timeout_ms)))
            .connect_timeout(Duration::from_millis(u64::from(config.connect_timeout_ms)))
            .build()
            .map_err(|e| TransportError::Unavailable(error_chain(&e)))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    fn send(&self, document: &StateDocument) -> DeliveryResult {
        let body = document
            .to_json_bytes()
            .map_err(|e| TransportError::Serialize(e.to_string()))?;

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(|e| TransportError::Request(error_chain(&e)))?;

        // Only the transport outcome matters; the status is informational.
        debug!(status = %response.status(), "receiver responded");
        Ok(())
    }
}

/// Stands in when no HTTP client could be acquired at startup.
pub struct UnavailableTransport {
    reason: String,
}

impl UnavailableTransport {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Transport for UnavailableTransport {
    fn send(&self, _document: &StateDocument) -> DeliveryResult {
        Err(TransportError::Unavailable(self.reason.clone()))
    }
}

/// Render an error with its whole source chain, e.g.
/// "error sending request: client error (Connect): Connection refused".
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn connected_document() -> StateDocument {
        let mut state = serde_json::Map::new();
        state.insert("connected".into(), serde_json::Value::from(2));
        StateDocument::derived(state)
    }

    #[test]
    fn default_endpoint_is_local_receiver() {
        let transport = HttpTransport::new(&TransportConfig::default()).unwrap();
        assert_eq!(transport.endpoint(), "http://localhost:9088");
    }

    #[test]
    fn posts_json_document() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/")
            .match_header("content-type", "application/json")
            .match_body(
                r#"{"provider":{"name":"TeamSpeak","appid":-1},"state":{"connected":2}}"#,
            )
            .with_status(200)
            .expect(1)
            .create();

        let transport =
            HttpTransport::with_endpoint(server.url(), &TransportConfig::default()).unwrap();
        transport.send(&connected_document()).unwrap();

        mock.assert();
    }

    #[test]
    fn error_status_is_still_delivered() {
        let mut server = mockito::Server::new();
        let mock = server.mock("POST", "/").with_status(500).expect(1).create();

        let transport =
            HttpTransport::with_endpoint(server.url(), &TransportConfig::default()).unwrap();
        assert!(transport.send(&connected_document()).is_ok());

        mock.assert();
    }

    #[test]
    fn unreachable_receiver_fails_without_retry() {
        // Bind then drop to get a local port with nothing listening.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let config = TransportConfig::default();
        let transport =
            HttpTransport::with_endpoint(format!("http://127.0.0.1:{port}"), &config).unwrap();

        let started = Instant::now();
        let err = transport.send(&connected_document()).unwrap_err();
        assert!(matches!(err, TransportError::Request(_)));
        assert!(started.elapsed() < Duration::from_millis(u64::from(config.timeout_ms) + 1000));
    }

    #[test]
    fn unavailable_transport_always_fails() {
        let transport = UnavailableTransport::new("no client");
        let err = transport.send(&connected_document()).unwrap_err();
        assert_eq!(err.to_string(), "transport unavailable: no client");
    }

    #[test]
    fn boxed_transport_forwards() {
        let transport: Box<dyn Transport> = Box::new(UnavailableTransport::new("boxed"));
        assert!(transport.send(&connected_document()).is_err());
    }

    #[test]
    fn error_chain_includes_sources() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let outer = TransportError::Request("outer".into());
        assert_eq!(error_chain(&inner), "refused");
        assert_eq!(error_chain(&outer), "request failed: outer");
    }
}
