//! Submits assembled payloads to the article API.

use crate::error::TransportError;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

/// Article creation endpoint of the public DEV.to API.
pub const DEFAULT_ENDPOINT: &str = "https://dev.to/api/articles";

/// Something that can deliver a serialized publish request.
pub trait Transport {
    /// Sends `payload_json` and returns the raw response body.
    fn submit(&self, payload_json: &str) -> Result<String, TransportError>;
}

/// Blocking HTTP transport authenticating with an `api-key` header.
pub struct HttpTransport {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    fn submit(&self, payload_json: &str) -> Result<String, TransportError> {
        log::debug!("POST {} ({} bytes)", self.endpoint, payload_json.len());

        let response = self
            .client
            .post(&self.endpoint)
            .header("api-key", &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .body(payload_json.to_string())
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
