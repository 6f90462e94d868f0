//! ALM client — resource-addressed HTTP access to the test-management server.
//!
//! [`request::Request`] variants shape a resource path + query, [`Client`]
//! assembles the full URL under the project's collection root and
//! dispatches, and [`Transport`] moves bytes. The client never parses
//! response bodies and never retries; both belong to the caller.

pub mod request;
pub mod resources;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use request::Request;

// ─── Transport ────────────────────────────────────────────────────────────────

/// Network/IO failure surfaced unchanged to the caller. Not retried here.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http transport failure: {0}")]
    Http(#[from] reqwest::Error),
    #[error("transport failure: {0}")]
    Other(String),
}

/// Raw server response. Status is passed through even for 4xx/5xx — only
/// connection-level failures are `TransportError`s.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

/// Sends a fully-formed GET and returns the raw response.
///
/// Timeout and cancellation policy live behind this seam; the client above
/// it is policy-free.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Response, TransportError>;
}

/// reqwest-backed transport with a fixed request timeout.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Response, TransportError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok(Response { status, body })
    }
}

// ─── Client ───────────────────────────────────────────────────────────────────

/// Binds a transport to one ALM project's collection root.
///
/// Stateless with respect to individual requests; `send` may be called
/// concurrently for independent requests.
pub struct Client {
    transport: Box<dyn Transport>,
    collection_url: String,
}

impl Client {
    /// ALM resources live under
    /// `<base>/rest/domains/<domain>/projects/<project>/<suffix>`.
    pub fn new(
        transport: Box<dyn Transport>,
        base_url: &str,
        domain: &str,
        project: &str,
    ) -> Self {
        let collection_url = format!(
            "{}/rest/domains/{}/projects/{}/",
            base_url.trim_end_matches('/'),
            domain,
            project
        );
        Self {
            transport,
            collection_url,
        }
    }

    /// The project collection root all request suffixes are appended to.
    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    /// Assemble the request's full URL and dispatch it.
    ///
    /// Transport failures propagate unchanged; non-2xx statuses come back as
    /// ordinary responses for the caller to interpret.
    pub async fn send(&self, request: &dyn Request) -> Result<Response, TransportError> {
        let mut url = format!("{}{}", self.collection_url, request.suffix());
        if let Some(query) = request.query_string() {
            url.push('?');
            url.push_str(&query);
        }
        debug!(url = %url, "dispatching ALM request");
        self.transport.get(&url).await
    }
}
