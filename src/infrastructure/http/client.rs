//! JSON-over-HTTP fetch client.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::utils::resource_url::parse_resource_url;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper over `reqwest` that performs one GET per call and decodes the
/// body as JSON.
///
/// No retries and no caching: asking for the same URL twice issues two requests.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    /// Builds a client whose requests fail with [`FetchError::Timeout`] after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let inner = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::network("<client>", e))?;

        Ok(Self { inner })
    }

    /// GETs `url` and decodes the response body into `T`.
    ///
    /// # Errors
    ///
    /// - [`FetchError::InvalidUrl`] - `url` is not an absolute http(s) URL
    /// - [`FetchError::Timeout`] - no complete response within the timeout
    /// - [`FetchError::Network`] - connection or transfer failure
    /// - [`FetchError::Status`] - non-2xx response
    /// - [`FetchError::Decode`] - body is not JSON of the expected shape
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let parsed = parse_resource_url(url).map_err(|e| FetchError::invalid_url(url, e))?;

        debug!("GET {}", url);

        let response = self
            .inner
            .get(parsed)
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("GET {} -> {}", url, status);
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(url, e))?;

        debug!("GET {} -> {} ({} bytes)", url, status, body.len());

        serde_json::from_slice(&body).map_err(|e| FetchError::decode(url, e))
    }
}

fn transport_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::network(url, error)
    }
}
