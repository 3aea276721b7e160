//! HTTP client for the shortening API.

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::ClientError;
use serde::Deserialize;
use url::Url;

/// Error body shape used by the shortening API.
///
/// Only `detail` is interesting to the client; anything else in the body is
/// ignored.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    detail: Option<String>,
}

/// Client for the remote shortening service.
///
/// A thin wrapper around [`reqwest::Client`] bound to the configured base
/// URL. One request at a time, no retries, no timeouts: every failure
/// surfaces through [`ClientError`] and the caller renders a single inline
/// message.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client for the given API base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Submits one shortening request to `POST {base}/shorten`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] for non-2xx responses, carrying the
    /// body's `detail` field when the body is JSON and has one.
    /// Returns [`ClientError::Http`] for transport failures and success
    /// bodies that do not decode as a [`ShortenResponse`].
    pub async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResponse, ClientError> {
        let endpoint = self.endpoint("shorten");
        tracing::debug!("POST {endpoint}");

        let response = self.http.post(&endpoint).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let detail = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail);
            tracing::debug!("shorten request rejected: {status}");
            return Err(ClientError::Api { status, detail });
        }

        Ok(response.json::<ShortenResponse>().await?)
    }

    /// Builds an endpoint URL under the base, tolerating trailing slashes.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.as_str().trim_end_matches('/'))
    }
}
