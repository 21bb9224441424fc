//! Upload Exchange Operations
//!
//! This module implements the two network operations of the client: the
//! optional session-priming request and the authenticated payload upload.
//! Both are strictly sequential; the whole exchange is at most two requests.

use bytes::Bytes;
use reqwest::header;
use reqwest::Method;
use tracing::{debug, info};
use url::Url;

use crate::errors::{Result, UploadError};
use crate::types::{ClientConfig, ExchangeResult, PAYLOAD_CONTENT_TYPE, SESSION_COOKIE_NAME};

/// Performs the HTTP operations of an upload run
///
/// Holds the shared HTTP client whose cookie store carries the session cookie
/// from the priming request into the upload request. Used internally by the
/// [`Client`](crate::Client).
pub(crate) struct Operations {
    http: reqwest::Client,
}

impl Operations {
    /// Creates a new operations handler over the given HTTP client
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Sends the unauthenticated session-priming GET to the service base
    /// address
    ///
    /// The response body is irrelevant; the request exists solely to make the
    /// reverse proxy issue its routing cookie into the shared cookie store.
    /// Returns the cookie value for diagnostics, or `None` if the endpoint
    /// issued none.
    pub async fn prime_session(&self, base: &Url) -> Result<Option<String>> {
        debug!(url = %base, "priming session");

        let response = self
            .http
            .get(base.clone())
            .send()
            .await
            .map_err(|e| UploadError::transport("session priming", e))?;

        let cookie = response
            .cookies()
            .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
            .map(|cookie| cookie.value().to_string());

        match &cookie {
            Some(value) => debug!(cookie = %value, "session cookie obtained"),
            None => debug!("no session cookie issued"),
        }

        // drain the body so the pooled connection is reusable
        let _ = response.bytes().await;

        Ok(cookie)
    }

    /// Sends the payload to the target resource
    ///
    /// Credentials go out preemptively: the `Authorization` header is on the
    /// first request instead of answering a 401 challenge. Any response the
    /// transport delivers becomes an [`ExchangeResult`], error statuses
    /// included; only a failure that produced no response at all is fatal.
    pub async fn send_payload(
        &self,
        method: Method,
        config: &ClientConfig,
        target: Url,
        payload: Bytes,
    ) -> Result<ExchangeResult> {
        debug!(%method, url = %target, bytes = payload.len(), "sending payload");

        let mut request = self
            .http
            .request(method, target)
            .header(header::CONTENT_TYPE, PAYLOAD_CONTENT_TYPE)
            .basic_auth(&config.username, Some(&config.password))
            .body(payload);

        if let Some(agent) = &config.user_agent {
            request = request.header(header::USER_AGENT, agent);
        }

        let response = request
            .send()
            .await
            .map_err(|e| UploadError::transport("payload upload", e))?;

        self.capture(response).await
    }

    /// Drains a delivered response into an exchange result
    async fn capture(&self, response: reqwest::Response) -> Result<ExchangeResult> {
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(|e| UploadError::transport("response capture", e))?;

        info!(status = status.as_u16(), bytes = body.len(), "exchange complete");

        Ok(ExchangeResult {
            status,
            content_type,
            body,
        })
    }
}
