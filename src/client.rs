//! HIUS Order Upload Client
//!
//! Main client struct tying payload generation, the exchange operations and
//! diagnostic routing together into a single upload run.

use url::Url;

use crate::diagnostics::DiagnosticSink;
use crate::errors::{Result, UploadError};
use crate::operations::Operations;
use crate::payload;
use crate::types::{ClientConfig, ExchangeResult};

/// Client for uploading a generated order file to the ordering endpoint
///
/// The client owns its configuration and a fresh cookie store; each client
/// instance represents one independent run. There is no retry and no shared
/// state across runs.
///
/// # Example
///
/// ```no_run
/// use hius_upload::{Client, ClientConfig, StdoutSink};
/// use url::Url;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let service_url = Url::parse("http://shop.hius.local:2222/upload/")?;
///     let config = ClientConfig::new(service_url, "u2960@hius.ch", "secret")
///         .with_customer_id(12)
///         .with_sequence(1);
///
///     let client = Client::new(config)?;
///     let result = client.upload(&mut StdoutSink).await?;
///     println!("status: {}", result.status);
///     Ok(())
/// }
/// ```
pub struct Client {
    config: ClientConfig,
    ops: Operations,
}

impl Client {
    /// Creates a new upload client with the given configuration
    ///
    /// The HTTP client is built with an empty cookie store. The store stays
    /// empty for direct PUT uploads and is populated by the session-priming
    /// request when the session-primed strategy is selected.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::validate_config(&config)?;

        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(UploadError::ClientSetup)?;

        Ok(Self {
            config,
            ops: Operations::new(http),
        })
    }

    /// Validates the client configuration
    fn validate_config(config: &ClientConfig) -> Result<()> {
        if config.username.is_empty() {
            return Err(UploadError::InvalidArgument(
                "Username is required".to_string(),
            ));
        }

        match config.service_url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(UploadError::InvalidArgument(format!(
                    "Unsupported service URL scheme: {}",
                    other
                )));
            }
        }

        Ok(())
    }

    /// The configuration this client runs with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full URL of the remote resource the payload is uploaded to
    pub fn remote_url(&self) -> Result<Url> {
        Ok(self.config.service_url.join(&self.config.remote_filename())?)
    }

    /// Generates the payload and performs the configured exchange
    ///
    /// Routes the outgoing payload, the obtained session cookie and the
    /// response through the diagnostic sink. A delivered response is returned
    /// as an [`ExchangeResult`] regardless of its status; the result is an
    /// error only when the transport produced no response at all.
    pub async fn upload(&self, sink: &mut dyn DiagnosticSink) -> Result<ExchangeResult> {
        let payload = payload::generate(&self.config);
        sink.line(&format!(
            "-- request:\n{}",
            String::from_utf8_lossy(&payload)
        ));

        let target = self.remote_url()?;
        let strategy = self.config.strategy;

        if strategy.primes_session() {
            let cookie = self.ops.prime_session(&self.config.service_url).await?;
            match &cookie {
                Some(value) => sink.line(&format!("-- session cookie: {value}")),
                None => sink.line("-- session cookie: none issued"),
            }
        }

        let result = self
            .ops
            .send_payload(strategy.method(), &self.config, target, payload)
            .await?;

        sink.line(&format!(
            "-- response {} {}:\n{}",
            result.status.as_u16(),
            result.content_type.as_deref().unwrap_or(""),
            result.body_text()
        ));

        Ok(result)
    }
}
