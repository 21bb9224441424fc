//! Upload Client Error Definitions
//!
//! Errors fall into two categories: configuration problems caught before any
//! request goes out, and transport failures where no response was obtained at
//! all. A response with an error status is not an error here — it is a normal
//! [`ExchangeResult`](crate::ExchangeResult) for the caller to interpret.

use thiserror::Error;

/// Result type alias for upload operations
pub type Result<T> = std::result::Result<T, UploadError>;

/// Base error type for the upload client
#[derive(Error, Debug)]
pub enum UploadError {
    /// Invalid argument was provided
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The target resource name could not be resolved against the service
    /// base address
    #[error("Invalid target resource: {0}")]
    InvalidResource(#[from] url::ParseError),

    /// The underlying HTTP client could not be constructed
    #[error("HTTP client setup failed: {0}")]
    ClientSetup(#[source] reqwest::Error),

    /// Transport-level failure that produced no response at all
    ///
    /// Connectivity loss, name resolution failure or a timeout. Fatal: the
    /// caller reports it once at the top level, without retrying.
    #[error("Transport failure during {operation}: {source}")]
    Transport {
        /// The exchange step that failed
        operation: &'static str,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },
}

impl UploadError {
    /// Wraps a transport error with the exchange step it occurred in
    pub(crate) fn transport(operation: &'static str, source: reqwest::Error) -> Self {
        UploadError::Transport { operation, source }
    }
}
