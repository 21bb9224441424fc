//! HIUS Order Upload Client Library
//!
//! Reference Rust client for automated order uploads to the HIUS shop
//! ordering endpoint. It generates a fixed-schema, semicolon-delimited order
//! file and delivers it over HTTP with preemptive basic authentication,
//! either as a direct PUT or as a session-primed POST for deployments behind
//! a reverse proxy.
//!
//! # Features
//!
//! - Deterministic five-row order payload generation
//! - Direct authenticated PUT upload
//! - Session-primed POST upload (proxy routing cookie)
//! - Non-2xx responses captured as results, not errors
//! - Line-oriented diagnostic output for operator review
//!
//! # Example
//!
//! ```no_run
//! use hius_upload::{Client, ClientConfig, StdoutSink, UploadStrategy};
//! use url::Url;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service_url = Url::parse("http://shop.hius.local:2222/upload/")?;
//!     let config = ClientConfig::new(service_url, "u2960@hius.ch", "secret")
//!         .with_strategy(UploadStrategy::SessionPrimedPost)
//!         .with_user_agent("hius-upload-client/1.0");
//!
//!     let client = Client::new(config)?;
//!     let result = client.upload(&mut StdoutSink).await?;
//!     println!("uploaded, status {}", result.status);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod client;
pub mod diagnostics;
mod errors;
mod operations;
pub mod payload;
mod types;

// Re-export public API
pub use client::Client;
pub use diagnostics::{BufferSink, DiagnosticSink, StdoutSink};
pub use errors::{Result, UploadError};
pub use types::{
    ClientConfig, ExchangeResult, OrderDate, OrderRow, UploadStrategy, FIELD_SEPARATOR,
    LINE_TERMINATOR, PAYLOAD_CONTENT_TYPE, PAYLOAD_ROW_COUNT, REMOTE_FILE_PREFIX,
    SESSION_COOKIE_NAME,
};
