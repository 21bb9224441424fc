//! Session-Primed POST Order Upload Demo
//!
//! This demo targets deployments where the ordering endpoint sits behind a
//! reverse proxy that only accepts uploads on an established session. The
//! client first GETs the service base address to pick up the `cfsid` routing
//! cookie, then POSTs the order file with the cookie, a client-identifying
//! user agent and preemptive basic authentication.
//!
//! Run this demo with:
//! ```bash
//! cargo run --example session_primed_post
//! ```

use hius_upload::{Client, ClientConfig, DiagnosticSink, Result, StdoutSink, UploadStrategy};
use url::Url;

#[tokio::main]
async fn main() {
    let mut sink = StdoutSink;

    // single catch boundary: no retry, no partial-success state
    if let Err(error) = run(&mut sink).await {
        sink.line(&format!("## general error: {error}"));
        std::process::exit(1);
    }
}

async fn run(sink: &mut StdoutSink) -> Result<()> {
    // Replace with your customer id, sequence and credentials
    let service_url = Url::parse("http://shop.hius.local:2222/upload/")?;
    let config = ClientConfig::new(service_url, "u2960@hius.ch", "kM9SgP6aTMe6CSva")
        .with_strategy(UploadStrategy::SessionPrimedPost)
        .with_user_agent("hius-upload-client/1.0")
        .with_customer_id(0)
        .with_sequence(0);

    let client = Client::new(config)?;
    let result = client.upload(sink).await?;

    if !result.is_success() {
        sink.line("## upload was answered with an error status, see response above");
    }

    Ok(())
}
