//! Direct-PUT Order Upload Demo
//!
//! This demo uploads the generated order file with a single authenticated
//! PUT, using the sample configuration of the published reference program.
//! The outgoing payload and the full response are printed for review; a
//! transport failure is reported once at this top level and ends the process.
//!
//! Run this demo with:
//! ```bash
//! cargo run --example direct_put
//! ```

use hius_upload::{Client, ClientConfig, DiagnosticSink, Result, StdoutSink};
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
        .with_customer_id(0)
        .with_sequence(0);

    let client = Client::new(config)?;
    client.upload(sink).await?;

    Ok(())
}
