//! Custom Order-Row Demo
//!
//! The two published reference programs disagree on the order row: one sends
//! `request5` against address `x:3` with a fixed date, the other `request6`
//! against `x:4` with a date six days out. Rather than guessing which layout
//! an endpoint expects, this demo shows how to pin every knob explicitly.
//!
//! Run this demo with:
//! ```bash
//! cargo run --example custom_order_row
//! ```

use chrono::NaiveDate;
use hius_upload::{
    Client, ClientConfig, DiagnosticSink, OrderDate, OrderRow, Result, StdoutSink,
};
use url::Url;

#[tokio::main]
async fn main() {
    let mut sink = StdoutSink;

    if let Err(error) = run(&mut sink).await {
        sink.line(&format!("## general error: {error}"));
        std::process::exit(1);
    }
}

async fn run(sink: &mut StdoutSink) -> Result<()> {
    let service_url = Url::parse("http://shop.hius.local:2222/upload/")?;

    // direct PUT, but with the order row pinned instead of following the
    // strategy's conventional layout
    let order_row = OrderRow {
        correlation_token: "request6".to_string(),
        address_ref: "x:4".to_string(),
        date: OrderDate::Literal(NaiveDate::from_ymd_opt(2026, 9, 1).expect("valid date")),
    };

    let config = ClientConfig::new(service_url, "u2960@hius.ch", "kM9SgP6aTMe6CSva")
        .with_order_row(order_row);

    let client = Client::new(config)?;
    sink.line(&format!(
        "-- uploading to resource {}",
        client.config().remote_filename()
    ));

    client.upload(sink).await?;

    Ok(())
}
