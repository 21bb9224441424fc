//! Line-Oriented Diagnostic Output
//!
//! This reference client is meant to be read by an operator: the outgoing
//! payload, the obtained session cookie and the full response are routed
//! through a [`DiagnosticSink`] so the embedding program decides where those
//! lines go. The sink is not part of the upload protocol.

/// Consumer of line-oriented diagnostic output
pub trait DiagnosticSink {
    /// Consumes one diagnostic message; messages may span multiple lines
    fn line(&mut self, message: &str);
}

/// Sink that writes diagnostic lines to standard output
#[derive(Debug, Default)]
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn line(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Sink that collects diagnostic lines in memory
///
/// Useful for tests and for embedders that forward diagnostics elsewhere.
#[derive(Debug, Default)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    /// Creates an empty buffer sink
    pub fn new() -> Self {
        Self::default()
    }

    /// The messages collected so far, in arrival order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl DiagnosticSink for BufferSink {
    fn line(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }
}
