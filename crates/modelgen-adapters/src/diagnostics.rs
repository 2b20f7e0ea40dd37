//! Diagnostic sinks.

use std::sync::{Arc, Mutex};

use modelgen_core::application::ports::DiagnosticSink;

/// Forwards writer phase messages to `tracing`.
///
/// Enabled messages are INFO events; disabled ones still reach TRACE so
/// `RUST_LOG=trace` shows every phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingSink {
    fn verbose_message(&self, tag: &str, enabled: bool, parts: &[&str]) {
        let message = parts.join(" ");
        if enabled {
            tracing::info!(tag = %tag, "{}", message);
        } else {
            tracing::trace!(tag = %tag, "{}", message);
        }
    }
}

/// A message captured by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedMessage {
    pub tag: String,
    pub enabled: bool,
    pub text: String,
}

/// Captures every message for later inspection (testing).
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    messages: Arc<Mutex<Vec<RecordedMessage>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages, enabled or not, in arrival order.
    pub fn messages(&self) -> Vec<RecordedMessage> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }

    /// Text of the messages that were emitted with `enabled = true`.
    pub fn enabled_texts(&self) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|m| m.enabled)
            .map(|m| m.text)
            .collect()
    }
}

impl DiagnosticSink for RecordingSink {
    fn verbose_message(&self, tag: &str, enabled: bool, parts: &[&str]) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(RecordedMessage {
                tag: tag.to_string(),
                enabled,
                text: parts.join(" "),
            });
        }
    }
}
