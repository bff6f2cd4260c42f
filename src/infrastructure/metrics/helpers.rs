//! Metrics helper structs for convenient metric recording

use prometheus::{Encoder, TextEncoder};

use super::{COMMANDS_SENT_TOTAL, INVOCATIONS_TOTAL, PROMPTS_TOTAL};

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording invocation metrics
pub struct InvocationMetrics;

impl InvocationMetrics {
    /// Record a batch committed to the sender
    pub fn record_sent(commands: u64) {
        INVOCATIONS_TOTAL.with_label_values(&["sent"]).inc();
        COMMANDS_SENT_TOTAL.inc_by(commands);
    }

    /// Record a batch abandoned by a prompt cancel
    pub fn record_cancelled() {
        INVOCATIONS_TOTAL.with_label_values(&["cancelled"]).inc();
    }

    /// Record a batch abandoned by a render failure
    pub fn record_failed() {
        INVOCATIONS_TOTAL.with_label_values(&["failed"]).inc();
    }

    /// Record an invocation with nothing selected to render against
    pub fn record_skipped() {
        INVOCATIONS_TOTAL.with_label_values(&["skipped"]).inc();
    }
}

/// Helper struct for recording prompt metrics
pub struct PromptMetrics;

impl PromptMetrics {
    pub fn record_answered() {
        PROMPTS_TOTAL.with_label_values(&["answered"]).inc();
    }

    pub fn record_cancelled() {
        PROMPTS_TOTAL.with_label_values(&["cancelled"]).inc();
    }
}
