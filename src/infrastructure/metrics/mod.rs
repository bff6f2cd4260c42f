//! Prometheus metrics.
//!
//! Recorded only where commands leave the crate or the user is asked for
//! input, so parsing and menu loading touch no shared state:
//! - Invocation outcomes and committed commands
//! - Prompt answers and cancellations

mod helpers;

pub use helpers::{encode_metrics, InvocationMetrics, PromptMetrics};

use lazy_static::lazy_static;
use prometheus::{register_int_counter, register_int_counter_vec, IntCounter, IntCounterVec};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "graphomenon";

lazy_static! {
    /// Total command lines handed to the outbound sender
    pub static ref COMMANDS_SENT_TOTAL: IntCounter = register_int_counter!(
        format!("{}_commands_sent_total", METRIC_PREFIX),
        "Total command lines handed to the outbound sender"
    ).unwrap();

    /// Menu invocations by outcome
    pub static ref INVOCATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_invocations_total", METRIC_PREFIX),
        "Total menu command invocations",
        &["outcome"]
    ).unwrap();

    /// Interactive prompts by outcome
    pub static ref PROMPTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_prompts_total", METRIC_PREFIX),
        "Total interactive prompts",
        &["outcome"]
    ).unwrap();
}
