//! Event Sink Implementations
//!
//! Provides concrete implementations of PipelineEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - TracingEventSink: structured log records
//! - FanoutEventSink: forwards to several sinks

mod json;
mod log_sink;

pub use json::JsonEventSink;
pub use log_sink::TracingEventSink;

use std::sync::Arc;

use crate::domain::ports::{PipelineEvent, PipelineEventSink};

/// Forwards every event to each inner sink
pub struct FanoutEventSink {
    sinks: Vec<Arc<dyn PipelineEventSink>>,
}

impl FanoutEventSink {
    pub fn new(sinks: Vec<Arc<dyn PipelineEventSink>>) -> Self {
        Self { sinks }
    }
}

impl PipelineEventSink for FanoutEventSink {
    fn on_event(&self, event: PipelineEvent) {
        if let Some((last, rest)) = self.sinks.split_last() {
            for sink in rest {
                sink.on_event(event.clone());
            }
            last.on_event(event);
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.sinks.iter().any(|s| s.wants_detailed_events())
    }
}
