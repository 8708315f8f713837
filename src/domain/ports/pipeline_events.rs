//! Pipeline Event Port
//!
//! Provides an observable interface for pipeline runs.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::entities::UnitStats;
use crate::domain::value_objects::{EntryPath, InvocationMode, UnitFormat};

/// Event emitted during a pipeline run
#[derive(Debug, Clone)]
pub enum PipelineEvent {
    /// Run started
    Started {
        mode: InvocationMode,
        unit_count: usize,
    },

    /// Prior output was wiped (full passes only)
    OutputCleared,

    /// A unit is about to be reconciled
    UnitStarted {
        unit: String,
        format: UnitFormat,
        mode: InvocationMode,
    },

    /// One output entry was written
    EntryWritten {
        unit: String,
        path: EntryPath,
        transformed: bool,
    },

    /// One output entry was deleted
    EntryDeleted { unit: String, path: EntryPath },

    /// A whole output archive was deleted
    ArchiveDeleted { unit: String, path: PathBuf },

    /// A unit needed no work (or was not attempted)
    UnitSkipped {
        unit: String,
        format: UnitFormat,
        reason: String,
    },

    /// A unit finished successfully
    UnitCompleted {
        unit: String,
        format: UnitFormat,
        stats: UnitStats,
    },

    /// A unit failed
    UnitFailed {
        unit: String,
        format: UnitFormat,
        error: String,
    },

    /// Run completed
    Completed {
        processed: usize,
        skipped: usize,
        failed: usize,
    },
}

/// Trait for receiving pipeline events
///
/// Implementations can be:
/// - TracingEventSink: structured log lines
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait PipelineEventSink: Send + Sync {
    /// Handle a pipeline event
    fn on_event(&self, event: PipelineEvent);

    /// Check if this sink wants per-entry events
    ///
    /// Large jars produce thousands of entries; summary-only sinks skip them.
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PipelineEventSink for NoopEventSink {
    fn on_event(&self, _event: PipelineEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Test event sink that records all events
    struct RecordingEventSink {
        events: Arc<Mutex<Vec<PipelineEvent>>>,
    }

    impl RecordingEventSink {
        fn new() -> (Self, Arc<Mutex<Vec<PipelineEvent>>>) {
            let events = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    events: events.clone(),
                },
                events,
            )
        }
    }

    impl PipelineEventSink for RecordingEventSink {
        fn on_event(&self, event: PipelineEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let (sink, events) = RecordingEventSink::new();

        sink.on_event(PipelineEvent::Started {
            mode: InvocationMode::Full,
            unit_count: 2,
        });
        sink.on_event(PipelineEvent::EntryWritten {
            unit: "main".to_string(),
            path: EntryPath::new("A.class").unwrap(),
            transformed: true,
        });

        let recorded = events.lock().unwrap();
        assert_eq!(recorded.len(), 2);
        assert!(sink.wants_detailed_events());
    }

    #[test]
    fn noop_sink_wants_no_details() {
        let sink = NoopEventSink;
        assert!(!sink.wants_detailed_events());
    }
}
