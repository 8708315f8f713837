//! JSON Event Sink
//!
//! Outputs pipeline events as NDJSON for CI/automation consumption.

use crate::domain::ports::{PipelineEvent, PipelineEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes from parallel units
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl PipelineEventSink for JsonEventSink {
    fn on_event(&self, event: PipelineEvent) {
        let json = match event {
            PipelineEvent::Started { mode, unit_count } => {
                serde_json::json!({
                    "event": "start",
                    "command": "run",
                    "mode": mode,
                    "unit_count": unit_count,
                })
            }

            PipelineEvent::OutputCleared => {
                serde_json::json!({
                    "event": "output_cleared",
                    "command": "run",
                })
            }

            PipelineEvent::UnitStarted { unit, format, mode } => {
                serde_json::json!({
                    "event": "unit_start",
                    "command": "run",
                    "unit": unit,
                    "format": format,
                    "mode": mode,
                })
            }

            PipelineEvent::EntryWritten {
                unit,
                path,
                transformed,
            } => {
                serde_json::json!({
                    "event": "entry_written",
                    "command": "run",
                    "unit": unit,
                    "path": path,
                    "transformed": transformed,
                })
            }

            PipelineEvent::EntryDeleted { unit, path } => {
                serde_json::json!({
                    "event": "entry_deleted",
                    "command": "run",
                    "unit": unit,
                    "path": path,
                })
            }

            PipelineEvent::ArchiveDeleted { unit, path } => {
                serde_json::json!({
                    "event": "archive_deleted",
                    "command": "run",
                    "unit": unit,
                    "path": path.display().to_string(),
                })
            }

            PipelineEvent::UnitSkipped {
                unit,
                format,
                reason,
            } => {
                serde_json::json!({
                    "event": "unit_skipped",
                    "command": "run",
                    "unit": unit,
                    "format": format,
                    "reason": reason,
                })
            }

            PipelineEvent::UnitCompleted {
                unit,
                format,
                stats,
            } => {
                serde_json::json!({
                    "event": "unit_complete",
                    "command": "run",
                    "unit": unit,
                    "format": format,
                    "stats": stats,
                })
            }

            PipelineEvent::UnitFailed {
                unit,
                format,
                error,
            } => {
                serde_json::json!({
                    "event": "unit_error",
                    "command": "run",
                    "unit": unit,
                    "format": format,
                    "error": error,
                })
            }

            PipelineEvent::Completed {
                processed,
                skipped,
                failed,
            } => {
                let status = if failed == 0 { "success" } else { "partial" };
                serde_json::json!({
                    "event": "complete",
                    "command": "run",
                    "status": status,
                    "processed": processed,
                    "skipped": skipped,
                    "failed": failed,
                })
            }
        };

        self.write_event(json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UnitStats;
    use crate::domain::value_objects::{EntryPath, InvocationMode, UnitFormat};
    use std::sync::{Arc, Mutex};

    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn lines(buffer: &Arc<Mutex<Vec<u8>>>) -> Vec<serde_json::Value> {
        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn json_sink_outputs_start_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(PipelineEvent::Started {
            mode: InvocationMode::Incremental,
            unit_count: 5,
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["event"], "start");
        assert_eq!(events[0]["mode"], "incremental");
        assert_eq!(events[0]["unit_count"], 5);
    }

    #[test]
    fn json_sink_one_line_per_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(PipelineEvent::EntryWritten {
            unit: "main".to_string(),
            path: EntryPath::new("com/A.class").unwrap(),
            transformed: true,
        });
        sink.on_event(PipelineEvent::UnitCompleted {
            unit: "main".to_string(),
            format: UnitFormat::Directory,
            stats: UnitStats {
                transformed: 1,
                copied: 2,
                deleted: 0,
            },
        });

        let events = lines(&buffer);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["path"], "com/A.class");
        assert_eq!(events[1]["format"], "directory");
        assert_eq!(events[1]["stats"]["copied"], 2);
    }

    #[test]
    fn json_sink_outputs_complete_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(PipelineEvent::Completed {
            processed: 3,
            skipped: 1,
            failed: 0,
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["event"], "complete");
        assert_eq!(events[0]["status"], "success");
        assert_eq!(events[0]["processed"], 3);
    }

    #[test]
    fn json_sink_outputs_partial_on_errors() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(PipelineEvent::Completed {
            processed: 1,
            skipped: 0,
            failed: 2,
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["status"], "partial");
    }
}
