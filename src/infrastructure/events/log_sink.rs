//! Tracing Event Sink
//!
//! Turns pipeline events into structured log records. Per-entry events
//! are emitted at `trace` and only requested when that level is enabled.

use tracing::{debug, info, trace, warn, Level};

use crate::domain::ports::{PipelineEvent, PipelineEventSink};

/// Event sink that logs through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl PipelineEventSink for TracingEventSink {
    fn on_event(&self, event: PipelineEvent) {
        match event {
            PipelineEvent::Started { mode, unit_count } => {
                info!(%mode, unit_count, "starting pass");
            }
            PipelineEvent::OutputCleared => {
                info!("cleared previous output");
            }
            PipelineEvent::UnitStarted { unit, format, mode } => {
                debug!(%unit, %format, %mode, "reconciling unit");
            }
            PipelineEvent::EntryWritten {
                unit,
                path,
                transformed,
            } => {
                trace!(%unit, %path, transformed, "wrote entry");
            }
            PipelineEvent::EntryDeleted { unit, path } => {
                trace!(%unit, %path, "deleted entry");
            }
            PipelineEvent::ArchiveDeleted { unit, path } => {
                debug!(%unit, path = %path.display(), "deleted archive");
            }
            PipelineEvent::UnitSkipped {
                unit,
                format,
                reason,
            } => {
                debug!(%unit, %format, %reason, "skipped unit");
            }
            PipelineEvent::UnitCompleted {
                unit,
                format,
                stats,
            } => {
                info!(
                    %unit,
                    %format,
                    transformed = stats.transformed,
                    copied = stats.copied,
                    deleted = stats.deleted,
                    "unit complete"
                );
            }
            PipelineEvent::UnitFailed {
                unit,
                format,
                error,
            } => {
                warn!(%unit, %format, %error, "unit failed");
            }
            PipelineEvent::Completed {
                processed,
                skipped,
                failed,
            } => {
                info!(processed, skipped, failed, "pass complete");
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        tracing::enabled!(Level::TRACE)
    }
}
