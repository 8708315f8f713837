//! Unit reconcilers
//!
//! Bring one unit's output in line with its input for the current mode.
//!
//! - `directory` - full walk or per-file change application
//! - `archive` - whole-archive rebuild, removal or skip

mod archive;
mod directory;

pub use archive::{reconcile_archive, ArchiveAction, ArchiveOutcome};
pub use directory::reconcile_directory;

use crate::domain::ports::{NamespaceProvider, PipelineEvent, PipelineEventSink};
use crate::domain::services::TreeWalker;
use crate::domain::value_objects::{EntryPath, InvocationMode};

/// Everything a reconciler needs besides the unit itself
pub struct ReconcileContext<'a> {
    pub walker: &'a TreeWalker<'a>,
    pub namespaces: &'a dyn NamespaceProvider,
    pub events: &'a dyn PipelineEventSink,
    pub mode: InvocationMode,
}

impl ReconcileContext<'_> {
    fn entry_written(&self, unit: &str, path: &EntryPath, transformed: bool) {
        if self.events.wants_detailed_events() {
            self.events.on_event(PipelineEvent::EntryWritten {
                unit: unit.to_string(),
                path: path.clone(),
                transformed,
            });
        }
    }

    fn entry_deleted(&self, unit: &str, path: &EntryPath) {
        if self.events.wants_detailed_events() {
            self.events.on_event(PipelineEvent::EntryDeleted {
                unit: unit.to_string(),
                path: path.clone(),
            });
        }
    }
}
