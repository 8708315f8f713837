//! Archive Reconciler
//!
//! Archives are never patched in place. Any change rebuilds the output
//! archive from the current input, so nothing from an earlier version of
//! the input can survive in it.

use std::path::Path;

use tracing::debug;

use crate::domain::entities::{ArchiveUnit, UnitStats};
use crate::domain::ports::PipelineEvent;
use crate::domain::value_objects::{ChangeStatus, InvocationMode};
use crate::error::ReclassResult;

use super::ReconcileContext;

/// What to do with an archive unit's output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveAction {
    Rebuild,
    Remove,
    Skip,
}

impl ArchiveAction {
    /// Decide from the unit's status and the run mode
    ///
    /// Full passes start from an empty output area, so an unchanged
    /// archive has to be rebuilt there as well.
    pub fn plan(status: Option<ChangeStatus>, mode: InvocationMode) -> Self {
        match (status, mode) {
            (Some(ChangeStatus::Removed), _) => ArchiveAction::Remove,
            (Some(ChangeStatus::Added | ChangeStatus::Changed), _) => ArchiveAction::Rebuild,
            (None, InvocationMode::Full) => ArchiveAction::Rebuild,
            (None, InvocationMode::Incremental) => ArchiveAction::Skip,
        }
    }
}

/// Result of reconciling one archive unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveOutcome {
    Rebuilt(UnitStats),
    Removed { existed: bool },
    Unchanged,
}

/// Reconcile one archive unit into the archive at `output`
pub fn reconcile_archive(
    ctx: &ReconcileContext<'_>,
    unit: &ArchiveUnit,
    output: &Path,
) -> ReclassResult<ArchiveOutcome> {
    match ArchiveAction::plan(unit.status, ctx.mode) {
        ArchiveAction::Skip => {
            debug!(unit = %unit.name, "archive unchanged");
            Ok(ArchiveOutcome::Unchanged)
        }
        ArchiveAction::Remove => {
            let existed = ctx.namespaces.remove_archive(output)?;
            if existed {
                ctx.events.on_event(PipelineEvent::ArchiveDeleted {
                    unit: unit.name.clone(),
                    path: output.to_path_buf(),
                });
            }
            debug!(unit = %unit.name, existed, "archive removed");
            Ok(ArchiveOutcome::Removed { existed })
        }
        ArchiveAction::Rebuild => rebuild(ctx, unit, output).map(ArchiveOutcome::Rebuilt),
    }
}

fn rebuild(
    ctx: &ReconcileContext<'_>,
    unit: &ArchiveUnit,
    output: &Path,
) -> ReclassResult<UnitStats> {
    // Stale output goes first: if the rebuild fails, nothing is left behind.
    if ctx.namespaces.remove_archive(output)? {
        debug!(unit = %unit.name, path = %output.display(), "removed stale archive");
    }

    let mut input = ctx.namespaces.open_archive(&unit.path)?;
    let mut sink = ctx.namespaces.create_archive(output)?;

    debug!(
        unit = %unit.name,
        input = %input.describe(),
        output = %sink.describe(),
        "rebuilding archive"
    );

    // On error both namespaces drop here, discarding the unfinished archive.
    let stats = ctx
        .walker
        .walk(input.as_mut(), sink.as_mut(), |path, transformed| {
            ctx.entry_written(&unit.name, path, transformed)
        })?;

    sink.commit()?;
    Ok(stats)
}
