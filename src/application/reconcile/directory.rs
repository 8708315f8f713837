//! Directory Reconciler

use std::path::Path;

use tracing::debug;

use crate::domain::entities::{DirectoryUnit, UnitStats};
use crate::error::ReclassResult;

use super::ReconcileContext;

/// Reconcile one directory unit into `output_root`
///
/// Full passes mirror the whole input tree. Incremental passes touch only
/// the entries named in the change map: Added/Changed entries are
/// re-rendered from input, Removed entries are deleted from output.
/// Removing an entry that is not in the output is a no-op; an Added or
/// Changed entry missing from the input fails the unit.
pub fn reconcile_directory(
    ctx: &ReconcileContext<'_>,
    unit: &DirectoryUnit,
    output_root: &Path,
) -> ReclassResult<UnitStats> {
    if ctx.mode.is_incremental() && unit.changes.is_empty() {
        debug!(unit = %unit.name, "no changes reported");
        return Ok(UnitStats::default());
    }

    let mut input = ctx.namespaces.open_directory(&unit.root)?;
    let mut output = ctx.namespaces.directory_sink(output_root)?;

    if ctx.mode.is_full() {
        debug!(
            unit = %unit.name,
            input = %input.describe(),
            output = %output.describe(),
            "mirroring directory"
        );
        return ctx
            .walker
            .walk(input.as_mut(), output.as_mut(), |path, transformed| {
                ctx.entry_written(&unit.name, path, transformed)
            });
    }

    debug!(unit = %unit.name, changes = unit.changes.len(), "applying changes");

    let mut stats = UnitStats::default();
    for (path, status) in &unit.changes {
        if status.is_removal() {
            if output.remove(path)? {
                stats.deleted += 1;
                ctx.entry_deleted(&unit.name, path);
            }
            continue;
        }

        let content = input.read(path)?;
        let transformed = ctx.walker.write_entry(path, content, output.as_mut())?;
        if transformed {
            stats.transformed += 1;
        } else {
            stats.copied += 1;
        }
        ctx.entry_written(&unit.name, path, transformed);
    }

    Ok(stats)
}
