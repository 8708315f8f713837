//! Run Use Case
//!
//! Orchestrates one invocation:
//! 1. Clear all prior output (full passes only)
//! 2. Dispatch each unit to its reconciler
//! 3. Collect one outcome per unit
//!
//! Units write disjoint output locations and the transform is stateless,
//! so units can be reconciled in any order or on a worker pool.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info_span};

use crate::application::reconcile::{
    reconcile_archive, reconcile_directory, ArchiveOutcome, ReconcileContext,
};
use crate::domain::entities::{InputUnit, Invocation, UnitStats};
use crate::domain::ports::{
    ClassTransform, NamespaceProvider, NoopEventSink, OutputProvider, PipelineEvent,
    PipelineEventSink,
};
use crate::domain::services::TreeWalker;
use crate::error::ReclassResult;

use super::options::RunOptions;
use super::result::{RunResult, UnitOutcome, UnitStatus};

/// Run use case - reconciles every unit of an invocation
pub struct RunUseCase<NP, OP>
where
    NP: NamespaceProvider,
    OP: OutputProvider,
{
    namespaces: NP,
    outputs: OP,
    transform: Arc<dyn ClassTransform>,
}

impl<NP, OP> RunUseCase<NP, OP>
where
    NP: NamespaceProvider,
    OP: OutputProvider,
{
    pub fn new(namespaces: NP, outputs: OP, transform: Arc<dyn ClassTransform>) -> Self {
        Self {
            namespaces,
            outputs,
            transform,
        }
    }

    /// Execute the run use case
    pub fn execute(&self, invocation: &Invocation, options: &RunOptions) -> ReclassResult<RunResult> {
        self.execute_with_events(invocation, options, Arc::new(NoopEventSink))
    }

    /// Execute the run use case with event reporting
    ///
    /// Unit failures are recorded in the result. An error is returned only
    /// when the run cannot start, i.e. a full pass fails to clear output.
    pub fn execute_with_events(
        &self,
        invocation: &Invocation,
        options: &RunOptions,
        events: Arc<dyn PipelineEventSink>,
    ) -> ReclassResult<RunResult> {
        let mode = invocation.mode;
        events.on_event(PipelineEvent::Started {
            mode,
            unit_count: invocation.units.len(),
        });

        if mode.is_full() {
            self.outputs.delete_all()?;
            events.on_event(PipelineEvent::OutputCleared);
        }

        let walker = TreeWalker::new(self.transform.as_ref(), &options.class_suffix);
        let ctx = ReconcileContext {
            walker: &walker,
            namespaces: &self.namespaces,
            events: events.as_ref(),
            mode,
        };
        let abort = AtomicBool::new(false);

        let outcomes: Vec<UnitOutcome> = if options.parallel {
            invocation
                .units
                .par_iter()
                .map(|unit| self.process_unit(&ctx, unit, options, &abort))
                .collect()
        } else {
            invocation
                .units
                .iter()
                .map(|unit| self.process_unit(&ctx, unit, options, &abort))
                .collect()
        };

        let result = RunResult { mode, outcomes };
        debug!(
            %mode,
            processed = result.processed_count(),
            skipped = result.skipped_count(),
            failed = result.failed_count(),
            "run finished"
        );
        events.on_event(PipelineEvent::Completed {
            processed: result.processed_count(),
            skipped: result.skipped_count(),
            failed: result.failed_count(),
        });

        Ok(result)
    }

    fn process_unit(
        &self,
        ctx: &ReconcileContext<'_>,
        unit: &InputUnit,
        options: &RunOptions,
        abort: &AtomicBool,
    ) -> UnitOutcome {
        let name = unit.name();
        let format = unit.format();
        let span = info_span!("unit", unit = %name, %format, mode = %ctx.mode);
        let _enter = span.enter();

        if options.fail_fast && abort.load(Ordering::SeqCst) {
            let reason = "not started after an earlier unit failed".to_string();
            ctx.events.on_event(PipelineEvent::UnitSkipped {
                unit: name.to_string(),
                format,
                reason: reason.clone(),
            });
            return outcome(unit, UnitStatus::Skipped(reason));
        }

        ctx.events.on_event(PipelineEvent::UnitStarted {
            unit: name.to_string(),
            format,
            mode: ctx.mode,
        });

        let output = self.outputs.content_location(name, format);
        let result = match unit {
            InputUnit::Directory(dir) => {
                reconcile_directory(ctx, dir, &output).map(UnitStatus::Processed)
            }
            InputUnit::Archive(archive) => {
                reconcile_archive(ctx, archive, &output).map(|o| match o {
                    ArchiveOutcome::Rebuilt(stats) => UnitStatus::Processed(stats),
                    ArchiveOutcome::Removed { existed } => UnitStatus::Processed(UnitStats {
                        deleted: usize::from(existed),
                        ..UnitStats::default()
                    }),
                    ArchiveOutcome::Unchanged => UnitStatus::Skipped("unchanged".to_string()),
                })
            }
        };

        let status = match result {
            Ok(status) => status,
            Err(err) => {
                if options.fail_fast {
                    abort.store(true, Ordering::SeqCst);
                }
                UnitStatus::Failed(err.in_unit(name, format, ctx.mode))
            }
        };

        match &status {
            UnitStatus::Processed(stats) => ctx.events.on_event(PipelineEvent::UnitCompleted {
                unit: name.to_string(),
                format,
                stats: *stats,
            }),
            UnitStatus::Skipped(reason) => ctx.events.on_event(PipelineEvent::UnitSkipped {
                unit: name.to_string(),
                format,
                reason: reason.clone(),
            }),
            UnitStatus::Failed(err) => ctx.events.on_event(PipelineEvent::UnitFailed {
                unit: name.to_string(),
                format,
                error: err.to_string(),
            }),
        }

        outcome(unit, status)
    }
}

fn outcome(unit: &InputUnit, status: UnitStatus) -> UnitOutcome {
    UnitOutcome {
        unit: unit.name().to_string(),
        format: unit.format(),
        status,
    }
}
