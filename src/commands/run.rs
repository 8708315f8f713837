//! Run command handler
//!
//! Loads the manifest, locks the output area and reconciles every unit.

use std::sync::Arc;

use anyhow::{Context, Result};

use reclass::application::{RunOptions, RunResult, RunUseCase, UnitStatus};
use reclass::domain::ports::{InvocationRepository, PipelineEventSink};
use reclass::infrastructure::transform::from_command;
use reclass::infrastructure::{
    FanoutEventSink, JsonEventSink, LocalNamespaces, LocalOutputProvider,
    TomlInvocationRepository, TracingEventSink,
};

use crate::cli::RunArgs;

pub fn cmd_run(args: &RunArgs, json: bool, verbose: u8) -> Result<()> {
    let mut config = super::load_config(&args.output, verbose)?;
    if let Some(argv) = args.transform_argv() {
        config.transform.command = argv;
    }

    let (invocation, warnings) = TomlInvocationRepository::new()
        .load(&args.manifest)
        .with_context(|| format!("failed to load manifest {}", args.manifest.display()))?;
    super::report_warnings(&warnings);

    let options = RunOptions::from_config(&config)
        .with_parallel(config.pipeline.parallel || args.parallel)
        .with_fail_fast(config.pipeline.fail_fast || args.fail_fast);

    let outputs = LocalOutputProvider::new(&config.output.root);
    let _lock = outputs.lock()?;

    let transform = from_command(&config.transform.command);
    let events: Arc<dyn PipelineEventSink> = if json {
        let sinks: Vec<Arc<dyn PipelineEventSink>> = vec![
            Arc::new(JsonEventSink::stdout()),
            Arc::new(TracingEventSink),
        ];
        Arc::new(FanoutEventSink::new(sinks))
    } else {
        Arc::new(TracingEventSink)
    };

    let use_case = RunUseCase::new(LocalNamespaces::new(), outputs, transform);
    let result = use_case.execute_with_events(&invocation, &options, events)?;

    if !json {
        print_summary(&result);
    }

    if !result.is_success() {
        anyhow::bail!(
            "{} of {} unit(s) failed",
            result.failed_count(),
            result.outcomes.len()
        );
    }
    Ok(())
}

fn print_summary(result: &RunResult) {
    for outcome in &result.outcomes {
        match &outcome.status {
            UnitStatus::Processed(stats) => println!(
                "✓ {} {}: {} transformed, {} copied, {} deleted",
                outcome.format, outcome.unit, stats.transformed, stats.copied, stats.deleted
            ),
            UnitStatus::Skipped(reason) => {
                println!("- {} {}: skipped ({})", outcome.format, outcome.unit, reason)
            }
            UnitStatus::Failed(err) => println!("✗ {} {}: {}", outcome.format, outcome.unit, err),
        }
    }

    let totals = result.totals();
    println!(
        "{} pass: {} processed, {} skipped, {} failed ({} written, {} deleted)",
        result.mode,
        result.processed_count(),
        result.skipped_count(),
        result.failed_count(),
        totals.written(),
        totals.deleted
    );
}
