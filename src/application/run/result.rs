//! Run Result
//!
//! Result types for pipeline runs.

use crate::domain::entities::UnitStats;
use crate::domain::value_objects::{InvocationMode, UnitFormat};
use crate::error::ReclassError;

/// What happened to one unit
#[derive(Debug)]
pub enum UnitStatus {
    Processed(UnitStats),
    /// Not processed; the reason is human-readable
    Skipped(String),
    Failed(ReclassError),
}

/// Outcome of one unit, in invocation order
#[derive(Debug)]
pub struct UnitOutcome {
    pub unit: String,
    pub format: UnitFormat,
    pub status: UnitStatus,
}

impl UnitOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self.status, UnitStatus::Failed(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.status, UnitStatus::Skipped(_))
    }

    pub fn stats(&self) -> Option<&UnitStats> {
        match &self.status {
            UnitStatus::Processed(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ReclassError> {
        match &self.status {
            UnitStatus::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Result of a pipeline run
#[derive(Debug)]
pub struct RunResult {
    pub mode: InvocationMode,
    pub outcomes: Vec<UnitOutcome>,
}

impl RunResult {
    pub fn new(mode: InvocationMode) -> Self {
        Self {
            mode,
            outcomes: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }

    pub fn processed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.stats().is_some()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_skipped()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failed()).count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &UnitOutcome> {
        self.outcomes.iter().filter(|o| o.is_failed())
    }

    /// Counters summed over every processed unit
    pub fn totals(&self) -> UnitStats {
        let mut totals = UnitStats::default();
        for stats in self.outcomes.iter().filter_map(UnitOutcome::stats) {
            totals.merge(*stats);
        }
        totals
    }

    /// First outcome for a unit name
    pub fn outcome(&self, unit: &str) -> Option<&UnitOutcome> {
        self.outcomes.iter().find(|o| o.unit == unit)
    }
}
