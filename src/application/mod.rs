//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RunUseCase` - Clears output on full passes and reconciles every unit
//!
//! ## Services
//!
//! - `reconcile_directory` / `reconcile_archive` - per-unit reconcilers

pub mod reconcile;
pub mod run;

pub use reconcile::{
    reconcile_archive, reconcile_directory, ArchiveAction, ArchiveOutcome, ReconcileContext,
};
pub use run::{RunOptions, RunResult, RunUseCase, UnitOutcome, UnitStatus};
