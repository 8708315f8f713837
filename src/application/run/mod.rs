//! Run Module
//!
//! Orchestrates one pipeline invocation.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`RunOptions`)
//! - `result` - Result types (`RunResult`, `UnitOutcome`)
//! - `use_case` - Core use case logic (`RunUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use reclass::application::run::{RunOptions, RunUseCase};
//!
//! let use_case = RunUseCase::new(namespaces, outputs, transform);
//! let result = use_case.execute(&invocation, &RunOptions::new())?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::RunOptions;
pub use result::{RunResult, UnitOutcome, UnitStatus};
pub use use_case::RunUseCase;
