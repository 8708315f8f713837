//! reclass - incremental class-file rewriting for JVM builds
//!
//! Takes the compiled inputs of a build (loose class directories and jar
//! archives), passes every class file through an injected transform, copies
//! everything else verbatim, and keeps the output in step with the input
//! across full and incremental passes.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{RunOptions, RunResult, RunUseCase, UnitOutcome, UnitStatus};
pub use config::Config;
pub use domain::entities::{ArchiveUnit, DirectoryUnit, InputUnit, Invocation, UnitStats};
pub use domain::ports::{ClassTransform, FnTransform, TransformError};
pub use domain::value_objects::{ChangeStatus, EntryPath, InvocationMode, UnitFormat};
pub use error::{ReclassError, ReclassResult};
