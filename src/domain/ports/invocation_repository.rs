//! InvocationRepository port - how an invocation reaches the pipeline
//!
//! The host build tool describes units, modes and change maps as plain
//! data. This trait lets the application load that description without
//! knowing its serialization.

use std::path::Path;

use crate::domain::entities::Invocation;
use crate::domain::value_objects::ConfigWarning;
use crate::error::ReclassResult;

/// Abstract source of invocations
pub trait InvocationRepository {
    /// Load an invocation, collecting non-fatal warnings (e.g. unknown keys)
    fn load(&self, path: &Path) -> ReclassResult<(Invocation, Vec<ConfigWarning>)>;
}
