//! Output Provider port - where each unit's output lives
//!
//! Output locations are a pure function of a unit's name and format, so the
//! same unit always lands in the same place across invocations.

use std::path::PathBuf;

use crate::domain::value_objects::UnitFormat;
use crate::error::ReclassResult;

/// Resolves output locations and owns the output area
pub trait OutputProvider: Send + Sync {
    /// Output root directory (directory units) or archive file (jar units)
    fn content_location(&self, name: &str, format: UnitFormat) -> PathBuf;

    /// Remove everything this pipeline ever produced
    fn delete_all(&self) -> ReclassResult<()>;
}
