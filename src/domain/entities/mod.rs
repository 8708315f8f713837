//! Domain Entities
//!
//! - `DirectoryUnit` / `ArchiveUnit` - top-level inputs
//! - `Invocation` - the mode plus every unit of one run
//! - `UnitStats` - what a reconciler did to one unit

mod invocation;
mod unit;
mod unit_stats;

pub use invocation::Invocation;
pub use unit::{ArchiveUnit, DirectoryUnit, InputUnit};
pub use unit_stats::UnitStats;
