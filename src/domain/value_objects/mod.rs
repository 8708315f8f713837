//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod change_status;
mod config_warning;
mod entry_path;
mod invocation_mode;
mod unit_format;

pub use change_status::ChangeStatus;
pub use config_warning::ConfigWarning;
pub use entry_path::{EntryPath, PathError};
pub use invocation_mode::InvocationMode;
pub use unit_format::UnitFormat;
