//! Configuration module for reclass
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (RECLASS_*)
//! 3. Project config (./reclass.toml)
//! 4. User config (~/.config/reclass/config.toml)
//! 5. Built-in defaults (lowest priority)

pub(crate) mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;
pub use loader::CONFIG_FILE_NAME;
pub use types::{Config, OutputConfig, PipelineConfig, TransformConfig, Verbosity};
