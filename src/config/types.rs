//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::DEFAULT_CLASS_SUFFIX;
use crate::domain::value_objects::ConfigWarning;
use crate::error::ReclassResult;

use super::loader;

/// Pipeline behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Name suffix that marks class-bearing entries
    #[serde(default = "default_class_suffix")]
    pub class_suffix: String,

    /// Process units on a worker pool
    #[serde(default)]
    pub parallel: bool,

    /// Stop attempting units after the first failure
    #[serde(default)]
    pub fail_fast: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            class_suffix: default_class_suffix(),
            parallel: false,
            fail_fast: false,
        }
    }
}

fn default_class_suffix() -> String {
    DEFAULT_CLASS_SUFFIX.to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Root of everything the pipeline produces
    #[serde(default = "default_output_root")]
    pub root: PathBuf,

    #[serde(default)]
    pub verbosity: Verbosity,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: default_output_root(),
            verbosity: Verbosity::default(),
        }
    }
}

fn default_output_root() -> PathBuf {
    PathBuf::from("build/reclass")
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Default log filter directive for this verbosity
    pub fn log_level(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Which transform the binary injects
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TransformConfig {
    /// External program and arguments; empty means the identity transform
    #[serde(default)]
    pub command: Vec<String>,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub pipeline: PipelineConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub transform: TransformConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ReclassResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ReclassResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(
        project_root: Option<&Path>,
    ) -> ReclassResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (RECLASS_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
