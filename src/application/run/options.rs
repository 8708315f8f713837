//! Run Options
//!
//! Configuration types for pipeline runs.

use crate::config::Config;
use crate::domain::services::DEFAULT_CLASS_SUFFIX;

/// Options for the run use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Name suffix of class-bearing entries
    pub class_suffix: String,
    /// Reconcile units on the rayon worker pool
    pub parallel: bool,
    /// Stop starting new units after the first failure
    pub fail_fast: bool,
}

impl RunOptions {
    pub fn new() -> Self {
        Self {
            class_suffix: DEFAULT_CLASS_SUFFIX.to_string(),
            parallel: false,
            fail_fast: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            class_suffix: config.pipeline.class_suffix.clone(),
            parallel: config.pipeline.parallel,
            fail_fast: config.pipeline.fail_fast,
        }
    }

    pub fn with_class_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.class_suffix = suffix.into();
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::new()
    }
}
