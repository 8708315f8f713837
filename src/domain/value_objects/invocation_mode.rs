//! Invocation mode value object
//!
//! - `Full`: prior output is wiped and every unit is reprocessed
//! - `Incremental`: only the reported change set is applied

use serde::{Deserialize, Serialize};

/// Global mode of one pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvocationMode {
    #[default]
    Full,
    Incremental,
}

impl InvocationMode {
    pub fn is_full(&self) -> bool {
        matches!(self, InvocationMode::Full)
    }

    pub fn is_incremental(&self) -> bool {
        matches!(self, InvocationMode::Incremental)
    }
}

impl std::fmt::Display for InvocationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvocationMode::Full => write!(f, "full"),
            InvocationMode::Incremental => write!(f, "incremental"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_default_is_full() {
        assert_eq!(InvocationMode::default(), InvocationMode::Full);
        assert!(InvocationMode::default().is_full());
    }

    #[test]
    fn mode_display() {
        assert_eq!(InvocationMode::Full.to_string(), "full");
        assert_eq!(InvocationMode::Incremental.to_string(), "incremental");
    }
}
