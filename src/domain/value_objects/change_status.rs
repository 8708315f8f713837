//! Change status value object
//!
//! Attached per file for directory units and per unit for archive units.

use serde::{Deserialize, Serialize};

/// What happened to an input since the previous pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    /// New since the previous pass
    Added,
    /// Content changed since the previous pass
    Changed,
    /// Gone from the input; only drives output deletion
    Removed,
}

impl ChangeStatus {
    /// Returns true if the input has content that must be (re)written
    pub fn has_content(&self) -> bool {
        matches!(self, ChangeStatus::Added | ChangeStatus::Changed)
    }

    /// Returns true if this status only deletes output
    pub fn is_removal(&self) -> bool {
        matches!(self, ChangeStatus::Removed)
    }
}

impl std::fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeStatus::Added => write!(f, "added"),
            ChangeStatus::Changed => write!(f, "changed"),
            ChangeStatus::Removed => write!(f, "removed"),
        }
    }
}
