//! Unit format value object - the shape of an input unit
//!
//! Part of every output location and every diagnostic.

use serde::{Deserialize, Serialize};

/// Shape of a top-level input unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitFormat {
    /// Loose directory tree
    Directory,
    /// Jar (zip) archive
    Jar,
}

impl UnitFormat {
    /// Directory name used for this format under the output root
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitFormat::Directory => "directory",
            UnitFormat::Jar => "jar",
        }
    }

    /// Returns true if the unit is a single archive file
    pub fn is_archive(&self) -> bool {
        matches!(self, UnitFormat::Jar)
    }
}

impl std::fmt::Display for UnitFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
