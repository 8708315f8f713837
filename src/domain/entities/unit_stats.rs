//! Per-unit processing counters

use serde::Serialize;

/// What a reconciler did to one unit's output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UnitStats {
    /// Class entries passed through the transform
    pub transformed: usize,
    /// Non-class entries copied verbatim
    pub copied: usize,
    /// Output files (or archives) deleted
    pub deleted: usize,
}

impl UnitStats {
    /// Total number of output entries written
    pub fn written(&self) -> usize {
        self.transformed + self.copied
    }

    pub fn merge(&mut self, other: UnitStats) {
        self.transformed += other.transformed;
        self.copied += other.copied;
        self.deleted += other.deleted;
    }

    pub fn is_empty(&self) -> bool {
        self.written() == 0 && self.deleted == 0
    }
}
