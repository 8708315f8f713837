//! Input units - the top-level artifacts tracked for change purposes
//!
//! Units are supplied fresh by the host build tool on every invocation and
//! are never persisted.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::value_objects::{ChangeStatus, EntryPath, UnitFormat};

/// A loose directory tree of class files and resources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryUnit {
    /// Stable identity, used to compute the output location
    pub name: String,
    /// Root of the input tree
    pub root: PathBuf,
    /// Per-file changes since the previous pass (incremental passes only)
    pub changes: BTreeMap<EntryPath, ChangeStatus>,
}

impl DirectoryUnit {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            changes: BTreeMap::new(),
        }
    }

    /// Record a change for one entry (last report for a path wins)
    pub fn with_change(mut self, path: EntryPath, status: ChangeStatus) -> Self {
        self.changes.insert(path, status);
        self
    }

    pub fn with_changes(
        mut self,
        changes: impl IntoIterator<Item = (EntryPath, ChangeStatus)>,
    ) -> Self {
        self.changes.extend(changes);
        self
    }
}

/// A single archive (jar) holding class files and resources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveUnit {
    /// Stable identity, used to compute the output location
    pub name: String,
    /// Path to the input archive file
    pub path: PathBuf,
    /// Aggregate status; `None` means unchanged since the previous pass
    pub status: Option<ChangeStatus>,
}

impl ArchiveUnit {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: ChangeStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// One unit of input for a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputUnit {
    Directory(DirectoryUnit),
    Archive(ArchiveUnit),
}

impl InputUnit {
    pub fn name(&self) -> &str {
        match self {
            InputUnit::Directory(unit) => &unit.name,
            InputUnit::Archive(unit) => &unit.name,
        }
    }

    pub fn format(&self) -> UnitFormat {
        match self {
            InputUnit::Directory(_) => UnitFormat::Directory,
            InputUnit::Archive(_) => UnitFormat::Jar,
        }
    }
}

impl From<DirectoryUnit> for InputUnit {
    fn from(unit: DirectoryUnit) -> Self {
        InputUnit::Directory(unit)
    }
}

impl From<ArchiveUnit> for InputUnit {
    fn from(unit: ArchiveUnit) -> Self {
        InputUnit::Archive(unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_unit_last_change_wins() {
        let path = EntryPath::new("A.class").unwrap();
        let unit = DirectoryUnit::new("main", "classes")
            .with_change(path.clone(), ChangeStatus::Added)
            .with_change(path.clone(), ChangeStatus::Removed);

        assert_eq!(unit.changes.len(), 1);
        assert_eq!(unit.changes[&path], ChangeStatus::Removed);
    }

    #[test]
    fn archive_unit_defaults_to_unchanged() {
        let unit = ArchiveUnit::new("lib", "lib.jar");
        assert!(unit.status.is_none());
    }

    #[test]
    fn input_unit_identity() {
        let dir: InputUnit = DirectoryUnit::new("main", "classes").into();
        let jar: InputUnit = ArchiveUnit::new("lib", "lib.jar").into();

        assert_eq!(dir.name(), "main");
        assert_eq!(dir.format(), UnitFormat::Directory);
        assert_eq!(jar.name(), "lib");
        assert_eq!(jar.format(), UnitFormat::Jar);
    }
}
