//! Namespace ports - "a tree of named entries with byte content"
//!
//! A directory subtree and an opened archive are two implementations of the
//! same capability, so the tree walker is written once against these traits.
//!
//! Implementations:
//! - `DirectoryRoot` / `DirectorySink` - local filesystem subtree
//! - `ZipRoot` / `ZipSink` - jar container

use std::path::Path;

use crate::domain::value_objects::EntryPath;
use crate::error::ReclassResult;

/// Read side of a namespace
pub trait NamespaceRoot {
    /// Human-readable location, for diagnostics
    fn describe(&self) -> String;

    /// Every file entry under the root, sorted
    fn entries(&mut self) -> ReclassResult<Vec<EntryPath>>;

    /// Full content of one entry
    ///
    /// A missing entry is reported as `ReclassError::MissingInput`.
    fn read(&mut self, path: &EntryPath) -> ReclassResult<Vec<u8>>;
}

/// Write side of a namespace
pub trait NamespaceSink {
    /// Human-readable location, for diagnostics
    fn describe(&self) -> String;

    /// Create a directory and all of its parents
    fn create_dir_all(&mut self, path: &EntryPath) -> ReclassResult<()>;

    /// Write (or replace) one entry
    fn write(&mut self, path: &EntryPath, content: &[u8]) -> ReclassResult<()>;

    /// Remove one entry; returns false if it was not present
    fn remove(&mut self, path: &EntryPath) -> ReclassResult<bool>;
}

/// Write side of an archive under construction
///
/// Nothing is visible at the archive's location until `commit` succeeds.
/// Dropping the sink without committing discards everything written.
pub trait ArchiveSink: NamespaceSink {
    /// Finalise the container and move it into place
    fn commit(self: Box<Self>) -> ReclassResult<()>;
}

/// Opens namespaces for the reconcilers
pub trait NamespaceProvider: Send + Sync {
    /// Open an input directory tree
    fn open_directory(&self, root: &Path) -> ReclassResult<Box<dyn NamespaceRoot>>;

    /// Open (creating if needed) an output directory tree
    fn directory_sink(&self, root: &Path) -> ReclassResult<Box<dyn NamespaceSink>>;

    /// Open an input archive read-only
    fn open_archive(&self, path: &Path) -> ReclassResult<Box<dyn NamespaceRoot>>;

    /// Start a new, empty output archive at `path`
    fn create_archive(&self, path: &Path) -> ReclassResult<Box<dyn ArchiveSink>>;

    /// Delete an output archive; returns false if none existed
    fn remove_archive(&self, path: &Path) -> ReclassResult<bool>;
}
