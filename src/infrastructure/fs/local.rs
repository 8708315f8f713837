//! Local Directory Namespaces
//!
//! Implements the namespace ports for a directory subtree on local disk.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::ports::{NamespaceRoot, NamespaceSink};
use crate::domain::value_objects::EntryPath;
use crate::error::{ReclassError, ReclassResult};

/// Read side of a directory unit
///
/// Opening never touches the disk; a missing root surfaces on first use.
#[derive(Debug, Clone)]
pub struct DirectoryRoot {
    root: PathBuf,
}

impl DirectoryRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl NamespaceRoot for DirectoryRoot {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn entries(&mut self) -> ReclassResult<Vec<EntryPath>> {
        if !self.root.is_dir() {
            return Err(ReclassError::io(
                &self.root,
                io::Error::new(io::ErrorKind::NotFound, "input directory does not exist"),
            ));
        }

        // Every file counts: no ignore files, no hidden-file filtering.
        // Links to files are entries read through the link; linked
        // directories are not descended into.
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .build();

        let mut entries = Vec::new();
        for result in walker {
            let entry = result.map_err(|e| {
                let message = e.to_string();
                let source = e.into_io_error().unwrap_or_else(|| io::Error::other(message));
                ReclassError::io(&self.root, source)
            })?;

            let Some(file_type) = entry.file_type() else {
                continue;
            };
            if file_type.is_symlink() {
                let target = fs::metadata(entry.path())
                    .map_err(|e| ReclassError::io(entry.path(), e))?;
                if !target.is_file() {
                    continue;
                }
            } else if !file_type.is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .unwrap_or_else(|_| entry.path());
            let path = EntryPath::from_relative(relative).map_err(|reason| {
                ReclassError::InvalidEntryPath {
                    path: relative.display().to_string(),
                    reason,
                }
            })?;
            entries.push(path);
        }

        entries.sort();
        Ok(entries)
    }

    fn read(&mut self, path: &EntryPath) -> ReclassResult<Vec<u8>> {
        let native = path.to_native(&self.root);
        fs::read(&native).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ReclassError::MissingInput { path: path.clone() },
            _ => ReclassError::io(&native, e),
        })
    }
}

/// Write side of a directory unit
///
/// Writes are atomic per file; directories are created on demand.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl NamespaceSink for DirectorySink {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn create_dir_all(&mut self, path: &EntryPath) -> ReclassResult<()> {
        let native = path.to_native(&self.root);
        fs::create_dir_all(&native).map_err(|e| ReclassError::io(&native, e))
    }

    fn write(&mut self, path: &EntryPath, content: &[u8]) -> ReclassResult<()> {
        let native = path.to_native(&self.root);
        atomic_write(&native, content).map_err(|e| ReclassError::io(&native, e))
    }

    fn remove(&mut self, path: &EntryPath) -> ReclassResult<bool> {
        remove_file_if_exists(&path.to_native(&self.root))
    }
}

/// Write content to a file atomically
///
/// Uses tempfile + rename in the destination directory, creating parent
/// directories as needed. Readers see either the old file or the new one.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut temp = tempfile::NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Remove a file, treating absence as success; returns whether it existed
pub fn remove_file_if_exists(path: &Path) -> ReclassResult<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(ReclassError::io(path, e)),
    }
}
