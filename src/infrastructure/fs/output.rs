//! Local Output Provider
//!
//! Lays out every unit's output under one root:
//!
//! ```text
//! <root>/directory/<name>/...   directory units
//! <root>/jar/<name>.jar         archive units
//! ```

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::domain::ports::OutputProvider;
use crate::domain::value_objects::UnitFormat;
use crate::error::{ReclassError, ReclassResult};

/// Output provider rooted at a local directory
#[derive(Debug, Clone)]
pub struct LocalOutputProvider {
    root: PathBuf,
}

impl LocalOutputProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lock file guarding the output root (a sibling, so `delete_all` keeps it)
    pub fn lock_path(&self) -> PathBuf {
        let mut name = self.root.as_os_str().to_owned();
        name.push(".lock");
        PathBuf::from(name)
    }

    /// Take the exclusive output lock for the lifetime of the returned guard
    pub fn lock(&self) -> ReclassResult<OutputLock> {
        let path = self.lock_path();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ReclassError::io(parent, e))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(|e| ReclassError::io(&path, e))?;

        file.try_lock_exclusive().map_err(|e| {
            if e.kind() == io::ErrorKind::WouldBlock
                || e.raw_os_error() == fs2::lock_contended_error().raw_os_error()
            {
                ReclassError::OutputLocked { path: path.clone() }
            } else {
                ReclassError::io(&path, e)
            }
        })?;

        Ok(OutputLock { file, path })
    }
}

impl OutputProvider for LocalOutputProvider {
    fn content_location(&self, name: &str, format: UnitFormat) -> PathBuf {
        let dir = self.root.join(format.as_str());
        let name = sanitize_name(name);
        match format {
            UnitFormat::Directory => dir.join(name),
            UnitFormat::Jar => dir.join(format!("{name}.jar")),
        }
    }

    fn delete_all(&self) -> ReclassResult<()> {
        match fs::remove_dir_all(&self.root) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ReclassError::io(&self.root, e)),
        }
    }
}

/// Held exclusive lock on the output area; released on drop
#[derive(Debug)]
pub struct OutputLock {
    file: File,
    path: PathBuf,
}

impl OutputLock {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for OutputLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

/// Map a unit name to a single safe path segment
///
/// Every character outside `[A-Za-z0-9._-]` becomes `_`; names made only
/// of dots are prefixed so they can never mean "here" or "parent".
pub fn sanitize_name(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.is_empty() || sanitized.chars().all(|c| c == '.') {
        format!("_{sanitized}")
    } else {
        sanitized
    }
}
