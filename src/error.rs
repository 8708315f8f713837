//! Error types for reclass
//!
//! Uses `thiserror` for library errors. Every variant names the path it
//! concerns so a failing build step can be diagnosed from the message alone.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::value_objects::{EntryPath, InvocationMode, PathError, UnitFormat};

/// Result type alias for reclass operations
pub type ReclassResult<T> = Result<T, ReclassError>;

/// Main error type for reclass operations
#[derive(Error, Debug)]
pub enum ReclassError {
    /// Filesystem read/write/delete failure
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Archive container could not be opened, read or finalised
    #[error("archive error in {}: {source}", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// The injected transform rejected a class file
    #[error("transform '{transform}' failed on {path}: {message}")]
    Transform {
        path: EntryPath,
        transform: String,
        message: String,
    },

    /// An Added/Changed entry has no input content
    #[error("missing input for {path} (reported as added or changed)")]
    MissingInput { path: EntryPath },

    /// An entry name could not be normalised into a relative entry path
    #[error("invalid entry path '{path}': {reason}")]
    InvalidEntryPath { path: String, reason: PathError },

    /// Two archive entry names normalise to the same entry path
    #[error("archive {} has entries '{first}' and '{second}' that both resolve to {path}", archive.display())]
    DuplicateEntry {
        archive: PathBuf,
        path: EntryPath,
        first: String,
        second: String,
    },

    /// Invocation manifest could not be parsed or is inconsistent
    #[error("invalid manifest {}: {message}", file.display())]
    Manifest { file: PathBuf, message: String },

    /// Configuration file could not be parsed
    #[error("invalid config {}: {message}", file.display())]
    Config { file: PathBuf, message: String },

    /// Another invocation holds the output lock
    #[error("output area is locked by another invocation: {}", path.display())]
    OutputLocked { path: PathBuf },

    /// Failure of a single unit, with the context needed to diagnose it
    #[error("{format} unit '{unit}' failed during {mode} pass: {source}")]
    Unit {
        unit: String,
        format: UnitFormat,
        mode: InvocationMode,
        #[source]
        source: Box<ReclassError>,
    },
}

impl ReclassError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Wrap a zip error with the archive it happened in
    pub fn archive(path: impl AsRef<Path>, source: zip::result::ZipError) -> Self {
        Self::Archive {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Attach unit identity to an error raised while processing that unit
    pub fn in_unit(
        self,
        unit: impl Into<String>,
        format: UnitFormat,
        mode: InvocationMode,
    ) -> Self {
        Self::Unit {
            unit: unit.into(),
            format,
            mode,
            source: Box::new(self),
        }
    }

    /// Entry path the error concerns, if any (looks through unit context)
    pub fn entry_path(&self) -> Option<&EntryPath> {
        match self {
            Self::Transform { path, .. }
            | Self::MissingInput { path }
            | Self::DuplicateEntry { path, .. } => Some(path),
            Self::Unit { source, .. } => source.entry_path(),
            _ => None,
        }
    }
}
