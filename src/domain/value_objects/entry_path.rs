//! Entry Path Value Object
//!
//! A validated path of an entry relative to a namespace root:
//! - Always relative (no leading `/`, no drive prefix)
//! - No traversal components (`..`)
//! - `/`-separated regardless of platform, so directory entries and
//!   archive entries share one representation

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Error when path validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Path contains traversal components (..)
    ContainsTraversal,
    /// Path escapes the root boundary
    EscapesBoundary { path: PathBuf, root: PathBuf },
    /// Path is absolute when relative is required
    AbsoluteNotAllowed,
    /// Path component is not valid UTF-8
    NonUtf8,
    /// Path is empty
    Empty,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::ContainsTraversal => {
                write!(f, "path contains traversal components (..)")
            }
            PathError::EscapesBoundary { path, root } => {
                write!(
                    f,
                    "path '{}' escapes root '{}'",
                    path.display(),
                    root.display()
                )
            }
            PathError::AbsoluteNotAllowed => write!(f, "absolute paths are not allowed"),
            PathError::NonUtf8 => write!(f, "path is not valid UTF-8"),
            PathError::Empty => write!(f, "path is empty"),
        }
    }
}

impl std::error::Error for PathError {}

/// Relative path of an entry inside a namespace root
///
/// Ordering is lexicographic on the normalised string, which gives
/// deterministic walk order and deterministic archive layout.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntryPath(String);

impl EntryPath {
    /// Parse a `/`-separated entry name (change-map key or archive entry name)
    ///
    /// Empty segments and `.` are dropped, so `a//b/./c` normalises to `a/b/c`.
    pub fn new(name: &str) -> Result<Self, PathError> {
        if name.starts_with('/') || name.starts_with('\\') {
            return Err(PathError::AbsoluteNotAllowed);
        }

        let mut segments = Vec::new();
        for segment in name.split('/') {
            match segment {
                "" | "." => continue,
                ".." => return Err(PathError::ContainsTraversal),
                s if s.contains(':') && segments.is_empty() && is_drive_prefix(s) => {
                    return Err(PathError::AbsoluteNotAllowed)
                }
                s => segments.push(s),
            }
        }

        if segments.is_empty() {
            return Err(PathError::Empty);
        }

        Ok(Self(segments.join("/")))
    }

    /// Build from a native relative path (e.g. produced by a directory walk)
    pub fn from_relative(path: &Path) -> Result<Self, PathError> {
        let mut segments = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(s) => segments.push(s.to_str().ok_or(PathError::NonUtf8)?),
                Component::CurDir => continue,
                Component::ParentDir => return Err(PathError::ContainsTraversal),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(PathError::AbsoluteNotAllowed)
                }
            }
        }

        if segments.is_empty() {
            return Err(PathError::Empty);
        }

        Ok(Self(segments.join("/")))
    }

    /// Build from a path that is either relative to `root` or absolute inside it
    pub fn within_root(path: &Path, root: &Path) -> Result<Self, PathError> {
        if !path.is_absolute() {
            return Self::from_relative(path);
        }

        let relative = path
            .strip_prefix(root)
            .map_err(|_| PathError::EscapesBoundary {
                path: path.to_path_buf(),
                root: root.to_path_buf(),
            })?;
        Self::from_relative(relative)
    }

    /// The normalised `/`-separated form
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last segment
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Parent directory, `None` for top-level entries
    pub fn parent(&self) -> Option<EntryPath> {
        self.0
            .rsplit_once('/')
            .map(|(parent, _)| Self(parent.to_string()))
    }

    /// All parent directories, outermost first (`a`, `a/b` for `a/b/c`)
    pub fn ancestors(&self) -> Vec<EntryPath> {
        self.0
            .match_indices('/')
            .map(|(idx, _)| Self(self.0[..idx].to_string()))
            .collect()
    }

    /// Whether the entry name marks a class-bearing entry
    pub fn has_suffix(&self, suffix: &str) -> bool {
        self.file_name().ends_with(suffix)
    }

    /// Resolve under a native root directory
    pub fn to_native(&self, root: &Path) -> PathBuf {
        self.0
            .split('/')
            .fold(root.to_path_buf(), |acc, segment| acc.join(segment))
    }
}

fn is_drive_prefix(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

impl fmt::Display for EntryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for EntryPath {
    type Error = PathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl TryFrom<&str> for EntryPath {
    type Error = PathError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EntryPath> for String {
    fn from(path: EntryPath) -> Self {
        path.0
    }
}
