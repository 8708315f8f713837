//! Tree walking service
//!
//! Mirrors one namespace into another: class-bearing entries go through
//! the injected transform, everything else is copied byte for byte, and
//! every entry keeps its relative path.

use crate::domain::entities::UnitStats;
use crate::domain::ports::{ClassTransform, NamespaceRoot, NamespaceSink};
use crate::domain::value_objects::EntryPath;
use crate::error::{ReclassError, ReclassResult};

/// Default name suffix of class-bearing entries
pub const DEFAULT_CLASS_SUFFIX: &str = ".class";

/// Content ready to be written for one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    pub content: Vec<u8>,
    /// Whether the transform produced the content
    pub transformed: bool,
}

/// Walks namespaces and renders entries
///
/// Holds no state between entries; one walker can be shared by every unit
/// of a run.
pub struct TreeWalker<'a> {
    transform: &'a dyn ClassTransform,
    class_suffix: &'a str,
}

impl<'a> TreeWalker<'a> {
    pub fn new(transform: &'a dyn ClassTransform, class_suffix: &'a str) -> Self {
        Self {
            transform,
            class_suffix,
        }
    }

    /// Whether an entry is class-bearing
    pub fn is_class(&self, path: &EntryPath) -> bool {
        path.has_suffix(self.class_suffix)
    }

    /// Apply the transform to class entries, pass everything else through
    pub fn render(&self, path: &EntryPath, content: Vec<u8>) -> ReclassResult<RenderedEntry> {
        if !self.is_class(path) {
            return Ok(RenderedEntry {
                content,
                transformed: false,
            });
        }

        let content =
            self.transform
                .transform(&content)
                .map_err(|e| ReclassError::Transform {
                    path: path.clone(),
                    transform: self.transform.name().to_string(),
                    message: e.to_string(),
                })?;

        Ok(RenderedEntry {
            content,
            transformed: true,
        })
    }

    /// Render one entry and write it at the same relative path in `output`
    ///
    /// Returns whether the entry was transformed.
    pub fn write_entry<S>(
        &self,
        path: &EntryPath,
        content: Vec<u8>,
        output: &mut S,
    ) -> ReclassResult<bool>
    where
        S: NamespaceSink + ?Sized,
    {
        if let Some(parent) = path.parent() {
            output.create_dir_all(&parent)?;
        }

        let rendered = self.render(path, content)?;
        output.write(path, &rendered.content)?;
        Ok(rendered.transformed)
    }

    /// Mirror every file entry of `input` into `output`
    ///
    /// `on_entry` is called after each successful write with the entry path
    /// and whether it was transformed. The first failure aborts the walk;
    /// entries already written stay written.
    pub fn walk<R, S, F>(
        &self,
        input: &mut R,
        output: &mut S,
        mut on_entry: F,
    ) -> ReclassResult<UnitStats>
    where
        R: NamespaceRoot + ?Sized,
        S: NamespaceSink + ?Sized,
        F: FnMut(&EntryPath, bool),
    {
        let mut stats = UnitStats::default();

        for path in input.entries()? {
            let content = input.read(&path)?;
            let transformed = self.write_entry(&path, content, output)?;

            if transformed {
                stats.transformed += 1;
            } else {
                stats.copied += 1;
            }
            on_entry(&path, transformed);
        }

        Ok(stats)
    }
}
