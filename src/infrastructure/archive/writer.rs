//! Writable jar namespace
//!
//! The container is assembled in a temporary file beside its final
//! location and renamed into place by `commit`. Dropping an uncommitted
//! sink deletes the temporary file, so a failed rebuild never leaves a
//! half-written jar where packaging would pick it up.

use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::domain::ports::{ArchiveSink, NamespaceSink};
use crate::domain::value_objects::EntryPath;
use crate::error::{ReclassError, ReclassResult};

/// An output jar under construction
pub struct ZipSink {
    target: PathBuf,
    writer: ZipWriter<NamedTempFile>,
    options: SimpleFileOptions,
    dirs: HashSet<EntryPath>,
    written: HashSet<EntryPath>,
}

impl ZipSink {
    /// Start an empty archive that will land at `target` on commit
    pub fn create(target: &Path) -> ReclassResult<Self> {
        let parent = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(|e| ReclassError::io(parent, e))?;
        let temp = NamedTempFile::new_in(parent).map_err(|e| ReclassError::io(parent, e))?;

        // No timestamps: identical inputs give byte-identical jars.
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        Ok(Self {
            target: target.to_path_buf(),
            writer: ZipWriter::new(temp),
            options,
            dirs: HashSet::new(),
            written: HashSet::new(),
        })
    }

    fn add_dir(&mut self, dir: EntryPath) -> ReclassResult<()> {
        if self.dirs.contains(&dir) {
            return Ok(());
        }
        self.writer
            .add_directory(format!("{dir}/"), self.options)
            .map_err(|e| ReclassError::archive(&self.target, e))?;
        self.dirs.insert(dir);
        Ok(())
    }
}

impl NamespaceSink for ZipSink {
    fn describe(&self) -> String {
        self.target.display().to_string()
    }

    fn create_dir_all(&mut self, path: &EntryPath) -> ReclassResult<()> {
        for ancestor in path.ancestors() {
            self.add_dir(ancestor)?;
        }
        self.add_dir(path.clone())
    }

    fn write(&mut self, path: &EntryPath, content: &[u8]) -> ReclassResult<()> {
        self.writer
            .start_file(path.as_str(), self.options)
            .map_err(|e| ReclassError::archive(&self.target, e))?;
        self.writer
            .write_all(content)
            .map_err(|e| ReclassError::io(&self.target, e))?;
        self.written.insert(path.clone());
        Ok(())
    }

    fn remove(&mut self, path: &EntryPath) -> ReclassResult<bool> {
        if self.written.contains(path) {
            return Err(ReclassError::archive(
                &self.target,
                ZipError::UnsupportedArchive(
                    "entries cannot be removed from an archive under construction",
                ),
            ));
        }
        Ok(false)
    }
}

impl ArchiveSink for ZipSink {
    fn commit(self: Box<Self>) -> ReclassResult<()> {
        let ZipSink { target, writer, .. } = *self;
        let temp = writer
            .finish()
            .map_err(|e| ReclassError::archive(&target, e))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| ReclassError::io(&target, e))?;
        temp.persist(&target)
            .map_err(|e| ReclassError::io(&target, e.error))?;
        Ok(())
    }
}
