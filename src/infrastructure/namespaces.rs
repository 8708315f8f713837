//! Local namespace provider
//!
//! Binds the namespace ports to local directories and zip files.

use std::path::Path;

use crate::domain::ports::{ArchiveSink, NamespaceProvider, NamespaceRoot, NamespaceSink};
use crate::error::{ReclassError, ReclassResult};

use super::archive::{ZipRoot, ZipSink};
use super::fs::{remove_file_if_exists, DirectoryRoot, DirectorySink};

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalNamespaces;

impl LocalNamespaces {
    pub fn new() -> Self {
        Self
    }
}

impl NamespaceProvider for LocalNamespaces {
    fn open_directory(&self, root: &Path) -> ReclassResult<Box<dyn NamespaceRoot>> {
        Ok(Box::new(DirectoryRoot::new(root)))
    }

    fn directory_sink(&self, root: &Path) -> ReclassResult<Box<dyn NamespaceSink>> {
        std::fs::create_dir_all(root).map_err(|e| ReclassError::io(root, e))?;
        Ok(Box::new(DirectorySink::new(root)))
    }

    fn open_archive(&self, path: &Path) -> ReclassResult<Box<dyn NamespaceRoot>> {
        Ok(Box::new(ZipRoot::open(path)?))
    }

    fn create_archive(&self, path: &Path) -> ReclassResult<Box<dyn ArchiveSink>> {
        Ok(Box::new(ZipSink::create(path)?))
    }

    fn remove_archive(&self, path: &Path) -> ReclassResult<bool> {
        remove_file_if_exists(path)
    }
}
