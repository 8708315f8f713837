//! Read-only jar namespace

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::domain::ports::NamespaceRoot;
use crate::domain::value_objects::EntryPath;
use crate::error::{ReclassError, ReclassResult};

/// Upper bound on the read buffer reserved from an entry's declared size
const MAX_PREALLOC: usize = 1 << 20;

/// An opened input jar
///
/// The central directory is indexed once on open. Entry names that cannot
/// be normalised (absolute, `..`) fail the open rather than being skipped,
/// as do two names that normalise to the same entry path.
pub struct ZipRoot {
    path: PathBuf,
    archive: ZipArchive<BufReader<File>>,
    index: BTreeMap<EntryPath, usize>,
}

impl ZipRoot {
    pub fn open(path: &Path) -> ReclassResult<Self> {
        let file = File::open(path).map_err(|e| ReclassError::io(path, e))?;
        let mut archive =
            ZipArchive::new(BufReader::new(file)).map_err(|e| ReclassError::archive(path, e))?;

        let mut index: BTreeMap<EntryPath, (usize, String)> = BTreeMap::new();
        for i in 0..archive.len() {
            let entry = archive
                .by_index_raw(i)
                .map_err(|e| ReclassError::archive(path, e))?;
            if entry.is_dir() {
                continue;
            }

            let name = entry.name().to_string();
            let entry_path =
                EntryPath::new(&name).map_err(|reason| ReclassError::InvalidEntryPath {
                    path: name.clone(),
                    reason,
                })?;
            if let Some((_, first)) = index.get(&entry_path) {
                return Err(ReclassError::DuplicateEntry {
                    archive: path.to_path_buf(),
                    path: entry_path,
                    first: first.clone(),
                    second: name,
                });
            }
            index.insert(entry_path, (i, name));
        }

        Ok(Self {
            path: path.to_path_buf(),
            archive,
            index: index.into_iter().map(|(k, (i, _))| (k, i)).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl NamespaceRoot for ZipRoot {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn entries(&mut self) -> ReclassResult<Vec<EntryPath>> {
        Ok(self.index.keys().cloned().collect())
    }

    fn read(&mut self, path: &EntryPath) -> ReclassResult<Vec<u8>> {
        let idx = *self
            .index
            .get(path)
            .ok_or_else(|| ReclassError::MissingInput { path: path.clone() })?;

        let mut entry = self
            .archive
            .by_index(idx)
            .map_err(|e| ReclassError::archive(&self.path, e))?;

        let declared = usize::try_from(entry.size()).unwrap_or(MAX_PREALLOC);
        let mut content = Vec::with_capacity(declared.min(MAX_PREALLOC));
        entry
            .read_to_end(&mut content)
            .map_err(|e| ReclassError::io(&self.path, e))?;
        Ok(content)
    }
}
