//! File System Implementations
//!
//! Directory namespaces and the output area on local disk.

mod local;
mod output;

pub use local::{atomic_write, remove_file_if_exists, DirectoryRoot, DirectorySink};
pub use output::{sanitize_name, LocalOutputProvider, OutputLock};
