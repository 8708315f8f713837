//! Jar Archive Namespaces
//!
//! Concrete implementations of the namespace ports over zip containers.

mod reader;
mod writer;

pub use reader::ZipRoot;
pub use writer::ZipSink;
