//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services reach storage only through ports.

mod tree_walker;

pub use tree_walker::{RenderedEntry, TreeWalker, DEFAULT_CLASS_SUFFIX};
