//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Directory namespaces, atomic writes, the output area
//! - `archive/` - Jar namespaces (zip)
//! - `transform/` - Transform adapters (identity, external command)
//! - `events/` - Event sinks (NDJSON, tracing)
//! - `repositories/` - Invocation manifest loading

pub mod archive;
pub mod events;
pub mod fs;
mod namespaces;
pub mod repositories;
pub mod transform;

// Re-export for convenience
pub use events::{FanoutEventSink, JsonEventSink, TracingEventSink};
pub use fs::{LocalOutputProvider, OutputLock};
pub use namespaces::LocalNamespaces;
pub use repositories::TomlInvocationRepository;
pub use transform::{CommandTransform, IdentityTransform};
