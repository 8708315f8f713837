//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod invocation_repository;
pub mod namespace;
pub mod output_provider;
pub mod pipeline_events;
pub mod transform;

pub use invocation_repository::InvocationRepository;
pub use namespace::{ArchiveSink, NamespaceProvider, NamespaceRoot, NamespaceSink};
pub use output_provider::OutputProvider;
pub use pipeline_events::{NoopEventSink, PipelineEvent, PipelineEventSink};
pub use transform::{ClassTransform, FnTransform, TransformError};
