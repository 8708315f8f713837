//! Domain Layer
//!
//! The core of reclass - the walking and rendering rules, free of any
//! concrete filesystem or archive format.
//!
//! ## Structure
//!
//! - `entities/` - Input units, invocations, per-unit stats
//! - `value_objects/` - Immutable value types (EntryPath, ChangeStatus, modes)
//! - `services/` - Domain services (TreeWalker)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer reaches files and archives only through ports
//! 2. **Write once** - The walker runs unchanged over directories and jars
//! 3. **Ports & Adapters** - The transform itself is a port

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
