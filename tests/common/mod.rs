//! Common test utilities for reclass CLI and property tests.
//!
//! This module provides:
//! - `TestEnv`: isolated working directory plus helpers to run the binary
//! - Fixture helpers for class directories, jars and manifests

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
