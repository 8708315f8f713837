//! Transform adapters
//!
//! Concrete `ClassTransform` implementations selectable from configuration.

mod command;
mod identity;

pub use command::CommandTransform;
pub use identity::IdentityTransform;

use std::sync::Arc;

use crate::domain::ports::ClassTransform;

/// Pick the transform for a configured command line
///
/// An empty command selects the identity transform.
pub fn from_command(argv: &[String]) -> Arc<dyn ClassTransform> {
    match CommandTransform::from_argv(argv) {
        Some(command) => Arc::new(command),
        None => Arc::new(IdentityTransform),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_command_is_identity() {
        assert_eq!(from_command(&[]).name(), "identity");
    }

    #[test]
    fn command_transform_named_after_program() {
        let t = from_command(&["rewrite-classes".to_string()]);
        assert_eq!(t.name(), "rewrite-classes");
    }
}
