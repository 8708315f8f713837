use crate::domain::ports::{ClassTransform, TransformError};

/// Returns every class file unchanged
///
/// Used when no transform command is configured, which turns a run into a
/// plain mirror of the inputs.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityTransform;

impl ClassTransform for IdentityTransform {
    fn name(&self) -> &str {
        "identity"
    }

    fn transform(&self, input: &[u8]) -> Result<Vec<u8>, TransformError> {
        Ok(input.to_vec())
    }
}
