//! Transform port - the injected byte-level class rewriter
//!
//! The pipeline never inspects class file structure. It hands each
//! class-bearing entry's bytes to a `ClassTransform` and writes back
//! whatever comes out.

/// Rejection of a class file by a transform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformError {
    message: String,
}

impl TransformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for TransformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for TransformError {}

/// Stateless rewriter applied independently to each class entry
///
/// Implementations must not depend on state outside their argument, which
/// is what lets units be processed on a worker pool.
pub trait ClassTransform: Send + Sync {
    /// Short name used in diagnostics
    fn name(&self) -> &str;

    /// Rewrite one class file
    fn transform(&self, input: &[u8]) -> Result<Vec<u8>, TransformError>;
}

/// Adapts a plain function or closure into a `ClassTransform`
pub struct FnTransform<F> {
    name: String,
    f: F,
}

impl<F> FnTransform<F>
where
    F: Fn(&[u8]) -> Result<Vec<u8>, TransformError> + Send + Sync,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> ClassTransform for FnTransform<F>
where
    F: Fn(&[u8]) -> Result<Vec<u8>, TransformError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn transform(&self, input: &[u8]) -> Result<Vec<u8>, TransformError> {
        (self.f)(input)
    }
}
