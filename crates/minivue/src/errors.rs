//! Error definitions for the glue code of `minivue`.

use minivue_transform::error::TransformError;
use swc_core::common::Spanned;

/// A failure attached to a single file's compilation. Failures never
/// propagate across files: containment happens at file granularity.
#[derive(Debug)]
pub enum CompileError {
    /// A diagnostic from the template or script transformation.
    Transform(TransformError),
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::Transform(error) => std::fmt::Display::fmt(error, f),
        }
    }
}

impl std::error::Error for CompileError {}

impl From<TransformError> for CompileError {
    fn from(value: TransformError) -> Self {
        Self::Transform(value)
    }
}

impl Spanned for CompileError {
    fn span(&self) -> swc_core::common::Span {
        match self {
            CompileError::Transform(error) => error.span(),
        }
    }
}
