//! Error types for path generation.

use thiserror::Error;

/// Result type for path generation operations.
pub type PathResult<T> = Result<T, PathError>;

/// Errors that can occur while generating a spline path.
#[derive(Debug, Clone, Error)]
pub enum PathError {
    /// Fewer control points than a cubic spline needs.
    #[error("Insufficient control points for {context}: need at least {required}, got {actual}")]
    InsufficientPoints {
        required: usize,
        actual: usize,
        context: String,
    },

    /// The boundary system could not be solved (zero pivot or non-finite solution).
    #[error("Singular boundary system in {context}: {message}")]
    SingularSystem { context: String, message: String },

    /// A host-side buffer could not be reserved.
    #[error("Allocation of {elements} elements failed in {context}")]
    AllocationFailure { elements: usize, context: String },

    /// Invalid parameter value.
    #[error("Invalid parameter '{parameter}': {message}")]
    InvalidParameter { parameter: String, message: String },

    /// Error from underlying numr operation.
    #[error("numr error: {0}")]
    NumrError(String),
}

impl From<numr::error::Error> for PathError {
    fn from(err: numr::error::Error) -> Self {
        Self::NumrError(err.to_string())
    }
}

/// Reserve room for `elements` values, reporting failure as [`PathError::AllocationFailure`].
pub(crate) fn try_buffer(elements: usize, context: &str) -> PathResult<Vec<f64>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(elements)
        .map_err(|_| PathError::AllocationFailure {
            elements,
            context: context.to_string(),
        })?;
    Ok(buffer)
}
