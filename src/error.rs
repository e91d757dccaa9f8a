//! Error taxonomy for the algebra and geometry core.
//!
//! Every operation in `linalg` and `scene` fails fast with one of these variants.
//! There is no retry policy: all operations are deterministic pure computations.
//!
//! Floating-point overshoot outside `[-1, 1]` before an inverse cosine is *not* an
//! error; it is clamped and logged at trace level.

use thiserror::Error;

/// Result alias used across the core.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by vector algebra and diagram layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Operand lengths disagree, or an operation restricted to a specific shape
    /// (cross product: 3, determinant/eigen: square) received something else.
    #[error("{op}: dimension mismatch (expected {expected}, found {found})")]
    DimensionMismatch {
        op: &'static str,
        expected: usize,
        found: usize,
    },

    /// Zero-norm or otherwise collapsed input where a non-zero value is required.
    #[error("{op}: degenerate input ({reason})")]
    DegenerateInput { op: &'static str, reason: String },

    /// Presentation options that cannot produce a sensible diagram.
    #[error("invalid diagram options: {0}")]
    InvalidOptions(String),

    /// The dense solver did not return what was asked of it.
    #[error("eigen solver failed: {0}")]
    Solver(String),
}

impl Error {
    #[inline]
    pub(crate) fn mismatch(op: &'static str, expected: usize, found: usize) -> Self {
        Self::DimensionMismatch {
            op,
            expected,
            found,
        }
    }

    #[inline]
    pub(crate) fn degenerate(op: &'static str, reason: impl Into<String>) -> Self {
        Self::DegenerateInput {
            op,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_operation() {
        let err = Error::mismatch("cross", 3, 2);
        assert_eq!(
            err.to_string(),
            "cross: dimension mismatch (expected 3, found 2)"
        );

        let err = Error::degenerate("angle_between", "zero-length operand");
        assert_eq!(
            err.to_string(),
            "angle_between: degenerate input (zero-length operand)"
        );
    }
}
