//! Error type for the checked vector operations.

/// Errors returned by the `try_*` operations on [`crate::Vector3`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// The operation needs a non-zero length vector but got a zero one
    Degenerate {
        /// Name of the operation that refused the input
        operation: &'static str,
    },
}

impl std::fmt::Display for VectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VectorError::Degenerate { operation } => {
                write!(f, "Degenerate vector: {operation} needs a non-zero length")
            }
        }
    }
}

impl std::error::Error for VectorError {}
