use thiserror::Error;

/// Errors returned by closestpair solvers.
///
/// Every error is raised by input validation before any sorting or recursion
/// starts; a solve either returns a full result or one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClosestPairError {
    #[error("closestpair: need at least 2 points, got {got}")]
    InvalidInputSize { got: usize },

    #[error("closestpair: dimension mismatch at point {index}: expected {expected}, got {got}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        got: usize,
    },

    #[error("closestpair: points must have at least one coordinate")]
    ZeroDimension,

    #[error("closestpair: non-finite coordinate at point {index}, axis {axis}")]
    NonFiniteCoordinate { index: usize, axis: usize },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ClosestPairError>;
