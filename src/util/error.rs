//! Error types for detset.

use thiserror::Error;

/// Result alias for detset operations.
pub type Result<T> = std::result::Result<T, DetSetError>;

/// Errors raised by the classification API.
///
/// Set construction and selection never fail; these only surface from
/// direct lookups on a [`DetectedObjectType`](crate::DetectedObjectType).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DetSetError {
    /// The requested category is not present in the classification.
    #[error("category not found: {name}")]
    CategoryNotFound { name: String },
    /// Parallel name/score inputs have different lengths.
    #[error("length mismatch: {names} names vs {scores} scores")]
    LengthMismatch { names: usize, scores: usize },
}
