//! # Error Types
//!
//! Errors for the reconstruction pipeline. The three phases themselves never
//! fail: malformed items (out-of-range indices) are skipped and an empty
//! result is valid. Errors only arise at the input boundary (loading points,
//! building a configuration) and when a session step is requested out of
//! order.

use config::constants::ConfigError;
use thiserror::Error;

use crate::session::Stage;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while preparing or sequencing a reconstruction.
///
/// ## Example
///
/// ```rust
/// use hexmesh::{PointCloud, ReconstructionError};
///
/// match PointCloud::from_flat(&[0.0, 0.0], &[3]) {
///     Err(ReconstructionError::MismatchedInput { coordinates, counts }) => {
///         assert_eq!((coordinates, counts), (2, 1));
///     }
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReconstructionError {
    /// A predicate threshold failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Flat coordinate and neighbor-count buffers do not describe the same
    /// number of points.
    #[error("Mismatched input: {coordinates} coordinates for {counts} neighbor counts")]
    MismatchedInput {
        /// Length of the coordinate buffer (three values per point)
        coordinates: usize,
        /// Length of the neighbor-count buffer (one value per point)
        counts: usize,
    },

    /// A point position contains NaN or an infinity.
    #[error("Point {index} has a non-finite position")]
    NonFinitePosition {
        /// Index of the offending point
        index: usize,
    },

    /// A session step was requested before the step it depends on.
    #[error("Cannot run '{requested}' while the session is at '{current}'")]
    StageNotReady {
        /// Stage the caller tried to produce
        requested: Stage,
        /// Furthest stage currently completed
        current: Stage,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for reconstruction operations.
pub type ReconstructionResult<T> = Result<T, ReconstructionError>;

// =============================================================================
// TESTS
// =============================================================================
