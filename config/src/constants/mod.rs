//! Centralized configuration values shared across the reconstruction
//! pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// GEOMETRIC PREDICATES
// =============================================================================

/// Maximum magnitude of the scalar triple product for which four points are
/// treated as lying on one plane.
///
/// # Examples
/// ```
/// use config::constants::COPLANARITY_TOLERANCE;
/// assert!(COPLANARITY_TOLERANCE < 1.0e-2);
/// ```
pub const COPLANARITY_TOLERANCE: f64 = 1.0e-3;

/// Factor by which both squared diagonals of a candidate quad must exceed its
/// longest squared boundary edge.
///
/// # Examples
/// ```
/// use config::constants::DIAGONAL_RATIO;
/// // A unit square (squared diagonal 2) passes.
/// assert!(2.0 > DIAGONAL_RATIO * 1.0);
/// ```
pub const DIAGONAL_RATIO: f64 = 1.01;

// =============================================================================
// NEIGHBOR SEARCH
// =============================================================================

/// Point count from which automatic neighbor search switches from the
/// brute-force scan to the hash grid.
///
/// # Examples
/// ```
/// use config::constants::GRID_SEARCH_MIN_POINTS;
/// assert!(GRID_SEARCH_MIN_POINTS > 16);
/// ```
pub const GRID_SEARCH_MIN_POINTS: usize = 256;

/// Multiplier applied to the estimated mean point spacing when sizing grid
/// cells. Larger values give fewer cells with more points each.
///
/// # Examples
/// ```
/// use config::constants::GRID_CELL_FACTOR;
/// assert!(GRID_CELL_FACTOR >= 1.0);
/// ```
pub const GRID_CELL_FACTOR: f64 = 2.0;

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.coplanarity_tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Triple-product tolerance used by the coplanarity predicate.
    pub coplanarity_tolerance: f64,
    /// Squared-diagonal to squared-edge ratio used by the convexity predicate.
    pub diagonal_ratio: f64,
    /// Point count from which the grid neighbor search is preferred.
    pub grid_search_min_points: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// thresholds.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-4, 1.05, 512).expect("valid config");
    /// assert_eq!(cfg.grid_search_min_points, 512);
    /// ```
    pub fn new(
        coplanarity_tolerance: f64,
        diagonal_ratio: f64,
        grid_search_min_points: usize,
    ) -> Result<Self, ConfigError> {
        if !(coplanarity_tolerance.is_finite() && coplanarity_tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(coplanarity_tolerance));
        }
        if !(diagonal_ratio.is_finite() && diagonal_ratio > 0.0) {
            return Err(ConfigError::InvalidDiagonalRatio(diagonal_ratio));
        }
        Ok(Self {
            coplanarity_tolerance,
            diagonal_ratio,
            grid_search_min_points,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            coplanarity_tolerance: COPLANARITY_TOLERANCE,
            diagonal_ratio: DIAGONAL_RATIO,
            grid_search_min_points: GRID_SEARCH_MIN_POINTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the coplanarity tolerance is not a positive finite number.
    InvalidTolerance(f64),
    /// Raised when the diagonal ratio is not a positive finite number.
    InvalidDiagonalRatio(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "coplanarity tolerance must be positive: {value}")
            }
            ConfigError::InvalidDiagonalRatio(value) => {
                write!(f, "diagonal ratio must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
