//! Reconstruction configuration building on the shared `config` crate.
//!
//! Geometric thresholds are exposed as fields rather than literals so tests
//! and hosts can probe predicate boundaries precisely.

use config::constants::GlobalConfig;

use crate::error::ReconstructionResult;

/// Strategy used to answer the k-nearest-neighbor queries of the graph
/// builder. Every strategy selects the same neighbors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NeighborSearch {
    /// Brute force for small clouds, hash grid from
    /// `grid_search_min_points` upward.
    #[default]
    Auto,
    /// Sort all other points by distance.
    BruteForce,
    /// Expanding-shell search over a uniform hash grid.
    Grid,
}

/// Pipeline configuration wrapper.
///
/// # Examples
/// ```
/// use hexmesh::{NeighborSearch, ReconstructionConfig};
/// let cfg = ReconstructionConfig::new(1.0e-4, 1.05)
///     .unwrap()
///     .with_neighbor_search(NeighborSearch::Grid);
/// assert_eq!(cfg.coplanarity_tolerance, 1.0e-4);
/// assert!(cfg.uses_grid(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReconstructionConfig {
    /// Maximum scalar triple product magnitude for a coplanar quad.
    pub coplanarity_tolerance: f64,
    /// Factor both squared diagonals must exceed the longest squared edge by.
    pub diagonal_ratio: f64,
    /// Point count from which `NeighborSearch::Auto` uses the hash grid.
    pub grid_search_min_points: usize,
    /// Neighbor query strategy.
    pub neighbor_search: NeighborSearch,
}

impl ReconstructionConfig {
    /// Creates a configuration from explicit predicate thresholds.
    ///
    /// # Errors
    /// Returns `ReconstructionError::InvalidConfig` when either value is not a
    /// positive finite number.
    pub fn new(coplanarity_tolerance: f64, diagonal_ratio: f64) -> ReconstructionResult<Self> {
        let defaults = GlobalConfig::default();
        let global = GlobalConfig::new(
            coplanarity_tolerance,
            diagonal_ratio,
            defaults.grid_search_min_points,
        )?;
        Ok(Self::from_global(global))
    }

    /// Wraps an already validated global snapshot.
    pub fn from_global(global: GlobalConfig) -> Self {
        Self {
            coplanarity_tolerance: global.coplanarity_tolerance,
            diagonal_ratio: global.diagonal_ratio,
            grid_search_min_points: global.grid_search_min_points,
            neighbor_search: NeighborSearch::Auto,
        }
    }

    /// Returns a copy using the given neighbor search strategy.
    pub fn with_neighbor_search(mut self, neighbor_search: NeighborSearch) -> Self {
        self.neighbor_search = neighbor_search;
        self
    }

    /// Returns a copy with a different automatic grid threshold.
    pub fn with_grid_search_min_points(mut self, grid_search_min_points: usize) -> Self {
        self.grid_search_min_points = grid_search_min_points;
        self
    }

    /// Whether a cloud of `point_count` points is searched through the grid.
    pub fn uses_grid(&self, point_count: usize) -> bool {
        match self.neighbor_search {
            NeighborSearch::Auto => point_count >= self.grid_search_min_points,
            NeighborSearch::BruteForce => false,
            NeighborSearch::Grid => true,
        }
    }
}

impl Default for ReconstructionConfig {
    fn default() -> Self {
        Self::from_global(GlobalConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReconstructionError;
    use config::constants::{COPLANARITY_TOLERANCE, DIAGONAL_RATIO, GRID_SEARCH_MIN_POINTS};

    #[test]
    fn test_default_matches_constants() {
        let cfg = ReconstructionConfig::default();
        assert_eq!(cfg.coplanarity_tolerance, COPLANARITY_TOLERANCE);
        assert_eq!(cfg.diagonal_ratio, DIAGONAL_RATIO);
        assert_eq!(cfg.grid_search_min_points, GRID_SEARCH_MIN_POINTS);
        assert_eq!(cfg.neighbor_search, NeighborSearch::Auto);
    }

    #[test]
    fn test_new_rejects_invalid_thresholds() {
        assert!(matches!(
            ReconstructionConfig::new(-1.0, 1.01),
            Err(ReconstructionError::InvalidConfig(_))
        ));
        assert!(matches!(
            ReconstructionConfig::new(1.0e-3, 0.0),
            Err(ReconstructionError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_auto_switches_at_threshold() {
        let cfg = ReconstructionConfig::default().with_grid_search_min_points(10);
        assert!(!cfg.uses_grid(9));
        assert!(cfg.uses_grid(10));
    }

    #[test]
    fn test_forced_strategies_ignore_threshold() {
        let brute = ReconstructionConfig::default().with_neighbor_search(NeighborSearch::BruteForce);
        assert!(!brute.uses_grid(usize::MAX));

        let grid = ReconstructionConfig::default().with_neighbor_search(NeighborSearch::Grid);
        assert!(grid.uses_grid(0));
    }
}
