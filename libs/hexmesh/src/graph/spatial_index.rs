//! # Spatial Index for Neighbor Queries
//!
//! Uniform hash grid over the point cloud for k-nearest queries in
//! O(N log N) overall instead of sorting every other point.
//!
//! ## Exactness
//!
//! Cells are visited in Chebyshev shells around the query's cell. After shell
//! `r`, every unvisited point is at least `(r - 1) * cell_size` away (one
//! shell of slack covers rounding at cell boundaries). The search stops once
//! the k-th best candidate is strictly closer than that bound, so the result
//! equals the brute-force selection, ties included.
//!
//! ## Example
//!
//! ```rust
//! use hexmesh::graph::SpatialIndex;
//! use hexmesh::fixtures;
//!
//! let points = fixtures::structured_grid(3, 3, 3);
//! let index = SpatialIndex::build(&points);
//! let neighbors = index.nearest(&points, 0);
//! assert_eq!(neighbors.into_iter().collect::<Vec<_>>(), vec![1, 4, 16]);
//! ```

use std::collections::{BTreeSet, HashMap};

use config::constants::GRID_CELL_FACTOR;
use glam::DVec3;

use super::compare_candidates;
use crate::point::PointCloud;

/// Smallest permitted cell edge; guards clouds with a tiny extent.
const MIN_CELL_SIZE: f64 = 1.0e-9;

/// 3D cell coordinate for spatial hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CellCoord {
    x: i64,
    y: i64,
    z: i64,
}

impl CellCoord {
    /// Creates a cell coordinate from a position relative to the grid origin.
    fn from_position(pos: DVec3, origin: DVec3, cell_size: f64) -> Self {
        let rel = (pos - origin) / cell_size;
        Self {
            x: rel.x.floor() as i64,
            y: rel.y.floor() as i64,
            z: rel.z.floor() as i64,
        }
    }

    fn offset(self, dx: i64, dy: i64, dz: i64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }
}

/// Hash grid mapping cells to the indices of the points inside them.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    /// Hash grid: cell -> point indices
    grid: HashMap<CellCoord, Vec<usize>>,
    /// Edge length of a cubic cell
    cell_size: f64,
    /// Grid origin (bounding box minimum)
    origin: DVec3,
    /// Largest occupied cell coordinate on any axis
    max_extent: i64,
}

impl SpatialIndex {
    /// Builds the index.
    ///
    /// The cell edge is the mean point spacing along the longest axis of the
    /// bounding box, scaled by `GRID_CELL_FACTOR`.
    pub fn build(points: &PointCloud) -> Self {
        let Some((min, max)) = points.bounding_box() else {
            return Self {
                grid: HashMap::new(),
                cell_size: 1.0,
                origin: DVec3::ZERO,
                max_extent: 0,
            };
        };

        let extent = (max - min).max_element();
        let spacing = extent / (points.len() as f64).cbrt();
        let cell_size = if extent > 0.0 {
            (spacing * GRID_CELL_FACTOR).max(MIN_CELL_SIZE)
        } else {
            1.0
        };

        let mut grid: HashMap<CellCoord, Vec<usize>> = HashMap::new();
        let mut max_extent = 0;
        for (i, p) in points.iter().enumerate() {
            let cell = CellCoord::from_position(p.position, min, cell_size);
            max_extent = max_extent.max(cell.x).max(cell.y).max(cell.z);
            grid.entry(cell).or_default().push(i);
        }

        Self {
            grid,
            cell_size,
            origin: min,
            max_extent,
        }
    }

    /// Returns the number of occupied cells.
    pub fn cell_count(&self) -> usize {
        self.grid.len()
    }

    /// Returns the cell edge length.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Selects the `required_neighbors` nearest points of point `index`.
    ///
    /// Returns an empty set when `index` is out of range.
    pub fn nearest(&self, points: &PointCloud, index: usize) -> BTreeSet<usize> {
        let Some(query) = points.get(index) else {
            return BTreeSet::new();
        };
        let k = query.required_neighbors.min(points.len().saturating_sub(1));
        if k == 0 {
            return BTreeSet::new();
        }

        let center = CellCoord::from_position(query.position, self.origin, self.cell_size);
        // Every occupied cell lies within this many shells of the center.
        let last_shell = [center.x, center.y, center.z]
            .into_iter()
            .map(|c| c.max(self.max_extent - c))
            .max()
            .unwrap_or(0);

        let mut candidates: Vec<(f64, usize)> = Vec::new();
        for shell in 0..=last_shell {
            self.visit_shell(center, shell, |j| {
                if j != index {
                    if let Some(p) = points.get(j) {
                        candidates.push((query.position.distance(p.position), j));
                    }
                }
            });

            if candidates.len() >= k {
                candidates.sort_by(compare_candidates);
                let reach = (shell as f64 - 1.0) * self.cell_size;
                if candidates[k - 1].0 < reach {
                    break;
                }
            }
        }

        candidates.sort_by(compare_candidates);
        candidates.into_iter().take(k).map(|(_, j)| j).collect()
    }

    /// Calls `visit` for every point in cells at Chebyshev distance exactly
    /// `shell` from `center`.
    fn visit_shell(&self, center: CellCoord, shell: i64, mut visit: impl FnMut(usize)) {
        for dx in -shell..=shell {
            for dy in -shell..=shell {
                for dz in -shell..=shell {
                    if dx.abs().max(dy.abs()).max(dz.abs()) != shell {
                        continue;
                    }
                    if let Some(indices) = self.grid.get(&center.offset(dx, dy, dz)) {
                        indices.iter().copied().for_each(&mut visit);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::MeshPoint;

    fn cloud(coords: &[[f64; 3]], k: usize) -> PointCloud {
        PointCloud::from_trusted(
            coords
                .iter()
                .map(|&[x, y, z]| MeshPoint::from_coords(x, y, z, k))
                .collect(),
        )
    }

    #[test]
    fn test_empty_cloud() {
        let points = PointCloud::default();
        let index = SpatialIndex::build(&points);
        assert_eq!(index.cell_count(), 0);
        assert!(index.nearest(&points, 0).is_empty());
    }

    #[test]
    fn test_coincident_points() {
        // Zero extent falls back to a unit cell; ties resolve by index.
        let points = cloud(&[[1.0, 1.0, 1.0]; 4], 2);
        let index = SpatialIndex::build(&points);
        assert_eq!(index.cell_size(), 1.0);
        assert_eq!(index.nearest(&points, 0), BTreeSet::from([1, 2]));
        assert_eq!(index.nearest(&points, 2), BTreeSet::from([0, 1]));
    }

    #[test]
    fn test_far_outlier_still_found() {
        let points = cloud(
            &[[0.0, 0.0, 0.0], [0.1, 0.0, 0.0], [0.2, 0.0, 0.0], [100.0, 0.0, 0.0]],
            3,
        );
        let index = SpatialIndex::build(&points);
        assert_eq!(index.nearest(&points, 3), BTreeSet::from([0, 1, 2]));
    }

    #[test]
    fn test_clamps_to_available_points() {
        let points = cloud(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]], 10);
        let index = SpatialIndex::build(&points);
        assert_eq!(index.nearest(&points, 0), BTreeSet::from([1]));
    }

    #[test]
    fn test_out_of_range_query() {
        let points = cloud(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]], 1);
        let index = SpatialIndex::build(&points);
        assert!(index.nearest(&points, 5).is_empty());
    }
}
