//! # Point Store
//!
//! Immutable, ordered collection of points. Every derived artifact (graph,
//! faces, cells) refers to points by their stable index into this arena.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{ReconstructionError, ReconstructionResult};

/// A point with a connectivity constraint.
///
/// `required_neighbors` is the number of nearest points this point is
/// connected to when the adjacency graph is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshPoint {
    /// Position in 3D space
    pub position: DVec3,
    /// Number of nearest neighbors to connect to
    pub required_neighbors: usize,
}

impl MeshPoint {
    /// Creates a point from a position and neighbor count.
    pub fn new(position: DVec3, required_neighbors: usize) -> Self {
        Self {
            position,
            required_neighbors,
        }
    }

    /// Creates a point from raw coordinates.
    pub fn from_coords(x: f64, y: f64, z: f64, required_neighbors: usize) -> Self {
        Self::new(DVec3::new(x, y, z), required_neighbors)
    }
}

/// Read-only arena of points addressed by index.
///
/// # Example
///
/// ```rust
/// use hexmesh::{MeshPoint, PointCloud};
///
/// let cloud = PointCloud::new(vec![
///     MeshPoint::from_coords(0.0, 0.0, 0.0, 1),
///     MeshPoint::from_coords(1.0, 0.0, 0.0, 1),
/// ])
/// .unwrap();
/// assert_eq!(cloud.len(), 2);
/// assert_eq!(cloud.get(1).map(|p| p.position.x), Some(1.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MeshPoint>", into = "Vec<MeshPoint>")]
pub struct PointCloud {
    points: Vec<MeshPoint>,
}

impl PointCloud {
    /// Creates a cloud, rejecting points with non-finite coordinates.
    ///
    /// # Errors
    /// Returns `ReconstructionError::NonFinitePosition` for the first point
    /// whose position contains NaN or an infinity.
    pub fn new(points: Vec<MeshPoint>) -> ReconstructionResult<Self> {
        if let Some(index) = points.iter().position(|p| !p.position.is_finite()) {
            return Err(ReconstructionError::NonFinitePosition { index });
        }
        Ok(Self { points })
    }

    /// Creates a cloud from flat `[x, y, z, x, y, z, ...]` coordinates and one
    /// neighbor count per point, the layout used by GPU-facing hosts.
    ///
    /// # Errors
    /// Returns `MismatchedInput` when the buffers disagree on the point count
    /// and `NonFinitePosition` for NaN or infinite coordinates.
    pub fn from_flat(coordinates: &[f64], required_neighbors: &[u32]) -> ReconstructionResult<Self> {
        if coordinates.len() % 3 != 0 || coordinates.len() / 3 != required_neighbors.len() {
            return Err(ReconstructionError::MismatchedInput {
                coordinates: coordinates.len(),
                counts: required_neighbors.len(),
            });
        }
        let points = coordinates
            .chunks_exact(3)
            .zip(required_neighbors)
            .map(|(xyz, &k)| MeshPoint::from_coords(xyz[0], xyz[1], xyz[2], k as usize))
            .collect();
        Self::new(points)
    }

    /// Wraps points known to be finite.
    pub(crate) fn from_trusted(points: Vec<MeshPoint>) -> Self {
        debug_assert!(points.iter().all(|p| p.position.is_finite()));
        Self { points }
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the cloud holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&MeshPoint> {
        self.points.get(index)
    }

    /// Returns the position of the point at `index`.
    pub fn position(&self, index: usize) -> Option<DVec3> {
        self.points.get(index).map(|p| p.position)
    }

    /// Returns all points in index order.
    pub fn points(&self) -> &[MeshPoint] {
        &self.points
    }

    /// Iterates over points in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, MeshPoint> {
        self.points.iter()
    }

    /// Returns the axis-aligned bounding box, or `None` for an empty cloud.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let first = self.points.first()?.position;
        Some(self.points.iter().fold((first, first), |(min, max), p| {
            (min.min(p.position), max.max(p.position))
        }))
    }

    /// Positions as `[x, y, z, ...]` in f32 for GPU upload.
    pub fn positions_f32(&self) -> Vec<f32> {
        self.points
            .iter()
            .flat_map(|p| p.position.as_vec3().to_array())
            .collect()
    }
}

impl TryFrom<Vec<MeshPoint>> for PointCloud {
    type Error = ReconstructionError;

    fn try_from(points: Vec<MeshPoint>) -> ReconstructionResult<Self> {
        Self::new(points)
    }
}

impl From<PointCloud> for Vec<MeshPoint> {
    fn from(cloud: PointCloud) -> Self {
        cloud.points
    }
}

impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a MeshPoint;
    type IntoIter = std::slice::Iter<'a, MeshPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_nan() {
        let result = PointCloud::new(vec![
            MeshPoint::from_coords(0.0, 0.0, 0.0, 1),
            MeshPoint::from_coords(f64::NAN, 0.0, 0.0, 1),
        ]);
        assert_eq!(
            result.unwrap_err(),
            ReconstructionError::NonFinitePosition { index: 1 }
        );
    }

    #[test]
    fn test_from_flat_builds_points() {
        let cloud = PointCloud::from_flat(&[0.0, 0.0, 0.0, 1.0, 2.0, 3.0], &[2, 5]).unwrap();
        assert_eq!(cloud.len(), 2);
        assert_eq!(cloud.position(1), Some(DVec3::new(1.0, 2.0, 3.0)));
        assert_eq!(cloud.get(1).map(|p| p.required_neighbors), Some(5));
        assert!(cloud.get(2).is_none());
    }

    #[test]
    fn test_from_flat_rejects_mismatch() {
        let err = PointCloud::from_flat(&[0.0, 0.0, 0.0, 1.0], &[1]).unwrap_err();
        assert_eq!(
            err,
            ReconstructionError::MismatchedInput {
                coordinates: 4,
                counts: 1
            }
        );

        assert!(PointCloud::from_flat(&[0.0; 6], &[1]).is_err());
    }

    #[test]
    fn test_empty_cloud() {
        let cloud = PointCloud::default();
        assert!(cloud.is_empty());
        assert!(cloud.bounding_box().is_none());
        assert!(cloud.positions_f32().is_empty());
    }

    #[test]
    fn test_bounding_box() {
        let cloud = PointCloud::from_flat(&[-1.0, 2.0, 0.5, 3.0, -4.0, 0.0], &[0, 0]).unwrap();
        let (min, max) = cloud.bounding_box().unwrap();
        assert_eq!(min, DVec3::new(-1.0, -4.0, 0.0));
        assert_eq!(max, DVec3::new(3.0, 2.0, 0.5));
    }

    #[test]
    fn test_positions_f32_layout() {
        let cloud = PointCloud::from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[0, 0]).unwrap();
        assert_eq!(cloud.positions_f32(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
