//! # Fixtures
//!
//! Point clouds with known reconstructions, used by tests, benchmarks and the
//! browser demo.

use crate::point::{MeshPoint, PointCloud};

/// The unit square on the z = 0 plane, each corner requiring 3 neighbors.
///
/// Reconstructs to one face and no cells.
pub fn unit_square() -> PointCloud {
    PointCloud::from_trusted(vec![
        MeshPoint::from_coords(0.0, 0.0, 0.0, 3),
        MeshPoint::from_coords(1.0, 0.0, 0.0, 3),
        MeshPoint::from_coords(1.0, 1.0, 0.0, 3),
        MeshPoint::from_coords(0.0, 1.0, 0.0, 3),
    ])
}

/// Three unit cubes stacked along z: 16 points in four layers of 4.
///
/// The outer layers (z = 0 and z = 3) require 3 neighbors, the two inner
/// layers 4. Point 0 is shifted to x = -0.2, which warps the left face of the
/// bottom cube out of plane; the reconstruction still finds 15 faces and all
/// 3 cells because the bottom cube is reachable through its other face pairs.
pub fn stacked_block() -> PointCloud {
    let layers = [(0.0, 3), (1.0, 4), (2.0, 4), (3.0, 3)];
    let mut points: Vec<MeshPoint> = layers
        .iter()
        .flat_map(|&(z, k)| {
            [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
                .into_iter()
                .map(move |(x, y)| MeshPoint::from_coords(x, y, z, k))
        })
        .collect();
    points[0].position.x = -0.2;
    PointCloud::from_trusted(points)
}

/// A lattice of `nx × ny × nz` unit cubes.
///
/// Points are ordered x fastest, then y, then z. Each point requires as many
/// neighbors as it has lattice neighbors (3 at corners up to 6 inside), so
/// the nearest-neighbor graph is exactly the lattice.
pub fn structured_grid(nx: usize, ny: usize, nz: usize) -> PointCloud {
    let degree = |c: usize, n: usize| usize::from(c > 0) + usize::from(c < n);
    let mut points = Vec::with_capacity((nx + 1) * (ny + 1) * (nz + 1));
    for z in 0..=nz {
        for y in 0..=ny {
            for x in 0..=nx {
                let required = degree(x, nx) + degree(y, ny) + degree(z, nz);
                points.push(MeshPoint::from_coords(x as f64, y as f64, z as f64, required));
            }
        }
    }
    PointCloud::from_trusted(points)
}
