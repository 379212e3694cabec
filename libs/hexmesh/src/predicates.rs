//! # Geometric Predicates
//!
//! Floating-point tests that decide whether a graph 4-cycle is a structural
//! face. Thresholds come from `ReconstructionConfig`.
//!
//! Any index outside the point cloud makes a predicate return `false`.

use glam::DVec3;

use crate::point::PointCloud;
use crate::settings::ReconstructionConfig;
use crate::topology::QuadFace;

/// Scalar triple product `(b - a) · ((c - a) × (d - a))`.
///
/// Six times the signed volume of the tetrahedron `abcd`; zero when the four
/// points are coplanar.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use hexmesh::predicates::triple_product;
///
/// let volume = triple_product(DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z);
/// assert_eq!(volume, 1.0);
/// ```
pub fn triple_product(a: DVec3, b: DVec3, c: DVec3, d: DVec3) -> f64 {
    (b - a).dot((c - a).cross(d - a))
}

/// Returns true if the four indexed points lie on one plane within
/// `tolerance` (compared against the triple product magnitude).
pub fn is_coplanar(points: &PointCloud, indices: [usize; 4], tolerance: f64) -> bool {
    match positions(points, indices) {
        Some([a, b, c, d]) => triple_product(a, b, c, d).abs() < tolerance,
        None => false,
    }
}

/// Returns true if both squared diagonals of `face` exceed `ratio` times its
/// longest squared boundary edge.
///
/// Structural quads have diagonals longer than any edge; skew or folded
/// cycles fail.
pub fn passes_diagonal_test(points: &PointCloud, face: &QuadFace, ratio: f64) -> bool {
    let Some([p0, p1, p2, p3]) = positions(points, face.vertices()) else {
        return false;
    };

    let max_edge_sq = p0
        .distance_squared(p1)
        .max(p1.distance_squared(p2))
        .max(p2.distance_squared(p3))
        .max(p3.distance_squared(p0));
    let threshold = max_edge_sq * ratio;

    p0.distance_squared(p2) > threshold && p1.distance_squared(p3) > threshold
}

/// Full face filter: distinct in-range vertices, coplanar, convex.
pub fn is_structural_face(points: &PointCloud, face: &QuadFace, config: &ReconstructionConfig) -> bool {
    face.is_simple()
        && is_coplanar(points, face.vertices(), config.coplanarity_tolerance)
        && passes_diagonal_test(points, face, config.diagonal_ratio)
}

fn positions(points: &PointCloud, indices: [usize; 4]) -> Option<[DVec3; 4]> {
    let [a, b, c, d] = indices;
    Some([
        points.position(a)?,
        points.position(b)?,
        points.position(c)?,
        points.position(d)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::point::MeshPoint;
    use approx::assert_relative_eq;

    fn quad(coords: [[f64; 3]; 4]) -> PointCloud {
        PointCloud::from_trusted(
            coords
                .iter()
                .map(|&[x, y, z]| MeshPoint::from_coords(x, y, z, 3))
                .collect(),
        )
    }

    #[test]
    fn test_triple_product_sign() {
        assert_relative_eq!(triple_product(DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z), 1.0);
        assert_relative_eq!(triple_product(DVec3::ZERO, DVec3::Y, DVec3::X, DVec3::Z), -1.0);
    }

    #[test]
    fn test_unit_square_is_coplanar() {
        let points = fixtures::unit_square();
        assert!(is_coplanar(&points, [0, 1, 2, 3], 1.0e-3));
    }

    #[test]
    fn test_coplanarity_tolerance_boundary() {
        // Lifting one corner by h gives a triple product of exactly h.
        let points = quad([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.5e-3]]);
        assert!(is_coplanar(&points, [0, 1, 2, 3], 1.0e-3));
        assert!(!is_coplanar(&points, [0, 1, 2, 3], 0.4e-3));
    }

    #[test]
    fn test_diagonal_test_accepts_square() {
        let points = fixtures::unit_square();
        assert!(passes_diagonal_test(&points, &QuadFace::new([0, 1, 2, 3]), 1.01));
    }

    #[test]
    fn test_diagonal_test_rejects_crossed_order() {
        // 0 → 1 → 3 → 2 crosses itself: one "diagonal" is a side of the square.
        let points = fixtures::unit_square();
        assert!(!passes_diagonal_test(&points, &QuadFace::new([0, 1, 3, 2]), 1.01));
    }

    #[test]
    fn test_diagonal_ratio_boundary() {
        // Squared diagonal 2, squared edge 1: passes below ratio 2, fails at 2.
        let points = fixtures::unit_square();
        let face = QuadFace::new([0, 1, 2, 3]);
        assert!(passes_diagonal_test(&points, &face, 1.99));
        assert!(!passes_diagonal_test(&points, &face, 2.0));
    }

    #[test]
    fn test_flat_rhombus_rejected() {
        // Short diagonal 0.2 is shorter than the edges.
        let points = quad([[0.0, 0.0, 0.0], [1.0, 0.1, 0.0], [2.0, 0.0, 0.0], [1.0, -0.1, 0.0]]);
        assert!(!passes_diagonal_test(&points, &QuadFace::new([0, 1, 2, 3]), 1.01));
    }

    #[test]
    fn test_out_of_range_indices() {
        let points = fixtures::unit_square();
        assert!(!is_coplanar(&points, [0, 1, 2, 9], 1.0e-3));
        assert!(!passes_diagonal_test(&points, &QuadFace::new([0, 9, 2, 3]), 1.01));
    }

    #[test]
    fn test_structural_face_rejects_repeated_vertex() {
        let points = fixtures::unit_square();
        let config = ReconstructionConfig::default();
        assert!(is_structural_face(&points, &QuadFace::new([0, 1, 2, 3]), &config));
        assert!(!is_structural_face(&points, &QuadFace::new([0, 1, 0, 3]), &config));
    }
}
