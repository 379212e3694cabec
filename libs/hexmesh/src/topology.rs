//! # Topology Types
//!
//! Quadrilateral faces and hexahedral cells as fixed-size tuples of point
//! indices. Slot order records how an element was discovered; identity is the
//! ascending-sorted index tuple returned by `signature`.

use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// A planar, convex quadrilateral cycle `v0 → v1 → v2 → v3 → v0`.
///
/// # Example
///
/// ```rust
/// use hexmesh::QuadFace;
///
/// let face = QuadFace::new([7, 2, 5, 3]);
/// assert_eq!(face.signature(), [2, 3, 5, 7]);
/// assert_eq!(face.diagonals(), [(7, 5), (2, 3)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuadFace([usize; 4]);

impl QuadFace {
    /// Creates a face from its vertices in cycle order.
    pub fn new(vertices: [usize; 4]) -> Self {
        Self(vertices)
    }

    /// Vertices in cycle order.
    pub fn vertices(&self) -> [usize; 4] {
        self.0
    }

    /// Ascending-sorted vertex indices, the deduplication key.
    pub fn signature(&self) -> [usize; 4] {
        let mut sorted = self.0;
        sorted.sort_unstable();
        sorted
    }

    /// Returns true if `index` is one of the face's vertices.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// Returns true if the two faces have at least one vertex in common.
    pub fn shares_vertex(&self, other: &QuadFace) -> bool {
        self.0.iter().any(|&v| other.contains(v))
    }

    /// Boundary edges in cycle order.
    pub fn boundary_edges(&self) -> [(usize, usize); 4] {
        let [a, b, c, d] = self.0;
        [(a, b), (b, c), (c, d), (d, a)]
    }

    /// The two diagonals `(v0, v2)` and `(v1, v3)`.
    pub fn diagonals(&self) -> [(usize, usize); 2] {
        let [a, b, c, d] = self.0;
        [(a, c), (b, d)]
    }

    /// Returns true if all four vertices are distinct.
    pub fn is_simple(&self) -> bool {
        all_distinct(&self.0)
    }
}

/// A hexahedral cell built from two opposite faces.
///
/// Slots `0..4` hold one face in its stored order; slot `i + 4` holds the
/// vertex of the opposite face matched to slot `i`. This is not a canonical
/// winding: consumers needing consistent orientation must reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hexahedron([usize; 8]);

impl Hexahedron {
    /// Creates a cell from its eight slots.
    pub fn new(vertices: [usize; 8]) -> Self {
        Self(vertices)
    }

    /// Vertices in slot order.
    pub fn vertices(&self) -> [usize; 8] {
        self.0
    }

    /// Ascending-sorted vertex indices, the deduplication key.
    pub fn signature(&self) -> [usize; 8] {
        let mut sorted = self.0;
        sorted.sort_unstable();
        sorted
    }

    /// Vertices of the first face (slots `0..4`).
    pub fn lower(&self) -> [usize; 4] {
        [self.0[0], self.0[1], self.0[2], self.0[3]]
    }

    /// Vertices of the opposite face (slots `4..8`).
    pub fn upper(&self) -> [usize; 4] {
        [self.0[4], self.0[5], self.0[6], self.0[7]]
    }

    /// Matched pairs `(lower[i], upper[i])`.
    pub fn connecting_edges(&self) -> [(usize, usize); 4] {
        std::array::from_fn(|i| (self.0[i], self.0[i + 4]))
    }

    /// Returns true if `index` is one of the cell's vertices.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// Returns true if all eight vertices are distinct.
    pub fn is_simple(&self) -> bool {
        all_distinct(&self.0)
    }
}

/// Returns true if no index occurs twice.
pub(crate) fn all_distinct(indices: &[usize]) -> bool {
    indices
        .iter()
        .enumerate()
        .all(|(i, v)| !indices[i + 1..].contains(v))
}

/// Keeps the first item of each signature, preserving input order.
pub(crate) fn dedup_by_signature<T, K, F>(items: impl IntoIterator<Item = T>, signature: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(signature(item)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_signature_ignores_winding() {
        let a = QuadFace::new([0, 1, 2, 3]);
        let b = QuadFace::new([2, 1, 0, 3]);
        assert_ne!(a, b);
        assert_eq!(a.signature(), b.signature());
    }

    #[test]
    fn test_face_edges() {
        let face = QuadFace::new([4, 5, 9, 8]);
        assert_eq!(face.boundary_edges(), [(4, 5), (5, 9), (9, 8), (8, 4)]);
        assert_eq!(face.diagonals(), [(4, 9), (5, 8)]);
    }

    #[test]
    fn test_face_sharing() {
        let a = QuadFace::new([0, 1, 2, 3]);
        let b = QuadFace::new([3, 4, 5, 6]);
        let c = QuadFace::new([7, 8, 9, 10]);
        assert!(a.shares_vertex(&b));
        assert!(!a.shares_vertex(&c));
        assert!(!QuadFace::new([0, 1, 0, 2]).is_simple());
    }

    #[test]
    fn test_hexahedron_halves() {
        let hex = Hexahedron::new([0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(hex.lower(), [0, 1, 2, 3]);
        assert_eq!(hex.upper(), [4, 5, 6, 7]);
        assert_eq!(hex.connecting_edges()[2], (2, 6));
        assert!(hex.is_simple());
        assert!(!Hexahedron::new([0, 1, 2, 3, 4, 5, 6, 0]).is_simple());
    }

    #[test]
    fn test_dedup_keeps_first() {
        let faces = vec![
            QuadFace::new([0, 1, 2, 3]),
            QuadFace::new([3, 2, 1, 0]),
            QuadFace::new([4, 5, 6, 7]),
        ];
        let unique = dedup_by_signature(faces, QuadFace::signature);
        assert_eq!(
            unique,
            vec![QuadFace::new([0, 1, 2, 3]), QuadFace::new([4, 5, 6, 7])]
        );
    }
}
