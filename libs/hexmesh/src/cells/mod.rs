//! # Cell Assembly
//!
//! Step 3 of the pipeline: pair opposite faces into hexahedra.
//!
//! ## Algorithm Overview
//!
//! For every pair of faces `(F1, F2)` in list order:
//! 1. Reject if they share a vertex
//! 2. Collect connecting edges `a → b` with `a ∈ F1`, `b ∈ F2`
//! 3. Require exactly four, forming a perfect matching
//! 4. Emit `F1` slots followed by their matched `F2` vertices
//!
//! A cube is reachable through each of its three opposite-face pairs; the
//! first discovered instance of each sorted signature is kept.
//!
//! Complexity is O(F² · D) for F faces and average degree D.


use tracing::{debug, debug_span, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::graph::AdjacencyGraph;
use crate::parallel::maybe_par_range;
use crate::topology::{all_distinct, dedup_by_signature, Hexahedron, QuadFace};

/// Assembles the deduplicated hexahedra formed by pairs of `faces`.
///
/// # Example
///
/// ```rust
/// use hexmesh::{assemble_hexahedra, AdjacencyGraph, Hexahedron, QuadFace};
///
/// // Two unit squares stacked along z, joined by vertical edges.
/// let faces = [QuadFace::new([0, 1, 2, 3]), QuadFace::new([4, 5, 6, 7])];
/// let graph = AdjacencyGraph::from_neighbor_sets(vec![
///     vec![1, 3, 4], vec![0, 2, 5], vec![1, 3, 6], vec![0, 2, 7],
///     vec![0, 5, 7], vec![1, 4, 6], vec![2, 5, 7], vec![3, 4, 6],
/// ]);
///
/// let cells = assemble_hexahedra(&faces, &graph);
/// assert_eq!(cells, vec![Hexahedron::new([0, 1, 2, 3, 4, 5, 6, 7])]);
/// ```
pub fn assemble_hexahedra(faces: &[QuadFace], graph: &AdjacencyGraph) -> Vec<Hexahedron> {
    let span = debug_span!("assemble_hexahedra", faces = faces.len());
    let _enter = span.enter();

    let per_face: Vec<Vec<Hexahedron>> = maybe_par_range!(0..faces.len())
        .map(|i| {
            faces[i + 1..]
                .iter()
                .filter_map(|other| pair_faces(&faces[i], other, graph))
                .collect()
        })
        .collect();
    let candidates: usize = per_face.iter().map(Vec::len).sum();

    let cells = dedup_by_signature(per_face.into_iter().flatten(), Hexahedron::signature);
    debug!(candidates, hexahedra = cells.len(), "cell assembly complete");
    cells
}

/// Builds the hexahedron spanned by two opposite faces, if they form one.
fn pair_faces(first: &QuadFace, second: &QuadFace, graph: &AdjacencyGraph) -> Option<Hexahedron> {
    if first.shares_vertex(second) {
        return None;
    }

    let mut connections: Vec<(usize, usize)> = Vec::with_capacity(4);
    for a in first.vertices() {
        let Some(neighbors) = graph.neighbors(a) else {
            trace!(vertex = a, "face vertex without graph entry");
            continue;
        };
        for b in second.vertices() {
            if neighbors.contains(&b) {
                if connections.len() == 4 {
                    return None;
                }
                connections.push((a, b));
            }
        }
    }
    if connections.len() != 4 {
        return None;
    }

    let lower: [usize; 4] = std::array::from_fn(|i| connections[i].0);
    let upper: [usize; 4] = std::array::from_fn(|i| connections[i].1);
    if !all_distinct(&lower) || !all_distinct(&upper) {
        return None;
    }

    let hex = Hexahedron::new(std::array::from_fn(|i| if i < 4 { lower[i] } else { upper[i - 4] }));
    if !hex.is_simple() {
        trace!(?hex, "repeated vertex in assembled cell");
        return None;
    }
    Some(hex)
}
