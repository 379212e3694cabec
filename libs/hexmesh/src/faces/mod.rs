//! # Face Extraction
//!
//! Step 2 of the pipeline: find structural quadrilateral faces.
//!
//! ## Algorithm Overview
//!
//! 1. For each anchor `p0` and each pair `p1 < p3` of its neighbors, every
//!    `p2 ∈ N(p1) ∩ N(p3)` with `p2 ≠ p0` closes a candidate cycle
//!    `(p0, p1, p2, p3)`
//! 2. Keep candidates that are coplanar and pass the diagonal test
//! 3. Deduplicate by sorted signature, first discovery wins
//!
//! Edges are followed in their stored direction only. A cycle whose closing
//! edge exists in just the opposite direction is not found; that yields
//! fewer faces, not an error.

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::graph::AdjacencyGraph;
use crate::parallel::maybe_par_range;
use crate::point::PointCloud;
use crate::predicates::is_structural_face;
use crate::settings::ReconstructionConfig;
use crate::topology::{dedup_by_signature, QuadFace};

/// Extracts the deduplicated structural faces of `graph`.
///
/// Discovery order is anchor ascending, then neighbor pairs ascending, then
/// `p2` ascending; the output keeps that order.
///
/// # Example
///
/// ```rust
/// use hexmesh::{build_adjacency_graph, extract_faces, fixtures, QuadFace, ReconstructionConfig};
///
/// let points = fixtures::unit_square();
/// let config = ReconstructionConfig::default();
/// let graph = build_adjacency_graph(&points, &config);
///
/// assert_eq!(extract_faces(&points, &graph, &config), vec![QuadFace::new([0, 1, 2, 3])]);
/// ```
pub fn extract_faces(
    points: &PointCloud,
    graph: &AdjacencyGraph,
    config: &ReconstructionConfig,
) -> Vec<QuadFace> {
    let span = debug_span!("extract_faces", points = points.len(), edges = graph.edge_count());
    let _enter = span.enter();

    let per_anchor: Vec<Vec<QuadFace>> = maybe_par_range!(0..points.len())
        .map(|anchor| faces_at_anchor(points, graph, config, anchor))
        .collect();
    let candidates: usize = per_anchor.iter().map(Vec::len).sum();

    let faces = dedup_by_signature(per_anchor.into_iter().flatten(), QuadFace::signature);
    debug!(candidates, faces = faces.len(), "face extraction complete");
    faces
}

/// Accepted candidate cycles anchored at `anchor`, in discovery order.
fn faces_at_anchor(
    points: &PointCloud,
    graph: &AdjacencyGraph,
    config: &ReconstructionConfig,
    anchor: usize,
) -> Vec<QuadFace> {
    let Some(neighbors) = graph.neighbors(anchor) else {
        return Vec::new();
    };
    let neighbors: Vec<usize> = neighbors.iter().copied().collect();

    let mut found = Vec::new();
    for (i, &p1) in neighbors.iter().enumerate() {
        for &p3 in &neighbors[i + 1..] {
            let (Some(via_p1), Some(via_p3)) = (graph.neighbors(p1), graph.neighbors(p3)) else {
                trace!(anchor, p1, p3, "neighbor without graph entry skipped");
                continue;
            };
            for &p2 in via_p1 {
                if p2 == anchor || !via_p3.contains(&p2) {
                    continue;
                }
                let face = QuadFace::new([anchor, p1, p2, p3]);
                if is_structural_face(points, &face, config) {
                    found.push(face);
                }
            }
        }
    }
    found
}
