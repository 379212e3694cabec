//! # Face Extraction Tests

use std::collections::HashSet;

use super::*;
use crate::fixtures;
use crate::graph::build_adjacency_graph;
use crate::predicates::{is_coplanar, passes_diagonal_test};

fn faces_of(points: &PointCloud, config: &ReconstructionConfig) -> Vec<QuadFace> {
    let graph = build_adjacency_graph(points, config);
    extract_faces(points, &graph, config)
}

#[test]
fn test_unit_square_single_face() {
    let faces = faces_of(&fixtures::unit_square(), &ReconstructionConfig::default());
    assert_eq!(faces, vec![QuadFace::new([0, 1, 2, 3])]);
}

#[test]
fn test_empty_and_isolated_inputs() {
    let config = ReconstructionConfig::default();
    assert!(faces_of(&PointCloud::default(), &config).is_empty());
    assert!(faces_of(&fixtures::structured_grid(0, 0, 0), &config).is_empty());
}

#[test]
fn test_stacked_block_golden_faces() {
    let points = fixtures::stacked_block();
    let faces = faces_of(&points, &ReconstructionConfig::default());

    assert_eq!(faces.len(), 15);
    assert_eq!(faces[0], QuadFace::new([0, 1, 2, 3]));
    assert_eq!(faces[1], QuadFace::new([0, 1, 5, 4]));
    assert_eq!(faces[14], QuadFace::new([12, 13, 14, 15]));
    // The shifted corner warps the left face of the bottom cube.
    assert!(!faces.iter().any(|f| f.signature() == [0, 3, 4, 7]));
}

#[test]
fn test_loose_tolerance_admits_warped_face() {
    let points = fixtures::stacked_block();
    let config = ReconstructionConfig::new(0.25, 1.01).unwrap();
    let faces = faces_of(&points, &config);

    assert_eq!(faces.len(), 16);
    assert_eq!(faces[2], QuadFace::new([0, 3, 7, 4]));
}

#[test]
fn test_structured_grid_face_count() {
    // A 2x2x2 block of cubes has 36 distinct quads.
    let faces = faces_of(&fixtures::structured_grid(2, 2, 2), &ReconstructionConfig::default());
    assert_eq!(faces.len(), 36);
}

#[test]
fn test_returned_faces_satisfy_predicates() {
    let points = fixtures::structured_grid(2, 2, 2);
    let config = ReconstructionConfig::default();
    let faces = faces_of(&points, &config);

    let mut signatures = HashSet::new();
    for face in &faces {
        assert!(is_coplanar(&points, face.vertices(), config.coplanarity_tolerance));
        assert!(passes_diagonal_test(&points, face, config.diagonal_ratio));
        assert!(signatures.insert(face.signature()), "duplicate {face:?}");
    }
}

#[test]
fn test_one_way_edge_hides_cycle() {
    let points = fixtures::unit_square();
    let config = ReconstructionConfig::default();

    let open = AdjacencyGraph::from_neighbor_sets(vec![vec![1, 3], vec![2], vec![], vec![0]]);
    assert!(extract_faces(&points, &open, &config).is_empty());

    let closed = AdjacencyGraph::from_neighbor_sets(vec![vec![1, 3], vec![2], vec![], vec![0, 2]]);
    assert_eq!(
        extract_faces(&points, &closed, &config),
        vec![QuadFace::new([0, 1, 2, 3])]
    );
}

#[test]
fn test_out_of_range_neighbors_skipped() {
    let points = fixtures::unit_square();
    let graph = AdjacencyGraph::from_neighbor_sets(vec![
        vec![1, 3, 9],
        vec![0, 2, 9],
        vec![1, 3, 9],
        vec![0, 2, 9],
    ]);
    let faces = extract_faces(&points, &graph, &ReconstructionConfig::default());
    assert_eq!(faces, vec![QuadFace::new([0, 1, 2, 3])]);
}

#[test]
fn test_extraction_is_deterministic() {
    let points = fixtures::structured_grid(2, 1, 1);
    let config = ReconstructionConfig::default();
    let graph = build_adjacency_graph(&points, &config);
    assert_eq!(
        extract_faces(&points, &graph, &config),
        extract_faces(&points, &graph, &config)
    );
}
