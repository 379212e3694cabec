//! # Adjacency Graph
//!
//! Step 1 of the pipeline: connect each point to its `required_neighbors`
//! nearest points.
//!
//! ## Selection Rule
//!
//! For point `i`, every other point is ranked by Euclidean distance, equal
//! distances by ascending index, and the first
//! `min(required_neighbors, N - 1)` are taken. Selection is independent per
//! point, so the graph is directed: `a → b` does not imply `b → a`.
//!
//! ## Search Strategies
//!
//! - **Brute force**: O(N² log N), sorts all candidates per point
//! - **Hash grid**: expanding-shell search, identical selection

mod spatial_index;


use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::parallel::maybe_par_range;
use crate::point::PointCloud;
use crate::settings::ReconstructionConfig;

pub use spatial_index::SpatialIndex;

/// Directed neighbor sets keyed by point index.
///
/// Stored as an arena: entry `i` holds the neighbors of point `i` in
/// ascending order. Every point of the source cloud has an entry.
///
/// # Example
///
/// ```rust
/// use hexmesh::AdjacencyGraph;
///
/// let graph = AdjacencyGraph::from_neighbor_sets(vec![vec![1], vec![0, 2], vec![]]);
/// assert!(graph.contains_edge(1, 2));
/// assert!(!graph.contains_edge(2, 1));
/// assert_eq!(graph.edge_count(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyGraph {
    neighbors: Vec<BTreeSet<usize>>,
}

impl AdjacencyGraph {
    /// Builds a graph directly from per-point neighbor lists.
    ///
    /// Entry `i` of the iterator becomes the neighbor set of point `i`.
    /// Indices are not checked against any point cloud; downstream phases
    /// skip candidates that reference missing points.
    pub fn from_neighbor_sets<I, S>(sets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = usize>,
    {
        Self {
            neighbors: sets
                .into_iter()
                .map(|set| set.into_iter().collect())
                .collect(),
        }
    }

    /// Returns the number of entries (one per point).
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns true if the graph has no entries.
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Returns the neighbor set of `index`, or `None` if it has no entry.
    pub fn neighbors(&self, index: usize) -> Option<&BTreeSet<usize>> {
        self.neighbors.get(index)
    }

    /// Returns true if `to` is among the neighbors of `from`.
    pub fn contains_edge(&self, from: usize, to: usize) -> bool {
        self.neighbors(from).is_some_and(|set| set.contains(&to))
    }

    /// Returns true if the edge exists in both directions.
    pub fn is_symmetric_edge(&self, a: usize, b: usize) -> bool {
        self.contains_edge(a, b) && self.contains_edge(b, a)
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(BTreeSet::len).sum()
    }

    /// Directed edges `(from, to)` in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.neighbors
            .iter()
            .enumerate()
            .flat_map(|(from, set)| set.iter().map(move |&to| (from, to)))
    }

    /// Directed edges whose reverse is missing.
    ///
    /// A structural cycle needing one of these in the other direction cannot
    /// be found by the face extractor.
    pub fn one_way_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges().filter(|&(from, to)| !self.contains_edge(to, from))
    }
}

/// Builds the adjacency graph of `points`.
///
/// Never fails: an empty cloud gives an empty graph, and neighbor counts
/// larger than `N - 1` are clamped.
///
/// # Example
///
/// ```rust
/// use hexmesh::{build_adjacency_graph, fixtures, ReconstructionConfig};
///
/// let points = fixtures::unit_square();
/// let graph = build_adjacency_graph(&points, &ReconstructionConfig::default());
/// assert_eq!(graph.len(), 4);
/// assert_eq!(graph.edge_count(), 12);
/// ```
pub fn build_adjacency_graph(points: &PointCloud, config: &ReconstructionConfig) -> AdjacencyGraph {
    let use_grid = config.uses_grid(points.len());
    let span = debug_span!("build_adjacency_graph", points = points.len(), grid = use_grid);
    let _enter = span.enter();

    let neighbors: Vec<BTreeSet<usize>> = if use_grid {
        let index = SpatialIndex::build(points);
        debug!(cells = index.cell_count(), cell_size = index.cell_size(), "spatial index built");
        maybe_par_range!(0..points.len())
            .map(|i| index.nearest(points, i))
            .collect()
    } else {
        maybe_par_range!(0..points.len())
            .map(|i| nearest_brute_force(points, i))
            .collect()
    };

    let graph = AdjacencyGraph { neighbors };
    debug!(edges = graph.edge_count(), "adjacency graph built");
    graph
}

/// Selects the neighbors of point `index` by sorting every other point.
fn nearest_brute_force(points: &PointCloud, index: usize) -> BTreeSet<usize> {
    let Some(origin) = points.get(index) else {
        return BTreeSet::new();
    };

    let mut candidates: Vec<(f64, usize)> = points
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != index)
        .map(|(j, p)| (origin.position.distance(p.position), j))
        .collect();
    candidates.sort_by(compare_candidates);

    candidates
        .into_iter()
        .take(origin.required_neighbors)
        .map(|(_, j)| j)
        .collect()
}

/// Orders `(distance, index)` candidates: nearer first, lower index on ties.
pub(crate) fn compare_candidates(a: &(f64, usize), b: &(f64, usize)) -> Ordering {
    a.0.total_cmp(&b.0).then(a.1.cmp(&b.1))
}
