//! # Hexmesh
//!
//! Reconstructs hexahedral-mesh topology from an unstructured point cloud,
//! using only point positions and a per-point required neighbor count.
//!
//! ## Architecture
//!
//! ```text
//! PointCloud → AdjacencyGraph → Vec<QuadFace> → Vec<Hexahedron>
//! ```
//!
//! ## Phases
//!
//! All phases are pure functions over read-only inputs:
//! - **Graph Builder**: k-nearest neighbors per point, brute force or hash grid
//! - **Face Extractor**: 4-cycle search filtered by coplanarity and diagonals
//! - **Cell Assembler**: opposite-face pairing through a perfect edge matching
//!
//! Outputs are deduplicated by canonical signature (sorted vertex indices);
//! the first discovered instance of each signature is kept, so vertex order
//! inside a face or cell follows discovery order and is not a canonical
//! winding.
//!
//! ## Usage
//!
//! ```rust
//! use hexmesh::{assemble_hexahedra, build_adjacency_graph, extract_faces};
//! use hexmesh::{fixtures, ReconstructionConfig};
//!
//! let points = fixtures::structured_grid(1, 1, 1);
//! let config = ReconstructionConfig::default();
//!
//! let graph = build_adjacency_graph(&points, &config);
//! let faces = extract_faces(&points, &graph, &config);
//! let cells = assemble_hexahedra(&faces, &graph);
//!
//! assert_eq!(faces.len(), 6);
//! assert_eq!(cells.len(), 1);
//! ```

mod parallel;

pub mod cells;
pub mod error;
pub mod faces;
pub mod fixtures;
pub mod graph;
pub mod point;
pub mod predicates;
pub mod session;
pub mod settings;
pub mod topology;

pub use cells::assemble_hexahedra;
pub use error::{ReconstructionError, ReconstructionResult};
pub use faces::extract_faces;
pub use graph::{build_adjacency_graph, AdjacencyGraph};
pub use point::{MeshPoint, PointCloud};
pub use session::{ReconstructionSession, ReconstructionSummary, Stage};
pub use settings::{NeighborSearch, ReconstructionConfig};
pub use topology::{Hexahedron, QuadFace};
