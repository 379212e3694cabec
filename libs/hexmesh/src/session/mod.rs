//! # Reconstruction Session
//!
//! Step-by-step driver for interactive hosts. A session owns the point cloud
//! and the derived artifacts of each phase, and enforces two rules:
//!
//! - A phase only runs once its predecessor's output exists
//! - Re-running a phase discards every downstream artifact
//!
//! ```text
//! Loaded → build_graph → GraphBuilt → find_faces → FacesFound
//!        → build_hexahedra → HexahedraBuilt
//! ```


use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::cells::assemble_hexahedra;
use crate::error::{ReconstructionError, ReconstructionResult};
use crate::faces::extract_faces;
use crate::graph::{build_adjacency_graph, AdjacencyGraph};
use crate::point::PointCloud;
use crate::settings::ReconstructionConfig;
use crate::topology::{Hexahedron, QuadFace};

/// Furthest pipeline phase whose output is currently valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Points loaded, nothing derived yet
    Loaded,
    /// Adjacency graph available
    GraphBuilt,
    /// Faces available
    FacesFound,
    /// Hexahedra available
    HexahedraBuilt,
}

impl Stage {
    /// The stage that follows this one, if any.
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Loaded => Some(Stage::GraphBuilt),
            Stage::GraphBuilt => Some(Stage::FacesFound),
            Stage::FacesFound => Some(Stage::HexahedraBuilt),
            Stage::HexahedraBuilt => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Loaded => "loaded",
            Stage::GraphBuilt => "graph built",
            Stage::FacesFound => "faces found",
            Stage::HexahedraBuilt => "hexahedra built",
        };
        f.write_str(name)
    }
}

/// Sizes of the artifacts currently held by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconstructionSummary {
    /// Furthest completed stage
    pub stage: Stage,
    /// Number of points
    pub points: usize,
    /// Number of directed graph edges (0 before step 1)
    pub edges: usize,
    /// Number of faces (0 before step 2)
    pub faces: usize,
    /// Number of hexahedra (0 before step 3)
    pub hexahedra: usize,
}

/// Owns a point cloud and the outputs of each pipeline phase.
///
/// # Example
///
/// ```rust
/// use hexmesh::{fixtures, ReconstructionConfig, ReconstructionSession, Stage};
///
/// let mut session = ReconstructionSession::new(fixtures::stacked_block(), ReconstructionConfig::default());
/// assert!(session.find_faces().is_err());
///
/// session.build_graph();
/// session.find_faces().unwrap();
/// session.build_hexahedra().unwrap();
/// assert_eq!(session.stage(), Stage::HexahedraBuilt);
/// assert_eq!(session.hexahedra().map(<[_]>::len), Some(3));
///
/// // Re-running step 1 invalidates faces and cells.
/// session.build_graph();
/// assert_eq!(session.stage(), Stage::GraphBuilt);
/// assert!(session.faces().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ReconstructionSession {
    points: PointCloud,
    config: ReconstructionConfig,
    graph: Option<AdjacencyGraph>,
    faces: Option<Vec<QuadFace>>,
    hexahedra: Option<Vec<Hexahedron>>,
}

impl ReconstructionSession {
    /// Creates a session at `Stage::Loaded`.
    pub fn new(points: PointCloud, config: ReconstructionConfig) -> Self {
        Self {
            points,
            config,
            graph: None,
            faces: None,
            hexahedra: None,
        }
    }

    /// The loaded points.
    pub fn points(&self) -> &PointCloud {
        &self.points
    }

    /// The active configuration.
    pub fn config(&self) -> &ReconstructionConfig {
        &self.config
    }

    /// Output of step 1, if current.
    pub fn graph(&self) -> Option<&AdjacencyGraph> {
        self.graph.as_ref()
    }

    /// Output of step 2, if current.
    pub fn faces(&self) -> Option<&[QuadFace]> {
        self.faces.as_deref()
    }

    /// Output of step 3, if current.
    pub fn hexahedra(&self) -> Option<&[Hexahedron]> {
        self.hexahedra.as_deref()
    }

    /// Furthest completed stage.
    pub fn stage(&self) -> Stage {
        if self.hexahedra.is_some() {
            Stage::HexahedraBuilt
        } else if self.faces.is_some() {
            Stage::FacesFound
        } else if self.graph.is_some() {
            Stage::GraphBuilt
        } else {
            Stage::Loaded
        }
    }

    /// The stage the next step would produce, or `None` when complete.
    pub fn next_stage(&self) -> Option<Stage> {
        self.stage().next()
    }

    /// Discards every derived artifact.
    pub fn reset(&mut self) {
        self.graph = None;
        self.faces = None;
        self.hexahedra = None;
        info!(points = self.points.len(), "session reset");
    }

    /// Replaces the point cloud and resets.
    pub fn load_points(&mut self, points: PointCloud) {
        self.points = points;
        self.reset();
    }

    /// Replaces the configuration and resets, since every artifact depends
    /// on it.
    pub fn set_config(&mut self, config: ReconstructionConfig) {
        self.config = config;
        self.reset();
    }

    /// Step 1: builds the adjacency graph, discarding faces and cells.
    pub fn build_graph(&mut self) -> &AdjacencyGraph {
        let graph = build_adjacency_graph(&self.points, &self.config);
        info!(edges = graph.edge_count(), "adjacency graph built");
        self.faces = None;
        self.hexahedra = None;
        self.graph.insert(graph)
    }

    /// Step 2: extracts faces from the current graph, discarding cells.
    ///
    /// # Errors
    /// Returns `StageNotReady` if step 1 has not run.
    pub fn find_faces(&mut self) -> ReconstructionResult<&[QuadFace]> {
        let Some(graph) = self.graph.as_ref() else {
            return Err(self.not_ready(Stage::FacesFound));
        };
        let faces = extract_faces(&self.points, graph, &self.config);
        info!(faces = faces.len(), "faces found");
        self.hexahedra = None;
        Ok(self.faces.insert(faces).as_slice())
    }

    /// Step 3: assembles hexahedra from the current faces.
    ///
    /// # Errors
    /// Returns `StageNotReady` if step 2 has not run.
    pub fn build_hexahedra(&mut self) -> ReconstructionResult<&[Hexahedron]> {
        let (Some(graph), Some(faces)) = (self.graph.as_ref(), self.faces.as_ref()) else {
            return Err(self.not_ready(Stage::HexahedraBuilt));
        };
        let hexahedra = assemble_hexahedra(faces, graph);
        info!(hexahedra = hexahedra.len(), "hexahedra built");
        Ok(self.hexahedra.insert(hexahedra).as_slice())
    }

    /// Runs all three steps in order.
    pub fn run_all(&mut self) -> ReconstructionResult<ReconstructionSummary> {
        self.build_graph();
        self.find_faces()?;
        self.build_hexahedra()?;
        Ok(self.summary())
    }

    /// Sizes of the current artifacts.
    pub fn summary(&self) -> ReconstructionSummary {
        ReconstructionSummary {
            stage: self.stage(),
            points: self.points.len(),
            edges: self.graph.as_ref().map_or(0, AdjacencyGraph::edge_count),
            faces: self.faces.as_ref().map_or(0, Vec::len),
            hexahedra: self.hexahedra.as_ref().map_or(0, Vec::len),
        }
    }

    fn not_ready(&self, requested: Stage) -> ReconstructionError {
        let current = self.stage();
        warn!(%requested, %current, "step requested out of order");
        ReconstructionError::StageNotReady { requested, current }
    }
}
