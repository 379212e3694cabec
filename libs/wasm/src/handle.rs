//! # Reconstruction Handle
//!
//! WASM-friendly wrapper around a `ReconstructionSession`. Each viewer
//! button maps to one method; buffers come back flat for direct upload.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! const handle = ReconstructionHandle.stacked_block();
//!
//! handle.build_graph();
//! const edges = handle.edge_indices();        // Uint32Array, pairs
//! handle.find_faces();
//! const quads = handle.face_indices();        // Uint32Array, 4 per face
//! handle.build_hexahedra();
//! const cells = handle.hexahedron_indices();  // Uint32Array, 8 per cell
//!
//! const geometry = new THREE.BufferGeometry();
//! geometry.setAttribute('position', new THREE.BufferAttribute(handle.positions(), 3));
//! ```

use hexmesh::{fixtures, PointCloud, ReconstructionConfig, ReconstructionSession};
use wasm_bindgen::prelude::*;

use crate::{to_js_error, HandleError};

/// A reconstruction session that can be driven from JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct ReconstructionHandle {
    session: ReconstructionSession,
}

#[wasm_bindgen]
impl ReconstructionHandle {
    /// Creates a handle from flat `[x, y, z, ...]` coordinates and one
    /// required neighbor count per point.
    #[wasm_bindgen(constructor)]
    pub fn new(coordinates: &[f64], required_neighbors: &[u32]) -> Result<ReconstructionHandle, JsValue> {
        Self::from_buffers_internal(coordinates, required_neighbors).map_err(to_js_error)
    }

    /// Creates a handle from a JSON array of
    /// `{ "position": [x, y, z], "required_neighbors": k }` objects.
    pub fn from_json(points_json: &str) -> Result<ReconstructionHandle, JsValue> {
        Self::from_json_internal(points_json).map_err(to_js_error)
    }

    /// Creates a handle preloaded with the three-cube demo block.
    pub fn stacked_block() -> ReconstructionHandle {
        Self::from_points(fixtures::stacked_block())
    }

    /// Returns the number of points.
    #[wasm_bindgen(getter)]
    pub fn point_count(&self) -> u32 {
        to_u32(self.session.points().len())
    }

    /// Returns the furthest completed stage as text.
    pub fn stage(&self) -> String {
        self.session.stage().to_string()
    }

    /// Returns true if step 2 may run.
    pub fn can_find_faces(&self) -> bool {
        self.session.graph().is_some()
    }

    /// Returns true if step 3 may run.
    pub fn can_build_hexahedra(&self) -> bool {
        self.session.faces().is_some()
    }

    /// Clears every derived artifact.
    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Replaces the predicate thresholds and resets.
    pub fn set_thresholds(&mut self, coplanarity_tolerance: f64, diagonal_ratio: f64) -> Result<(), JsValue> {
        let config = ReconstructionConfig::new(coplanarity_tolerance, diagonal_ratio).map_err(to_js_error)?;
        self.session.set_config(config);
        Ok(())
    }

    /// Step 1. Returns the number of directed edges.
    pub fn build_graph(&mut self) -> u32 {
        to_u32(self.session.build_graph().edge_count())
    }

    /// Step 2. Returns the number of faces.
    pub fn find_faces(&mut self) -> Result<u32, JsValue> {
        self.session
            .find_faces()
            .map(|faces| to_u32(faces.len()))
            .map_err(to_js_error)
    }

    /// Step 3. Returns the number of hexahedra.
    pub fn build_hexahedra(&mut self) -> Result<u32, JsValue> {
        self.session
            .build_hexahedra()
            .map(|cells| to_u32(cells.len()))
            .map_err(to_js_error)
    }

    /// Point positions as a Float32Array.
    ///
    /// Format: [x, y, z, x, y, z, ...]
    pub fn positions(&self) -> Vec<f32> {
        self.session.points().positions_f32()
    }

    /// Directed graph edges as a Uint32Array of `[from, to]` pairs; empty
    /// before step 1.
    pub fn edge_indices(&self) -> Vec<u32> {
        self.session
            .graph()
            .map(|graph| graph.edges().flat_map(|(a, b)| [to_u32(a), to_u32(b)]).collect())
            .unwrap_or_default()
    }

    /// Faces as a Uint32Array, four indices per face in cycle order.
    pub fn face_indices(&self) -> Vec<u32> {
        self.session
            .faces()
            .map(|faces| faces.iter().flat_map(|f| f.vertices().map(to_u32)).collect())
            .unwrap_or_default()
    }

    /// Hexahedra as a Uint32Array, eight indices per cell in slot order.
    pub fn hexahedron_indices(&self) -> Vec<u32> {
        self.session
            .hexahedra()
            .map(|cells| cells.iter().flat_map(|c| c.vertices().map(to_u32)).collect())
            .unwrap_or_default()
    }

    /// Current artifact counts as a JSON string.
    pub fn summary_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.summary()).map_err(to_js_error)
    }
}

impl ReconstructionHandle {
    /// Wraps a point cloud in a fresh session with default thresholds.
    pub fn from_points(points: PointCloud) -> Self {
        Self {
            session: ReconstructionSession::new(points, ReconstructionConfig::default()),
        }
    }

    /// Host-only helper behind the constructor.
    pub fn from_buffers_internal(coordinates: &[f64], required_neighbors: &[u32]) -> Result<Self, HandleError> {
        Ok(Self::from_points(PointCloud::from_flat(coordinates, required_neighbors)?))
    }

    /// Host-only helper behind `from_json`.
    pub fn from_json_internal(points_json: &str) -> Result<Self, HandleError> {
        Ok(Self::from_points(serde_json::from_str(points_json)?))
    }

    /// Host-only access to the underlying session.
    pub fn session(&self) -> &ReconstructionSession {
        &self.session
    }

    /// Host-only mutable access to the underlying session.
    pub fn session_mut(&mut self) -> &mut ReconstructionSession {
        &mut self.session
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
