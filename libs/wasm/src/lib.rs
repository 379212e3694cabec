//! WASM-facing entry points for the hexahedral reconstruction pipeline.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. The viewer owns rendering and buttons; this crate owns the
//! session and hands back flat index buffers. Native tests go through the
//! `*_internal` helpers, which return Rust error types instead of `JsValue`.
//!
//! ```
//! let summary = hexmesh_wasm::reconstruct_internal(
//!     r#"[{"position":[0,0,0],"required_neighbors":3},
//!         {"position":[1,0,0],"required_neighbors":3},
//!         {"position":[1,1,0],"required_neighbors":3},
//!         {"position":[0,1,0],"required_neighbors":3}]"#,
//! )
//! .unwrap();
//! assert_eq!(summary.faces, 1);
//! ```

use config::constants::{COPLANARITY_TOLERANCE, DIAGONAL_RATIO};
use hexmesh::{PointCloud, ReconstructionConfig, ReconstructionError, ReconstructionSession, ReconstructionSummary};
use thiserror::Error;
use wasm_bindgen::prelude::*;

mod handle;

pub use handle::ReconstructionHandle;

/// Errors surfaced by the host-facing helpers.
#[derive(Debug, Error)]
pub enum HandleError {
    /// The point list is not valid JSON of the expected shape.
    #[error("Invalid point JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The core rejected the input or the step order.
    #[error(transparent)]
    Reconstruction(#[from] ReconstructionError),
}

/// Converts any displayable error into a JavaScript error value.
pub(crate) fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "hexmesh-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the default coplanarity tolerance, for viewer controls.
///
/// # Examples
/// ```
/// assert!(hexmesh_wasm::default_coplanarity_tolerance() > 0.0);
/// ```
#[wasm_bindgen]
pub fn default_coplanarity_tolerance() -> f64 {
    COPLANARITY_TOLERANCE
}

/// Returns the default diagonal ratio, for viewer controls.
///
/// # Examples
/// ```
/// assert!(hexmesh_wasm::default_diagonal_ratio() > 1.0);
/// ```
#[wasm_bindgen]
pub fn default_diagonal_ratio() -> f64 {
    DIAGONAL_RATIO
}

/// Runs all three steps on a JSON point list and returns the summary as
/// JSON.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when the point list cannot be parsed.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const summary = JSON.parse(reconstruct(JSON.stringify(points)));
/// // console.log(summary.hexahedra);
/// ```
#[wasm_bindgen]
pub fn reconstruct(points_json: &str) -> Result<String, JsValue> {
    let summary = reconstruct_internal(points_json).map_err(to_js_error)?;
    serde_json::to_string(&summary).map_err(to_js_error)
}

/// Host-only helper behind `reconstruct`.
pub fn reconstruct_internal(points_json: &str) -> Result<ReconstructionSummary, HandleError> {
    let points: PointCloud = serde_json::from_str(points_json)?;
    let mut session = ReconstructionSession::new(points, ReconstructionConfig::default());
    Ok(session.run_all()?)
}
