//! # Config Crate
//!
//! Centralized configuration constants for the hexahedral reconstruction
//! pipeline. All geometric thresholds and tunable parameters are defined here
//! so the graph builder, face extractor and cell assembler agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{COPLANARITY_TOLERANCE, DIAGONAL_RATIO};
//!
//! // Scalar triple product of four points on the z = 0 plane
//! let volume: f64 = 0.0;
//! assert!(volume.abs() < COPLANARITY_TOLERANCE);
//!
//! // Unit square: squared diagonal 2.0 against squared edge 1.0
//! assert!(2.0 > 1.0 * DIAGONAL_RATIO);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Snapshots**: `GlobalConfig::new` rejects unusable values
//! - **Browser-Safe**: No platform-specific values

pub mod constants;

#[cfg(test)]
mod tests;
