//! # Configuration Constants
//!
//! Centralized constants for the face-set import pipeline. Clip codes, polygon
//! bounds, material defaults and safety limits are defined here.
//!
//! ## Categories
//!
//! - **Clipping**: Per-vertex clip codes and clipped polygon bounds
//! - **Materials**: Neutral material and the hardness to shininess mapping
//! - **Limits**: Maximum values for safety bounds
//! - **Layers**: Visibility layer masks

// =============================================================================
// CLIPPING CONSTANTS
// =============================================================================

/// Clip code of a vertex lying in front of the near plane.
///
/// Codes are signed so that the sum over a triangle tells whether two clipped
/// vertices fall on the same plane or on opposite planes.
///
/// # Example
///
/// ```rust
/// use config::constants::{CLIPPED_BY_FAR, CLIPPED_BY_NEAR};
///
/// // one vertex clipped by each plane sums to zero
/// assert_eq!(CLIPPED_BY_NEAR + CLIPPED_BY_FAR, 0);
/// ```
pub const CLIPPED_BY_NEAR: i32 = -1;

/// Clip code of a vertex lying between the near and far planes.
pub const NOT_CLIPPED: i32 = 0;

/// Clip code of a vertex lying behind the far plane.
pub const CLIPPED_BY_FAR: i32 = 1;

/// Number of corners of a source triangle.
pub const VERTICES_PER_TRIANGLE: usize = 3;

/// Maximum number of triangles a single clipped triangle can fan into.
///
/// Reached when two vertices are clipped by opposite planes (pentagon).
pub const MAX_FAN_TRIANGLES: usize = 3;

/// Maximum number of points in a clipped polygon.
///
/// A fan of `n` triangles always has `n + 2` points.
///
/// # Example
///
/// ```rust
/// use config::constants::{MAX_CLIPPED_POINTS, MAX_FAN_TRIANGLES};
///
/// assert_eq!(MAX_CLIPPED_POINTS, MAX_FAN_TRIANGLES + 2);
/// ```
pub const MAX_CLIPPED_POINTS: usize = MAX_FAN_TRIANGLES + 2;

// =============================================================================
// MATERIAL CONSTANTS
// =============================================================================

/// Diffuse color of the neutral material (light gray).
///
/// RGBA values in range [0.0, 1.0].
pub const DEFAULT_DIFFUSE: [f32; 4] = [0.8, 0.8, 0.8, 1.0];

/// Specular color of the neutral material.
pub const DEFAULT_SPECULAR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Ambient color of the neutral material.
pub const DEFAULT_AMBIENT: [f32; 4] = [0.2, 0.2, 0.2, 1.0];

/// Emission color of the neutral material.
pub const DEFAULT_EMISSION: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Shininess of the neutral material.
pub const DEFAULT_SHININESS: f32 = 0.0;

/// Divisor applied to `hardness + 1` when deriving shininess.
///
/// Render hardness lives in [1, 511]; shininess lives in [0, 128].
pub const SHININESS_DIVISOR: f32 = 4.0;

/// Upper bound for derived shininess.
pub const MAX_SHININESS: f32 = 128.0;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of triangles kept for a single mesh.
///
/// Safety limit to prevent memory exhaustion from extremely complex models.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_TRIANGLES;
///
/// let triangle_count = 1000;
/// assert!(triangle_count < MAX_TRIANGLES);
/// ```
pub const MAX_TRIANGLES: usize = 10_000_000;

/// Largest triangle count whose corners still fit `u32` indices.
///
/// Any configured limit is capped to this value.
pub const MAX_INDEXED_TRIANGLES: usize = u32::MAX as usize / VERTICES_PER_TRIANGLE;

// =============================================================================
// LAYER CONSTANTS
// =============================================================================

/// Layer mask with every visibility layer enabled.
pub const ALL_LAYERS: u32 = u32::MAX;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Converts a render hardness value to a material shininess.
///
/// Implements `min((hardness + 1) / 4, 128)` in floating point, so every
/// `i32` is accepted.
///
/// # Example
///
/// ```rust
/// use config::constants::{hardness_to_shininess, MAX_SHININESS};
///
/// assert_eq!(hardness_to_shininess(49), 12.5);
/// assert_eq!(hardness_to_shininess(511), MAX_SHININESS);
/// ```
#[inline]
pub fn hardness_to_shininess(hardness: i32) -> f32 {
    let shininess = (hardness as f32 + 1.0) / SHININESS_DIVISOR;
    shininess.min(MAX_SHININESS)
}
