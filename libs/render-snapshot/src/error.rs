//! # Snapshot Errors
//!
//! Error types for malformed scene snapshots.

use thiserror::Error;

/// Errors found while checking a snapshot before import.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SnapshotError {
    /// Near and far depths do not describe a visible range.
    #[error("Invalid frustum: near {near} must be <= 0 and nearer than far {far}")]
    InvalidFrustum { near: f64, far: f64 },

    /// A face refers to a vertex past the end of its mesh.
    #[error("Mesh '{mesh}' face {face}: vertex index {index} out of range (mesh has {vertex_count} vertices)")]
    VertexOutOfRange {
        mesh: String,
        face: usize,
        index: u32,
        vertex_count: usize,
    },

    /// A face refers to a material past the end of the material table.
    #[error("Mesh '{mesh}' face {face}: material {index} out of range (scene has {material_count} materials)")]
    MaterialOutOfRange {
        mesh: String,
        face: usize,
        index: u32,
        material_count: usize,
    },
}

// =============================================================================
// TESTS
// =============================================================================
