//! # Import Errors
//!
//! Error types for the face-set import.

use render_snapshot::SnapshotError;
use thiserror::Error;

/// Errors that abort an import.
///
/// Objects without faces, or whose faces are all clipped away, are skipped
/// and never reported here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImportError {
    /// Malformed snapshot input.
    #[error("Invalid snapshot: {0}")]
    Snapshot(#[from] SnapshotError),

    /// A mesh keeps more triangles than the configured limit.
    #[error("Too many triangles in '{mesh}': {count} (max: {max})")]
    TooManyTriangles {
        mesh: String,
        count: usize,
        max: usize,
    },
}

impl ImportError {
    /// Creates a too many triangles error.
    pub fn too_many_triangles(mesh: impl Into<String>, count: usize, max: usize) -> Self {
        Self::TooManyTriangles {
            mesh: mesh.into(),
            count,
            max,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
